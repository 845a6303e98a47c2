//! Plain-text rendering of structure nodes
//!
//! Sibling sequences are walked with a single cursor. Every command receives
//! that cursor, so an accent can take its base from the nodes after it and the
//! walk continues after whatever it consumed.

use super::accents::resolve;
use super::node::BibStruct;
use crate::utils::loss::Loss;

/// Render one node on its own
///
/// A command rendered this way has no siblings to draw an accent base from.
pub fn render(node: &BibStruct, loss: &mut Loss) -> String {
    match node {
        BibStruct::Command(_) => resolve(node, &mut std::iter::empty::<&BibStruct>(), loss),
        BibStruct::Space => " ".to_string(),
        BibStruct::Text(text) => text.clone(),
        BibStruct::Group(children) => render_all(children, loss),
    }
}

/// Render a sibling sequence
pub fn render_all(nodes: &[BibStruct], loss: &mut Loss) -> String {
    let mut output = String::new();
    let mut cursor = nodes.iter();

    while let Some(node) = cursor.next() {
        match node {
            BibStruct::Command(_) => output.push_str(&resolve(node, &mut cursor, loss)),
            BibStruct::Space => output.push(' '),
            BibStruct::Text(text) => output.push_str(text),
            BibStruct::Group(children) => output.push_str(&render_all(children, loss)),
        }
    }

    output
}
