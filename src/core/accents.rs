//! Accent and symbol command resolution
//!
//! Turns one command node into literal text. Accent commands take their base
//! letter from the siblings that follow them, so the caller hands over its
//! cursor and sees it advance:
//!
//! ```text
//! \"  ·  u  ller        (command, space, text, ...)
//! ^^^^^^^^^             consumed by the accent -> "ü"
//!             ^^^^^     left for the caller
//! ```
//!
//! Resolution never fails. Anything without a mapping degrades to readable
//! text and is counted in the [`Loss`].

use super::node::BibStruct;
use super::render::render;
use crate::data::accents::DiacriticClass;
use crate::data::symbols::lookup_symbol;
use crate::utils::loss::Loss;

/// Resolve a command node, consuming its accent base from `siblings` if needed
pub fn resolve<'a, I>(node: &BibStruct, siblings: &mut I, loss: &mut Loss) -> String
where
    I: Iterator<Item = &'a BibStruct>,
{
    debug_assert!(
        node.command_name().is_some(),
        "resolve called on a non-command node: {:?}",
        node
    );
    match node.command_name() {
        Some(name) => resolve_command(name, siblings, loss),
        None => render(node, loss),
    }
}

/// Resolve a command by name (without the backslash)
pub fn resolve_command<'a, I>(name: &str, siblings: &mut I, loss: &mut Loss) -> String
where
    I: Iterator<Item = &'a BibStruct>,
{
    debug_assert!(!name.is_empty(), "command name must not be empty");

    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        // Dotless i, so that \'\i gives í
        if c == 'i' {
            return "i".to_string();
        }

        if let Some(class) = DiacriticClass::from_trigger(c) {
            return apply_accent(class, siblings, loss);
        }

        if !c.is_alphanumeric() {
            return name.to_string();
        }
    }

    if let Some(symbol) = lookup_symbol(name) {
        return symbol.to_string();
    }

    loss.mark();
    tracing::warn!(command = %name, "unable to convert `\\{}`", name);
    name.to_string()
}

fn apply_accent<'a, I>(class: DiacriticClass, siblings: &mut I, loss: &mut Loss) -> String
where
    I: Iterator<Item = &'a BibStruct>,
{
    let base = take_base(siblings, loss);
    let mut chars = base.chars();
    let first = chars.next();

    match (class.apply(first), first) {
        (Some(accented), Some(_)) => {
            let mut text = String::with_capacity(base.len() + 1);
            text.push(accented);
            text.push_str(chars.as_str());
            text
        }
        (Some(glyph), None) => glyph.to_string(),
        (None, _) => {
            loss.mark();
            base
        }
    }
}

/// Consume one significant sibling: spaces are dropped, the first other node
/// is rendered and ends the lookahead. Empty when the siblings run out.
fn take_base<'a, I>(siblings: &mut I, loss: &mut Loss) -> String
where
    I: Iterator<Item = &'a BibStruct>,
{
    siblings
        .find(|node| !node.is_space())
        .map(|node| render(node, loss))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::symbols::SYMBOL_COMMANDS;
    use pretty_assertions::assert_eq;

    fn resolve_with(name: &str, siblings: &[BibStruct]) -> (String, Loss) {
        let mut loss = Loss::new();
        let mut iter = siblings.iter();
        let text = resolve(&BibStruct::command(name), &mut iter, &mut loss);
        (text, loss)
    }

    #[test]
    fn test_every_table_letter_after_space() {
        for class in DiacriticClass::ALL {
            for (&base, &accented) in class.table().entries() {
                let siblings = [BibStruct::Space, BibStruct::text(base.to_string())];
                let (text, loss) = resolve_with(&class.trigger().to_string(), &siblings);
                assert_eq!(text, accented.to_string(), "{:?} on {}", class, base);
                assert!(!loss.is_lossy());
            }
        }
    }

    #[test]
    fn test_unmapped_base_degrades() {
        let (text, loss) = resolve_with("c", &[BibStruct::text("s")]);
        assert_eq!(text, "s");
        assert!(loss.is_lossy());

        let (text, loss) = resolve_with("~", &[BibStruct::text("e")]);
        assert_eq!(text, "e");
        assert_eq!(loss.count(), 1);
    }

    #[test]
    fn test_dotless_i_never_consumes() {
        let siblings = [BibStruct::Space, BibStruct::text("x")];
        let mut iter = siblings.iter();
        let mut loss = Loss::new();
        let text = resolve(&BibStruct::command("i"), &mut iter, &mut loss);
        assert_eq!(text, "i");
        assert_eq!(iter.as_slice().len(), 2);
        assert!(!loss.is_lossy());
    }

    #[test]
    fn test_empty_cursor_default_glyphs() {
        assert_eq!(resolve_with("'", &[]), ("´".to_string(), Loss::new()));
        assert_eq!(resolve_with("\"", &[]), ("¨".to_string(), Loss::new()));

        for trigger in ["`", "^", "c", "~"] {
            let (text, loss) = resolve_with(trigger, &[]);
            assert_eq!(text, "");
            assert!(loss.is_lossy(), "trigger {}", trigger);
        }
    }

    #[test]
    fn test_only_spaces_left() {
        let (text, loss) = resolve_with("'", &[BibStruct::Space, BibStruct::Space]);
        assert_eq!(text, "´");
        assert!(!loss.is_lossy());
    }

    #[test]
    fn test_lookahead_consumes_space_and_letter_only() {
        let siblings = [
            BibStruct::Space,
            BibStruct::text("o"),
            BibStruct::Space,
            BibStruct::text("rest"),
        ];
        let mut iter = siblings.iter();
        let mut loss = Loss::new();
        let text = resolve(&BibStruct::command("^"), &mut iter, &mut loss);
        assert_eq!(text, "ô");
        assert_eq!(iter.as_slice(), &siblings[2..]);
    }

    #[test]
    fn test_base_from_group() {
        let siblings = [BibStruct::Group(vec![BibStruct::text("u")])];
        assert_eq!(resolve_with("\"", &siblings).0, "ü");

        // {} gives an empty base
        let (text, loss) = resolve_with("'", &[BibStruct::Group(vec![])]);
        assert_eq!(text, "´");
        assert!(!loss.is_lossy());
    }

    #[test]
    fn test_base_from_dotless_i_command() {
        let (text, loss) = resolve_with("'", &[BibStruct::command("i")]);
        assert_eq!(text, "í");
        assert!(!loss.is_lossy());
    }

    #[test]
    fn test_longer_base_keeps_remainder() {
        let (text, loss) = resolve_with("\"", &[BibStruct::text("uller")]);
        assert_eq!(text, "üller");
        assert!(!loss.is_lossy());
    }

    #[test]
    fn test_symbol_commands() {
        for (&name, &expected) in SYMBOL_COMMANDS.entries() {
            let (text, loss) = resolve_with(name, &[BibStruct::text("x")]);
            assert_eq!(text, expected, "\\{}", name);
            assert!(!loss.is_lossy());
        }
    }

    #[test]
    fn test_single_symbol_verbatim() {
        for name in ["&", "%", "$", "-", ",", "{"] {
            let (text, loss) = resolve_with(name, &[]);
            assert_eq!(text, name);
            assert!(!loss.is_lossy());
        }
    }

    #[test]
    #[tracing_test::traced_test]
    fn test_unknown_command_falls_back_to_name() {
        let (text, loss) = resolve_with("textbf", &[BibStruct::text("x")]);
        assert_eq!(text, "textbf");
        assert_eq!(loss.count(), 1);
        logs_assert(|lines: &[&str]| {
            match lines
                .iter()
                .filter(|line| line.contains("unable to convert `\\textbf`"))
                .count()
            {
                1 => Ok(()),
                n => Err(format!("expected one warning, found {}", n)),
            }
        });
    }

    #[test]
    fn test_unknown_single_letter_uses_dictionary() {
        let (text, _) = resolve_with("S", &[]);
        assert_eq!(text, "§");

        let (text, loss) = resolve_with("k", &[BibStruct::text("a")]);
        assert_eq!(text, "k");
        assert!(loss.is_lossy());
    }

    #[test]
    fn test_loss_is_sticky_across_calls() {
        let mut loss = Loss::new();
        let nodes = [BibStruct::text("z")];
        resolve(&BibStruct::command("`"), &mut nodes.iter(), &mut loss);
        resolve(&BibStruct::command("ss"), &mut std::iter::empty::<&BibStruct>(), &mut loss);
        assert!(loss.is_lossy());
        assert_eq!(loss.count(), 1);
    }
}
