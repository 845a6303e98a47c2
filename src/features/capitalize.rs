//! Title and noun capitalization
//!
//! A small state machine over "are we at the beginning of a sentence". A
//! period always opens a new sentence. In noun mode the text is lowercased
//! first and a hyphen also opens a new word, which turns `JOHN-PAUL` into
//! `John-Paul`. A space never opens one.

/// Rewrite `text` with sentence capitalization
///
/// The buffer is replaced with a rebuilt string, since a case change can
/// alter the UTF-8 length of a character.
///
/// * `is_noun` - lowercase everything first and capitalize after hyphens
/// * `at_start` - whether `text` begins a sentence
pub fn capitalize(text: &mut String, is_noun: bool, at_start: bool) {
    if text.is_empty() {
        return;
    }

    if is_noun {
        *text = text.to_lowercase();
    }

    let mut begin_of_sentence = at_start;
    let mut output = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            ' ' => {}
            '-' => {
                if is_noun {
                    begin_of_sentence = true;
                }
            }
            '.' => begin_of_sentence = true,
            c if begin_of_sentence && c.is_alphabetic() => {
                output.extend(c.to_uppercase());
                begin_of_sentence = false;
                continue;
            }
            _ => {}
        }
        output.push(c);
    }

    *text = output;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn capitalized(input: &str, is_noun: bool, at_start: bool) -> String {
        let mut text = input.to_string();
        capitalize(&mut text, is_noun, at_start);
        text
    }

    #[rstest]
    #[case("hello world.", false, true, "Hello world.")]
    #[case("hello world.", false, false, "hello world.")]
    #[case("JOHN-PAUL SMITH", true, true, "John-Paul smith")]
    #[case("jean-paul", true, true, "Jean-Paul")]
    #[case("first. second", false, true, "First. Second")]
    #[case("first. second", false, false, "first. Second")]
    #[case("jean-luc picard", false, true, "Jean-luc picard")]
    #[case("UNIVERSITY OF GENEVA", true, true, "University of geneva")]
    #[case("\u{e9}cole normale", false, true, "\u{c9}cole normale")]
    #[case("3 body problem", false, true, "3 Body problem")]
    #[case("", true, true, "")]
    fn test_capitalize(
        #[case] input: &str,
        #[case] is_noun: bool,
        #[case] at_start: bool,
        #[case] expected: &str,
    ) {
        assert_eq!(capitalized(input, is_noun, at_start), expected);
    }

    #[rstest]
    #[case("hello world.")]
    #[case("a study. of things. and more")]
    #[case("Already Capitalized Title")]
    fn test_title_mode_is_idempotent(#[case] input: &str) {
        let once = capitalized(input, false, true);
        let twice = capitalized(&once, false, true);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_title_mode_keeps_existing_capitals() {
        assert_eq!(
            capitalized("the DNA of Things", false, true),
            "The DNA of Things"
        );
    }
}
