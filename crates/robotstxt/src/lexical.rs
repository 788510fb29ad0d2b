//! Character classifiers and lexical primitives.
//!
//! ```text
//! EOL       = CR LF | CR | LF
//! LWS       = [EOL] 1*(SP | HT)      ; strict
//!           | [EOL] *(SP | HT)       ; flexible
//! BOM       = %xFEFF
//! anychar   = <any character except CTL>
//! valuechar = <any character except ("#" | CTL)>
//! ```

use chumsky::prelude::*;

use crate::config::Whitespace;
use crate::grammar::Rule;

/// Returns true for C0 controls (U+0000..=U+001F) and DEL.
pub const fn is_control(c: char) -> bool {
    matches!(c, '\u{0}'..='\u{1F}' | '\u{7F}')
}

/// Returns true only for the byte-order mark U+FEFF.
pub const fn is_byte_order_mark(c: char) -> bool {
    c == '\u{FEFF}'
}

/// Returns true for characters allowed in a comment body (`#` included).
pub const fn is_line_char(c: char) -> bool {
    !is_control(c)
}

/// Returns true for characters allowed in a directive value.
///
/// `#` always starts a comment, so it is never part of a value.
pub const fn is_value_char(c: char) -> bool {
    !is_control(c) && c != '#'
}

/// Matches `"\r\n"`, `"\r"` or `"\n"`, trying the two-character form first.
pub fn end_of_line() -> Rule<String> {
    choice((just("\r\n"), just("\r"), just("\n")))
        .map(|eol: &str| eol.to_string())
        .boxed()
}

/// Matches an optional line ending followed by a space/tab run.
///
/// In [`Whitespace::Strict`] mode the run must not be empty. The value is the
/// matched text.
pub fn linear_whitespace(mode: Whitespace) -> Rule<String> {
    end_of_line()
        .or_not()
        .then(one_of(" \t").repeated().at_least(mode.min_run()))
        .map(|(eol, run): (Option<String>, Vec<char>)| {
            let mut text = eol.unwrap_or_default();
            text.extend(run);
            text
        })
        .boxed()
}

/// Matches one byte-order mark.
pub fn byte_order_mark() -> Rule<char> {
    filter(|c: &char| is_byte_order_mark(*c)).boxed()
}

/// Matches one comment-body character.
pub fn line_char() -> Rule<char> {
    filter(|c: &char| is_line_char(*c)).boxed()
}

/// Matches one value character.
pub fn value_char() -> Rule<char> {
    filter(|c: &char| is_value_char(*c)).boxed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{complete, run};

    #[test]
    fn control_characters() {
        for c in ['\u{0}', '\u{10}', '\u{1F}', '\u{7F}', '\t', '\r', '\n'] {
            assert!(is_control(c), "{c:?} should be a control");
        }
        for c in ['\u{20}', '\u{80}', 'a', 'A', 'z', 'Z', '#'] {
            assert!(!is_control(c), "{c:?} should not be a control");
        }
    }

    #[test]
    fn byte_order_mark_only() {
        assert!(is_byte_order_mark('\u{FEFF}'));
        for c in ['\u{0}', '\u{1F}', 'a', 'A', 'z', 'Z', '#'] {
            assert!(!is_byte_order_mark(c));
        }
    }

    #[test]
    fn line_and_value_characters() {
        for c in ['\u{20}', '\u{80}', 'a', 'A', 'z', 'Z'] {
            assert!(is_line_char(c));
            assert!(is_value_char(c));
        }
        assert!(is_line_char('#'));
        assert!(!is_value_char('#'));
        for c in ['\u{0}', '\u{10}', '\u{1F}', '\u{7F}', '\r', '\n'] {
            assert!(!is_line_char(c));
            assert!(!is_value_char(c));
        }
    }

    #[test]
    fn end_of_line_forms() {
        assert_eq!(run(&end_of_line(), "\r").unwrap().value, "\r");
        assert_eq!(run(&end_of_line(), "\n").unwrap().value, "\n");

        let crlf = run(&complete(end_of_line()), "\r\n").unwrap();
        assert_eq!(crlf.value, "\r\n");
        assert_eq!(crlf.consumed, 2);

        assert!(run(&end_of_line(), "").is_err());
        assert!(run(&end_of_line(), "a").is_err());
    }

    #[test]
    fn flexible_linear_whitespace() {
        let lws = complete(linear_whitespace(Whitespace::Flexible));
        for text in ["", "\n", "\n ", "\n  \t", "\r ", "\r\n ", " \t "] {
            assert_eq!(run(&lws, text).unwrap().value, text);
        }
        assert!(run(&lws, "a").is_err());
    }

    #[test]
    fn strict_linear_whitespace() {
        let lws = complete(linear_whitespace(Whitespace::Strict));
        for text in ["\n ", "\n  \t", "\r ", "\r\n ", "\t"] {
            assert_eq!(run(&lws, text).unwrap().value, text);
        }
        assert!(run(&linear_whitespace(Whitespace::Strict), "").is_err());
        assert!(run(&linear_whitespace(Whitespace::Strict), "\n").is_err());
    }

    #[test]
    fn single_character_rules() {
        assert_eq!(run(&byte_order_mark(), "\u{FEFF}").unwrap().value, '\u{FEFF}');
        assert!(run(&byte_order_mark(), "").is_err());

        assert_eq!(run(&line_char(), "#").unwrap().value, '#');
        assert!(run(&line_char(), "\n").is_err());

        assert_eq!(run(&value_char(), "a").unwrap().value, 'a');
        assert!(run(&value_char(), "#").is_err());
        assert!(run(&value_char(), "\u{7F}").is_err());
    }
}
