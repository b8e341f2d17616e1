//! Quote-aware row tokenizer.

use crate::error::{Error, Result};

/// Tokenizer state for one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Outside any quoted segment. Separators end fields here.
    Unquoted,
    /// Inside a quoted segment. Separators are literal here.
    Quoted,
}

/// Split one line of text into its fields.
///
/// A quote character opens a quoted segment in which the separator is
/// literal; two consecutive quote characters inside a quoted segment emit
/// one literal quote. Closing a quote does not end the field: quoted and
/// unquoted segments may concatenate within a single field, so
/// `ab"cd"ef` tokenizes to `abcdef`. Only a separator or the end of the
/// line ends a field.
///
/// Every line yields at least one field; an empty line yields exactly one
/// empty field. A quoted segment left open at the end of the line fails
/// with [`Error::UnbalancedQuote`].
pub fn tokenize(line: &str, quote: char, separator: char) -> Result<Vec<String>> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut state = State::Unquoted;
    let mut scanned = 0usize;

    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        scanned += 1;
        match state {
            State::Unquoted if ch == quote => state = State::Quoted,
            State::Unquoted if ch == separator => {
                fields.push(std::mem::take(&mut field));
            }
            State::Unquoted => field.push(ch),
            State::Quoted if ch == quote => {
                if chars.peek() == Some(&quote) {
                    field.push(quote);
                    chars.next();
                    scanned += 1;
                } else {
                    state = State::Unquoted;
                }
            }
            State::Quoted => field.push(ch),
        }
    }

    if state == State::Quoted {
        return Err(Error::UnbalancedQuote {
            line: line.to_owned(),
            position: scanned,
        });
    }

    fields.push(field);
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn csv(line: &str) -> Vec<String> {
        tokenize(line, '"', ',').unwrap()
    }

    #[test]
    fn test_plain_fields() {
        assert_eq!(csv("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_quoted_separator() {
        assert_eq!(csv("a,\"b,c\",d"), vec!["a", "b,c", "d"]);
    }

    #[test]
    fn test_escaped_quote() {
        assert_eq!(csv("a,\"b\"\"c\",d"), vec!["a", "b\"c", "d"]);
    }

    #[test]
    fn test_empty_line_yields_one_empty_field() {
        assert_eq!(csv(""), vec![""]);
    }

    #[test]
    fn test_trailing_separator_yields_empty_field() {
        assert_eq!(csv("a,"), vec!["a", ""]);
        assert_eq!(csv(","), vec!["", ""]);
    }

    #[test]
    fn test_quoted_empty_field() {
        assert_eq!(csv("\"\",b"), vec!["", "b"]);
    }

    #[test]
    fn test_quoted_and_unquoted_segments_concatenate() {
        assert_eq!(csv("ab\"cd\"ef"), vec!["abcdef"]);
        // A separator after a closed quote still ends the field.
        assert_eq!(csv("\"a\"b,c"), vec!["ab", "c"]);
    }

    #[test]
    fn test_unbalanced_quote() {
        let err = tokenize("a,\"unterminated", '"', ',').unwrap_err();
        match err {
            Error::UnbalancedQuote { line, position } => {
                assert_eq!(line, "a,\"unterminated");
                assert_eq!(position, line.chars().count());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_custom_quote_and_separator() {
        assert_eq!(
            tokenize("a;'b;c';d", '\'', ';').unwrap(),
            vec!["a", "b;c", "d"]
        );
    }

    #[test]
    fn test_doubled_quote_at_end_of_quoted_segment() {
        // "a""" is: open, a, escaped quote, close.
        assert_eq!(csv("\"a\"\"\""), vec!["a\""]);
    }
}
