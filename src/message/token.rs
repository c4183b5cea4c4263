//! Pattern tokenization.
//!
//! Splits a pattern like `"Hello {name}, got {}"` into literal runs and
//! placeholder markers. Placeholders are delimited by `{` and `}`; empty
//! braces are anonymous, otherwise the enclosed text is the placeholder name.

use super::FormatError;

/// A single element of a tokenized pattern, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A run of pattern text containing no placeholder, emitted verbatim.
    Literal(String),
    /// A `{...}` substitution marker.
    Placeholder(Label),
}

/// How a placeholder is addressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    /// `{}` — displayed via a positional counter in annotated mode.
    Anonymous,
    /// `{name}` — the text found between the braces.
    Named(String),
}

/// Tokenizes a pattern into literal runs and placeholders.
///
/// The only failure mode is an opening `{` with no matching `}` before the
/// end of the pattern, which invalidates the whole pattern regardless of what
/// was already tokenized.
pub fn tokenize(pattern: &str) -> Result<Vec<Token>, FormatError> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut chars = pattern.chars();

    while let Some(ch) = chars.next() {
        if ch == '{' {
            if !literal.is_empty() {
                tokens.push(Token::Literal(std::mem::take(&mut literal)));
            }
            let name = consume_name(&mut chars).ok_or(FormatError::UnclosedBrace)?;
            let label = if name.is_empty() {
                Label::Anonymous
            } else {
                Label::Named(name)
            };
            tokens.push(Token::Placeholder(label));
        } else {
            literal.push(ch);
        }
    }

    if !literal.is_empty() {
        tokens.push(Token::Literal(literal));
    }

    Ok(tokens)
}

/// Consumes characters up to the closing `}`, returning the enclosed text.
///
/// A nested `{` or end of input means the brace was left unclosed.
fn consume_name(chars: &mut std::str::Chars<'_>) -> Option<String> {
    let mut name = String::new();
    for ch in chars.by_ref() {
        match ch {
            '}' => return Some(name),
            '{' => return None,
            _ => name.push(ch),
        }
    }
    None
}

/// Number of placeholders in a token sequence.
pub fn placeholder_count(tokens: &[Token]) -> usize {
    tokens
        .iter()
        .filter(|t| matches!(t, Token::Placeholder(_)))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pattern() {
        let tokens = tokenize("").unwrap();
        assert!(tokens.is_empty());
        assert_eq!(placeholder_count(&tokens), 0);
    }

    #[test]
    fn test_literal_only() {
        let tokens = tokenize("Hello world").unwrap();
        assert_eq!(tokens, vec![Token::Literal("Hello world".into())]);
    }

    #[test]
    fn test_named_and_anonymous() {
        let tokens = tokenize("x {} y {name}").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Literal("x ".into()),
                Token::Placeholder(Label::Anonymous),
                Token::Literal(" y ".into()),
                Token::Placeholder(Label::Named("name".into())),
            ]
        );
        assert_eq!(placeholder_count(&tokens), 2);
    }

    #[test]
    fn test_adjacent_placeholders_have_no_literal_between() {
        let tokens = tokenize("{first}{second}").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Placeholder(Label::Named("first".into())),
                Token::Placeholder(Label::Named("second".into())),
            ]
        );
    }

    #[test]
    fn test_trailing_literal_is_flushed() {
        let tokens = tokenize("{a}!").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Placeholder(Label::Named("a".into())),
                Token::Literal("!".into()),
            ]
        );
    }

    #[test]
    fn test_unclosed_brace() {
        let result = tokenize("x {a} y {b");
        assert!(matches!(result, Err(FormatError::UnclosedBrace)));
    }

    #[test]
    fn test_nested_open_brace_is_unclosed() {
        let result = tokenize("x {a{b}");
        assert!(matches!(result, Err(FormatError::UnclosedBrace)));
    }
}
