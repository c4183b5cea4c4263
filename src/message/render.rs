//! Rendering of a bound token sequence into the final message text.

use super::bind::Binding;
use super::token::{Label, Token};
use super::FormatError;

/// Renders tokens with their bound arguments.
///
/// Count mismatches render as the corresponding [`FormatError`] text instead
/// of a substituted message. In annotated mode each substitution carries its
/// placeholder label; anonymous placeholders are labelled with a zero-based
/// counter that skips named ones.
pub fn render(tokens: &[Token], binding: &Binding<'_>, annotate: bool) -> String {
    let bound = match binding {
        Binding::Matched(arguments) | Binding::Extracted { arguments, .. } => *arguments,
        Binding::TooMany { given, used } => {
            return FormatError::TooManyArguments {
                given: *given,
                used: *used,
            }
            .to_string()
        }
        Binding::TooFew { available, missing } => {
            return FormatError::MissingArguments {
                available: *available,
                missing: *missing,
            }
            .to_string()
        }
    };

    let mut out = String::new();
    let mut next = 0;
    let mut anonymous = 0;

    for token in tokens {
        match token {
            Token::Literal(text) => out.push_str(text),
            Token::Placeholder(label) => {
                // Binding guarantees one bound argument per placeholder.
                let value = &bound[next];
                next += 1;
                if annotate {
                    match label {
                        Label::Named(name) => out.push_str(&format!("{{{name}:{value}}}")),
                        Label::Anonymous => {
                            out.push_str(&format!("{{{anonymous}:{value}}}"));
                            anonymous += 1;
                        }
                    }
                } else {
                    out.push_str(&format!("{{{value}}}"));
                }
            }
        }
    }

    out
}
