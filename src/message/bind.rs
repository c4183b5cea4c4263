//! Binding of placeholders to argument values.
//!
//! The calling convention does not separate formatting arguments from an
//! associated error object, so the binder decides by count: an excess of
//! exactly one argument whose trailing value is an error object means the
//! error travels alongside the arguments and is extracted. Any other
//! mismatch is reported as-is.

use std::error::Error as StdError;

use super::token::{placeholder_count, Token};
use super::value::PayloadValue;

/// Outcome of matching a token sequence against the supplied arguments.
#[derive(Debug)]
pub enum Binding<'a> {
    /// Argument count equals the placeholder count; nothing extracted.
    Matched(&'a [PayloadValue]),
    /// The trailing argument was recognized as an error object and removed;
    /// `arguments` has exactly one element per placeholder.
    Extracted {
        arguments: &'a [PayloadValue],
        error: &'a (dyn StdError + Send + Sync + 'static),
    },
    /// More arguments than placeholders, and extraction did not apply.
    TooMany { given: usize, used: usize },
    /// Fewer arguments than placeholders.
    TooFew { available: usize, missing: usize },
}

/// Binds arguments to placeholders, extracting a trailing error object when
/// the excess is exactly one.
///
/// Extraction never applies to any other excess: with two or more surplus
/// arguments the outcome is `TooMany` even if the trailing value is an error
/// object, and with matching counts an error object is consumed as an
/// ordinary formatting argument.
pub fn bind<'a>(tokens: &[Token], arguments: &'a [PayloadValue]) -> Binding<'a> {
    let placeholders = placeholder_count(tokens);

    if arguments.len() == placeholders + 1 {
        if let Some((last, rest)) = arguments.split_last() {
            if let Some(error) = last.as_error() {
                return Binding::Extracted {
                    arguments: rest,
                    error,
                };
            }
        }
    }

    bind_exact(tokens, arguments)
}

/// Binds without the trailing-error heuristic, for callers that pass the
/// error object through an explicit field instead of the argument list.
pub fn bind_exact<'a>(tokens: &[Token], arguments: &'a [PayloadValue]) -> Binding<'a> {
    let placeholders = placeholder_count(tokens);
    let supplied = arguments.len();

    if supplied > placeholders {
        Binding::TooMany {
            given: supplied,
            used: placeholders,
        }
    } else if supplied < placeholders {
        Binding::TooFew {
            available: supplied,
            missing: placeholders - supplied,
        }
    } else {
        Binding::Matched(arguments)
    }
}
