//! Parameterized message payloads.
//!
//! A [`PayloadMessage`] bundles a pattern, its arguments and an optional
//! associated error object, and renders the final text lazily on first
//! access. Rendering is total: malformed patterns and count mismatches
//! produce diagnostic text instead of failures.

mod bind;
mod error;
mod render;
mod token;
mod value;

pub use bind::{bind, bind_exact, Binding};
pub use error::FormatError;
pub use render::render;
pub use token::{placeholder_count, tokenize, Label, Token};
pub use value::PayloadValue;

use std::error::Error as StdError;
use std::sync::OnceLock;

/// An immutable, lazily rendered log message.
///
/// Constructed once per logging call; any number of instances may be
/// rendered concurrently. The rendered form is memoized behind a
/// single-assignment guard, so racing first accesses are safe.
#[derive(Debug)]
pub struct PayloadMessage {
    pattern: String,
    arguments: Vec<PayloadValue>,
    explicit_error: Option<Box<dyn StdError + Send + Sync>>,
    annotate: bool,
    rendered: OnceLock<Rendered>,
}

#[derive(Debug)]
struct Rendered {
    text: String,
    extracted: bool,
}

impl PayloadMessage {
    /// Creates a message whose trailing argument may be recognized as an
    /// associated error object under the count heuristic: extraction happens
    /// iff the argument count exceeds the placeholder count by exactly one
    /// and the trailing value is an error object.
    pub fn new(
        pattern: impl Into<String>,
        arguments: Vec<PayloadValue>,
        annotate: bool,
    ) -> Self {
        Self {
            pattern: pattern.into(),
            arguments,
            explicit_error: None,
            annotate,
            rendered: OnceLock::new(),
        }
    }

    /// Creates a message with an explicitly associated error object.
    ///
    /// The error is carried separately from the argument list and the
    /// trailing-argument heuristic is disabled.
    pub fn with_error(
        pattern: impl Into<String>,
        arguments: Vec<PayloadValue>,
        error: impl StdError + Send + Sync + 'static,
        annotate: bool,
    ) -> Self {
        Self {
            pattern: pattern.into(),
            arguments,
            explicit_error: Some(Box::new(error)),
            annotate,
            rendered: OnceLock::new(),
        }
    }

    /// The original, unformatted pattern text.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The resolved argument list: post-extraction when binding succeeded,
    /// the full untrimmed list on a count mismatch.
    pub fn parameters(&self) -> &[PayloadValue] {
        if self.rendered().extracted {
            &self.arguments[..self.arguments.len() - 1]
        } else {
            &self.arguments
        }
    }

    /// The associated error object, explicit or extracted, if any.
    pub fn resolved_error(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        if let Some(error) = &self.explicit_error {
            return Some(error.as_ref());
        }
        if self.rendered().extracted {
            self.arguments.last().and_then(PayloadValue::as_error)
        } else {
            None
        }
    }

    /// The rendered message text, computed on first access and cached.
    pub fn rendered_text(&self) -> &str {
        &self.rendered().text
    }

    fn rendered(&self) -> &Rendered {
        self.rendered.get_or_init(|| self.compute())
    }

    fn compute(&self) -> Rendered {
        let tokens = match tokenize(&self.pattern) {
            Ok(tokens) => tokens,
            Err(err) => {
                return Rendered {
                    text: err.to_string(),
                    extracted: false,
                }
            }
        };

        let binding = if self.explicit_error.is_some() {
            bind_exact(&tokens, &self.arguments)
        } else {
            bind(&tokens, &self.arguments)
        };

        Rendered {
            text: render(&tokens, &binding, self.annotate),
            extracted: matches!(binding, Binding::Extracted { .. }),
        }
    }
}
