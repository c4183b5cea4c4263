use thiserror::Error;

/// Malformed pattern and argument-count conditions.
///
/// These are never propagated to the caller as failures; the renderer turns
/// them into the message text itself, so a formatting problem cannot break
/// the logging path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Invalid pattern, curly brace left unclosed.")]
    UnclosedBrace,

    #[error("Invalid amount of arguments ({given} given but only {used} used in pattern)")]
    TooManyArguments { given: usize, used: usize },

    #[error("Invalid amount of arguments (only {available} available, {missing} missing)")]
    MissingArguments { available: usize, missing: usize },
}
