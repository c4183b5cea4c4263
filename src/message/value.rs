use std::error::Error as StdError;
use std::fmt;

use serde::{Serialize, Serializer};

/// A single formatting argument.
///
/// The last argument of a call may be an error object travelling alongside
/// the formatting arguments; [`as_error`](Self::as_error) is the capability
/// test the binder uses to recognize it.
#[derive(Debug)]
pub enum PayloadValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Error(Box<dyn StdError + Send + Sync>),
}

impl PayloadValue {
    /// Wraps an error object for use as a payload argument.
    pub fn error(err: impl StdError + Send + Sync + 'static) -> Self {
        Self::Error(Box::new(err))
    }

    /// Returns the contained error object, if this value is one.
    pub fn as_error(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        match self {
            Self::Error(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

/// The canonical human-readable text of a value, as substituted into the
/// rendered message. Error objects render as their display text.
impl fmt::Display for PayloadValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Error(err) => write!(f, "{err}"),
        }
    }
}

/// Serializes scalars natively and error objects as their display text, so a
/// transport can consume the parameter list structurally.
impl Serialize for PayloadValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Str(s) => serializer.serialize_str(s),
            Self::Int(i) => serializer.serialize_i64(*i),
            Self::Float(v) => serializer.serialize_f64(*v),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Error(err) => serializer.collect_str(err),
        }
    }
}

impl From<&str> for PayloadValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for PayloadValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for PayloadValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for PayloadValue {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<u32> for PayloadValue {
    fn from(i: u32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<f64> for PayloadValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for PayloadValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}
