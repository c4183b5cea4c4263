//! Logging facade dispatching payload messages through the `log` crate.
//!
//! [`Say`] is an explicit logger handle bound to a target name; it builds a
//! [`PayloadMessage`](crate::PayloadMessage) per call and hands the rendered
//! text to whatever backend the host application installed. Contextual
//! fields are carried by a [`FieldScope`] that is consumed by the terminal
//! level method, so fields cannot leak into later calls.

use log::Level;

use crate::message::{PayloadMessage, PayloadValue};

/// A logger handle bound to an explicit target name.
///
/// The annotate toggle selects whether substituted values carry their
/// placeholder labels; it is owned here, process-wide per handle, and
/// applied to every message the handle dispatches.
///
/// ## Example
///
/// ```
/// use saylog::{params, Say};
///
/// let say = Say::new("my_app::worker");
/// say.info("processed {count} items in {}ms", params!(42, 17));
/// ```
#[derive(Debug, Clone)]
pub struct Say {
    target: String,
    annotate: bool,
}

impl Say {
    /// Creates a handle dispatching to the given target, plain rendering.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            annotate: false,
        }
    }

    /// Selects annotated rendering, where each substituted value carries its
    /// placeholder label.
    pub fn with_annotate(mut self, annotate: bool) -> Self {
        self.annotate = annotate;
        self
    }

    pub fn trace(&self, pattern: &str, arguments: Vec<PayloadValue>) {
        self.log(Level::Trace, pattern, arguments);
    }

    pub fn debug(&self, pattern: &str, arguments: Vec<PayloadValue>) {
        self.log(Level::Debug, pattern, arguments);
    }

    pub fn info(&self, pattern: &str, arguments: Vec<PayloadValue>) {
        self.log(Level::Info, pattern, arguments);
    }

    pub fn warn(&self, pattern: &str, arguments: Vec<PayloadValue>) {
        self.log(Level::Warn, pattern, arguments);
    }

    pub fn error(&self, pattern: &str, arguments: Vec<PayloadValue>) {
        self.log(Level::Error, pattern, arguments);
    }

    /// Dispatches one message at the given level. A trailing error object in
    /// the argument list is resolved by the message and appended to the line
    /// as its cause, since a log record has no separate error slot.
    pub fn log(&self, level: Level, pattern: &str, arguments: Vec<PayloadValue>) {
        self.dispatch(level, pattern, arguments, &[]);
    }

    /// Opens a contextual field scope for a single logging call.
    pub fn field(&self, key: impl Into<String>, value: impl ToString) -> FieldScope<'_> {
        FieldScope {
            say: self,
            fields: vec![(key.into(), value.to_string())],
        }
    }

    fn dispatch(
        &self,
        level: Level,
        pattern: &str,
        arguments: Vec<PayloadValue>,
        fields: &[(String, String)],
    ) {
        let message = PayloadMessage::new(pattern, arguments, self.annotate);
        let line = decorate(message.rendered_text(), fields);
        match message.resolved_error() {
            Some(error) => log::log!(target: &self.target, level, "{line}: {error}"),
            None => log::log!(target: &self.target, level, "{line}"),
        }
    }
}

/// Contextual fields for one logging call.
///
/// The scope is consumed by the terminal level method, so the fields are
/// cleared on every exit path. Fields render as a ` [k=v, k2=v2]` suffix on
/// the dispatched line.
#[must_use = "field scopes do nothing until a level method is called"]
#[derive(Debug)]
pub struct FieldScope<'a> {
    say: &'a Say,
    fields: Vec<(String, String)>,
}

impl FieldScope<'_> {
    /// Adds another field to the scope.
    pub fn field(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.fields.push((key.into(), value.to_string()));
        self
    }

    pub fn trace(self, pattern: &str, arguments: Vec<PayloadValue>) {
        self.log(Level::Trace, pattern, arguments);
    }

    pub fn debug(self, pattern: &str, arguments: Vec<PayloadValue>) {
        self.log(Level::Debug, pattern, arguments);
    }

    pub fn info(self, pattern: &str, arguments: Vec<PayloadValue>) {
        self.log(Level::Info, pattern, arguments);
    }

    pub fn warn(self, pattern: &str, arguments: Vec<PayloadValue>) {
        self.log(Level::Warn, pattern, arguments);
    }

    pub fn error(self, pattern: &str, arguments: Vec<PayloadValue>) {
        self.log(Level::Error, pattern, arguments);
    }

    pub fn log(self, level: Level, pattern: &str, arguments: Vec<PayloadValue>) {
        self.say.dispatch(level, pattern, arguments, &self.fields);
    }
}

fn decorate(text: &str, fields: &[(String, String)]) -> String {
    if fields.is_empty() {
        return text.to_string();
    }
    let joined: Vec<String> = fields.iter().map(|(k, v)| format!("{k}={v}")).collect();
    format!("{text} [{}]", joined.join(", "))
}
