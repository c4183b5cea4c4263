pub mod message;
pub mod say;

pub use message::{FormatError, PayloadMessage, PayloadValue};
pub use say::Say;

/// Builds a `Vec<PayloadValue>` from ordinary Rust values.
///
/// Error objects have no blanket conversion; wrap them explicitly with
/// [`PayloadValue::error`].
///
/// ```
/// use saylog::{params, PayloadMessage};
///
/// let msg = PayloadMessage::new("x {} y {}", params!("a", 1), false);
/// assert_eq!(msg.rendered_text(), "x {a} y {1}");
/// ```
#[macro_export]
macro_rules! params {
    () => { Vec::<$crate::PayloadValue>::new() };
    ($($value:expr),+ $(,)?) => {
        vec![$($crate::PayloadValue::from($value)),+]
    };
}
