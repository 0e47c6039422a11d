// salvage/src/error.rs
use thiserror::Error;

/// Errors produced by the engine itself, as opposed to failures raised by the
/// wrapped action (those travel as `anyhow::Error` and are never rewrapped).
#[derive(Debug, Error)]
pub enum SalvageError {
  /// A rule was registered with arguments that can never match (e.g. an empty
  /// category list). Reported by `execute()` before the action runs.
  #[error("Configuration error for rule '{rule}': {message}")]
  Configuration { rule: String, message: String },
}

/// Raised when a required value is absent.
///
/// This is the crate's notion of a null dereference: `safe_call`, `elvis` and
/// `first_non_null` all recover from it. Actions usually raise it through
/// [`Required::required`] rather than constructing it directly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Missing value: {what}")]
pub struct MissingValue {
  pub what: String,
}

impl MissingValue {
  pub fn new(what: impl Into<String>) -> Self {
    Self { what: what.into() }
  }
}

/// Turns an absent `Option` into a [`MissingValue`] failure, so that chained
/// lookups like `a.required("a")?.b.required("a.b")?` fail the same way a
/// dereference of an absent value would.
pub trait Required<T> {
  fn required(self, what: &str) -> Result<T, MissingValue>;
}

impl<T> Required<T> for Option<T> {
  fn required(self, what: &str) -> Result<T, MissingValue> {
    self.ok_or_else(|| MissingValue::new(what))
  }
}

pub type SalvageResult<T, E = SalvageError> = std::result::Result<T, E>;
