//! Validation outcome accumulator.
//!
//! This module provides [`ValidationResult`], the single mutable holder of
//! validation outcome for one value: the original value, the ordered list of
//! failure messages, and the derived validity flag.

use stillwater::Validation;

use crate::error::ValidationErrors;
use crate::value::Value;

/// The accumulated outcome of validating one value.
///
/// A `ValidationResult` starts valid with no messages. Each failed rule
/// appends one message through [`invalidate`](ValidationResult::invalidate);
/// the message list is append-only, so once the result turns invalid it stays
/// invalid for the lifetime of the instance.
///
/// # Example
///
/// ```rust
/// use verdict::{ValidationResult, Value};
///
/// let mut result = ValidationResult::new(Value::from("hello"));
/// assert!(result.is_valid());
///
/// result.invalidate("too plain");
/// assert!(!result.is_valid());
/// assert_eq!(result.error_messages(), ["too plain"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    original_value: Value,
    error_messages: Vec<String>,
}

impl ValidationResult {
    /// Creates a new result for `value` in the valid, no-errors state.
    pub fn new(value: Value) -> Self {
        Self {
            original_value: value,
            error_messages: Vec::new(),
        }
    }

    /// Returns the value this result was created with.
    ///
    /// The value is stored once at construction and never replaced.
    pub fn original_value(&self) -> &Value {
        &self.original_value
    }

    /// Returns the recorded failure messages, in the order the rules failed.
    ///
    /// The returned slice is a read-only view; the internal list can only
    /// grow through [`invalidate`](ValidationResult::invalidate).
    pub fn error_messages(&self) -> &[String] {
        &self.error_messages
    }

    /// Returns true while no failure message has been recorded.
    pub fn is_valid(&self) -> bool {
        self.error_messages.is_empty()
    }

    /// Records a failure message.
    ///
    /// Each call appends; duplicate messages are kept and order is never
    /// changed. The first call flips the result to invalid, where it stays.
    pub fn invalidate(&mut self, message: impl Into<String>) {
        self.error_messages.push(message.into());
    }

    /// Consumes the result and bridges into stillwater's `Validation`.
    ///
    /// Returns `Success` with the original value when no message was
    /// recorded, or `Failure` with all accumulated messages otherwise.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{ValidationResult, Value};
    ///
    /// let mut result = ValidationResult::new(Value::from("oops"));
    /// result.invalidate("rejected");
    ///
    /// let validation = result.into_validation();
    /// assert!(validation.is_failure());
    /// ```
    pub fn into_validation(self) -> Validation<Value, ValidationErrors> {
        if self.error_messages.is_empty() {
            Validation::Success(self.original_value)
        } else {
            Validation::Failure(ValidationErrors::from_vec(self.error_messages))
        }
    }
}
