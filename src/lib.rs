//! # Verdict
//!
//! A fluent validator for single values that accumulates every failure
//! message, providing complete feedback rather than short-circuiting on the
//! first failing rule.
//!
//! ## Overview
//!
//! A chain is created over one value of a bounded set of kinds (text,
//! numeric, temporal). Rules run in the order they are called; each failed
//! rule records its caller-supplied message, and a rule that does not apply
//! to the value's kind is silently skipped. The chain never stops early, so
//! after the last rule the caller sees every failure at once.
//!
//! ## Core Types
//!
//! - [`Value`]: the closed tagged union of validatable values
//! - [`ValidationResult`]: owns the value and the ordered failure messages
//! - [`ValidationChain`]: the fluent rule vocabulary over one result
//! - [`ValidationErrors`]: a non-empty collection of failure messages, used
//!   when bridging into `stillwater::Validation`
//!
//! ## Example
//!
//! ```rust
//! use verdict::validate;
//!
//! let mut signup = validate("alice@example.com");
//! signup
//!     .not_empty("email is required")
//!     .email("email is malformed");
//! assert!(signup.is_valid());
//!
//! let mut age = validate(15);
//! age.range(18, 120, "must be an adult age");
//! assert!(!age.is_valid());
//! assert_eq!(age.error_messages(), ["must be an adult age"]);
//! ```

pub mod chain;
pub mod error;
pub mod logger;
pub mod result;
pub mod value;

pub use chain::ValidationChain;
pub use error::ValidationErrors;
pub use logger::{LogLevel, Logger};
pub use result::ValidationResult;
pub use value::{Kind, KindError, Value};

/// Type alias for a finished chain bridged into stillwater's `Validation`.
pub type Validated = stillwater::Validation<Value, ValidationErrors>;

/// Creates a fresh validation chain over `value`.
///
/// This is the entry point of the crate. It is stateless: every call
/// constructs a new [`ValidationResult`] in the valid, no-errors state and a
/// new [`ValidationChain`] wrapping it, with nothing shared between calls.
///
/// # Example
///
/// ```rust
/// use verdict::validate;
///
/// let mut username = validate("ada");
/// username
///     .not_empty("username is required")
///     .min_length(3, "username is too short");
///
/// assert!(username.is_valid());
/// assert_eq!(username.original_value().as_text(), Some("ada"));
/// ```
pub fn validate(value: impl Into<Value>) -> ValidationChain {
    ValidationChain::new(value.into())
}
