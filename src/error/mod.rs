//! Error types for failed validation.
//!
//! This module provides [`ValidationErrors`], the non-empty collection of
//! failure messages produced by a finished chain.

mod validation_errors;

pub use validation_errors::ValidationErrors;
