//! Fluent validation chain.
//!
//! This module provides [`ValidationChain`], the fluent rule vocabulary over
//! one owned [`ValidationResult`]. Every rule mutates the owned result in
//! place and returns the chain again, so rules can be strung together; a
//! failed rule never stops the rules after it from running.

use std::cmp::Ordering;

use once_cell::sync::Lazy;
use regex::Regex;
use stillwater::Validation;

use crate::error::ValidationErrors;
use crate::result::ValidationResult;
use crate::value::Value;

/// Simplified address shape: word characters, `@`, word characters, a dot,
/// then a letter. A heuristic, not an address-grammar validator.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9A-Za-z_]+@[0-9A-Za-z_]+\.[A-Za-z]").unwrap());

/// A fluent chain of validation rules over one value.
///
/// A `ValidationChain` exclusively owns one [`ValidationResult`] for its
/// whole lifetime. Rule methods share a uniform policy:
///
/// 1. A rule whose condition fails records its caller-supplied message via
///    the owned result and keeps going; chaining never short-circuits.
/// 2. A rule first checks whether the value's kind is in its applicable kind
///    set. Outside that set the rule is a silent no-op, indistinguishable
///    from a pass.
/// 3. Messages are free text chosen by the caller; nothing is attached to
///    them.
///
/// The accessors [`original_value`](ValidationChain::original_value),
/// [`error_messages`](ValidationChain::error_messages) and
/// [`is_valid`](ValidationChain::is_valid) can be read at any point,
/// including between rules.
///
/// # Example
///
/// ```rust
/// use verdict::validate;
///
/// let mut password = validate("Sup3r-secret");
/// password
///     .min_length(8, "must have at least 8 characters")
///     .min_uppercase(1, "must contain an uppercase letter")
///     .min_digit(1, "must contain a digit")
///     .min_symbol(1, "must contain a symbol");
///
/// assert!(password.is_valid());
/// assert!(password.error_messages().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationChain {
    result: ValidationResult,
}

impl ValidationChain {
    /// Creates a chain over a fresh result in the valid, no-errors state.
    pub fn new(value: Value) -> Self {
        Self {
            result: ValidationResult::new(value),
        }
    }

    /// Returns the value under validation.
    pub fn original_value(&self) -> &Value {
        self.result.original_value()
    }

    /// Returns the failure messages recorded so far, in rule order.
    pub fn error_messages(&self) -> &[String] {
        self.result.error_messages()
    }

    /// Returns true while no rule has failed.
    pub fn is_valid(&self) -> bool {
        self.result.is_valid()
    }

    /// Consumes the chain and bridges into stillwater's `Validation`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::validate;
    ///
    /// let mut age = validate(17);
    /// age.greater_than_or_equals_to(18, "must be an adult");
    ///
    /// let validation = age.into_validation();
    /// assert!(validation.is_failure());
    /// ```
    pub fn into_validation(self) -> Validation<Value, ValidationErrors> {
        self.result.into_validation()
    }

    /// Records `message` when `failed` holds. Every rule ends here.
    fn apply(&mut self, failed: bool, message: impl Into<String>) -> &mut Self {
        if failed {
            self.result.invalidate(message);
        }
        self
    }

    /// Fails when the value is absent.
    ///
    /// A numeric value, including zero, is always treated as present.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{validate, Value};
    ///
    /// assert!(validate(0).not_null("required").is_valid());
    /// assert!(!validate(Value::null()).not_null("required").is_valid());
    /// ```
    pub fn not_null(&mut self, message: impl Into<String>) -> &mut Self {
        let failed = self.result.original_value().is_null();
        self.apply(failed, message)
    }

    /// Fails when the value is absent or is text with no characters.
    ///
    /// A numeric value always passes; a present temporal value always
    /// passes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::validate;
    ///
    /// assert!(!validate("").not_empty("must not be empty").is_valid());
    /// assert!(validate("x").not_empty("must not be empty").is_valid());
    /// ```
    pub fn not_empty(&mut self, message: impl Into<String>) -> &mut Self {
        let failed = match self.result.original_value() {
            Value::Null => true,
            Value::Text(s) => s.is_empty(),
            _ => false,
        };
        self.apply(failed, message)
    }

    /// Fails when a text value does not look like an email address.
    ///
    /// The check is a simplified heuristic (word characters, `@`, word
    /// characters, a dot, a letter), not full address-grammar validation.
    /// Skips any non-text value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::validate;
    ///
    /// assert!(validate("abc@def.gh").email("malformed address").is_valid());
    /// assert!(!validate("not-an-email").email("malformed address").is_valid());
    /// ```
    pub fn email(&mut self, message: impl Into<String>) -> &mut Self {
        let failed = match self.result.original_value() {
            Value::Text(s) => !EMAIL_PATTERN.is_match(s),
            _ => false,
        };
        self.apply(failed, message)
    }

    /// Fails when the value's textual form does not match `pattern`.
    ///
    /// Applies to every kind through the textual coercion of [`Value`]:
    /// text matches verbatim, numerics through their display form,
    /// temporals as RFC 3339.
    ///
    /// # Panics
    ///
    /// Panics when the value is absent (an absent value has no textual
    /// form) and when `pattern` is not a valid regular expression. Unlike a
    /// failed match, the panic records nothing; it propagates to the caller
    /// of this method.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::validate;
    ///
    /// assert!(validate("order-17").regex(r"^order-\d+$", "bad id").is_valid());
    /// assert!(!validate(7).regex(r"^\d\d+$", "need two digits").is_valid());
    /// ```
    pub fn regex(&mut self, pattern: &str, message: impl Into<String>) -> &mut Self {
        let value = self.result.original_value();
        if value.is_null() {
            panic!("regex rule applied to an absent value");
        }

        let re = match Regex::new(pattern) {
            Ok(re) => re,
            Err(err) => panic!("invalid pattern {:?}: {}", pattern, err),
        };

        let failed = !re.is_match(&value.to_string());
        self.apply(failed, message)
    }

    /// Fails when the value is not strictly equal to `other`.
    ///
    /// Strict equality never crosses kinds: a numeric 1 is not equal to the
    /// text `"1"`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::validate;
    ///
    /// assert!(validate("yes").equals("yes", "answers differ").is_valid());
    /// assert!(!validate(1).equals("1", "answers differ").is_valid());
    /// ```
    pub fn equals(&mut self, other: impl Into<Value>, message: impl Into<String>) -> &mut Self {
        let other = other.into();
        let failed = *self.result.original_value() != other;
        self.apply(failed, message)
    }

    /// Fails when the value is strictly equal to `other`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::validate;
    ///
    /// assert!(validate("alice").not_equals("admin", "name is reserved").is_valid());
    /// assert!(!validate("admin").not_equals("admin", "name is reserved").is_valid());
    /// ```
    pub fn not_equals(&mut self, other: impl Into<Value>, message: impl Into<String>) -> &mut Self {
        let other = other.into();
        let failed = *self.result.original_value() == other;
        self.apply(failed, message)
    }

    /// Fails when a text value has fewer than `length` characters.
    ///
    /// Skips any non-text value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::validate;
    ///
    /// assert!(validate("hello").min_length(5, "too short").is_valid());
    /// assert!(!validate("hi").min_length(5, "too short").is_valid());
    /// ```
    pub fn min_length(&mut self, length: usize, message: impl Into<String>) -> &mut Self {
        let failed = match self.result.original_value() {
            Value::Text(s) => s.chars().count() < length,
            _ => false,
        };
        self.apply(failed, message)
    }

    /// Fails when a text value has fewer than `count` ASCII uppercase
    /// letters. Skips any non-text value.
    pub fn min_uppercase(&mut self, count: usize, message: impl Into<String>) -> &mut Self {
        let failed = match self.result.original_value() {
            Value::Text(s) => s.chars().filter(|c| c.is_ascii_uppercase()).count() < count,
            _ => false,
        };
        self.apply(failed, message)
    }

    /// Fails when a text value has fewer than `count` ASCII lowercase
    /// letters. Skips any non-text value.
    pub fn min_lowercase(&mut self, count: usize, message: impl Into<String>) -> &mut Self {
        let failed = match self.result.original_value() {
            Value::Text(s) => s.chars().filter(|c| c.is_ascii_lowercase()).count() < count,
            _ => false,
        };
        self.apply(failed, message)
    }

    /// Fails when a text value has fewer than `count` decimal digits.
    /// Skips any non-text value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::validate;
    ///
    /// assert!(validate("pin-2024").min_digit(4, "need 4 digits").is_valid());
    /// assert!(!validate("pin").min_digit(4, "need 4 digits").is_valid());
    /// ```
    pub fn min_digit(&mut self, count: usize, message: impl Into<String>) -> &mut Self {
        let failed = match self.result.original_value() {
            Value::Text(s) => s.chars().filter(|c| c.is_ascii_digit()).count() < count,
            _ => false,
        };
        self.apply(failed, message)
    }

    /// Fails when a text value has fewer than `count` symbol characters.
    ///
    /// A symbol is any character that is neither an ASCII word character
    /// (`A-Z`, `a-z`, `0-9`, `_`) nor whitespace. Skips any non-text value.
    pub fn min_symbol(&mut self, count: usize, message: impl Into<String>) -> &mut Self {
        let failed = match self.result.original_value() {
            Value::Text(s) => {
                s.chars()
                    .filter(|c| !c.is_ascii_alphanumeric() && *c != '_' && !c.is_whitespace())
                    .count()
                    < count
            }
            _ => false,
        };
        self.apply(failed, message)
    }

    /// Fails when a numeric or temporal value falls outside `[min, max]`.
    ///
    /// Both bounds are inclusive. Skips text and absent values; a bound of a
    /// different kind than the value is incomparable and skips too.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::validate;
    ///
    /// assert!(validate(3).range(1, 5, "out of range").is_valid());
    /// assert!(!validate(10).range(1, 5, "out of range").is_valid());
    /// ```
    pub fn range(
        &mut self,
        min: impl Into<Value>,
        max: impl Into<Value>,
        message: impl Into<String>,
    ) -> &mut Self {
        let (min, max) = (min.into(), max.into());
        let value = self.result.original_value();
        let failed = match value {
            Value::Numeric(_) | Value::Temporal(_) => {
                match (value.partial_cmp(&min), value.partial_cmp(&max)) {
                    (Some(lo), Some(hi)) => lo == Ordering::Less || hi == Ordering::Greater,
                    _ => false,
                }
            }
            _ => false,
        };
        self.apply(failed, message)
    }

    /// Fails when a numeric or temporal value is not below `comparison`.
    ///
    /// Skips text and absent values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::validate;
    ///
    /// assert!(validate(5).less_than(10, "too large").is_valid());
    /// assert!(!validate(10).less_than(10, "too large").is_valid());
    /// ```
    pub fn less_than(
        &mut self,
        comparison: impl Into<Value>,
        message: impl Into<String>,
    ) -> &mut Self {
        let comparison = comparison.into();
        let value = self.result.original_value();
        let failed = match value {
            Value::Numeric(_) | Value::Temporal(_) => matches!(
                value.partial_cmp(&comparison),
                Some(Ordering::Greater | Ordering::Equal)
            ),
            _ => false,
        };
        self.apply(failed, message)
    }

    /// Fails when a numeric or temporal value is above `comparison`.
    ///
    /// Skips text and absent values.
    pub fn less_than_or_equals_to(
        &mut self,
        comparison: impl Into<Value>,
        message: impl Into<String>,
    ) -> &mut Self {
        let comparison = comparison.into();
        let value = self.result.original_value();
        let failed = match value {
            Value::Numeric(_) | Value::Temporal(_) => {
                matches!(value.partial_cmp(&comparison), Some(Ordering::Greater))
            }
            _ => false,
        };
        self.apply(failed, message)
    }

    /// Fails when a numeric or temporal value is not above `comparison`.
    ///
    /// Skips text and absent values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::validate;
    ///
    /// assert!(validate(11).greater_than(10, "too small").is_valid());
    /// assert!(!validate(10).greater_than(10, "too small").is_valid());
    /// ```
    pub fn greater_than(
        &mut self,
        comparison: impl Into<Value>,
        message: impl Into<String>,
    ) -> &mut Self {
        let comparison = comparison.into();
        let value = self.result.original_value();
        let failed = match value {
            Value::Numeric(_) | Value::Temporal(_) => matches!(
                value.partial_cmp(&comparison),
                Some(Ordering::Less | Ordering::Equal)
            ),
            _ => false,
        };
        self.apply(failed, message)
    }

    /// Fails when a numeric or temporal value is below `comparison`.
    ///
    /// Skips text and absent values.
    pub fn greater_than_or_equals_to(
        &mut self,
        comparison: impl Into<Value>,
        message: impl Into<String>,
    ) -> &mut Self {
        let comparison = comparison.into();
        let value = self.result.original_value();
        let failed = match value {
            Value::Numeric(_) | Value::Temporal(_) => {
                matches!(value.partial_cmp(&comparison), Some(Ordering::Less))
            }
            _ => false,
        };
        self.apply(failed, message)
    }

    /// Fails when the value is not strictly equal to any of `items`.
    ///
    /// Applies to every kind; membership uses the same strict equality as
    /// [`equals`](ValidationChain::equals).
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::validate;
    ///
    /// let mut role = validate("editor");
    /// role.must_exist_in(["viewer", "editor", "owner"], "unknown role");
    /// assert!(role.is_valid());
    /// ```
    pub fn must_exist_in<I, T>(&mut self, items: I, message: impl Into<String>) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let value = self.result.original_value();
        let failed = !items.into_iter().any(|item| item.into() == *value);
        self.apply(failed, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn utc(year: i32, month: u32, day: u32) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_not_null() {
        let mut chain = ValidationChain::new(Value::from("x"));
        chain.not_null("required");
        assert!(chain.is_valid());

        let mut chain = ValidationChain::new(Value::null());
        chain.not_null("required");
        assert_eq!(chain.error_messages(), ["required"]);
    }

    #[test]
    fn test_not_null_passes_numeric_zero() {
        let mut chain = ValidationChain::new(Value::from(0));
        chain.not_null("required");
        assert!(chain.is_valid());
    }

    #[test]
    fn test_not_empty() {
        let mut chain = ValidationChain::new(Value::from(""));
        chain.not_empty("empty");
        assert_eq!(chain.error_messages(), ["empty"]);

        let mut chain = ValidationChain::new(Value::from("a"));
        chain.not_empty("empty");
        assert!(chain.is_valid());

        let mut chain = ValidationChain::new(Value::null());
        chain.not_empty("empty");
        assert!(!chain.is_valid());
    }

    #[test]
    fn test_not_empty_passes_numbers_and_dates() {
        let mut chain = ValidationChain::new(Value::from(0));
        chain.not_empty("empty");
        assert!(chain.is_valid());

        let mut chain = ValidationChain::new(Value::from(utc(2024, 1, 1)));
        chain.not_empty("empty");
        assert!(chain.is_valid());
    }

    #[test]
    fn test_email_accepts_simple_address() {
        let mut chain = ValidationChain::new(Value::from("abc@def.gh"));
        chain.email("bad");
        assert!(chain.is_valid());
        assert!(chain.error_messages().is_empty());
    }

    #[test]
    fn test_email_rejects_non_address() {
        for sample in ["not-an-email", "a@b", "@domain.com", ""] {
            let mut chain = ValidationChain::new(Value::from(sample));
            chain.email("bad");
            assert!(!chain.is_valid(), "accepted {:?}", sample);
        }
    }

    #[test]
    fn test_email_is_a_substring_heuristic() {
        // Anything containing the word@word.letter shape passes.
        let mut chain = ValidationChain::new(Value::from("wrapped abc@def.gh wrapped"));
        chain.email("bad");
        assert!(chain.is_valid());
    }

    #[test]
    fn test_email_skips_non_text() {
        let mut chain = ValidationChain::new(Value::from(42));
        chain.email("bad");
        assert!(chain.error_messages().is_empty());

        let mut chain = ValidationChain::new(Value::null());
        chain.email("bad");
        assert!(chain.error_messages().is_empty());
    }

    #[test]
    fn test_regex_matches_text() {
        let mut chain = ValidationChain::new(Value::from("abc-123"));
        chain.regex(r"^[a-z]+-\d+$", "bad");
        assert!(chain.is_valid());

        let mut chain = ValidationChain::new(Value::from("nope"));
        chain.regex(r"^[a-z]+-\d+$", "bad");
        assert_eq!(chain.error_messages(), ["bad"]);
    }

    #[test]
    fn test_regex_coerces_numbers() {
        let mut chain = ValidationChain::new(Value::from(10));
        chain.regex(r"^10$", "bad");
        assert!(chain.is_valid());
    }

    #[test]
    fn test_regex_coerces_dates() {
        let mut chain = ValidationChain::new(Value::from(utc(2024, 6, 1)));
        chain.regex(r"^2024-06-01", "bad");
        assert!(chain.is_valid());
    }

    #[test]
    #[should_panic(expected = "absent value")]
    fn test_regex_panics_on_absent_value() {
        let mut chain = ValidationChain::new(Value::null());
        chain.regex("^a", "x");
    }

    #[test]
    #[should_panic(expected = "invalid pattern")]
    fn test_regex_panics_on_invalid_pattern() {
        let mut chain = ValidationChain::new(Value::from("a"));
        chain.regex("[unclosed", "x");
    }

    #[test]
    fn test_regex_panic_records_nothing() {
        let mut chain = ValidationChain::new(Value::null());
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            chain.regex("^a", "x");
        }));
        assert!(outcome.is_err());
        assert!(chain.error_messages().is_empty());
        assert!(chain.is_valid());
    }

    #[test]
    fn test_equals_and_not_equals() {
        let mut chain = ValidationChain::new(Value::from("yes"));
        chain.equals("yes", "differs").not_equals("no", "matches");
        assert!(chain.is_valid());

        let mut chain = ValidationChain::new(Value::from("yes"));
        chain.equals("no", "differs").not_equals("yes", "matches");
        assert_eq!(chain.error_messages(), ["differs", "matches"]);
    }

    #[test]
    fn test_equals_never_crosses_kinds() {
        let mut chain = ValidationChain::new(Value::from(1));
        chain.equals("1", "differs");
        assert_eq!(chain.error_messages(), ["differs"]);
    }

    #[test]
    fn test_equals_on_absent_values() {
        let mut chain = ValidationChain::new(Value::null());
        chain.equals(Value::null(), "differs");
        assert!(chain.is_valid());
    }

    #[test]
    fn test_min_length_counts_characters() {
        let mut chain = ValidationChain::new(Value::from("日本語"));
        chain.min_length(3, "short");
        assert!(chain.is_valid());

        let mut chain = ValidationChain::new(Value::from("日本"));
        chain.min_length(3, "short");
        assert!(!chain.is_valid());
    }

    #[test]
    fn test_min_length_skips_non_text() {
        let mut chain = ValidationChain::new(Value::from(12345));
        chain.min_length(10, "short");
        assert!(chain.error_messages().is_empty());
    }

    #[test]
    fn test_character_class_minimums() {
        let mut chain = ValidationChain::new(Value::from("Aa1!"));
        chain
            .min_uppercase(1, "u")
            .min_lowercase(1, "l")
            .min_digit(1, "d")
            .min_symbol(1, "s");
        assert!(chain.is_valid());
        assert!(chain.error_messages().is_empty());

        let mut chain = ValidationChain::new(Value::from("aaaa"));
        chain
            .min_uppercase(1, "u")
            .min_lowercase(1, "l")
            .min_digit(1, "d")
            .min_symbol(1, "s");
        assert_eq!(chain.error_messages(), ["u", "d", "s"]);
    }

    #[test]
    fn test_min_symbol_ignores_word_and_space_characters() {
        let mut chain = ValidationChain::new(Value::from("a_b c1"));
        chain.min_symbol(1, "s");
        assert_eq!(chain.error_messages(), ["s"]);

        let mut chain = ValidationChain::new(Value::from("a-b"));
        chain.min_symbol(1, "s");
        assert!(chain.is_valid());
    }

    #[test]
    fn test_range_is_inclusive_on_both_bounds() {
        for n in [1, 3, 5] {
            let mut chain = ValidationChain::new(Value::from(n));
            chain.range(1, 5, "out");
            assert!(chain.is_valid(), "{} should be in range", n);
        }

        for n in [0, 6, 10] {
            let mut chain = ValidationChain::new(Value::from(n));
            chain.range(1, 5, "out");
            assert_eq!(chain.error_messages(), ["out"], "{} should be out", n);
        }
    }

    #[test]
    fn test_range_on_temporals() {
        let mut chain = ValidationChain::new(Value::from(utc(2024, 6, 15)));
        chain.range(utc(2024, 1, 1), utc(2024, 12, 31), "out");
        assert!(chain.is_valid());

        let mut chain = ValidationChain::new(Value::from(utc(2025, 1, 1)));
        chain.range(utc(2024, 1, 1), utc(2024, 12, 31), "out");
        assert!(!chain.is_valid());
    }

    #[test]
    fn test_range_skips_text() {
        let mut chain = ValidationChain::new(Value::from("3"));
        chain.range(1, 5, "out");
        assert!(chain.error_messages().is_empty());
    }

    #[test]
    fn test_range_skips_mismatched_bound_kind() {
        let mut chain = ValidationChain::new(Value::from(3));
        chain.range(utc(2024, 1, 1), utc(2024, 12, 31), "out");
        assert!(chain.error_messages().is_empty());
    }

    #[test]
    fn test_comparison_rules_on_numbers() {
        let mut chain = ValidationChain::new(Value::from(10));
        chain
            .less_than(11, "lt")
            .less_than_or_equals_to(10, "lte")
            .greater_than(9, "gt")
            .greater_than_or_equals_to(10, "gte");
        assert!(chain.is_valid());

        let mut chain = ValidationChain::new(Value::from(10));
        chain
            .less_than(10, "lt")
            .less_than_or_equals_to(9, "lte")
            .greater_than(10, "gt")
            .greater_than_or_equals_to(11, "gte");
        assert_eq!(chain.error_messages(), ["lt", "lte", "gt", "gte"]);
    }

    #[test]
    fn test_comparison_rules_on_temporals() {
        let mut chain = ValidationChain::new(Value::from(utc(2024, 6, 1)));
        chain
            .less_than(utc(2024, 7, 1), "lt")
            .greater_than(utc(2024, 5, 1), "gt");
        assert!(chain.is_valid());
    }

    #[test]
    fn test_comparison_rules_skip_text_and_absent() {
        let mut chain = ValidationChain::new(Value::from("10"));
        chain.less_than(5, "lt").greater_than(20, "gt");
        assert!(chain.error_messages().is_empty());

        let mut chain = ValidationChain::new(Value::null());
        chain.less_than(5, "lt").greater_than(20, "gt");
        assert!(chain.error_messages().is_empty());
    }

    #[test]
    fn test_nan_passes_every_comparison() {
        let mut chain = ValidationChain::new(Value::from(f64::NAN));
        chain
            .range(1, 5, "range")
            .less_than(0, "lt")
            .greater_than(0, "gt");
        assert!(chain.error_messages().is_empty());
    }

    #[test]
    fn test_must_exist_in() {
        let mut chain = ValidationChain::new(Value::from("editor"));
        chain.must_exist_in(["viewer", "editor"], "unknown");
        assert!(chain.is_valid());

        let mut chain = ValidationChain::new(Value::from("intruder"));
        chain.must_exist_in(["viewer", "editor"], "unknown");
        assert_eq!(chain.error_messages(), ["unknown"]);
    }

    #[test]
    fn test_must_exist_in_uses_strict_equality() {
        let mut chain = ValidationChain::new(Value::from(1));
        chain.must_exist_in(["1", "2"], "unknown");
        assert_eq!(chain.error_messages(), ["unknown"]);
    }

    #[test]
    fn test_must_exist_in_empty_set_always_fails() {
        let mut chain = ValidationChain::new(Value::from(1));
        chain.must_exist_in(Vec::<Value>::new(), "unknown");
        assert!(!chain.is_valid());
    }

    #[test]
    fn test_failed_rule_does_not_stop_later_rules() {
        let mut chain = ValidationChain::new(Value::from("ab"));
        chain
            .min_length(5, "short")
            .email("not an address")
            .not_empty("empty");
        assert_eq!(chain.error_messages(), ["short", "not an address"]);
    }

    #[test]
    fn test_messages_keep_rule_order_with_duplicates() {
        let mut chain = ValidationChain::new(Value::from("ab"));
        chain.min_length(5, "bad").min_uppercase(1, "bad");
        assert_eq!(chain.error_messages(), ["bad", "bad"]);
    }
}
