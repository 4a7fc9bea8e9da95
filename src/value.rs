//! Validatable value representation.
//!
//! This module provides [`Value`], the closed tagged union of everything the
//! validation chain can inspect, along with its [`Kind`] discriminant and
//! typed extraction via `TryFrom`.

use std::cmp::Ordering;
use std::fmt::{self, Display};

use chrono::{DateTime, Utc};

/// The kind of a present [`Value`], fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A text value.
    Text,
    /// A numeric value.
    Numeric,
    /// A point in time.
    Temporal,
}

impl Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Text => write!(f, "text"),
            Kind::Numeric => write!(f, "numeric"),
            Kind::Temporal => write!(f, "temporal"),
        }
    }
}

/// A single validatable value.
///
/// `Value` is a closed union over three kinds of payload plus [`Value::Null`]
/// for an absent value. The kind is decided once, when the value is
/// constructed, and never changes afterwards.
///
/// `Null` carries no kind: every kind-gated rule skips it, and only the
/// presence rules (`not_null`, `not_empty`) and the equality and membership
/// rules report on it.
///
/// # Example
///
/// ```rust
/// use verdict::{Kind, Value};
///
/// let name = Value::from("Alice");
/// assert_eq!(name.kind(), Some(Kind::Text));
///
/// let missing = Value::null();
/// assert_eq!(missing.kind(), None);
/// assert!(missing.is_null());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An absent value.
    Null,
    /// A text value.
    Text(String),
    /// A numeric value.
    Numeric(f64),
    /// A point in time.
    Temporal(DateTime<Utc>),
}

impl Value {
    /// Creates an absent value.
    pub fn null() -> Self {
        Value::Null
    }

    /// Returns the kind of this value, or `None` if it is absent.
    pub fn kind(&self) -> Option<Kind> {
        match self {
            Value::Null => None,
            Value::Text(_) => Some(Kind::Text),
            Value::Numeric(_) => Some(Kind::Numeric),
            Value::Temporal(_) => Some(Kind::Temporal),
        }
    }

    /// Returns a diagnostic name for this value's kind, including `"null"`.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Text(_) => "text",
            Value::Numeric(_) => "numeric",
            Value::Temporal(_) => "temporal",
        }
    }

    /// Returns true if this value is absent.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the text payload, or `None` for any other kind.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric payload, or `None` for any other kind.
    pub fn as_numeric(&self) -> Option<f64> {
        match self {
            Value::Numeric(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the temporal payload, or `None` for any other kind.
    pub fn as_temporal(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::Temporal(t) => Some(*t),
            _ => None,
        }
    }
}

/// Renders the textual form used by pattern rules.
///
/// Text renders verbatim, numerics through `f64` display (`10`, not `10.0`),
/// temporals as RFC 3339, and an absent value as `null`.
impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Text(s) => write!(f, "{}", s),
            Value::Numeric(n) => write!(f, "{}", n),
            Value::Temporal(t) => write!(f, "{}", t.to_rfc3339()),
        }
    }
}

/// Ordering is defined within one kind only.
///
/// Text compares lexicographically, numerics by `f64` ordering (NaN compares
/// with nothing), temporals chronologically. Values of different kinds are
/// incomparable, which the comparison rules treat as a skip.
impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Value::Null, Value::Null) => Some(Ordering::Equal),
            (Value::Text(a), Value::Text(b)) => a.partial_cmp(b),
            (Value::Numeric(a), Value::Numeric(b)) => a.partial_cmp(b),
            (Value::Temporal(a), Value::Temporal(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Numeric(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Numeric(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Numeric(n as f64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Numeric(n as f64)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Numeric(n as f64)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(t: DateTime<Utc>) -> Self {
        Value::Temporal(t)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

/// A typed extraction failed because the value has a different kind.
///
/// # Example
///
/// ```rust
/// use verdict::{Kind, Value};
///
/// let err = f64::try_from(Value::from("ten")).unwrap_err();
/// assert_eq!(err.expected, Kind::Numeric);
/// assert_eq!(err.actual, "text");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected a {expected} value, got {actual}")]
pub struct KindError {
    /// The kind the extraction asked for.
    pub expected: Kind,
    /// The kind the value actually has.
    pub actual: &'static str,
}

impl TryFrom<Value> for String {
    type Error = KindError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Text(s) => Ok(s),
            other => Err(KindError {
                expected: Kind::Text,
                actual: other.kind_name(),
            }),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = KindError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Numeric(n) => Ok(n),
            other => Err(KindError {
                expected: Kind::Numeric,
                actual: other.kind_name(),
            }),
        }
    }
}

impl TryFrom<Value> for DateTime<Utc> {
    type Error = KindError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Temporal(t) => Ok(t),
            other => Err(KindError {
                expected: Kind::Temporal,
                actual: other.kind_name(),
            }),
        }
    }
}
