//! Non-empty collection of validation failure messages.

use std::fmt::{self, Display};

use stillwater::prelude::*;

/// A non-empty, ordered collection of failure messages.
///
/// `ValidationErrors` wraps a `NonEmptyVec<String>` to guarantee that at
/// least one message is present, which makes it usable as the failure side of
/// `stillwater::Validation`. Messages keep the order in which their rules
/// failed; duplicates are preserved.
///
/// # Combining Errors
///
/// `ValidationErrors` implements `Semigroup`, so failures from independently
/// validated values can be merged:
///
/// ```rust
/// use verdict::ValidationErrors;
/// use stillwater::prelude::*;
///
/// let name = ValidationErrors::single("name is required");
/// let email = ValidationErrors::single("email is malformed");
///
/// let combined = name.combine(email);
/// assert_eq!(combined.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors(NonEmptyVec<String>);

impl ValidationErrors {
    /// Creates a `ValidationErrors` containing a single message.
    pub fn single(message: impl Into<String>) -> Self {
        Self(NonEmptyVec::singleton(message.into()))
    }

    /// Creates a `ValidationErrors` from a `NonEmptyVec` of messages.
    pub fn from_non_empty(messages: NonEmptyVec<String>) -> Self {
        Self(messages)
    }

    /// Creates a `ValidationErrors` from a `Vec<String>`.
    ///
    /// # Panics
    ///
    /// Panics if the provided vec is empty.
    pub fn from_vec(messages: Vec<String>) -> Self {
        Self(NonEmptyVec::from_vec(messages).expect("ValidationErrors requires at least one message"))
    }

    /// Returns the number of messages in this collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns false since this collection is guaranteed non-empty.
    ///
    /// This method exists for API consistency but always returns false.
    pub fn is_empty(&self) -> bool {
        false // NonEmptyVec is never empty
    }

    /// Returns an iterator over the contained messages.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Returns the first message in the collection.
    pub fn first(&self) -> &str {
        self.0.head()
    }

    /// Converts this collection into a `Vec<String>`.
    pub fn into_vec(self) -> Vec<String> {
        self.0.into_vec()
    }

    /// Returns a reference to the underlying `NonEmptyVec`.
    pub fn as_non_empty_vec(&self) -> &NonEmptyVec<String> {
        &self.0
    }
}

impl Semigroup for ValidationErrors {
    fn combine(self, other: Self) -> Self {
        ValidationErrors(self.0.combine(other.0))
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "validation failed with {} error(s):", self.len())?;
        for (i, message) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

// ValidationErrors only contains owned strings, so it stays usable across
// thread boundaries. The assertions keep that true if the internals change.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationErrors>();
    assert_sync::<ValidationErrors>();
};
