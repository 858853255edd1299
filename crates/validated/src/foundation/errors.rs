//! Non-empty, ordered error collection
//!
//! [`Errors`] is the payload of [`Validated::Invalid`](super::Validated::Invalid).
//! It always holds at least one error; the only way to build one is through
//! constructors that take a first error, or through [`TryFrom<Vec<E>>`],
//! which rejects an empty vector with [`EmptyErrors`].

use smallvec::SmallVec;
use std::fmt;

// ============================================================================
// EMPTY ERRORS
// ============================================================================

/// Returned when an [`Errors`] is requested from an empty collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, thiserror::Error)]
#[error("an error collection must contain at least one error")]
pub struct EmptyErrors;

// ============================================================================
// ERRORS
// ============================================================================

/// An ordered sequence of one or more errors.
///
/// Errors keep the order in which they were produced. Combining two
/// collections with [`append`](Errors::append) places the receiver's errors
/// first.
///
/// Most failures carry one or two errors, so the first two are stored inline.
///
/// # Examples
///
/// ```rust
/// use nebula_validated::foundation::Errors;
///
/// let mut errors = Errors::new("too short");
/// errors.append(Errors::from_head_tail("missing digit", ["missing symbol"]));
///
/// assert_eq!(errors.len(), 3);
/// assert_eq!(errors.first(), &"too short");
/// assert_eq!(errors.as_slice(), ["too short", "missing digit", "missing symbol"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Errors<E> {
    // Invariant: never empty.
    inner: SmallVec<[E; 2]>,
}

#[allow(clippy::len_without_is_empty)]
impl<E> Errors<E> {
    /// Creates a collection holding a single error.
    pub fn new(error: E) -> Self {
        let mut inner = SmallVec::new();
        inner.push(error);
        Self { inner }
    }

    /// Creates a collection from a first error followed by any number of others.
    pub fn from_head_tail(head: E, tail: impl IntoIterator<Item = E>) -> Self {
        let mut errors = Self::new(head);
        errors.inner.extend(tail);
        errors
    }

    /// Adds an error at the end.
    pub fn push(&mut self, error: E) {
        self.inner.push(error);
    }

    /// Moves every error of `other` after the errors already held.
    pub fn append(&mut self, other: Self) {
        self.inner.extend(other.inner);
    }

    /// Returns the first error produced.
    #[must_use]
    pub fn first(&self) -> &E {
        &self.inner[0]
    }

    /// Number of errors, always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Iterates over the errors in production order.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.inner.iter()
    }

    /// Borrows the errors as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[E] {
        &self.inner
    }

    /// Consumes the collection into a vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<E> {
        self.inner.into_vec()
    }

    /// Transforms every error, keeping order and count.
    pub fn map<E2>(self, f: impl FnMut(E) -> E2) -> Errors<E2> {
        Errors {
            inner: self.inner.into_iter().map(f).collect(),
        }
    }
}

impl<E> TryFrom<Vec<E>> for Errors<E> {
    type Error = EmptyErrors;

    fn try_from(errors: Vec<E>) -> Result<Self, Self::Error> {
        if errors.is_empty() {
            Err(EmptyErrors)
        } else {
            Ok(Self {
                inner: SmallVec::from_vec(errors),
            })
        }
    }
}

impl<E> From<Errors<E>> for Vec<E> {
    fn from(errors: Errors<E>) -> Self {
        errors.into_vec()
    }
}

impl<E> IntoIterator for Errors<E> {
    type Item = E;
    type IntoIter = smallvec::IntoIter<[E; 2]>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a Errors<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E: fmt::Display> fmt::Display for Errors<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let [only] = self.as_slice() {
            return write!(f, "{only}");
        }

        write!(f, "{} validation errors:", self.len())?;
        for (i, error) in self.iter().enumerate() {
            write!(f, "\n  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl<E: fmt::Display + fmt::Debug> std::error::Error for Errors<E> {}

// ============================================================================
// SERDE
// ============================================================================

#[cfg(feature = "serde")]
impl<E: serde::Serialize> serde::Serialize for Errors<E> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, E: serde::Deserialize<'de>> serde::Deserialize<'de> for Errors<E> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let errors = Vec::<E>::deserialize(deserializer)?;
        Self::try_from(errors).map_err(serde::de::Error::custom)
    }
}
