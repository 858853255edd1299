//! The two-variant validation outcome

use crate::foundation::Errors;

/// Outcome of running a validator: an accepted value, or one or more errors.
///
/// Unlike [`Result`], the failure side is always an [`Errors`] collection so
/// independent failures can be merged with [`zip`](Validated::zip) instead of
/// keeping only the first.
///
/// # Examples
///
/// ```rust
/// use nebula_validated::foundation::Validated;
///
/// let age: Validated<u8, &str> = Validated::valid(42);
/// let name: Validated<&str, &str> = Validated::invalid("name is blank");
///
/// assert!(age.is_valid());
/// assert_eq!(name.errors().map(|e| e.len()), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[must_use = "a validation outcome must be inspected"]
pub enum Validated<O, E> {
    /// The input was accepted and transformed into this value.
    Valid(O),
    /// The input was rejected for these reasons, in the order they were found.
    Invalid(Errors<E>),
}

impl<O, E> Validated<O, E> {
    /// Wraps an accepted value.
    pub fn valid(value: O) -> Self {
        Self::Valid(value)
    }

    /// Rejects with a single error.
    pub fn invalid(error: E) -> Self {
        Self::Invalid(Errors::new(error))
    }

    /// Rejects with an existing error collection.
    pub fn invalid_all(errors: Errors<E>) -> Self {
        Self::Invalid(errors)
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// Returns the accepted value, if any.
    #[must_use]
    pub fn valid_value(&self) -> Option<&O> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    /// Returns the errors, if any.
    #[must_use]
    pub fn errors(&self) -> Option<&Errors<E>> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(errors) => Some(errors),
        }
    }

    /// Transforms the accepted value. `f` is not called on failure.
    pub fn map<O2>(self, f: impl FnOnce(O) -> O2) -> Validated<O2, E> {
        match self {
            Self::Valid(value) => Validated::Valid(f(value)),
            Self::Invalid(errors) => Validated::Invalid(errors),
        }
    }

    /// Transforms every error. `f` is not called on success.
    pub fn map_errors<E2>(self, f: impl FnMut(E) -> E2) -> Validated<O, E2> {
        match self {
            Self::Valid(value) => Validated::Valid(value),
            Self::Invalid(errors) => Validated::Invalid(errors.map(f)),
        }
    }

    /// Chains a dependent step. Stops at the first failure.
    pub fn and_then<O2>(self, f: impl FnOnce(O) -> Validated<O2, E>) -> Validated<O2, E> {
        match self {
            Self::Valid(value) => f(value),
            Self::Invalid(errors) => Validated::Invalid(errors),
        }
    }

    /// Pairs two independent outcomes, keeping the errors of both.
    ///
    /// When both sides failed, `self`'s errors come first.
    ///
    /// ```rust
    /// use nebula_validated::foundation::Validated;
    ///
    /// let left: Validated<u8, &str> = Validated::invalid("left");
    /// let right: Validated<u8, &str> = Validated::invalid("right");
    ///
    /// let both = left.zip(right);
    /// assert_eq!(both.errors().unwrap().as_slice(), ["left", "right"]);
    /// ```
    pub fn zip<O2>(self, other: Validated<O2, E>) -> Validated<(O, O2), E> {
        match (self, other) {
            (Self::Valid(left), Validated::Valid(right)) => Validated::Valid((left, right)),
            (Self::Invalid(errors), Validated::Valid(_))
            | (Self::Valid(_), Validated::Invalid(errors)) => Validated::Invalid(errors),
            (Self::Invalid(mut errors), Validated::Invalid(more)) => {
                errors.append(more);
                Validated::Invalid(errors)
            }
        }
    }

    /// Converts into a standard [`Result`] for use with `?`.
    pub fn into_result(self) -> Result<O, Errors<E>> {
        self.into()
    }
}

impl<O, E> From<Validated<O, E>> for Result<O, Errors<E>> {
    fn from(validated: Validated<O, E>) -> Self {
        match validated {
            Validated::Valid(value) => Ok(value),
            Validated::Invalid(errors) => Err(errors),
        }
    }
}

impl<O, E> From<Result<O, E>> for Validated<O, E> {
    fn from(result: Result<O, E>) -> Self {
        match result {
            Ok(value) => Self::Valid(value),
            Err(error) => Self::invalid(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors;

    #[test]
    fn test_valid_and_invalid_are_distinct() {
        let ok: Validated<i32, &str> = Validated::valid(1);
        let bad: Validated<i32, &str> = Validated::invalid("nope");
        assert!(ok.is_valid() && !ok.is_invalid());
        assert!(bad.is_invalid() && !bad.is_valid());
        assert_ne!(ok, bad);
    }

    #[test]
    fn test_equality_is_ordered() {
        let ab: Validated<(), _> = Validated::invalid_all(errors!["a", "b"]);
        let ba: Validated<(), _> = Validated::invalid_all(errors!["b", "a"]);
        assert_ne!(ab, ba);
        assert_eq!(ab, Validated::invalid_all(errors!["a", "b"]));
    }

    #[test]
    fn test_map_skips_errors() {
        let bad: Validated<i32, &str> = Validated::invalid("nope");
        let mapped = bad.map(|_| -> i32 { panic!("must not run") });
        assert_eq!(mapped, Validated::invalid("nope"));
    }

    #[test]
    fn test_valid_value_and_errors_accessors() {
        let ok: Validated<i32, &str> = Validated::valid(5);
        let bad: Validated<i32, &str> = Validated::invalid("nope");
        assert_eq!(ok.valid_value(), Some(&5));
        assert!(ok.errors().is_none());
        assert_eq!(bad.valid_value(), None);
        assert_eq!(bad.errors().map(Errors::len), Some(1));
    }

    #[test]
    fn test_zip_valid() {
        let left: Validated<i32, &str> = Validated::valid(1);
        assert_eq!(left.zip(Validated::valid("x")), Validated::valid((1, "x")));
    }

    #[test]
    fn test_zip_one_side_invalid() {
        let left: Validated<i32, &str> = Validated::valid(1);
        let right: Validated<i32, &str> = Validated::invalid("right");
        assert_eq!(left.zip(right), Validated::invalid("right"));
    }

    #[test]
    fn test_into_result() {
        let bad: Validated<i32, &str> = Validated::invalid("nope");
        let err = bad.into_result().unwrap_err();
        assert_eq!(err.as_slice(), ["nope"]);
    }

    #[test]
    fn test_from_result() {
        let parsed: Validated<i32, String> = "12".parse::<i32>().map_err(|e| e.to_string()).into();
        assert_eq!(parsed, Validated::valid(12));
    }
}
