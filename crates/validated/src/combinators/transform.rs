//! Result-returning transforms and error remapping

use crate::foundation::{Validated, Validator};

// ============================================================================
// TRANSFORM EITHER
// ============================================================================

/// Transforms a successful output with a function returning [`Result`].
///
/// `Ok` becomes the new output, `Err` a single-error rejection. This has the
/// same power as [`FlatMap`](super::FlatMap) but plugs straight into APIs
/// that already return `Result`, such as [`str::parse`].
///
/// # Examples
///
/// ```rust
/// use nebula_validated::prelude::*;
///
/// let number = from::<&str, String>()
///     .transform_either(|s| s.parse::<i32>().map_err(|e| e.to_string()));
///
/// assert_eq!(number.parse("42"), Validated::valid(42));
/// assert!(number.parse("forty-two").is_invalid());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TransformEither<V, F> {
    pub(crate) inner: V,
    pub(crate) f: F,
}

impl<V, F> TransformEither<V, F> {
    pub fn new(inner: V, f: F) -> Self {
        Self { inner, f }
    }
}

impl<V, F, O2> Validator for TransformEither<V, F>
where
    V: Validator,
    F: Fn(V::Output) -> Result<O2, V::Error>,
{
    type Input = V::Input;
    type Output = O2;
    type Error = V::Error;

    fn parse(&self, input: Self::Input) -> Validated<O2, V::Error> {
        self.inner
            .parse(input)
            .and_then(|value| Validated::from((self.f)(value)))
    }
}

// ============================================================================
// MAP ERRORS
// ============================================================================

/// Remaps every error of a failed parse, e.g. to attach a field name.
///
/// Successful outputs pass through untouched.
///
/// # Examples
///
/// ```rust
/// use nebula_validated::prelude::*;
///
/// let email = non_blank_string(Violation::blank)
///     .map_errors(|v| v.with_field("email"));
///
/// let errors = email.parse(None).into_result().unwrap_err();
/// assert_eq!(errors.first().field.as_deref(), Some("email"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MapErrors<V, F> {
    pub(crate) inner: V,
    pub(crate) f: F,
}

impl<V, F> MapErrors<V, F> {
    pub fn new(inner: V, f: F) -> Self {
        Self { inner, f }
    }
}

impl<V, F, E2> Validator for MapErrors<V, F>
where
    V: Validator,
    F: Fn(V::Error) -> E2,
{
    type Input = V::Input;
    type Output = V::Output;
    type Error = E2;

    fn parse(&self, input: Self::Input) -> Validated<V::Output, E2> {
        self.inner.parse(input).map_errors(&self.f)
    }
}
