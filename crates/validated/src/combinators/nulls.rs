//! Nullability and default combinators
//!
//! Absent input is modelled with `Option`, never with a sentinel value, so
//! each policy below is a distinct type:
//!
//! | combinator            | `None`                    | blank `Some`  |
//! |-----------------------|---------------------------|---------------|
//! | [`AllowNulls`]        | `Valid(None)`             | delegates     |
//! | [`WithDefault`]       | `Valid(supplier())`       | delegates     |
//! | [`NotNullOrBlank`]    | error                     | error         |
//! | [`NullOrNotBlank`]    | `Valid(None)`             | error         |
//! | [`NotBlank`]          | not an `Option` input     | error         |
//!
//! "Blank" means empty or made only of whitespace.

use crate::foundation::{Validated, Validator};

#[inline]
fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

// ============================================================================
// ALLOW NULLS
// ============================================================================

/// Widens a validator to accept `None`, which bypasses it entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllowNulls<V> {
    pub(crate) inner: V,
}

impl<V> AllowNulls<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V: Validator> Validator for AllowNulls<V> {
    type Input = Option<V::Input>;
    type Output = Option<V::Output>;
    type Error = V::Error;

    fn parse(&self, input: Self::Input) -> Validated<Self::Output, V::Error> {
        match input {
            None => Validated::Valid(None),
            Some(value) => self.inner.parse(value).map(Some),
        }
    }
}

// ============================================================================
// WITH DEFAULT
// ============================================================================

/// Substitutes a supplied value for `None`, delegating `Some` to the inner validator.
///
/// The supplied value is not validated.
#[derive(Debug, Clone, Copy)]
pub struct WithDefault<V, S> {
    pub(crate) inner: V,
    pub(crate) supplier: S,
}

impl<V, S> WithDefault<V, S> {
    pub fn new(inner: V, supplier: S) -> Self {
        Self { inner, supplier }
    }
}

impl<V, S> Validator for WithDefault<V, S>
where
    V: Validator,
    S: Fn() -> V::Output,
{
    type Input = Option<V::Input>;
    type Output = V::Output;
    type Error = V::Error;

    fn parse(&self, input: Self::Input) -> Validated<V::Output, V::Error> {
        match input {
            None => Validated::Valid((self.supplier)()),
            Some(value) => self.inner.parse(value),
        }
    }
}

// ============================================================================
// BLANK POLICIES
// ============================================================================

/// Rejects `None` and blank strings, unwrapping the `Option` on success.
#[derive(Debug, Clone, Copy)]
pub struct NotNullOrBlank<V, F> {
    pub(crate) inner: V,
    pub(crate) if_error: F,
}

impl<V, F> NotNullOrBlank<V, F> {
    pub fn new(inner: V, if_error: F) -> Self {
        Self { inner, if_error }
    }
}

impl<V, F, S> Validator for NotNullOrBlank<V, F>
where
    V: Validator<Output = Option<S>>,
    S: AsRef<str>,
    F: Fn() -> V::Error,
{
    type Input = V::Input;
    type Output = S;
    type Error = V::Error;

    fn parse(&self, input: Self::Input) -> Validated<S, V::Error> {
        self.inner.parse(input).and_then(|value| match value {
            Some(s) if !is_blank(s.as_ref()) => Validated::Valid(s),
            _ => Validated::invalid((self.if_error)()),
        })
    }
}

/// Rejects blank strings.
#[derive(Debug, Clone, Copy)]
pub struct NotBlank<V, F> {
    pub(crate) inner: V,
    pub(crate) if_error: F,
}

impl<V, F> NotBlank<V, F> {
    pub fn new(inner: V, if_error: F) -> Self {
        Self { inner, if_error }
    }
}

impl<V, F> Validator for NotBlank<V, F>
where
    V: Validator,
    V::Output: AsRef<str>,
    F: Fn() -> V::Error,
{
    type Input = V::Input;
    type Output = V::Output;
    type Error = V::Error;

    fn parse(&self, input: Self::Input) -> Validated<V::Output, V::Error> {
        self.inner.parse(input).and_then(|value| {
            if is_blank(value.as_ref()) {
                Validated::invalid((self.if_error)())
            } else {
                Validated::Valid(value)
            }
        })
    }
}

/// Lets `None` through, but rejects a present blank string.
#[derive(Debug, Clone, Copy)]
pub struct NullOrNotBlank<V, F> {
    pub(crate) inner: V,
    pub(crate) if_error: F,
}

impl<V, F> NullOrNotBlank<V, F> {
    pub fn new(inner: V, if_error: F) -> Self {
        Self { inner, if_error }
    }
}

impl<V, F, S> Validator for NullOrNotBlank<V, F>
where
    V: Validator<Output = Option<S>>,
    S: AsRef<str>,
    F: Fn() -> V::Error,
{
    type Input = V::Input;
    type Output = Option<S>;
    type Error = V::Error;

    fn parse(&self, input: Self::Input) -> Validated<Option<S>, V::Error> {
        self.inner.parse(input).and_then(|value| match value {
            Some(s) if is_blank(s.as_ref()) => Validated::invalid((self.if_error)()),
            other => Validated::Valid(other),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{ValidatorExt, from};
    use rstest::rstest;

    #[test]
    fn test_allow_nulls() {
        let p = from::<String, ()>().allow_nulls();
        assert_eq!(p.parse(Some("abc".into())), Validated::valid(Some("abc".to_string())));
        assert_eq!(p.parse(None), Validated::valid(None));
    }

    #[test]
    fn test_allow_nulls_bypasses_inner() {
        let p = from::<i32, &str>()
            .filter(|_| false, |_| "inner ran")
            .allow_nulls();
        assert_eq!(p.parse(None), Validated::valid(None));
        assert_eq!(p.parse(Some(1)), Validated::invalid("inner ran"));
    }

    #[test]
    fn test_allow_nulls_unwraps_to_inner() {
        let p = from::<u8, &str>()
            .filter(|n| *n > 1, |_| "small")
            .allow_nulls();
        assert_eq!(p.inner().parse(0), Validated::invalid("small"));
        let inner = p.into_inner();
        assert_eq!(inner.parse(2), Validated::valid(2));
    }

    #[test]
    fn test_with_default() {
        let p = from::<&str, ()>().with_default(|| "wibble");
        assert_eq!(p.parse(Some("abc")), Validated::valid("abc"));
        assert_eq!(p.parse(None), Validated::valid("wibble"));
    }

    #[test]
    fn test_with_default_supplier_only_on_none() {
        let p = from::<&str, ()>().with_default(|| -> &'static str { unreachable!() });
        assert_eq!(p.parse(Some("x")), Validated::valid("x"));
    }

    #[rstest]
    #[case(None, Validated::invalid("blank"))]
    #[case(Some(""), Validated::invalid("blank"))]
    #[case(Some("  \t"), Validated::invalid("blank"))]
    #[case(Some(" a "), Validated::valid(" a "))]
    fn test_not_null_or_blank(
        #[case] input: Option<&'static str>,
        #[case] expected: Validated<&'static str, &'static str>,
    ) {
        let p = from::<Option<&str>, _>().not_null_or_blank(|| "blank");
        assert_eq!(p.parse(input), expected);
    }

    #[rstest]
    #[case(None, Validated::valid(None))]
    #[case(Some(""), Validated::invalid("blank"))]
    #[case(Some("   "), Validated::invalid("blank"))]
    #[case(Some("x"), Validated::valid(Some("x")))]
    fn test_null_or_not_blank(
        #[case] input: Option<&'static str>,
        #[case] expected: Validated<Option<&'static str>, &'static str>,
    ) {
        let p = from::<Option<&str>, _>().null_or_not_blank(|| "blank");
        assert_eq!(p.parse(input), expected);
    }

    #[rstest]
    #[case("", false)]
    #[case("\n ", false)]
    #[case("ok", true)]
    fn test_not_blank(#[case] input: &'static str, #[case] accepted: bool) {
        let p = from::<&str, _>().not_blank(|| "blank");
        assert_eq!(p.parse(input).is_valid(), accepted);
    }

    #[test]
    fn test_policies_differ_on_none() {
        let strict = from::<Option<&str>, _>().not_null_or_blank(|| "required");
        let lenient = from::<Option<&str>, _>().null_or_not_blank(|| "blank");
        let blank_only = from::<&str, _>().not_blank(|| "blank").allow_nulls();

        assert_eq!(strict.parse(None), Validated::invalid("required"));
        assert_eq!(lenient.parse(None), Validated::valid(None));
        assert_eq!(blank_only.parse(None), Validated::valid(None));
    }
}
