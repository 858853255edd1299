//! TRACED combinator - diagnostics for a named validator

use crate::foundation::{Validated, Validator};

/// Wraps a validator in a `tracing` span and logs rejections.
///
/// Each parse enters a `validate` span carrying the validator's name. A
/// rejection emits one `debug` event with the error count. The outcome is
/// returned unchanged.
///
/// # Examples
///
/// ```rust
/// use nebula_validated::prelude::*;
///
/// let email = non_blank_string(|| "email is required").traced("signup.email");
/// assert!(email.parse(None).is_invalid());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Traced<V> {
    pub(crate) inner: V,
    name: &'static str,
}

impl<V> Traced<V> {
    pub fn new(inner: V, name: &'static str) -> Self {
        Self { inner, name }
    }

    /// The name recorded on spans and events.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V: Validator> Validator for Traced<V> {
    type Input = V::Input;
    type Output = V::Output;
    type Error = V::Error;

    fn parse(&self, input: Self::Input) -> Validated<V::Output, V::Error> {
        let span = tracing::trace_span!("validate", validator = self.name);
        let _entered = span.enter();

        let result = self.inner.parse(input);
        if let Validated::Invalid(errors) = &result {
            tracing::debug!(validator = self.name, errors = errors.len(), "input rejected");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{ValidatorExt, from};

    #[test]
    fn test_traced_is_transparent() {
        let plain = from::<i32, &str>().filter(|n| *n > 0, |_| "not positive");
        let traced = plain.traced("positive");

        assert_eq!(traced.name(), "positive");
        for n in [-1, 0, 1] {
            assert_eq!(traced.parse(n), plain.parse(n));
        }
    }

    #[test]
    fn test_into_inner_drops_tracing() {
        let traced = from::<u8, ()>().map(|n| n + 1).traced("increment");
        let inner = traced.into_inner();
        assert_eq!(inner.parse(1), Validated::valid(2));
    }
}
