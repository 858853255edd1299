//! FLAT_MAP combinator - dependent, short-circuiting validation

use crate::foundation::{Validated, Validator};

/// Runs a dependent step on the output of a successful parse.
///
/// The step decides, from the previous output, whether to accept (possibly
/// with a new value) or reject. A chain of `flat_map`s stops at the first
/// failure and reports exactly that failure.
///
/// # Examples
///
/// ```rust
/// use nebula_validated::prelude::*;
///
/// let halve = from::<u32, &str>().flat_map(|n| {
///     if n % 2 == 0 { Validated::valid(n / 2) } else { Validated::invalid("odd") }
/// });
///
/// assert_eq!(halve.parse(10), Validated::valid(5));
/// assert_eq!(halve.parse(3), Validated::invalid("odd"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FlatMap<V, F> {
    pub(crate) inner: V,
    pub(crate) f: F,
}

impl<V, F> FlatMap<V, F> {
    pub fn new(inner: V, f: F) -> Self {
        Self { inner, f }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V, F, O2> Validator for FlatMap<V, F>
where
    V: Validator,
    F: Fn(V::Output) -> Validated<O2, V::Error>,
{
    type Input = V::Input;
    type Output = O2;
    type Error = V::Error;

    fn parse(&self, input: Self::Input) -> Validated<O2, V::Error> {
        self.inner.parse(input).and_then(&self.f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{ValidatorExt, from};
    use std::cell::Cell;

    #[test]
    fn test_flat_map_adopts_step_result() {
        let v = from::<i32, &str>().flat_map(|n| {
            if n > 0 {
                Validated::valid(n.to_string())
            } else {
                Validated::invalid("non-positive")
            }
        });
        assert_eq!(v.parse(3), Validated::valid("3".to_string()));
        assert_eq!(v.parse(0), Validated::invalid("non-positive"));
    }

    #[test]
    fn test_chain_stops_at_first_failure() {
        let calls = Cell::new(0);
        let v = from::<i32, &str>()
            .flat_map(|_| Validated::<i32, _>::invalid("first"))
            .flat_map(|n| {
                calls.set(calls.get() + 1);
                Validated::<i32, &str>::invalid(if n > 0 { "second" } else { "third" })
            });

        assert_eq!(v.parse(1), Validated::invalid("first"));
        assert_eq!(calls.get(), 0);
    }
}
