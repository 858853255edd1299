//! MAP combinator - transforms a successful output

use crate::foundation::{Validated, Validator};

/// Applies a function to the output of a successful parse.
///
/// Errors from the inner validator pass through unchanged and the function
/// is never called for them.
///
/// # Examples
///
/// ```rust
/// use nebula_validated::prelude::*;
///
/// let shout = from::<&str, ()>().map(str::to_uppercase);
/// assert_eq!(shout.parse("hey"), Validated::valid("HEY".to_string()));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Map<V, F> {
    pub(crate) inner: V,
    pub(crate) f: F,
}

impl<V, F> Map<V, F> {
    pub fn new(inner: V, f: F) -> Self {
        Self { inner, f }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V, F, O2> Validator for Map<V, F>
where
    V: Validator,
    F: Fn(V::Output) -> O2,
{
    type Input = V::Input;
    type Output = O2;
    type Error = V::Error;

    fn parse(&self, input: Self::Input) -> Validated<O2, V::Error> {
        self.inner.parse(input).map(&self.f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{ValidatorExt, from};

    #[test]
    fn test_map_transforms_output() {
        let v = from::<i32, ()>().map(|n| n * 3);
        assert_eq!(v.parse(5), Validated::valid(15));
    }

    #[test]
    fn test_map_fusion() {
        let f = |n: i32| n + 1;
        let g = |n: i32| n * 10;
        let chained = from::<i32, ()>().map(f).map(g);
        let fused = from::<i32, ()>().map(move |n| g(f(n)));
        for n in [-3, 0, 7] {
            assert_eq!(chained.parse(n), fused.parse(n));
        }
    }

    #[test]
    fn test_map_propagates_errors() {
        let v = from::<i32, &str>()
            .filter(|n| *n > 0, |_| "not positive")
            .map(|_| -> i32 { unreachable!("map must not run on invalid input") });
        assert_eq!(v.parse(-1), Validated::invalid("not positive"));
    }
}
