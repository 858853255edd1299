//! Type-erased validators

use std::fmt;
use std::sync::Arc;

use crate::foundation::{Validated, Validator};

/// A shareable validator with its concrete combinator type erased.
///
/// Composed validators have long, unnameable types. `BoxValidator` gives
/// them a name so they can be stored in struct fields or in statics built
/// once at startup. Cloning is cheap: clones share the same validator.
///
/// # Examples
///
/// ```rust
/// use std::sync::LazyLock;
/// use nebula_validated::prelude::*;
///
/// static USERNAME: LazyLock<BoxValidator<Option<String>, String, &'static str>> =
///     LazyLock::new(|| {
///         non_blank_string(|| "username is required")
///             .trim()
///             .min_len(3, |_| "username is too short")
///             .boxed()
///     });
///
/// assert_eq!(USERNAME.parse(Some("  ada ".into())), Validated::valid("ada".to_string()));
/// ```
pub struct BoxValidator<I, O, E> {
    inner: Arc<dyn Validator<Input = I, Output = O, Error = E> + Send + Sync>,
}

impl<I, O, E> BoxValidator<I, O, E> {
    pub fn new<V>(validator: V) -> Self
    where
        V: Validator<Input = I, Output = O, Error = E> + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(validator),
        }
    }
}

impl<I, O, E> Clone for BoxValidator<I, O, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<I, O, E> fmt::Debug for BoxValidator<I, O, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxValidator").finish_non_exhaustive()
    }
}

impl<I, O, E> Validator for BoxValidator<I, O, E> {
    type Input = I;
    type Output = O;
    type Error = E;

    #[inline]
    fn parse(&self, input: I) -> Validated<O, E> {
        self.inner.parse(input)
    }
}
