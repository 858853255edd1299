//! FILTER combinator - rejects outputs failing a predicate

use crate::foundation::{Validated, Validator};

/// Keeps outputs that satisfy a predicate.
///
/// An output failing the predicate is rejected with the single error built
/// by `if_error` from that output. Neither closure is called once an earlier
/// stage has failed.
#[derive(Debug, Clone, Copy)]
pub struct Filter<V, P, F> {
    pub(crate) inner: V,
    pub(crate) predicate: P,
    pub(crate) if_error: F,
}

impl<V, P, F> Filter<V, P, F> {
    pub fn new(inner: V, predicate: P, if_error: F) -> Self {
        Self {
            inner,
            predicate,
            if_error,
        }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V, P, F> Validator for Filter<V, P, F>
where
    V: Validator,
    P: Fn(&V::Output) -> bool,
    F: Fn(&V::Output) -> V::Error,
{
    type Input = V::Input;
    type Output = V::Output;
    type Error = V::Error;

    fn parse(&self, input: Self::Input) -> Validated<V::Output, V::Error> {
        self.inner.parse(input).and_then(|value| {
            if (self.predicate)(&value) {
                Validated::Valid(value)
            } else {
                Validated::invalid((self.if_error)(&value))
            }
        })
    }
}
