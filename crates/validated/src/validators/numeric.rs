//! Range checks for ordered outputs
//!
//! Bounds are inclusive. Works on anything `PartialOrd`, so integers,
//! floats, `char` and `String` all qualify; a `NaN` output fails every bound.

use crate::foundation::{Validator, ValidatorExt};

/// Bound checking methods, available on every validator with an ordered output.
pub trait NumericValidatorExt: Validator + Sized {
    /// Rejects outputs below `min`.
    fn at_least<F>(
        self,
        min: Self::Output,
        if_error: F,
    ) -> impl Validator<Input = Self::Input, Output = Self::Output, Error = Self::Error>
    where
        Self::Output: PartialOrd,
        F: Fn(&Self::Output) -> Self::Error;

    /// Rejects outputs above `max`.
    fn at_most<F>(
        self,
        max: Self::Output,
        if_error: F,
    ) -> impl Validator<Input = Self::Input, Output = Self::Output, Error = Self::Error>
    where
        Self::Output: PartialOrd,
        F: Fn(&Self::Output) -> Self::Error;

    /// Rejects outputs outside `min..=max` with a single error.
    ///
    /// ```rust
    /// use nebula_validated::prelude::*;
    ///
    /// let percent = from::<i32, _>().in_range(0, 100, |n| format!("{n} is not a percentage"));
    /// assert_eq!(percent.parse(42), Validated::valid(42));
    /// assert_eq!(percent.parse(101), Validated::invalid("101 is not a percentage".to_string()));
    /// ```
    fn in_range<F>(
        self,
        min: Self::Output,
        max: Self::Output,
        if_error: F,
    ) -> impl Validator<Input = Self::Input, Output = Self::Output, Error = Self::Error>
    where
        Self::Output: PartialOrd,
        F: Fn(&Self::Output) -> Self::Error;
}

impl<V: Validator> NumericValidatorExt for V {
    fn at_least<F>(
        self,
        min: Self::Output,
        if_error: F,
    ) -> impl Validator<Input = Self::Input, Output = Self::Output, Error = Self::Error>
    where
        Self::Output: PartialOrd,
        F: Fn(&Self::Output) -> Self::Error,
    {
        self.filter(move |n| *n >= min, if_error)
    }

    fn at_most<F>(
        self,
        max: Self::Output,
        if_error: F,
    ) -> impl Validator<Input = Self::Input, Output = Self::Output, Error = Self::Error>
    where
        Self::Output: PartialOrd,
        F: Fn(&Self::Output) -> Self::Error,
    {
        self.filter(move |n| *n <= max, if_error)
    }

    fn in_range<F>(
        self,
        min: Self::Output,
        max: Self::Output,
        if_error: F,
    ) -> impl Validator<Input = Self::Input, Output = Self::Output, Error = Self::Error>
    where
        Self::Output: PartialOrd,
        F: Fn(&Self::Output) -> Self::Error,
    {
        self.filter(move |n| *n >= min && *n <= max, if_error)
    }
}
