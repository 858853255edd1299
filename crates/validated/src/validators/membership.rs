//! Membership checks

use crate::foundation::{Validator, ValidatorExt};

/// Set membership methods, available on every validator with a comparable output.
pub trait MembershipValidatorExt: Validator + Sized {
    /// Accepts only outputs equal to one of `allowed`.
    ///
    /// ```rust
    /// use nebula_validated::prelude::*;
    ///
    /// let plan = non_blank_string(|| "plan is required".to_string())
    ///     .to_lowercase()
    ///     .one_of(["free", "pro"].map(String::from), |p| format!("unknown plan '{p}'"));
    ///
    /// assert_eq!(plan.parse(Some("PRO".into())), Validated::valid("pro".to_string()));
    /// assert_eq!(
    ///     plan.parse(Some("gold".into())),
    ///     Validated::invalid("unknown plan 'gold'".to_string())
    /// );
    /// ```
    fn one_of<F>(
        self,
        allowed: impl IntoIterator<Item = Self::Output>,
        if_error: F,
    ) -> impl Validator<Input = Self::Input, Output = Self::Output, Error = Self::Error>
    where
        Self::Output: PartialEq,
        F: Fn(&Self::Output) -> Self::Error;
}

impl<V: Validator> MembershipValidatorExt for V {
    fn one_of<F>(
        self,
        allowed: impl IntoIterator<Item = Self::Output>,
        if_error: F,
    ) -> impl Validator<Input = Self::Input, Output = Self::Output, Error = Self::Error>
    where
        Self::Output: PartialEq,
        F: Fn(&Self::Output) -> Self::Error,
    {
        let allowed: Vec<Self::Output> = allowed.into_iter().collect();
        self.filter(move |value| allowed.contains(value), if_error)
    }
}
