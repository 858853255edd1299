//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the engine:
//!
//! - **Outcome**: [`Validated`], the two-variant result of every parse
//! - **Errors**: [`Errors`], the non-empty ordered error list, and
//!   [`Violation`], a ready-made error value
//! - **Traits**: [`Validator`], [`ValidatorExt`]
//! - **Erasure**: [`BoxValidator`]
//!
//! # Architecture
//!
//! ## 1. Composition, not inheritance
//!
//! Validators are plain values. Combinators take validators (plus closures)
//! and return new validators; nothing is subclassed.
//!
//! ```rust
//! use nebula_validated::prelude::*;
//!
//! let port = from::<&str, String>()
//!     .trim()
//!     .parse_as::<u16>(|s| format!("'{s}' is not a port"))
//!     .filter(|p| *p >= 1024, |p| format!("{p} is a privileged port"));
//!
//! assert_eq!(port.parse(" 8080 "), Validated::valid(8080));
//! ```
//!
//! ## 2. Two ways to combine
//!
//! Sequential combinators stop at the first failure. [`zip`](crate::combinators::zip)
//! runs every branch and concatenates all errors, in argument order.
//!
//! ## 3. Errors are values
//!
//! `parse` never panics on well-typed input. The error type is chosen by the
//! caller and the engine only collects it.

mod boxed;
mod errors;
pub mod traits;
mod validated;
mod violation;

pub use boxed::BoxValidator;
pub use errors::{EmptyErrors, Errors};
pub use traits::{Identity, Validator, ValidatorExt, from};
pub use validated::Validated;
pub use violation::Violation;

// ============================================================================
// UTILITIES
// ============================================================================

/// Runs a validator over many inputs, keeping every outcome.
///
/// # Examples
///
/// ```rust
/// use nebula_validated::foundation::{Validated, parse_all};
/// use nebula_validated::prelude::*;
///
/// let positive = from::<i32, &str>().filter(|n| *n > 0, |_| "not positive");
/// let outcomes = parse_all(&positive, [1, -2]);
/// assert_eq!(outcomes, vec![Validated::valid(1), Validated::invalid("not positive")]);
/// ```
pub fn parse_all<V, It>(validator: &V, inputs: It) -> Vec<Validated<V::Output, V::Error>>
where
    V: Validator,
    It: IntoIterator<Item = V::Input>,
{
    inputs.into_iter().map(|input| validator.parse(input)).collect()
}

/// Runs a validator over many inputs and merges the outcomes.
///
/// Unlike [`parse_all`], this returns one [`Validated`]: every output when
/// all inputs pass, or every error from every failing input, in input order.
///
/// # Examples
///
/// ```rust
/// use nebula_validated::foundation::{Validated, parse_each};
/// use nebula_validated::prelude::*;
///
/// let positive = from::<i32, String>().filter(|n| *n > 0, |n| format!("{n}"));
/// assert_eq!(parse_each(&positive, [1, 2]), Validated::valid(vec![1, 2]));
/// assert_eq!(
///     parse_each(&positive, [-1, 2, -3]).errors().map(|e| e.len()),
///     Some(2)
/// );
/// ```
pub fn parse_each<V, It>(validator: &V, inputs: It) -> Validated<Vec<V::Output>, V::Error>
where
    V: Validator,
    It: IntoIterator<Item = V::Input>,
{
    inputs
        .into_iter()
        .fold(Validated::Valid(Vec::new()), |acc, input| {
            acc.zip(validator.parse(input)).map(|(mut outputs, output)| {
                outputs.push(output);
                outputs
            })
        })
}

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// The outcome of a validator `V`.
pub type ValidatedBy<V> = Validated<<V as Validator>::Output, <V as Validator>::Error>;

#[cfg(test)]
mod core_tests {
    use super::*;

    #[test]
    fn test_parse_each_empty_is_valid() {
        let id = from::<u8, ()>();
        assert_eq!(parse_each(&id, []), Validated::valid(Vec::new()));
    }

    #[test]
    fn test_validated_by_names_outcome() {
        fn run<V: Validator<Input = u8>>(v: &V) -> ValidatedBy<V> {
            v.parse(3)
        }
        let doubled = from::<u8, &str>().map(|n| u16::from(n) * 2);
        let outcome: Validated<u16, &str> = run(&doubled);
        assert_eq!(outcome, Validated::valid(6));
    }

    #[test]
    fn test_parse_each_keeps_input_order() {
        let odd = from::<u8, u8>().filter(|n| n % 2 == 1, |n| *n);
        let result = parse_each(&odd, [2, 3, 4, 6]);
        assert_eq!(result.errors().unwrap().as_slice(), [2, 4, 6]);
    }
}
