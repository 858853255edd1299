//! Ready-made validators
//!
//! Everything here is built from the core combinators and adds no new
//! semantics. The extension traits are blanket-implemented, so bringing them
//! into scope (the [`prelude`](crate::prelude) does) is enough.
//!
//! - [`StringValidatorExt`]: `trim`, `strip`, case folding, lengths, `matches`, `parse_as`
//! - [`NumericValidatorExt`]: `at_least`, `at_most`, `in_range`
//! - [`MembershipValidatorExt`]: `one_of`
//! - [`non_blank_string`]: the usual starting point for a text field

pub mod membership;
pub mod numeric;
pub mod strings;

pub use membership::MembershipValidatorExt;
pub use numeric::NumericValidatorExt;
pub use strings::{StringValidatorExt, non_blank_string};
#[cfg(feature = "regex")]
pub use strings::Matches;
