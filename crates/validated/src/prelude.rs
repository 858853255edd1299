//! Prelude module for convenient imports.
//!
//! Provides a single `use nebula_validated::prelude::*;` import that brings
//! in the core traits and types, every combinator factory, the validator
//! extension traits and the [`errors!`](crate::errors!) macro.
//!
//! # Examples
//!
//! ```rust
//! use nebula_validated::prelude::*;
//!
//! let age = from::<&str, String>()
//!     .trim()
//!     .parse_as::<u8>(|s| format!("'{s}' is not an age"))
//!     .in_range(18, 120, |n| format!("{n} is out of range"));
//!
//! assert_eq!(age.parse("42"), Validated::valid(42));
//! ```

// ============================================================================
// FOUNDATION: Core traits and types
// ============================================================================

pub use crate::foundation::{
    BoxValidator, Errors, Identity, Validated, Validator, ValidatorExt, Violation, from,
};

// ============================================================================
// COMBINATORS: Accumulating composition
// ============================================================================

pub use crate::combinators::{zip, zip3, zip4, zip5, zip6};

// ============================================================================
// VALIDATORS: Extension traits and entry points
// ============================================================================

pub use crate::validators::{
    MembershipValidatorExt, NumericValidatorExt, StringValidatorExt, non_blank_string,
};

// ============================================================================
// MACROS
// ============================================================================

pub use crate::errors;
