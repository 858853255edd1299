//! # nebula-validated
//!
//! Composable, error-accumulating input validation for the Nebula workflow
//! engine.
//!
//! A validator turns untrusted input into a trusted output or into a
//! non-empty, ordered list of caller-chosen errors. Validators are built once
//! from small combinators and then run any number of times, from any thread.
//!
//! ## Quick Start
//!
//! ```rust
//! use nebula_validated::prelude::*;
//!
//! let username = non_blank_string(|| "username is required")
//!     .trim()
//!     .min_len(3, |_| "username is too short");
//! let email = non_blank_string(|| "email is required")
//!     .trim()
//!     .filter(|e| e.contains('@'), |_| "email is malformed");
//!
//! let user = zip(username, email);
//!
//! assert_eq!(
//!     user.parse(Some("ada@example.com".into())),
//!     Validated::valid(("ada@example.com".to_string(), "ada@example.com".to_string()))
//! );
//! assert_eq!(
//!     user.parse(None),
//!     Validated::invalid_all(errors!["username is required", "email is required"])
//! );
//! ```
//!
//! ## Two kinds of composition
//!
//! - **Sequential**: [`map`](foundation::ValidatorExt::map),
//!   [`flat_map`](foundation::ValidatorExt::flat_map),
//!   [`filter`](foundation::ValidatorExt::filter) and
//!   [`transform_either`](foundation::ValidatorExt::transform_either) stop at
//!   the first failure.
//! - **Accumulating**: [`zip`](combinators::zip) and friends run every branch
//!   and report all errors, in argument order.
//!
//! ## Optional input
//!
//! Absent values are `None`. Pick the policy explicitly with
//! [`allow_nulls`](foundation::ValidatorExt::allow_nulls),
//! [`with_default`](foundation::ValidatorExt::with_default),
//! [`not_null_or_blank`](foundation::ValidatorExt::not_null_or_blank) or
//! [`null_or_not_blank`](foundation::ValidatorExt::null_or_not_blank).
//!
//! ## Features
//!
//! - `regex` (default): [`matches`](validators::StringValidatorExt::matches)
//! - `serde`: `Serialize`/`Deserialize` for the outcome and error types

// Nested combinators (Map<Filter<NotNullOrBlank<...>, ...>, ...>) produce long
// types that are inherent to static composition.
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;
