//! Validator combinators
//!
//! Each combinator is a small struct wrapping one or more validators plus
//! the closures configuring it. They are usually built through the methods of
//! [`ValidatorExt`](crate::foundation::ValidatorExt) rather than directly.
//!
//! # Sequential (short-circuit)
//!
//! - [`Map`], [`FlatMap`], [`Filter`], [`TransformEither`], [`MapErrors`]
//!
//! # Accumulating
//!
//! - [`Zip`] .. [`Zip6`], built with [`zip`] .. [`zip6`] or the
//!   [`zip!`](crate::zip!) macro
//!
//! # Optional input
//!
//! - [`AllowNulls`], [`WithDefault`], [`NotNullOrBlank`], [`NotBlank`],
//!   [`NullOrNotBlank`]
//!
//! # Diagnostics
//!
//! - [`Traced`]

pub mod filter;
pub mod flat_map;
pub mod map;
pub mod nulls;
pub mod traced;
pub mod transform;
pub mod zip;

pub use filter::Filter;
pub use flat_map::FlatMap;
pub use map::Map;
pub use nulls::{AllowNulls, NotBlank, NotNullOrBlank, NullOrNotBlank, WithDefault};
pub use traced::Traced;
pub use transform::{MapErrors, TransformEither};
pub use zip::{Zip, Zip3, Zip4, Zip5, Zip6, zip, zip3, zip4, zip5, zip6};
