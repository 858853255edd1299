//! Core traits for the validation system
//!
//! This module defines [`Validator`], the trait every validator implements,
//! and [`ValidatorExt`], which provides the combinator methods used to
//! compose validators.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::foundation::{BoxValidator, Validated};

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// A pure, reusable transformation from untrusted input to a validated output.
///
/// A validator is built once, typically at startup, and then run any number
/// of times, from any number of threads. Running it never mutates it and
/// never panics for a well-typed input: rejection is reported through
/// [`Validated::Invalid`].
///
/// # Type Parameters
///
/// * `Input` - The raw value handed to [`parse`](Validator::parse)
/// * `Output` - The value produced on success
/// * `Error` - The caller-chosen error type; the engine only collects it
///
/// # Examples
///
/// ```rust
/// use nebula_validated::foundation::{Validated, Validator};
///
/// struct Even;
///
/// impl Validator for Even {
///     type Input = u32;
///     type Output = u32;
///     type Error = &'static str;
///
///     fn parse(&self, input: u32) -> Validated<u32, &'static str> {
///         if input % 2 == 0 {
///             Validated::valid(input)
///         } else {
///             Validated::invalid("must be even")
///         }
///     }
/// }
///
/// assert_eq!(Even.parse(4), Validated::valid(4));
/// assert!(Even.parse(3).is_invalid());
/// ```
pub trait Validator {
    /// The type of input being validated.
    type Input;

    /// The type produced when validation succeeds.
    type Output;

    /// The error type collected on failure.
    type Error;

    /// Runs the validator against one input value.
    fn parse(&self, input: Self::Input) -> Validated<Self::Output, Self::Error>;
}

impl<V: Validator + ?Sized> Validator for &V {
    type Input = V::Input;
    type Output = V::Output;
    type Error = V::Error;

    #[inline]
    fn parse(&self, input: Self::Input) -> Validated<Self::Output, Self::Error> {
        (**self).parse(input)
    }
}

impl<V: Validator + ?Sized> Validator for Box<V> {
    type Input = V::Input;
    type Output = V::Output;
    type Error = V::Error;

    #[inline]
    fn parse(&self, input: Self::Input) -> Validated<Self::Output, Self::Error> {
        (**self).parse(input)
    }
}

impl<V: Validator + ?Sized> Validator for Arc<V> {
    type Input = V::Input;
    type Output = V::Output;
    type Error = V::Error;

    #[inline]
    fn parse(&self, input: Self::Input) -> Validated<Self::Output, Self::Error> {
        (**self).parse(input)
    }
}

// ============================================================================
// IDENTITY
// ============================================================================

/// The validator that accepts every input unchanged.
///
/// This is the root every composition starts from; see [`from`].
pub struct Identity<I, E> {
    _marker: PhantomData<fn(I) -> E>,
}

impl<I, E> Identity<I, E> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

// Manual impls: deriving would needlessly require `I` and `E` to implement them.
impl<I, E> Clone for Identity<I, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I, E> Copy for Identity<I, E> {}

impl<I, E> Default for Identity<I, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, E> fmt::Debug for Identity<I, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Identity")
    }
}

impl<I, E> Validator for Identity<I, E> {
    type Input = I;
    type Output = I;
    type Error = E;

    #[inline]
    fn parse(&self, input: I) -> Validated<I, E> {
        Validated::Valid(input)
    }
}

/// Starts a validator chain over inputs of type `I` failing with `E`.
///
/// The error type is usually inferred from the first combinator that can
/// fail.
///
/// # Examples
///
/// ```rust
/// use nebula_validated::prelude::*;
///
/// let name = from::<Option<&str>, _>().not_null_or_blank(|| "name is required");
///
/// assert_eq!(name.parse(Some("ada")), Validated::valid("ada"));
/// assert_eq!(name.parse(None), Validated::invalid("name is required"));
/// ```
#[must_use]
pub const fn from<I, E>() -> Identity<I, E> {
    Identity::new()
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for every [`Validator`]. The sequential
/// combinators (`map`, `flat_map`, `filter`, `transform_either`,
/// `map_errors`) short-circuit: once a stage fails, no later function in the
/// chain is called. Accumulation across independent validators is done with
/// [`zip`](crate::combinators::zip).
pub trait ValidatorExt: Validator + Sized {
    /// Transforms the output of a successful parse.
    ///
    /// ```rust
    /// use nebula_validated::prelude::*;
    ///
    /// let len = from::<&str, ()>().map(str::len);
    /// assert_eq!(len.parse("four"), Validated::valid(4));
    /// ```
    fn map<F, O2>(self, f: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> O2,
    {
        Map::new(self, f)
    }

    /// Chains a dependent step that may itself fail.
    ///
    /// The step is chosen from the previous output, which makes this the
    /// primitive for ordered checks such as "if not blank, then check length".
    fn flat_map<F, O2>(self, f: F) -> FlatMap<Self, F>
    where
        F: Fn(Self::Output) -> Validated<O2, Self::Error>,
    {
        FlatMap::new(self, f)
    }

    /// Keeps outputs satisfying `predicate`, rejecting others with `if_error`.
    ///
    /// ```rust
    /// use nebula_validated::prelude::*;
    ///
    /// let positive = from::<i64, _>().filter(|n| *n > 0, |n| format!("{n} is not positive"));
    /// assert_eq!(positive.parse(7), Validated::valid(7));
    /// assert_eq!(positive.parse(-1), Validated::invalid("-1 is not positive".to_string()));
    /// ```
    fn filter<P, F>(self, predicate: P, if_error: F) -> Filter<Self, P, F>
    where
        P: Fn(&Self::Output) -> bool,
        F: Fn(&Self::Output) -> Self::Error,
    {
        Filter::new(self, predicate, if_error)
    }

    /// Transforms the output with a function returning a plain [`Result`].
    fn transform_either<F, O2>(self, f: F) -> TransformEither<Self, F>
    where
        F: Fn(Self::Output) -> Result<O2, Self::Error>,
    {
        TransformEither::new(self, f)
    }

    /// Remaps every error of a failed parse. Successful outputs are untouched.
    fn map_errors<F, E2>(self, f: F) -> MapErrors<Self, F>
    where
        F: Fn(Self::Error) -> E2,
    {
        MapErrors::new(self, f)
    }

    /// Accepts `None` as valid, bypassing this validator for it.
    ///
    /// ```rust
    /// use nebula_validated::prelude::*;
    ///
    /// let maybe = from::<String, ()>().allow_nulls();
    /// assert_eq!(maybe.parse(None), Validated::valid(None));
    /// assert_eq!(maybe.parse(Some("abc".into())), Validated::valid(Some("abc".to_string())));
    /// ```
    fn allow_nulls(self) -> AllowNulls<Self> {
        AllowNulls::new(self)
    }

    /// Substitutes `supplier()` when the input is `None`.
    ///
    /// ```rust
    /// use nebula_validated::prelude::*;
    ///
    /// let p = from::<&str, ()>().with_default(|| "wibble");
    /// assert_eq!(p.parse(None), Validated::valid("wibble"));
    /// assert_eq!(p.parse(Some("abc")), Validated::valid("abc"));
    /// ```
    fn with_default<S>(self, supplier: S) -> WithDefault<Self, S>
    where
        S: Fn() -> Self::Output,
    {
        WithDefault::new(self, supplier)
    }

    /// Rejects `None` and blank strings; unwraps the `Option`.
    fn not_null_or_blank<S, F>(self, if_error: F) -> NotNullOrBlank<Self, F>
    where
        Self: Validator<Output = Option<S>>,
        S: AsRef<str>,
        F: Fn() -> Self::Error,
    {
        NotNullOrBlank::new(self, if_error)
    }

    /// Rejects blank strings.
    fn not_blank<F>(self, if_error: F) -> NotBlank<Self, F>
    where
        Self::Output: AsRef<str>,
        F: Fn() -> Self::Error,
    {
        NotBlank::new(self, if_error)
    }

    /// Passes `None` through, but rejects `Some` blank string.
    fn null_or_not_blank<S, F>(self, if_error: F) -> NullOrNotBlank<Self, F>
    where
        Self: Validator<Output = Option<S>>,
        S: AsRef<str>,
        F: Fn() -> Self::Error,
    {
        NullOrNotBlank::new(self, if_error)
    }

    /// Wraps every parse in a `tracing` span and logs rejections at debug level.
    fn traced(self, name: &'static str) -> Traced<Self> {
        Traced::new(self, name)
    }

    /// Erases the concrete type so the validator can live in a static or a field.
    fn boxed(self) -> BoxValidator<Self::Input, Self::Output, Self::Error>
    where
        Self: Send + Sync + 'static,
    {
        BoxValidator::new(self)
    }
}

// Automatically implement ValidatorExt for all Validator implementations
impl<T: Validator> ValidatorExt for T {}

// ============================================================================
// IMPORT COMBINATOR TYPES
// ============================================================================

pub use crate::combinators::filter::Filter;
pub use crate::combinators::flat_map::FlatMap;
pub use crate::combinators::map::Map;
pub use crate::combinators::nulls::{
    AllowNulls, NotBlank, NotNullOrBlank, NullOrNotBlank, WithDefault,
};
pub use crate::combinators::traced::Traced;
pub use crate::combinators::transform::{MapErrors, TransformEither};
