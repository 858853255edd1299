//! ZIP combinators - error-accumulating composition
//!
//! A zip runs several independent validators against the same input and
//! merges the outcomes:
//!
//! - all branches succeed: `Valid` of the tuple of outputs, in argument order;
//! - otherwise: `Invalid` with every failing branch's errors concatenated in
//!   argument order, each branch's own order preserved.
//!
//! Branches never short-circuit and never see each other's results. Each
//! branch receives its own clone of the input.
//!
//! # Examples
//!
//! ```rust
//! use nebula_validated::prelude::*;
//!
//! let p1 = from::<Option<&str>, _>().not_null_or_blank(|| "foo").min_len(2, |_| "len");
//! let p2 = from::<Option<&str>, _>().not_null_or_blank(|| "bar");
//! let p = zip(p1, p2);
//!
//! assert_eq!(p.parse(None), Validated::invalid_all(errors!["foo", "bar"]));
//! assert_eq!(p.parse(Some("a")), Validated::invalid("len"));
//! assert_eq!(p.parse(Some("ab")), Validated::valid(("ab", "ab")));
//! ```

use crate::foundation::{Validated, Validator};

/// Builds the nested pair pattern `((a, b), c)` matching a left fold of
/// [`Validated::zip`].
macro_rules! nested_pattern {
    ($acc:tt ;) => { $acc };
    ($acc:tt ; $head:ident $($tail:ident)*) => { nested_pattern!(($acc, $head) ; $($tail)*) };
}

macro_rules! define_zip {
    (
        $(#[$meta:meta])*
        $name:ident, $factory:ident;
        $first:ident: $First:ident $(, $rest:ident: $Rest:ident)+
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name<$First, $($Rest),+> {
            $first: $First,
            $($rest: $Rest,)+
        }

        impl<$First, $($Rest),+> $name<$First, $($Rest),+> {
            pub fn new($first: $First, $($rest: $Rest),+) -> Self {
                Self { $first, $($rest),+ }
            }

            /// Extracts the branch validators.
            pub fn into_parts(self) -> ($First, $($Rest),+) {
                (self.$first, $(self.$rest),+)
            }
        }

        impl<$First, $($Rest),+> Validator for $name<$First, $($Rest),+>
        where
            $First: Validator,
            $First::Input: Clone,
            $($Rest: Validator<Input = $First::Input, Error = $First::Error>,)+
        {
            type Input = $First::Input;
            type Output = ($First::Output, $($Rest::Output),+);
            type Error = $First::Error;

            fn parse(&self, input: Self::Input) -> Validated<Self::Output, Self::Error> {
                // Collect every branch first, then merge.
                let $first = self.$first.parse(input.clone());
                $(let $rest = self.$rest.parse(input.clone());)+

                let merged = $first
                    $(.zip($rest))+
                    .map(|nested_pattern!($first ; $($rest)+)| ($first, $($rest),+));

                if let Validated::Invalid(errors) = &merged {
                    tracing::trace!(
                        combinator = stringify!($name),
                        errors = errors.len(),
                        "zip accumulated errors"
                    );
                }
                merged
            }
        }

        #[doc = concat!("Creates a [`", stringify!($name), "`] from its branch validators.")]
        pub fn $factory<$First, $($Rest),+>(
            $first: $First,
            $($rest: $Rest),+
        ) -> $name<$First, $($Rest),+>
        where
            $First: Validator,
            $First::Input: Clone,
            $($Rest: Validator<Input = $First::Input, Error = $First::Error>,)+
        {
            $name::new($first, $($rest),+)
        }
    };
}

define_zip! {
    /// Runs two validators on the same input, accumulating errors.
    Zip, zip;
    a: A, b: B
}

define_zip! {
    /// Runs three validators on the same input, accumulating errors.
    Zip3, zip3;
    a: A, b: B, c: C
}

define_zip! {
    /// Runs four validators on the same input, accumulating errors.
    Zip4, zip4;
    a: A, b: B, c: C, d: D
}

define_zip! {
    /// Runs five validators on the same input, accumulating errors.
    Zip5, zip5;
    a: A, b: B, c: C, d: D, e: E
}

define_zip! {
    /// Runs six validators on the same input, accumulating errors.
    Zip6, zip6;
    a: A, b: B, c: C, d: D, e: E, f: F
}
