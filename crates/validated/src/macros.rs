//! Convenience macros

// ============================================================================
// ERRORS MACRO
// ============================================================================

/// Builds a non-empty [`Errors`](crate::foundation::Errors) list.
///
/// At least one element is required, so an empty list cannot be written.
///
/// # Examples
///
/// ```rust
/// use nebula_validated::prelude::*;
///
/// let errs = errors!["first", "second"];
/// assert_eq!(errs.len(), 2);
/// assert_eq!(*errs.first(), "first");
/// ```
#[macro_export]
macro_rules! errors {
    ($head:expr $(, $tail:expr)* $(,)?) => {
        $crate::foundation::Errors::from_head_tail($head, [$($tail),*])
    };
}

// ============================================================================
// ZIP MACRO
// ============================================================================

/// Accumulating composition of two to six validators.
///
/// Expands to the matching [`zip`](crate::combinators::zip) ..
/// [`zip6`](crate::combinators::zip6) call.
///
/// # Examples
///
/// ```rust
/// use nebula_validated::prelude::*;
///
/// let name = from::<Option<&str>, _>().not_null_or_blank(|| "name");
/// let code = from::<Option<&str>, _>().not_null_or_blank(|| "code").max_len(3, |_| "code length");
/// let tag = from::<Option<&str>, _>().null_or_not_blank(|| "tag");
///
/// let form = nebula_validated::zip!(name, code, tag);
/// assert_eq!(form.parse(Some("abc")), Validated::valid(("abc", "abc", Some("abc"))));
/// assert_eq!(form.parse(Some("  ")), Validated::invalid_all(errors!["name", "code", "tag"]));
/// ```
#[macro_export]
macro_rules! zip {
    ($a:expr, $b:expr $(,)?) => {
        $crate::combinators::zip($a, $b)
    };
    ($a:expr, $b:expr, $c:expr $(,)?) => {
        $crate::combinators::zip3($a, $b, $c)
    };
    ($a:expr, $b:expr, $c:expr, $d:expr $(,)?) => {
        $crate::combinators::zip4($a, $b, $c, $d)
    };
    ($a:expr, $b:expr, $c:expr, $d:expr, $e:expr $(,)?) => {
        $crate::combinators::zip5($a, $b, $c, $d, $e)
    };
    ($a:expr, $b:expr, $c:expr, $d:expr, $e:expr, $f:expr $(,)?) => {
        $crate::combinators::zip6($a, $b, $c, $d, $e, $f)
    };
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::foundation::{Validated, Validator, ValidatorExt, from};

    #[test]
    fn test_errors_macro_keeps_order() {
        let errs = errors![3, 1, 2];
        assert_eq!(errs.into_vec(), vec![3, 1, 2]);
    }

    #[test]
    fn test_errors_macro_single_and_trailing_comma() {
        assert_eq!(errors!["only"].len(), 1);
        assert_eq!(errors!["a", "b",].len(), 2);
    }

    #[test]
    fn test_zip_macro_dispatches_on_arity() {
        let id = from::<u8, ()>();
        assert_eq!(zip!(id, id).parse(1), Validated::valid((1, 1)));
        assert_eq!(zip!(id, id, id, id).parse(1), Validated::valid((1, 1, 1, 1)));

        let fail = from::<u8, u8>().filter(|_| false, |n| *n);
        assert_eq!(
            zip!(&fail, &fail, &fail).parse(4),
            Validated::invalid_all(errors![4, 4, 4])
        );
    }
}
