//! String validators
//!
//! Shaping (`trim`, `strip`, case folding) and checks (`min_len`, `max_len`,
//! `matches`, `parse_as`) for any validator whose output is string-like.
//! Shaping is a `map` and the length checks are a `filter`; `parse_as` is a
//! `transform_either`. `matches` needs a compiled pattern, so it gets its own
//! [`Matches`] combinator and reports a bad pattern at construction.
//!
//! Lengths are counted in Unicode scalar values (`chars`), not bytes.
//!
//! # Examples
//!
//! ```rust
//! use nebula_validated::prelude::*;
//!
//! let username = non_blank_string(|| "username is required")
//!     .trim()
//!     .to_lowercase()
//!     .min_len(3, |_| "username is too short")
//!     .max_len(16, |_| "username is too long");
//!
//! assert_eq!(username.parse(Some("  Ada ".into())), Validated::valid("ada".to_string()));
//! assert_eq!(username.parse(Some("Al".into())), Validated::invalid("username is too short"));
//! ```

use std::str::FromStr;

use crate::combinators::NotNullOrBlank;
#[cfg(feature = "regex")]
use crate::foundation::Validated;
use crate::foundation::{Identity, Validator, ValidatorExt, from};

/// Starts a chain accepting present, non-blank strings.
///
/// Shorthand for `from::<Option<String>, E>().not_null_or_blank(if_error)`.
pub fn non_blank_string<E, F>(if_error: F) -> NotNullOrBlank<Identity<Option<String>, E>, F>
where
    F: Fn() -> E,
{
    from::<Option<String>, E>().not_null_or_blank(if_error)
}

/// String shaping and checking methods, available on every validator with a
/// string-like output.
pub trait StringValidatorExt: Validator + Sized {
    /// Removes leading and trailing whitespace.
    fn trim(self) -> impl Validator<Input = Self::Input, Output = String, Error = Self::Error>
    where
        Self::Output: AsRef<str>;

    /// Removes every occurrence of the given characters.
    fn strip(
        self,
        chars: impl IntoIterator<Item = char>,
    ) -> impl Validator<Input = Self::Input, Output = String, Error = Self::Error>
    where
        Self::Output: AsRef<str>;

    fn to_uppercase(
        self,
    ) -> impl Validator<Input = Self::Input, Output = String, Error = Self::Error>
    where
        Self::Output: AsRef<str>;

    fn to_lowercase(
        self,
    ) -> impl Validator<Input = Self::Input, Output = String, Error = Self::Error>
    where
        Self::Output: AsRef<str>;

    /// Rejects outputs shorter than `min` characters.
    fn min_len<F>(
        self,
        min: usize,
        if_error: F,
    ) -> impl Validator<Input = Self::Input, Output = Self::Output, Error = Self::Error>
    where
        Self::Output: AsRef<str>,
        F: Fn(&Self::Output) -> Self::Error;

    /// Rejects outputs longer than `max` characters.
    fn max_len<F>(
        self,
        max: usize,
        if_error: F,
    ) -> impl Validator<Input = Self::Input, Output = Self::Output, Error = Self::Error>
    where
        Self::Output: AsRef<str>,
        F: Fn(&Self::Output) -> Self::Error;

    /// Rejects outputs that `pattern` does not match in full.
    ///
    /// The whole output must match, as if the pattern were written
    /// `^(?:pattern)$`; a match on a substring is not enough. Fails when
    /// `pattern` is not a valid regular expression.
    ///
    /// ```rust
    /// use nebula_validated::prelude::*;
    ///
    /// let pin = from::<&str, &str>().matches(r"\d{4}", |_| "not a PIN")?;
    /// assert_eq!(pin.parse("1234"), Validated::valid("1234"));
    /// assert_eq!(pin.parse("x1234"), Validated::invalid("not a PIN"));
    /// # Ok::<(), regex::Error>(())
    /// ```
    #[cfg(feature = "regex")]
    fn matches<F>(self, pattern: &str, if_error: F) -> Result<Matches<Self, F>, regex::Error>
    where
        Self::Output: AsRef<str>,
        F: Fn(&Self::Output) -> Self::Error;

    /// Converts the output with [`str::parse`], rejecting unparsable text.
    fn parse_as<T>(
        self,
        if_error: impl Fn(&str) -> Self::Error,
    ) -> impl Validator<Input = Self::Input, Output = T, Error = Self::Error>
    where
        Self::Output: AsRef<str>,
        T: FromStr;
}

impl<V: Validator> StringValidatorExt for V {
    fn trim(self) -> impl Validator<Input = Self::Input, Output = String, Error = Self::Error>
    where
        Self::Output: AsRef<str>,
    {
        self.map(|s| s.as_ref().trim().to_owned())
    }

    fn strip(
        self,
        chars: impl IntoIterator<Item = char>,
    ) -> impl Validator<Input = Self::Input, Output = String, Error = Self::Error>
    where
        Self::Output: AsRef<str>,
    {
        let stripped: Vec<char> = chars.into_iter().collect();
        self.map(move |s| s.as_ref().chars().filter(|c| !stripped.contains(c)).collect::<String>())
    }

    fn to_uppercase(
        self,
    ) -> impl Validator<Input = Self::Input, Output = String, Error = Self::Error>
    where
        Self::Output: AsRef<str>,
    {
        self.map(|s| s.as_ref().to_uppercase())
    }

    fn to_lowercase(
        self,
    ) -> impl Validator<Input = Self::Input, Output = String, Error = Self::Error>
    where
        Self::Output: AsRef<str>,
    {
        self.map(|s| s.as_ref().to_lowercase())
    }

    fn min_len<F>(
        self,
        min: usize,
        if_error: F,
    ) -> impl Validator<Input = Self::Input, Output = Self::Output, Error = Self::Error>
    where
        Self::Output: AsRef<str>,
        F: Fn(&Self::Output) -> Self::Error,
    {
        self.filter(move |s| s.as_ref().chars().count() >= min, if_error)
    }

    fn max_len<F>(
        self,
        max: usize,
        if_error: F,
    ) -> impl Validator<Input = Self::Input, Output = Self::Output, Error = Self::Error>
    where
        Self::Output: AsRef<str>,
        F: Fn(&Self::Output) -> Self::Error,
    {
        self.filter(move |s| s.as_ref().chars().count() <= max, if_error)
    }

    #[cfg(feature = "regex")]
    fn matches<F>(self, pattern: &str, if_error: F) -> Result<Matches<Self, F>, regex::Error>
    where
        Self::Output: AsRef<str>,
        F: Fn(&Self::Output) -> Self::Error,
    {
        let regex = regex::Regex::new(&format!(r"\A(?:{pattern})\z"))?;
        Ok(Matches {
            inner: self,
            regex,
            if_error,
        })
    }

    fn parse_as<T>(
        self,
        if_error: impl Fn(&str) -> Self::Error,
    ) -> impl Validator<Input = Self::Input, Output = T, Error = Self::Error>
    where
        Self::Output: AsRef<str>,
        T: FromStr,
    {
        self.transform_either(move |s| {
            let text = s.as_ref();
            text.parse::<T>().map_err(|_| if_error(text))
        })
    }
}

// ============================================================================
// WHOLE-STRING REGEX MATCH
// ============================================================================

/// Rejects outputs not fully matched by a regular expression.
///
/// Built by [`StringValidatorExt::matches`], which anchors the pattern at
/// both ends.
#[cfg(feature = "regex")]
#[derive(Debug, Clone)]
pub struct Matches<V, F> {
    inner: V,
    regex: regex::Regex,
    if_error: F,
}

#[cfg(feature = "regex")]
impl<V, F> Matches<V, F> {
    /// The anchored expression outputs are checked against.
    pub fn regex(&self) -> &regex::Regex {
        &self.regex
    }
}

#[cfg(feature = "regex")]
impl<V, F> Validator for Matches<V, F>
where
    V: Validator,
    V::Output: AsRef<str>,
    F: Fn(&V::Output) -> V::Error,
{
    type Input = V::Input;
    type Output = V::Output;
    type Error = V::Error;

    fn parse(&self, input: Self::Input) -> Validated<V::Output, V::Error> {
        self.inner.parse(input).and_then(|value| {
            if self.regex.is_match(value.as_ref()) {
                Validated::Valid(value)
            } else {
                Validated::invalid((self.if_error)(&value))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validated;
    use rstest::rstest;

    #[rstest]
    #[case("  padded  ", "padded")]
    #[case("\tinner space kept\n", "inner space kept")]
    #[case("", "")]
    fn test_trim(#[case] input: &str, #[case] expected: &str) {
        let v = from::<&str, ()>().trim();
        assert_eq!(v.parse(input), Validated::valid(expected.to_string()));
    }

    #[test]
    fn test_trim_twice_equals_once() {
        let once = from::<&str, ()>().trim();
        let twice = from::<&str, ()>().trim().trim();
        for s in ["", "  a ", "b", " \t\n "] {
            assert_eq!(once.parse(s), twice.parse(s));
        }
    }

    #[test]
    fn test_strip() {
        let v = from::<&str, ()>().strip(['-', ' ']);
        assert_eq!(v.parse("555-12 34"), Validated::valid("5551234".to_string()));
    }

    #[test]
    fn test_case_folding() {
        assert_eq!(
            from::<&str, ()>().to_uppercase().parse("MiXed"),
            Validated::valid("MIXED".to_string())
        );
        assert_eq!(
            from::<&str, ()>().to_lowercase().parse("MiXed"),
            Validated::valid("mixed".to_string())
        );
    }

    #[test]
    fn test_lengths_count_chars() {
        let v = from::<&str, &str>()
            .min_len(2, |_| "short")
            .max_len(3, |_| "long");
        assert_eq!(v.parse("é"), Validated::invalid("short"));
        assert_eq!(v.parse("éé"), Validated::valid("éé"));
        assert_eq!(v.parse("éééé"), Validated::invalid("long"));
    }

    #[cfg(feature = "regex")]
    #[rstest]
    #[case("1234", true)]
    #[case("abc1234xyz", false)]
    #[case("12345", false)]
    #[case("1234\n", false)]
    #[case("", false)]
    fn test_matches_whole_output(#[case] input: &str, #[case] accepted: bool) {
        let v = from::<&str, String>()
            .matches(r"\d{4}", |s| format!("'{s}' is not a PIN"))
            .unwrap();
        assert_eq!(v.parse(input).is_valid(), accepted);
    }

    #[cfg(feature = "regex")]
    #[test]
    fn test_matches_alternation_must_cover_input() {
        let v = from::<&str, ()>().matches("a|ab", |_| ()).unwrap();
        assert_eq!(v.parse("ab"), Validated::valid("ab"));
        assert!(v.parse("abc").is_invalid());
    }

    #[cfg(feature = "regex")]
    #[test]
    fn test_matches_error_sees_value() {
        let v = from::<&str, String>()
            .matches("[a-z]+", |s| format!("'{s}' is not lowercase"))
            .unwrap();
        assert_eq!(v.parse("Abc"), Validated::invalid("'Abc' is not lowercase".to_string()));
    }

    #[cfg(feature = "regex")]
    #[test]
    fn test_matches_anchors_pattern() {
        let v = from::<&str, ()>().matches(r"\d{4}", |_| ()).unwrap();
        assert_eq!(v.regex().as_str(), r"\A(?:\d{4})\z");
    }

    #[cfg(feature = "regex")]
    #[test]
    fn test_matches_rejects_invalid_pattern() {
        assert!(from::<&str, ()>().matches("(unclosed", |_| ()).is_err());
    }

    #[test]
    fn test_parse_as() {
        let v = from::<&str, String>().trim().parse_as::<i64>(|s| format!("bad number: {s}"));
        assert_eq!(v.parse(" -17 "), Validated::valid(-17));
        assert_eq!(v.parse("x"), Validated::invalid("bad number: x".to_string()));
    }

    #[test]
    fn test_non_blank_string() {
        let v = non_blank_string(|| "required");
        assert_eq!(v.parse(Some("x".into())), Validated::valid("x".to_string()));
        assert_eq!(v.parse(Some(" ".into())), Validated::invalid("required"));
        assert_eq!(v.parse(None), Validated::invalid("required"));
    }
}
