//! A ready-made error value for validators
//!
//! The engine is generic over its error type, so callers can use plain
//! strings, enums, or their own structs. [`Violation`] is the batteries-included
//! choice: a stable `code` for programmatic handling, a human-readable
//! `message`, and an optional `field` path filled in when a field validator is
//! composed into a larger form.

use std::borrow::Cow;
use std::fmt;

/// A single broken validation rule.
///
/// All string fields use `Cow<'static, str>` so static codes and messages
/// cost no allocation.
///
/// # Examples
///
/// ```rust
/// use nebula_validated::foundation::Violation;
///
/// let violation = Violation::min_length(8).with_field("password");
/// assert_eq!(violation.code, "min_length");
/// assert_eq!(violation.to_string(), "[password] min_length: must be at least 8 characters");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Violation {
    /// Error code, e.g. "required", "min_length".
    pub code: Cow<'static, str>,
    /// Default English message.
    pub message: Cow<'static, str>,
    /// Field path such as "user.email", when known.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub field: Option<Cow<'static, str>>,
}

impl Violation {
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
        }
    }

    /// Sets the field path for this violation.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Prefixes the field path, e.g. `"email"` under `"user"` becomes `"user.email"`.
    #[must_use = "builder methods must be chained or built"]
    pub fn nested_under(mut self, parent: &str) -> Self {
        self.field = Some(match self.field.take() {
            Some(field) => Cow::Owned(format!("{parent}.{field}")),
            None => Cow::Owned(parent.to_owned()),
        });
        self
    }
}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl Violation {
    #[must_use]
    pub fn required() -> Self {
        Self::new("required", "value is required")
    }

    #[must_use]
    pub fn blank() -> Self {
        Self::new("blank", "must not be blank")
    }

    #[must_use]
    pub fn min_length(min: usize) -> Self {
        Self::new("min_length", format!("must be at least {min} characters"))
    }

    #[must_use]
    pub fn max_length(max: usize) -> Self {
        Self::new("max_length", format!("must be at most {max} characters"))
    }

    pub fn pattern_mismatch(pattern: impl fmt::Display) -> Self {
        Self::new("pattern", format!("must match pattern '{pattern}'"))
    }

    pub fn not_one_of(value: impl fmt::Display) -> Self {
        Self::new("one_of", format!("'{value}' is not an accepted value"))
    }

    pub fn out_of_range(value: impl fmt::Display) -> Self {
        Self::new("out_of_range", format!("{value} is out of range"))
    }

    pub fn unparsable(value: impl fmt::Display, expected: &'static str) -> Self {
        Self::new("unparsable", format!("'{value}' is not a valid {expected}"))
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "[{}] {}: {}", field, self.code, self.message),
            None => write!(f, "{}: {}", self.code, self.message),
        }
    }
}

impl std::error::Error for Violation {}
