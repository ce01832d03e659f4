//! Error types
//!
//! Two phases can fail. [`DefineError`] is raised while declaring variants or
//! binding rules and means the declaration itself must be fixed.
//! [`ValidateError`] aborts a single validation call: either a rule reported
//! an alert outside the shape the result was initialised for (a bug in the
//! rule, not in the data), or a fallible rule returned an error.
//!
//! Neither is a "the data is invalid" error. Invalid data is reported through
//! alerts in a [`ValidationResult`](crate::ValidationResult).

use std::error::Error as StdError;
use std::fmt;

/// Error raised while declaring variants or binding a rule set.
///
/// # Examples
///
/// ```
/// use tidemark::{DefineError, ValidationDefiner};
///
/// let err = ValidationDefiner::declare(["danger", "warning", "danger"]).unwrap_err();
/// assert_eq!(err, DefineError::DuplicateVariant("\"danger\"".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefineError {
    /// The variant list was empty.
    NoVariants,
    /// A variant label was declared more than once. Carries the label's
    /// `Debug` rendering.
    DuplicateVariant(String),
    /// A rule map with no entries was bound.
    NoRules,
}

impl fmt::Display for DefineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefineError::NoVariants => write!(f, "at least one variant must be declared"),
            DefineError::DuplicateVariant(variant) => {
                write!(f, "variant {} is declared more than once", variant)
            }
            DefineError::NoRules => write!(f, "at least one rule must be bound"),
        }
    }
}

impl StdError for DefineError {}

/// An error returned by a fallible rule, passed through unmodified.
///
/// The original error is available through [`source`](StdError::source) and
/// [`downcast_ref`](RuleError::downcast_ref).
#[derive(Debug)]
pub struct RuleError {
    inner: Box<dyn StdError + Send + Sync + 'static>,
}

impl RuleError {
    /// Wrap an error raised by a rule.
    pub fn new(error: impl Into<Box<dyn StdError + Send + Sync + 'static>>) -> Self {
        RuleError {
            inner: error.into(),
        }
    }

    /// Borrow the original error as a concrete type, if it is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::num::ParseIntError;
    /// use tidemark::RuleError;
    ///
    /// let parse_err = "x".parse::<u32>().unwrap_err();
    /// let err = RuleError::new(parse_err.clone());
    /// assert_eq!(err.downcast_ref::<ParseIntError>(), Some(&parse_err));
    /// ```
    pub fn downcast_ref<T: StdError + 'static>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Consume and return the original error.
    pub fn into_inner(self) -> Box<dyn StdError + Send + Sync + 'static> {
        self.inner
    }
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl StdError for RuleError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&*self.inner)
    }
}

/// Error that aborts a validation call. No partial result is returned.
#[derive(Debug)]
pub enum ValidateError {
    /// An alert implicated a field the validated record does not have.
    UnknownField {
        /// Name of the offending alert.
        rule: String,
        /// `Debug` rendering of the field.
        field: String,
    },
    /// An alert used a variant outside the declared set.
    UnknownVariant {
        /// Name of the offending alert.
        rule: String,
        /// `Debug` rendering of the variant.
        variant: String,
    },
    /// A fallible rule returned an error.
    Rule(RuleError),
}

impl ValidateError {
    /// Whether this error reports a rule breaking the alert contract, as
    /// opposed to a rule failing to evaluate.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            ValidateError::UnknownField { .. } | ValidateError::UnknownVariant { .. }
        )
    }
}

impl fmt::Display for ValidateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidateError::UnknownField { rule, field } => write!(
                f,
                "alert '{}' implicates field {} which the record does not have",
                rule, field
            ),
            ValidateError::UnknownVariant { rule, variant } => write!(
                f,
                "alert '{}' uses variant {} which was not declared",
                rule, variant
            ),
            ValidateError::Rule(err) => write!(f, "rule failed: {}", err),
        }
    }
}

impl StdError for ValidateError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            ValidateError::Rule(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RuleError> for ValidateError {
    fn from(err: RuleError) -> Self {
        ValidateError::Rule(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_define_error_display() {
        assert_eq!(
            DefineError::DuplicateVariant("\"info\"".into()).to_string(),
            "variant \"info\" is declared more than once"
        );
        assert_eq!(
            DefineError::NoVariants.to_string(),
            "at least one variant must be declared"
        );
    }

    #[test]
    fn test_validate_error_display() {
        let err = ValidateError::UnknownField {
            rule: "required".into(),
            field: "Email".into(),
        };
        assert_eq!(
            err.to_string(),
            "alert 'required' implicates field Email which the record does not have"
        );
        assert!(err.is_contract_violation());
    }

    #[test]
    fn test_rule_error_source_is_original() {
        let parse_err = "abc".parse::<i32>().unwrap_err();
        let err = ValidateError::from(RuleError::new(parse_err.clone()));

        assert!(!err.is_contract_violation());
        let rule_err = err.source().unwrap();
        let original = rule_err.source().unwrap();
        assert_eq!(original.to_string(), parse_err.to_string());
        assert_eq!(err.to_string(), format!("rule failed: {}", parse_err));
    }
}
