//! Testing utilities
//!
//! Assertion macros for checking a [`ValidationResult`](crate::ValidationResult)
//! in tests without spelling out nested lookups.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::HashMap;
//! use tidemark::{assert_alerts, assert_clean, rules, Alert, Severity, ValidationDefiner, Verdict};
//!
//! type Form = HashMap<&'static str, String>;
//!
//! let validate = ValidationDefiner::declare(Severity::ALL).unwrap().define(rules![
//!     |form: &Form| -> Verdict<&'static str, Severity> {
//!         let ok = form.get("name").is_some_and(|n| !n.is_empty());
//!         Verdict::ensure(ok, || Alert::on(Severity::Danger, "required", "name"))
//!     },
//! ]);
//!
//! let ok: Form = [("name", "takuya".to_string())].into_iter().collect();
//! assert_clean!(validate.validate(&ok).unwrap());
//!
//! let empty: Form = [("name", String::new())].into_iter().collect();
//! let result = validate.validate(&empty).unwrap();
//! assert_alerts!(result, "name", Severity::Danger, ["required"]);
//! assert_alerts!(result, "name", Severity::Warning, []);
//! ```

/// Assert that a validation result holds no alerts at all.
///
/// Panics with the offending result otherwise.
#[macro_export]
macro_rules! assert_clean {
    ($result:expr) => {
        match &$result {
            result if result.is_clean() => {}
            result => {
                panic!("Expected a clean result, got alerts: {:?}", result);
            }
        }
    };
}

/// Assert the exact set of alert names recorded for a field and variant.
///
/// Panics if the (field, variant) pair is missing from the result or if the
/// names differ.
#[macro_export]
macro_rules! assert_alerts {
    ($result:expr, $field:expr, $variant:expr, [$($name:expr),* $(,)?]) => {{
        let expected_names: &[&str] = &[$($name),*];
        let expected: ::std::collections::HashSet<::std::string::String> = expected_names
            .iter()
            .map(|name| ::std::string::ToString::to_string(name))
            .collect();
        let field = $field;
        let variant = $variant;
        match $result.names(&field, &variant) {
            ::std::option::Option::Some(actual) => {
                assert_eq!(
                    actual, &expected,
                    "alert names for field {:?} under {:?}",
                    field, variant
                );
            }
            ::std::option::Option::None => {
                panic!(
                    "Expected alerts for field {:?} under {:?}, but the pair is missing",
                    field, variant
                );
            }
        }
    }};
}

#[cfg(test)]
mod tests {
    use crate::{Severity, ValidationResult};

    fn result() -> ValidationResult<&'static str, Severity> {
        let mut result = ValidationResult::seeded(["name"], &Severity::ALL);
        result
            .get_mut(&"name")
            .and_then(|sets| sets.get_mut(&Severity::Danger))
            .unwrap()
            .insert("required".to_string());
        result
    }

    #[test]
    fn assert_alerts_macro() {
        let result = result();
        assert_alerts!(result, "name", Severity::Danger, ["required"]);
        assert_alerts!(result, "name", Severity::Info, []);
    }

    #[test]
    fn assert_clean_macro() {
        let result = ValidationResult::<&'static str, Severity>::seeded(["name"], &Severity::ALL);
        assert_clean!(result);
    }

    #[test]
    #[should_panic(expected = "Expected a clean result")]
    fn assert_clean_panics_on_alerts() {
        assert_clean!(result());
    }

    #[test]
    #[should_panic(expected = "alert names for field")]
    fn assert_alerts_panics_on_mismatch() {
        assert_alerts!(result(), "name", Severity::Danger, ["other"]);
    }

    #[test]
    #[should_panic(expected = "but the pair is missing")]
    fn assert_alerts_panics_on_missing_field() {
        assert_alerts!(result(), "email", Severity::Danger, []);
    }
}
