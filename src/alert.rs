//! Alerts and verdicts
//!
//! A rule answers with a [`Verdict`]: either [`Verdict::Pass`] or
//! [`Verdict::Alert`] carrying an [`Alert`]. An alert names exactly one
//! variant, an opaque rule name, and one or more implicated fields.
//!
//! ```
//! use tidemark::{Alert, Severity, Verdict};
//!
//! let verdict: Verdict<&str, Severity> = Verdict::ensure(false, || {
//!     Alert::new(Severity::Danger, "not-confirm-pass", tidemark::nonempty!["password", "confirm"])
//! });
//!
//! let alert = verdict.into_alert().unwrap();
//! assert_eq!(alert.name(), "not-confirm-pass");
//! assert_eq!(alert.fields().len(), 2);
//! ```

use crate::NonEmptyVec;

/// A structured report of one violated rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert<F, V> {
    variant: V,
    name: String,
    fields: NonEmptyVec<F>,
}

impl<F, V> Alert<F, V> {
    /// Create an alert implicating one or more fields.
    pub fn new(variant: V, name: impl Into<String>, fields: NonEmptyVec<F>) -> Self {
        Alert {
            variant,
            name: name.into(),
            fields,
        }
    }

    /// Create an alert implicating a single field.
    ///
    /// ```
    /// use tidemark::{Alert, Severity};
    ///
    /// let alert = Alert::on(Severity::Danger, "required", "user_id");
    /// assert_eq!(alert.fields().head(), &"user_id");
    /// ```
    pub fn on(variant: V, name: impl Into<String>, field: F) -> Self {
        Self::new(variant, name, NonEmptyVec::singleton(field))
    }

    /// The variant this alert is classified under.
    pub fn variant(&self) -> &V {
        &self.variant
    }

    /// The rule name. Opaque to the validator.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The implicated fields, as reported (duplicates included).
    pub fn fields(&self) -> &NonEmptyVec<F> {
        &self.fields
    }

    /// Split into variant, name and fields.
    pub fn into_parts(self) -> (V, String, NonEmptyVec<F>) {
        (self.variant, self.name, self.fields)
    }
}

/// The outcome of running one rule against a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict<F, V> {
    /// No problem found.
    Pass,
    /// The rule was violated.
    Alert(Alert<F, V>),
}

impl<F, V> Verdict<F, V> {
    /// A failing verdict with an alert on a single field.
    #[inline]
    pub fn alert(variant: V, name: impl Into<String>, field: F) -> Self {
        Verdict::Alert(Alert::on(variant, name, field))
    }

    /// Pass when `ok` holds, otherwise build the alert.
    ///
    /// The alert closure only runs on failure.
    ///
    /// ```
    /// use tidemark::{Alert, Severity, Verdict};
    ///
    /// let age = 17;
    /// let verdict: Verdict<&str, Severity> =
    ///     Verdict::ensure(age >= 18, || Alert::on(Severity::Danger, "under-18", "age"));
    /// assert!(!verdict.is_pass());
    /// ```
    #[inline]
    pub fn ensure(ok: bool, alert: impl FnOnce() -> Alert<F, V>) -> Self {
        if ok {
            Verdict::Pass
        } else {
            Verdict::Alert(alert())
        }
    }

    /// Whether the rule passed.
    #[inline]
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }

    /// The alert, if the rule was violated.
    #[inline]
    pub fn into_alert(self) -> Option<Alert<F, V>> {
        match self {
            Verdict::Pass => None,
            Verdict::Alert(alert) => Some(alert),
        }
    }
}

// `None` means nothing to report.
impl<F, V> From<Option<Alert<F, V>>> for Verdict<F, V> {
    fn from(alert: Option<Alert<F, V>>) -> Self {
        match alert {
            Some(alert) => Verdict::Alert(alert),
            None => Verdict::Pass,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{nonempty, Severity};

    #[test]
    fn test_alert_accessors() {
        let alert: Alert<&str, Severity> = Alert::new(
            Severity::Danger,
            "not-confirm-pass",
            nonempty!["password", "confirm"],
        );
        assert_eq!(alert.variant(), &Severity::Danger);
        assert_eq!(alert.name(), "not-confirm-pass");
        assert_eq!(alert.fields().clone().into_vec(), vec!["password", "confirm"]);
    }

    #[test]
    fn test_ensure_builds_alert_lazily() {
        let verdict: Verdict<&str, Severity> = Verdict::ensure(true, || {
            panic!("alert must not be built when the check passes")
        });
        assert!(verdict.is_pass());
    }

    #[test]
    fn test_from_option() {
        let none: Option<Alert<&str, Severity>> = None;
        assert_eq!(Verdict::from(none), Verdict::Pass);

        let some = Some(Alert::on(Severity::Info, "hint", "email"));
        assert_eq!(
            Verdict::from(some),
            Verdict::alert(Severity::Info, "hint", "email")
        );
    }

    #[test]
    fn test_into_parts() {
        let (variant, name, fields) = Alert::on(Severity::Warning, "weak", "password").into_parts();
        assert_eq!(variant, Severity::Warning);
        assert_eq!(name, "weak");
        assert_eq!(fields, NonEmptyVec::singleton("password"));
    }
}
