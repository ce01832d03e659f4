//! OR-relaxation and polarity inversion
//!
//! Both combinators turn one rule into another without touching the
//! validator.

use super::Rule;
use crate::{Alert, Record, RuleError, Verdict};

/// A pending OR-relaxation, created by [`or_relax`].
///
/// Apply it to any number of rules with [`OrRelax::apply`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrRelax {
    condition: bool,
}

/// Relax rules under an escape-hatch condition.
///
/// A relaxed rule passes without being evaluated while `condition` is true,
/// and behaves exactly like the wrapped rule otherwise. Do not rely on the
/// wrapped rule running.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use tidemark::{rule::or_relax, Alert, Rule, Severity, Verdict};
///
/// type Form = HashMap<&'static str, String>;
///
/// fn required_id(form: &Form) -> Verdict<&'static str, Severity> {
///     let present = form.get("id").is_some_and(|id| !id.is_empty());
///     Verdict::ensure(present, || Alert::on(Severity::Danger, "required", "id"))
/// }
///
/// let form: Form = [("id", String::new())].into_iter().collect();
///
/// let when_generated = or_relax(true);
/// assert!(when_generated.apply(required_id).check(&form).unwrap().is_pass());
///
/// let when_typed = or_relax(false);
/// assert!(!when_typed.apply(required_id).check(&form).unwrap().is_pass());
/// ```
pub fn or_relax(condition: bool) -> OrRelax {
    OrRelax { condition }
}

impl OrRelax {
    /// Wrap `rule`.
    pub fn apply<R>(self, rule: R) -> Relaxed<R> {
        Relaxed {
            condition: self.condition,
            rule,
        }
    }
}

/// A rule that passes while its condition holds.
///
/// Created by [`OrRelax::apply`] or [`RuleExt::relax_if`](super::RuleExt::relax_if).
#[derive(Clone, Copy, Debug)]
pub struct Relaxed<R> {
    condition: bool,
    rule: R,
}

impl<D: Record, V, R: Rule<D, V>> Rule<D, V> for Relaxed<R> {
    #[inline]
    fn check(&self, data: &D) -> Result<Verdict<D::Field, V>, RuleError> {
        if self.condition {
            Ok(Verdict::Pass)
        } else {
            self.rule.check(data)
        }
    }
}

/// A check with inverted polarity: `None` when there is nothing to report,
/// `Some(alert)` when there is.
///
/// Lets a rule be written as "fails when P holds" instead of double-negating
/// "passes unless P holds". Convert with [`invert`].
pub trait Invalidator<D: Record, V>: Send + Sync {
    /// Look for a problem in `data`.
    fn detect(&self, data: &D) -> Option<Alert<D::Field, V>>;
}

impl<D, V, F> Invalidator<D, V> for F
where
    D: Record,
    F: Fn(&D) -> Option<Alert<D::Field, V>> + Send + Sync,
{
    #[inline]
    fn detect(&self, data: &D) -> Option<Alert<D::Field, V>> {
        self(data)
    }
}

/// An [`Invalidator`] converted into a [`Rule`]. Created by [`invert`].
#[derive(Clone, Copy, Debug)]
pub struct Inverted<I>(pub I);

/// Convert an invalidator into a rule.
///
/// The rule passes when the invalidator finds nothing and propagates the
/// invalidator's alert unchanged otherwise.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use tidemark::{rule::invert, Alert, Rule, Severity};
///
/// type Form = HashMap<&'static str, String>;
///
/// let required_password = invert(|form: &Form| -> Option<Alert<&'static str, Severity>> {
///     let missing = form.get("password").is_none_or(|p| p.is_empty());
///     missing.then(|| Alert::on(Severity::Danger, "required", "password"))
/// });
///
/// let empty: Form = [("password", String::new())].into_iter().collect();
/// assert!(!required_password.check(&empty).unwrap().is_pass());
/// ```
pub fn invert<I>(invalidator: I) -> Inverted<I> {
    Inverted(invalidator)
}

impl<D: Record, V, I: Invalidator<D, V>> Rule<D, V> for Inverted<I> {
    #[inline]
    fn check(&self, data: &D) -> Result<Verdict<D::Field, V>, RuleError> {
        Ok(self.0.detect(data).into())
    }
}
