//! Rules and rule combinators
//!
//! A [`Rule`] tests one aspect of a record and answers with a
//! [`Verdict`]. Any `Fn(&D) -> Verdict<D::Field, V>` closure or function is a
//! rule, so most rule sets are plain functions:
//!
//! ```rust
//! use std::collections::HashMap;
//! use tidemark::{Alert, Rule, Severity, Verdict};
//!
//! type Form = HashMap<&'static str, String>;
//!
//! fn required_email(form: &Form) -> Verdict<&'static str, Severity> {
//!     let present = form.get("email").is_some_and(|email| !email.is_empty());
//!     Verdict::ensure(present, || Alert::on(Severity::Danger, "required", "email"))
//! }
//!
//! let form: Form = [("email", String::new())].into_iter().collect();
//! assert!(!required_email.check(&form).unwrap().is_pass());
//! ```
//!
//! # Combinators
//!
//! - [`or_relax`] / [`RuleExt::relax_if`]: pass unconditionally while an
//!   escape-hatch condition holds.
//! - [`invert`]: turn an [`Invalidator`] ("fails when P holds") into a rule.
//! - [`try_rule`]: a rule whose evaluation can itself fail.
//! - [`RuleMap`]: at most one rule per field.

mod combinators;
mod map;

pub use combinators::{invert, or_relax, Invalidator, Inverted, OrRelax, Relaxed};
pub use map::RuleMap;

use std::error::Error as StdError;
use std::fmt;
use std::marker::PhantomData;

use crate::{Record, RuleError, Verdict};

/// A pure check over a record.
///
/// Rules must be free of side effects: the validator may run them in any
/// call, any number of times, from any thread holding the validator.
pub trait Rule<D: Record, V>: Send + Sync {
    /// Evaluate the rule against `data`.
    ///
    /// `Err` means the rule could not be evaluated at all. It aborts the
    /// validation call.
    fn check(&self, data: &D) -> Result<Verdict<D::Field, V>, RuleError>;
}

// Blanket impl for infallible closures and functions
impl<D, V, F> Rule<D, V> for F
where
    D: Record,
    F: Fn(&D) -> Verdict<D::Field, V> + Send + Sync,
{
    #[inline]
    fn check(&self, data: &D) -> Result<Verdict<D::Field, V>, RuleError> {
        Ok(self(data))
    }
}

/// A type-erased rule, as stored by a [`Validator`](crate::Validator).
pub type BoxedRule<D, V> = Box<dyn Rule<D, V>>;

/// Box a rule for storage in a rule list.
///
/// Used by the [`rules!`](crate::rules) macro.
pub fn boxed<D, V, R>(rule: R) -> BoxedRule<D, V>
where
    D: Record,
    R: Rule<D, V> + 'static,
{
    Box::new(rule)
}

/// A rule whose evaluation can fail.
///
/// Created by [`try_rule`].
pub struct TryRule<Fun, E> {
    f: Fun,
    _error: PhantomData<fn() -> E>,
}

impl<Fun, E> fmt::Debug for TryRule<Fun, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryRule").finish_non_exhaustive()
    }
}

/// Wrap a fallible check as a rule.
///
/// An `Err` from `f` aborts the validation call and surfaces unmodified as
/// [`ValidateError::Rule`](crate::ValidateError::Rule).
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use std::num::ParseIntError;
/// use tidemark::{rule::try_rule, Alert, Rule, Severity, Verdict};
///
/// type Form = HashMap<&'static str, String>;
///
/// let adult = try_rule(|form: &Form| -> Result<Verdict<&'static str, Severity>, ParseIntError> {
///     let age: u32 = form.get("age").map(String::as_str).unwrap_or("0").parse()?;
///     Ok(Verdict::ensure(age >= 18, || Alert::on(Severity::Danger, "under-18", "age")))
/// });
///
/// let form: Form = [("age", "forty".to_string())].into_iter().collect();
/// assert!(adult.check(&form).is_err());
/// ```
pub fn try_rule<D, V, E, Fun>(f: Fun) -> TryRule<Fun, E>
where
    D: Record,
    Fun: Fn(&D) -> Result<Verdict<D::Field, V>, E> + Send + Sync,
    E: Into<Box<dyn StdError + Send + Sync + 'static>>,
{
    TryRule {
        f,
        _error: PhantomData,
    }
}

impl<D, V, E, Fun> Rule<D, V> for TryRule<Fun, E>
where
    D: Record,
    Fun: Fn(&D) -> Result<Verdict<D::Field, V>, E> + Send + Sync,
    E: Into<Box<dyn StdError + Send + Sync + 'static>>,
{
    fn check(&self, data: &D) -> Result<Verdict<D::Field, V>, RuleError> {
        (self.f)(data).map_err(RuleError::new)
    }
}

/// Extension methods available on every rule.
pub trait RuleExt<D: Record, V>: Rule<D, V> + Sized {
    /// Pass without evaluating this rule while `condition` holds.
    ///
    /// Method form of [`or_relax`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use tidemark::{Alert, Rule, RuleExt, Severity, Verdict};
    ///
    /// type Form = HashMap<&'static str, String>;
    ///
    /// let required_id = |form: &Form| -> Verdict<&'static str, Severity> {
    ///     let present = form.get("id").is_some_and(|id| !id.is_empty());
    ///     Verdict::ensure(present, || Alert::on(Severity::Danger, "required", "id"))
    /// };
    ///
    /// let generate_id = true;
    /// let rule = required_id.relax_if(generate_id);
    ///
    /// let form: Form = [("id", String::new())].into_iter().collect();
    /// assert!(rule.check(&form).unwrap().is_pass());
    /// ```
    fn relax_if(self, condition: bool) -> Relaxed<Self> {
        or_relax(condition).apply(self)
    }
}

impl<D: Record, V, R: Rule<D, V>> RuleExt<D, V> for R {}

/// Build the non-empty rule list taken by
/// [`ValidationDefiner::define`](crate::ValidationDefiner::define).
///
/// Each expression may be any [`Rule`]: a function, a closure, or a
/// combinator.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use tidemark::{rules, Alert, Severity, ValidationDefiner, Verdict};
///
/// type Form = HashMap<&'static str, String>;
///
/// fn required_name(form: &Form) -> Verdict<&'static str, Severity> {
///     let present = form.get("name").is_some_and(|name| !name.is_empty());
///     Verdict::ensure(present, || Alert::on(Severity::Danger, "required", "name"))
/// }
///
/// let validate = ValidationDefiner::declare(Severity::ALL)
///     .unwrap()
///     .define(rules![required_name]);
///
/// let form: Form = [("name", "takuya".to_string())].into_iter().collect();
/// assert!(validate.validate(&form).unwrap().is_clean());
/// ```
#[macro_export]
macro_rules! rules {
    ($head:expr $(, $tail:expr)* $(,)?) => {
        $crate::NonEmptyVec::new(
            $crate::rule::boxed($head),
            ::std::vec![$($crate::rule::boxed($tail)),*],
        )
    };
}
