//! Validation definer: variants, then rules, then data
//!
//! Building a validator happens in three stages:
//!
//! 1. [`ValidationDefiner::declare`] fixes the closed set of variants.
//! 2. [`ValidationDefiner::define`] binds an ordered, non-empty rule list and
//!    returns a [`Validator`]. One definer can bind any number of rule lists.
//! 3. [`Validator::validate`] runs every rule against one record and collects
//!    every alert into a [`ValidationResult`].
//!
//! # Example
//!
//! ```rust
//! use tidemark::{rules, Alert, Record, Severity, ValidationDefiner, Verdict};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum Field {
//!     Name,
//!     Age,
//! }
//!
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! impl Record for Person {
//!     type Field = Field;
//!
//!     fn fields(&self) -> Vec<Field> {
//!         vec![Field::Name, Field::Age]
//!     }
//! }
//!
//! fn required_name(p: &Person) -> Verdict<Field, Severity> {
//!     Verdict::ensure(!p.name.is_empty(), || Alert::on(Severity::Danger, "required-name", Field::Name))
//! }
//!
//! fn adult(p: &Person) -> Verdict<Field, Severity> {
//!     Verdict::ensure(p.age >= 18, || Alert::on(Severity::Danger, "under-18", Field::Age))
//! }
//!
//! fn over_twenty(p: &Person) -> Verdict<Field, Severity> {
//!     Verdict::ensure(p.age >= 20, || Alert::on(Severity::Warning, "under-20", Field::Age))
//! }
//!
//! let define = ValidationDefiner::declare(Severity::ALL).unwrap();
//! let validate_person = define.define(rules![required_name, adult, over_twenty]);
//!
//! let result = validate_person
//!     .validate(&Person { name: "takuya".into(), age: 19 })
//!     .unwrap();
//!
//! assert!(result[&Field::Name].is_empty());
//! assert!(result[&Field::Age][&Severity::Danger].is_empty());
//! assert!(result[&Field::Age][&Severity::Warning].contains("under-20"));
//! ```

use std::collections::HashSet;
use std::fmt::{self, Debug};
use std::hash::Hash;
use std::sync::Arc;

use crate::rule::BoxedRule;
use crate::{
    Alert, DefineError, NonEmptyVec, Record, RuleMap, ValidateError, ValidationResult, Verdict,
};

/// A declared, closed set of variants.
///
/// Cheap to clone; the variant list is shared.
#[derive(Debug, Clone)]
pub struct ValidationDefiner<V> {
    variants: Arc<[V]>,
}

impl<V> ValidationDefiner<V>
where
    V: Clone + Eq + Hash + Debug,
{
    /// Declare the variants alerts may be classified under.
    ///
    /// # Errors
    ///
    /// [`DefineError::NoVariants`] if `variants` is empty,
    /// [`DefineError::DuplicateVariant`] if a label repeats.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidemark::{DefineError, ValidationDefiner};
    ///
    /// assert!(ValidationDefiner::declare(["danger", "warning", "info"]).is_ok());
    /// assert_eq!(
    ///     ValidationDefiner::<&str>::declare([]).unwrap_err(),
    ///     DefineError::NoVariants
    /// );
    /// ```
    pub fn declare(variants: impl IntoIterator<Item = V>) -> Result<Self, DefineError> {
        let variants: Vec<V> = variants.into_iter().collect();
        if variants.is_empty() {
            return Err(DefineError::NoVariants);
        }

        let mut seen = HashSet::with_capacity(variants.len());
        if let Some(duplicate) = variants.iter().find(|variant| !seen.insert(*variant)) {
            return Err(DefineError::DuplicateVariant(format!("{:?}", duplicate)));
        }

        Ok(ValidationDefiner {
            variants: variants.into(),
        })
    }

    /// The declared variants, in declaration order.
    pub fn variants(&self) -> &[V] {
        &self.variants
    }

    /// Bind an ordered rule list.
    ///
    /// Use the [`rules!`](crate::rules) macro to build the list.
    pub fn define<D: Record>(&self, rules: NonEmptyVec<BoxedRule<D, V>>) -> Validator<D, V> {
        Validator {
            variants: Arc::clone(&self.variants),
            rules: rules.into_vec().into(),
        }
    }

    /// Bind the rules of a [`RuleMap`], in insertion order.
    ///
    /// # Errors
    ///
    /// [`DefineError::NoRules`] if the map is empty.
    pub fn define_map<D: Record>(&self, map: RuleMap<D, V>) -> Result<Validator<D, V>, DefineError> {
        let rules = map.into_rules().ok_or(DefineError::NoRules)?;
        Ok(self.define(rules))
    }
}

/// A bound rule set, ready to validate records.
///
/// Holds no mutable state: repeated calls with equal data give equal results,
/// and a validator may be shared across threads.
pub struct Validator<D: Record, V> {
    variants: Arc<[V]>,
    rules: Arc<[BoxedRule<D, V>]>,
}

impl<D: Record, V> Clone for Validator<D, V> {
    fn clone(&self) -> Self {
        Validator {
            variants: Arc::clone(&self.variants),
            rules: Arc::clone(&self.rules),
        }
    }
}

impl<D: Record, V: Debug> Debug for Validator<D, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("variants", &self.variants)
            .field("rules", &self.rules.len())
            .finish()
    }
}

impl<D, V> Validator<D, V>
where
    D: Record,
    V: Clone + Eq + Hash + Debug,
{
    /// Run every rule against `data` and collect every alert.
    ///
    /// # Errors
    ///
    /// Fails when a rule reports a field `data` does not have, a variant that
    /// was not declared, or returns an error itself. No partial result is
    /// returned.
    pub fn validate(&self, data: &D) -> Result<ValidationResult<D::Field, V>, ValidateError> {
        self.run(data, |_| {})
    }

    /// Like [`validate`](Self::validate), also handing each alert to
    /// `on_alert` as soon as its rule reports it, in rule order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use tidemark::{rules, Alert, Severity, ValidationDefiner, Verdict};
    ///
    /// type Form = HashMap<&'static str, String>;
    ///
    /// let validate = ValidationDefiner::declare(Severity::ALL).unwrap().define(rules![
    ///     |_: &Form| Verdict::<&'static str, Severity>::alert(Severity::Info, "first", "a"),
    ///     |_: &Form| Verdict::<&'static str, Severity>::alert(Severity::Info, "second", "a"),
    /// ]);
    ///
    /// let form: Form = [("a", String::new())].into_iter().collect();
    /// let mut seen = Vec::new();
    /// validate
    ///     .validate_with(&form, |alert| seen.push(alert.name().to_string()))
    ///     .unwrap();
    ///
    /// assert_eq!(seen, ["first", "second"]);
    /// ```
    pub fn validate_with<Obs>(
        &self,
        data: &D,
        on_alert: Obs,
    ) -> Result<ValidationResult<D::Field, V>, ValidateError>
    where
        Obs: FnMut(&Alert<D::Field, V>),
    {
        self.run(data, on_alert)
    }

    /// The declared variants.
    pub fn variants(&self) -> &[V] {
        &self.variants
    }

    /// Number of bound rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    fn run<Obs>(
        &self,
        data: &D,
        mut on_alert: Obs,
    ) -> Result<ValidationResult<D::Field, V>, ValidateError>
    where
        Obs: FnMut(&Alert<D::Field, V>),
    {
        let mut result = ValidationResult::seeded(data.fields(), &self.variants);
        #[cfg(feature = "tracing")]
        let mut alerts = 0usize;

        for rule in self.rules.iter() {
            let alert = match rule.check(data) {
                Ok(Verdict::Pass) => continue,
                Ok(Verdict::Alert(alert)) => alert,
                Err(err) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!("Rule failed during validation: {}", err);
                    return Err(ValidateError::Rule(err));
                }
            };

            on_alert(&alert);
            #[cfg(feature = "tracing")]
            {
                alerts += 1;
                tracing::trace!(
                    alert = alert.name(),
                    variant = ?alert.variant(),
                    fields = alert.fields().len(),
                    "alert detected"
                );
            }

            record(&mut result, &alert)?;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            rules = self.rules.len(),
            alerts,
            clean = result.is_clean(),
            "validation finished"
        );

        Ok(result)
    }
}

// Insert the alert's name under each distinct field it implicates.
fn record<F, V>(result: &mut ValidationResult<F, V>, alert: &Alert<F, V>) -> Result<(), ValidateError>
where
    F: Clone + Eq + Hash + Debug,
    V: Clone + Eq + Hash + Debug,
{
    for field in alert.fields().distinct() {
        let Some(sets) = result.get_mut(field) else {
            #[cfg(feature = "tracing")]
            tracing::warn!("Alert '{}' implicates unknown field {:?}", alert.name(), field);
            return Err(ValidateError::UnknownField {
                rule: alert.name().to_string(),
                field: format!("{:?}", field),
            });
        };
        let Some(names) = sets.get_mut(alert.variant()) else {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                "Alert '{}' uses undeclared variant {:?}",
                alert.name(),
                alert.variant()
            );
            return Err(ValidateError::UnknownVariant {
                rule: alert.name().to_string(),
                variant: format!("{:?}", alert.variant()),
            });
        };
        names.insert(alert.name().to_string());
    }
    Ok(())
}
