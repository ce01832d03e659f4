//! Per-field rule maps

use std::fmt;

use super::{boxed, BoxedRule, Rule};
use crate::{NonEmptyVec, Record};

/// At most one rule per field, kept in insertion order.
///
/// Useful when rules are naturally keyed by the field they guard. A map is
/// bound like a rule list, through
/// [`ValidationDefiner::define_map`](crate::ValidationDefiner::define_map).
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use tidemark::{Alert, RuleMap, Severity, Verdict};
///
/// type Form = HashMap<&'static str, String>;
///
/// let map = RuleMap::<Form, Severity>::new()
///     .with("email", |form: &Form| -> Verdict<&'static str, Severity> {
///         let ok = form.get("email").is_some_and(|e| e.contains('@'));
///         Verdict::ensure(ok, || Alert::on(Severity::Danger, "invalid-email", "email"))
///     });
///
/// assert_eq!(map.len(), 1);
/// assert!(map.contains_field(&"email"));
/// ```
pub struct RuleMap<D: Record, V> {
    entries: Vec<(D::Field, BoxedRule<D, V>)>,
}

impl<D: Record, V> RuleMap<D, V> {
    /// An empty map.
    pub fn new() -> Self {
        RuleMap {
            entries: Vec::new(),
        }
    }

    /// Set the rule for `field`.
    ///
    /// An existing rule for the same field is replaced in place and returned.
    pub fn insert<R>(&mut self, field: D::Field, rule: R) -> Option<BoxedRule<D, V>>
    where
        R: Rule<D, V> + 'static,
    {
        let rule = boxed(rule);
        match self.entries.iter_mut().find(|(f, _)| *f == field) {
            Some((_, slot)) => Some(std::mem::replace(slot, rule)),
            None => {
                self.entries.push((field, rule));
                None
            }
        }
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with<R>(mut self, field: D::Field, rule: R) -> Self
    where
        R: Rule<D, V> + 'static,
    {
        self.insert(field, rule);
        self
    }

    /// Remove and return the rule for `field`.
    pub fn remove(&mut self, field: &D::Field) -> Option<BoxedRule<D, V>> {
        let index = self.entries.iter().position(|(f, _)| f == field)?;
        Some(self.entries.remove(index).1)
    }

    /// Whether a rule is registered for `field`.
    pub fn contains_field(&self, field: &D::Field) -> bool {
        self.entries.iter().any(|(f, _)| f == field)
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no rule is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fields with a registered rule, in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = &D::Field> {
        self.entries.iter().map(|(f, _)| f)
    }

    /// The rules in insertion order, or `None` if the map is empty.
    pub fn into_rules(self) -> Option<NonEmptyVec<BoxedRule<D, V>>> {
        NonEmptyVec::from_vec(self.entries.into_iter().map(|(_, rule)| rule).collect())
    }
}

impl<D: Record, V> Default for RuleMap<D, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Record, V> fmt::Debug for RuleMap<D, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleMap")
            .field("fields", &self.fields().collect::<Vec<_>>())
            .finish()
    }
}
