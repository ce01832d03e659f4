//! Validation results
//!
//! A [`ValidationResult`] maps every field of the validated record to an
//! [`AlertSets`]: one set of alert names per declared variant. Fields no rule
//! complained about are still present, with every set empty.
//!
//! ```
//! use std::collections::HashMap;
//! use tidemark::{rules, Alert, Severity, ValidationDefiner, Verdict};
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
//! let form: Form = [("name", String::new()), ("bio", String::new())].into_iter().collect();
//! let result = validate.validate(&form).unwrap();
//!
//! assert!(result[&"name"][&Severity::Danger].contains("required"));
//! assert!(result[&"bio"][&Severity::Danger].is_empty());
//! assert!(result.has(&Severity::Danger));
//! assert!(!result.has(&Severity::Warning));
//! ```

use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::ops::Index;

use crate::Semigroup;

/// Alert names triggered for one field, grouped by variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertSets<V: Eq + Hash> {
    sets: HashMap<V, HashSet<String>>,
}

impl<V: Clone + Eq + Hash> AlertSets<V> {
    /// An empty set for each of `variants`.
    pub(crate) fn seeded(variants: &[V]) -> Self {
        AlertSets {
            sets: variants
                .iter()
                .map(|variant| (variant.clone(), HashSet::new()))
                .collect(),
        }
    }
}

impl<V: Eq + Hash> AlertSets<V> {
    /// The names triggered under `variant`, or `None` if `variant` was not
    /// declared.
    pub fn get(&self, variant: &V) -> Option<&HashSet<String>> {
        self.sets.get(variant)
    }

    pub(crate) fn get_mut(&mut self, variant: &V) -> Option<&mut HashSet<String>> {
        self.sets.get_mut(variant)
    }

    /// Whether no alert was recorded under any variant.
    pub fn is_empty(&self) -> bool {
        self.sets.values().all(HashSet::is_empty)
    }

    /// Total number of names across all variants.
    pub fn len(&self) -> usize {
        self.sets.values().map(HashSet::len).sum()
    }

    /// Iterate over `(variant, names)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&V, &HashSet<String>)> {
        self.sets.iter()
    }
}

impl<V: Eq + Hash> Index<&V> for AlertSets<V> {
    type Output = HashSet<String>;

    /// # Panics
    ///
    /// Panics if `variant` was not declared.
    fn index(&self, variant: &V) -> &HashSet<String> {
        &self.sets[variant]
    }
}

// Union per variant
impl<V: Eq + Hash> Semigroup for AlertSets<V> {
    fn combine(mut self, other: Self) -> Self {
        for (variant, names) in other.sets {
            let merged = match self.sets.remove(&variant) {
                Some(existing) => existing.combine(names),
                None => names,
            };
            self.sets.insert(variant, merged);
        }
        self
    }
}

/// Per-field, per-variant alert names for one validation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult<F: Eq + Hash, V: Eq + Hash> {
    fields: HashMap<F, AlertSets<V>>,
}

impl<F: Eq + Hash, V: Clone + Eq + Hash> ValidationResult<F, V> {
    /// Seed every field with an empty set per variant.
    pub(crate) fn seeded(fields: impl IntoIterator<Item = F>, variants: &[V]) -> Self {
        ValidationResult {
            fields: fields
                .into_iter()
                .map(|field| (field, AlertSets::seeded(variants)))
                .collect(),
        }
    }
}

impl<F: Eq + Hash, V: Eq + Hash> ValidationResult<F, V> {
    /// The alert sets of `field`, or `None` if the record had no such field.
    pub fn get(&self, field: &F) -> Option<&AlertSets<V>> {
        self.fields.get(field)
    }

    pub(crate) fn get_mut(&mut self, field: &F) -> Option<&mut AlertSets<V>> {
        self.fields.get_mut(field)
    }

    /// The names triggered for `field` under `variant`.
    pub fn names(&self, field: &F, variant: &V) -> Option<&HashSet<String>> {
        self.fields.get(field)?.get(variant)
    }

    /// Whether `name` was triggered for `field` under `variant`.
    pub fn contains(&self, field: &F, variant: &V, name: &str) -> bool {
        self.names(field, variant)
            .is_some_and(|names| names.contains(name))
    }

    /// Whether no rule reported anything.
    pub fn is_clean(&self) -> bool {
        self.fields.values().all(AlertSets::is_empty)
    }

    /// Whether any field has at least one alert under `variant`.
    pub fn has(&self, variant: &V) -> bool {
        self.fields
            .values()
            .any(|sets| sets.get(variant).is_some_and(|names| !names.is_empty()))
    }

    /// Total number of (field, variant, name) entries.
    pub fn alert_count(&self) -> usize {
        self.fields.values().map(AlertSets::len).sum()
    }

    /// Fields of the validated record, in unspecified order.
    pub fn fields(&self) -> impl Iterator<Item = &F> {
        self.fields.keys()
    }

    /// Fields with at least one alert under `variant`.
    pub fn fields_with<'a>(&'a self, variant: &'a V) -> impl Iterator<Item = &'a F> + 'a {
        self.fields
            .iter()
            .filter(move |(_, sets)| sets.get(variant).is_some_and(|names| !names.is_empty()))
            .map(|(field, _)| field)
    }

    /// Iterate over `(field, alert sets)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&F, &AlertSets<V>)> {
        self.fields.iter()
    }
}

impl<F: Eq + Hash, V: Eq + Hash> Index<&F> for ValidationResult<F, V> {
    type Output = AlertSets<V>;

    /// # Panics
    ///
    /// Panics if the validated record had no such field.
    fn index(&self, field: &F) -> &AlertSets<V> {
        &self.fields[field]
    }
}

impl<F: Eq + Hash, V: Eq + Hash> IntoIterator for ValidationResult<F, V> {
    type Item = (F, AlertSets<V>);
    type IntoIter = std::collections::hash_map::IntoIter<F, AlertSets<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

/// Merges results of independent validators over the same record: fields
/// and variants are unioned, names are unioned per (field, variant).
impl<F: Eq + Hash, V: Eq + Hash> Semigroup for ValidationResult<F, V> {
    fn combine(mut self, other: Self) -> Self {
        for (field, sets) in other.fields {
            let merged = match self.fields.remove(&field) {
                Some(existing) => existing.combine(sets),
                None => sets,
            };
            self.fields.insert(field, merged);
        }
        self
    }
}
