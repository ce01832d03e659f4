//! Serde support (feature-gated)
//!
//! `Serialize` implementations so alerts and results can be handed to a UI
//! layer as JSON. Results serialize as nested maps: field -> variant ->
//! list of names. [`Severity`] serializes as its lower-case label.

use std::hash::Hash;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::{Alert, AlertSets, NonEmptyVec, Severity, ValidationResult};

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<T: Serialize> Serialize for NonEmptyVec<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<F: Serialize, V: Serialize> Serialize for Alert<F, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Alert", 3)?;
        state.serialize_field("variant", self.variant())?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("fields", self.fields())?;
        state.end()
    }
}

impl<V> Serialize for AlertSets<V>
where
    V: Eq + Hash + Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<F, V> Serialize for ValidationResult<F, V>
where
    F: Eq + Hash + Serialize,
    V: Eq + Hash + Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}
