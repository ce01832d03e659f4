//! Records: the data being validated
//!
//! A [`Record`] exposes the set of fields present in a value. The validator
//! uses it to seed a [`ValidationResult`](crate::ValidationResult) with an
//! entry for every field, so fields that no rule complains about still show up
//! with empty alert sets.
//!
//! Typed records usually pair a struct with a field enum:
//!
//! ```
//! use tidemark::Record;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum PersonField {
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
//!     type Field = PersonField;
//!
//!     fn fields(&self) -> Vec<PersonField> {
//!         vec![PersonField::Name, PersonField::Age]
//!     }
//! }
//! ```
//!
//! Dynamic, string-keyed records can use `HashMap` or `BTreeMap` directly.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;
use std::hash::Hash;

/// A record-shaped value whose fields can be enumerated.
pub trait Record {
    /// Key identifying one field of the record.
    type Field: Clone + Eq + Hash + Debug;

    /// Every field present in this value.
    fn fields(&self) -> Vec<Self::Field>;
}

impl<K, T, S> Record for HashMap<K, T, S>
where
    K: Clone + Eq + Hash + Debug,
{
    type Field = K;

    fn fields(&self) -> Vec<K> {
        self.keys().cloned().collect()
    }
}

impl<K, T> Record for BTreeMap<K, T>
where
    K: Clone + Eq + Hash + Debug,
{
    type Field = K;

    fn fields(&self) -> Vec<K> {
        self.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_btreemap_fields_in_key_order() {
        let record: BTreeMap<&str, i32> = [("b", 2), ("a", 1)].into_iter().collect();
        assert_eq!(record.fields(), vec!["a", "b"]);
    }

    #[test]
    fn test_hashmap_fields() {
        let record: HashMap<String, String> = [("email".to_string(), String::new())]
            .into_iter()
            .collect();
        assert_eq!(record.fields(), vec!["email".to_string()]);
    }

    #[test]
    fn test_empty_record_has_no_fields() {
        let record: HashMap<String, i32> = HashMap::new();
        assert!(record.fields().is_empty());
    }
}
