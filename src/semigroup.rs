//! Semigroup trait for associative merging
//!
//! A Semigroup is a type with an associative binary operation. tidemark uses it
//! to merge the outputs of independent validators run over the same record:
//! alert-name sets are unioned per field and per variant.
//!
//! # Mathematical Properties
//!
//! For a type to be a valid Semigroup, the `combine` operation must be associative:
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use std::collections::HashSet;
//! use tidemark::Semigroup;
//!
//! let a: HashSet<&str> = ["required"].into_iter().collect();
//! let b: HashSet<&str> = ["too-short"].into_iter().collect();
//! assert_eq!(a.combine(b).len(), 2);
//! ```

use std::collections::HashSet;
use std::hash::Hash;

/// A type that supports an associative binary operation
///
/// # Laws
///
/// Implementations must satisfy the associativity law:
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))
/// ```
///
/// `combine` takes `self` by value. Clone first if the originals are still
/// needed.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    fn combine(self, other: Self) -> Self;
}

// Set union
impl<T: Eq + Hash> Semigroup for HashSet<T> {
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}
