//! Non-empty vector type
//!
//! [`NonEmptyVec<T>`] is a vector guaranteed to contain at least one element.
//! tidemark uses it wherever an empty list would be a contract violation:
//! the fields implicated by an [`Alert`](crate::Alert) and the rule list
//! bound by [`ValidationDefiner::define`](crate::ValidationDefiner::define).
//!
//! # Examples
//!
//! ```
//! use tidemark::NonEmptyVec;
//!
//! let nev = NonEmptyVec::new("password", vec!["confirm_password"]);
//! assert_eq!(nev.head(), &"password");
//! assert_eq!(nev.len(), 2);
//! ```

use std::collections::HashSet;
use std::hash::Hash;

/// A vector guaranteed to contain at least one element.
///
/// # Example
///
/// ```
/// use tidemark::NonEmptyVec;
///
/// let nev = NonEmptyVec::new(1, vec![2, 3]);
/// assert_eq!(nev.head(), &1);
/// assert_eq!(nev.tail(), &[2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyVec<T> {
    head: T,
    tail: Vec<T>,
}

impl<T> NonEmptyVec<T> {
    /// Create a non-empty vector from a head element and a tail.
    pub fn new(head: T, tail: Vec<T>) -> Self {
        Self { head, tail }
    }

    /// Create a non-empty vector holding a single element.
    ///
    /// # Example
    ///
    /// ```
    /// use tidemark::NonEmptyVec;
    ///
    /// let nev = NonEmptyVec::singleton("user_id");
    /// assert_eq!(nev.len(), 1);
    /// ```
    pub fn singleton(value: T) -> Self {
        Self::new(value, Vec::new())
    }

    /// Try to create a non-empty vector from a `Vec`.
    ///
    /// Returns `None` if the vector is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use tidemark::NonEmptyVec;
    ///
    /// assert!(NonEmptyVec::from_vec(vec![1, 2]).is_some());
    /// assert!(NonEmptyVec::from_vec(Vec::<i32>::new()).is_none());
    /// ```
    pub fn from_vec(mut vec: Vec<T>) -> Option<Self> {
        if vec.is_empty() {
            None
        } else {
            let head = vec.remove(0);
            Some(Self::new(head, vec))
        }
    }

    /// The first element.
    pub fn head(&self) -> &T {
        &self.head
    }

    /// Every element after the first.
    pub fn tail(&self) -> &[T] {
        &self.tail
    }

    /// Number of elements, always at least 1.
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Always `false`; present to pair with [`len`](Self::len).
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Convert into a plain `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        let mut vec = Vec::with_capacity(1 + self.tail.len());
        vec.push(self.head);
        vec.extend(self.tail);
        vec
    }

    /// Iterate over every element in order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }
}

impl<T: Eq + Hash> NonEmptyVec<T> {
    /// Iterate over the distinct elements, each yielded once at its first
    /// occurrence.
    ///
    /// # Example
    ///
    /// ```
    /// use tidemark::NonEmptyVec;
    ///
    /// let nev = NonEmptyVec::new("a", vec!["b", "a", "b"]);
    /// let distinct: Vec<_> = nev.distinct().collect();
    /// assert_eq!(distinct, vec![&"a", &"b"]);
    /// ```
    pub fn distinct(&self) -> impl Iterator<Item = &T> {
        let mut seen = HashSet::with_capacity(self.len());
        self.iter().filter(move |item| seen.insert(*item))
    }
}

impl<T> IntoIterator for NonEmptyVec<T> {
    type Item = T;
    type IntoIter = std::iter::Chain<std::iter::Once<T>, std::vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.head).chain(self.tail)
    }
}

/// Build a [`NonEmptyVec`] from one or more expressions.
///
/// # Example
///
/// ```
/// use tidemark::nonempty;
///
/// let fields = nonempty!["password", "confirm_password"];
/// assert_eq!(fields.len(), 2);
/// ```
#[macro_export]
macro_rules! nonempty {
    ($head:expr $(, $tail:expr)* $(,)?) => {
        $crate::NonEmptyVec::new($head, ::std::vec![$($tail),*])
    };
}
