//! The ordering used by a [`Tree`][crate::Tree].
//!
//! A `Comparator` is a shared handle to a total-order function. Cloning it
//! doesn't copy the function, so a tree and its clones all order their values
//! the same way.
//!
//! # Examples
//!
//! ```
//! use std::cmp::Ordering;
//! use bst_set::Comparator;
//!
//! let by_len = Comparator::from_fn(|a: &&str, b: &&str| a.len().cmp(&b.len()));
//! assert_eq!(by_len.compare(&"aa", &"b"), Ordering::Greater);
//!
//! let backwards = Comparator::<i32>::natural().reverse();
//! assert_eq!(backwards.compare(&1, &2), Ordering::Greater);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

/// A reference counted total-order function over `T`.
///
/// The function may borrow from its environment for `'a`, and a tree using
/// it can't outlive that borrow.
///
/// The function must define a total order. An inconsistent comparator won't
/// be detected and leaves any tree using it in an unspecified shape.
pub struct Comparator<'a, T> {
    f: Rc<dyn Fn(&T, &T) -> Ordering + 'a>,
}

impl<T> Clone for Comparator<'_, T> {
    fn clone(&self) -> Self {
        Self {
            f: Rc::clone(&self.f),
        }
    }
}

impl<T> fmt::Debug for Comparator<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparator").finish_non_exhaustive()
    }
}

impl<'a, T: Ord + 'a> Default for Comparator<'a, T> {
    fn default() -> Self {
        Self::natural()
    }
}

impl<'a, T> Comparator<'a, T> {
    /// Orders values by their [`Ord`] implementation.
    pub fn natural() -> Self
    where
        T: Ord + 'a,
    {
        Self::from_fn(T::cmp)
    }

    /// Wraps an arbitrary ordering function.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'a,
    {
        Self { f: Rc::new(f) }
    }

    /// Returns a new comparator ordering values the opposite way.
    pub fn reverse(&self) -> Self
    where
        T: 'a,
    {
        let inner = self.clone();
        Self::from_fn(move |a, b| inner.compare(b, a))
    }

    /// Compares `a` against `b`.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.f)(a, b)
    }

    /// Whether `self` and `other` are handles to the same function.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.f, &other.f)
    }
}
