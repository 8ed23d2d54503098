//! An ordered set backed by an unbalanced Binary Search Tree.
//!
//! # Examples
//!
//! ```
//! use bst_set::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! assert!(tree.insert(1));
//! assert_eq!(tree.find(&1), Some(&1));
//!
//! // Inserting an equal value is a no-op.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! // Removing reports whether anything was removed.
//! assert!(tree.remove(&1));
//! assert!(!tree.remove(&1));
//! assert!(tree.is_empty());
//! ```

use std::fmt;
use std::iter::FromIterator;

use log::{debug, trace};

use crate::compare::Comparator;
use crate::error::CopyError;
use crate::iter::{IntoIter, Iter};
use crate::node::{self, Link, Node};

/// An ordered set of values stored in a Binary Search Tree. Values are kept
/// in the order defined by the tree's [`Comparator`]; two values comparing
/// equal can't both be stored.
///
/// The tree never rebalances, so inserting values in sorted order produces a
/// tree as tall as it is large. Most operations recurse once per level.
///
/// The behavior of this set is unspecified if a stored value's ordering
/// relative to any other value changes while it is in the set.
pub struct Tree<'a, T> {
    root: Link<T>,
    len: usize,
    cmp: Comparator<'a, T>,
}

impl<'a, T: Ord + 'a> Default for Tree<'a, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<'_, T> {
    fn drop(&mut self) {
        node::dismantle(self.root.take());
    }
}

/// Deep clone. The new tree shares the comparator but none of the nodes or
/// values.
impl<T: Clone> Clone for Tree<'_, T> {
    fn clone(&self) -> Self {
        trace!("deep cloning tree of {} values", self.len);
        Self {
            root: self.root().map(Node::deep_clone),
            len: self.len,
            cmp: self.cmp.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Tree<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Tree<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Tree<'_, T> {}

impl<'a, T> Tree<'a, T> {
    /// Generate a new, empty `Tree` ordered by `T`'s [`Ord`] implementation.
    pub fn new() -> Self
    where
        T: Ord + 'a,
    {
        Self::with_comparator(Comparator::natural())
    }

    /// Generate a new, empty `Tree` ordered by `cmp`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::{Comparator, Tree};
    ///
    /// let mut tree = Tree::with_comparator(Comparator::<i32>::natural().reverse());
    /// tree.extend(vec![1, 3, 2]);
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
    /// ```
    pub fn with_comparator(cmp: Comparator<'a, T>) -> Self {
        Self {
            root: None,
            len: 0,
            cmp,
        }
    }

    /// Generate a `Tree` ordered by `cmp` holding every value of `iter`. Later values equal to
    /// earlier ones are dropped.
    pub fn from_iter_with<I>(iter: I, cmp: Comparator<'a, T>) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = Self::with_comparator(cmp);
        tree.extend(iter);
        tree
    }

    /// The comparator ordering this tree.
    pub fn comparator(&self) -> &Comparator<'a, T> {
        &self.cmp
    }

    /// How many values are stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no values are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of levels on the longest path from the root to a leaf. An empty tree has a
    /// height of 0.
    pub fn height(&self) -> usize {
        self.root().map_or(0, Node::height)
    }

    /// Inserts `value` into the tree. Returns `false`, leaving the tree untouched, when an equal
    /// value is already stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(2));
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(2));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let (root, rejected) = Node::insert(self.root.take(), value, &self.cmp);
        self.root = Some(root);

        if rejected.is_some() {
            debug!("duplicate insert ignored, len stays {}", self.len);
            return false;
        }
        self.len += 1;
        true
    }

    /// Potentially finds the stored value equal to `value`. If no stored value compares equal,
    /// `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::{Comparator, Tree};
    ///
    /// // Order strings by length only.
    /// let mut tree = Tree::with_comparator(Comparator::from_fn(|a: &String, b: &String| {
    ///     a.len().cmp(&b.len())
    /// }));
    /// tree.insert("abc".to_string());
    ///
    /// assert_eq!(tree.find(&"xyz".to_string()).map(String::as_str), Some("abc"));
    /// assert_eq!(tree.find(&"xy".to_string()), None);
    /// ```
    pub fn find(&self, value: &T) -> Option<&T> {
        self.root()
            .and_then(|n| n.find(value, &self.cmp))
            .map(|n| &n.value)
    }

    /// Mutable access to the stored value equal to `value`.
    ///
    /// Only change parts of the value that don't take part in the ordering. Changing how the value
    /// compares leaves the tree in an unspecified shape.
    pub fn find_mut(&mut self, value: &T) -> Option<&mut T> {
        let cmp = &self.cmp;
        self.root
            .as_deref_mut()
            .and_then(|n| n.find_mut(value, cmp))
            .map(|n| &mut n.value)
    }

    /// Whether a value equal to `value` is stored.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// The smallest stored value.
    pub fn first(&self) -> Option<&T> {
        self.root().map(|n| &n.leftmost().value)
    }

    /// The largest stored value.
    pub fn last(&self) -> Option<&T> {
        self.root().map(|n| &n.rightmost().value)
    }

    /// Removes the stored value equal to `value`, returning whether there was one.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::Tree;
    ///
    /// let mut tree: Tree<_> = vec![5, 3, 8].into_iter().collect();
    ///
    /// assert!(tree.remove(&5));
    /// assert!(!tree.remove(&5));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Removes and returns the stored value equal to `value`.
    pub fn take(&mut self, value: &T) -> Option<T> {
        let root = self.root.take()?;
        let (root, removed) = root.remove(value, &self.cmp);
        self.root = root;

        match removed {
            Some(removed) => {
                self.len -= 1;
                Some(removed)
            }
            None => {
                debug!("remove found no matching value, len stays {}", self.len);
                None
            }
        }
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        node::dismantle(self.root.take());
        self.len = 0;
    }

    /// An iterator visiting every value in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root(), self.len)
    }

    /// Clones every value, in ascending order, into `dest` starting at `index`.
    ///
    /// Fails without writing anything when `index` isn't inside `dest`, or when `dest` doesn't
    /// have room for every value past `index`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::{CopyError, Tree};
    ///
    /// let tree: Tree<_> = vec![3, 1, 2].into_iter().collect();
    /// let mut dest = [0; 4];
    ///
    /// tree.copy_to(&mut dest, 1).unwrap();
    /// assert_eq!(dest, [0, 1, 2, 3]);
    ///
    /// assert_eq!(
    ///     tree.copy_to(&mut dest, 2),
    ///     Err(CopyError::InsufficientSpace { needed: 3, available: 2 }),
    /// );
    /// ```
    pub fn copy_to(&self, dest: &mut [T], index: usize) -> Result<(), CopyError>
    where
        T: Clone,
    {
        if index >= dest.len() {
            debug!("copy_to rejected start index {} (len {})", index, dest.len());
            return Err(CopyError::IndexOutOfRange {
                index,
                len: dest.len(),
            });
        }
        let available = dest.len() - index;
        if available < self.len {
            debug!("copy_to needs {} slots, has {}", self.len, available);
            return Err(CopyError::InsufficientSpace {
                needed: self.len,
                available,
            });
        }

        for (slot, value) in dest[index..].iter_mut().zip(self.iter()) {
            *slot = value.clone();
        }
        Ok(())
    }

    pub(crate) fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
}

impl<T> Extend<T> for Tree<'_, T> {
    /// Inserts every value in turn. Values equal to one already stored are dropped.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: Ord + 'a> FromIterator<T> for Tree<'a, T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_with(iter, Comparator::natural())
    }
}

impl<'a, T> IntoIterator for &'a Tree<'_, T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Tree<'_, T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let len = std::mem::take(&mut self.len);
        IntoIter::new(self.root.take(), len)
    }
}
