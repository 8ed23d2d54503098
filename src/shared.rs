//! Shallow copies: several handles viewing one tree.
//!
//! A [`SharedTree`] doesn't own its nodes alone. Every handle produced by
//! [`SharedTree::shallow_copy`] points at the same node graph, so an insert,
//! a removal, or a change made through [`Tree::find_mut`] through any handle
//! is seen through all of them. Use [`SharedTree::deep_clone`] (or
//! [`Clone`] on a [`Tree`]) for an independent copy.
//!
//! # Examples
//!
//! ```
//! use bst_set::Tree;
//!
//! let shared = vec![2, 1].into_iter().collect::<Tree<_>>().into_shared();
//! let view = shared.shallow_copy();
//!
//! shared.insert(3);
//! assert!(view.contains(&3));
//! assert_eq!(view.len(), 3);
//!
//! // A deep clone stops seeing changes.
//! let independent = view.deep_clone();
//! view.remove(&1);
//! assert!(!shared.contains(&1));
//! assert!(independent.contains(&1));
//! ```

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use log::trace;

use crate::tree::Tree;

/// A reference counted handle to a [`Tree`] that other handles may alias.
///
/// Borrowing follows [`RefCell`] rules: holding a [`borrow`][Self::borrow] while calling
/// [`borrow_mut`][Self::borrow_mut] (through any handle) panics.
pub struct SharedTree<'a, T> {
    tree: Rc<RefCell<Tree<'a, T>>>,
}

impl<T: fmt::Debug> fmt::Debug for SharedTree<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedTree")
            .field("handles", &self.handles())
            .field("tree", &*self.tree.borrow())
            .finish()
    }
}

impl<'a, T> From<Tree<'a, T>> for SharedTree<'a, T> {
    fn from(tree: Tree<'a, T>) -> Self {
        Self {
            tree: Rc::new(RefCell::new(tree)),
        }
    }
}

impl<'a, T> Tree<'a, T> {
    /// Moves this tree behind a [`SharedTree`] handle so it can be shallow copied.
    pub fn into_shared(self) -> SharedTree<'a, T> {
        SharedTree::from(self)
    }
}

impl<'a, T> SharedTree<'a, T> {
    /// Another handle onto the same nodes. Nothing is copied.
    pub fn shallow_copy(&self) -> Self {
        trace!("shallow copy, {} handles", self.handles() + 1);
        Self {
            tree: Rc::clone(&self.tree),
        }
    }

    /// An independent tree with its own copy of every node and value.
    pub fn deep_clone(&self) -> Tree<'a, T>
    where
        T: Clone,
    {
        self.tree.borrow().clone()
    }

    /// How many handles view this tree.
    pub fn handles(&self) -> usize {
        Rc::strong_count(&self.tree)
    }

    /// Whether `self` and `other` view the same tree.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.tree, &other.tree)
    }

    /// Immutably borrows the tree.
    pub fn borrow(&self) -> Ref<'_, Tree<'a, T>> {
        self.tree.borrow()
    }

    /// Mutably borrows the tree. Changes are visible through every handle.
    pub fn borrow_mut(&self) -> RefMut<'_, Tree<'a, T>> {
        self.tree.borrow_mut()
    }

    /// See [`Tree::insert`].
    pub fn insert(&self, value: T) -> bool {
        self.tree.borrow_mut().insert(value)
    }

    /// See [`Tree::remove`].
    pub fn remove(&self, value: &T) -> bool {
        self.tree.borrow_mut().remove(value)
    }

    /// See [`Tree::contains`].
    pub fn contains(&self, value: &T) -> bool {
        self.tree.borrow().contains(value)
    }

    /// See [`Tree::len`].
    pub fn len(&self) -> usize {
        self.tree.borrow().len()
    }

    /// See [`Tree::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.tree.borrow().is_empty()
    }

    /// Moves the tree out if this is the last handle. Otherwise hands `self` back.
    pub fn try_unwrap(self) -> Result<Tree<'a, T>, Self> {
        Rc::try_unwrap(self.tree)
            .map(RefCell::into_inner)
            .map_err(|tree| Self { tree })
    }
}
