//! The vertices of a [`Tree`][crate::Tree] and the recursive algorithms that
//! walk them.
//!
//! Every mutating algorithm here is written in the functional style: it takes
//! ownership of a subtree, and returns the (possibly replaced) root of that
//! subtree so the caller can relink it.

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use log::trace;

use crate::compare::Comparator;

/// An owned, possibly empty, subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A `Node` stores a value and exclusively owns up to two children.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl<T> Node<T> {
    /// Construct a new leaf `Node` holding `value`.
    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Inserts `value` into the subtree rooted at `link` and returns the new root of that
    /// subtree. If an equal value is already present the tree is left alone and `value` is handed
    /// back as the second element.
    pub(crate) fn insert(link: Link<T>, value: T, cmp: &Comparator<'_, T>) -> (Box<Self>, Option<T>) {
        let mut node = match link {
            Some(node) => node,
            None => {
                trace!("linking new leaf");
                return (Self::new_boxed(value), None);
            }
        };

        let rejected = match cmp.compare(&value, &node.value) {
            Ordering::Less => {
                let (left, rejected) = Self::insert(node.left.take(), value, cmp);
                node.left = Some(left);
                rejected
            }
            Ordering::Equal => Some(value),
            Ordering::Greater => {
                let (right, rejected) = Self::insert(node.right.take(), value, cmp);
                node.right = Some(right);
                rejected
            }
        };

        (node, rejected)
    }

    pub(crate) fn find(&self, value: &T, cmp: &Comparator<'_, T>) -> Option<&Self> {
        match cmp.compare(value, &self.value) {
            Ordering::Less => self.left().and_then(|n| n.find(value, cmp)),
            Ordering::Equal => Some(self),
            Ordering::Greater => self.right().and_then(|n| n.find(value, cmp)),
        }
    }

    pub(crate) fn find_mut(&mut self, value: &T, cmp: &Comparator<'_, T>) -> Option<&mut Self> {
        match cmp.compare(value, &self.value) {
            Ordering::Less => self.left.as_deref_mut().and_then(|n| n.find_mut(value, cmp)),
            Ordering::Equal => Some(self),
            Ordering::Greater => self.right.as_deref_mut().and_then(|n| n.find_mut(value, cmp)),
        }
    }

    /// Removes the node holding a value equal to `value` from the subtree rooted at `self`.
    /// Returns the new root of the subtree and the removed value, if there was one.
    ///
    /// A node with two children isn't unlinked. Instead its value is overwritten with its
    /// in-order successor (the smallest value of the right subtree) and the successor's node is
    /// unlinked from the right subtree.
    pub(crate) fn remove(mut self: Box<Self>, value: &T, cmp: &Comparator<'_, T>) -> (Link<T>, Option<T>) {
        match cmp.compare(value, &self.value) {
            Ordering::Less => {
                let Some(left) = self.left.take() else {
                    return (Some(self), None);
                };
                let (left, removed) = left.remove(value, cmp);
                self.left = left;
                (Some(self), removed)
            }
            Ordering::Greater => {
                let Some(right) = self.right.take() else {
                    return (Some(self), None);
                };
                let (right, removed) = right.remove(value, cmp);
                self.right = right;
                (Some(self), removed)
            }
            Ordering::Equal => match (self.left.take(), self.right.take()) {
                (None, right) => {
                    trace!("unlinking node, promoting right child");
                    (right, Some(self.value))
                }
                (left, None) => {
                    trace!("unlinking node, promoting left child");
                    (left, Some(self.value))
                }
                (Some(left), Some(right)) => {
                    trace!("overwriting two-child node with its successor");
                    let (right, successor) = right.take_min();
                    let removed = mem::replace(&mut self.value, successor);
                    self.left = Some(left);
                    self.right = right;
                    (Some(self), Some(removed))
                }
            },
        }
    }

    /// Unlinks the leftmost node of this subtree and returns the new subtree root along with the
    /// unlinked value.
    fn take_min(mut self: Box<Self>) -> (Link<T>, T) {
        match self.left.take() {
            Some(left) => {
                let (left, min) = left.take_min();
                self.left = left;
                (Some(self), min)
            }
            None => (self.right.take(), self.value),
        }
    }

    /// The smallest value in this subtree.
    pub(crate) fn leftmost(&self) -> &Self {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        node
    }

    /// The largest value in this subtree.
    pub(crate) fn rightmost(&self) -> &Self {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        node
    }

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    pub(crate) fn height(&self) -> usize {
        let left = self.left().map_or(0, Self::height);
        let right = self.right().map_or(0, Self::height);
        left.max(right) + 1
    }

    /// Rebuilds this subtree node by node, cloning every value.
    pub(crate) fn deep_clone(&self) -> Box<Self>
    where
        T: Clone,
    {
        Box::new(Self {
            value: self.value.clone(),
            left: self.left().map(Self::deep_clone),
            right: self.right().map(Self::deep_clone),
        })
    }
}

/// Drops a subtree without recursing, so very tall subtrees can't overflow the stack.
pub(crate) fn dismantle<T>(link: Link<T>) {
    let mut stack: Vec<Box<Node<T>>> = link.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(values: &[i32]) -> Link<i32> {
        let cmp = Comparator::natural();
        let mut root = None;
        for &v in values {
            let (new_root, _) = Node::insert(root, v, &cmp);
            root = Some(new_root);
        }
        root
    }

    #[test]
    fn insert_places_children_by_comparison() {
        let root = build(&[5, 3, 8]).unwrap();

        assert_eq!(root.value, 5);
        assert_eq!(root.left().map(|n| n.value), Some(3));
        assert_eq!(root.right().map(|n| n.value), Some(8));
    }

    #[test]
    fn insert_hands_back_duplicates() {
        let cmp = Comparator::natural();
        let root = build(&[5, 3]);
        let (root, rejected) = Node::insert(root, 3, &cmp);

        assert_eq!(rejected, Some(3));
        assert!(root.left().unwrap().left.is_none());
    }

    #[test]
    fn remove_two_children_promotes_successor() {
        let cmp = Comparator::natural();
        let root = build(&[5, 3, 8, 7, 9]).unwrap();
        let (root, removed) = root.remove(&5, &cmp);
        let root = root.unwrap();

        assert_eq!(removed, Some(5));
        assert_eq!(root.value, 7);
        assert_eq!(root.right().map(|n| n.value), Some(8));
        assert!(root.right().unwrap().left.is_none());
    }

    #[test]
    fn remove_missing_keeps_shape() {
        let cmp = Comparator::natural();
        let root = build(&[5, 3]).unwrap();
        let (root, removed) = root.remove(&4, &cmp);

        assert_eq!(removed, None);
        assert_eq!(root.unwrap().height(), 2);
    }

    #[test]
    fn leftmost_and_rightmost() {
        let root = build(&[5, 3, 8, 1, 4, 9]).unwrap();

        assert_eq!(root.leftmost().value, 1);
        assert_eq!(root.rightmost().value, 9);
    }

    #[test]
    fn deep_clone_copies_structure() {
        let root = build(&[2, 1, 3]).unwrap();
        let copy = root.deep_clone();

        assert_eq!(copy.value, 2);
        assert_eq!(copy.left().map(|n| n.value), Some(1));
        assert_eq!(copy.right().map(|n| n.value), Some(3));
    }

    #[test]
    fn dismantle_handles_tall_subtrees() {
        let mut root: Link<u32> = None;
        for v in (0..100_000).rev() {
            let mut node = Node::new_boxed(v);
            node.right = root;
            root = Some(node);
        }
        dismantle(root);
    }
}
