//! In-order iteration over a [`Tree`][crate::Tree].
//!
//! Both iterators visit the left subtree, then the node, then the right
//! subtree, so values come out in ascending order. Instead of recursing they
//! keep a stack of the ancestors whose value hasn't been yielded yet.

use std::iter::FusedIterator;

use crate::node::{self, Link, Node};

/// A borrowing, ascending iterator over the values of a tree.
///
/// Created by [`Tree::iter`][crate::Tree::iter].
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// An owning, ascending iterator over the values of a tree.
///
/// Created by calling `into_iter` on a [`Tree`][crate::Tree].
pub struct IntoIter<T> {
    stack: Vec<Box<Node<T>>>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(root: Link<T>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Link<T>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.stack.pop()?;
        self.push_left_spine(node.right.take());
        self.remaining -= 1;
        Some(node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for node in self.stack.drain(..) {
            node::dismantle(Some(node));
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Tree;

    #[test]
    fn iter_is_ascending() {
        let tree: Tree<i32> = [5, 3, 8, 1, 4].iter().copied().collect();

        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 3, 4, 5, 8]);
    }

    #[test]
    fn iter_reports_exact_length() {
        let tree: Tree<i32> = (0..10).collect();
        let mut iter = tree.iter();

        assert_eq!(iter.len(), 10);
        iter.next();
        iter.next();
        assert_eq!(iter.len(), 8);
    }

    #[test]
    fn iter_restarts() {
        let tree: Tree<i32> = [2, 1, 3].iter().copied().collect();

        let first: Vec<_> = tree.iter().collect();
        let second: Vec<_> = tree.iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn into_iter_yields_owned_values() {
        let tree: Tree<String> = ["b", "a", "c"].iter().map(|s| s.to_string()).collect();

        assert_eq!(tree.into_iter().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn into_iter_partially_consumed() {
        let tree: Tree<i32> = (0..1_000).collect();
        let mut iter = tree.into_iter();

        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.len(), 999);
    }

    #[test]
    fn empty_tree_yields_nothing() {
        let tree: Tree<i32> = Tree::new();

        assert_eq!(tree.iter().next(), None);
        assert_eq!(tree.into_iter().next(), None);
    }
}
