//! This crate exposes an ordered set backed by an unbalanced Binary Search
//! Tree (BST).
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! will sometimes have child `Node`s. The most important invariants of a BST
//! are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! "Less" and "greater" are decided by a [`Comparator`], which defaults to
//! the values' [`Ord`] implementation. Values comparing equal are the same
//! set member, so a [`Tree`] never stores duplicates.
//!
//! Searching for values in the tree takes `O(height)` (where `height` is
//! defined as the longest path from the root `Node` to a leaf `Node`). This
//! tree doesn't rebalance itself, so the height depends entirely on insertion
//! order: inserting sorted values gives a height equal to the number of
//! values. BSTs also naturally support sorted iteration by visiting the left
//! subtree, then the subtree root, then the right subtree.
//!
//! # Examples
//!
//! ```
//! use bst_set::Tree;
//!
//! let mut tree: Tree<_> = vec![5, 3, 8, 1, 4].into_iter().collect();
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 3, 4, 5, 8]);
//!
//! assert!(tree.remove(&3));
//! assert_eq!(tree.len(), 4);
//!
//! println!("{}", tree);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod compare;
pub mod error;
pub mod iter;
mod node;
mod render;
pub mod shared;
pub mod tree;

pub use compare::Comparator;
pub use error::CopyError;
pub use shared::SharedTree;
pub use tree::Tree;
