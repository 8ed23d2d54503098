//! ASCII drawings of a tree's shape, for debugging.
//!
//! ```text
//! 5
//! ├──3
//! │  ├──1
//! │  └──4
//! └──8
//! ```
//!
//! The root goes on the first line. Every child follows on its own line,
//! left child first. A right child always gets `└──`; a left child gets
//! `├──` if it has a right sibling and `└──` otherwise. A child's own children
//! are indented by `│  ` below a left child with a right sibling and by two
//! spaces everywhere else.

use std::fmt;

use crate::node::Node;
use crate::tree::Tree;

const LAST: &str = "└──";
const NOT_LAST: &str = "├──";
const CONTINUE: &str = "│  ";
const BLANK: &str = "  ";

impl<T: fmt::Display> Tree<'_, T> {
    /// Draws the shape of the tree. An empty tree draws as an empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::Tree;
    ///
    /// let tree: Tree<_> = vec![2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.render(), "2\n├──1\n└──3");
    /// ```
    pub fn render(&self) -> String {
        let mut out = String::new();
        if let Some(root) = self.root() {
            // Writing into a `String` can't fail.
            let _ = write_tree(&mut out, root);
        }
        out
    }
}

/// Prints the drawing from [`Tree::render`], or `Tree is empty` when there's nothing to draw.
impl<T: fmt::Display> fmt::Display for Tree<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => write_tree(f, root),
            None => f.write_str("Tree is empty"),
        }
    }
}

fn write_tree<T, W>(out: &mut W, root: &Node<T>) -> fmt::Result
where
    T: fmt::Display,
    W: fmt::Write,
{
    write!(out, "{}", root)?;
    write_children(out, "", root)
}

fn write_children<T, W>(out: &mut W, padding: &str, node: &Node<T>) -> fmt::Result
where
    T: fmt::Display,
    W: fmt::Write,
{
    let has_right = node.right().is_some();
    let left_connector = if has_right { NOT_LAST } else { LAST };

    write_child(out, padding, left_connector, node.left(), has_right)?;
    write_child(out, padding, LAST, node.right(), false)
}

fn write_child<T, W>(
    out: &mut W,
    padding: &str,
    connector: &str,
    node: Option<&Node<T>>,
    has_right_sibling: bool,
) -> fmt::Result
where
    T: fmt::Display,
    W: fmt::Write,
{
    let Some(node) = node else {
        return Ok(());
    };
    write!(out, "\n{}{}{}", padding, connector, node)?;

    let padding = format!(
        "{}{}",
        padding,
        if has_right_sibling { CONTINUE } else { BLANK }
    );
    write_children(out, &padding, node)
}
