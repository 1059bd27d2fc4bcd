//! The recursive record every tree in this crate is made of.
//!
//! A [`Node`] owns its children outright through [`Link`]s, so a tree is a
//! strict hierarchy: no sharing, no parent pointers, no cycles. Dropping a
//! `Node` drops its whole subtree.
//!
//! # Examples
//!
//! ```
//! use bintree::Node;
//!
//! //     1
//! //    / \
//! //   2   3
//! //        \
//! //         6
//! let root = Node::new(1)
//!     .with_left(Node::new(2))
//!     .with_right(Node::new(3).with_right(Node::new(6)));
//!
//! assert!(root.has_both_children());
//! assert!(root.left.as_deref().unwrap().is_leaf());
//! assert!(root.right.as_deref().unwrap().has_only_right_child());
//! assert_eq!(root.to_string(), "1(2)(3()(6))");
//! ```

use std::fmt;

/// An optional, exclusively owned child. `None` is the absent child.
pub type Link<T> = Option<Box<Node<T>>>;

/// A value with up to two children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<T> {
    /// The value stored at this position.
    pub value: T,
    /// The left child, if any.
    pub left: Link<T>,
    /// The right child, if any.
    pub right: Link<T>,
}

impl<T> Node<T> {
    /// Construct a new leaf `Node` holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Construct a boxed leaf, ready to be stored in a [`Link`].
    pub fn boxed(value: T) -> Box<Self> {
        Box::new(Self::new(value))
    }

    /// Returns this node with `left` as its left child, replacing any previous one.
    pub fn with_left(mut self, left: Node<T>) -> Self {
        self.left = Some(Box::new(left));
        self
    }

    /// Returns this node with `right` as its right child, replacing any previous one.
    pub fn with_right(mut self, right: Node<T>) -> Self {
        self.right = Some(Box::new(right));
        self
    }

    /// True iff both children are absent.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// True iff there is a left child and no right child.
    pub fn has_only_left_child(&self) -> bool {
        self.left.is_some() && self.right.is_none()
    }

    /// True iff there is a right child and no left child.
    pub fn has_only_right_child(&self) -> bool {
        self.left.is_none() && self.right.is_some()
    }

    /// True iff both children are present.
    pub fn has_both_children(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }
}

/// Renders the subtree as `value(left)(right)`. Absent trailing groups are
/// omitted, and a right child without a left sibling gets an empty `()` in the
/// left position. This is the format [`build_tree_from_string`] reads.
///
/// Rendering recurses once per level, so a very deep, unbalanced subtree can
/// overflow the stack.
///
/// [`build_tree_from_string`]: crate::parse::build_tree_from_string
impl<T> fmt::Display for Node<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)?;

        if self.is_leaf() {
            return Ok(());
        }

        f.write_str("(")?;
        if let Some(left) = &self.left {
            write!(f, "{left}")?;
        }
        f.write_str(")")?;

        if let Some(right) = &self.right {
            write!(f, "({right})")?;
        }
        Ok(())
    }
}
