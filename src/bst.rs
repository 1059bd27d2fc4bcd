//! An unbalanced Binary Search Tree that owns its nodes outright.
//!
//! Values are kept in search order: everything in a node's left subtree is
//! smaller than it and everything in its right subtree is larger. Inserting a
//! value that is already present is ignored, so the tree never holds
//! duplicates. Nothing rebalances the tree, so inserting sorted input
//! degenerates it into a chain.
//!
//! # Examples
//!
//! ```
//! use bintree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.search(&5));
//! assert_eq!(tree.height(), -1);
//!
//! for value in [5, 3, 7, 1, 9, 4, 6] {
//!     tree.insert(value);
//! }
//! assert_eq!(tree.inorder_traversal(), [1, 3, 4, 5, 6, 7, 9]);
//! assert_eq!(tree.height(), 2);
//! assert_eq!(tree.size(), 7);
//!
//! // Deleting a node with two children promotes its in-order successor.
//! tree.delete(&5);
//! assert_eq!(tree.root().map(|root| root.value), Some(6));
//! assert!(!tree.search(&5));
//! ```

use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::node::{Link, Node};
use crate::traversal::{self, Inorder};
use crate::validation;

/// A Binary Search Tree. This can be used for inserting, searching, and
/// deleting values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree<T> {
    root: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Adopts an existing node graph as a search tree. The graph is checked
    /// with [`is_valid_bst`](crate::validation::is_valid_bst) first.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{Error, Node, Tree};
    ///
    /// let ordered = Node::new(2).with_left(Node::new(1)).with_right(Node::new(3));
    /// let tree = Tree::try_from_root(Some(Box::new(ordered))).unwrap();
    /// assert_eq!(tree.size(), 3);
    ///
    /// let unordered = Node::new(2).with_left(Node::new(3));
    /// assert_eq!(
    ///     Tree::try_from_root(Some(Box::new(unordered))),
    ///     Err(Error::NotSearchTree)
    /// );
    /// ```
    pub fn try_from_root(root: Link<T>) -> Result<Self>
    where
        T: Ord,
    {
        if validation::is_valid_bst(root.as_deref()) {
            Ok(Self { root })
        } else {
            log::debug!("rejecting node graph that is not in search order");
            Err(Error::NotSearchTree)
        }
    }

    /// The root node, for running the free-standing query algorithms.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Gives up ownership of the node graph.
    pub fn into_root(self) -> Link<T> {
        self.root
    }

    /// True iff the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `value`, returning whether a node was added. Inserting a value
    /// that is already present leaves the tree unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.size(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        Self::insert_at(&mut self.root, value)
    }

    fn insert_at(link: &mut Link<T>, value: T) -> bool
    where
        T: Ord,
    {
        match link {
            None => {
                *link = Some(Node::boxed(value));
                true
            }
            Some(node) => match value.cmp(&node.value) {
                Ordering::Less => Self::insert_at(&mut node.left, value),
                Ordering::Greater => Self::insert_at(&mut node.right, value),
                Ordering::Equal => {
                    log::trace!("ignoring duplicate insert");
                    false
                }
            },
        }
    }

    /// True iff some node holds `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.search(&3));
    /// assert!(!tree.search(&42));
    /// ```
    pub fn search(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Removes `value` from the tree, returning whether it was present.
    ///
    /// A leaf is simply dropped and a node with one child is replaced by that
    /// child. A node with two children takes the value of its in-order
    /// successor (the smallest value in its right subtree), and the successor's
    /// node is removed from the right subtree instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let mut tree: Tree<_> = [5, 3, 8, 7].into_iter().collect();
    ///
    /// assert!(tree.delete(&5));
    /// assert_eq!(tree.preorder_traversal(), [7, 3, 8]);
    ///
    /// // Deleting something that isn't there does nothing.
    /// assert!(!tree.delete(&5));
    /// ```
    pub fn delete(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        Self::delete_at(&mut self.root, value)
    }

    fn delete_at(link: &mut Link<T>, value: &T) -> bool
    where
        T: Ord,
    {
        let Some(node) = link.as_mut() else {
            log::trace!("value to delete is not in the tree");
            return false;
        };

        match value.cmp(&node.value) {
            Ordering::Less => Self::delete_at(&mut node.left, value),
            Ordering::Greater => Self::delete_at(&mut node.right, value),
            Ordering::Equal => {
                if node.has_both_children() {
                    // The successor is the leftmost node of the right subtree so it has no
                    // left child and is unlinked by splicing up its right child.
                    if let Some(successor) = Self::take_min(&mut node.right) {
                        log::trace!("replacing deleted value with its in-order successor");
                        node.value = successor;
                    }
                } else {
                    let child = node.left.take().or_else(|| node.right.take());
                    *link = child;
                }
                true
            }
        }
    }

    /// Unlinks the leftmost node under `link` and returns its value.
    fn take_min(link: &mut Link<T>) -> Option<T> {
        if link.as_ref()?.left.is_some() {
            return Self::take_min(&mut link.as_mut()?.left);
        }

        let node = link.take()?;
        let Node { value, right, .. } = *node;
        *link = right;
        Some(value)
    }

    /// The smallest value, found by following left children from the root.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    /// The largest value, found by following right children from the root.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    /// Borrows the values in ascending order.
    pub fn iter(&self) -> Inorder<'_, T> {
        Inorder::new(self.root.as_deref())
    }

    /// The values in ascending order.
    pub fn inorder_traversal(&self) -> Vec<T>
    where
        T: Clone,
    {
        traversal::inorder(self.root.as_deref())
    }

    /// The values in (node, left, right) order.
    pub fn preorder_traversal(&self) -> Vec<T>
    where
        T: Clone,
    {
        traversal::preorder(self.root.as_deref())
    }

    /// The values in (left, right, node) order.
    pub fn postorder_traversal(&self) -> Vec<T>
    where
        T: Clone,
    {
        traversal::postorder(self.root.as_deref())
    }

    /// The values breadth-first, left to right within each depth.
    pub fn level_order_traversal(&self) -> Vec<T>
    where
        T: Clone,
    {
        traversal::level_order(self.root.as_deref())
    }

    /// Number of edges on the longest root-to-leaf path. An empty tree has a
    /// height of -1 and a lone root a height of 0.
    pub fn height(&self) -> isize {
        fn height<T>(link: &Link<T>) -> isize {
            match link {
                None => -1,
                Some(node) => 1 + height(&node.left).max(height(&node.right)),
            }
        }
        height(&self.root)
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        fn size<T>(link: &Link<T>) -> usize {
            match link {
                None => 0,
                Some(node) => 1 + size(&node.left) + size(&node.right),
            }
        }
        size(&self.root)
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Inorder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut tree = Self::new();
        tree.extend(values);
        tree
    }
}
