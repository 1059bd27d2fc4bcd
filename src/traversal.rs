//! Depth-first and breadth-first visits over any binary tree.
//!
//! These work on any [`Node`] graph, ordered or not. On a valid binary search
//! tree [`inorder`] yields the values in ascending order.
//!
//! # Examples
//!
//! ```
//! use bintree::{traversal, Node};
//!
//! //       1
//! //      / \
//! //     2   3
//! //    / \
//! //   4   5
//! let root = Node::new(1)
//!     .with_left(Node::new(2).with_left(Node::new(4)).with_right(Node::new(5)))
//!     .with_right(Node::new(3));
//!
//! assert_eq!(traversal::inorder(Some(&root)), [4, 2, 5, 1, 3]);
//! assert_eq!(traversal::preorder(Some(&root)), [1, 2, 4, 5, 3]);
//! assert_eq!(traversal::postorder(Some(&root)), [4, 5, 2, 3, 1]);
//! assert_eq!(traversal::level_order(Some(&root)), [1, 2, 3, 4, 5]);
//! ```

use std::collections::VecDeque;

use crate::node::Node;

/// Values in (left, node, right) order.
pub fn inorder<T: Clone>(root: Option<&Node<T>>) -> Vec<T> {
    let mut out = Vec::new();
    visit_inorder(root, &mut out);
    out
}

/// Values in (node, left, right) order.
pub fn preorder<T: Clone>(root: Option<&Node<T>>) -> Vec<T> {
    let mut out = Vec::new();
    visit_preorder(root, &mut out);
    out
}

/// Values in (left, right, node) order.
pub fn postorder<T: Clone>(root: Option<&Node<T>>) -> Vec<T> {
    let mut out = Vec::new();
    visit_postorder(root, &mut out);
    out
}

/// Values one depth at a time, left to right within a depth.
pub fn level_order<T: Clone>(root: Option<&Node<T>>) -> Vec<T> {
    let mut out = Vec::new();
    let mut queue: VecDeque<&Node<T>> = root.into_iter().collect();

    while let Some(node) = queue.pop_front() {
        out.push(node.value.clone());
        queue.extend(node.left.as_deref());
        queue.extend(node.right.as_deref());
    }

    out
}

/// Same output as [`inorder`] but driven by an explicit stack instead of the
/// call stack. See [`Inorder`] for the lazy version.
pub fn inorder_iterative<T: Clone>(root: Option<&Node<T>>) -> Vec<T> {
    Inorder::new(root).cloned().collect()
}

fn visit_inorder<T: Clone>(node: Option<&Node<T>>, out: &mut Vec<T>) {
    if let Some(node) = node {
        visit_inorder(node.left.as_deref(), out);
        out.push(node.value.clone());
        visit_inorder(node.right.as_deref(), out);
    }
}

fn visit_preorder<T: Clone>(node: Option<&Node<T>>, out: &mut Vec<T>) {
    if let Some(node) = node {
        out.push(node.value.clone());
        visit_preorder(node.left.as_deref(), out);
        visit_preorder(node.right.as_deref(), out);
    }
}

fn visit_postorder<T: Clone>(node: Option<&Node<T>>, out: &mut Vec<T>) {
    if let Some(node) = node {
        visit_postorder(node.left.as_deref(), out);
        visit_postorder(node.right.as_deref(), out);
        out.push(node.value.clone());
    }
}

/// A lazy in-order iterator over borrowed values.
///
/// It keeps the chain of nodes whose left subtrees are still being visited,
/// so memory use is `O(height)`.
pub struct Inorder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Inorder<'a, T> {
    /// Start an in-order walk of the tree rooted at `root`.
    pub fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<&'a Node<T>>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Inorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// ```text
    ///     1
    ///    / \
    ///   2   3
    ///  / \   \
    /// 4   5   6
    /// ```
    fn sample() -> Node<i32> {
        Node::new(1)
            .with_left(Node::new(2).with_left(Node::new(4)).with_right(Node::new(5)))
            .with_right(Node::new(3).with_right(Node::new(6)))
    }

    #[test]
    fn empty_tree_visits_nothing() {
        assert!(inorder::<i32>(None).is_empty());
        assert!(preorder::<i32>(None).is_empty());
        assert!(postorder::<i32>(None).is_empty());
        assert!(level_order::<i32>(None).is_empty());
        assert!(inorder_iterative::<i32>(None).is_empty());
    }

    #[test]
    fn single_node() {
        let node = Node::new(9);
        assert_eq!(inorder(Some(&node)), [9]);
        assert_eq!(preorder(Some(&node)), [9]);
        assert_eq!(postorder(Some(&node)), [9]);
        assert_eq!(level_order(Some(&node)), [9]);
    }

    #[test]
    fn visit_orders() {
        let root = sample();

        assert_eq!(inorder(Some(&root)), [4, 2, 5, 1, 3, 6]);
        assert_eq!(preorder(Some(&root)), [1, 2, 4, 5, 3, 6]);
        assert_eq!(postorder(Some(&root)), [4, 5, 2, 6, 3, 1]);
        assert_eq!(level_order(Some(&root)), [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn iterative_matches_recursive() {
        let root = sample();
        assert_eq!(inorder_iterative(Some(&root)), inorder(Some(&root)));

        // A left-leaning chain exercises the spine push.
        let chain = Node::new(3).with_left(Node::new(2).with_left(Node::new(1)));
        assert_eq!(inorder_iterative(Some(&chain)), [1, 2, 3]);
    }

    #[test]
    fn inorder_iterator_is_lazy() {
        let root = sample();
        let mut iter = Inorder::new(Some(&root));

        assert_eq!(iter.next(), Some(&4));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.by_ref().count(), 4);
        assert_eq!(iter.next(), None);
    }
}
