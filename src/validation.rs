//! Structural checks over any binary tree. Every check treats an empty tree as
//! satisfying it.

use std::collections::VecDeque;

use crate::node::Node;
use crate::properties::{are_identical, height};

/// True iff every node is strictly greater than everything in its left
/// subtree and strictly less than everything in its right subtree.
///
/// # Examples
///
/// ```
/// use bintree::{validation::is_valid_bst, Node};
///
/// let valid = Node::new(5).with_left(Node::new(3)).with_right(Node::new(8));
/// assert!(is_valid_bst(Some(&valid)));
///
/// // 6 is in the left subtree of 5 even though it is a right child of 3.
/// let invalid = Node::new(5)
///     .with_left(Node::new(3).with_right(Node::new(6)))
///     .with_right(Node::new(8));
/// assert!(!is_valid_bst(Some(&invalid)));
/// ```
pub fn is_valid_bst<T: Ord>(root: Option<&Node<T>>) -> bool {
    within_bounds(root, None, None)
}

/// Each node must lie strictly between the nearest ancestor it is a right
/// descendant of (`lower`) and the nearest one it is a left descendant of
/// (`upper`).
fn within_bounds<T: Ord>(node: Option<&Node<T>>, lower: Option<&T>, upper: Option<&T>) -> bool {
    let Some(node) = node else {
        return true;
    };

    if lower.map_or(false, |lower| node.value <= *lower)
        || upper.map_or(false, |upper| node.value >= *upper)
    {
        return false;
    }

    within_bounds(node.left.as_deref(), lower, Some(&node.value))
        && within_bounds(node.right.as_deref(), Some(&node.value), upper)
}

/// True iff no node's subtrees differ in height by more than one.
pub fn is_balanced<T>(root: Option<&Node<T>>) -> bool {
    balanced_height(root).is_some()
}

/// Height counted in nodes (0 for empty), or `None` as soon as any subtree is
/// out of balance.
fn balanced_height<T>(node: Option<&Node<T>>) -> Option<usize> {
    let Some(node) = node else {
        return Some(0);
    };

    let left = balanced_height(node.left.as_deref())?;
    let right = balanced_height(node.right.as_deref())?;

    if left.abs_diff(right) > 1 {
        None
    } else {
        Some(left.max(right) + 1)
    }
}

/// True iff every level is full except possibly the last, which is filled
/// from the left.
///
/// # Examples
///
/// ```
/// use bintree::{validation::is_complete, Node};
///
/// let complete = Node::new(1)
///     .with_left(Node::new(2).with_left(Node::new(4)))
///     .with_right(Node::new(3));
/// assert!(is_complete(Some(&complete)));
///
/// let gap = Node::new(1)
///     .with_left(Node::new(2).with_right(Node::new(5)))
///     .with_right(Node::new(3));
/// assert!(!is_complete(Some(&gap)));
/// ```
pub fn is_complete<T>(root: Option<&Node<T>>) -> bool {
    let Some(root) = root else {
        return true;
    };

    let mut queue = VecDeque::from([Some(root)]);
    let mut seen_gap = false;

    while let Some(slot) = queue.pop_front() {
        match slot {
            None => seen_gap = true,
            Some(_) if seen_gap => return false,
            Some(node) => {
                queue.push_back(node.left.as_deref());
                queue.push_back(node.right.as_deref());
            }
        }
    }

    true
}

/// True iff every internal node has two children and every leaf sits at the
/// tree's full height.
pub fn is_perfect<T>(root: Option<&Node<T>>) -> bool {
    let Some(root) = root else {
        return true;
    };

    // A non-empty tree has a non-negative height.
    let full_height = height(Some(root)) as usize;
    leaves_at(root, full_height, 0)
}

fn leaves_at<T>(node: &Node<T>, full_height: usize, level: usize) -> bool {
    match (node.left.as_deref(), node.right.as_deref()) {
        (None, None) => level == full_height,
        (Some(left), Some(right)) => {
            leaves_at(left, full_height, level + 1) && leaves_at(right, full_height, level + 1)
        }
        _ => false,
    }
}

/// True iff the tree is its own mirror image.
///
/// # Examples
///
/// ```
/// use bintree::{validation::is_symmetric, Node};
///
/// let mirrored = Node::new(1)
///     .with_left(Node::new(2).with_left(Node::new(3)))
///     .with_right(Node::new(2).with_right(Node::new(3)));
/// assert!(is_symmetric(Some(&mirrored)));
/// ```
pub fn is_symmetric<T: PartialEq>(root: Option<&Node<T>>) -> bool {
    root.map_or(true, |root| {
        is_mirror(root.left.as_deref(), root.right.as_deref())
    })
}

fn is_mirror<T: PartialEq>(a: Option<&Node<T>>, b: Option<&Node<T>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            a.value == b.value
                && is_mirror(a.left.as_deref(), b.right.as_deref())
                && is_mirror(a.right.as_deref(), b.left.as_deref())
        }
        _ => false,
    }
}

/// True iff some node of `main` roots a subtree identical to `sub`. An empty
/// `sub` is a subtree of anything.
pub fn is_subtree<T: PartialEq>(main: Option<&Node<T>>, sub: Option<&Node<T>>) -> bool {
    if sub.is_none() {
        return true;
    }
    let Some(node) = main else {
        return false;
    };

    are_identical(Some(node), sub)
        || is_subtree(node.left.as_deref(), sub)
        || is_subtree(node.right.as_deref(), sub)
}
