//! Measurements of a tree's shape and contents.
//!
//! None of these assume search ordering; they work on any binary tree and
//! never modify it. An absent tree gets the identity value for each measure:
//! height -1, counts 0, no minimum or maximum, diameter 0.

use crate::node::Node;

/// Number of edges on the longest root-to-leaf path: -1 for an empty tree,
/// 0 for a lone root.
///
/// # Examples
///
/// ```
/// use bintree::{properties::height, Node};
///
/// assert_eq!(height::<i32>(None), -1);
/// assert_eq!(height(Some(&Node::new(1))), 0);
/// assert_eq!(height(Some(&Node::new(1).with_left(Node::new(2)))), 1);
/// ```
pub fn height<T>(root: Option<&Node<T>>) -> isize {
    match root {
        None => -1,
        Some(node) => 1 + height(node.left.as_deref()).max(height(node.right.as_deref())),
    }
}

/// Number of edges from the root to the first node holding `target`, searching
/// node, then left subtree, then right subtree. `None` if no node holds it.
///
/// With duplicate values the pre-order-first match wins.
pub fn depth<T: PartialEq>(root: Option<&Node<T>>, target: &T) -> Option<usize> {
    let node = root?;
    if node.value == *target {
        return Some(0);
    }

    depth(node.left.as_deref(), target)
        .or_else(|| depth(node.right.as_deref(), target))
        .map(|d| d + 1)
}

/// Total number of nodes.
pub fn count_nodes<T>(root: Option<&Node<T>>) -> usize {
    root.map_or(0, |node| {
        count_nodes(node.left.as_deref()) + count_nodes(node.right.as_deref()) + 1
    })
}

/// Number of nodes with no children.
pub fn count_leaves<T>(root: Option<&Node<T>>) -> usize {
    match root {
        None => 0,
        Some(node) if node.is_leaf() => 1,
        Some(node) => count_leaves(node.left.as_deref()) + count_leaves(node.right.as_deref()),
    }
}

/// Smallest value anywhere in the tree. This scans every node, so it does not
/// rely on search ordering.
pub fn find_min<T: Ord>(root: Option<&Node<T>>) -> Option<&T> {
    let node = root?;
    [
        Some(&node.value),
        find_min(node.left.as_deref()),
        find_min(node.right.as_deref()),
    ]
    .into_iter()
    .flatten()
    .min()
}

/// Largest value anywhere in the tree. Like [`find_min`] this is a full scan.
pub fn find_max<T: Ord>(root: Option<&Node<T>>) -> Option<&T> {
    let node = root?;
    [
        Some(&node.value),
        find_max(node.left.as_deref()),
        find_max(node.right.as_deref()),
    ]
    .into_iter()
    .flatten()
    .max()
}

/// Number of edges on the longest path between any two nodes. The path may
/// or may not pass through the root. Empty trees and lone roots have a
/// diameter of 0.
///
/// # Examples
///
/// ```
/// use bintree::{properties::diameter, Node};
///
/// //       1
/// //      / \
/// //     2   3
/// //    / \
/// //   4   5
/// let root = Node::new(1)
///     .with_left(Node::new(2).with_left(Node::new(4)).with_right(Node::new(5)))
///     .with_right(Node::new(3));
///
/// // 4 -> 2 -> 1 -> 3
/// assert_eq!(diameter(Some(&root)), 3);
/// ```
pub fn diameter<T>(root: Option<&Node<T>>) -> usize {
    height_and_diameter(root).1
}

/// One post-order pass computing `(height, diameter)` so heights are not
/// recomputed at every level.
fn height_and_diameter<T>(root: Option<&Node<T>>) -> (isize, usize) {
    let Some(node) = root else {
        return (-1, 0);
    };

    let (left_height, left_diameter) = height_and_diameter(node.left.as_deref());
    let (right_height, right_diameter) = height_and_diameter(node.right.as_deref());

    // Heights are at least -1, so this is never negative.
    let through_node = (left_height + right_height + 2) as usize;
    let height = 1 + left_height.max(right_height);

    (height, through_node.max(left_diameter).max(right_diameter))
}

/// True iff both trees have the same shape and equal values at every position.
pub fn are_identical<T: PartialEq>(a: Option<&Node<T>>, b: Option<&Node<T>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            a.value == b.value
                && are_identical(a.left.as_deref(), b.left.as_deref())
                && are_identical(a.right.as_deref(), b.right.as_deref())
        }
        _ => false,
    }
}
