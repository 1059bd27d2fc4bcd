//! Root-to-leaf paths, path sums, and lookups that relate two nodes.
//!
//! Nodes are identified by value. There are no parent pointers, so every
//! "upward" question (common ancestors, distances) is answered by searching
//! down from the root.
//!
//! # Examples
//!
//! ```
//! use bintree::{paths, Node};
//!
//! //        5
//! //       / \
//! //      4   8
//! //     /   / \
//! //    11  13  4
//! //   /  \      \
//! //  7    2      1
//! let root = Node::new(5)
//!     .with_left(Node::new(4).with_left(
//!         Node::new(11).with_left(Node::new(7)).with_right(Node::new(2)),
//!     ))
//!     .with_right(
//!         Node::new(8)
//!             .with_left(Node::new(13))
//!             .with_right(Node::new(4).with_right(Node::new(1))),
//!     );
//!
//! assert!(paths::has_path_sum(Some(&root), 22));
//! assert_eq!(paths::find_paths_with_sum(Some(&root), 22), [vec![5, 4, 11, 2]]);
//! assert_eq!(paths::find_distance(Some(&root), &7, &13), Some(5));
//! ```

use std::ops::Add;

use crate::node::Node;
use crate::properties::depth;

/// Every root-to-leaf path, left paths before right paths.
pub fn find_all_paths<T: Clone>(root: Option<&Node<T>>) -> Vec<Vec<T>> {
    let mut paths = Vec::new();
    if let Some(root) = root {
        collect_paths(root, &mut Vec::new(), &mut paths);
    }
    paths
}

/// Depth-first walk that pushes each value on the way down and pops it on the
/// way back up. `path` is copied out only at leaves.
fn collect_paths<T: Clone>(node: &Node<T>, path: &mut Vec<T>, paths: &mut Vec<Vec<T>>) {
    path.push(node.value.clone());

    if node.is_leaf() {
        paths.push(path.clone());
    } else {
        for child in [node.left.as_deref(), node.right.as_deref()].into_iter().flatten() {
            collect_paths(child, path, paths);
        }
    }

    path.pop();
}

/// True iff the values along some root-to-leaf path add up to exactly `target`.
pub fn has_path_sum<T>(root: Option<&Node<T>>, target: T) -> bool
where
    T: Copy + PartialEq + Add<Output = T>,
{
    root.is_some_and(|node| reaches_sum(node, node.value, target))
}

/// `sum` already includes `node.value`. Only prefixes of real paths are ever
/// added up, so a target outside their range cannot overflow.
fn reaches_sum<T>(node: &Node<T>, sum: T, target: T) -> bool
where
    T: Copy + PartialEq + Add<Output = T>,
{
    if node.is_leaf() {
        return sum == target;
    }

    [node.left.as_deref(), node.right.as_deref()]
        .into_iter()
        .flatten()
        .any(|child| reaches_sum(child, sum + child.value, target))
}

/// Every root-to-leaf path whose values add up to exactly `target`.
pub fn find_paths_with_sum<T>(root: Option<&Node<T>>, target: T) -> Vec<Vec<T>>
where
    T: Copy + PartialEq + Add<Output = T>,
{
    let mut paths = Vec::new();
    if let Some(root) = root {
        collect_paths_with_sum(root, root.value, target, &mut Vec::new(), &mut paths);
    }
    paths
}

fn collect_paths_with_sum<T>(
    node: &Node<T>,
    sum: T,
    target: T,
    path: &mut Vec<T>,
    paths: &mut Vec<Vec<T>>,
) where
    T: Copy + PartialEq + Add<Output = T>,
{
    path.push(node.value);

    if node.is_leaf() {
        if sum == target {
            paths.push(path.clone());
        }
    } else {
        for child in [node.left.as_deref(), node.right.as_deref()].into_iter().flatten() {
            collect_paths_with_sum(child, sum + child.value, target, path, paths);
        }
    }

    path.pop();
}

/// The largest sum along any downward-then-upward path between two nodes
/// (possibly the same node). `None` for an empty tree.
///
/// # Examples
///
/// ```
/// use bintree::{paths::max_path_sum, Node};
///
/// //   -10
/// //   /  \
/// //  9    20
/// //      /  \
/// //     15   7
/// let root = Node::new(-10)
///     .with_left(Node::new(9))
///     .with_right(Node::new(20).with_left(Node::new(15)).with_right(Node::new(7)));
///
/// // 15 -> 20 -> 7
/// assert_eq!(max_path_sum(Some(&root)), Some(42));
/// assert_eq!(max_path_sum(Some(&Node::new(-3))), Some(-3));
/// ```
pub fn max_path_sum<T>(root: Option<&Node<T>>) -> Option<T>
where
    T: Copy + Ord + Add<Output = T>,
{
    let mut best = None;
    max_gain(root, &mut best);
    best
}

/// Returns the best sum of a path that starts at `node` and only goes down,
/// recording in `best` the best path that bends through `node`.
fn max_gain<T>(node: Option<&Node<T>>, best: &mut Option<T>) -> Option<T>
where
    T: Copy + Ord + Add<Output = T>,
{
    let node = node?;
    let value = node.value;

    // Children only contribute when their gain is positive, i.e. when adding
    // it to this node's value makes the sum larger.
    let gains = [
        max_gain(node.left.as_deref(), best),
        max_gain(node.right.as_deref(), best),
    ];
    let positive = gains.into_iter().flatten().filter(|&gain| value + gain > value);

    let mut through = value;
    let mut downward = value;
    for gain in positive {
        through = through + gain;
        downward = downward.max(value + gain);
    }

    *best = Some(best.map_or(through, |best| best.max(through)));
    Some(downward)
}

/// The deepest node that has both `p` and `q` in its subtree, where a node
/// counts as its own descendant. `None` unless both values are present.
///
/// # Examples
///
/// ```
/// use bintree::{paths::lowest_common_ancestor, Node};
///
/// //     3
/// //    / \
/// //   5   1
/// //  / \
/// // 6   2
/// let root = Node::new(3)
///     .with_left(Node::new(5).with_left(Node::new(6)).with_right(Node::new(2)))
///     .with_right(Node::new(1));
///
/// let lca = |p, q| lowest_common_ancestor(Some(&root), &p, &q).map(|node| node.value);
/// assert_eq!(lca(6, 2), Some(5));
/// assert_eq!(lca(6, 1), Some(3));
/// assert_eq!(lca(5, 2), Some(5));
/// assert_eq!(lca(6, 42), None);
/// ```
pub fn lowest_common_ancestor<'a, T: PartialEq>(
    root: Option<&'a Node<T>>,
    p: &T,
    q: &T,
) -> Option<&'a Node<T>> {
    if depth(root, p).is_none() || depth(root, q).is_none() {
        return None;
    }
    first_meeting(root, p, q)
}

/// Finds the LCA assuming both values are present: a node matching either
/// value is returned as soon as it is reached, and a node whose two subtrees
/// each report a match is where the searches meet.
fn first_meeting<'a, T: PartialEq>(node: Option<&'a Node<T>>, p: &T, q: &T) -> Option<&'a Node<T>> {
    let node = node?;
    if node.value == *p || node.value == *q {
        return Some(node);
    }

    let left = first_meeting(node.left.as_deref(), p, q);
    let right = first_meeting(node.right.as_deref(), p, q);

    match (left, right) {
        (Some(_), Some(_)) => Some(node),
        (found, None) | (None, found) => found,
    }
}

/// Number of edges between the nodes holding `a` and `b`, going through
/// their lowest common ancestor. `None` unless both are present.
pub fn find_distance<T: PartialEq>(root: Option<&Node<T>>, a: &T, b: &T) -> Option<usize> {
    let lca = lowest_common_ancestor(root, a, b)?;
    Some(depth(Some(lca), a)? + depth(Some(lca), b)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// ```text
    ///        5
    ///       / \
    ///      4   8
    ///     /   / \
    ///    11  13  4
    ///   /  \    / \
    ///  7    2  5   1
    /// ```
    fn path_sum_tree() -> Node<i32> {
        Node::new(5)
            .with_left(
                Node::new(4)
                    .with_left(Node::new(11).with_left(Node::new(7)).with_right(Node::new(2))),
            )
            .with_right(
                Node::new(8)
                    .with_left(Node::new(13))
                    .with_right(Node::new(4).with_left(Node::new(5)).with_right(Node::new(1))),
            )
    }

    #[test]
    fn test_find_all_paths() {
        let root = Node::new(1)
            .with_left(Node::new(2).with_right(Node::new(5)))
            .with_right(Node::new(3));

        assert_eq!(find_all_paths(Some(&root)), [vec![1, 2, 5], vec![1, 3]]);
        assert_eq!(find_all_paths(Some(&Node::new(1))), [vec![1]]);
        assert!(find_all_paths::<i32>(None).is_empty());
    }

    #[test]
    fn test_has_path_sum() {
        let root = path_sum_tree();

        assert!(has_path_sum(Some(&root), 22));
        assert!(has_path_sum(Some(&root), 26));
        assert!(!has_path_sum(Some(&root), 9));
        assert!(!has_path_sum(None, 0));
    }

    #[test]
    fn test_path_sum_only_counts_leaves() {
        // 1 -> 2 sums to 3 but 2 is not a leaf.
        let root = Node::new(1).with_left(Node::new(2).with_left(Node::new(4)));
        assert!(!has_path_sum(Some(&root), 3));
        assert!(has_path_sum(Some(&root), 7));
    }

    #[test]
    fn test_find_paths_with_sum() {
        let root = path_sum_tree();

        assert_eq!(
            find_paths_with_sum(Some(&root), 22),
            [vec![5, 4, 11, 2], vec![5, 8, 4, 5]]
        );
        assert!(find_paths_with_sum(Some(&root), 100).is_empty());
        assert!(find_paths_with_sum(None, 0).is_empty());
    }

    #[test]
    fn test_find_paths_with_negative_values() {
        let root = Node::new(-2).with_right(Node::new(-3));
        assert_eq!(find_paths_with_sum(Some(&root), -5), [vec![-2, -3]]);
    }

    #[test]
    fn test_path_sum_targets_at_integer_bounds() {
        // The only path sums to 0, far from either bound.
        let root = Node::new(1).with_left(Node::new(-1));
        assert!(!has_path_sum(Some(&root), i32::MIN));
        assert!(!has_path_sum(Some(&root), i32::MAX));
        assert!(find_paths_with_sum(Some(&root), i32::MIN).is_empty());
        assert!(find_paths_with_sum(Some(&root), i32::MAX).is_empty());

        let root = Node::new(i32::MIN + 1).with_right(Node::new(-1));
        assert!(has_path_sum(Some(&root), i32::MIN));
        assert_eq!(find_paths_with_sum(Some(&root), i32::MIN), [vec![i32::MIN + 1, -1]]);

        let root = Node::new(i32::MAX).with_left(Node::new(0));
        assert!(has_path_sum(Some(&root), i32::MAX));
    }

    #[test]
    fn test_max_path_sum() {
        assert_eq!(max_path_sum::<i32>(None), None);

        let root = Node::new(1).with_left(Node::new(2)).with_right(Node::new(3));
        assert_eq!(max_path_sum(Some(&root)), Some(6));

        // Negative subtrees are skipped.
        let root = Node::new(2).with_left(Node::new(-1)).with_right(Node::new(-2));
        assert_eq!(max_path_sum(Some(&root)), Some(2));

        // The best path lives entirely in a subtree.
        let root = Node::new(-100)
            .with_left(Node::new(4).with_left(Node::new(5)).with_right(Node::new(6)));
        assert_eq!(max_path_sum(Some(&root)), Some(15));

        // All negative: the single largest node.
        let root = Node::new(-3).with_left(Node::new(-1)).with_right(Node::new(-2));
        assert_eq!(max_path_sum(Some(&root)), Some(-1));
    }

    #[test]
    fn test_lca_missing_either_value() {
        let root = path_sum_tree();

        assert!(lowest_common_ancestor(Some(&root), &7, &99).is_none());
        assert!(lowest_common_ancestor(Some(&root), &99, &7).is_none());
        assert!(lowest_common_ancestor::<i32>(None, &1, &2).is_none());
    }

    #[test]
    fn test_lca_of_node_and_itself() {
        let root = path_sum_tree();

        let lca = lowest_common_ancestor(Some(&root), &11, &11).unwrap();
        assert_eq!(lca.value, 11);
    }

    #[test]
    fn test_find_distance() {
        let root = path_sum_tree();

        assert_eq!(find_distance(Some(&root), &7, &2), Some(2));
        assert_eq!(find_distance(Some(&root), &7, &13), Some(5));
        assert_eq!(find_distance(Some(&root), &8, &1), Some(2));
        assert_eq!(find_distance(Some(&root), &13, &13), Some(0));
        assert_eq!(find_distance(Some(&root), &7, &99), None);
    }
}
