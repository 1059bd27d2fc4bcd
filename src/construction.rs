//! Building trees from sequences, and flattening them back.
//!
//! Input that cannot describe a tree is rejected with an [`Error`] rather than
//! producing a best-effort guess.
//!
//! # Examples
//!
//! ```
//! use bintree::construction::{build_tree_from_preorder_inorder, deserialize, serialize};
//!
//! let root = build_tree_from_preorder_inorder(&[3, 9, 20, 15, 7], &[9, 3, 15, 20, 7])?;
//!
//! // Missing children are `None`, trailing ones are trimmed.
//! let flat = serialize(root.as_deref());
//! assert_eq!(flat, [Some(3), Some(9), Some(20), None, None, Some(15), Some(7)]);
//! assert_eq!(deserialize(&flat)?, root);
//! # Ok::<(), bintree::Error>(())
//! ```

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

use crate::error::{Error, Result};
use crate::node::{Link, Node};

/// Rebuilds the unique tree with the given pre-order and in-order traversals.
/// Values must be unique.
pub fn build_tree_from_preorder_inorder<T>(preorder: &[T], inorder: &[T]) -> Result<Link<T>>
where
    T: Clone + Eq + Hash,
{
    let mut builder = SplitBuilder::new(preorder.iter().enumerate(), inorder, preorder.len())?;
    builder.build_root(Side::Left)
}

/// Rebuilds the unique tree with the given in-order and post-order traversals.
/// Values must be unique.
///
/// # Examples
///
/// ```
/// use bintree::{construction::build_tree_from_inorder_postorder, traversal};
///
/// let root = build_tree_from_inorder_postorder(&[9, 3, 15, 20, 7], &[9, 15, 7, 20, 3])?;
/// assert_eq!(traversal::preorder(root.as_deref()), [3, 9, 20, 15, 7]);
/// # Ok::<(), bintree::Error>(())
/// ```
pub fn build_tree_from_inorder_postorder<T>(inorder: &[T], postorder: &[T]) -> Result<Link<T>>
where
    T: Clone + Eq + Hash,
{
    let roots = postorder.iter().enumerate().rev();
    let mut builder = SplitBuilder::new(roots, inorder, postorder.len())?;
    builder.build_root(Side::Right)
}

/// Which subtree is built first. Pre-order lists a root before its left
/// subtree; post-order read backwards lists a root before its right subtree.
#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

/// State threaded through the recursive split: where each value sits in the
/// in-order sequence, and a cursor over the traversal that yields roots.
struct SplitBuilder<'a, T, I> {
    positions: HashMap<&'a T, usize>,
    roots: I,
    len: usize,
}

impl<'a, T, I> SplitBuilder<'a, T, I>
where
    T: Clone + Eq + Hash,
    I: Iterator<Item = (usize, &'a T)>,
{
    fn new(roots: I, inorder: &'a [T], roots_len: usize) -> Result<Self> {
        if roots_len != inorder.len() {
            log::debug!("rejecting traversals of different lengths");
            return Err(Error::LengthMismatch {
                left: roots_len,
                right: inorder.len(),
            });
        }

        let mut positions = HashMap::with_capacity(inorder.len());
        for (index, value) in inorder.iter().enumerate() {
            if positions.insert(value, index).is_some() {
                log::debug!("rejecting in-order sequence with a repeated value");
                return Err(Error::DuplicateValue { index });
            }
        }

        Ok(Self {
            positions,
            roots,
            len: inorder.len(),
        })
    }

    fn build_root(&mut self, first: Side) -> Result<Link<T>> {
        self.build(0, self.len, first)
    }

    /// Builds the subtree whose values occupy `inorder[start..end]`.
    fn build(&mut self, start: usize, end: usize, first: Side) -> Result<Link<T>> {
        if start >= end {
            return Ok(None);
        }

        // Equal lengths mean the cursor cannot run dry before every range is filled.
        let Some((index, value)) = self.roots.next() else {
            return Ok(None);
        };
        let split = *self.positions.get(value).ok_or_else(|| {
            log::debug!("rejecting traversal value missing from the in-order sequence");
            Error::UnknownValue { index }
        })?;
        if !(start..end).contains(&split) {
            log::debug!("rejecting traversals that disagree on subtree membership");
            return Err(Error::InconsistentTraversals { index });
        }

        let mut node = Node::boxed(value.clone());
        match first {
            Side::Left => {
                node.left = self.build(start, split, first)?;
                node.right = self.build(split + 1, end, first)?;
            }
            Side::Right => {
                node.right = self.build(split + 1, end, first)?;
                node.left = self.build(start, split, first)?;
            }
        }
        Ok(Some(node))
    }
}

/// Builds a tree from a breadth-first listing where `None` marks a missing
/// child. Each node takes the next two entries as its children, and missing
/// children get no entries of their own.
///
/// # Examples
///
/// ```
/// use bintree::{construction::build_tree_from_level_order, traversal};
///
/// let root = build_tree_from_level_order(&[Some(1), Some(2), Some(3), None, Some(4)])?;
/// assert_eq!(traversal::inorder(root.as_deref()), [2, 4, 1, 3]);
///
/// assert_eq!(build_tree_from_level_order::<i32>(&[])?, None);
/// # Ok::<(), bintree::Error>(())
/// ```
pub fn build_tree_from_level_order<T: Clone>(level_order: &[Option<T>]) -> Result<Link<T>> {
    let Some((first, rest)) = level_order.split_first() else {
        return Ok(None);
    };
    let Some(root_value) = first else {
        if rest.iter().any(Option::is_some) {
            log::debug!("rejecting level order with values but no root");
            return Err(Error::MissingRoot);
        }
        return Ok(None);
    };

    let mut root = Node::boxed(root_value.clone());
    let mut slots = rest.iter().enumerate().map(|(index, value)| (index + 1, value));

    // Parents waiting for their two slots, in breadth-first order.
    let mut queue: VecDeque<&mut Node<T>> = VecDeque::from([&mut *root]);
    while let Some(parent) = queue.pop_front() {
        let Node { left, right, .. } = parent;
        for child in [left, right] {
            let Some((_, slot)) = slots.next() else {
                break;
            };
            if let Some(value) = slot {
                queue.push_back(&mut **child.insert(Node::boxed(value.clone())));
            }
        }
    }

    if let Some((index, _)) = slots.find(|(_, slot)| slot.is_some()) {
        log::debug!("rejecting level order with a value that has no parent");
        return Err(Error::UnattachedValue { index });
    }

    Ok(Some(root))
}

/// Builds a height-balanced search tree from sorted values by rooting each
/// range at its middle element. The left middle is used for even lengths.
///
/// # Examples
///
/// ```
/// use bintree::{construction::build_bst_from_sorted_array, properties, validation};
///
/// let root = build_bst_from_sorted_array(&[1, 2, 3, 4, 5, 6, 7]);
/// let root = root.as_deref();
///
/// assert_eq!(root.map(|node| node.value), Some(4));
/// assert_eq!(properties::height(root), 2);
/// assert!(validation::is_valid_bst(root));
/// ```
pub fn build_bst_from_sorted_array<T: Clone>(sorted: &[T]) -> Link<T> {
    if sorted.is_empty() {
        return None;
    }

    let mid = (sorted.len() - 1) / 2;
    let mut node = Node::boxed(sorted[mid].clone());
    node.left = build_bst_from_sorted_array(&sorted[..mid]);
    node.right = build_bst_from_sorted_array(&sorted[mid + 1..]);
    Some(node)
}

/// Flattens a tree breadth-first with `None` for every missing child, then
/// trims trailing `None`s. [`deserialize`] reverses it.
pub fn serialize<T: Clone>(root: Option<&Node<T>>) -> Vec<Option<T>> {
    let mut out = Vec::new();
    let mut queue = VecDeque::from([root]);

    while let Some(slot) = queue.pop_front() {
        match slot {
            None => out.push(None),
            Some(node) => {
                out.push(Some(node.value.clone()));
                queue.push_back(node.left.as_deref());
                queue.push_back(node.right.as_deref());
            }
        }
    }

    while let Some(None) = out.last() {
        out.pop();
    }
    out
}

/// Rebuilds a tree from the output of [`serialize`]. This is exactly
/// [`build_tree_from_level_order`].
pub fn deserialize<T: Clone>(data: &[Option<T>]) -> Result<Link<T>> {
    build_tree_from_level_order(data)
}
