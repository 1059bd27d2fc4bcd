//! Property tests run against the public API.

mod bst;
mod trees;

use bintree::{Link, Node};
use quickcheck::{Arbitrary, Gen};

/// A binary tree of arbitrary shape. Values are arbitrary too, so duplicates
/// and out-of-order values are expected.
#[derive(Clone, Debug)]
pub(crate) struct ArbTree(pub(crate) Link<i8>);

impl Arbitrary for ArbTree {
    fn arbitrary(g: &mut Gen) -> Self {
        let size = usize::arbitrary(g) % (g.size() + 1);
        Self(grow(g, size))
    }
}

/// Builds a tree of exactly `size` nodes, splitting the remaining nodes
/// randomly between the two subtrees.
fn grow(g: &mut Gen, size: usize) -> Link<i8> {
    if size == 0 {
        return None;
    }

    let left_size = usize::arbitrary(g) % size;
    let right_size = size - 1 - left_size;
    Some(Box::new(Node {
        value: i8::arbitrary(g),
        left: grow(g, left_size),
        right: grow(g, right_size),
    }))
}

/// Copies the shape of `link` with values replaced by their pre-order index,
/// so every value is unique.
pub(crate) fn relabel<T>(link: &Link<T>, next: &mut i32) -> Link<i32> {
    link.as_ref().map(|node| {
        let value = *next;
        *next += 1;
        let left = relabel(&node.left, next);
        let right = relabel(&node.right, next);
        Box::new(Node { value, left, right })
    })
}
