//! This crate exposes a Binary Search Tree along with a family of algorithms
//! over plain binary trees, mostly for educational purposes.
//!
//! ## Binary Trees
//!
//! Every tree here is built from [`Node`]s. A `Node` stores a value and owns
//! up to two children. There are no parent pointers; algorithms that need to
//! relate two nodes (common ancestors, distances) search down from the root.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The free functions in [`traversal`], [`properties`], [`validation`], and
//! [`paths`] take a root as `Option<&Node<T>>` (an absent root is an empty
//! tree) and never modify it. [`construction`] and [`parse`] build trees from
//! sequences or text and turn them back.
//!
//! ## Binary Search Tree
//!
//! [`Tree`] keeps its nodes in search order. The most important invariants of
//! a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! Searching for a value takes `O(height)`. This tree does not rebalance, so
//! the height depends entirely on insertion order: sorted input produces a
//! chain of height `N - 1`. BSTs also naturally support sorted iteration by
//! visiting the left subtree, then the subtree root, then the right subtree.
//!
//! ```
//! use bintree::{paths, validation, Tree};
//!
//! let tree: Tree<i32> = [5, 3, 7, 1, 9, 4, 6].into_iter().collect();
//!
//! assert_eq!(tree.inorder_traversal(), [1, 3, 4, 5, 6, 7, 9]);
//! assert!(validation::is_valid_bst(tree.root()));
//! assert_eq!(paths::find_all_paths(tree.root()).len(), 4);
//! ```
//!
//! Recursion depth in every algorithm is bounded by the tree's height, so very
//! deep, unbalanced trees can overflow the stack.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod bst;
pub mod construction;
mod error;
mod node;
pub mod parse;
pub mod paths;
pub mod properties;
pub mod traversal;
pub mod validation;

pub use bst::Tree;
pub use error::{Error, Result};
pub use node::{Link, Node};
