//! The parenthesized text form of a tree.
//!
//! A tree is written as its root value followed by up to two parenthesized
//! subtrees, left then right:
//!
//! ```text
//! Tree := Value ( '(' Tree? ')' ( '(' Tree? ')' )? )?
//! ```
//!
//! A value is every character up to the next parenthesis and is read with
//! [`FromStr`]. When a node has a right child but no left child, the left
//! group is written empty: `3()(6)`.
//!
//! # Examples
//!
//! ```
//! use bintree::parse::{build_tree_from_string, tree_to_string};
//!
//! let root = build_tree_from_string::<i32>("1(2(4)(5))(3()(6))")?;
//! let root = root.as_deref();
//!
//! assert_eq!(root.map(|node| node.value), Some(1));
//! assert!(root.and_then(|node| node.right.as_ref()).unwrap().left.is_none());
//! assert_eq!(tree_to_string(root), "1(2(4)(5))(3()(6))");
//! # Ok::<(), bintree::Error>(())
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::node::{Link, Node};

/// Parses the text form. An empty string is an empty tree.
pub fn build_tree_from_string<T: FromStr>(input: &str) -> Result<Link<T>> {
    if input.is_empty() {
        return Ok(None);
    }

    let mut parser = Parser { input, pos: 0 };
    let root = parser.tree()?;

    if parser.pos != input.len() {
        return Err(parser.error("expected end of input"));
    }
    Ok(Some(root))
}

/// Writes the text form. An empty tree is an empty string.
pub fn tree_to_string<T: fmt::Display>(root: Option<&Node<T>>) -> String {
    root.map_or_else(String::new, |node| node.to_string())
}

/// A recursive descent parser over the bytes of `input`. Parentheses are
/// ASCII, so every position it stops at is a char boundary.
struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn eat(&mut self, byte: u8) -> bool {
        let found = self.peek() == Some(byte);
        if found {
            self.pos += 1;
        }
        found
    }

    fn error(&self, reason: impl Into<String>) -> Error {
        let reason = reason.into();
        log::debug!("rejecting tree string at byte {}: {reason}", self.pos);
        Error::Parse {
            position: self.pos,
            reason,
        }
    }

    fn tree<T: FromStr>(&mut self) -> Result<Box<Node<T>>> {
        let start = self.pos;
        let len = self.input[start..]
            .find(|c: char| c == '(' || c == ')')
            .unwrap_or(self.input.len() - start);
        let token = &self.input[start..start + len];

        if token.is_empty() {
            return Err(self.error("expected a value"));
        }
        let value = token
            .parse()
            .map_err(|_| self.error(format!("invalid value {token:?}")))?;
        self.pos += len;

        let mut node = Node::boxed(value);
        if let Some(left) = self.group()? {
            node.left = left;
            if let Some(right) = self.group()? {
                node.right = right;
            }
        }
        Ok(node)
    }

    /// Parses an optional `( Tree? )`. The outer `None` means there was no
    /// group at all; `Some(None)` is an empty group.
    fn group<T: FromStr>(&mut self) -> Result<Option<Link<T>>> {
        if !self.eat(b'(') {
            return Ok(None);
        }

        let subtree = match self.peek() {
            Some(b')') => None,
            _ => Some(self.tree()?),
        };

        if !self.eat(b')') {
            return Err(self.error("expected ')'"));
        }
        Ok(Some(subtree))
    }
}
