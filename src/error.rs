//! Errors raised when a tree cannot be built from the input it was given.
//!
//! Lookups that miss (`depth`, `find_distance`, `lowest_common_ancestor`, ...)
//! and operations on an empty tree never fail; they return `None` or the
//! identity value for the operation instead. Only construction rejects input.

/// A convenience alias for results produced by the construction functions.
pub type Result<T> = std::result::Result<T, Error>;

/// Every way construction input can be malformed. All variants are "invalid
/// input"; there are no I/O or internal failures in this crate.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Two traversal sequences describing the same tree had different lengths.
    #[error("traversal sequences differ in length ({left} vs {right})")]
    LengthMismatch {
        /// Length of the first sequence.
        left: usize,
        /// Length of the second sequence.
        right: usize,
    },
    /// The in-order sequence repeated a value, so split points are ambiguous.
    #[error("in-order sequence repeats the value at index {index}")]
    DuplicateValue {
        /// Index of the second occurrence.
        index: usize,
    },
    /// A pre-order/post-order value never appears in the in-order sequence.
    #[error("value at index {index} does not appear in the in-order sequence")]
    UnknownValue {
        /// Index into the pre-order/post-order sequence.
        index: usize,
    },
    /// The two traversals cannot describe the same tree.
    #[error("value at index {index} falls outside the subtree it was consumed for")]
    InconsistentTraversals {
        /// Index into the pre-order/post-order sequence.
        index: usize,
    },
    /// A level-order value had no open parent left to attach to.
    #[error("level-order value at index {index} has no parent to attach to")]
    UnattachedValue {
        /// Index into the level-order sequence.
        index: usize,
    },
    /// A level-order sequence started with a missing marker but carried values.
    #[error("level-order sequence has values but no root")]
    MissingRoot,
    /// The parenthesized text form could not be parsed.
    #[error("malformed tree string at byte {position}: {reason}")]
    Parse {
        /// Byte offset where parsing stopped.
        position: usize,
        /// What was expected there.
        reason: String,
    },
    /// A node graph handed to [`Tree`](crate::Tree) breaks the search ordering.
    #[error("nodes are not in binary search tree order")]
    NotSearchTree,
}
