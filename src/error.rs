//! Failures surfaced by [`Tree`][crate::Tree] lookups.
//!
//! Only [`Tree::retrieve`][crate::Tree::retrieve] can fail. Every other operation is total: removing
//! an absent key is a no-op and the structural metrics are defined for the empty tree.

use thiserror::Error;

/// The ways a lookup can fail.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The tree holds no items at all.
    #[error("non-empty tree expected on retrieve")]
    EmptyTree,

    /// The tree is non-empty but no item compares equal to the requested key.
    #[error("existent key expected on retrieve")]
    KeyNotFound,
}

/// Shorthand for results carrying a [`TreeError`].
pub type TreeResult<T> = Result<T, TreeError>;
