//! This crate exposes an unbalanced Binary Search Tree (BST) along with a few structural metrics
//! (depth, height, and diameter), mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). The [`Tree`] here never rebalances itself, so its
//! height depends entirely on insertion order: random input keeps it near `O(lg N)` while sorted
//! input turns it into a chain of `N` nodes. BSTs also naturally support sorted iteration by
//! visiting the left subtree, then the subtree root, then the right subtree.
//!
//! ## Metrics
//!
//! - **depth**: the number of edges from the root down to a given node.
//! - **height**: the number of edges on the longest root-to-leaf path (`-1` when empty).
//! - **diameter**: the number of edges on the longest path between any two nodes.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod tree;

pub use error::{TreeError, TreeResult};
pub use tree::{Iter, Order, Tree};
