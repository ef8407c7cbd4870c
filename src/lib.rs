//! An ordered Binary Search Tree (BST) container with cursor-based
//! iteration, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one value
//! and sometimes has child `Node`s. The most important invariants of a
//! BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree
//!    have a value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree
//!    have a value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching
//! for values in the tree takes `O(height)` (where `height` is defined
//! as the longest path from the root `Node` to a leaf `Node`). BSTs
//! also naturally support sorted iteration by visiting the left
//! subtree, then the subtree root, then the right subtree. This crate
//! exposes that sorted order through a [`Cursor`]: a position handle
//! that dereferences to one stored value and advances to the in-order
//! successor.
//!
//! The tree here is insert-and-query only: there is no deletion and no
//! rebalancing, so the shape of the tree is entirely determined by the
//! insertion order.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod cursor;
mod node;
mod tree;

pub use cursor::Cursor;
pub use tree::Tree;
