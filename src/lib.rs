//! This crate exposes a plain, owned Binary Search Tree (BST) of unique values.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored records. BSTs are typically defined
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
//! path from the root `Node` to a leaf `Node`). This tree does no balancing of its own so
//! inserting values in ascending order gives it a height of `N`. Its height can be brought back
//! down to `O(lg N)` by moving its values out in sorted order and building a new tree from them,
//! picking the middle value as the root of every subtree (see [`Tree::rebalance`]).
//!
//! ## Printing
//!
//! A [`Tree`] prints its values in ascending order through [`Display`][std::fmt::Display] and can
//! be drawn on its side with [`Tree::sideways`].
//!
//! ## Logging
//!
//! Bulk operations (draining, building, clearing) emit `debug` events and single insertions
//! `trace` events through [`tracing`]. Install a subscriber to see them.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod display;
pub mod error;
pub mod tree;

pub use display::Sideways;
pub use error::TreeError;
pub use tree::Tree;
