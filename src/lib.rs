//! This crate exposes an ordered key-value map backed by a Binary Search
//! Tree (BST), mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of record (a key and its associated value, for example) and
//! will sometimes have child `Node`s. The most important invariants of the
//! BST in this crate are:
//!
//! 1. For every `Node` in the tree, all the `Node`s in its left subtree
//!    have a key less than or equal to its own key.
//! 2. For every `Node` in the tree, all the `Node`s in its right subtree
//!    have a key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Ties going left means the same key may be stored more than once: equal
//! keys coexist as distinct nodes, each routed into the left subtree of any
//! node sharing its key. Searching for a key takes `O(height)` (where
//! `height` is defined as the longest path from the root `Node` to a leaf
//! `Node`). The tree here is deliberately *not* rebalanced, so `height` is
//! `O(N)` in the worst case — insert keys in sorted order and the tree
//! degenerates into a linked list. BSTs also naturally support sorted
//! enumeration by visiting the left subtree, then the subtree root, then
//! the right subtree.

#![deny(missing_docs)]

pub mod unbalanced;

#[cfg(test)]
pub(crate) mod test;
