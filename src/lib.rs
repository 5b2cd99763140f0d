//! This crate exposes an unbalanced Binary Search Tree (BST) of integers
//! instrumented for studying how different search strategies behave.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored values. BSTs are typically defined recursively
//! using the notion of a `Node`. A `Node` stores a value and will sometimes
//! have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a value by following those invariants takes `O(height)`
//! comparisons. Searching by walking the tree in one of the classical
//! depth-first orders (preorder, inorder, postorder) ignores them and can
//! take up to `O(N)` comparisons. The [`search`] module implements all four
//! and counts every comparison so the strategies can be ranked.
//!
//! ```
//! use bst_explorer::{BinaryTree, Strategy};
//!
//! let tree: BinaryTree = [50, 30, 70, 20, 40, 60, 80].into_iter().collect();
//!
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.inorder(), vec![20, 30, 40, 50, 60, 70, 80]);
//!
//! let result = tree.search(Strategy::Bst, 40);
//! assert!(result.found);
//! assert_eq!(result.path, vec![50, 30, 40]);
//! assert_eq!(result.comparisons, 3);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod render;
pub mod search;
pub mod tree;
mod util;


pub use search::{Comparison, SearchResult, Strategy};
pub use tree::{BinaryTree, Traversal};
