//! This crate exposes a generic binary tree that is filled level by level
//! mostly for educational purposes.
//!
//! ## Level-filled Binary Tree
//!
//! A binary tree is a data structure made of `Node`s. Each `Node` stores a
//! value and owns up to two child `Node`s, a left one and a right one. The
//! tree owns a single root `Node` (or nothing at all, when empty).
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Unlike a Binary Search Tree, this tree never compares values while
//! inserting. A new value goes into the first free child slot found by a
//! breadth-first walk from the root, so a freshly built tree always has the
//! "complete" shape: every level is full except possibly the last, which is
//! filled from left to right.
//!
//! The flip side is that the values carry no ordering information. Finding or
//! deleting a value means scanning the whole tree, `O(N)` where `N` is the
//! number of nodes.
//!
//! # Examples
//!
//! ```
//! use bintree::Tree;
//!
//! let mut tree = Tree::new();
//! for x in [10, 20, 30, 40, 50] {
//!     tree.insert(x);
//! }
//!
//! //        10
//! //       /  \
//! //     20    30
//! //    /  \
//! //  40    50
//! assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [40, 20, 50, 10, 30]);
//! assert_eq!(tree.pre_order().copied().collect::<Vec<_>>(), [10, 20, 40, 50, 30]);
//! assert_eq!(tree.post_order().copied().collect::<Vec<_>>(), [40, 50, 20, 30, 10]);
//!
//! assert!(tree.search(&20));
//! assert!(!tree.search(&60));
//!
//! // 20 has two children so its in-order successor (50) takes its place.
//! assert_eq!(tree.remove(&20), Some(20));
//! assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [40, 50, 10, 30]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod traverse;
pub mod tree;

pub use tree::Tree;
