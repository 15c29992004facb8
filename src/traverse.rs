//! Lazy walks over a [`Tree`](crate::Tree).
//!
//! Each iterator keeps its own stack (or queue, for [`LevelOrder`]) of
//! borrowed nodes instead of recursing, so deep trees can't overflow the call
//! stack. Walks borrow the tree immutably; to restart one, ask the tree for a
//! new iterator.
//!
//! # Examples
//!
//! ```
//! use bintree::Tree;
//!
//! let tree: Tree<_> = [1, 2, 3].into_iter().collect();
//!
//! let pre_order = tree.pre_order().map(|x| x.to_string()).collect::<Vec<_>>().join(" ");
//! assert_eq!(pre_order, "1 2 3");
//! ```

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::tree::Node;

/// Yields the left subtree, then the node, then the right subtree.
///
/// Created by [`Tree::in_order`](crate::Tree::in_order).
pub struct InOrder<'a, T> {
    /// Nodes whose left subtree has been walked (or is being walked) but which
    /// haven't been yielded yet.
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(&node.value)
    }
}

impl<T> FusedIterator for InOrder<'_, T> {}

/// Yields the node, then the left subtree, then the right subtree.
///
/// Created by [`Tree::pre_order`](crate::Tree::pre_order).
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right first so the left subtree comes off the stack first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(&node.value)
    }
}

impl<T> FusedIterator for PreOrder<'_, T> {}

/// Where a node is in a post-order walk.
enum Visit<'a, T> {
    /// Its children still need to be pushed.
    Enter(&'a Node<T>),
    /// Both its subtrees have been yielded so it's next.
    Exit(&'a Node<T>),
}

/// Yields the left subtree, then the right subtree, then the node.
///
/// Created by [`Tree::post_order`](crate::Tree::post_order).
pub struct PostOrder<'a, T> {
    stack: Vec<Visit<'a, T>>,
}

impl<'a, T> PostOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.into_iter().map(Visit::Enter).collect(),
        }
    }
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(visit) = self.stack.pop() {
            match visit {
                Visit::Exit(node) => return Some(&node.value),
                Visit::Enter(node) => {
                    self.stack.push(Visit::Exit(node));
                    self.stack.extend(node.right().map(Visit::Enter));
                    self.stack.extend(node.left().map(Visit::Enter));
                }
            }
        }
        None
    }
}

impl<T> FusedIterator for PostOrder<'_, T> {}

/// Yields the tree one level at a time, each level from left to right.
///
/// Created by [`Tree::level_order`](crate::Tree::level_order).
pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> LevelOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(&node.value)
    }
}

impl<T> FusedIterator for LevelOrder<'_, T> {}
