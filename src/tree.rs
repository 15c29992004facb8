//! A level-filled binary tree. Insertion never compares values: a new node
//! is attached to the first free child slot found by walking the tree
//! breadth-first from the root. Search and deletion therefore have to scan
//! the whole tree.
//!
//! # Examples
//!
//! ```
//! use bintree::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.search(&1));
//!
//! tree.insert(1);
//! tree.insert(2);
//! assert!(tree.search(&1));
//! assert!(tree.search(&2));
//!
//! // Deleting a value hands it back.
//! assert_eq!(tree.remove(&1), Some(1));
//! assert!(!tree.search(&1));
//!
//! // Deleting something that isn't there does nothing.
//! assert_eq!(tree.remove(&42), None);
//! assert_eq!(tree.len(), 1);
//! ```

use std::collections::VecDeque;
use std::mem;

use tracing::{debug, trace};

use crate::traverse::{InOrder, LevelOrder, PostOrder, PreOrder};

/// An owning child slot. `None` marks the empty pointer at the bottom of a subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A binary tree filled level by level, left to right. This can be used for
/// inserting, searching for, and deleting values, and for walking the values
/// in any of the usual orders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of values stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// How many levels are in the tree. An empty tree has a height of 0 and a
    /// tree with just a root has a height of 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let tree: Tree<_> = (0..7).collect();
    /// assert_eq!(tree.height(), 3);
    ///
    /// let tree: Tree<_> = (0..8).collect();
    /// assert_eq!(tree.height(), 4);
    /// ```
    pub fn height(&self) -> usize {
        self.root.as_deref().map_or(0, Node::height)
    }

    /// Drops every node in the tree.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Inserts the given value into the first free child slot, scanning the
    /// tree level by level and left to right. Values are never compared so
    /// duplicates are stored as separate nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.insert(2);
    /// tree.insert(3);
    /// tree.insert(1);
    ///
    /// // The root, then its two children, then the root's left child's left child.
    /// assert_eq!(tree.level_order().copied().collect::<Vec<_>>(), [1, 2, 3, 1]);
    /// assert_eq!(tree.len(), 4);
    /// ```
    pub fn insert(&mut self, value: T) {
        let node = Box::new(Node::new(value));
        match self.root {
            None => self.root = Some(node),
            Some(ref mut root) => root.attach_level_order(node),
        }
        self.len += 1;
        trace!(len = self.len, "inserted value");
    }

    /// Whether any node in the tree holds a value equal to `value`. Subtrees
    /// are checked depth first, the left one before the right one, stopping
    /// at the first match.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let tree: Tree<_> = ["a", "b", "c"].into_iter().collect();
    ///
    /// assert!(tree.search(&"c"));
    /// assert!(!tree.search(&"d"));
    /// ```
    pub fn search(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.root.as_deref().is_some_and(|root| root.search(value))
    }

    /// Deletes one node holding `value` and returns the value it held. If the
    /// tree does not contain the value, nothing happens and `None` is returned.
    ///
    /// When the value appears more than once, the first node found is the one
    /// removed, checking each node before its left subtree and the left
    /// subtree before the right one.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let mut tree: Tree<_> = [10, 20, 30, 40, 50].into_iter().collect();
    ///
    /// // The root has two children so its in-order successor, the leftmost
    /// // node of its right subtree, takes its place.
    /// assert_eq!(tree.remove(&10), Some(10));
    /// assert_eq!(tree.pre_order().copied().collect::<Vec<_>>(), [30, 20, 40, 50]);
    ///
    /// assert_eq!(tree.remove(&100), None);
    /// assert_eq!(tree.len(), 4);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq + Clone,
    {
        let (root, removed) = Node::remove_from(self.root.take(), value);
        self.root = root;

        if removed.is_some() {
            self.len -= 1;
        } else {
            trace!("value not found, tree unchanged");
        }
        removed
    }

    /// Walks the tree visiting the left subtree, then the node, then the right subtree.
    pub fn in_order(&self) -> InOrder<'_, T> {
        InOrder::new(self.root.as_deref())
    }

    /// Walks the tree visiting the node, then the left subtree, then the right subtree.
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder::new(self.root.as_deref())
    }

    /// Walks the tree visiting the left subtree, then the right subtree, then the node.
    pub fn post_order(&self) -> PostOrder<'_, T> {
        PostOrder::new(self.root.as_deref())
    }

    /// Walks the tree one level at a time, left to right. For a tree built only
    /// by inserting, this is the order the values were inserted in.
    pub fn level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder::new(self.root.as_deref())
    }
}

impl<T> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

/// A `Node` holds a single value and owns up to two children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    fn height(&self) -> usize {
        let left_height = self.left().map_or(0, Self::height);
        let right_height = self.right().map_or(0, Self::height);
        left_height.max(right_height) + 1
    }

    /// Hangs `node` off the first node, in level order, that has a free child
    /// slot. The left slot is preferred over the right one.
    fn attach_level_order(&mut self, node: Box<Self>) {
        let mut queue = VecDeque::from([self]);

        while let Some(current) = queue.pop_front() {
            match current.left {
                Some(ref mut left) => queue.push_back(left),
                None => {
                    current.left = Some(node);
                    return;
                }
            }
            match current.right {
                Some(ref mut right) => queue.push_back(right),
                None => {
                    current.right = Some(node);
                    return;
                }
            }
        }

        // Every finite tree has a node with a free slot at its bottom level.
        unreachable!("level order scan ran out of nodes before finding a free slot");
    }

    fn search(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.value == *value
            || self.left().is_some_and(|n| n.search(value))
            || self.right().is_some_and(|n| n.search(value))
    }

    /// The node reached by following left children until there are none.
    fn leftmost(&self) -> &Self {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        node
    }

    /// Unlinks the leftmost node of this subtree. Returns the root of the
    /// repaired subtree and the unlinked node's value.
    fn remove_leftmost(mut self: Box<Self>) -> (Link<T>, T) {
        match self.left.take() {
            None => {
                let right = self.right.take();
                (right, self.value)
            }
            Some(left) => {
                let (new_left, value) = left.remove_leftmost();
                self.left = new_left;
                (Some(self), value)
            }
        }
    }

    /// Deletes the first node holding `value` from the subtree in `link`. Returns the root of the
    /// repaired subtree, which the caller puts back in place of `link`, and the removed value.
    fn remove_from(link: Link<T>, value: &T) -> (Link<T>, Option<T>)
    where
        T: PartialEq + Clone,
    {
        match link {
            None => (None, None),
            Some(node) => node.remove(value),
        }
    }

    fn remove(mut self: Box<Self>, value: &T) -> (Link<T>, Option<T>)
    where
        T: PartialEq + Clone,
    {
        if self.value != *value {
            let (new_left, removed) = Self::remove_from(self.left.take(), value);
            self.left = new_left;
            if removed.is_some() {
                return (Some(self), removed);
            }

            let (new_right, removed) = Self::remove_from(self.right.take(), value);
            self.right = new_right;
            return (Some(self), removed);
        }

        match (self.left.take(), self.right.take()) {
            (None, None) => {
                debug!("removing leaf node");
                (None, Some(self.value))
            }
            (None, Some(right)) => {
                debug!("removing node, right child takes its place");
                (Some(right), Some(self.value))
            }
            (Some(left), None) => {
                debug!("removing node, left child takes its place");
                (Some(left), Some(self.value))
            }

            // With two children we keep this node where it is and move the
            // in-order successor's value into it. Then we delete the
            // successor's value from the right subtree, where the successor
            // has no left child.
            (Some(left), Some(right)) => {
                debug!("removing node, in-order successor takes its value");
                let successor = right.leftmost().value.clone();
                let removed = mem::replace(&mut self.value, successor);
                let new_right = match right.remove(&self.value) {
                    (new_right, Some(_)) => new_right,
                    // The successor's value doesn't equal itself (e.g. NaN) so it can't be found
                    // by value. Take the successor out by position instead.
                    (unchanged, None) => unchanged.and_then(|n| n.remove_leftmost().0),
                };

                self.left = Some(left);
                self.right = new_right;
                (Some(self), Some(removed))
            }
        }
    }
}
