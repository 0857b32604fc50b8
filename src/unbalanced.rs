//! A plain Binary Search Tree with no balancing. Its shape depends entirely on
//! insertion order, so it's the baseline the [`balanced`](crate::balanced) tree
//! is measured against.
//!
//! # Examples
//!
//! ```
//! use keyset::unbalanced::Tree;
//!
//! let mut tree = Tree::new();
//! for key in [1, 2, 3] {
//!     tree.insert(key);
//! }
//!
//! // Nothing gets rotated, so sorted input makes a list.
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.prefix().collect::<Vec<_>>(), [1, 2, 3]);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::traverse::{BinaryNode, InOrder, PostOrder, PreOrder};
use crate::{Collection, Key, Result};

type Link = Option<Box<Node>>;

/// An unbalanced Binary Search Tree of unique keys.
#[derive(Default)]
pub struct Tree {
    root: Link,
    len: usize,
}

impl Drop for Tree {
    // The tree can be as deep as it is long, so the default recursive drop could
    // overflow the stack.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl fmt::Debug for Tree {
    // Written out so printing a deep tree walks it with a stack instead of recursing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.infix()).finish()
    }
}

impl Tree {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Whether the tree contains `key`.
    pub fn find(&self, key: Key) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right.as_deref(),
            };
        }
        false
    }

    /// Inserts `key` as a new leaf. Returns `false` and leaves the tree untouched if
    /// `key` was already present.
    pub fn insert(&mut self, key: Key) -> bool {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => return false,
                Ordering::Greater => &mut node.right,
            };
        }

        *link = Some(Node::new_boxed(key));
        self.len += 1;
        true
    }

    /// Removes `key` from the tree if it's there. Returns whether a key was removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyset::unbalanced::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [2, 1, 3] {
    ///     tree.insert(key);
    /// }
    ///
    /// // 2 has two children so it takes on its successor's key.
    /// assert!(tree.remove(2));
    /// assert_eq!(tree.prefix().collect::<Vec<_>>(), [3, 1]);
    /// ```
    pub fn remove(&mut self, key: Key) -> bool {
        let mut link = &mut self.root;
        loop {
            let ordering = match link.as_deref() {
                Some(node) => key.cmp(&node.key),
                None => return false,
            };
            match ordering {
                Ordering::Less => {
                    if let Some(node) = link {
                        link = &mut node.left;
                    }
                }
                Ordering::Equal => break,
                Ordering::Greater => {
                    if let Some(node) = link {
                        link = &mut node.right;
                    }
                }
            }
        }

        let Some(mut node) = link.take() else {
            return false;
        };
        *link = match (node.left.take(), node.right.take()) {
            (None, right) => right,
            (left, None) => left,
            (left, right) => {
                // Take over the in-order successor's key and unlink the successor.
                node.left = left;
                node.right = right;
                if let Some(successor) = Node::pop_min(&mut node.right) {
                    node.key = successor;
                }
                Some(node)
            }
        };
        self.len -= 1;
        true
    }

    /// Every key in ascending order.
    pub fn infix(&self) -> impl Iterator<Item = Key> + '_ {
        InOrder::new(self.root.as_deref())
    }

    /// Every key, each subtree root before its subtrees.
    pub fn prefix(&self) -> impl Iterator<Item = Key> + '_ {
        PreOrder::new(self.root.as_deref())
    }

    /// Every key, each subtree root after its subtrees.
    pub fn postfix(&self) -> impl Iterator<Item = Key> + '_ {
        PostOrder::new(self.root.as_deref())
    }

    /// The number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// How many levels are on the longest path from the root. The empty tree has a
    /// height of 0.
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(&Node, usize)> =
            self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }
        deepest
    }
}

impl Collection for Tree {
    fn insert(&mut self, key: Key) -> Result<()> {
        Tree::insert(self, key);
        Ok(())
    }

    fn find(&self, key: Key) -> bool {
        Tree::find(self, key)
    }

    fn remove(&mut self, key: Key) -> bool {
        Tree::remove(self, key)
    }

    fn traverse(&self) -> Box<dyn Iterator<Item = Key> + '_> {
        Box::new(self.infix())
    }

    fn len(&self) -> usize {
        self.len
    }
}

struct Node {
    key: Key,
    left: Link,
    right: Link,
}

impl BinaryNode for Node {
    fn key(&self) -> Key {
        self.key
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

impl Node {
    fn new_boxed(key: Key) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }

    /// Unlinks the leftmost node below `link` and returns its key. That node has no
    /// left child, so its right subtree takes its place.
    fn pop_min(mut link: &mut Link) -> Option<Key> {
        while link.as_ref().map_or(false, |n| n.left.is_some()) {
            if let Some(node) = link {
                link = &mut node.left;
            }
        }

        let mut min = link.take()?;
        *link = min.right.take();
        Some(min.key)
    }
}
