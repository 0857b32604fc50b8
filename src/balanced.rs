//! A self-balancing BST (specifically, an AVL tree). Every node owns its
//! children outright, and every mutation consumes the subtree it descends
//! into and hands back the (possibly rotated) replacement, so a node is never
//! reachable from two places at once.
//!
//! # Examples
//!
//! ```
//! use keyset::balanced::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.find(1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.find(1));
//!
//! // Inserting the same key again changes nothing.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! assert!(tree.remove(1));
//! assert!(!tree.find(1));
//! ```

use std::cmp::Ordering;

use log::trace;

use crate::traverse::{BinaryNode, InOrder, PostOrder, PreOrder};
use crate::{Collection, Key, Result};

type Link = Option<Box<Node>>;

/// A height-balanced Binary Search Tree of unique keys.
#[derive(Clone, Debug, Default)]
pub struct Tree {
    root: Link,
    len: usize,
}

impl Tree {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Whether the tree contains `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyset::balanced::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.find(1));
    /// assert!(!tree.find(42));
    /// ```
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

    /// Inserts `key` into the tree, rebalancing every ancestor of the new leaf.
    /// Returns `false` and leaves the tree untouched if `key` was already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyset::balanced::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [30, 20, 10] {
    ///     tree.insert(key);
    /// }
    ///
    /// // Inserting in descending order rotated 20 up to the root.
    /// assert_eq!(tree.prefix().collect::<Vec<_>>(), [20, 10, 30]);
    /// ```
    pub fn insert(&mut self, key: Key) -> bool {
        let (root, inserted) = Node::insert(self.root.take(), key);
        self.root = Some(root);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes `key` from the tree if it's there, rebalancing every ancestor of the
    /// node that was unlinked. Returns whether a key was removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyset::balanced::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.remove(1));
    /// assert!(!tree.remove(1));
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove(&mut self, key: Key) -> bool {
        let (root, removed) = Node::remove(self.root.take(), key);
        self.root = root;
        if removed {
            self.len -= 1;
        }
        removed
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

    /// How many levels are in the tree. The empty tree has a height of 0.
    pub fn height(&self) -> usize {
        height(&self.root)
    }

    /// Panics unless every node is ordered, has a correct height, and is balanced.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        fn check(node: &Node) -> usize {
            let left_height = node.left.as_deref().map_or(0, check);
            let right_height = node.right.as_deref().map_or(0, check);

            if let Some(left) = node.left.as_deref() {
                assert!(left.key < node.key);
            }
            if let Some(right) = node.right.as_deref() {
                assert!(right.key > node.key);
            }
            assert_eq!(node.height, left_height.max(right_height) + 1);
            assert!(left_height.abs_diff(right_height) <= 1);

            node.height
        }

        if let Some(root) = self.root.as_deref() {
            check(root);
        }

        let keys: Vec<_> = self.infix().collect();
        assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(keys.len(), self.len);
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

/// Gets the height of a possibly empty subtree.
fn height(link: &Link) -> usize {
    link.as_ref().map_or(0, |n| n.height)
}

#[derive(Clone, Debug)]
struct Node {
    key: Key,
    left: Link,
    right: Link,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    height: usize,
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
            height: 1,
        })
    }

    /// Inserts `key` below `link` and returns the new subtree root along with
    /// whether a node was created.
    fn insert(link: Link, key: Key) -> (Box<Self>, bool) {
        let Some(mut node) = link else {
            return (Self::new_boxed(key), true);
        };

        let inserted = match key.cmp(&node.key) {
            Ordering::Less => {
                let (left, inserted) = Self::insert(node.left.take(), key);
                node.left = Some(left);
                inserted
            }
            Ordering::Equal => false,
            Ordering::Greater => {
                let (right, inserted) = Self::insert(node.right.take(), key);
                node.right = Some(right);
                inserted
            }
        };

        if inserted {
            (node.balance(), true)
        } else {
            (node, false)
        }
    }

    /// Removes `key` from below `link` and returns what's left of the subtree
    /// along with whether a node was unlinked.
    fn remove(link: Link, key: Key) -> (Link, bool) {
        let Some(mut node) = link else {
            return (None, false);
        };

        let removed = match key.cmp(&node.key) {
            Ordering::Less => {
                let (left, removed) = Self::remove(node.left.take(), key);
                node.left = left;
                removed
            }
            Ordering::Greater => {
                let (right, removed) = Self::remove(node.right.take(), key);
                node.right = right;
                removed
            }
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                (None, None) => return (None, true),
                // The remaining child is already a balanced subtree with a correct height.
                (Some(child), None) | (None, Some(child)) => return (Some(child), true),
                (Some(left), Some(right)) => {
                    // Take over the in-order successor's key and unlink the successor, which
                    // has no left child so the recursion ends in one of the cases above.
                    let successor = right.min_key();
                    let (right, _) = Self::remove(Some(right), successor);
                    node.key = successor;
                    node.left = Some(left);
                    node.right = right;
                    true
                }
            },
        };

        if removed {
            (Some(node.balance()), true)
        } else {
            (Some(node), false)
        }
    }

    /// The smallest key in this subtree.
    fn min_key(&self) -> Key {
        let mut current = self;
        while let Some(left) = current.left.as_deref() {
            current = left;
        }
        current.key
    }

    /// Adjusts the height of `self` to be the max of its children's heights + 1.
    fn fix_height(&mut self) {
        self.height = height(&self.left).max(height(&self.right)) + 1;
    }

    /// The height of the left subtree minus the height of the right subtree.
    fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }

    /// Recomputes this node's height and, if its subtrees differ in height by two,
    /// rotates to restore balance. Returns the root of the rebalanced subtree.
    ///
    /// The rotation is chosen by the heavy child's balance factor. A heavy child that
    /// is itself balanced only happens after a removal, and it gets a single rotation;
    /// a double rotation there would leave the new root unbalanced.
    ///
    /// See https://en.wikipedia.org/wiki/AVL_tree#Rebalancing for terminology.
    fn balance(mut self: Box<Self>) -> Box<Self> {
        self.fix_height();

        let balanced = match self.balance_factor() {
            n if n > 1 => {
                if self.left.as_ref().map_or(0, |l| l.balance_factor()) < 0 {
                    self.left = self.left.take().map(Self::rotate_left);
                }
                self.rotate_right()
            }
            n if n < -1 => {
                if self.right.as_ref().map_or(0, |r| r.balance_factor()) > 0 {
                    self.right = self.right.take().map(Self::rotate_right);
                }
                self.rotate_left()
            }
            _ => self,
        };

        if cfg!(debug_assertions) {
            let left_height = height(&balanced.left);
            let right_height = height(&balanced.right);
            assert_eq!(balanced.height, left_height.max(right_height) + 1);
            assert!(left_height.abs_diff(right_height) <= 1);
        }
        balanced
    }

    /// Rotate self to the right. This moves the left child up vertically and self down
    /// vertically. Without a left child there is nothing to rotate and self is returned.
    ///
    /// ```text
    ///      old_root               new_root
    ///       /    \                 /    \
    ///   new_root  z   rotate ->   x   old_root
    ///    /  \                          /  \
    ///   x    y                        y    z
    /// ```
    fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        let Some(mut new_root) = self.left.take() else {
            return self;
        };
        trace!("rotating right at {}", self.key);

        self.left = new_root.right.take();
        self.fix_height();

        new_root.right = Some(self);
        new_root.fix_height();
        new_root
    }

    /// Rotate self to the left, the mirror image of [`Node::rotate_right`].
    fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        let Some(mut new_root) = self.right.take() else {
            return self;
        };
        trace!("rotating left at {}", self.key);

        self.right = new_root.left.take();
        self.fix_height();

        new_root.left = Some(self);
        new_root.fix_height();
        new_root
    }
}
