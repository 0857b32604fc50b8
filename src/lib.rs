//! This crate exposes various choices for storing a set of keys so that
//! the cost of different indexing strategies can be compared.
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
//! Searching for keys in the tree takes `O(height)`. The [`unbalanced`] tree
//! makes no attempt to limit its height, so sorted input degrades it into a
//! list. The [`balanced`] tree keeps every node's subtrees within one level of
//! each other (the AVL discipline) which bounds the height to `O(lg N)`.
//!
//! ## Arrays
//!
//! For comparison there are two array-backed collections: [`sorted::SortedArray`]
//! appends keys and sorts them on demand with a quicksort, and
//! [`flat::FlatArray`] is a fixed-capacity array that is never sorted.
//!
//! All four implement [`Collection`] so they can be driven uniformly.
//!
//! # Examples
//!
//! ```
//! use keyset::{balanced, Collection};
//!
//! let mut tree = balanced::Tree::new();
//! for key in [10, 20, 30] {
//!     tree.insert(key);
//! }
//!
//! assert!(tree.find(20));
//! assert_eq!(tree.infix().collect::<Vec<_>>(), [10, 20, 30]);
//! assert_eq!(tree.prefix().collect::<Vec<_>>(), [20, 10, 30]);
//! assert_eq!(tree.traverse().count(), 3);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod balanced;
pub mod error;
pub mod flat;
pub mod sorted;
pub mod unbalanced;

mod traverse;


pub use error::{Error, Result};

/// The key type stored by every collection in this crate.
pub type Key = i32;

/// The contract shared by every collection: insert, find, remove, and traverse.
pub trait Collection {
    /// Stores `key`. Trees ignore keys they already hold; arrays keep duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] if the collection is bounded and full.
    fn insert(&mut self, key: Key) -> Result<()>;

    /// Whether `key` is stored.
    fn find(&self, key: Key) -> bool;

    /// Removes `key` if present, returning whether anything was removed.
    fn remove(&mut self, key: Key) -> bool;

    /// Every stored key. Trees yield ascending order, arrays storage order.
    fn traverse(&self) -> Box<dyn Iterator<Item = Key> + '_>;

    /// The number of stored keys.
    fn len(&self) -> usize;

    /// Whether no keys are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
