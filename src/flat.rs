//! A fixed-capacity array that's never sorted. Every lookup is a linear scan.
//!
//! # Examples
//!
//! ```
//! use keyset::{flat::FlatArray, Error};
//!
//! let mut array = FlatArray::with_capacity(2);
//! array.insert(7)?;
//! array.insert(3)?;
//!
//! assert_eq!(array.position(3), Some(1));
//! assert_eq!(array.get(0), Some(7));
//! assert_eq!(array.insert(5), Err(Error::CapacityExceeded { capacity: 2 }));
//! # Ok::<(), keyset::Error>(())
//! ```

use log::{debug, warn};

use crate::{Collection, Error, Key, Result};

/// An unsorted array of keys, duplicates allowed, that holds at most `capacity` keys.
#[derive(Clone, Debug)]
pub struct FlatArray {
    keys: Vec<Key>,
    capacity: usize,
}

impl FlatArray {
    /// Generates a new, empty `FlatArray` that can hold `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends `key` after the last stored key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] and stores nothing if the array is full.
    pub fn insert(&mut self, key: Key) -> Result<()> {
        if self.is_full() {
            warn!("flat array is full ({} keys), dropping {key}", self.capacity);
            return Err(Error::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.keys.push(key);
        Ok(())
    }

    /// Whether the array contains `key`.
    pub fn find(&self, key: Key) -> bool {
        self.position(key).is_some()
    }

    /// The index of the first occurrence of `key`.
    pub fn position(&self, key: Key) -> Option<usize> {
        self.keys.iter().position(|&k| k == key)
    }

    /// The key stored at `index`, if the array is that long.
    pub fn get(&self, index: usize) -> Option<Key> {
        self.keys.get(index).copied()
    }

    /// Removes the first occurrence of `key`, shifting everything after it left.
    /// Returns whether a key was removed.
    pub fn remove(&mut self, key: Key) -> bool {
        let Some(index) = self.position(key) else {
            debug!("{key} not in flat array, nothing removed");
            return false;
        };
        self.keys.remove(index);
        true
    }

    /// Every key in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.keys.iter().copied()
    }

    /// The number of keys in the array.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// The most keys the array can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the array has no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Whether another insert would fail.
    pub fn is_full(&self) -> bool {
        self.keys.len() >= self.capacity
    }
}

impl Collection for FlatArray {
    fn insert(&mut self, key: Key) -> Result<()> {
        FlatArray::insert(self, key)
    }

    fn find(&self, key: Key) -> bool {
        FlatArray::find(self, key)
    }

    fn remove(&mut self, key: Key) -> bool {
        FlatArray::remove(self, key)
    }

    fn traverse(&self) -> Box<dyn Iterator<Item = Key> + '_> {
        Box::new(self.keys())
    }

    fn len(&self) -> usize {
        self.keys.len()
    }
}
