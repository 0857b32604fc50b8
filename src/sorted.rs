//! An array that's only sorted when asked. Inserting appends, so it's cheap until
//! [`SortedArray::sort`] runs a quicksort over the whole thing.
//!
//! # Examples
//!
//! ```
//! use keyset::sorted::SortedArray;
//!
//! let mut array = SortedArray::new();
//! for key in [3, 1, 2, 1] {
//!     array.insert(key);
//! }
//! assert_eq!(array.keys().collect::<Vec<_>>(), [3, 1, 2, 1]);
//!
//! array.sort();
//! assert_eq!(array.keys().collect::<Vec<_>>(), [1, 1, 2, 3]);
//! assert!(array.find(2));
//! ```

use log::{debug, trace};

use crate::{Collection, Key, Result};

/// A growable array of keys, duplicates allowed, sorted on demand.
#[derive(Clone, Debug)]
pub struct SortedArray {
    keys: Vec<Key>,
    sorted: bool,
}

impl Default for SortedArray {
    fn default() -> Self {
        Self::new()
    }
}

impl SortedArray {
    /// Generates a new, empty `SortedArray`.
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            sorted: true,
        }
    }

    /// Appends `key`. The array stays sorted only if `key` is no smaller than the last key.
    pub fn insert(&mut self, key: Key) {
        if let Some(&last) = self.keys.last() {
            self.sorted &= last <= key;
        }
        self.keys.push(key);
    }

    /// Whether the array contains `key`. Uses a binary search once sorted and a linear
    /// scan before that.
    pub fn find(&self, key: Key) -> bool {
        if self.sorted {
            self.keys.binary_search(&key).is_ok()
        } else {
            self.keys.contains(&key)
        }
    }

    /// Removes the first occurrence of `key`, shifting everything after it left.
    /// Returns whether a key was removed.
    pub fn remove(&mut self, key: Key) -> bool {
        match self.keys.iter().position(|&k| k == key) {
            Some(index) => {
                self.keys.remove(index);
                true
            }
            None => {
                debug!("{key} not in sorted array, nothing removed");
                false
            }
        }
    }

    /// Sorts the keys in place with [`quicksort`].
    pub fn sort(&mut self) {
        if self.sorted {
            return;
        }
        trace!("sorting {} keys", self.keys.len());
        quicksort(&mut self.keys);
        self.sorted = true;
    }

    /// Whether the keys are currently in ascending order.
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// Every key in storage order.
    pub fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.keys.iter().copied()
    }

    /// The number of keys in the array.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the array has no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl Collection for SortedArray {
    fn insert(&mut self, key: Key) -> Result<()> {
        SortedArray::insert(self, key);
        Ok(())
    }

    fn find(&self, key: Key) -> bool {
        SortedArray::find(self, key)
    }

    fn remove(&mut self, key: Key) -> bool {
        SortedArray::remove(self, key)
    }

    fn traverse(&self) -> Box<dyn Iterator<Item = Key> + '_> {
        Box::new(self.keys())
    }

    fn len(&self) -> usize {
        self.keys.len()
    }
}

/// Sorts `keys` in ascending order using quicksort with a Lomuto partition.
///
/// Only the smaller side of each partition is sorted recursively; the larger side is
/// handled by the loop, so the recursion is at most `lg N` deep even on sorted input.
///
/// # Examples
///
/// ```
/// let mut keys = [5, -1, 3, 3, 0];
/// keyset::sorted::quicksort(&mut keys);
/// assert_eq!(keys, [-1, 0, 3, 3, 5]);
/// ```
pub fn quicksort(mut keys: &mut [Key]) {
    while keys.len() > 1 {
        let pivot = partition(keys);
        let (lower, upper) = std::mem::take(&mut keys).split_at_mut(pivot);
        // `upper[0]` is the pivot, already in its final place.
        let upper = &mut upper[1..];
        if lower.len() < upper.len() {
            quicksort(lower);
            keys = upper;
        } else {
            quicksort(upper);
            keys = lower;
        }
    }
}

/// Uses the last key as the pivot and moves every key smaller than it to the front.
/// Returns the pivot's final index.
fn partition(keys: &mut [Key]) -> usize {
    let high = keys.len() - 1;
    let pivot = keys[high];

    let mut boundary = 0;
    for j in 0..high {
        if keys[j] < pivot {
            keys.swap(boundary, j);
            boundary += 1;
        }
    }
    keys.swap(boundary, high);
    boundary
}
