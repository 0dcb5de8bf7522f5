//! Sequence type - an ordered, growable list of values
//!
//! `Sequence<T>` is a thin layer over `Vec<T>` with the growth policy and
//! editing operations the shape editor needs:
//! - capacity starts at [`Sequence::DEFAULT_CAPACITY`] and doubles when full
//! - insert/remove keep the relative order of the remaining elements
//! - indexing outside `0..len()` panics
//!
//! It dereferences to a slice, so iteration and read-only slice methods are
//! available directly.

use std::ops::{Deref, DerefMut};

use serde::Serialize;

use super::Point;

/// The outline and frame type
pub type PointSequence = Sequence<Point>;

/// An ordered, index-addressable, growable container
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Sequence<T> {
    items: Vec<T>,
}

impl<T> Sequence<T> {
    /// Capacity of a freshly created sequence
    pub const DEFAULT_CAPACITY: usize = 16;

    /// Create an empty sequence with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create an empty sequence able to hold `capacity` items without growing
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Number of stored items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the sequence holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items that fit before the next reallocation
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Append an item
    pub fn add(&mut self, item: T) {
        self.ensure_space(self.items.len() + 1);
        self.items.push(item);
    }

    /// Insert an item at `index`, shifting later items right
    ///
    /// # Panics
    /// Panics if `index > len()`
    pub fn insert(&mut self, item: T, index: usize) {
        assert!(
            index <= self.items.len(),
            "insert index {} out of range for sequence of length {}",
            index,
            self.items.len()
        );
        self.ensure_space(self.items.len() + 1);
        self.items.insert(index, item);
    }

    /// Remove and return the item at `index`, shifting later items left
    ///
    /// # Panics
    /// Panics if `index >= len()`
    pub fn remove_at(&mut self, index: usize) -> T {
        assert!(
            index < self.items.len(),
            "remove index {} out of range for sequence of length {}",
            index,
            self.items.len()
        );
        self.items.remove(index)
    }

    /// Remove all items, keeping the allocation
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Borrow the items as a slice
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Borrow the items as a mutable slice
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// Consume the sequence and return the underlying vector
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Grow by doubling until `new_len` items fit
    fn ensure_space(&mut self, new_len: usize) {
        let capacity = self.items.capacity();
        if new_len <= capacity {
            return;
        }

        let target = (capacity * 2).max(new_len);
        self.items.reserve_exact(target - self.items.len());
    }
}

impl<T: Clone> Sequence<T> {
    /// Create a sequence holding a copy of `items`
    pub fn from_slice(items: &[T]) -> Self {
        Self {
            items: items.to_vec(),
        }
    }

    /// Append copies of every item in `items`
    pub fn add_all(&mut self, items: &[T]) {
        self.ensure_space(self.items.len() + items.len());
        self.items.extend_from_slice(items);
    }
}

impl<T: PartialEq> Sequence<T> {
    /// Check if an equal item is stored
    pub fn contains(&self, item: &T) -> bool {
        self.items.iter().any(|x| x == item)
    }

    /// Remove the first item equal to `item`
    ///
    /// Returns `true` if something was removed.
    pub fn remove_item(&mut self, item: &T) -> bool {
        match self.items.iter().position(|x| x == item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for Sequence<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> DerefMut for Sequence<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.items
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Sequence<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
