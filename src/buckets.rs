//! Separately chained bucket array shared by the map and set containers

use std::{iter::Flatten, mem, slice};

use tracing::{debug, trace};

use crate::{
    error::{BucketError, Result},
    utils::{exceeds_load_factor, hash_key, load_factor, normalize_capacity},
};

/// An item stored in a bucket, addressed by its text key
pub(crate) trait Keyed {
    /// The key the item is hashed and compared by
    fn key(&self) -> &str;
}

impl Keyed for String {
    fn key(&self) -> &str {
        self
    }
}

/// Borrowing iterator over every item, in bucket-index order then in-bucket order
pub(crate) type Items<'a, T> = Flatten<Flatten<slice::Iter<'a, Option<Vec<T>>>>>;

/// A bucket array with separate chaining.
///
/// Each slot is either absent (`None`) or an ordered chain of items whose keys all
/// hash to that slot for the current capacity. A chain emptied by removal is turned
/// back into `None`, so `Some` always holds at least one item.
#[derive(Debug, Clone)]
pub(crate) struct BucketArray<T> {
    /// The chains, one per bucket; the length is always a power of two
    buckets: Vec<Option<Vec<T>>>,
    /// Current number of items across all chains
    size: usize,
}

/// Allocates `capacity` absent buckets
fn empty_buckets<T>(capacity: usize) -> Vec<Option<Vec<T>>> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

impl<T: Keyed> BucketArray<T> {
    /// Creates a bucket array with at least `capacity` buckets
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self { buckets: empty_buckets(normalize_capacity(capacity)), size: 0 }
    }

    /// Number of buckets
    pub(crate) fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Number of stored items
    pub(crate) fn len(&self) -> usize {
        self.size
    }

    /// Current ratio of items to buckets
    pub(crate) fn load_factor(&self) -> f64 {
        load_factor(self.size, self.capacity())
    }

    /// Gets the chain `key` belongs to, if that bucket is present
    fn chain(&self, key: &str) -> Option<&Vec<T>> {
        self.buckets.get(hash_key(key, self.capacity()))?.as_ref()
    }

    /// Finds the item stored under `key`
    pub(crate) fn find(&self, key: &str) -> Option<&T> {
        self.chain(key)?.iter().find(|item| item.key() == key)
    }

    /// Finds the item stored under `key` for modification
    pub(crate) fn find_mut(&mut self, key: &str) -> Option<&mut T> {
        let index = hash_key(key, self.capacity());
        self.buckets.get_mut(index)?.as_mut()?.iter_mut().find(|item| item.key() == key)
    }

    /// Inserts `item`, or hands it to `merge` together with the stored item when the
    /// key is already present.
    ///
    /// Returns `true` when a new item was appended. Appending may grow the array.
    pub(crate) fn insert(&mut self, item: T, merge: impl FnOnce(&mut T, T)) -> Result<bool> {
        let capacity = self.capacity();
        let index = hash_key(item.key(), capacity);
        let chain = self
            .buckets
            .get_mut(index)
            .ok_or(BucketError::IndexOutOfBounds { index, capacity })?
            .get_or_insert_with(Vec::new);

        if let Some(existing) = chain.iter_mut().find(|stored| stored.key() == item.key()) {
            merge(existing, item);
            return Ok(false);
        }

        chain.push(item);
        self.size = self.size.saturating_add(1);

        if exceeds_load_factor(self.size, capacity) {
            self.resize();
        }

        Ok(true)
    }

    /// Removes and returns the item stored under `key`.
    ///
    /// The remaining items keep their relative order; a chain left empty becomes an
    /// absent bucket.
    pub(crate) fn remove(&mut self, key: &str) -> Option<T> {
        let index = hash_key(key, self.capacity());
        let slot = self.buckets.get_mut(index)?;
        let chain = slot.as_mut()?;
        let position = chain.iter().position(|item| item.key() == key)?;
        let removed = chain.remove(position);

        if chain.is_empty() {
            *slot = None;
        }
        self.size = self.size.saturating_sub(1);

        Some(removed)
    }

    /// Drops every item; the capacity is kept
    pub(crate) fn clear(&mut self) {
        for slot in &mut self.buckets {
            *slot = None;
        }
        trace!(capacity = self.capacity(), size = self.size, "cleared bucket array");
        self.size = 0;
    }

    /// Returns an iterator over the stored items
    pub(crate) fn iter(&self) -> Items<'_, T> {
        self.buckets.iter().flatten().flatten()
    }

    /// Doubles the number of buckets and rehomes every item against the new capacity
    fn resize(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = old_capacity.saturating_mul(2);
        let mut rehomed = empty_buckets(new_capacity);

        for item in mem::take(&mut self.buckets).into_iter().flatten().flatten() {
            let index = hash_key(item.key(), new_capacity);
            if let Some(slot) = rehomed.get_mut(index) {
                slot.get_or_insert_with(Vec::new).push(item);
            }
        }

        self.buckets = rehomed;
        debug!(old_capacity, new_capacity, size = self.size, "resized bucket array");
    }

    /// Checks the structural invariants: placement, no empty chains, unique keys and
    /// a size counter matching the stored items
    #[cfg(test)]
    pub(crate) fn is_consistent(&self) -> bool {
        let capacity = self.capacity();
        let mut seen = std::collections::HashSet::new();
        let placed = self.buckets.iter().enumerate().all(|(index, slot)| match slot {
            None => true,
            Some(chain) => {
                !chain.is_empty() &&
                    chain.iter().all(|item| {
                        hash_key(item.key(), capacity) == index && seen.insert(item.key())
                    })
            }
        });
        placed && capacity.is_power_of_two() && seen.len() == self.size
    }
}
