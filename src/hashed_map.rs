use crate::{
    buckets::{BucketArray, Items, Keyed},
    error::Result,
    utils::INITIAL_CAPACITY,
};

/// A key-value pair stored in a bucket chain
#[derive(Debug, Clone)]
struct Entry<V> {
    /// The key in the key-value pair
    key: String,
    /// The value associated with the key
    value: V,
}

impl<V> Keyed for Entry<V> {
    fn key(&self) -> &str {
        &self.key
    }
}

/// A text-keyed hash map using separate chaining.
///
/// Entries live in the bucket their key hashes to for the current capacity. Once
/// more than 70% of the buckets' worth of entries are stored, the bucket array
/// doubles and every entry is rehashed. The capacity never shrinks.
///
/// Note: This implementation is not thread-safe; wrap it in a lock to share it.
#[derive(Debug, Clone)]
pub struct HashedMap<V> {
    /// The bucket chains storing the key-value pairs
    buckets: BucketArray<Entry<V>>,
}

impl<V> Default for HashedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> HashedMap<V> {
    /// Creates an empty `HashedMap` with 16 buckets
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Creates an empty `HashedMap` with at least `capacity` buckets.
    ///
    /// The bucket count is rounded up to a power of two and is never below 16.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { buckets: BucketArray::with_capacity(capacity) }
    }

    /// Builds a map from key-value pairs; later pairs overwrite earlier ones
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::IndexOutOfBounds`](crate::BucketError::IndexOutOfBounds)
    /// if a key hashes outside the bucket array.
    pub fn from_entries<K, I>(entries: I) -> Result<Self>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map = Self::new();
        for (key, value) in entries {
            map.set(key, value)?;
        }
        Ok(map)
    }

    /// Associates `value` with `key`, overwriting the value of an existing key.
    ///
    /// Adding a new key may grow and rehash the bucket array before returning.
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::IndexOutOfBounds`](crate::BucketError::IndexOutOfBounds)
    /// if the key hashes outside the bucket array. The map is left untouched.
    pub fn set(&mut self, key: impl Into<String>, value: V) -> Result<()> {
        let entry = Entry { key: key.into(), value };
        self.buckets.insert(entry, |existing, incoming| existing.value = incoming.value)?;
        Ok(())
    }

    /// Retrieve the value for a given key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.buckets.find(key).map(|entry| &entry.value)
    }

    /// Get a mutable reference to the value for a given key
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.buckets.find_mut(key).map(|entry| &mut entry.value)
    }

    /// Returns true if the map contains the given key
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.buckets.find(key).is_some()
    }

    /// Removes a key from the map, returning whether it was present
    pub fn remove(&mut self, key: &str) -> bool {
        self.take(key).is_some()
    }

    /// Removes a key from the map, returning its value if it was present
    pub fn take(&mut self, key: &str) -> Option<V> {
        self.buckets.remove(key).map(|entry| entry.value)
    }

    /// Returns the number of entries in the map
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Returns true if the map is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the map, removing all key-value pairs. The capacity is kept.
    pub fn clear(&mut self) {
        self.buckets.clear();
    }

    /// Returns the number of buckets in the map
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.capacity()
    }

    /// Returns the current load factor of the map
    #[must_use]
    pub fn load_factor(&self) -> f64 {
        self.buckets.load_factor()
    }

    /// Returns an iterator over the key-value pairs in bucket order
    #[must_use]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter { inner: self.buckets.iter() }
    }

    /// Returns the keys in bucket order
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.iter().map(|(key, _)| key.to_owned()).collect()
    }
}

impl<V: Clone> HashedMap<V> {
    /// Returns the values in bucket order
    #[must_use]
    pub fn values(&self) -> Vec<V> {
        self.iter().map(|(_, value)| value.clone()).collect()
    }

    /// Returns the key-value pairs in bucket order
    #[must_use]
    pub fn entries(&self) -> Vec<(String, V)> {
        self.iter().map(|(key, value)| (key.to_owned(), value.clone())).collect()
    }
}

/// Iterator over the key-value pairs of a [`HashedMap`]
#[derive(Debug, Clone)]
pub struct Iter<'a, V> {
    /// Entries of the underlying bucket array
    inner: Items<'a, Entry<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| (entry.key.as_str(), &entry.value))
    }
}

impl<'a, V> IntoIterator for &'a HashedMap<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
