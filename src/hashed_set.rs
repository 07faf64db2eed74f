use crate::{
    buckets::{BucketArray, Items},
    error::Result,
    utils::INITIAL_CAPACITY,
};

/// A hash set of text keys using separate chaining.
///
/// Shares its hashing, bucket layout and growth policy with
/// [`HashedMap`](crate::HashedMap); the chains hold bare keys.
#[derive(Debug, Clone)]
pub struct HashedSet {
    /// The bucket chains storing the keys
    buckets: BucketArray<String>,
}

impl Default for HashedSet {
    fn default() -> Self {
        Self::new()
    }
}

impl HashedSet {
    /// Creates an empty `HashedSet` with 16 buckets
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Creates an empty `HashedSet` with at least `capacity` buckets.
    ///
    /// The bucket count is rounded up to a power of two and is never below 16.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { buckets: BucketArray::with_capacity(capacity) }
    }

    /// Builds a set from keys; duplicates are stored once
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::IndexOutOfBounds`](crate::BucketError::IndexOutOfBounds)
    /// if a key hashes outside the bucket array.
    pub fn from_keys<K, I>(keys: I) -> Result<Self>
    where
        K: Into<String>,
        I: IntoIterator<Item = K>,
    {
        let mut set = Self::new();
        for key in keys {
            set.add(key)?;
        }
        Ok(set)
    }

    /// Adds `key` unless it is already present.
    ///
    /// Adding a new key may grow and rehash the bucket array before returning.
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::IndexOutOfBounds`](crate::BucketError::IndexOutOfBounds)
    /// if the key hashes outside the bucket array. The set is left untouched.
    pub fn add(&mut self, key: impl Into<String>) -> Result<()> {
        self.buckets.insert(key.into(), |_, _| {})?;
        Ok(())
    }

    /// Returns true if the set contains `key`
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.buckets.find(key).is_some()
    }

    /// Removes `key`, returning whether it was present
    pub fn remove(&mut self, key: &str) -> bool {
        self.buckets.remove(key).is_some()
    }

    /// Returns the number of keys in the set
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Returns true if the set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every key. The capacity is kept.
    pub fn clear(&mut self) {
        self.buckets.clear();
    }

    /// Returns the number of buckets in the set
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.capacity()
    }

    /// Returns the current load factor of the set
    #[must_use]
    pub fn load_factor(&self) -> f64 {
        self.buckets.load_factor()
    }

    /// Returns an iterator over the keys in bucket order
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter { inner: self.buckets.iter() }
    }

    /// Returns the keys in bucket order
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.iter().map(str::to_owned).collect()
    }
}

/// Iterator over the keys of a [`HashedSet`]
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    /// Keys of the underlying bucket array
    inner: Items<'a, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a HashedSet {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_has() -> Result<()> {
        let mut set = HashedSet::new();
        set.add("key1")?;
        set.add("key2")?;

        assert!(set.has("key1"));
        assert!(set.has("key2"));
        assert!(!set.has("key3"));
        assert_eq!(set.len(), 2);
        Ok(())
    }

    #[test]
    fn test_add_is_deduplicated() -> Result<()> {
        let mut set = HashedSet::new();
        set.add("key1")?;
        set.add(String::from("key1"))?;
        assert_eq!(set.len(), 1);
        assert_eq!(set.keys(), vec!["key1"]);
        Ok(())
    }

    #[test]
    fn test_empty_key() -> Result<()> {
        let mut set = HashedSet::new();
        set.add("")?;
        assert!(set.has(""));
        assert!(set.remove(""));
        assert!(set.is_empty());
        Ok(())
    }

    #[test]
    fn test_remove() -> Result<()> {
        let mut set = HashedSet::new();
        set.add("a")?;
        set.add("q")?;

        assert!(set.remove("a"));
        assert!(!set.remove("a"));
        assert!(set.has("q"));
        assert_eq!(set.len(), 1);
        assert!(set.buckets.is_consistent());
        Ok(())
    }

    #[test]
    fn test_resize() -> Result<()> {
        let mut set = HashedSet::new();
        for i in 0..23 {
            set.add(format!("member-{i}"))?;
        }
        assert_eq!(set.capacity(), 64);
        assert!((0..23).all(|i| set.has(&format!("member-{i}"))));
        assert!(set.buckets.is_consistent());
        Ok(())
    }

    #[test]
    fn test_clear() -> Result<()> {
        let mut set = HashedSet::from_keys(["x", "y", "z"])?;
        assert_eq!(set.len(), 3);

        set.clear();

        assert!(set.is_empty());
        assert!(!set.has("x"));
        assert!(set.keys().is_empty());
        assert_eq!(set.capacity(), 16);
        Ok(())
    }

    #[test]
    fn test_iter_matches_keys() -> Result<()> {
        let set = HashedSet::from_keys(["key1", "key2", "key3"])?;
        let iterated: Vec<&str> = set.iter().collect();
        assert_eq!(iterated, vec!["key1", "key2", "key3"]);
        assert_eq!(set.keys(), iterated);
        assert_eq!(IntoIterator::into_iter(&set).count(), 3);
        Ok(())
    }

    #[test]
    fn test_with_capacity() {
        let set = HashedSet::with_capacity(100);
        assert_eq!(set.capacity(), 128);
        assert!(set.load_factor().abs() < f64::EPSILON);
    }
}
