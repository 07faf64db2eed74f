//! # Chained Buckets
//!
//! A Rust implementation of a hash map and a hash set built on separately chained
//! buckets with text keys.
//!
//! This crate provides two containers:
//!
//! - `HashedMap`: a key-value map with unique `String` keys
//! - `HashedSet`: a set of unique `String` keys
//!
//! Both use the same polynomial rolling hash ([`hash_key`]), start with 16 buckets and
//! double the bucket array once the load factor goes above 0.7, rehashing every entry
//! against the new capacity. The capacity never shrinks.
//!
//! ## Basic Usage
//!
//! ```rust
//! use chained_buckets::{BucketError, HashedMap};
//!
//! # fn main() -> Result<(), BucketError> {
//! // Create a new hash map
//! let mut map = HashedMap::new();
//!
//! // Insert values
//! map.set("apple", 1)?;
//! map.set("banana", 2)?;
//!
//! // Retrieve values
//! assert_eq!(map.get("apple"), Some(&1));
//!
//! // Update values
//! map.set("apple", 10)?;
//! assert_eq!(map.get("apple"), Some(&10));
//!
//! // Remove values
//! assert!(map.remove("apple"));
//! assert_eq!(map.get("apple"), None);
//! # Ok(())
//! # }
//! ```
//!
//! ## Sets
//!
//! ```rust
//! use chained_buckets::{BucketError, HashedSet};
//!
//! # fn main() -> Result<(), BucketError> {
//! let mut set = HashedSet::new();
//! set.add("alpha")?;
//! set.add("alpha")?;
//!
//! assert_eq!(set.len(), 1);
//! assert!(set.has("alpha"));
//! # Ok(())
//! # }
//! ```
//!
//! Neither container is thread-safe. Callers sharing one across threads must
//! serialize access themselves, e.g. behind a `Mutex`.

/// Bucket array storage shared by both containers
mod buckets;
/// Error type for invalid bucket array states
mod error;
/// Module implementing the text-keyed hash map
mod hashed_map;
/// Module implementing the text-keyed hash set
mod hashed_set;
/// Hash function and growth policy constants
mod utils;

pub use error::{BucketError, Result};
pub use hashed_map::{HashedMap, Iter as MapIter};
pub use hashed_set::{HashedSet, Iter as SetIter};
pub use utils::{INITIAL_CAPACITY, LOAD_FACTOR_PERCENT, hash_key};
