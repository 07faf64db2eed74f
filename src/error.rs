//! Error type for operations that can observe a broken bucket array

use thiserror::Error;

/// Invalid-state errors raised by inserting operations.
///
/// These signal a bug in hashing or capacity bookkeeping, never a problem with the
/// caller's input. Absence of a key is not an error and is reported through
/// `Option`/`bool` results instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BucketError {
    /// The hash produced an index outside the bucket array
    #[error("bucket index {index} is out of bounds for capacity {capacity}")]
    IndexOutOfBounds {
        /// Index produced by the hash function
        index: usize,
        /// Number of buckets at the time of the call
        capacity: usize,
    },
}

/// Result alias used by the fallible container operations
pub type Result<T> = std::result::Result<T, BucketError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = BucketError::IndexOutOfBounds { index: 40, capacity: 32 };
        assert_eq!(err.to_string(), "bucket index 40 is out of bounds for capacity 32");
    }
}
