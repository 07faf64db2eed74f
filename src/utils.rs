//! Hashing and growth-policy helpers shared by `HashedMap` and `HashedSet`

/// Number of buckets a freshly created container starts with
pub const INITIAL_CAPACITY: usize = 16;

/// Threshold for load factor before resizing - stored as percentage (0-100)
pub const LOAD_FACTOR_PERCENT: usize = 70;

/// Multiplier of the polynomial rolling hash
const PRIME: usize = 31;

/// Computes the bucket index of `key` for a bucket array of `capacity` buckets.
///
/// This is a polynomial rolling hash over the key's characters, reduced modulo
/// `capacity` after every step. The reduction uses the capacity passed in, so the
/// same key generally lands in a different bucket once the array has grown.
///
/// The empty key always hashes to `0`, as does any key when `capacity` is `0`.
///
/// ```rust
/// use chained_buckets::hash_key;
///
/// assert_eq!(hash_key("", 16), 0);
/// assert_eq!(hash_key("key1", 16), 2);
/// assert!(hash_key("key1", 32) < 32);
/// ```
#[must_use]
pub fn hash_key(key: &str, capacity: usize) -> usize {
    key.chars().fold(0, |acc: usize, ch| {
        acc.wrapping_mul(PRIME).wrapping_add(ch as usize).checked_rem(capacity).unwrap_or(0)
    })
}

/// Rounds a requested bucket count up to a valid capacity
pub(crate) fn normalize_capacity(requested: usize) -> usize {
    requested.max(INITIAL_CAPACITY).next_power_of_two()
}

/// Returns true when `size / capacity` is strictly above the load factor threshold
pub(crate) fn exceeds_load_factor(size: usize, capacity: usize) -> bool {
    size.saturating_mul(100) > capacity.saturating_mul(LOAD_FACTOR_PERCENT)
}

/// Ratio of stored entries to buckets
#[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
pub(crate) fn load_factor(size: usize, capacity: usize) -> f64 {
    if capacity == 0 {
        return 0.0;
    }
    size as f64 / capacity as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_key_hashes_to_zero() {
        assert_eq!(hash_key("", 16), 0);
        assert_eq!(hash_key("", 1024), 0);
    }

    #[test]
    fn test_hash_matches_rolling_formula() {
        // k=107, e=101, y=121, '1'=49 reduced mod 16 at every step: 11, 10, 15, 2
        assert_eq!(hash_key("key1", 16), 2);
        assert_eq!(hash_key("key2", 16), 3);
        assert_eq!(hash_key("key3", 16), 4);
        assert_eq!(hash_key("a", 16), 97 % 16);
        assert_eq!(hash_key("ab", 64), (31 * (97 % 64) + 98) % 64);
    }

    #[test]
    fn test_hash_depends_on_capacity() {
        let small = hash_key("resize-me", 16);
        let large = hash_key("resize-me", 32);
        assert!(small < 16);
        assert!(large < 32);
        assert_eq!(large % 16, small);
    }

    #[test]
    fn test_hash_uses_scalar_values() {
        assert_eq!(hash_key("é", 1024), 'é' as usize % 1024);
        assert!(hash_key("日本語", 16) < 16);
    }

    #[test]
    fn test_zero_capacity() {
        assert_eq!(hash_key("anything", 0), 0);
        assert!(load_factor(3, 0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_normalize_capacity() {
        assert_eq!(normalize_capacity(0), 16);
        assert_eq!(normalize_capacity(16), 16);
        assert_eq!(normalize_capacity(17), 32);
        assert_eq!(normalize_capacity(100), 128);
    }

    #[test]
    fn test_exceeds_load_factor() {
        assert!(!exceeds_load_factor(11, 16));
        assert!(exceeds_load_factor(12, 16));
        assert!(!exceeds_load_factor(22, 32));
        assert!(exceeds_load_factor(23, 32));
    }
}
