//! Fixed-size batch splitting for ingestion requests.
//!
//! Splitting is pure and order-preserving: concatenating the output
//! batches reproduces the input exactly.

/// Batch size used when the caller does not configure one.
pub const DEFAULT_BATCH_SIZE: usize = 3;

/// Split `ids` into contiguous batches of at most `size` elements.
///
/// Batch `k` holds input elements `[k*size, k*size + size)`; only the
/// final batch may be short. Empty input yields no batches. `size` must
/// be positive (config validation guarantees this for callers).
pub fn split<T: Clone>(ids: &[T], size: usize) -> Vec<Vec<T>> {
    assert!(size > 0, "batch size must be positive");
    ids.chunks(size).map(|chunk| chunk.to_vec()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_five_ids_default_size() {
        let batches = split(&[1, 2, 3, 4, 5], DEFAULT_BATCH_SIZE);
        assert_eq!(batches, vec![vec![1, 2, 3], vec![4, 5]]);
    }

    #[test]
    fn test_split_exact_multiple() {
        let batches = split(&[1, 2, 3, 4, 5, 6], 3);
        assert_eq!(batches, vec![vec![1, 2, 3], vec![4, 5, 6]]);
    }

    #[test]
    fn test_split_empty_input_yields_no_batches() {
        let batches: Vec<Vec<i64>> = split(&[], 3);
        assert!(batches.is_empty());
    }

    #[test]
    fn test_split_size_one() {
        let batches = split(&[7, 8, 9], 1);
        assert_eq!(batches, vec![vec![7], vec![8], vec![9]]);
    }

    #[test]
    fn test_split_size_larger_than_input() {
        let batches = split(&[1, 2], 10);
        assert_eq!(batches, vec![vec![1, 2]]);
    }

    #[test]
    fn test_concatenation_reproduces_input() {
        let ids: Vec<i64> = (0..17).collect();
        for size in 1..=6 {
            let batches = split(&ids, size);
            let rejoined: Vec<i64> = batches.iter().flatten().copied().collect();
            assert_eq!(rejoined, ids, "size {}", size);

            // Every batch but the last is exactly `size`; the last is 1..=size.
            for batch in &batches[..batches.len() - 1] {
                assert_eq!(batch.len(), size);
            }
            let last = batches.last().unwrap().len();
            assert!(last >= 1 && last <= size);
        }
    }

    #[test]
    #[should_panic(expected = "batch size must be positive")]
    fn test_split_zero_size_panics() {
        split(&[1], 0);
    }
}
