//! Swap-or-not shuffling.

use alloy_primitives::B256;
use sha2::{Digest, Sha256};

/// SHA-256 over the concatenation of `parts`.
pub(crate) fn hash(parts: &[&[u8]]) -> B256 {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    B256::from_slice(&hasher.finalize())
}

/// Position of `index` after shuffling `0..index_count` with `seed` over `rounds` rounds.
///
/// Returns [None] if `index` is out of range.
pub fn compute_shuffled_index(
    index: usize,
    index_count: usize,
    seed: B256,
    rounds: u8,
) -> Option<usize> {
    if index >= index_count {
        return None;
    }
    let count = u64::try_from(index_count).ok()?;
    let mut index = u64::try_from(index).ok()?;

    for round in 0..rounds {
        let pivot_hash = hash(&[seed.as_slice(), &[round]]);
        let mut pivot_bytes = [0u8; 8];
        pivot_bytes.copy_from_slice(&pivot_hash[..8]);
        let pivot = u64::from_le_bytes(pivot_bytes) % count;

        let flip = (pivot + count - index) % count;
        let position = index.max(flip);
        let chunk = u32::try_from(position / 256).ok()?;
        let source = hash(&[seed.as_slice(), &[round], &chunk.to_le_bytes()]);
        let byte = source[((position % 256) / 8) as usize];
        if (byte >> (position % 8)) & 1 == 1 {
            index = flip;
        }
    }
    usize::try_from(index).ok()
}
