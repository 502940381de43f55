//! The Merkleizer.
//!
//! Folds a sequence of leaves into a single 32-byte root. The tree shape is
//! a function of the leaf count alone: leaves are right-padded with zero
//! chunks to the next power of two and adjacent pairs are hashed level by
//! level. Cross-implementation root agreement depends on exactly this
//! pairing, so there is no rebalancing and no content-dependent layout.

use crate::chunk::Chunk;
use crate::hasher::Hasher;

/// Whether `n` is a power of two. Zero is not; one (2^0) is.
pub fn is_power_of_two(n: usize) -> bool {
    n != 0 && n & (n - 1) == 0
}

/// The smallest power of two >= `n` (1 for n <= 1).
pub fn next_power_of_two(n: usize) -> usize {
    n.max(1).next_power_of_two()
}

/// Compute the Merkle root of a leaf sequence.
///
/// A single leaf is its own root, verbatim and unhashed. Longer sequences
/// are zero-padded to a power of two and folded pairwise with
/// `H(left || right)`. An empty sequence yields the zero chunk; callers
/// normally guarantee at least one leaf via the packer's empty-input rule.
pub fn merkleize<H: Hasher>(chunks: &[Chunk], hasher: &H) -> Chunk {
    match chunks.len() {
        0 => return Chunk::ZERO,
        1 => return chunks[0],
        _ => {}
    }

    let mut level = chunks.to_vec();
    level.resize(next_power_of_two(level.len()), Chunk::ZERO);

    while level.len() > 1 {
        level = level
            .chunks(2)
            .map(|pair| hasher.hash_pair(&pair[0], &pair[1]))
            .collect();
    }
    level[0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hasher::Sha256Hasher;

    #[test]
    fn test_is_power_of_two_boundaries() {
        let cases = [
            (0usize, false),
            (1, true),
            (2, true),
            (4, true),
            (5, false),
            (256, true),
            (1024, true),
            (1_000_000, false),
        ];
        for (input, expected) in cases {
            assert_eq!(is_power_of_two(input), expected, "input {input}");
        }
    }

    #[test]
    fn test_next_power_of_two() {
        assert_eq!(next_power_of_two(0), 1);
        assert_eq!(next_power_of_two(1), 1);
        assert_eq!(next_power_of_two(2), 2);
        assert_eq!(next_power_of_two(3), 4);
        assert_eq!(next_power_of_two(5), 8);
        assert_eq!(next_power_of_two(1000), 1024);
    }

    #[test]
    fn test_merkleize_single_chunk_is_identity() {
        let chunk = Chunk::from_bytes([0x42; 32]);
        assert_eq!(merkleize(&[chunk], &Sha256Hasher), chunk);
        // No hashing happens: even a chunk the hasher would map elsewhere
        // comes back verbatim.
        assert_eq!(merkleize(&[Chunk::ZERO], &Sha256Hasher), Chunk::ZERO);
    }

    #[test]
    fn test_merkleize_two_chunks_hashes_concatenation() {
        let hasher = Sha256Hasher;
        let a = Chunk::from_bytes([1; 32]);
        let b = Chunk::from_bytes([2; 32]);
        assert_eq!(merkleize(&[a, b], &hasher), hasher.hash_pair(&a, &b));
    }

    #[test]
    fn test_merkleize_three_chunks_pads_to_four() {
        let hasher = Sha256Hasher;
        let c = Chunk::from_bytes([7; 32]);
        let three = merkleize(&[c, c, c], &hasher);
        let four_padded = merkleize(&[c, c, c, Chunk::ZERO], &hasher);
        assert_eq!(three, four_padded);

        // Explicit three-layer construction.
        let left = hasher.hash_pair(&c, &c);
        let right = hasher.hash_pair(&c, &Chunk::ZERO);
        assert_eq!(three, hasher.hash_pair(&left, &right));
    }

    #[test]
    fn test_merkleize_four_identical_chunks() {
        let hasher = Sha256Hasher;
        let c = Chunk::from_bytes([7; 32]);
        let second_layer = hasher.hash_pair(&c, &c);
        let expected = hasher.hash_pair(&second_layer, &second_layer);
        assert_eq!(merkleize(&[c, c, c, c], &hasher), expected);
    }

    #[test]
    fn test_merkleize_all_zero_chunks() {
        // Mirrors hashing raw zero bytes level by level.
        let hasher = Sha256Hasher;
        let second = hasher.hash(&[0u8; 64]);
        let third = {
            let mut buf = Vec::new();
            buf.extend_from_slice(second.as_bytes());
            buf.extend_from_slice(second.as_bytes());
            hasher.hash(&buf)
        };
        assert_eq!(merkleize(&[Chunk::ZERO, Chunk::ZERO], &hasher), second);
        assert_eq!(
            merkleize(&[Chunk::ZERO; 4], &hasher),
            third
        );
        assert_eq!(
            merkleize(&[Chunk::ZERO; 3], &hasher),
            third
        );
    }

    #[test]
    fn test_merkleize_empty_is_zero_chunk() {
        assert_eq!(merkleize(&[], &Sha256Hasher), Chunk::ZERO);
    }

    #[test]
    fn test_merkleize_deterministic_and_order_sensitive() {
        let hasher = Sha256Hasher;
        let leaves: Vec<Chunk> = (0..8u8).map(|i| Chunk::from_bytes([i; 32])).collect();
        let root1 = merkleize(&leaves, &hasher);
        let root2 = merkleize(&leaves, &hasher);
        assert_eq!(root1, root2);

        let mut swapped = leaves.clone();
        swapped.swap(0, 7);
        assert_ne!(merkleize(&swapped, &hasher), root1);
    }
}
