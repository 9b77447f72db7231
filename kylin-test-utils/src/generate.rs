//! Random byte-sequence generators for comparator and codec property tests.

use rand::Rng;

use crate::edge_biased_len;

/// A random byte vector of length `0..max_len`.
pub fn random_bytes<R: Rng>(rng: &mut R, max_len: usize) -> Vec<u8> {
    let len = edge_biased_len(rng, max_len);
    let mut out = vec![0u8; len];
    rng.fill(out.as_mut_slice());
    out
}

/// Two byte vectors that share a random-length common prefix and then
/// diverge (or stop), so comparisons exercise every word-width tail.
pub fn related_pair<R: Rng>(rng: &mut R, max_len: usize) -> (Vec<u8>, Vec<u8>) {
    let prefix = random_bytes(rng, max_len);
    let mut a = prefix.clone();
    let mut b = prefix;
    a.extend(random_bytes(rng, 4));
    b.extend(random_bytes(rng, 4));
    // Flip one shared byte now and then so the difference lands mid-word.
    if !a.is_empty() && rng.random_bool(0.25) {
        let i = rng.random_range(0..a.len());
        a[i] ^= 1u8 << rng.random_range(0..8u32);
    }
    (a, b)
}

/// A byte vector drawn only from `{0x00, 0x7F, 0x80, 0xFF}`, the values where
/// signed and unsigned byte handling disagree.
pub fn sign_edge_bytes<R: Rng>(rng: &mut R, max_len: usize) -> Vec<u8> {
    const EDGES: [u8; 4] = [0x00, 0x7F, 0x80, 0xFF];
    let len = edge_biased_len(rng, max_len);
    (0..len)
        .map(|_| EDGES[rng.random_range(0..EDGES.len())])
        .collect()
}
