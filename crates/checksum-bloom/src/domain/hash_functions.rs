//! Hash family for the Bloom filter
//!
//! Every element yields `k` signed 32-bit hash codes:
//!
//! | Index | Source |
//! |-------|--------|
//! | `h[0]` | FNV-1a 32 over the element bytes |
//! | `h[1]` | CRC-32 (IEEE) of the element bytes |
//! | `h[2]` | Adler-32 of the element bytes |
//! | `h[i]`, `i >= 3` | `h[i-1] * 31 + h[0]`, wrapping |
//!
//! All values are reinterpreted as `i32` before mixing, so the sequence is
//! bit-for-bit reproducible in any language with 32-bit two's-complement
//! arithmetic. FNV-1a stands in for a platform object hash, which is not
//! stable across processes.

use tracing::trace;

const FNV_OFFSET_BASIS: u32 = 0x811C_9DC5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Multiplier used to derive hash codes beyond the three checksums
pub const MIX_MULTIPLIER: i32 = 31;

/// FNV-1a, 32-bit variant
pub fn fnv1a_32(bytes: &[u8]) -> u32 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, &byte| {
        (hash ^ u32::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// CRC-32 (IEEE 802.3 polynomial, reflected)
pub fn crc32(bytes: &[u8]) -> u32 {
    crc32fast::hash(bytes)
}

/// Adler-32 checksum
pub fn adler32(bytes: &[u8]) -> u32 {
    adler::adler32_slice(bytes)
}

/// Derive the `k` signed hash codes for an element's bytes
///
/// Codes are produced in a fixed order; a filter with a smaller `k` sees a
/// prefix of the codes a larger `k` would see.
pub fn hash_codes(bytes: &[u8], k: usize) -> Vec<i32> {
    let mut codes = Vec::with_capacity(k);
    if k == 0 {
        return codes;
    }

    let first = fnv1a_32(bytes) as i32;
    codes.push(first);

    if k > 1 {
        codes.push(crc32(bytes) as i32);
    }
    if k > 2 {
        codes.push(adler32(bytes) as i32);
    }

    for i in 3..k {
        let next = codes[i - 1]
            .wrapping_mul(MIX_MULTIPLIER)
            .wrapping_add(first);
        codes.push(next);
    }

    codes
}

/// Map a signed hash code onto `0..m`
///
/// Uses the unsigned magnitude of `hash`, so `i32::MIN` maps through
/// `2^31` instead of overflowing.
///
/// `m` must be non-zero; the filter guarantees this at construction.
pub fn bit_index(hash: i32, m: usize) -> usize {
    if hash == i32::MIN {
        trace!(m, "hash code is i32::MIN, using unsigned magnitude 2^31");
    }
    (u64::from(hash.unsigned_abs()) % m as u64) as usize
}

/// Compute the `k` bit positions for an element in a filter of `m` bits
pub fn bit_positions(bytes: &[u8], k: usize, m: usize) -> Vec<usize> {
    hash_codes(bytes, k)
        .into_iter()
        .map(|hash| bit_index(hash, m))
        .collect()
}
