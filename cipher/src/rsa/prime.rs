use num_bigint::BigUint;
use rand::{Rand, SeededRand};
use utils::BigUintExt;

/// Searches for a probable prime of exactly `bits_len` bits, starting from
/// `seed`. Every attempt re-initializes the generator from the current seed,
/// so the candidate sequence of a given `(bits_len, seed)` pair is fully
/// reproducible. The candidate runs `bits_len` Miller-Rabin rounds with bases
/// drawn from the same generator.
///
/// Returns the prime together with the seed the next independent draw must
/// start from; the caller threads it through instead of sharing a counter.
/// The search loops until a candidate passes, there is no error path.
pub fn generate_prime(bits_len: usize, mut seed: u64) -> (BigUint, u64) {
    debug_assert!(bits_len >= 2, "a prime needs at least 2 bits");

    loop {
        let mut rng = SeededRand::new(seed);
        let candidate = draw_candidate(bits_len, &mut rng);
        if BigUintExt(&candidate).probably_prime(bits_len, &mut rng) {
            return (candidate, seed.wrapping_add(1));
        }
        seed = seed.wrapping_add(1);
    }
}

/// Random value of exactly `bits_len` bits. The top two bits are set so the
/// product of two draws always reaches the full `2 * bits_len` bits, the low
/// bit makes the candidate odd.
fn draw_candidate<R: Rand>(bits_len: usize, rng: &mut R) -> BigUint {
    let mut bytes = vec![0u8; (bits_len + 7) >> 3];
    rng.rand(bytes.as_mut_slice());

    // bytes are little-endian: the last one carries the high-order bits
    let top = if bits_len & 7 == 0 { 8 } else { bits_len & 7 };
    let last = bytes.len() - 1;
    if top != 8 {
        bytes[last] &= (1u8 << top) - 1;
    }
    if top >= 2 {
        bytes[last] |= 3 << (top - 2);
    } else {
        bytes[last] |= 1;
        bytes[last - 1] |= 0x80;
    }
    bytes[0] |= 1;

    BigUint::from_bytes_le(bytes.as_slice())
}
