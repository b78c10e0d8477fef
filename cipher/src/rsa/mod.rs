//! Textbook RSA over fixed-width byte blocks.
//!
//! - two random primes $p \neq q$ give the modulus $n = p q$; the block width
//!   is the byte length of $n$;
//! - the public exponent is fixed at $e = 65537$ and the private exponent
//!   satisfies $d e \equiv 1 \mod (p-1)(q-1)$;
//! - every block is interpreted as a big-endian integer $m < n$ and mapped to
//!   $m^e \mod n$ (encrypt) or $m^d \mod n$ (decrypt and sign).
//!
//! No padding scheme is applied: the transform is deterministic and
//! malleable, and signing is plain exponentiation with the private exponent.
//! A mismatched key is not detectable either, every full-width block below
//! the modulus is a valid input and decrypts to something.

mod key;
pub use key::{PrivateKey, PublicKey};

mod prime;
pub use prime::generate_prime;

mod codec;
pub use codec::BlockCodec;

mod transform;
pub use transform::transform;
