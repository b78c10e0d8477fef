use super::BlockCodec;
use crate::CipherError;
use num_bigint::BigUint;
use rayon::prelude::*;

/// Raises every block of `buffer` to `exponent` modulo `modulus`. Encryption,
/// decryption and signing are all this function with a different exponent.
///
/// The buffer length must already be a multiple of the block width (the
/// modulus byte length); the caller pads before transforming. Blocks carry no
/// cross-block state, so they are processed in parallel and reassembled in
/// order.
pub fn transform(
    buffer: &[u8],
    exponent: &BigUint,
    modulus: &BigUint,
) -> Result<Vec<u8>, CipherError> {
    let codec = BlockCodec::for_modulus(modulus);
    if buffer.len() % codec.width() != 0 {
        return Err(CipherError::InvalidBlockSize {
            target: codec.width(),
            real: buffer.len(),
        });
    }

    let blocks = buffer
        .par_chunks_exact(codec.width())
        .map(|block| {
            let m = codec.decode(block)?;
            // a full-width block can still spell a value reaching the
            // modulus; exponentiation would silently reduce it
            if &m >= modulus {
                return Err(CipherError::EncodingOverflow {
                    width: codec.width(),
                    bits: m.bits(),
                });
            }
            codec.encode(&m.modpow(exponent, modulus))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut out = Vec::with_capacity(buffer.len());
    for block in blocks {
        out.extend_from_slice(block.as_slice());
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::transform;
    use crate::CipherError;
    use num_bigint::BigUint;

    // p = 61, q = 53: n = 3233 (2 bytes), phi = 3120, e = 17, d = 2753
    const N: u32 = 3233;
    const E: u32 = 17;
    const D: u32 = 2753;

    fn n() -> BigUint {
        BigUint::from(N)
    }

    #[test]
    fn round_trip() {
        let plaintext = [0x00, 0x2a, 0x01, 0x02, 0x0b, 0xad];
        let ciphertext = transform(&plaintext, &BigUint::from(E), &n()).unwrap();
        assert_eq!(ciphertext.len(), plaintext.len());
        assert_ne!(ciphertext, plaintext);

        let decrypted = transform(&ciphertext, &BigUint::from(D), &n()).unwrap();
        assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn blocks_are_independent() {
        let plaintext = [0x00, 0x2a, 0x01, 0x02, 0x0b, 0xad];
        let c = transform(&plaintext, &BigUint::from(E), &n()).unwrap();

        // permuting ciphertext blocks permutes the decrypted blocks the
        // same way
        let permuted = [&c[4..6], &c[0..2], &c[2..4]].concat();
        let d = transform(&permuted, &BigUint::from(D), &n()).unwrap();
        assert_eq!(d, [0x0b, 0xad, 0x00, 0x2a, 0x01, 0x02]);
    }

    #[test]
    fn rejects_unpadded_buffer() {
        let r = transform(&[1, 2, 3], &BigUint::from(E), &n());
        assert_eq!(
            r,
            Err(CipherError::InvalidBlockSize { target: 2, real: 3 })
        );
    }

    #[test]
    fn rejects_block_reaching_modulus() {
        // 0x0ca1 = 3233 = n decodes to exactly the modulus
        let r = transform(&[0x0c, 0xa1], &BigUint::from(E), &n());
        assert!(matches!(r, Err(CipherError::EncodingOverflow { .. })));
    }
}
