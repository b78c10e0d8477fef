use crate::CipherError;
use num_bigint::BigUint;

/// Converts between fixed-width byte blocks and the big-endian integer they
/// spell. `encode` and `decode` are bound to the same width and invert each
/// other for every value below `2^(8 * width)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockCodec {
    width: usize,
}

impl BlockCodec {
    pub const fn new(width: usize) -> Self {
        Self { width }
    }

    /// Codec for the block width of `modulus`: the least number of bytes that
    /// holds it.
    pub fn for_modulus(modulus: &BigUint) -> Self {
        Self {
            width: modulus.bits().div_ceil(8) as usize,
        }
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    /// Big-endian serialization, zero padded on the high-order end to exactly
    /// the block width.
    pub fn encode(&self, value: &BigUint) -> Result<Vec<u8>, CipherError> {
        let bytes = value.to_bytes_be();
        if bytes.len() > self.width {
            return Err(CipherError::EncodingOverflow {
                width: self.width,
                bits: value.bits(),
            });
        }

        let mut block = vec![0u8; self.width - bytes.len()];
        block.extend_from_slice(bytes.as_slice());
        Ok(block)
    }

    pub fn decode(&self, block: &[u8]) -> Result<BigUint, CipherError> {
        if block.len() != self.width {
            return Err(CipherError::InvalidBlockSize {
                target: self.width,
                real: block.len(),
            });
        }
        Ok(BigUint::from_bytes_be(block))
    }
}
