use std::io::Write;

pub mod sha2;

/// Message digest over a byte stream. Either call `Digest::digest(msg)` for a
/// one-shot hash, or feed data through the `Write` impl and call `finalize`.
pub trait Digest: Write {
    /// bit length of the internal processing block
    const BLOCK_BITS: usize;
    /// bit length of a processing word
    const WORD_BITS: usize;
    /// bit length of the digest
    const DIGEST_BITS: usize;

    fn digest(msg: &[u8]) -> Vec<u8>;

    fn finalize(&mut self) -> Vec<u8>;

    /// back to the initial state
    fn reset(&mut self);
}
