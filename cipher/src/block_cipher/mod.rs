pub trait BlockEncrypt<const BLOCK_SIZE: usize> {
    fn encrypt_block(&self, plaintext: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE];
}

pub trait BlockDecrypt<const BLOCK_SIZE: usize> {
    fn decrypt_block(&self, ciphertext: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE];
}

pub trait BlockCipher<const N: usize>: BlockEncrypt<N> + BlockDecrypt<N> {
    const BLOCK_SIZE: usize = N;
}

impl<T, const N: usize> BlockCipher<N> for T where T: BlockDecrypt<N> + BlockEncrypt<N> {}

/// Buffer-level `Encrypt`/`Decrypt` on top of the per-block traits: the
/// buffer is split into consecutive blocks, each transformed independently.
/// The caller pads to a block-size multiple first.
macro_rules! impl_buffer_cipher {
    ($NAME: ident, $SIZE: literal) => {
        impl crate::Encrypt for $NAME {
            fn encrypt(
                &self,
                plaintext: &[u8],
                ciphertext: &mut Vec<u8>,
            ) -> Result<(), crate::CipherError> {
                if plaintext.len() % $SIZE != 0 {
                    return Err(crate::CipherError::InvalidBlockSize {
                        target: $SIZE,
                        real: plaintext.len(),
                    });
                }

                for block in plaintext.chunks_exact($SIZE) {
                    let block = utils::Block::as_arr_ref::<$SIZE>(block)
                        .expect("chunks_exact yields full blocks");
                    ciphertext.extend($crate::BlockEncrypt::encrypt_block(self, block));
                }
                Ok(())
            }
        }

        impl crate::Decrypt for $NAME {
            fn decrypt(
                &self,
                ciphertext: &[u8],
                plaintext: &mut Vec<u8>,
            ) -> Result<(), crate::CipherError> {
                if ciphertext.len() % $SIZE != 0 {
                    return Err(crate::CipherError::InvalidBlockSize {
                        target: $SIZE,
                        real: ciphertext.len(),
                    });
                }

                for block in ciphertext.chunks_exact($SIZE) {
                    let block = utils::Block::as_arr_ref::<$SIZE>(block)
                        .expect("chunks_exact yields full blocks");
                    plaintext.extend($crate::BlockDecrypt::decrypt_block(self, block));
                }
                Ok(())
            }
        }
    };
}
pub(crate) use impl_buffer_cipher;

mod aes;
pub use aes::AES128;

mod des;
pub use des::DES;
