//! DES, FIPS 46-3. Tables use the standard 1-based bit numbering with bit 1
//! as the most significant bit.

use super::impl_buffer_cipher;
#[cfg(feature = "sec-zeroize")]
use zeroize::Zeroize;

const IP: [u8; 64] = [
    58, 50, 42, 34, 26, 18, 10, 2, 60, 52, 44, 36, 28, 20, 12, 4, 62, 54, 46, 38, 30, 22, 14, 6,
    64, 56, 48, 40, 32, 24, 16, 8, 57, 49, 41, 33, 25, 17, 9, 1, 59, 51, 43, 35, 27, 19, 11, 3,
    61, 53, 45, 37, 29, 21, 13, 5, 63, 55, 47, 39, 31, 23, 15, 7,
];

const FP: [u8; 64] = [
    40, 8, 48, 16, 56, 24, 64, 32, 39, 7, 47, 15, 55, 23, 63, 31, 38, 6, 46, 14, 54, 22, 62, 30,
    37, 5, 45, 13, 53, 21, 61, 29, 36, 4, 44, 12, 52, 20, 60, 28, 35, 3, 43, 11, 51, 19, 59, 27,
    34, 2, 42, 10, 50, 18, 58, 26, 33, 1, 41, 9, 49, 17, 57, 25,
];

const E: [u8; 48] = [
    32, 1, 2, 3, 4, 5, 4, 5, 6, 7, 8, 9, 8, 9, 10, 11, 12, 13, 12, 13, 14, 15, 16, 17, 16, 17,
    18, 19, 20, 21, 20, 21, 22, 23, 24, 25, 24, 25, 26, 27, 28, 29, 28, 29, 30, 31, 32, 1,
];

const P: [u8; 32] = [
    16, 7, 20, 21, 29, 12, 28, 17, 1, 15, 23, 26, 5, 18, 31, 10, 2, 8, 24, 14, 32, 27, 3, 9, 19,
    13, 30, 6, 22, 11, 4, 25,
];

const PC1: [u8; 56] = [
    57, 49, 41, 33, 25, 17, 9, 1, 58, 50, 42, 34, 26, 18, 10, 2, 59, 51, 43, 35, 27, 19, 11, 3,
    60, 52, 44, 36, 63, 55, 47, 39, 31, 23, 15, 7, 62, 54, 46, 38, 30, 22, 14, 6, 61, 53, 45, 37,
    29, 21, 13, 5, 28, 20, 12, 4,
];

const PC2: [u8; 48] = [
    14, 17, 11, 24, 1, 5, 3, 28, 15, 6, 21, 10, 23, 19, 12, 4, 26, 8, 16, 7, 27, 20, 13, 2, 41,
    52, 31, 37, 47, 55, 30, 40, 51, 45, 33, 48, 44, 49, 39, 56, 34, 53, 46, 42, 50, 36, 29, 32,
];

const SHIFTS: [u8; 16] = [1, 1, 2, 2, 2, 2, 2, 2, 1, 2, 2, 2, 2, 2, 2, 1];

const SBOX: [[u8; 64]; 8] = [
    [
        14, 4, 13, 1, 2, 15, 11, 8, 3, 10, 6, 12, 5, 9, 0, 7, 0, 15, 7, 4, 14, 2, 13, 1, 10, 6,
        12, 11, 9, 5, 3, 8, 4, 1, 14, 8, 13, 6, 2, 11, 15, 12, 9, 7, 3, 10, 5, 0, 15, 12, 8, 2,
        4, 9, 1, 7, 5, 11, 3, 14, 10, 0, 6, 13,
    ],
    [
        15, 1, 8, 14, 6, 11, 3, 4, 9, 7, 2, 13, 12, 0, 5, 10, 3, 13, 4, 7, 15, 2, 8, 14, 12, 0,
        1, 10, 6, 9, 11, 5, 0, 14, 7, 11, 10, 4, 13, 1, 5, 8, 12, 6, 9, 3, 2, 15, 13, 8, 10, 1,
        3, 15, 4, 2, 11, 6, 7, 12, 0, 5, 14, 9,
    ],
    [
        10, 0, 9, 14, 6, 3, 15, 5, 1, 13, 12, 7, 11, 4, 2, 8, 13, 7, 0, 9, 3, 4, 6, 10, 2, 8, 5,
        14, 12, 11, 15, 1, 13, 6, 4, 9, 8, 15, 3, 0, 11, 1, 2, 12, 5, 10, 14, 7, 1, 10, 13, 0, 6,
        9, 8, 7, 4, 15, 14, 3, 11, 5, 2, 12,
    ],
    [
        7, 13, 14, 3, 0, 6, 9, 10, 1, 2, 8, 5, 11, 12, 4, 15, 13, 8, 11, 5, 6, 15, 0, 3, 4, 7, 2,
        12, 1, 10, 14, 9, 10, 6, 9, 0, 12, 11, 7, 13, 15, 1, 3, 14, 5, 2, 8, 4, 3, 15, 0, 6, 10,
        1, 13, 8, 9, 4, 5, 11, 12, 7, 2, 14,
    ],
    [
        2, 12, 4, 1, 7, 10, 11, 6, 8, 5, 3, 15, 13, 0, 14, 9, 14, 11, 2, 12, 4, 7, 13, 1, 5, 0,
        15, 10, 3, 9, 8, 6, 4, 2, 1, 11, 10, 13, 7, 8, 15, 9, 12, 5, 6, 3, 0, 14, 11, 8, 12, 7,
        1, 14, 2, 13, 6, 15, 0, 9, 10, 4, 5, 3,
    ],
    [
        12, 1, 10, 15, 9, 2, 6, 8, 0, 13, 3, 4, 14, 7, 5, 11, 10, 15, 4, 2, 7, 12, 9, 5, 6, 1,
        13, 14, 0, 11, 3, 8, 9, 14, 15, 5, 2, 8, 12, 3, 7, 0, 4, 10, 1, 13, 11, 6, 4, 3, 2, 12,
        9, 5, 15, 10, 11, 14, 1, 7, 6, 0, 8, 13,
    ],
    [
        4, 11, 2, 14, 15, 0, 8, 13, 3, 12, 9, 7, 5, 10, 6, 1, 13, 0, 11, 7, 4, 9, 1, 10, 14, 3,
        5, 12, 2, 15, 8, 6, 1, 4, 11, 13, 12, 3, 7, 14, 10, 15, 6, 8, 0, 5, 9, 2, 6, 11, 13, 8,
        1, 4, 10, 7, 9, 5, 0, 15, 14, 2, 3, 12,
    ],
    [
        13, 2, 8, 4, 6, 15, 11, 1, 10, 9, 3, 14, 5, 0, 12, 7, 1, 15, 13, 8, 10, 3, 7, 4, 12, 5,
        6, 11, 0, 14, 9, 2, 7, 11, 4, 1, 9, 12, 14, 2, 0, 6, 10, 13, 15, 3, 5, 8, 2, 1, 14, 7, 4,
        10, 8, 13, 15, 12, 9, 0, 3, 5, 6, 11,
    ],
];

/// Gathers the bits named by `table` (1-based from the MSB of a `src_bits`
/// wide value) into a new left-aligned-at-bit-0 value.
fn permute(src: u64, src_bits: u32, table: &[u8]) -> u64 {
    let mut out = 0u64;
    for &pos in table {
        out = (out << 1) | ((src >> (src_bits - pos as u32)) & 1);
    }
    out
}

#[derive(Clone)]
pub struct DES {
    subkeys: [u64; 16],
}

impl DES {
    pub const KEY_SIZE: usize = 8;
    pub const BLOCK_SIZE: usize = 8;

    pub fn new(key: [u8; 8]) -> Self {
        let key = u64::from_be_bytes(key);
        let cd = permute(key, 64, &PC1);
        let (mut c, mut d) = ((cd >> 28) as u32, (cd & 0x0fff_ffff) as u32);

        let mut subkeys = [0u64; 16];
        for (subkey, &shift) in subkeys.iter_mut().zip(SHIFTS.iter()) {
            c = ((c << shift) | (c >> (28 - shift))) & 0x0fff_ffff;
            d = ((d << shift) | (d >> (28 - shift))) & 0x0fff_ffff;
            *subkey = permute(((c as u64) << 28) | d as u64, 56, &PC2);
        }
        Self { subkeys }
    }

    // the cipher function f(R, K): expand, mix in the subkey, substitute,
    // permute
    fn feistel(r: u32, subkey: u64) -> u32 {
        let x = permute(r as u64, 32, &E) ^ subkey;
        let mut out = 0u32;
        for (i, sbox) in SBOX.iter().enumerate() {
            let b = ((x >> (42 - 6 * i)) & 0x3f) as usize;
            let row = ((b >> 4) & 2) | (b & 1);
            let col = (b >> 1) & 0xf;
            out = (out << 4) | sbox[row * 16 + col] as u32;
        }
        permute(out as u64, 32, &P) as u32
    }

    fn rounds(&self, block: &[u8; 8], decrypt: bool) -> [u8; 8] {
        let ip = permute(u64::from_be_bytes(*block), 64, &IP);
        let (mut l, mut r) = ((ip >> 32) as u32, ip as u32);

        for i in 0..16 {
            let subkey = if decrypt {
                self.subkeys[15 - i]
            } else {
                self.subkeys[i]
            };
            (l, r) = (r, l ^ Self::feistel(r, subkey));
        }

        // the halves are swapped before the final permutation
        permute(((r as u64) << 32) | l as u64, 64, &FP).to_be_bytes()
    }
}

impl super::BlockEncrypt<8> for DES {
    fn encrypt_block(&self, plaintext: &[u8; 8]) -> [u8; 8] {
        self.rounds(plaintext, false)
    }
}

impl super::BlockDecrypt<8> for DES {
    fn decrypt_block(&self, ciphertext: &[u8; 8]) -> [u8; 8] {
        self.rounds(ciphertext, true)
    }
}

impl_buffer_cipher!(DES, 8);

#[cfg(feature = "sec-zeroize")]
impl Zeroize for DES {
    fn zeroize(&mut self) {
        self.subkeys.zeroize();
    }
}

#[cfg(feature = "sec-zeroize")]
impl Drop for DES {
    fn drop(&mut self) {
        self.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use crate::block_cipher::{BlockDecrypt, BlockEncrypt, DES};
    use crate::{Decrypt, Encrypt};

    #[test]
    fn des_known_answer() {
        let des = DES::new(0x133457799bbcdff1u64.to_be_bytes());
        let plaintext = 0x0123456789abcdefu64.to_be_bytes();
        let ciphertext = 0x85e813540f0ab405u64.to_be_bytes();

        assert_eq!(des.encrypt_block(&plaintext), ciphertext);
        assert_eq!(des.decrypt_block(&ciphertext), plaintext);
    }

    #[test]
    fn des_weak_key_vector() {
        // key and plaintext from the classic Hoey test set
        let des = DES::new(0x0e329232ea6d0d73u64.to_be_bytes());
        let plaintext = 0x8787878787878787u64.to_be_bytes();
        assert_eq!(des.encrypt_block(&plaintext), [0u8; 8]);
    }

    #[test]
    fn des_buffer_round_trip() {
        let des = DES::new(*b"8bytekey");
        let plaintext: Vec<u8> = (0u8..32).collect();

        let mut ciphertext = Vec::new();
        des.encrypt(&plaintext, &mut ciphertext).unwrap();
        assert_eq!(ciphertext.len(), 32);

        let mut decrypted = Vec::new();
        des.decrypt(&ciphertext, &mut decrypted).unwrap();
        assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn des_rejects_partial_block() {
        let des = DES::new([0x13; 8]);
        let mut out = Vec::new();
        assert!(des.encrypt(&[0u8; 12], &mut out).is_err());
    }
}
