use super::{generate_prime, transform};
use crate::{CipherError, Decrypt, Encrypt};
use num_bigint::BigUint;
use num_traits::One;
use std::fmt::{Display, Formatter};
use utils::BigUintExt;

/// F4, the fixed public exponent.
const PUBLIC_EXPONENT: u32 = 65537;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    // n = p * q
    n: BigUint,
    // gcd(e, (p-1)(q-1)) = 1
    e: BigUint,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrivateKey {
    pk: PublicKey,
    // d * e = 1 % (p-1)(q-1)
    d: BigUint,
}

impl PublicKey {
    /// note: does not verify that `n` and `e` are valid RSA parameters
    pub fn new_uncheck(n: BigUint, e: BigUint) -> Self {
        Self { n, e }
    }

    pub fn modulus(&self) -> &BigUint {
        &self.n
    }

    pub fn exponent(&self) -> &BigUint {
        &self.e
    }

    /// Modulus byte length, the fixed block width of the transform.
    pub fn block_size(&self) -> usize {
        self.n.bits().div_ceil(8) as usize
    }
}

impl PrivateKey {
    /// note: does not verify that the exponents match the modulus
    pub fn new_uncheck(n: BigUint, e: BigUint, d: BigUint) -> Self {
        Self {
            pk: PublicKey::new_uncheck(n, e),
            d,
        }
    }

    /// Generates a key pair from two distinct `bits_len`-bit primes, so the
    /// modulus spans `2 * bits_len` bits. The prime-search seed is threaded
    /// explicitly: the same `(bits_len, seed)` pair reproduces the same key.
    pub fn generate(bits_len: usize, seed: u64) -> PrivateKey {
        let e = BigUint::from(PUBLIC_EXPONENT);
        let mut seed = seed;

        loop {
            let (p, next) = generate_prime(bits_len, seed);
            let (q, next) = generate_prime(bits_len, next);
            seed = next;
            if p == q {
                continue;
            }

            let n = &p * &q;
            if n.bits() as usize != bits_len * 2 {
                continue;
            }

            let phi = (&p - 1u32) * (&q - 1u32);
            // e is prime, so the inverse exists unless p or q is 1 mod e
            if let Some(d) = BigUintExt(&e).modinv(&phi) {
                return Self {
                    pk: PublicKey::new_uncheck(n, e),
                    d,
                };
            }
        }
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.pk
    }

    pub fn exponent(&self) -> &BigUint {
        &self.d
    }

    /// Consistency check for key material loaded from storage: a probe value
    /// must survive the encrypt/decrypt round trip.
    pub fn is_valid(&self) -> Result<(), CipherError> {
        if self.pk.n <= BigUint::one() {
            return Err(CipherError::InvalidKey("modulus too small".to_string()));
        }

        let probe = BigUint::from(42u32);
        let c = probe.modpow(&self.pk.e, &self.pk.n);
        let m = c.modpow(&self.d, &self.pk.n);
        if m == probe {
            Ok(())
        } else {
            Err(CipherError::InvalidKey(
                "the exponents do not invert each other".to_string(),
            ))
        }
    }
}

impl Encrypt for PublicKey {
    /// Raises every block of `plaintext` to the public exponent.
    fn encrypt(&self, plaintext: &[u8], ciphertext: &mut Vec<u8>) -> Result<(), CipherError> {
        let out = transform(plaintext, &self.e, &self.n)?;
        ciphertext.extend_from_slice(out.as_slice());
        Ok(())
    }
}

impl Decrypt for PrivateKey {
    /// Raises every block of `ciphertext` to the private exponent. Signing is
    /// the same operation applied to a plaintext buffer.
    fn decrypt(&self, ciphertext: &[u8], plaintext: &mut Vec<u8>) -> Result<(), CipherError> {
        let out = transform(ciphertext, &self.d, &self.pk.n)?;
        plaintext.extend_from_slice(out.as_slice());
        Ok(())
    }
}

impl Display for PublicKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{n={:#x}, e={:#x}}}", self.n, self.e)
    }
}

impl Display for PrivateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{pk: {}, d: {:#x}}}", self.pk, self.d)
    }
}

#[cfg(test)]
mod tests {
    use super::{PrivateKey, PUBLIC_EXPONENT};
    use crate::{Decrypt, Encrypt};
    use num_bigint::BigUint;
    use num_integer::Integer;
    use num_traits::One;

    #[test]
    fn generate_is_deterministic() {
        let k1 = PrivateKey::generate(32, 233);
        let k2 = PrivateKey::generate(32, 233);
        assert_eq!(k1, k2);

        let k3 = PrivateKey::generate(32, 234);
        assert_ne!(k1, k3);
    }

    #[test]
    fn generated_modulus_spans_double_bits() {
        let key = PrivateKey::generate(64, 17);
        assert_eq!(key.public_key().modulus().bits(), 128);
        assert_eq!(key.public_key().block_size(), 16);
        assert_eq!(
            key.public_key().exponent(),
            &BigUint::from(PUBLIC_EXPONENT)
        );
    }

    // factoring a 32-bit modulus by trial division stays cheap in tests
    fn factor(n: &BigUint) -> (BigUint, BigUint) {
        let mut p = BigUint::from(3u32);
        let two = BigUint::from(2u32);
        loop {
            let (q, r) = n.div_rem(&p);
            if r == BigUint::default() {
                return (p, q);
            }
            p += &two;
        }
    }

    #[test]
    fn exponents_invert_mod_phi() {
        let key = PrivateKey::generate(16, 5);
        let (p, q) = factor(key.public_key().modulus());
        let phi = (&p - 1u32) * (&q - 1u32);

        let de = key.public_key().exponent() * key.exponent();
        assert!((de % phi).is_one());
    }

    #[test]
    fn single_block_round_trip() {
        // 64-bit test primes: 16-byte blocks
        let key = PrivateKey::generate(64, 233);
        let mut block = vec![0u8; key.public_key().block_size()];
        block[0] = 0x01;
        block[1] = 0x02;

        let mut ciphertext = Vec::new();
        key.public_key().encrypt(&block, &mut ciphertext).unwrap();
        assert_ne!(ciphertext, block);

        let mut decrypted = Vec::new();
        key.decrypt(&ciphertext, &mut decrypted).unwrap();
        assert_eq!(decrypted, block);
    }

    #[test]
    fn corrupt_block_stays_contained() {
        let key = PrivateKey::generate(64, 90);
        let width = key.public_key().block_size();

        let mut plaintext = vec![0u8; 3 * width];
        for (i, x) in plaintext.iter_mut().enumerate() {
            // keep every block's leading byte small so it stays below n
            *x = if i % width == 0 { 0 } else { i as u8 };
        }

        let mut ciphertext = Vec::new();
        key.public_key().encrypt(&plaintext, &mut ciphertext).unwrap();

        // flip one byte in the middle block
        ciphertext[width + width - 1] ^= 0x01;

        let mut decrypted = Vec::new();
        key.decrypt(&ciphertext, &mut decrypted).unwrap();

        assert_eq!(&decrypted[..width], &plaintext[..width]);
        assert_ne!(&decrypted[width..2 * width], &plaintext[width..2 * width]);
        assert_eq!(&decrypted[2 * width..], &plaintext[2 * width..]);
    }

    #[test]
    fn loaded_key_probe() {
        let key = PrivateKey::generate(32, 41);
        key.is_valid().unwrap();

        let bogus = PrivateKey::new_uncheck(
            key.public_key().modulus().clone(),
            key.public_key().exponent().clone(),
            key.exponent().clone() + 2u32,
        );
        assert!(bogus.is_valid().is_err());
    }
}
