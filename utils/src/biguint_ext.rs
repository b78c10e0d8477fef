use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{Euclid, One, Zero};
use rand::Rand;
use std::borrow::Borrow;
use std::ops::Deref;

/// Number-theory helpers on top of `BigUint`, shared by the RSA key and
/// prime-search code.
pub struct BigUintExt<T: Borrow<BigUint>>(pub T);

impl<T: Borrow<BigUint>> Deref for BigUintExt<T> {
    type Target = BigUint;
    fn deref(&self) -> &Self::Target {
        self.0.borrow()
    }
}

impl<T: Borrow<BigUint>> BigUintExt<T> {
    /// `self * inv = 1 mod modulus`, when `gcd(self, modulus) = 1`.
    pub fn modinv(&self, modulus: &BigUint) -> Option<BigUint> {
        let (a, n) = (
            BigInt::from(self.deref() % modulus),
            BigInt::from(modulus.clone()),
        );
        let g = a.extended_gcd(&n);
        g.gcd.is_one().then(|| {
            g.x.rem_euclid(&n)
                .to_biguint()
                .expect("rem_euclid keeps the value non-negative")
        })
    }

    /// Uniform random value in `[0, self)`.
    pub fn gen_random<R: Rand>(&self, rng: &mut R) -> BigUint {
        let bits = self.bits() as usize;
        let mut buf = vec![0u8; (bits + 7) >> 3];

        loop {
            rng.rand(buf.as_mut_slice());
            let r = BigUint::from_bytes_le(buf.as_slice());
            if &r < self.deref() {
                return r;
            }
        }
    }

    /// Miller-Rabin probable prime test with `rounds` random bases drawn from
    /// `rng`. For odd `n > 2` and `rounds >= 1` the error probability is at
    /// most `4^-rounds`.
    pub fn probably_prime<R: Rand>(&self, rounds: usize, rng: &mut R) -> bool {
        const SMALL_PRIMES: [u32; 14] = [3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47];

        let n = self.deref();
        let two = BigUint::from(2u8);
        if n < &two {
            return false;
        }
        if n.is_even() {
            return *n == two;
        }

        for p in SMALL_PRIMES.map(BigUint::from) {
            if *n == p {
                return true;
            }
            if (n % &p).is_zero() {
                return false;
            }
        }

        // n - 1 = 2^s * r with r odd
        let n_m1 = n - 1u32;
        let s = n_m1.trailing_zeros().unwrap_or(0);
        let r = &n_m1 >> s;

        'witness: for _ in 0..rounds {
            let a = loop {
                let a = BigUintExt(&n_m1).gen_random(rng);
                if a >= two {
                    break a;
                }
            };

            let mut y = a.modpow(&r, n);
            if y.is_one() || y == n_m1 {
                continue;
            }

            for _ in 1..s {
                y = (&y * &y) % n;
                if y == n_m1 {
                    continue 'witness;
                }
                if y.is_one() {
                    return false;
                }
            }

            return false;
        }

        true
    }
}
