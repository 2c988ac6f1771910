// RSA Key Generation
// Implements RSA key pair generation (public and private keys)

use std::collections::HashSet;

use num_bigint::RandBigInt;
use num_traits::{One, ToPrimitive};
use rand::Rng;

use super::bigint::{gcd, mod_inverse, RsaBigInt};
use super::prime::{is_probable_prime, random_prime_with_rounds};
use crate::error::{Result, RsaError};
use crate::util::config::KeyGenConfig;

/// RSA Public Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    e: RsaBigInt, // Public exponent
    n: RsaBigInt, // Modulus
}

/// RSA Private Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPrivateKey {
    d: RsaBigInt, // Private exponent
    p: RsaBigInt, // First prime factor
    q: RsaBigInt, // Second prime factor
}

/// RSA Key Pair (both public and private keys)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaKeyPair {
    public_key: RsaPublicKey,
    private_key: RsaPrivateKey,
    bit_length: usize,
}

impl RsaPublicKey {
    #[inline]
    pub fn e(&self) -> &RsaBigInt {
        &self.e
    }

    #[inline]
    pub fn n(&self) -> &RsaBigInt {
        &self.n
    }

    /// Get the bit length of the modulus
    pub fn bit_length(&self) -> usize {
        self.n.bits() as usize
    }

    /// Encrypt a message smaller than the modulus
    pub fn encrypt(&self, plaintext: &RsaBigInt) -> RsaBigInt {
        super::encrypt::encrypt(plaintext, &self.e, &self.n)
    }
}

impl RsaPrivateKey {
    #[inline]
    pub fn d(&self) -> &RsaBigInt {
        &self.d
    }

    #[inline]
    pub fn p(&self) -> &RsaBigInt {
        &self.p
    }

    #[inline]
    pub fn q(&self) -> &RsaBigInt {
        &self.q
    }

    /// Modulus n = p * q
    pub fn n(&self) -> RsaBigInt {
        &self.p * &self.q
    }

    /// Euler totient (p - 1)(q - 1)
    pub fn phi(&self) -> RsaBigInt {
        (&self.p - 1u8) * (&self.q - 1u8)
    }

    /// Decrypt a ciphertext produced with the matching public key
    pub fn decrypt(&self, ciphertext: &RsaBigInt) -> RsaBigInt {
        super::decrypt::decrypt(ciphertext, &self.d, &self.n())
    }
}

impl RsaKeyPair {
    #[inline]
    pub fn public_key(&self) -> &RsaPublicKey {
        &self.public_key
    }

    #[inline]
    pub fn private_key(&self) -> &RsaPrivateKey {
        &self.private_key
    }

    /// Bit length the key was requested with
    pub fn bit_length(&self) -> usize {
        self.bit_length
    }
}

/// Generate RSA key pair with specified bit length
///
/// Uses the thread-local RNG and the default [`KeyGenConfig`].
pub fn generate_keypair(bit_length: usize) -> Result<RsaKeyPair> {
    generate_keypair_with_rng(&mut rand::thread_rng(), bit_length, &KeyGenConfig::default())
}

/// Generate RSA key pair with specified bit length and random source
///
/// p and q are distinct primes of `bit_length / 2` bits each.
pub fn generate_keypair_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    bit_length: usize,
    config: &KeyGenConfig,
) -> Result<RsaKeyPair> {
    // Each factor needs at least 2 bits
    if bit_length < 4 {
        return Err(RsaError::BitLength { min: 4, actual: bit_length });
    }

    let prime_bits = bit_length / 2;
    let rounds = config.rounds_for(prime_bits);

    let p = random_prime_with_rounds(rng, prime_bits, rounds, None)?;
    let q = random_prime_with_rounds(rng, prime_bits, rounds, Some(&p))?;

    derive_keypair(rng, bit_length, p, q, config)
}

/// Build an RSA key pair around two caller-supplied primes
///
/// Only the exponents are sampled. `bit_length` drives the exponent size
/// guard exactly as it does for freshly generated keys.
pub fn keypair_from_primes<R: Rng + ?Sized>(
    rng: &mut R,
    bit_length: usize,
    p: RsaBigInt,
    q: RsaBigInt,
    config: &KeyGenConfig,
) -> Result<RsaKeyPair> {
    if bit_length < 1 {
        return Err(RsaError::BitLength { min: 1, actual: bit_length });
    }
    if p == q {
        return Err(RsaError::InvalidInput("primes must be distinct".to_string()));
    }
    if config.security_rounds == Some(0) {
        return Err(RsaError::Rounds { actual: 0 });
    }

    for prime in [&p, &q] {
        let bits = prime.bits() as usize;
        if prime < &RsaBigInt::from(3u8)
            || !is_probable_prime(rng, prime, bits, config.rounds_for(bits))
        {
            return Err(RsaError::InvalidInput(format!("{} is not an odd prime", prime)));
        }
    }

    derive_keypair(rng, bit_length, p, q, config)
}

/// Sample exponents for fixed p, q until both pass the size guard
fn derive_keypair<R: Rng + ?Sized>(
    rng: &mut R,
    bit_length: usize,
    p: RsaBigInt,
    q: RsaBigInt,
    config: &KeyGenConfig,
) -> Result<RsaKeyPair> {
    let n = &p * &q;
    let phi_n = (&p - 1u8) * (&q - 1u8);

    let mut rejected = HashSet::new();

    loop {
        let e = sample_public_exponent(rng, &phi_n, &mut rejected)?;
        let d = private_exponent(&phi_n, &e)?;

        rejected.insert(e.clone());
        rejected.insert(d.clone());

        if config.accepts_exponent(&e, bit_length) && config.accepts_exponent(&d, bit_length) {
            return Ok(RsaKeyPair {
                public_key: RsaPublicKey { e, n },
                private_key: RsaPrivateKey { d, p, q },
                bit_length,
            });
        }
    }
}

/// Pick e in [2, phi - 2] coprime to phi and not in `rejected`
///
/// Non-coprime draws are added to `rejected`. Fails once every value in the
/// range has been rejected.
fn sample_public_exponent<R: Rng + ?Sized>(
    rng: &mut R,
    phi_n: &RsaBigInt,
    rejected: &mut HashSet<RsaBigInt>,
) -> Result<RsaBigInt> {
    let exhausted = RsaError::Exhausted { bits: phi_n.bits() as usize };
    let two = RsaBigInt::from(2u8);
    let upper = phi_n - 1u8;
    if upper <= two {
        return Err(exhausted);
    }

    // Every value in [2, phi - 2] is a candidate
    let limit = (phi_n - 3u8).to_usize();

    loop {
        if limit.map_or(false, |limit| rejected.len() >= limit) {
            return Err(exhausted);
        }

        let e = rng.gen_biguint_range(&two, &upper);
        if rejected.contains(&e) {
            continue;
        }
        if gcd(phi_n, &e).is_one() {
            return Ok(e);
        }

        rejected.insert(e);
    }
}

/// d = e^(-1) mod phi, taken from the Bezout coefficient of e
fn private_exponent(phi_n: &RsaBigInt, e: &RsaBigInt) -> Result<RsaBigInt> {
    mod_inverse(e, phi_n)
        .ok_or_else(|| RsaError::InvalidInput(format!("{} has no inverse mod {}", e, phi_n)))
}
