// RSA Big Integer Operations
// Modular exponentiation and Euclid helpers on top of num-bigint

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::{Result, RsaError};

/// RSA Big Integer type alias
pub type RsaBigInt = BigUint;

/// Create a big integer from u64
pub fn from_u64(n: u64) -> RsaBigInt {
    RsaBigInt::from(n)
}

/// Modular exponentiation: base^exp mod modulus
///
/// Left-to-right square-and-multiply. The leading 1 bit of `exp` seeds the
/// accumulator with `base`, every following bit squares it and multiplies
/// by `base` again when the bit is set.
///
/// Panics if `modulus` is zero.
pub fn mod_pow(base: &RsaBigInt, exp: &RsaBigInt, modulus: &RsaBigInt) -> RsaBigInt {
    if modulus.is_one() {
        return RsaBigInt::zero();
    }
    if exp.is_zero() {
        return RsaBigInt::one();
    }

    let base = base % modulus;
    let mut result = base.clone();

    for i in (0..exp.bits() - 1).rev() {
        result = (&result * &result) % modulus;
        if exp.bit(i) {
            result = (&result * &base) % modulus;
        }
    }

    result
}

/// Greatest common divisor (iterative Euclid)
pub fn gcd(a: &RsaBigInt, b: &RsaBigInt) -> RsaBigInt {
    let mut a = a.clone();
    let mut b = b.clone();

    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }

    a
}

/// Extended Euclidean Algorithm
///
/// Returns `(gcd, s, t)` such that `s*n1 + t*n2 = gcd(n1, n2)`.
/// `n1` must not be smaller than `n2`.
pub fn extended_gcd(n1: &RsaBigInt, n2: &RsaBigInt) -> Result<(RsaBigInt, BigInt, BigInt)> {
    if n2 > n1 {
        return Err(RsaError::InvalidInput(
            "first parameter needs to be a bigger value than the second".to_string(),
        ));
    }

    let mut n1 = n1.clone();
    let mut n2 = n2.clone();
    let (mut s0, mut s1) = (BigInt::one(), BigInt::zero());
    let (mut t0, mut t1) = (BigInt::zero(), BigInt::one());

    while !n2.is_zero() {
        let (q, n3) = n1.div_rem(&n2);
        let q = BigInt::from(q);

        let s2 = &s0 - &q * &s1;
        let t2 = &t0 - &q * &t1;

        n1 = n2;
        n2 = n3;
        s0 = s1;
        s1 = s2;
        t0 = t1;
        t1 = t2;
    }

    Ok((n1, s0, t0))
}

/// Compute modular inverse: a^(-1) mod m
/// Returns None if inverse doesn't exist
pub fn mod_inverse(a: &RsaBigInt, m: &RsaBigInt) -> Option<RsaBigInt> {
    if m.is_zero() {
        return None;
    }

    let a = a % m;
    let (gcd, _, t) = extended_gcd(m, &a).ok()?;
    if !gcd.is_one() {
        return None;
    }

    // Bezout coefficients may be negative, fold into [0, m)
    t.mod_floor(&BigInt::from(m.clone())).to_biguint()
}
