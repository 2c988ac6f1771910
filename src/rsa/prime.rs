// Prime Generation
// Miller-Rabin primality testing and random prime sampling

use std::collections::HashSet;

use num_bigint::RandBigInt;
use num_traits::{One, ToPrimitive, Zero};
use rand::Rng;

use super::bigint::{mod_pow, RsaBigInt};
use crate::error::{Result, RsaError};

/// Miller-Rabin rounds for a prime of the given bit length.
///
/// Fewer rounds are spent on larger candidates: random composites of that
/// size almost never survive even a handful of witnesses.
pub fn security_rounds(bits: usize) -> usize {
    match bits {
        0..=299 => 11,
        300..=399 => 9,
        400..=499 => 6,
        500..=599 => 5,
        _ => 3,
    }
}

/// Write p - 1 as 2^u * r with r odd, returning `(u, r)`.
///
/// Only exponents below `bits` are considered. `(0, 0)` means no such
/// decomposition exists and the candidate cannot be prime (even, or < 3).
pub fn decompose(p: &RsaBigInt, bits: usize) -> (usize, RsaBigInt) {
    let none = (0, RsaBigInt::zero());
    if p < &RsaBigInt::from(3u8) {
        return none;
    }

    let m = p - 1u8;
    match m.trailing_zeros() {
        Some(u) if u >= 1 && (u as usize) < bits => (u as usize, m >> u),
        _ => none,
    }
}

/// Miller-Rabin primality test
///
/// Returns `false` if `p` is definitely composite and `true` if it is
/// probably prime. A composite survives with probability at most 4^-rounds.
/// Witnesses are drawn from [2, p-2] without repetition, so the number of
/// rounds is capped by how many distinct witnesses exist.
pub fn is_probable_prime<R: Rng + ?Sized>(
    rng: &mut R,
    p: &RsaBigInt,
    bits: usize,
    rounds: usize,
) -> bool {
    let two = RsaBigInt::from(2u8);
    if p < &two {
        return false;
    }
    if p == &two || p == &RsaBigInt::from(3u8) {
        return true;
    }

    let (u, r) = decompose(p, bits);
    if u == 0 {
        return false;
    }

    let p_minus_1 = p - 1u8;
    let available = (p - 3u8).to_usize().unwrap_or(usize::MAX);
    let mut used = HashSet::new();

    'witness: for _ in 0..rounds.min(available) {
        // Pick a fresh witness a in [2, p-2]
        let a = loop {
            let a = rng.gen_biguint_range(&two, &p_minus_1);
            if used.insert(a.clone()) {
                break a;
            }
        };

        let mut z = mod_pow(&a, &r, p);
        if z.is_one() || z == p_minus_1 {
            continue;
        }

        for _ in 1..u {
            z = (&z * &z) % p;
            if z == p_minus_1 {
                continue 'witness;
            }
            if z.is_one() {
                return false;
            }
        }

        // Composite
        return false;
    }

    // Probably prime
    true
}

/// Generate a random prime of specified bit length
///
/// The round count comes from [`security_rounds`]. `exclude` is never
/// returned, which lets callers ask for a second, distinct prime.
pub fn random_prime<R: Rng + ?Sized>(
    rng: &mut R,
    bits: usize,
    exclude: Option<&RsaBigInt>,
) -> Result<RsaBigInt> {
    random_prime_with_rounds(rng, bits, security_rounds(bits), exclude)
}

/// Generate a random prime of specified bit length using `rounds` Miller-Rabin rounds
///
/// Candidates are odd and uniform in [2^(bits-1) + 1, 2^bits). Rejected
/// candidates are remembered and never retested; once every candidate of
/// this size is used up the call fails instead of spinning forever.
pub fn random_prime_with_rounds<R: Rng + ?Sized>(
    rng: &mut R,
    bits: usize,
    rounds: usize,
    exclude: Option<&RsaBigInt>,
) -> Result<RsaBigInt> {
    // 1 is the only odd 1-bit number
    if bits < 2 {
        return Err(RsaError::BitLength { min: 2, actual: bits });
    }
    if rounds == 0 {
        return Err(RsaError::Rounds { actual: rounds });
    }

    let lower = RsaBigInt::one() << (bits - 1);
    // Number of odd values in [2^(bits-1), 2^bits)
    let span = RsaBigInt::one() << (bits - 2);
    let limit = span.to_usize();

    let mut rejected: HashSet<RsaBigInt> = exclude
        .filter(|x| x.bits() == bits as u64 && x.bit(0))
        .cloned()
        .into_iter()
        .collect();

    loop {
        if limit.map_or(false, |limit| rejected.len() >= limit) {
            return Err(RsaError::Exhausted { bits });
        }

        let k = rng.gen_biguint_below(&span);
        let candidate = &lower + (k << 1u8) + 1u8;

        if rejected.contains(&candidate) {
            continue;
        }

        if is_probable_prime(rng, &candidate, bits, rounds) {
            return Ok(candidate);
        }

        rejected.insert(candidate);
    }
}
