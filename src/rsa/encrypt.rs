// RSA Encryption Implementation
// Raw textbook RSA: c = m^e mod n, no padding

use super::bigint::{mod_pow, RsaBigInt};

/// Encrypt `plaintext` with public exponent `e` and modulus `n`
///
/// `plaintext` must be smaller than `n` or decryption will not give it back.
/// This is not checked.
pub fn encrypt(plaintext: &RsaBigInt, e: &RsaBigInt, n: &RsaBigInt) -> RsaBigInt {
    mod_pow(plaintext, e, n)
}
