// RSA Decryption Implementation
// Raw textbook RSA: m = c^d mod n, no CRT shortcut

use super::bigint::{mod_pow, RsaBigInt};

/// Decrypt `ciphertext` with private exponent `d` and modulus `n`
pub fn decrypt(ciphertext: &RsaBigInt, d: &RsaBigInt, n: &RsaBigInt) -> RsaBigInt {
    mod_pow(ciphertext, d, n)
}
