// RSA Module - Main module file
// Exports all RSA-related functionality

pub mod bigint;
pub mod prime;
pub mod keygen;
pub mod encrypt;
pub mod decrypt;

pub use bigint::{extended_gcd, from_u64, gcd, mod_inverse, mod_pow, RsaBigInt};
pub use prime::{decompose, is_probable_prime, random_prime, random_prime_with_rounds, security_rounds};
pub use keygen::{
    generate_keypair, generate_keypair_with_rng, keypair_from_primes, RsaKeyPair, RsaPrivateKey,
    RsaPublicKey,
};
pub use encrypt::encrypt;
pub use decrypt::decrypt;
