//! Property-based tests.

use num_bigint::{BigInt, RandBigInt};
use num_integer::Integer;
use num_traits::One;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rsa_textbook::{
    decrypt, encrypt, extended_gcd, from_u64, gcd, generate_keypair_with_rng, is_probable_prime,
    mod_inverse, mod_pow, random_prime, KeyGenConfig, RsaKeyPair,
};

prop_compose! {
    // Small keys keep the test fast; do not use 64-bit RSA for anything real.
    fn keypair()(seed in any::<u64>()) -> RsaKeyPair {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        generate_keypair_with_rng(&mut rng, 64, &KeyGenConfig::default()).unwrap()
    }
}

proptest! {
    #[test]
    fn mod_pow_matches_num_bigint(base in any::<u64>(), exp in any::<u32>(), modulus in 1u64..) {
        let (base, exp, modulus) = (from_u64(base), from_u64(exp as u64), from_u64(modulus));
        prop_assert_eq!(mod_pow(&base, &exp, &modulus), base.modpow(&exp, &modulus));
    }

    #[test]
    fn gcd_matches_extended_gcd(a in any::<u64>(), b in any::<u64>()) {
        let (n1, n2) = if a >= b { (a, b) } else { (b, a) };
        let (n1, n2) = (from_u64(n1), from_u64(n2));

        let (g, s, t) = extended_gcd(&n1, &n2).unwrap();
        prop_assert_eq!(&g, &gcd(&n1, &n2));
        prop_assert_eq!(&g, &n1.gcd(&n2));
        prop_assert_eq!(s * BigInt::from(n1) + t * BigInt::from(n2), BigInt::from(g));
    }

    #[test]
    fn mod_inverse_inverts(a in 1u64.., m in 2u64..) {
        let (a, m) = (from_u64(a), from_u64(m));
        match mod_inverse(&a, &m) {
            Some(inv) => {
                prop_assert!(inv < m);
                prop_assert_eq!((&a * &inv) % &m, from_u64(1));
            }
            None => prop_assert!(!gcd(&m, &(&a % &m)).is_one()),
        }
    }

    #[test]
    fn random_primes_satisfy_fermat(seed in any::<u64>(), bits in 8usize..96) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let p = random_prime(&mut rng, bits, None).unwrap();
        prop_assert_eq!(p.bits() as usize, bits);
        prop_assert!(is_probable_prime(&mut rng, &p, bits, 11));

        let a = rng.gen_biguint_range(&from_u64(2), &(&p - 1u8));
        prop_assert_eq!(mod_pow(&a, &(&p - 1u8), &p), from_u64(1));
    }

    #[test]
    fn keypair_is_consistent(keypair in keypair()) {
        let public = keypair.public_key();
        let private = keypair.private_key();
        let phi_n = private.phi();

        prop_assert_eq!(public.n(), &private.n());
        prop_assert!(gcd(&phi_n, public.e()).is_one());
        prop_assert_eq!((public.e() * private.d()) % &phi_n, from_u64(1));
    }

    #[test]
    fn encrypt_decrypt_roundtrip(keypair in keypair(), m in any::<u64>()) {
        let public = keypair.public_key();
        let private = keypair.private_key();
        let m = from_u64(m) % public.n();

        let c = encrypt(&m, public.e(), public.n());
        prop_assert_eq!(decrypt(&c, private.d(), public.n()), m);
    }
}
