//! Textbook RSA built from first principles.
//!
//! Primes are found by sampling odd candidates and running a Miller-Rabin
//! test, keypairs are derived with the extended Euclidean algorithm, and
//! encryption is raw square-and-multiply modular exponentiation.
//!
//! There is no padding scheme and no constant-time arithmetic: this is the
//! schoolbook construction, suitable for learning and experiments only.
//!
//! ```rust,no_run
//! use rsa_textbook::{decrypt, encrypt, generate_keypair, from_u64};
//!
//! let keypair = generate_keypair(512).expect("key generation failed");
//! let (public, private) = (keypair.public_key(), keypair.private_key());
//!
//! let message = from_u64(42);
//! let cipher = encrypt(&message, public.e(), public.n());
//! assert_eq!(decrypt(&cipher, private.d(), public.n()), message);
//! ```

pub mod error;
pub mod rsa;
pub mod util;

pub use error::{Result, RsaError};
pub use rsa::*;
pub use util::config::KeyGenConfig;
