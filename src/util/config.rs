// Key Generation Configuration
// Tunables for the exponent guard and Miller-Rabin round count

use crate::rsa::bigint::RsaBigInt;
use crate::rsa::prime::security_rounds;

/// Configuration for RSA key generation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyGenConfig {
    /// Minimum size of both exponents, as a percentage of the key bit length.
    pub min_exponent_percent: u32,
    /// Fixed Miller-Rabin round count; `None` picks it from the prime size.
    pub security_rounds: Option<usize>,
}

impl Default for KeyGenConfig {
    fn default() -> Self {
        Self {
            min_exponent_percent: 30,
            security_rounds: None,
        }
    }
}

impl KeyGenConfig {
    pub fn with_min_exponent_percent(mut self, percent: u32) -> Self {
        self.min_exponent_percent = percent;
        self
    }

    pub fn with_security_rounds(mut self, rounds: usize) -> Self {
        self.security_rounds = Some(rounds);
        self
    }

    /// Miller-Rabin rounds to spend on a prime of `prime_bits` bits
    pub fn rounds_for(&self, prime_bits: usize) -> usize {
        self.security_rounds
            .unwrap_or_else(|| security_rounds(prime_bits))
    }

    /// Whether `exponent` is long enough for a key of `bit_length` bits
    pub fn accepts_exponent(&self, exponent: &RsaBigInt, bit_length: usize) -> bool {
        exponent.bits() * 100 >= u64::from(self.min_exponent_percent) * bit_length as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::bigint::from_u64;

    #[test]
    fn test_default_config() {
        let config = KeyGenConfig::default();
        assert_eq!(config.min_exponent_percent, 30);
        assert_eq!(config.security_rounds, None);
        assert_eq!(config.rounds_for(256), 11);
        assert_eq!(config.rounds_for(1024), 3);
    }

    #[test]
    fn test_builder() {
        let config = KeyGenConfig::default()
            .with_min_exponent_percent(50)
            .with_security_rounds(20);
        assert_eq!(config.min_exponent_percent, 50);
        assert_eq!(config.rounds_for(1024), 20);
    }

    #[test]
    fn test_accepts_exponent() {
        let config = KeyGenConfig::default();
        // 30% of 16 bits is 4.8, so 5 bits are needed
        assert!(!config.accepts_exponent(&from_u64(0b1111), 16));
        assert!(config.accepts_exponent(&from_u64(0b10000), 16));
        // 30% of 100 bits is exactly 30
        assert!(config.accepts_exponent(&(from_u64(1) << 29u8), 100));
        assert!(!config.accepts_exponent(&(from_u64(1) << 28u8), 100));
    }
}
