// RSA Error Types
// Errors surfaced by key generation and the number-theory helpers

/// Errors that can occur while generating keys or running the arithmetic core.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum RsaError {
    /// A bit length (of a key or of a prime) is outside its valid domain.
    #[error("Bit length out of range: must be at least {min}, got {actual}")]
    BitLength { min: usize, actual: usize },

    /// Miller-Rabin needs at least one witness round.
    #[error("Security rounds out of range: must be at least 1, got {actual}")]
    Rounds { actual: usize },

    /// Every candidate of the requested size has already been rejected.
    #[error("Bit length out of range: no {bits}-bit candidates left to sample")]
    Exhausted { bits: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, RsaError>;
