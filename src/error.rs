//! Error type shared by the rocket core and its drivers.

use thiserror::Error;

/// Errors raised by the simulation.
///
/// The first four variants are caller contract violations and are never
/// retried; the rest come from configuration and persistence.
#[derive(Error, Debug)]
pub enum RocketError {
    /// Crossover between parents whose genomes differ in length.
    #[error("genome length mismatch: {left} vs {right}")]
    GenomeLengthMismatch {
        /// Genome length of the first parent.
        left: usize,
        /// Genome length of the second parent.
        right: usize,
    },

    /// A tick index outside the genome.
    #[error("tick {tick} out of range for genome of length {length}")]
    TickOutOfRange {
        /// Requested tick.
        tick: usize,
        /// Genome length.
        length: usize,
    },

    /// Explicit crossover midpoint past the end of the genome.
    #[error("crossover midpoint {midpoint} out of range for genome of length {length}")]
    MidpointOutOfRange {
        /// Requested midpoint.
        midpoint: usize,
        /// Genome length.
        length: usize,
    },

    /// Fitness requested for a rocket sitting exactly on the target.
    #[error("rocket location coincides with the target, fitness is undefined")]
    DegenerateDistance,

    /// Rejected simulation parameters.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// I/O failure while loading or saving.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON.
    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RocketError>;
