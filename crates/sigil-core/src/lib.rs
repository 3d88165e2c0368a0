//! # Sigil Core
//!
//! Foundation tables and derivation for the sigil generator.
//!
//! ## Core Principle
//!
//! ```text
//! solver_id ──SHA-256──► digest[0..5] ──► SigilParams (rotation, layers, ...)
//! wound / frequency ────► Chakra ───────► Palette + shape grammar
//! ```
//!
//! Everything here is a pure function of its inputs: the same solver id
//! always derives the same parameters, so any two parties can regenerate
//! an identical sigil independently.

pub mod chakra;
pub mod frequency;
pub mod palette;
pub mod params;

pub use chakra::Chakra;
pub use frequency::{BreathPattern, FrequencyMapping, SOLFEGGIO_HZ};
pub use palette::{Color, Palette};
pub use params::SigilParams;

/// Result type for sigil-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sigil-core
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unsupported wound type: {0}")]
    UnknownWound(String),

    #[error("Unsupported frequency: {0} Hz")]
    UnknownFrequency(u32),
}
