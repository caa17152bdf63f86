//! # Lattica IO
//!
//! Text-format surface for the automaton: run-length-encoded pattern
//! decoding, used to seed initial generations. Deliberately independent of
//! the lattice and scheduler so pattern handling can be reused on its own.

/// Malformed-pattern error taxonomy
pub mod error;
/// Run-length-encoded pattern decoding
pub mod pattern;

pub use error::PatternError;
pub use pattern::{decode, decode_rectangular, Pattern};
