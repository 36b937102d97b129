//! Random password generation library.
//!
//! This crate provides the logic behind the password generator front-ends:
//! - Fixed character classes (digits, letters, punctuation)
//! - Uniform random generation from the enabled classes
//! - A heuristic 0-100 security score
//! - A session holding the single live password/score pair
//!
//! The GUI and the demo binary only talk to this crate through the
//! high-level `model` API and the shared `Error` type.

/// Character classes, generation options, generator, scorer and session.
pub mod model;

/// Error type shared by the whole crate.
pub mod error;

pub use error::{Error, Result};
