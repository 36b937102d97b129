//! Top-level module for the password generation system.
//!
//! - Character classes and alphabets (`CharClass`, `CharKind`)
//! - User-facing request parameters (`GenerationOptions`)
//! - Random generation (`Generator`, `Password`)
//! - Heuristic strength scoring (`Scorer`, `Score`)
//! - The single live result owned by a front-end (`Session`)

/// Fixed alphabets and per-character classification.
pub mod charset;

/// Generation parameters and their validation.
///
/// Serializable so front-ends can restore the last used settings.
pub mod generation_options;

/// Uniform random password generation.
pub mod generator;

/// Heuristic 0-100 security score.
pub mod scorer;

/// Owner of the last generated password and its score.
pub mod session;
