use thiserror::Error;

/// Errors raised while preparing or running a generation request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
	/// None of the character classes is enabled.
	#[error("At least one option must be selected.")]
	InvalidOptions,

	/// The requested length is outside the supported range.
	#[error("password length must be between {min} and {max}, got {length}")]
	LengthOutOfRange {
		length: usize,
		min: usize,
		max: usize,
	},
}

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;
