use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::charset::CharClass;

/// Shortest password a request may ask for.
pub const MIN_LENGTH: usize = 5;

/// Longest password a request may ask for.
pub const MAX_LENGTH: usize = 20;

/// Length preselected in a fresh front-end.
pub const DEFAULT_LENGTH: usize = 8;

/// Input parameters of a generation request.
///
/// # Invariants
/// - `length` lies in `[MIN_LENGTH, MAX_LENGTH]` when set through `set_length`
/// - At least one `include_*` flag must be true for a request to be accepted
///   (checked by `validate`, not enforced on construction so a front-end can
///   bind the flags directly to toggles)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct GenerationOptions {
	/// Number of characters to generate.
	pub length: usize,

	/// Enables `0-9`.
	pub include_digits: bool,

	/// Enables `a-z` and `A-Z`.
	pub include_letters: bool,

	/// Enables the ASCII punctuation set.
	pub include_symbols: bool,
}

impl Default for GenerationOptions {
	fn default() -> Self {
		Self {
			length: DEFAULT_LENGTH,
			include_digits: true,
			include_letters: true,
			include_symbols: false,
		}
	}
}

impl GenerationOptions {
	/// Sets the requested length.
	///
	/// # Errors
	/// Returns `Error::LengthOutOfRange` if `length` is outside `[MIN_LENGTH, MAX_LENGTH]`.
	pub fn set_length(&mut self, length: usize) -> Result<()> {
		check_length(length)?;
		self.length = length;
		Ok(())
	}

	/// Returns true iff at least one character class is enabled.
	pub fn validate(&self) -> bool {
		self.include_digits || self.include_letters || self.include_symbols
	}

	/// Returns whether `class` is enabled.
	pub fn includes(&self, class: CharClass) -> bool {
		match class {
			CharClass::Digits => self.include_digits,
			CharClass::Letters => self.include_letters,
			CharClass::Symbols => self.include_symbols,
		}
	}

	/// Iterates over enabled classes in digits, letters, symbols order.
	pub fn enabled_classes(&self) -> impl Iterator<Item = CharClass> + '_ {
		CharClass::ALL.into_iter().filter(|class| self.includes(*class))
	}
}

/// Checks `length` against the supported range.
pub(crate) fn check_length(length: usize) -> Result<()> {
	if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
		return Err(Error::LengthOutOfRange {
			length,
			min: MIN_LENGTH,
			max: MAX_LENGTH,
		});
	}
	Ok(())
}
