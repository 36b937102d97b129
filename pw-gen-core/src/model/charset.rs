use crate::model::generation_options::GenerationOptions;

/// ASCII digits.
pub const DIGITS: &[u8] = b"0123456789";

/// ASCII letters, lowercase first then uppercase.
pub const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Printable ASCII punctuation (32 characters).
pub const SYMBOLS: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// A user-selectable character class.
///
/// Classes are disjoint, so concatenating their alphabets never
/// produces duplicates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
	Digits,
	Letters,
	Symbols,
}

impl CharClass {
	/// All classes, in the order their alphabets are concatenated.
	pub const ALL: [CharClass; 3] = [CharClass::Digits, CharClass::Letters, CharClass::Symbols];

	/// Returns the fixed alphabet of this class.
	pub fn alphabet(self) -> &'static [u8] {
		match self {
			CharClass::Digits => DIGITS,
			CharClass::Letters => LETTERS,
			CharClass::Symbols => SYMBOLS,
		}
	}
}

/// Kind of a single character, as seen by the scorer.
///
/// Letters are split by case here, unlike `CharClass`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharKind {
	Lowercase,
	Uppercase,
	Digit,
	Symbol,
}

impl CharKind {
	/// Classifies a character.
	///
	/// Returns `None` for anything outside the four ASCII sets
	/// (whitespace, control characters, non-ASCII).
	pub fn of(c: char) -> Option<CharKind> {
		if c.is_ascii_lowercase() {
			Some(CharKind::Lowercase)
		} else if c.is_ascii_uppercase() {
			Some(CharKind::Uppercase)
		} else if c.is_ascii_digit() {
			Some(CharKind::Digit)
		} else if c.is_ascii_punctuation() {
			Some(CharKind::Symbol)
		} else {
			None
		}
	}
}

/// Builds the effective alphabet for a request.
///
/// Enabled alphabets are concatenated in digits, letters, symbols order.
/// The result is empty when no class is enabled.
pub fn build_alphabet(options: &GenerationOptions) -> Vec<u8> {
	let mut alphabet = Vec::new();
	for class in options.enabled_classes() {
		alphabet.extend_from_slice(class.alphabet());
	}
	alphabet
}
