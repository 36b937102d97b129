use std::fmt;

use log::{debug, warn};
use rand::Rng;

use crate::error::{Error, Result};
use crate::model::charset::build_alphabet;
use crate::model::generation_options::{check_length, GenerationOptions};

/// A generated password.
///
/// Immutable once created; every character comes from the alphabet
/// of the request that produced it.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
	/// Returns the password text.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Number of characters.
	pub fn len(&self) -> usize {
		self.0.chars().count()
	}

	/// Returns true if the password has no characters.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl fmt::Display for Password {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

// Keeps generated secrets out of debug logs and panic messages.
impl fmt::Debug for Password {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Password(<{} chars>)", self.len())
	}
}

impl AsRef<str> for Password {
	fn as_ref(&self) -> &str {
		self.as_str()
	}
}

/// Uniform random password generator.
///
/// # Behavior
/// - Builds the effective alphabet from the enabled classes
/// - Draws each character independently and uniformly (with replacement)
/// - Does not guarantee that every enabled class shows up in the output
#[derive(Clone, Copy, Debug, Default)]
pub struct Generator;

impl Generator {
	/// Creates a generator.
	pub fn new() -> Self {
		Self
	}

	/// Generates a password using the thread-local RNG.
	///
	/// # Errors
	/// - `Error::InvalidOptions` if no class is enabled.
	/// - `Error::LengthOutOfRange` if `options.length` is outside `[5, 20]`.
	pub fn generate(&self, options: &GenerationOptions) -> Result<Password> {
		self.generate_with(options, &mut rand::rng())
	}

	/// Generates a password drawing from the given RNG.
	///
	/// Same contract as `generate`; useful with a seeded RNG for
	/// reproducible output.
	pub fn generate_with<R: Rng + ?Sized>(
		&self,
		options: &GenerationOptions,
		rng: &mut R,
	) -> Result<Password> {
		if !options.validate() {
			warn!("generation refused: no character class selected");
			return Err(Error::InvalidOptions);
		}
		check_length(options.length)?;

		let alphabet = build_alphabet(options);
		let password: String = (0..options.length)
			.map(|_| alphabet[rng.random_range(0..alphabet.len())] as char)
			.collect();

		debug!(
			"generated password of length {} from a {}-character alphabet",
			options.length,
			alphabet.len()
		);
		Ok(Password(password))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::rngs::StdRng;
	use rand::SeedableRng;

	fn digits_only(length: usize) -> GenerationOptions {
		GenerationOptions {
			length,
			include_digits: true,
			include_letters: false,
			include_symbols: false,
		}
	}

	#[test]
	fn digits_only_password() {
		let password = Generator::new().generate(&digits_only(5)).unwrap();
		assert_eq!(password.len(), 5);
		assert!(password.as_str().chars().all(|c| c.is_ascii_digit()));
	}

	#[test]
	fn no_class_is_refused() {
		let options = GenerationOptions {
			include_digits: false,
			include_letters: false,
			include_symbols: false,
			..GenerationOptions::default()
		};
		assert_eq!(Generator::new().generate(&options), Err(Error::InvalidOptions));
	}

	#[test]
	fn class_check_comes_before_length_check() {
		let options = GenerationOptions {
			length: 0,
			include_digits: false,
			include_letters: false,
			include_symbols: false,
		};
		assert_eq!(Generator::new().generate(&options), Err(Error::InvalidOptions));
	}

	#[test]
	fn out_of_range_length_is_refused() {
		let generator = Generator::new();
		assert!(matches!(
			generator.generate(&digits_only(4)),
			Err(Error::LengthOutOfRange { length: 4, .. })
		));
		assert!(matches!(
			generator.generate(&digits_only(21)),
			Err(Error::LengthOutOfRange { length: 21, .. })
		));
	}

	#[test]
	fn seeded_rng_is_reproducible() {
		let options = GenerationOptions { include_symbols: true, length: 20, ..Default::default() };
		let generator = Generator::new();
		let a = generator.generate_with(&options, &mut StdRng::seed_from_u64(7)).unwrap();
		let b = generator.generate_with(&options, &mut StdRng::seed_from_u64(7)).unwrap();
		assert_eq!(a, b);
	}

	#[test]
	fn debug_does_not_leak_text() {
		let password = Generator::new().generate(&digits_only(6)).unwrap();
		let debug = format!("{password:?}");
		assert_eq!(debug, "Password(<6 chars>)");
	}
}
