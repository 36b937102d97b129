use log::info;
use rand::Rng;

use crate::error::Result;
use crate::model::generation_options::GenerationOptions;
use crate::model::generator::{Generator, Password};
use crate::model::scorer::{Score, ScoreMode, Scorer};

/// A password and the score computed for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generated {
	pub password: Password,
	pub score: Score,
}

/// Controller owning the single live result of a front-end.
///
/// # Responsibilities
/// - Run validate, generate and score in sequence for each request
/// - Replace the previous result only when the whole request succeeds
/// - Expose the current password for copying
///
/// # Invariants
/// - At most one `Generated` is held at a time
/// - A refused request leaves `last` exactly as it was
#[derive(Debug, Default)]
pub struct Session {
	generator: Generator,
	scorer: Scorer,
	last: Option<Generated>,
}

impl Session {
	/// Creates an empty session scoring with `mode`.
	pub fn new(mode: ScoreMode) -> Self {
		Self {
			generator: Generator::new(),
			scorer: Scorer::new(mode),
			last: None,
		}
	}

	/// Returns the scoring mode in use.
	pub fn score_mode(&self) -> ScoreMode {
		self.scorer.mode
	}

	/// Changes the scoring mode and rescores the current result, if any.
	pub fn set_score_mode(&mut self, mode: ScoreMode) {
		self.scorer.mode = mode;
		if let Some(last) = &mut self.last {
			last.score = self.scorer.score(&last.password);
		}
	}

	/// Handles a generation request using the thread-local RNG.
	///
	/// # Errors
	/// Propagates the generator's errors; the previous result is kept.
	pub fn generate(&mut self, options: &GenerationOptions) -> Result<&Generated> {
		self.generate_with(options, &mut rand::rng())
	}

	/// Handles a generation request drawing from the given RNG.
	pub fn generate_with<R: Rng + ?Sized>(
		&mut self,
		options: &GenerationOptions,
		rng: &mut R,
	) -> Result<&Generated> {
		let password = self.generator.generate_with(options, rng)?;
		let score = self.scorer.score(&password);
		info!("generated a {}-character password, score {}", password.len(), score);
		let generated = self.last.insert(Generated { password, score });
		Ok(&*generated)
	}

	/// Returns the current result.
	pub fn last(&self) -> Option<&Generated> {
		self.last.as_ref()
	}

	/// Text to put on the clipboard, if a password exists.
	pub fn clipboard_text(&self) -> Option<&str> {
		self.last.as_ref().map(|generated| generated.password.as_str())
	}

	/// Drops the current result.
	pub fn clear(&mut self) {
		self.last = None;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::Error;

	#[test]
	fn starts_empty() {
		let session = Session::default();
		assert!(session.last().is_none());
		assert!(session.clipboard_text().is_none());
		assert_eq!(session.score_mode(), ScoreMode::Truncate);
	}

	#[test]
	fn refused_request_keeps_previous_result() {
		let mut session = Session::default();
		let first = session.generate(&GenerationOptions::default()).unwrap().clone();

		let none = GenerationOptions {
			include_digits: false,
			include_letters: false,
			include_symbols: false,
			..GenerationOptions::default()
		};
		assert_eq!(session.generate(&none).unwrap_err(), Error::InvalidOptions);
		assert_eq!(session.last(), Some(&first));
		assert_eq!(session.clipboard_text(), Some(first.password.as_str()));
	}

	#[test]
	fn new_request_replaces_result() {
		let mut session = Session::default();
		session.generate(&GenerationOptions::default()).unwrap();
		let options = GenerationOptions { length: 20, ..GenerationOptions::default() };
		let second = session.generate(&options).unwrap().clone();
		assert_eq!(second.password.len(), 20);
		assert_eq!(session.last(), Some(&second));
	}

	#[test]
	fn changing_mode_rescores() {
		let mut session = Session::default();
		let options = GenerationOptions {
			length: 20,
			include_digits: false,
			include_letters: true,
			include_symbols: false,
		};
		let password = session.generate(&options).unwrap().password.clone();
		session.set_score_mode(ScoreMode::Round);
		let expected = Scorer::new(ScoreMode::Round).score(&password);
		assert_eq!(session.last().map(|g| g.score), Some(expected));
	}

	#[test]
	fn clear_drops_result() {
		let mut session = Session::default();
		session.generate(&GenerationOptions::default()).unwrap();
		session.clear();
		assert!(session.last().is_none());
	}
}
