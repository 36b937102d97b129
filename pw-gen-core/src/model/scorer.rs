use std::collections::HashSet;
use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::model::charset::CharKind;
use crate::model::generator::Password;

/// Weight of the length component.
const LENGTH_WEIGHT: f64 = 0.3;

/// Weight of the character-kind diversity component.
const COMPLEXITY_WEIGHT: f64 = 0.7;

/// Length at which the length component saturates.
const FULL_LENGTH: f64 = 20.0;

/// How a fractional strength is turned into an integer score.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScoreMode {
	/// Keeps the integer part, never rounding up (47.5 -> 47, 64.99.. -> 64).
	///
	/// Reproduces the historical scores shown by the generator.
	#[default]
	Truncate,

	/// Rounds to the nearest integer, halves away from zero (47.5 -> 48).
	Round,
}

/// Coarse rating of a score, used to colour the meter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreBand {
	/// Exactly 100.
	Excellent,
	/// 76 to 99.
	Strong,
	/// 51 to 75.
	Fair,
	/// 50 or less.
	Weak,
}

impl ScoreBand {
	/// Label shown next to the score.
	pub fn label(self) -> &'static str {
		match self {
			ScoreBand::Excellent => "excellent",
			ScoreBand::Strong => "strong",
			ScoreBand::Fair => "fair",
			ScoreBand::Weak => "weak",
		}
	}
}

/// A security score in `[0, 100]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(u8);

impl Score {
	/// Highest possible score.
	pub const MAX: Score = Score(100);

	/// Returns the score value.
	pub fn value(self) -> u8 {
		self.0
	}

	/// Returns the band this score falls into.
	pub fn band(self) -> ScoreBand {
		match self.0 {
			100.. => ScoreBand::Excellent,
			76..=99 => ScoreBand::Strong,
			51..=75 => ScoreBand::Fair,
			_ => ScoreBand::Weak,
		}
	}
}

impl fmt::Display for Score {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// Heuristic password scorer.
///
/// # Algorithm
/// - `length_score = min(chars / 20, 1)`
/// - `complexity` = fraction of the four kinds (lower, upper, digit, symbol) present
/// - `strength = (0.3 * length_score + 0.7 * complexity) * 100`, capped at 100
/// - converted to an integer according to `mode`
///
/// Total and deterministic: the same text always yields the same score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Scorer {
	pub mode: ScoreMode,
}

impl Scorer {
	/// Creates a scorer using the given conversion mode.
	pub fn new(mode: ScoreMode) -> Self {
		Self { mode }
	}

	/// Computes the fractional strength of `password`, in `[0.0, 100.0]`.
	pub fn strength(password: &str) -> f64 {
		let length = password.chars().count() as f64;
		let length_score = (length / FULL_LENGTH).min(1.0);

		let kinds: HashSet<CharKind> = password.chars().filter_map(CharKind::of).collect();
		let complexity = kinds.len() as f64 / 4.0;

		let strength = (LENGTH_WEIGHT * length_score + COMPLEXITY_WEIGHT * complexity) * 100.0;
		strength.min(100.0)
	}

	/// Scores an arbitrary string.
	pub fn score_str(&self, password: &str) -> Score {
		let strength = Self::strength(password);
		let value = if strength == 100.0 {
			100
		} else {
			match self.mode {
				ScoreMode::Truncate => strength.trunc() as u8,
				ScoreMode::Round => strength.round() as u8,
			}
		};
		debug!("strength {strength} scored {value} ({:?})", self.mode);
		Score(value)
	}

	/// Scores a generated password.
	pub fn score(&self, password: &Password) -> Score {
		self.score_str(password.as_str())
	}
}

/// Scores a generated password with the default (truncating) scorer.
pub fn score(password: &Password) -> Score {
	Scorer::default().score(password)
}
