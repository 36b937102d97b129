//! Property-based tests for the generator and the scorer.

use proptest::prelude::*;
use pw_gen_core::model::charset::build_alphabet;
use pw_gen_core::model::generation_options::{GenerationOptions, MAX_LENGTH, MIN_LENGTH};
use pw_gen_core::model::generator::Generator;
use pw_gen_core::model::scorer::{ScoreMode, Scorer};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn valid_options() -> impl Strategy<Value = GenerationOptions> {
	(MIN_LENGTH..=MAX_LENGTH, any::<bool>(), any::<bool>(), any::<bool>())
		.prop_filter("at least one class", |(_, d, l, s)| *d || *l || *s)
		.prop_map(|(length, include_digits, include_letters, include_symbols)| GenerationOptions {
			length,
			include_digits,
			include_letters,
			include_symbols,
		})
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(64))]

	#[test]
	fn generated_length_matches_request(options in valid_options(), seed in any::<u64>()) {
		let mut rng = StdRng::seed_from_u64(seed);
		let password = Generator::new().generate_with(&options, &mut rng).unwrap();
		prop_assert_eq!(password.len(), options.length);
	}

	#[test]
	fn generated_chars_come_from_enabled_classes(options in valid_options(), seed in any::<u64>()) {
		let alphabet = build_alphabet(&options);
		let mut rng = StdRng::seed_from_u64(seed);
		let password = Generator::new().generate_with(&options, &mut rng).unwrap();
		for b in password.as_str().bytes() {
			prop_assert!(alphabet.contains(&b), "unexpected byte {}", b);
		}
	}

	#[test]
	fn score_is_bounded_and_deterministic(text in ".{0,40}") {
		for mode in [ScoreMode::Truncate, ScoreMode::Round] {
			let scorer = Scorer::new(mode);
			let first = scorer.score_str(&text);
			prop_assert!(first.value() <= 100);
			prop_assert_eq!(first, scorer.score_str(&text));
		}
	}

	#[test]
	fn truncation_never_exceeds_rounding(text in "[a-zA-Z0-9!-/]{0,30}") {
		let truncated = Scorer::new(ScoreMode::Truncate).score_str(&text);
		let rounded = Scorer::new(ScoreMode::Round).score_str(&text);
		prop_assert!(truncated <= rounded);
	}
}
