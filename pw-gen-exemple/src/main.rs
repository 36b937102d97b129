use pw_gen_core::Error;
use pw_gen_core::model::generation_options::GenerationOptions;
use pw_gen_core::model::scorer::{ScoreMode, Scorer};
use pw_gen_core::model::session::Session;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Start from the same defaults as the desktop window:
    // 8 characters, digits and letters, no punctuation
    let mut options = GenerationOptions::default();

    // The session keeps only the last password and its score
    let mut session = Session::default();

    // Length must be between 5 and 20
    options.set_length(12)?;
    match options.set_length(40) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Length 40 is invalid: {e}"),
    }

    // Enable punctuation too
    options.include_symbols = true;

    for i in 0..5 {
        let generated = session.generate(&options)?;
        println!(
            "Generated password {}: {} (score {}, {})",
            i + 1,
            generated.password,
            generated.score,
            generated.score.band().label()
        );
    }

    // Scores are truncated by default; rounding is available
    let sample = "aaaaaaaaaaaaaaaaaaaa";
    println!(
        "'{sample}' scores {} truncated, {} rounded",
        Scorer::new(ScoreMode::Truncate).score_str(sample),
        Scorer::new(ScoreMode::Round).score_str(sample)
    );

    // Disabling every class is refused and keeps the previous result
    options.include_digits = false;
    options.include_letters = false;
    options.include_symbols = false;
    match session.generate(&options) {
        Ok(_) => println!("Should not happen"),
        Err(Error::InvalidOptions) => println!("Refused: {}", Error::InvalidOptions),
        Err(e) => return Err(e.into()),
    }
    if let Some(text) = session.clipboard_text() {
        println!("Still holding the last password: {text}");
    }

    Ok(())
}
