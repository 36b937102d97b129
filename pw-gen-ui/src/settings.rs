use pw_gen_core::model::generation_options::{GenerationOptions, MAX_LENGTH, MIN_LENGTH};
use pw_gen_core::model::scorer::ScoreMode;
use serde::{Deserialize, Serialize};

/// User preferences restored between runs.
///
/// Only the form state is stored; generated passwords never are.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct UiSettings {
    pub options: GenerationOptions,
    pub score_mode: ScoreMode,
    pub options_open: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            options: GenerationOptions::default(),
            score_mode: ScoreMode::default(),
            options_open: true,
        }
    }
}

impl UiSettings {
    /// Loads settings from eframe storage, falling back to defaults.
    pub fn load(storage: Option<&dyn eframe::Storage>) -> Self {
        let settings: Self = storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        settings.sanitized()
    }

    /// Clamps values a hand-edited store could have pushed out of range.
    pub fn sanitized(mut self) -> Self {
        self.options.length = self.options.length.clamp(MIN_LENGTH, MAX_LENGTH);
        self
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    /// In-memory stand-in for eframe's file storage.
    #[derive(Default)]
    struct MemoryStorage(HashMap<String, String>);

    impl eframe::Storage for MemoryStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.0.insert(key.to_owned(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn missing_storage_gives_defaults() {
        assert_eq!(UiSettings::load(None), UiSettings::default());
    }

    #[test]
    fn sanitize_clamps_length() {
        let mut settings = UiSettings::default();
        settings.options.length = 99;
        assert_eq!(settings.sanitized().options.length, MAX_LENGTH);

        let mut settings = UiSettings::default();
        settings.options.length = 0;
        assert_eq!(settings.sanitized().options.length, MIN_LENGTH);
    }

    #[test]
    fn unreadable_storage_gives_defaults() {
        let mut storage = MemoryStorage::default();
        eframe::Storage::set_string(&mut storage, eframe::APP_KEY, "not ron {{{".to_owned());
        let storage: &dyn eframe::Storage = &storage;
        assert_eq!(UiSettings::load(Some(storage)), UiSettings::default());
    }

    #[test]
    fn saved_settings_are_restored() {
        let mut settings = UiSettings::default();
        settings.options.length = 17;
        settings.score_mode = ScoreMode::Round;
        settings.options_open = false;

        let mut storage = MemoryStorage::default();
        eframe::set_value(&mut storage, eframe::APP_KEY, &settings);
        let storage: &dyn eframe::Storage = &storage;
        assert_eq!(UiSettings::load(Some(storage)), settings);
    }
}
