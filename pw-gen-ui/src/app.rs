use std::time::Duration;

use eframe::{egui, Frame};
use egui::Context;
use log::{info, warn};

use pw_gen_core::Error;
use pw_gen_core::model::generation_options::{MAX_LENGTH, MIN_LENGTH};
use pw_gen_core::model::scorer::ScoreMode;
use pw_gen_core::model::session::Session;

use crate::meter;
use crate::section::ExpandableSection;
use crate::settings::UiSettings;
use crate::toast::{ToastKind, Toasts};

const SHORT_TOAST: Duration = Duration::from_secs(2);
const LONG_TOAST: Duration = Duration::from_secs(5);

/// Window state (MUST persist between frames in egui).
pub struct PasswordUI {
    settings: UiSettings,
    session: Session,
    options_section: ExpandableSection,
    toasts: Toasts,
}

impl PasswordUI {
    /// Restores saved preferences, if any.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_settings(UiSettings::load(cc.storage))
    }

    fn with_settings(settings: UiSettings) -> Self {
        Self {
            session: Session::new(settings.score_mode),
            options_section: ExpandableSection::new("Options", settings.options_open),
            toasts: Toasts::default(),
            settings,
        }
    }

    /// Handles the Generate button.
    ///
    /// On refusal the current password and score stay on screen.
    fn on_generate(&mut self, now: f64) {
        match self.session.generate(&self.settings.options) {
            Ok(_) => {
                self.toasts.push(now, ToastKind::Success, "Generated!", "Password Generated.", SHORT_TOAST);
            }
            Err(Error::InvalidOptions) => {
                self.toasts.push(
                    now,
                    ToastKind::Warning,
                    "Caution!",
                    Error::InvalidOptions.to_string(),
                    LONG_TOAST,
                );
            }
            Err(e) => {
                warn!("generation failed: {e}");
                self.toasts.push(now, ToastKind::Warning, "Caution!", e.to_string(), LONG_TOAST);
            }
        }
    }

    /// Handles the Copy button, returning the text for the clipboard.
    fn on_copy(&mut self, now: f64) -> Option<String> {
        let text = self.session.clipboard_text()?.to_owned();
        info!("password copied to clipboard");
        self.toasts.push(now, ToastKind::Info, "Copied!", "Password copied to clipboard.", SHORT_TOAST);
        Some(text)
    }
}

impl eframe::App for PasswordUI {
    /// UI update loop (called every frame).
    fn update(&mut self, ctx: &Context, _: &mut Frame) {
        let now = ctx.input(|i| i.time);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(10.0);

            // Length
            ui.horizontal(|ui| {
                ui.label("Password Length:");
                ui.add(
                    egui::DragValue::new(&mut self.settings.options.length)
                        .range(MIN_LENGTH..=MAX_LENGTH)
                        .speed(1),
                );
            });
            ui.add_space(20.0);

            // Character classes
            let previous_mode = self.settings.score_mode;
            let settings = &mut self.settings;
            self.options_section.show(ui, |ui| {
                ui.checkbox(&mut settings.options.include_digits, "digits");
                ui.checkbox(&mut settings.options.include_letters, "alphabet");
                ui.checkbox(&mut settings.options.include_symbols, "characters");
                ui.separator();
                ui.horizontal(|ui| {
                    ui.label("Score");
                    ui.radio_value(&mut settings.score_mode, ScoreMode::Truncate, "truncate");
                    ui.radio_value(&mut settings.score_mode, ScoreMode::Round, "round");
                });
            });
            if self.settings.score_mode != previous_mode {
                self.session.set_score_mode(self.settings.score_mode);
            }

            ui.add_space(20.0);
            ui.vertical_centered(|ui| {
                if ui.add_sized([100.0, 30.0], egui::Button::new("Generate")).clicked() {
                    self.on_generate(now);
                }
            });
            ui.add_space(15.0);
            ui.separator();

            // Result
            let mut copy_clicked = false;
            if let Some(generated) = self.session.last() {
                ui.vertical_centered(|ui| {
                    ui.add_space(20.0);
                    ui.label(egui::RichText::new(generated.password.as_str()).monospace().size(18.0));
                    ui.add_space(20.0);
                    copy_clicked = ui.add_sized([100.0, 24.0], egui::Button::new("Copy")).clicked();
                    ui.add_space(4.0);
                    meter::score_meter(ui, generated.score);
                    ui.label("Secure Score in %");
                });
            }
            if copy_clicked {
                if let Some(text) = self.on_copy(now) {
                    ctx.copy_text(text);
                }
            }
        });

        self.toasts.show(ctx);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.settings.options_open = self.options_section.is_open();
        eframe::set_value(storage, eframe::APP_KEY, &self.settings);
    }
}
