use eframe::egui;

use crate::app::PasswordUI;

mod app;
mod meter;
mod section;
mod settings;
mod toast;

/// Application entry point.
fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Password Generator")
            .with_inner_size([360.0, 560.0])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "Password Generator",
        options,
        Box::new(|cc| Ok(Box::new(PasswordUI::new(cc)))),
    )
}
