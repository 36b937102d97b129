use eframe::egui;

/// A titled block whose body can be shown or hidden.
///
/// Holds only its title and visibility; the body is drawn by the caller
/// on every frame it is open.
#[derive(Debug, Clone)]
pub struct ExpandableSection {
    title: String,
    open: bool,
}

impl ExpandableSection {
    pub fn new(title: impl Into<String>, open: bool) -> Self {
        Self { title: title.into(), open }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flips visibility of the body.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Draws the header and, if open, the body.
    ///
    /// Returns the body's output when it was drawn.
    pub fn show<R>(&mut self, ui: &mut egui::Ui, body: impl FnOnce(&mut egui::Ui) -> R) -> Option<R> {
        egui::Frame::group(ui.style())
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.strong(&self.title);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let icon = if self.open { "⏶" } else { "⏷" };
                        if ui.small_button(icon).clicked() {
                            self.toggle();
                        }
                    });
                });
                if self.open {
                    ui.separator();
                    Some(body(ui))
                } else {
                    None
                }
            })
            .inner
    }
}
