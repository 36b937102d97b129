use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui;
use egui::{Color32, Pos2, Stroke};
use pw_gen_core::model::scorer::{Score, ScoreBand};

const METER_SIZE: f32 = 150.0;
const TRACK_WIDTH: f32 = 10.0;
const ARC_SEGMENTS: usize = 96;

/// Accent colour of a score band.
pub fn band_color(band: ScoreBand, visuals: &egui::Visuals) -> Color32 {
    match band {
        ScoreBand::Excellent => Color32::from_rgb(0x5c, 0xb8, 0x5c),
        ScoreBand::Strong => Color32::LIGHT_GRAY,
        ScoreBand::Fair => visuals.warn_fg_color,
        ScoreBand::Weak => visuals.error_fg_color,
    }
}

/// Points of an arc starting at twelve o'clock, running clockwise.
///
/// `fraction` is clamped to `[0, 1]`; an empty arc has no points.
fn arc_points(center: Pos2, radius: f32, fraction: f32) -> Vec<Pos2> {
    let fraction = fraction.clamp(0.0, 1.0);
    let segments = (ARC_SEGMENTS as f32 * fraction).ceil() as usize;
    if segments == 0 {
        return Vec::new();
    }
    (0..=segments)
        .map(|i| {
            let angle = -FRAC_PI_2 + TAU * fraction * i as f32 / segments as f32;
            center + radius * egui::vec2(angle.cos(), angle.sin())
        })
        .collect()
}

/// Read-only circular meter showing a score out of 100.
pub fn score_meter(ui: &mut egui::Ui, score: Score) -> egui::Response {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(METER_SIZE, METER_SIZE), egui::Sense::hover());

    if ui.is_rect_visible(rect) {
        let visuals = ui.visuals();
        let accent = band_color(score.band(), visuals);
        let center = rect.center();
        let radius = rect.width() / 2.0 - TRACK_WIDTH;
        let painter = ui.painter();

        painter.circle_stroke(center, radius, Stroke::new(TRACK_WIDTH, visuals.widgets.inactive.bg_fill));
        let arc = arc_points(center, radius, f32::from(score.value()) / 100.0);
        if arc.len() > 1 {
            painter.add(egui::Shape::line(arc, Stroke::new(TRACK_WIDTH, accent)));
        }
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            format!("{}%", score.value()),
            egui::FontId::proportional(28.0),
            accent,
        );
    }

    response.on_hover_text(format!("Rated {}", score.band().label()))
}
