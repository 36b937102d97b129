use std::time::Duration;

use eframe::egui;
use egui::{Color32, Context};

/// Severity of a notification; selects its accent colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
}

impl ToastKind {
    fn color(self, visuals: &egui::Visuals) -> Color32 {
        match self {
            ToastKind::Info => visuals.hyperlink_color,
            ToastKind::Success => Color32::from_rgb(0x5c, 0xb8, 0x5c),
            ToastKind::Warning => visuals.warn_fg_color,
        }
    }
}

/// A transient notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
    /// Frame time (seconds) after which the toast is dropped.
    expires_at: f64,
}

/// Queue of notifications shown at the top of the window.
///
/// Time is egui's input time in seconds, so expiry follows frames and
/// tests can drive it with plain numbers.
#[derive(Debug, Default)]
pub struct Toasts {
    items: Vec<Toast>,
}

impl Toasts {
    /// Queues a notification visible for `duration` from `now`.
    pub fn push(
        &mut self,
        now: f64,
        kind: ToastKind,
        title: impl Into<String>,
        message: impl Into<String>,
        duration: Duration,
    ) {
        self.items.push(Toast {
            kind,
            title: title.into(),
            message: message.into(),
            expires_at: now + duration.as_secs_f64(),
        });
    }

    /// Currently queued notifications, oldest first.
    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    /// Drops notifications that have expired at `now`.
    pub fn prune(&mut self, now: f64) {
        self.items.retain(|toast| toast.expires_at > now);
    }

    /// Time until the next notification expires.
    pub fn next_expiry(&self, now: f64) -> Option<Duration> {
        self.items
            .iter()
            .map(|toast| toast.expires_at - now)
            .filter(|remaining| *remaining > 0.0)
            .min_by(f64::total_cmp)
            .map(Duration::from_secs_f64)
    }

    /// Prunes and draws the queue, scheduling a repaint for the next expiry.
    pub fn show(&mut self, ctx: &Context) {
        let now = ctx.input(|i| i.time);
        self.prune(now);
        if self.items.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("toasts"))
            .anchor(egui::Align2::CENTER_TOP, [0.0, 12.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for toast in self.items() {
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.set_min_width(220.0);
                        let accent = toast.kind.color(ui.visuals());
                        ui.colored_label(accent, egui::RichText::new(&toast.title).strong());
                        ui.label(&toast.message);
                    });
                    ui.add_space(4.0);
                }
            });

        if let Some(wait) = self.next_expiry(now) {
            ctx.request_repaint_after(wait);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_expire_in_order() {
        let mut toasts = Toasts::default();
        toasts.push(0.0, ToastKind::Success, "Generated!", "Password Generated.", Duration::from_secs(2));
        toasts.push(1.0, ToastKind::Warning, "Caution!", "At least one option must be selected.", Duration::from_secs(5));

        toasts.prune(1.5);
        assert_eq!(toasts.items().len(), 2);
        assert_eq!(toasts.next_expiry(1.5), Some(Duration::from_secs_f64(0.5)));

        toasts.prune(2.0);
        assert_eq!(toasts.items().len(), 1);
        assert_eq!(toasts.items()[0].title, "Caution!");

        toasts.prune(6.0);
        assert!(toasts.items().is_empty());
        assert_eq!(toasts.next_expiry(6.0), None);
    }
}
