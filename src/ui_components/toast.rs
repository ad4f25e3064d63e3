//! Transient corner notifications.

use egui::{Align2, Color32, RichText};
use std::time::{Duration, Instant};

const TOAST_LIFETIME: Duration = Duration::from_secs(3);
const MAX_VISIBLE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

struct Toast {
    message: String,
    kind: ToastKind,
    created: Instant,
}

#[derive(Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
}

impl ToastManager {
    pub fn success(&mut self, message: impl Into<String>) {
        self.push(message.into(), ToastKind::Success);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(message.into(), ToastKind::Error);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(message.into(), ToastKind::Info);
    }

    fn push(&mut self, message: String, kind: ToastKind) {
        self.toasts.push(Toast {
            message,
            kind,
            created: Instant::now(),
        });
        if self.toasts.len() > MAX_VISIBLE {
            self.toasts.remove(0);
        }
    }

    /// Draw active toasts and drop expired ones. Call once per frame.
    pub fn show(&mut self, ctx: &egui::Context) {
        self.toasts.retain(|t| t.created.elapsed() < TOAST_LIFETIME);
        if self.toasts.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("toast_overlay"))
            .anchor(Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -80.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for toast in &self.toasts {
                    let (icon, color) = match toast.kind {
                        ToastKind::Success => ("✔", Color32::from_rgb(78, 205, 196)),
                        ToastKind::Error => ("✖", Color32::from_rgb(255, 107, 107)),
                        ToastKind::Info => ("ℹ", super::colors::ACCENT),
                    };
                    egui::Frame::default()
                        .fill(super::colors::BG_CARD)
                        .corner_radius(egui::CornerRadius::same(6))
                        .inner_margin(egui::Margin::same(10))
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(icon).color(color));
                                ui.label(
                                    RichText::new(&toast.message)
                                        .color(super::colors::TEXT_PRIMARY),
                                );
                            });
                        });
                    ui.add_space(6.0);
                }
            });

        // Keep repainting while toasts are fading out
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}
