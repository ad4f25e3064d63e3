//! Reusable render helpers shared by the screens.

use super::colors;
use crate::models::Track;
use eframe::egui::{self, Color32, RichText};

/// Interaction reported by a track row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackRowAction {
    TogglePlay,
    ToggleFavorite,
    Share,
}

/// Paint a rect with a horizontal two-stop gradient resolved from a token.
pub fn gradient_rect(ui: &mut egui::Ui, size: egui::Vec2, token: &str) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::hover());
    if ui.is_rect_visible(rect) {
        let (start, end) = colors::gradient(token);
        let mut mesh = egui::Mesh::default();
        let idx = mesh.vertices.len() as u32;
        mesh.colored_vertex(rect.left_top(), start);
        mesh.colored_vertex(rect.right_top(), end);
        mesh.colored_vertex(rect.right_bottom(), end);
        mesh.colored_vertex(rect.left_bottom(), start);
        mesh.add_triangle(idx, idx + 1, idx + 2);
        mesh.add_triangle(idx, idx + 2, idx + 3);
        ui.painter().add(egui::Shape::mesh(mesh));
    }
    response
}

/// One track row: gradient cover, title/artist, duration, play and heart
/// controls. Returns the action the user took this frame, if any.
pub fn render_track_row(
    ui: &mut egui::Ui,
    track: &Track,
    is_playing: bool,
    is_loading: bool,
    is_favorite: bool,
) -> Option<TrackRowAction> {
    let mut action = None;

    egui::Frame::default()
        .fill(colors::BG_CARD)
        .corner_radius(egui::CornerRadius::same(6))
        .inner_margin(egui::Margin::same(8))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                gradient_rect(ui, egui::vec2(44.0, 44.0), &track.color);
                ui.add_space(10.0);

                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(truncate_text(&track.title, 48))
                            .size(15.0)
                            .color(colors::TEXT_PRIMARY)
                            .strong(),
                    );
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(&track.artist)
                                .size(12.0)
                                .color(colors::TEXT_SECONDARY),
                        );
                        if !track.plays.is_empty() {
                            ui.label(
                                RichText::new(format!("· {} plays", track.plays))
                                    .size(12.0)
                                    .color(colors::TEXT_SECONDARY),
                            );
                        }
                    });
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if is_loading {
                        ui.spinner();
                    } else {
                        let play_label = if is_playing { "⏹" } else { "▶" };
                        if ui.button(RichText::new(play_label).size(16.0)).clicked() {
                            action = Some(TrackRowAction::TogglePlay);
                        }
                    }

                    let heart = if is_favorite { "♥" } else { "♡" };
                    let heart_color = if is_favorite {
                        colors::DANGER
                    } else {
                        colors::TEXT_SECONDARY
                    };
                    if ui
                        .button(RichText::new(heart).size(16.0).color(heart_color))
                        .clicked()
                    {
                        action = Some(TrackRowAction::ToggleFavorite);
                    }

                    if !track.audio_url.is_empty()
                        && ui
                            .button(RichText::new("🔗").size(14.0))
                            .on_hover_text("Copy track link")
                            .clicked()
                    {
                        action = Some(TrackRowAction::Share);
                    }

                    ui.label(
                        RichText::new(&track.duration)
                            .size(12.0)
                            .color(colors::TEXT_SECONDARY),
                    );
                });
            });
        });

    action
}

/// Centered spinner with a caption.
pub fn loading_state(ui: &mut egui::Ui, message: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        ui.spinner();
        ui.add_space(10.0);
        ui.label(RichText::new(message).size(15.0).color(Color32::GRAY));
    });
}

/// Explicit empty state, visually distinct from loading and error.
pub fn empty_state(ui: &mut egui::Ui, icon: &str, title: &str, subtitle: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        ui.label(RichText::new(icon).size(56.0).color(Color32::GRAY));
        ui.add_space(12.0);
        ui.label(RichText::new(title).size(19.0).color(Color32::GRAY));
        if !subtitle.is_empty() {
            ui.add_space(8.0);
            ui.label(RichText::new(subtitle).size(13.0).color(Color32::DARK_GRAY));
        }
    });
}

/// Error state with a manual retry button. Returns true when retry was
/// clicked.
pub fn error_state(ui: &mut egui::Ui, message: &str) -> bool {
    let mut retry = false;
    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        ui.label(RichText::new("⚠").size(44.0).color(colors::DANGER));
        ui.add_space(10.0);
        ui.label(RichText::new(message).size(15.0).color(colors::TEXT_PRIMARY));
        ui.add_space(12.0);
        if ui.button(RichText::new("Retry").size(14.0)).clicked() {
            retry = true;
        }
    });
    retry
}

/// Dashboard stat card: a big number with a caption underneath.
pub fn stat_card(ui: &mut egui::Ui, label: &str, value: &str) {
    egui::Frame::default()
        .fill(colors::BG_CARD)
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::same(14))
        .show(ui, |ui| {
            ui.set_min_width(120.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(value)
                        .size(24.0)
                        .color(colors::ACCENT)
                        .strong(),
                );
                ui.label(RichText::new(label).size(12.0).color(colors::TEXT_SECONDARY));
            });
        });
}

/// How many fixed-width cards fit per row, and the side padding that
/// centers them.
pub fn calculate_grid_layout(available_width: f32, card_width: f32, spacing: f32) -> (usize, f32) {
    let per_row = ((available_width + spacing) / (card_width + spacing))
        .floor()
        .max(1.0) as usize;
    let used = per_row as f32 * card_width + (per_row.saturating_sub(1)) as f32 * spacing;
    let padding = ((available_width - used) / 2.0).max(0.0);
    (per_row, padding)
}

/// Truncate for display, appending an ellipsis when text was cut.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_layout_always_fits_at_least_one_card() {
        let (per_row, padding) = calculate_grid_layout(100.0, 220.0, 15.0);
        assert_eq!(per_row, 1);
        assert_eq!(padding, 0.0);
    }

    #[test]
    fn grid_layout_centers_leftover_space() {
        let (per_row, padding) = calculate_grid_layout(700.0, 220.0, 15.0);
        assert_eq!(per_row, 3);
        // 3 cards + 2 gaps = 690; 10 left over, 5 each side
        assert!((padding - 5.0).abs() < 0.01);
    }

    #[test]
    fn truncate_appends_ellipsis_only_when_cut() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("a very long title", 8), "a very …");
    }
}
