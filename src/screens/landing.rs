use crate::app::studio_app::MusicStudioApp;
use crate::state::ui_state::Screen;
use crate::ui_components::{colors, helpers};
use eframe::egui::{self, RichText};

/// Landing view shown before sign-in: hero pitch plus the entry point to
/// the login screen.
pub fn render_landing_view(app: &mut MusicStudioApp, ui: &mut egui::Ui) {
    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(70.0);
            helpers::gradient_rect(ui, egui::vec2(96.0, 96.0), "blue-violet");
            ui.add_space(18.0);
            ui.label(
                RichText::new("MuseRS")
                    .size(40.0)
                    .color(colors::TEXT_PRIMARY)
                    .strong(),
            );
            ui.add_space(6.0);
            ui.label(
                RichText::new("Describe it. Hear it. Keep it.")
                    .size(17.0)
                    .color(colors::TEXT_SECONDARY),
            );

            ui.add_space(30.0);
            if ui
                .add_sized(
                    egui::vec2(220.0, 42.0),
                    egui::Button::new(RichText::new("Get started").size(16.0)),
                )
                .clicked()
            {
                app.ui.screen = Screen::Login;
            }

            ui.add_space(50.0);
            ui.horizontal_wrapped(|ui| {
                feature_card(
                    ui,
                    "🎵",
                    "Generate music",
                    "Type a description and get a unique clip in seconds.",
                );
                feature_card(
                    ui,
                    "🔍",
                    "Browse the catalog",
                    "Search thousands of tracks and filter as you type.",
                );
                feature_card(
                    ui,
                    "♥",
                    "Build your library",
                    "Favorites and listening history, kept on this machine.",
                );
            });
            ui.add_space(40.0);
        });
    });
}

fn feature_card(ui: &mut egui::Ui, icon: &str, title: &str, body: &str) {
    egui::Frame::default()
        .fill(colors::BG_CARD)
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.set_width(230.0);
            ui.vertical(|ui| {
                ui.label(RichText::new(icon).size(26.0));
                ui.add_space(6.0);
                ui.label(
                    RichText::new(title)
                        .size(16.0)
                        .color(colors::TEXT_PRIMARY)
                        .strong(),
                );
                ui.add_space(4.0);
                ui.label(RichText::new(body).size(13.0).color(colors::TEXT_SECONDARY));
            });
        });
}
