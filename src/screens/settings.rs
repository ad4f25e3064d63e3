use crate::app::studio_app::MusicStudioApp;
use crate::ui_components::colors;
use eframe::egui::{self, RichText};

/// Settings view: account details, playback volume, and the resolved
/// backend addresses (read-only; set via environment).
pub fn render_settings_view(app: &mut MusicStudioApp, ui: &mut egui::Ui) {
    let profile = match app.auth.session.as_ref() {
        Some(session) => session.profile.clone(),
        None => return,
    };

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.add_space(20.0);
        ui.horizontal(|ui| {
            ui.add_space(20.0);
            ui.label(
                RichText::new("Settings")
                    .size(24.0)
                    .color(colors::TEXT_PRIMARY)
                    .strong(),
            );
        });
        ui.add_space(16.0);

        section(ui, "Account", |ui| {
            labeled_row(ui, "Name", &profile.name);
            labeled_row(ui, "Email", &profile.email);
            labeled_row(ui, "Sign-in method", &profile.provider);
            if !profile.created_at.is_empty() {
                labeled_row(ui, "Member since", &profile.created_at);
            }
            ui.add_space(10.0);
            ui.horizontal(|ui| {
                if ui.button("Refresh profile").clicked() {
                    app.refresh_profile();
                }
                ui.add_space(10.0);
                if ui
                    .button(RichText::new("Log out").color(colors::DANGER))
                    .clicked()
                {
                    app.logout();
                }
            });
        });

        ui.add_space(16.0);
        section(ui, "Playback", |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Volume")
                        .size(13.0)
                        .color(colors::TEXT_SECONDARY),
                );
                let mut volume = app.playback.volume;
                if ui
                    .add(egui::Slider::new(&mut volume, 0.0..=1.0).show_value(false))
                    .changed()
                {
                    app.playback.set_volume(volume);
                }
                let mute_label = if app.playback.is_muted { "🔇" } else { "🔊" };
                if ui.button(mute_label).clicked() {
                    app.playback.toggle_mute();
                }
            });
        });

        ui.add_space(16.0);
        section(ui, "Connection", |ui| {
            labeled_row(ui, "Generation backend", &app.config.backend_url);
            labeled_row(ui, "Catalog API", &app.config.catalog_url);
            let credential = if app.config.catalog_client_id.is_some() {
                "configured"
            } else {
                "missing (genre stats unavailable)"
            };
            labeled_row(ui, "Catalog credential", credential);
        });

        ui.add_space(24.0);
    });
}

fn section(ui: &mut egui::Ui, title: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    ui.horizontal(|ui| {
        ui.add_space(20.0);
        egui::Frame::default()
            .fill(colors::BG_CARD)
            .corner_radius(egui::CornerRadius::same(8))
            .inner_margin(egui::Margin::same(16))
            .show(ui, |ui| {
                ui.set_width(460.0);
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(title)
                            .size(16.0)
                            .color(colors::TEXT_PRIMARY)
                            .strong(),
                    );
                    ui.add_space(8.0);
                    add_contents(ui);
                });
            });
    });
}

fn labeled_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(format!("{}:", label))
                .size(13.0)
                .color(colors::TEXT_SECONDARY),
        );
        ui.label(RichText::new(value).size(13.0).color(colors::TEXT_PRIMARY));
    });
}
