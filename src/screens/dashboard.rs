use crate::app::studio_app::MusicStudioApp;
use crate::models::{PlayEvent, Radio, Track};
use crate::ui_components::{colors, helpers};
use crate::utils::formatting::format_play_count;
use eframe::egui::{self, RichText};

/// Dashboard view: profile stats, top catalog genres, curated radios, and
/// the user's most recent listens.
pub fn render_dashboard_view(app: &mut MusicStudioApp, ui: &mut egui::Ui) {
    if !app.content.dashboard_fetch_done {
        app.fetch_dashboard();
        app.content.dashboard_fetch_done = true;
    }

    let profile = match app.auth.session.as_ref() {
        Some(session) => session.profile.clone(),
        None => return,
    };

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.add_space(20.0);
        ui.horizontal(|ui| {
            ui.add_space(20.0);
            ui.label(
                RichText::new(format!("Good to see you, {}", profile.name))
                    .size(24.0)
                    .color(colors::TEXT_PRIMARY)
                    .strong(),
            );
        });
        ui.add_space(16.0);

        // Stats
        ui.horizontal(|ui| {
            ui.add_space(20.0);
            helpers::stat_card(ui, "Tracks generated", &profile.tracks_generated.to_string());
            ui.add_space(10.0);
            helpers::stat_card(ui, "Total plays", &profile.total_plays.to_string());
            ui.add_space(10.0);
            helpers::stat_card(ui, "Hours created", &format!("{:.2}", profile.hours_created));
            ui.add_space(10.0);
            helpers::stat_card(ui, "Favorites", &profile.favorites.len().to_string());
        });

        ui.add_space(26.0);
        section_title(ui, "Top genres");
        render_genres(app, ui);

        ui.add_space(26.0);
        section_title(ui, "Radio stations");
        let radio_to_play = render_radios(app, ui);
        if let Some(radio) = radio_to_play {
            app.play_radio(&radio);
        }

        ui.add_space(26.0);
        section_title(ui, "Recent listens");
        let replay = render_recent_plays(app, ui);
        if let Some(event) = replay {
            app.replay_event(&event);
        }

        ui.add_space(30.0);
    });
}

fn section_title(ui: &mut egui::Ui, title: &str) {
    ui.horizontal(|ui| {
        ui.add_space(20.0);
        ui.label(
            RichText::new(title)
                .size(18.0)
                .color(colors::TEXT_PRIMARY)
                .strong(),
        );
    });
    ui.add_space(10.0);
}

fn render_genres(app: &mut MusicStudioApp, ui: &mut egui::Ui) {
    if app.content.genres_loading && app.content.genres.is_empty() {
        ui.horizontal(|ui| {
            ui.add_space(20.0);
            ui.spinner();
        });
        return;
    }
    if let Some(error) = app.content.genres_error.clone() {
        ui.horizontal(|ui| {
            ui.add_space(20.0);
            ui.label(RichText::new(&error).size(13.0).color(colors::DANGER));
            if ui.button("Retry").clicked() {
                app.fetch_genres();
            }
        });
        return;
    }
    if app.content.genres.is_empty() {
        ui.horizontal(|ui| {
            ui.add_space(20.0);
            ui.label(
                RichText::new("No genre data yet")
                    .size(13.0)
                    .color(colors::TEXT_SECONDARY),
            );
        });
        return;
    }

    ui.horizontal(|ui| {
        ui.add_space(20.0);
        for genre in &app.content.genres {
            egui::Frame::default()
                .fill(colors::BG_CARD)
                .corner_radius(egui::CornerRadius::same(8))
                .inner_margin(egui::Margin::same(10))
                .show(ui, |ui| {
                    ui.vertical(|ui| {
                        helpers::gradient_rect(ui, egui::vec2(130.0, 70.0), &genre.color);
                        ui.add_space(6.0);
                        ui.label(
                            RichText::new(&genre.name)
                                .size(14.0)
                                .color(colors::TEXT_PRIMARY)
                                .strong(),
                        );
                        ui.label(
                            RichText::new(format!("{} tracks", format_play_count(genre.tracks)))
                                .size(12.0)
                                .color(colors::TEXT_SECONDARY),
                        );
                    });
                });
            ui.add_space(10.0);
        }
    });
}

fn render_radios(app: &mut MusicStudioApp, ui: &mut egui::Ui) -> Option<Radio> {
    if app.content.radios_loading && app.content.radios.is_empty() {
        ui.horizontal(|ui| {
            ui.add_space(20.0);
            ui.spinner();
        });
        return None;
    }
    if let Some(error) = app.content.radios_error.clone() {
        ui.horizontal(|ui| {
            ui.add_space(20.0);
            ui.label(RichText::new(&error).size(13.0).color(colors::DANGER));
            if ui.button("Retry").clicked() {
                app.fetch_radios();
            }
        });
        return None;
    }
    if app.content.radios.is_empty() {
        ui.horizontal(|ui| {
            ui.add_space(20.0);
            ui.label(
                RichText::new("No stations available")
                    .size(13.0)
                    .color(colors::TEXT_SECONDARY),
            );
        });
        return None;
    }

    let mut to_play = None;
    for radio in &app.content.radios {
        let radio_track_id = MusicStudioApp::radio_track_id(radio);
        let is_playing = app.playback.state.is_playing(&radio_track_id);
        let is_loading = app.playback.state.is_loading(&radio_track_id);
        ui.horizontal(|ui| {
            ui.add_space(20.0);
            egui::Frame::default()
                .fill(colors::BG_CARD)
                .corner_radius(egui::CornerRadius::same(6))
                .inner_margin(egui::Margin::same(8))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width() - 40.0);
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("📻").size(18.0));
                        ui.add_space(8.0);
                        ui.label(
                            RichText::new(&radio.name)
                                .size(14.0)
                                .color(colors::TEXT_PRIMARY),
                        );
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if is_loading {
                                    ui.spinner();
                                } else {
                                    let label = if is_playing { "⏹" } else { "▶" };
                                    if ui.button(RichText::new(label).size(15.0)).clicked() {
                                        to_play = Some(radio.clone());
                                    }
                                }
                            },
                        );
                    });
                });
        });
        ui.add_space(6.0);
    }
    to_play
}

fn render_recent_plays(app: &mut MusicStudioApp, ui: &mut egui::Ui) -> Option<PlayEvent> {
    if app.content.recent_plays_loading && app.content.recent_plays.is_empty() {
        ui.horizontal(|ui| {
            ui.add_space(20.0);
            ui.spinner();
        });
        return None;
    }
    if app.content.recent_plays.is_empty() {
        ui.horizontal(|ui| {
            ui.add_space(20.0);
            ui.label(
                RichText::new("Nothing played yet. Find something on the Tracks screen.")
                    .size(13.0)
                    .color(colors::TEXT_SECONDARY),
            );
        });
        return None;
    }

    let mut replay = None;
    for event in &app.content.recent_plays {
        let track = Track::from(event.clone());
        let is_playing = app.playback.state.is_playing(&track.id);
        let is_loading = app.playback.state.is_loading(&track.id);
        ui.horizontal(|ui| {
            ui.add_space(20.0);
            ui.vertical(|ui| {
                if let Some(helpers::TrackRowAction::TogglePlay) = helpers::render_track_row(
                    ui,
                    &track,
                    is_playing,
                    is_loading,
                    app.content.favorite_ids.contains(&track.id),
                ) {
                    replay = Some(event.clone());
                }
            });
        });
        ui.add_space(6.0);
    }
    replay
}
