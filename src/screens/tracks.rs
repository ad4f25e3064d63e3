use crate::app::studio_app::MusicStudioApp;
use crate::services::catalog;
use crate::ui_components::{colors, helpers};
use crate::utils::formatting::format_play_count;
use eframe::egui::{self, RichText};

/// Tracks view: catalog search with derived genre chips and a client-side
/// filter over the fetched page.
pub fn render_tracks_view(app: &mut MusicStudioApp, ui: &mut egui::Ui) {
    // Refetch whenever the committed query differs from the input. The
    // fetch is tagged with a sequence number, so a stale response for an
    // old query can never overwrite a newer page.
    let query = app.content.search_query.trim().to_string();
    if app.content.fetched_query.as_deref() != Some(query.as_str()) {
        app.fetch_tracks(&query);
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.add_space(20.0);
        ui.horizontal(|ui| {
            ui.add_space(20.0);
            ui.label(
                RichText::new("Browse tracks")
                    .size(24.0)
                    .color(colors::TEXT_PRIMARY)
                    .strong(),
            );
            if !app.content.tracks.is_empty() {
                ui.add_space(12.0);
                ui.label(
                    RichText::new(format!("({} fetched)", app.content.tracks.len()))
                        .size(15.0)
                        .color(colors::TEXT_SECONDARY),
                );
            }
        });
        ui.add_space(14.0);

        // Search bar
        ui.horizontal(|ui| {
            ui.add_space(20.0);
            ui.label(RichText::new("🔍").size(17.0));
            ui.add_space(6.0);
            ui.add_sized(
                egui::vec2(320.0, 32.0),
                egui::TextEdit::singleline(&mut app.content.search_query)
                    .hint_text("Search by title, artist, or tag..."),
            );
            if !app.content.search_query.is_empty() && ui.button("✖").clicked() {
                app.content.search_query.clear();
            }
            if app.content.tracks_loading {
                ui.add_space(8.0);
                ui.spinner();
            }
        });
        ui.add_space(14.0);

        if let Some(error) = app.content.tracks_error.clone() {
            if helpers::error_state(ui, &error) {
                let query = app.content.search_query.trim().to_string();
                app.fetch_tracks(&query);
            }
            return;
        }

        if app.content.tracks_loading && app.content.tracks.is_empty() {
            helpers::loading_state(ui, "Loading tracks...");
            return;
        }

        // Genre chips derived from the fetched page
        let facets = catalog::derive_facets(&app.content.tracks);
        if !facets.is_empty() {
            ui.horizontal(|ui| {
                ui.add_space(20.0);
                for facet in &facets {
                    let selected = app
                        .content
                        .search_query
                        .eq_ignore_ascii_case(&facet.name);
                    let chip = ui.selectable_label(
                        selected,
                        RichText::new(format!(
                            "{} ({})",
                            facet.name,
                            format_play_count(facet.tracks)
                        ))
                        .size(13.0),
                    );
                    if chip.clicked() {
                        app.content.search_query = if selected {
                            String::new()
                        } else {
                            facet.name.to_lowercase()
                        };
                    }
                    ui.add_space(6.0);
                }
            });
            ui.add_space(12.0);
        }

        let filtered = catalog::filter_tracks(&app.content.tracks, &app.content.search_query);

        if filtered.is_empty() {
            helpers::empty_state(
                ui,
                "🎵",
                "No tracks found",
                "Try a different search term",
            );
            return;
        }

        let mut pending: Option<(helpers::TrackRowAction, crate::models::Track)> = None;
        for track in &filtered {
            let is_playing = app.playback.state.is_playing(&track.id);
            let is_loading = app.playback.state.is_loading(&track.id);
            let is_favorite = app.content.favorite_ids.contains(&track.id);
            ui.horizontal(|ui| {
                ui.add_space(20.0);
                ui.vertical(|ui| {
                    if let Some(action) =
                        helpers::render_track_row(ui, track, is_playing, is_loading, is_favorite)
                    {
                        pending = Some((action, track.clone()));
                    }
                    if track.attribution.required {
                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new(format!("Credit: {}", track.attribution.text))
                                    .size(11.0)
                                    .color(colors::TEXT_SECONDARY),
                            );
                            if !track.attribution.link.is_empty()
                                && ui.link(RichText::new("license").size(11.0)).clicked()
                            {
                                if let Err(e) = webbrowser::open(&track.attribution.link) {
                                    log::warn!("[Tracks] Could not open license link: {}", e);
                                }
                            }
                        });
                    }
                });
            });
            ui.add_space(6.0);
        }

        if let Some((action, track)) = pending {
            app.handle_track_action(action, &track);
        }

        ui.add_space(24.0);
    });
}
