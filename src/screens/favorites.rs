use crate::app::studio_app::MusicStudioApp;
use crate::services::favorites::{sort_entries, SortKey};
use crate::ui_components::{colors, helpers};
use eframe::egui::{self, RichText};

/// Favorites view: the saved library with sorting and multi-select removal.
pub fn render_favorites_view(app: &mut MusicStudioApp, ui: &mut egui::Ui) {
    if !app.content.favorites_fetch_done {
        app.fetch_favorites();
        app.content.favorites_fetch_done = true;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.add_space(20.0);
        ui.horizontal(|ui| {
            ui.add_space(20.0);
            ui.label(
                RichText::new("Your favorites")
                    .size(24.0)
                    .color(colors::TEXT_PRIMARY)
                    .strong(),
            );
            if !app.content.favorites.is_empty() {
                ui.add_space(12.0);
                ui.label(
                    RichText::new(format!("({} tracks)", app.content.favorites.len()))
                        .size(15.0)
                        .color(colors::TEXT_SECONDARY),
                );
            }
        });
        ui.add_space(14.0);

        if app.content.favorites_loading && app.content.favorites.is_empty() {
            helpers::loading_state(ui, "Loading favorites...");
            return;
        }

        if app.content.favorites.is_empty() {
            helpers::empty_state(
                ui,
                "♡",
                "No favorites yet",
                "Tap the heart on any track to save it here",
            );
            return;
        }

        // Sort and selection toolbar
        ui.horizontal(|ui| {
            ui.add_space(20.0);
            ui.label(RichText::new("Sort:").size(13.0).color(colors::TEXT_SECONDARY));
            ui.add_space(4.0);
            egui::ComboBox::from_id_salt("favorites_sort")
                .selected_text(app.ui.favorites_sort.label())
                .show_ui(ui, |ui| {
                    for key in SortKey::ALL {
                        ui.selectable_value(&mut app.ui.favorites_sort, key, key.label());
                    }
                });
            let dir_label = if app.ui.favorites_sort_desc { "⬇" } else { "⬆" };
            if ui
                .button(dir_label)
                .on_hover_text("Reverse sort order")
                .clicked()
            {
                app.ui.favorites_sort_desc = !app.ui.favorites_sort_desc;
            }

            ui.add_space(20.0);
            if ui.button(RichText::new("Select all").size(13.0)).clicked() {
                app.ui.selected_favorites = app
                    .content
                    .favorites
                    .iter()
                    .map(|entry| entry.track.id.clone())
                    .collect();
            }
            let selected = app.ui.selected_favorites.len();
            if selected > 0 {
                if ui
                    .button(
                        RichText::new(format!("Remove selected ({})", selected))
                            .size(13.0)
                            .color(colors::DANGER),
                    )
                    .clicked()
                {
                    app.remove_selected_favorites();
                }
                if ui.button(RichText::new("Clear selection").size(13.0)).clicked() {
                    app.ui.selected_favorites.clear();
                }
            }
        });
        ui.add_space(12.0);

        let mut entries = app.content.favorites.clone();
        sort_entries(&mut entries, app.ui.favorites_sort);
        if app.ui.favorites_sort_desc {
            entries.reverse();
        }

        let mut pending: Option<(helpers::TrackRowAction, crate::models::Track)> = None;
        for entry in &entries {
            let track = &entry.track;
            let is_playing = app.playback.state.is_playing(&track.id);
            let is_loading = app.playback.state.is_loading(&track.id);
            let mut selected = app.ui.selected_favorites.contains(&track.id);

            ui.horizontal(|ui| {
                ui.add_space(20.0);
                if ui.checkbox(&mut selected, "").changed() {
                    if selected {
                        app.ui.selected_favorites.insert(track.id.clone());
                    } else {
                        app.ui.selected_favorites.remove(&track.id);
                    }
                }
                ui.vertical(|ui| {
                    if let Some(action) =
                        helpers::render_track_row(ui, track, is_playing, is_loading, true)
                    {
                        pending = Some((action, track.clone()));
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
