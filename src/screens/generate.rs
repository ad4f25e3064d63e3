use crate::app::studio_app::MusicStudioApp;
use crate::constants::{
    GENERATION_DURATION_MAX_SECS, GENERATION_DURATION_MIN_SECS, MAX_DESCRIPTION_CHARS,
};
use crate::models::Track;
use crate::ui_components::{colors, helpers};
use eframe::egui::{self, RichText};

/// Generation view: describe a clip, pick a duration, optionally name the
/// file, and wait for the backend to synthesize it. Finished clips land in
/// the library list below the form.
pub fn render_generate_view(app: &mut MusicStudioApp, ui: &mut egui::Ui) {
    if !app.content.generated_fetch_done {
        app.fetch_generated();
        app.content.generated_fetch_done = true;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.add_space(20.0);
        ui.horizontal(|ui| {
            ui.add_space(20.0);
            ui.label(
                RichText::new("Generate music")
                    .size(24.0)
                    .color(colors::TEXT_PRIMARY)
                    .strong(),
            );
        });
        ui.add_space(14.0);

        ui.horizontal(|ui| {
            ui.add_space(20.0);
            egui::Frame::default()
                .fill(colors::BG_CARD)
                .corner_radius(egui::CornerRadius::same(8))
                .inner_margin(egui::Margin::same(16))
                .show(ui, |ui| {
                    ui.set_width(480.0);

                    ui.label(
                        RichText::new("Describe the music")
                            .size(13.0)
                            .color(colors::TEXT_SECONDARY),
                    );
                    ui.add(
                        egui::TextEdit::multiline(&mut app.generator.description)
                            .hint_text("e.g. calm piano over soft rain, slow tempo")
                            .desired_rows(3)
                            .desired_width(460.0),
                    );
                    let chars = app.generator.description.trim().chars().count();
                    let counter_color = if chars > MAX_DESCRIPTION_CHARS {
                        colors::DANGER
                    } else {
                        colors::TEXT_SECONDARY
                    };
                    ui.label(
                        RichText::new(format!("{}/{}", chars, MAX_DESCRIPTION_CHARS))
                            .size(11.0)
                            .color(counter_color),
                    );

                    ui.add_space(10.0);
                    ui.label(
                        RichText::new(format!("Duration: {}s", app.generator.duration_secs))
                            .size(13.0)
                            .color(colors::TEXT_SECONDARY),
                    );
                    ui.add(
                        egui::Slider::new(
                            &mut app.generator.duration_secs,
                            GENERATION_DURATION_MIN_SECS..=GENERATION_DURATION_MAX_SECS,
                        )
                        .suffix("s"),
                    );

                    ui.add_space(10.0);
                    ui.label(
                        RichText::new("File name (optional)")
                            .size(13.0)
                            .color(colors::TEXT_SECONDARY),
                    );
                    ui.add_sized(
                        egui::vec2(300.0, 28.0),
                        egui::TextEdit::singleline(&mut app.generator.file_name)
                            .hint_text("my-track_01"),
                    );

                    if let Some(error) = &app.generator.error {
                        ui.add_space(8.0);
                        ui.label(RichText::new(error).size(13.0).color(colors::DANGER));
                    }

                    ui.add_space(14.0);
                    if app.generator.generating {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label(
                                RichText::new("Generating... this can take a while")
                                    .size(13.0)
                                    .color(colors::TEXT_SECONDARY),
                            );
                        });
                    } else if ui
                        .add_sized(
                            egui::vec2(180.0, 36.0),
                            egui::Button::new(RichText::new("Generate").size(15.0)),
                        )
                        .clicked()
                    {
                        app.submit_generation();
                    }
                });
        });

        // Most recent result, offered for immediate playback and download
        if let Some(generated) = app.generator.last_generated.clone() {
            ui.add_space(16.0);
            ui.horizontal(|ui| {
                ui.add_space(20.0);
                ui.label(
                    RichText::new(format!("Ready: \"{}\" (saved to your library)", generated.title))
                        .size(14.0)
                        .color(colors::ACCENT),
                );
                ui.add_space(8.0);
                let track = Track::from(&generated);
                let is_playing = app.playback.state.is_playing(&track.id);
                let play_label = if is_playing { "⏹ Stop" } else { "▶ Play" };
                if ui.button(RichText::new(play_label).size(13.0)).clicked() {
                    app.playback.toggle(&track);
                }
                if !generated.audio_url.is_empty()
                    && ui
                        .button(RichText::new("⬇ Download").size(13.0))
                        .clicked()
                {
                    if let Err(e) = webbrowser::open(&generated.audio_url) {
                        log::warn!("[Generate] Could not open download link: {}", e);
                    }
                }
            });
        }

        ui.add_space(26.0);
        ui.horizontal(|ui| {
            ui.add_space(20.0);
            ui.label(
                RichText::new("Your generations")
                    .size(18.0)
                    .color(colors::TEXT_PRIMARY)
                    .strong(),
            );
        });
        ui.add_space(10.0);

        if app.content.generated_loading && app.content.generated.is_empty() {
            helpers::loading_state(ui, "Loading your library...");
            return;
        }
        if app.content.generated.is_empty() {
            helpers::empty_state(
                ui,
                "🎹",
                "Nothing generated yet",
                "Your finished clips will appear here",
            );
            return;
        }

        let mut pending: Option<(helpers::TrackRowAction, Track)> = None;
        for generated in &app.content.generated {
            let track = Track::from(generated);
            let is_playing = app.playback.state.is_playing(&track.id);
            let is_loading = app.playback.state.is_loading(&track.id);
            ui.horizontal(|ui| {
                ui.add_space(20.0);
                ui.vertical(|ui| {
                    if let Some(action) = helpers::render_track_row(
                        ui,
                        &track,
                        is_playing,
                        is_loading,
                        app.content.favorite_ids.contains(&track.id),
                    ) {
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
