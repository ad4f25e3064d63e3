use crate::config::Config;
use crate::constants::{
    DEFAULT_RADIOS_LIMIT, DEFAULT_TRACKS_LIMIT, RECENT_PLAYS_LIMIT,
    REPAINT_INTERVAL_ACTIVE_MICROS, REPAINT_INTERVAL_IDLE_MICROS,
};
use crate::models::{PlayEvent, Radio, Track};
use crate::services;
use crate::state::auth_state::Session;
use crate::state::playback::PlaybackEvent;
use crate::state::ui_state::Screen;
use crate::state::{AuthState, BackgroundTasks, ContentState, GeneratorState, Playback, UIState};
use crate::store::{profile_cache, UserStore};
use crate::ui_components::helpers::TrackRowAction;
use crate::utils::async_helper::spawn_and_send;
use crate::utils::formatting::format_duration;
use eframe::egui::{self, RichText};
use std::sync::Arc;
use std::time::Duration;

pub struct MusicStudioApp {
    pub config: Arc<Config>,
    pub store: UserStore,

    pub playback: Playback,
    pub auth: AuthState,
    pub ui: UIState,
    pub content: ContentState,
    pub generator: GeneratorState,
    pub tasks: BackgroundTasks,
}

impl MusicStudioApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Arc<Config>, store: UserStore) -> Self {
        configure_visuals(&cc.egui_ctx);
        Self {
            config,
            store,
            playback: Playback::default(),
            auth: AuthState::default(),
            ui: UIState::default(),
            content: ContentState::default(),
            generator: GeneratorState::default(),
            tasks: BackgroundTasks::default(),
        }
    }

    // ---- fetch triggers ----

    /// Start a catalog fetch for `query`, superseding any in-flight fetch.
    pub fn fetch_tracks(&mut self, query: &str) {
        self.content.tracks_fetch_seq += 1;
        let seq = self.content.tracks_fetch_seq;
        self.content.fetched_query = Some(query.to_string());
        self.content.tracks_loading = true;
        self.content.tracks_error = None;

        log::info!("[App] Fetching tracks for \"{}\" (seq {})", query, seq);

        let (tx, rx) = std::sync::mpsc::channel();
        self.tasks.tracks_rx = Some(rx);

        let config = self.config.clone();
        let query = query.to_string();
        std::thread::spawn(move || {
            let rt = match crate::utils::error_handling::create_runtime() {
                Ok(r) => r,
                Err(e) => {
                    let _ = tx.send((seq, Err(e)));
                    return;
                }
            };
            let result = rt
                .block_on(crate::api::fetch_tracks(&config, &query, DEFAULT_TRACKS_LIMIT))
                .map_err(|e| e.to_string());
            let _ = tx.send((seq, result));
        });
    }

    /// Dashboard content: profile (cache-first), genre stats, radios, and
    /// recent listens.
    pub fn fetch_dashboard(&mut self) {
        if let Some(session) = self.auth.session.as_mut() {
            // Cached profile paints instantly; the store read replaces it
            if let Some(cached) = profile_cache::load(&session.uid) {
                session.profile = cached;
            }
        }
        self.refresh_profile_silent();
        self.fetch_genres();
        self.fetch_radios();
        self.fetch_recent_plays();
    }

    pub fn fetch_genres(&mut self) {
        self.content.genres_loading = true;
        self.content.genres_error = None;
        let (tx, rx) = std::sync::mpsc::channel();
        self.tasks.genres_rx = Some(rx);
        let config = self.config.clone();
        spawn_and_send(
            move || {
                Box::pin(async move {
                    crate::api::fetch_top_genres(&config)
                        .await
                        .map_err(|e| e.to_string())
                })
            },
            tx,
        );
    }

    pub fn fetch_radios(&mut self) {
        self.content.radios_loading = true;
        self.content.radios_error = None;
        let (tx, rx) = std::sync::mpsc::channel();
        self.tasks.radios_rx = Some(rx);
        let config = self.config.clone();
        spawn_and_send(
            move || {
                Box::pin(async move {
                    crate::api::fetch_radios(&config, DEFAULT_RADIOS_LIMIT)
                        .await
                        .map_err(|e| e.to_string())
                })
            },
            tx,
        );
    }

    pub fn fetch_recent_plays(&mut self) {
        let Some(uid) = self.auth.uid().map(String::from) else {
            return;
        };
        self.content.recent_plays_loading = true;
        let (tx, rx) = std::sync::mpsc::channel();
        self.tasks.recent_plays_rx = Some(rx);
        let store = self.store.clone();
        spawn_and_send(
            move || {
                Box::pin(async move {
                    store
                        .recent_plays(&uid, RECENT_PLAYS_LIMIT)
                        .map_err(|e| e.to_string())
                })
            },
            tx,
        );
    }

    pub fn fetch_favorites(&mut self) {
        let Some(uid) = self.auth.uid().map(String::from) else {
            return;
        };
        self.content.favorites_loading = true;
        let (tx, rx) = std::sync::mpsc::channel();
        self.tasks.favorites_rx = Some(rx);
        let store = self.store.clone();
        spawn_and_send(
            move || Box::pin(async move { store.list_favorites(&uid).map_err(|e| e.to_string()) }),
            tx,
        );
    }

    pub fn fetch_generated(&mut self) {
        let Some(uid) = self.auth.uid().map(String::from) else {
            return;
        };
        self.content.generated_loading = true;
        let (tx, rx) = std::sync::mpsc::channel();
        self.tasks.generated_rx = Some(rx);
        let store = self.store.clone();
        spawn_and_send(
            move || Box::pin(async move { store.list_generated(&uid).map_err(|e| e.to_string()) }),
            tx,
        );
    }

    // ---- auth ----

    pub fn submit_auth(&mut self) {
        let email = self.auth.email_input.trim().to_string();
        let password = self.auth.password_input.clone();
        let name = self.auth.name_input.trim().to_string();
        let signup = self.auth.signup_mode;

        if email.is_empty() || password.is_empty() || (signup && name.is_empty()) {
            self.auth.auth_error = Some("Please fill in all fields".to_string());
            return;
        }

        self.auth.auth_error = None;
        self.auth.auth_in_progress = true;

        let (tx, rx) = std::sync::mpsc::channel();
        self.tasks.auth_rx = Some(rx);
        let store = self.store.clone();
        spawn_and_send(
            move || {
                Box::pin(async move {
                    let result = if signup {
                        store.sign_up(&name, &email, &password)
                    } else {
                        store.sign_in(&email, &password)
                    };
                    result.map_err(|e| e.to_string())
                })
            },
            tx,
        );
    }

    /// Force a profile reload, discarding the cache first.
    pub fn refresh_profile(&mut self) {
        if let Some(uid) = self.auth.uid() {
            profile_cache::invalidate(uid);
        }
        self.refresh_profile_silent();
        self.ui.toast_manager.info("Refreshing profile...");
    }

    fn refresh_profile_silent(&mut self) {
        let Some(uid) = self.auth.uid().map(String::from) else {
            return;
        };
        let (tx, rx) = std::sync::mpsc::channel();
        self.tasks.profile_rx = Some(rx);
        let store = self.store.clone();
        spawn_and_send(
            move || Box::pin(async move { store.load_profile(&uid).map_err(|e| e.to_string()) }),
            tx,
        );
    }

    pub fn logout(&mut self) {
        log::info!("[App] Logging out");
        self.playback.stop();
        profile_cache::clear_all();
        self.auth.session = None;
        self.auth.clear_form();
        self.content.clear_user_content();
        self.tasks.cancel_all();
        self.generator = GeneratorState::default();
        self.ui.selected_favorites.clear();
        self.ui.screen = Screen::Landing;
    }

    // ---- generation ----

    pub fn submit_generation(&mut self) {
        let request = match services::generation::build_request(
            &self.generator.description,
            self.generator.duration_secs,
            &self.generator.file_name,
        ) {
            Ok(request) => request,
            Err(message) => {
                self.generator.error = Some(message);
                return;
            }
        };
        let Some(session) = self.auth.session.clone() else {
            return;
        };

        self.generator.error = None;
        self.generator.generating = true;
        self.generator.last_generated = None;

        let (tx, rx) = std::sync::mpsc::channel();
        self.tasks.generation_rx = Some(rx);
        let config = self.config.clone();
        let store = self.store.clone();
        let description = request.description.clone();
        let duration = self.generator.duration_secs;
        let generated_so_far = session.profile.tracks_generated;

        spawn_and_send(
            move || {
                Box::pin(async move {
                    let response = crate::api::generate_music(&config, &request)
                        .await
                        .map_err(|e| e.to_string())?;
                    let track = services::generation::track_from_response(
                        &description,
                        duration,
                        &response,
                        generated_so_far,
                    );
                    let stored = store
                        .record_generation(&session.uid, &track)
                        .map_err(|e| e.to_string())?;
                    let profile = store
                        .load_profile(&session.uid)
                        .map_err(|e| e.to_string())?;
                    Ok((stored, profile))
                })
            },
            tx,
        );
    }

    // ---- playback entry points ----

    pub fn radio_track_id(radio: &Radio) -> String {
        format!("{}{}", crate::constants::RADIO_ID_PREFIX, radio.id)
    }

    pub fn play_radio(&mut self, radio: &Radio) {
        let track = Track {
            id: Self::radio_track_id(radio),
            title: radio.name.clone(),
            artist: "Live radio".to_string(),
            duration: String::new(),
            cover: radio.image.clone(),
            tags: Vec::new(),
            plays: String::new(),
            color: "teal-green".to_string(),
            audio_url: radio.stream_url.clone(),
            attribution: Default::default(),
        };
        self.playback.toggle(&track);
    }

    pub fn replay_event(&mut self, event: &PlayEvent) {
        let track = Track::from(event.clone());
        self.playback.toggle(&track);
    }

    /// Dispatch a track-row interaction from any screen.
    pub fn handle_track_action(&mut self, action: TrackRowAction, track: &Track) {
        match action {
            TrackRowAction::TogglePlay => self.playback.toggle(track),
            TrackRowAction::ToggleFavorite => self.toggle_favorite(track),
            TrackRowAction::Share => self.share_track(track),
        }
    }

    pub fn toggle_favorite(&mut self, track: &Track) {
        let Some(uid) = self.auth.uid().map(String::from) else {
            return;
        };
        let result = services::favorites::toggle_favorite(
            track,
            &mut self.content.favorite_ids,
            &self.store,
            &uid,
        );
        if result.is_favorite {
            // The favorites list is refetched on next visit to pick up the
            // store-assigned added-at timestamp
            self.content.favorites_fetch_done = false;
        } else {
            self.content
                .favorites
                .retain(|entry| entry.track.id != track.id);
        }
        // Keep the dashboard's favorite count in step with the heart icons
        if let Some(session) = self.auth.session.as_mut() {
            if result.is_favorite {
                session.profile.favorites.insert(track.id.clone());
            } else {
                session.profile.favorites.remove(&track.id);
            }
        }
        self.ui.toast_manager.success(result.message);
    }

    pub fn remove_selected_favorites(&mut self) {
        let Some(uid) = self.auth.uid().map(String::from) else {
            return;
        };
        let ids: Vec<String> = self.ui.selected_favorites.drain().collect();
        if ids.is_empty() {
            return;
        }
        self.content
            .favorites
            .retain(|entry| !ids.contains(&entry.track.id));
        for id in &ids {
            self.content.favorite_ids.remove(id);
        }
        if let Some(session) = self.auth.session.as_mut() {
            for id in &ids {
                session.profile.favorites.remove(id);
            }
        }
        let count = ids.len();
        services::favorites::remove_selected(&self.store, &uid, ids);
        self.ui
            .toast_manager
            .success(format!("Removed {} favorite(s)", count));
    }

    fn share_track(&mut self, track: &Track) {
        match arboard::Clipboard::new() {
            Ok(mut clipboard) => match clipboard.set_text(track.audio_url.clone()) {
                Ok(()) => self.ui.toast_manager.success("Track link copied"),
                Err(e) => {
                    log::warn!("[App] Clipboard write failed: {}", e);
                    self.ui.toast_manager.error("Could not copy link");
                }
            },
            Err(e) => {
                log::warn!("[App] Clipboard unavailable: {}", e);
                self.ui.toast_manager.error("Clipboard unavailable");
            }
        }
    }

    // ---- channel polling ----

    fn check_background_updates(&mut self) {
        self.check_tracks_updates();
        self.check_dashboard_updates();
        self.check_auth_updates();
        self.check_collection_updates();
        self.check_generation_updates();
    }

    fn check_tracks_updates(&mut self) {
        let Some(rx) = &self.tasks.tracks_rx else {
            return;
        };
        if let Ok((seq, result)) = rx.try_recv() {
            self.tasks.tracks_rx = None;
            if seq != self.content.tracks_fetch_seq {
                log::debug!(
                    "[App] Dropping stale tracks result (seq {} < {})",
                    seq,
                    self.content.tracks_fetch_seq
                );
                return;
            }
            self.content.tracks_loading = false;
            match result {
                Ok(tracks) => {
                    log::info!("[App] Tracks fetch complete: {} tracks", tracks.len());
                    self.content.tracks = tracks;
                }
                Err(e) => {
                    log::error!("[App] Tracks fetch failed: {}", e);
                    self.content.tracks_error = Some(e);
                }
            }
        }
    }

    fn check_dashboard_updates(&mut self) {
        if let Some(rx) = &self.tasks.genres_rx {
            if let Ok(result) = rx.try_recv() {
                self.tasks.genres_rx = None;
                self.content.genres_loading = false;
                match result {
                    Ok(genres) => self.content.genres = genres,
                    Err(e) => self.content.genres_error = Some(e),
                }
            }
        }
        if let Some(rx) = &self.tasks.radios_rx {
            if let Ok(result) = rx.try_recv() {
                self.tasks.radios_rx = None;
                self.content.radios_loading = false;
                match result {
                    Ok(radios) => self.content.radios = radios,
                    Err(e) => self.content.radios_error = Some(e),
                }
            }
        }
        if let Some(rx) = &self.tasks.recent_plays_rx {
            if let Ok(result) = rx.try_recv() {
                self.tasks.recent_plays_rx = None;
                self.content.recent_plays_loading = false;
                match result {
                    Ok(plays) => self.content.recent_plays = plays,
                    Err(e) => log::error!("[App] Recent plays load failed: {}", e),
                }
            }
        }
    }

    fn check_auth_updates(&mut self) {
        if let Some(rx) = &self.tasks.auth_rx {
            if let Ok(result) = rx.try_recv() {
                self.tasks.auth_rx = None;
                self.auth.auth_in_progress = false;
                match result {
                    Ok((uid, profile)) => {
                        log::info!("[App] Signed in as {}", profile.email);
                        profile_cache::save(&uid, &profile);
                        self.content.favorite_ids = profile.favorites.clone();
                        let name = profile.name.clone();
                        self.auth.session = Some(Session { uid, profile });
                        self.auth.clear_form();
                        self.ui.screen = Screen::Dashboard;
                        self.ui
                            .toast_manager
                            .success(format!("Welcome, {}", name));
                    }
                    Err(e) => {
                        self.auth.auth_error = Some(e);
                    }
                }
            }
        }
        if let Some(rx) = &self.tasks.profile_rx {
            if let Ok(result) = rx.try_recv() {
                self.tasks.profile_rx = None;
                match result {
                    Ok(profile) => {
                        if let Some(session) = self.auth.session.as_mut() {
                            profile_cache::save(&session.uid, &profile);
                            self.content.favorite_ids = profile.favorites.clone();
                            session.profile = profile;
                        }
                    }
                    Err(e) => log::error!("[App] Profile refresh failed: {}", e),
                }
            }
        }
    }

    fn check_collection_updates(&mut self) {
        if let Some(rx) = &self.tasks.favorites_rx {
            if let Ok(result) = rx.try_recv() {
                self.tasks.favorites_rx = None;
                self.content.favorites_loading = false;
                match result {
                    Ok(favorites) => {
                        self.content.favorite_ids =
                            favorites.iter().map(|e| e.track.id.clone()).collect();
                        self.content.favorites = favorites;
                    }
                    Err(e) => log::error!("[App] Favorites load failed: {}", e),
                }
            }
        }
        if let Some(rx) = &self.tasks.generated_rx {
            if let Ok(result) = rx.try_recv() {
                self.tasks.generated_rx = None;
                self.content.generated_loading = false;
                match result {
                    Ok(generated) => self.content.generated = generated,
                    Err(e) => log::error!("[App] Generated list load failed: {}", e),
                }
            }
        }
    }

    fn check_generation_updates(&mut self) {
        let Some(rx) = &self.tasks.generation_rx else {
            return;
        };
        if let Ok(result) = rx.try_recv() {
            self.tasks.generation_rx = None;
            self.generator.generating = false;
            match result {
                Ok((track, profile)) => {
                    log::info!("[App] Generation stored: {}", track.file_name);
                    if let Some(session) = self.auth.session.as_mut() {
                        profile_cache::save(&session.uid, &profile);
                        session.profile = profile;
                    }
                    self.content.generated.insert(0, track.clone());
                    self.ui
                        .toast_manager
                        .success(format!("\"{}\" is ready", track.title));
                    self.generator.last_generated = Some(track);
                    self.generator.reset_form();
                }
                Err(e) => {
                    log::error!("[App] Generation failed: {}", e);
                    self.generator.error = Some(e);
                }
            }
        }
    }

    /// Advance the playback machine and react to its events.
    fn check_playback(&mut self) {
        for event in self.playback.poll() {
            match event {
                PlaybackEvent::Started(track) => self.on_playback_started(&track),
                PlaybackEvent::Failed { track_id, message } => {
                    log::error!("[App] Playback of {} failed: {}", track_id, message);
                    self.ui
                        .toast_manager
                        .error(format!("Playback failed: {}", message));
                }
                PlaybackEvent::Finished(track_id) => {
                    log::debug!("[App] Playback of {} finished", track_id);
                }
            }
        }
    }

    /// Log a play event exactly once per successful start. Live radio
    /// streams are not tracks and stay out of the history.
    fn on_playback_started(&mut self, track: &Track) {
        if track.id.starts_with(crate::constants::RADIO_ID_PREFIX) {
            return;
        }
        let Some(session) = self.auth.session.as_mut() else {
            return;
        };

        let event = PlayEvent::from_track(track);

        // Optimistic local update so the dashboard reflects the play now
        session.profile.total_plays += 1;
        self.content.recent_plays.retain(|e| e.track_id != event.track_id);
        self.content.recent_plays.insert(0, event.clone());
        self.content.recent_plays.truncate(RECENT_PLAYS_LIMIT);

        let store = self.store.clone();
        let uid = session.uid.clone();
        crate::utils::async_helper::spawn_fire_and_forget(move || {
            Box::pin(async move {
                match store.record_play(&uid, &event) {
                    Ok(()) => Ok(()),
                    Err(e) => {
                        log::error!("[App] Failed to log play: {}", e);
                        Err(e.to_string())
                    }
                }
            })
        });
    }

    // ---- chrome ----

    fn render_nav(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(12.0);
            ui.label(
                RichText::new("MuseRS")
                    .size(18.0)
                    .color(crate::ui_components::colors::ACCENT)
                    .strong(),
            );
            ui.add_space(18.0);
            for screen in [
                Screen::Dashboard,
                Screen::Tracks,
                Screen::Favorites,
                Screen::Generate,
                Screen::Settings,
            ] {
                let selected = self.ui.screen == screen;
                if ui
                    .selectable_label(selected, RichText::new(screen.title()).size(14.0))
                    .clicked()
                {
                    self.ui.screen = screen;
                }
                ui.add_space(4.0);
            }
        });
    }

    fn render_player_bar(&mut self, ui: &mut egui::Ui) {
        let Some(track) = self.playback.now_playing.clone() else {
            return;
        };
        let is_loading = self.playback.state.is_loading(&track.id);

        ui.horizontal(|ui| {
            ui.add_space(12.0);
            crate::ui_components::helpers::gradient_rect(
                ui,
                egui::vec2(36.0, 36.0),
                &track.color,
            );
            ui.add_space(8.0);
            ui.vertical(|ui| {
                ui.label(
                    RichText::new(crate::ui_components::helpers::truncate_text(
                        &track.title,
                        40,
                    ))
                    .size(13.0)
                    .color(crate::ui_components::colors::TEXT_PRIMARY)
                    .strong(),
                );
                ui.label(
                    RichText::new(&track.artist)
                        .size(11.0)
                        .color(crate::ui_components::colors::TEXT_SECONDARY),
                );
            });

            ui.add_space(16.0);
            if is_loading {
                ui.spinner();
            }
            if ui.button(RichText::new("⏹").size(17.0)).clicked() {
                self.playback.stop();
            }

            // Position readout; live streams have no known duration
            let position = format_duration(self.playback.position().as_secs() as u32);
            let readout = match self.playback.duration() {
                Some(total) => format!("{} / {}", position, format_duration(total.as_secs() as u32)),
                None => position,
            };
            ui.add_space(10.0);
            ui.label(
                RichText::new(readout)
                    .size(12.0)
                    .color(crate::ui_components::colors::TEXT_SECONDARY),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add_space(12.0);
                let mut volume = self.playback.volume;
                if ui
                    .add(
                        egui::Slider::new(&mut volume, 0.0..=1.0)
                            .show_value(false)
                            .trailing_fill(true),
                    )
                    .changed()
                {
                    self.playback.set_volume(volume);
                }
                let mute_label = if self.playback.is_muted { "🔇" } else { "🔊" };
                if ui.button(mute_label).clicked() {
                    self.playback.toggle_mute();
                }
            });
        });
    }
}

impl eframe::App for MusicStudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_background_updates();
        self.check_playback();

        // Router-level guard: protected screens are unreachable without a
        // session, regardless of how the screen value was set
        if self.ui.screen.requires_auth() && !self.auth.is_authenticated() {
            self.ui.screen = Screen::Login;
        }

        if self.auth.is_authenticated() {
            egui::TopBottomPanel::top("nav_bar")
                .exact_height(44.0)
                .show(ctx, |ui| self.render_nav(ui));
        }

        if self.playback.is_active() {
            egui::TopBottomPanel::bottom("player_bar")
                .exact_height(56.0)
                .show(ctx, |ui| self.render_player_bar(ui));
        }

        egui::CentralPanel::default().show(ctx, |ui| match self.ui.screen {
            Screen::Landing => crate::screens::landing::render_landing_view(self, ui),
            Screen::Login => crate::screens::login::render_login_view(self, ui),
            Screen::Dashboard => crate::screens::dashboard::render_dashboard_view(self, ui),
            Screen::Tracks => crate::screens::tracks::render_tracks_view(self, ui),
            Screen::Favorites => crate::screens::favorites::render_favorites_view(self, ui),
            Screen::Generate => crate::screens::generate::render_generate_view(self, ui),
            Screen::Settings => crate::screens::settings::render_settings_view(self, ui),
        });

        self.ui.toast_manager.show(ctx);

        // Position readout and spinners need steady repaints while audio or
        // background work is active
        let interval = if self.playback.is_active() || self.generator.generating {
            Duration::from_micros(REPAINT_INTERVAL_ACTIVE_MICROS)
        } else {
            Duration::from_micros(REPAINT_INTERVAL_IDLE_MICROS)
        };
        ctx.request_repaint_after(interval);
    }
}

fn configure_visuals(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.override_text_color = Some(crate::ui_components::colors::TEXT_PRIMARY);
    visuals.panel_fill = crate::ui_components::colors::BG_MAIN;
    visuals.window_fill = crate::ui_components::colors::BG_CARD;
    visuals.extreme_bg_color = crate::ui_components::colors::BG_MAIN;
    visuals.selection.bg_fill = crate::ui_components::colors::ACCENT;
    ctx.set_visuals(visuals);
}
