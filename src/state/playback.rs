use crate::constants::{DEFAULT_VOLUME, DEFAULT_VOLUME_BEFORE_MUTE};
use crate::models::Track;
use crate::utils::audio_controller::AudioController;
use std::time::Duration;

/// Explicit playback machine. At most one track id is ever referenced, and
/// only the coordinator below mutates the state, so "what is playing" has a
/// single answer at all times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    /// A load was requested; audio is downloading/decoding on the audio
    /// thread. The heart of latest-wins: a newer request just overwrites
    /// the id, and stale completions are ignored.
    Loading { track_id: String },
    Playing { track_id: String },
}

impl PlaybackState {
    pub fn track_id(&self) -> Option<&str> {
        match self {
            PlaybackState::Stopped => None,
            PlaybackState::Loading { track_id } | PlaybackState::Playing { track_id } => {
                Some(track_id)
            }
        }
    }

    pub fn is_loading(&self, id: &str) -> bool {
        matches!(self, PlaybackState::Loading { track_id } if track_id == id)
    }

    pub fn is_playing(&self, id: &str) -> bool {
        matches!(self, PlaybackState::Playing { track_id } if track_id == id)
    }
}

/// What pressing the play control on a given track should do. Pressing the
/// track that is already playing toggles it off entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    StartLoading,
    /// Same id as the playing track: stop and clear it.
    Stop,
    /// The track is still loading; the press is dropped.
    Ignore,
}

pub fn toggle_action(state: &PlaybackState, track_id: &str) -> ToggleAction {
    match state {
        PlaybackState::Playing { track_id: current } if current == track_id => ToggleAction::Stop,
        PlaybackState::Loading { track_id: current } if current == track_id => ToggleAction::Ignore,
        _ => ToggleAction::StartLoading,
    }
}

/// Transition for a load completion reported by the audio thread. Returns
/// the new state, or `None` when the completion is stale (a different track
/// was requested since).
pub fn apply_started(state: &PlaybackState, started_id: &str) -> Option<PlaybackState> {
    if state.is_loading(started_id) {
        Some(PlaybackState::Playing {
            track_id: started_id.to_string(),
        })
    } else {
        None
    }
}

/// Transition for a load failure. Clears the machine only if the failed
/// track is still the current one.
pub fn apply_error(state: &PlaybackState, failed_id: &str) -> Option<PlaybackState> {
    if state.track_id() == Some(failed_id) {
        Some(PlaybackState::Stopped)
    } else {
        None
    }
}

/// Something the rest of the app reacts to after polling.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackEvent {
    /// Playback actually began. Fired exactly once per successful start;
    /// this is the trigger for play-history logging.
    Started(Track),
    Failed { track_id: String, message: String },
    Finished(String),
}

/// Owns the playback state machine and the audio controller.
pub struct Playback {
    pub state: PlaybackState,
    /// Snapshot of the track behind the current state, for the player bar.
    pub now_playing: Option<Track>,
    pub volume: f32,
    pub volume_before_mute: f32,
    pub is_muted: bool,
    controller: AudioController,
}

impl Default for Playback {
    fn default() -> Self {
        Self {
            state: PlaybackState::Stopped,
            now_playing: None,
            volume: DEFAULT_VOLUME,
            volume_before_mute: DEFAULT_VOLUME_BEFORE_MUTE,
            is_muted: false,
            controller: AudioController::new(),
        }
    }
}

impl Playback {
    /// Start loading a track, implicitly replacing whatever was active.
    pub fn request_play(&mut self, track: &Track) {
        if track.audio_url.is_empty() {
            log::warn!("[Playback] Track {} has no audio URL", track.id);
            return;
        }
        log::info!("[Playback] Requesting playback of {}", track.id);
        let live = track.id.starts_with(crate::constants::RADIO_ID_PREFIX);
        self.state = PlaybackState::Loading {
            track_id: track.id.clone(),
        };
        self.now_playing = Some(track.clone());
        self.controller
            .play(track.id.clone(), track.audio_url.clone(), live);
    }

    /// Play press on a track row or the player bar. Pressing the currently
    /// playing track stops it.
    pub fn toggle(&mut self, track: &Track) {
        match toggle_action(&self.state, &track.id) {
            ToggleAction::StartLoading => self.request_play(track),
            ToggleAction::Stop => self.stop(),
            ToggleAction::Ignore => {}
        }
    }

    pub fn stop(&mut self) {
        self.controller.stop();
        self.state = PlaybackState::Stopped;
        self.now_playing = None;
    }

    /// Drain audio-thread reports and advance the machine. Called once per
    /// frame from the update loop.
    pub fn poll(&mut self) -> Vec<PlaybackEvent> {
        let mut events = Vec::new();

        if let Some(started_id) = self.controller.take_started() {
            match apply_started(&self.state, &started_id) {
                Some(next) => {
                    self.state = next;
                    if let Some(track) = self.now_playing.clone() {
                        events.push(PlaybackEvent::Started(track));
                    }
                }
                None => {
                    log::debug!("[Playback] Ignoring stale start for {}", started_id);
                }
            }
        }

        if let Some((failed_id, message)) = self.controller.take_error() {
            if let Some(next) = apply_error(&self.state, &failed_id) {
                self.state = next;
                self.now_playing = None;
                events.push(PlaybackEvent::Failed {
                    track_id: failed_id,
                    message,
                });
            } else {
                log::debug!("[Playback] Ignoring stale error for {}", failed_id);
            }
        }

        if let PlaybackState::Playing { track_id } = &self.state {
            if self.controller.is_finished() {
                let finished = track_id.clone();
                log::info!("[Playback] Track {} finished", finished);
                self.state = PlaybackState::Stopped;
                self.now_playing = None;
                events.push(PlaybackEvent::Finished(finished));
            }
        }

        events
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        self.is_muted = self.volume == 0.0;
        self.controller.set_volume(self.volume);
    }

    pub fn toggle_mute(&mut self) {
        if self.is_muted {
            let restored = if self.volume_before_mute > 0.0 {
                self.volume_before_mute
            } else {
                DEFAULT_VOLUME_BEFORE_MUTE
            };
            self.set_volume(restored);
        } else {
            self.volume_before_mute = self.volume;
            self.set_volume(0.0);
        }
    }

    pub fn position(&self) -> Duration {
        self.controller.get_position()
    }

    pub fn duration(&self) -> Option<Duration> {
        self.controller.get_duration()
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.state, PlaybackState::Stopped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loading(id: &str) -> PlaybackState {
        PlaybackState::Loading {
            track_id: id.to_string(),
        }
    }

    fn playing(id: &str) -> PlaybackState {
        PlaybackState::Playing {
            track_id: id.to_string(),
        }
    }

    #[test]
    fn toggling_the_playing_track_stops_it() {
        assert_eq!(toggle_action(&playing("a"), "a"), ToggleAction::Stop);
    }

    #[test]
    fn double_toggle_returns_to_nothing_playing() {
        // Press once while playing: the machine clears to Stopped
        let mut state = playing("a");
        assert_eq!(toggle_action(&state, "a"), ToggleAction::Stop);
        state = PlaybackState::Stopped;
        // A second press on the same id starts it loading again
        assert_eq!(toggle_action(&state, "a"), ToggleAction::StartLoading);
        assert_eq!(state.track_id(), None);
    }

    #[test]
    fn toggling_a_different_track_starts_it() {
        assert_eq!(
            toggle_action(&playing("a"), "b"),
            ToggleAction::StartLoading
        );
        assert_eq!(
            toggle_action(&PlaybackState::Stopped, "b"),
            ToggleAction::StartLoading
        );
        assert_eq!(toggle_action(&loading("a"), "b"), ToggleAction::StartLoading);
    }

    #[test]
    fn presses_during_load_are_dropped() {
        assert_eq!(toggle_action(&loading("a"), "a"), ToggleAction::Ignore);
    }

    #[test]
    fn stale_start_reports_are_ignored() {
        // B was requested while A was still loading; A's completion is stale
        assert_eq!(apply_started(&loading("b"), "a"), None);
        assert_eq!(apply_started(&loading("b"), "b"), Some(playing("b")));
        assert_eq!(apply_started(&PlaybackState::Stopped, "a"), None);
    }

    #[test]
    fn failure_clears_only_the_current_track() {
        assert_eq!(
            apply_error(&loading("a"), "a"),
            Some(PlaybackState::Stopped)
        );
        assert_eq!(apply_error(&loading("b"), "a"), None);
        assert_eq!(
            apply_error(&playing("a"), "a"),
            Some(PlaybackState::Stopped)
        );
    }
}
