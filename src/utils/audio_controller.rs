use crate::utils::mediaplay::AudioPlayer;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub enum AudioCommand {
    Play {
        track_id: String,
        url: String,
        /// Live streams decode progressively instead of downloading whole.
        live: bool,
    },
    Stop,
    SetVolume(f32),
}

/// Owns the audio thread. The UI sends commands over a channel and reads
/// playback state back through shared mirrors, so no audio work ever blocks
/// the frame loop.
///
/// Load outcomes are reported through one-shot mirrors: `take_started`
/// yields the id of a track that finished loading and began playback,
/// `take_error` yields the id and message of a failed load. The playback
/// coordinator drains both every frame.
pub struct AudioController {
    command_tx: Sender<AudioCommand>,
    position: Arc<Mutex<Duration>>,
    duration: Arc<Mutex<Option<Duration>>>,
    is_finished: Arc<Mutex<bool>>,
    started: Arc<Mutex<Option<String>>>,
    last_error: Arc<Mutex<Option<(String, String)>>>,
    current_volume: Arc<Mutex<f32>>,
}

impl AudioController {
    pub fn new() -> Self {
        let (command_tx, command_rx): (Sender<AudioCommand>, Receiver<AudioCommand>) = channel();
        let position = Arc::new(Mutex::new(Duration::ZERO));
        let duration = Arc::new(Mutex::new(None));
        let is_finished = Arc::new(Mutex::new(false));
        let started = Arc::new(Mutex::new(None));
        let last_error = Arc::new(Mutex::new(None));
        let current_volume = Arc::new(Mutex::new(1.0));

        let position_clone = position.clone();
        let duration_clone = duration.clone();
        let is_finished_clone = is_finished.clone();
        let started_clone = started.clone();
        let last_error_clone = last_error.clone();
        let current_volume_clone = current_volume.clone();

        std::thread::spawn(move || {
            let rt = match crate::utils::error_handling::create_runtime() {
                Ok(r) => r,
                Err(e) => {
                    log::error!(
                        "[AudioController] Failed to create runtime for audio thread: {}",
                        e
                    );
                    return;
                }
            };
            let mut player: Option<AudioPlayer> = None;

            loop {
                while let Ok(cmd) = command_rx.try_recv() {
                    match cmd {
                        AudioCommand::Play { track_id, url, live } => {
                            log::info!(
                                "[AudioController] Received Play command for track {}",
                                track_id
                            );

                            // Reset finished flag BEFORE loading new track
                            if let Some(mut lock) = crate::utils::error_handling::safe_lock(
                                &is_finished_clone,
                                "AudioController",
                            ) {
                                *lock = false;
                            }

                            // Cleanup old player first to free memory
                            if let Some(mut old_player) = player.take() {
                                log::debug!("[AudioController] Stopping previous player");
                                old_player.stop();
                                drop(old_player);
                            }

                            let loaded = if live {
                                AudioPlayer::new_and_play_stream(&url)
                            } else {
                                rt.block_on(AudioPlayer::new_and_play(&url))
                            };
                            match loaded {
                                Ok(mut p) => {
                                    log::info!("[AudioController] Audio playback started");
                                    if let Some(lock) = crate::utils::error_handling::safe_lock(
                                        &current_volume_clone,
                                        "AudioController",
                                    ) {
                                        p.set_volume(*lock);
                                    }
                                    if let Some(mut lock) = crate::utils::error_handling::safe_lock(
                                        &duration_clone,
                                        "AudioController",
                                    ) {
                                        *lock = p.get_duration();
                                    }
                                    if let Some(mut lock) = crate::utils::error_handling::safe_lock(
                                        &started_clone,
                                        "AudioController",
                                    ) {
                                        *lock = Some(track_id);
                                    }
                                    player = Some(p);
                                }
                                Err(e) => {
                                    log::error!(
                                        "[AudioController] Error loading track {}: {}",
                                        track_id,
                                        e
                                    );
                                    if let Some(mut lock) = crate::utils::error_handling::safe_lock(
                                        &last_error_clone,
                                        "AudioController",
                                    ) {
                                        *lock = Some((track_id, e.to_string()));
                                    }
                                }
                            }
                        }
                        AudioCommand::Stop => {
                            log::debug!("[AudioController] Received Stop command");
                            if let Some(mut p) = player.take() {
                                p.stop();
                                drop(p);
                            }
                            if let Some(mut lock) = crate::utils::error_handling::safe_lock(
                                &position_clone,
                                "AudioController",
                            ) {
                                *lock = Duration::ZERO;
                            }
                            if let Some(mut lock) = crate::utils::error_handling::safe_lock(
                                &duration_clone,
                                "AudioController",
                            ) {
                                *lock = None;
                            }
                            if let Some(mut lock) = crate::utils::error_handling::safe_lock(
                                &is_finished_clone,
                                "AudioController",
                            ) {
                                *lock = true;
                            }
                        }
                        AudioCommand::SetVolume(vol) => {
                            if let Some(mut lock) = crate::utils::error_handling::safe_lock(
                                &current_volume_clone,
                                "AudioController",
                            ) {
                                *lock = vol;
                            }
                            if let Some(p) = player.as_mut() {
                                p.set_volume(vol);
                            }
                        }
                    }
                }

                // Update position and finished status
                if let Some(p) = player.as_ref() {
                    if let Some(mut lock) =
                        crate::utils::error_handling::safe_lock(&position_clone, "AudioController")
                    {
                        *lock = p.get_position();
                    }
                    if let Some(mut lock) = crate::utils::error_handling::safe_lock(
                        &is_finished_clone,
                        "AudioController",
                    ) {
                        *lock = p.is_finished();
                    }
                }

                std::thread::sleep(Duration::from_millis(50));
            }
        });

        Self {
            command_tx,
            position,
            duration,
            is_finished,
            started,
            last_error,
            current_volume,
        }
    }

    pub fn play(&self, track_id: String, url: String, live: bool) {
        let _ = self
            .command_tx
            .send(AudioCommand::Play { track_id, url, live });
    }

    pub fn stop(&self) {
        let _ = self.command_tx.send(AudioCommand::Stop);
    }

    pub fn set_volume(&self, volume: f32) {
        let _ = self.command_tx.send(AudioCommand::SetVolume(volume));
    }

    pub fn get_position(&self) -> Duration {
        crate::utils::error_handling::safe_lock(&self.position, "AudioController")
            .map(|lock| *lock)
            .unwrap_or(Duration::ZERO)
    }

    pub fn get_duration(&self) -> Option<Duration> {
        crate::utils::error_handling::safe_lock(&self.duration, "AudioController")
            .and_then(|lock| *lock)
    }

    pub fn is_finished(&self) -> bool {
        crate::utils::error_handling::safe_lock(&self.is_finished, "AudioController")
            .map(|lock| *lock)
            .unwrap_or(true)
    }

    pub fn get_volume(&self) -> f32 {
        crate::utils::error_handling::safe_lock(&self.current_volume, "AudioController")
            .map(|lock| *lock)
            .unwrap_or(1.0)
    }

    /// Take the id of a track that just started playing, if any.
    pub fn take_started(&self) -> Option<String> {
        crate::utils::error_handling::safe_lock(&self.started, "AudioController")
            .and_then(|mut lock| lock.take())
    }

    /// Take the most recent load failure as (track id, message), if any.
    pub fn take_error(&self) -> Option<(String, String)> {
        crate::utils::error_handling::safe_lock(&self.last_error, "AudioController")
            .and_then(|mut lock| lock.take())
    }
}

impl Default for AudioController {
    fn default() -> Self {
        Self::new()
    }
}
