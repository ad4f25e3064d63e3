use futures_util::StreamExt;
use minimp3::{Decoder as Mp3Decoder, Frame};
use rodio::{Decoder, OutputStream, Sink, Source};
use std::io::Cursor;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

// Rolling buffer bounds for live streams
const STREAM_BUFFER_MAX: usize = 5 * 1024 * 1024;
const STREAM_BUFFER_KEEP: usize = 2 * 1024 * 1024;
const STREAM_STALL_TIMEOUT: Duration = Duration::from_secs(5);

/// One playing source bound to the process-wide audio output.
///
/// Finite clips (catalog previews, generated tracks) are downloaded whole
/// before decoding; live radio streams are decoded chunk by chunk as bytes
/// arrive, with a bounded rolling buffer.
pub struct AudioPlayer {
    sink: Sink,
    // Must outlive the sink or the device closes mid-playback
    _stream: OutputStream,
    total_duration: Option<Duration>,
    started_at: Instant,
}

impl AudioPlayer {
    /// Download `url` in full, decode it, and start playback. Only for
    /// bounded bodies; live streams go through [`Self::new_and_play_stream`].
    pub async fn new_and_play(url: &str) -> Result<Self, Box<dyn std::error::Error>> {
        log::debug!("[AudioPlayer] Downloading audio from {}", url);

        let response = crate::utils::http::client().get(url).send().await?;
        if !response.status().is_success() {
            return Err(format!("Audio fetch returned status {}", response.status()).into());
        }
        let bytes = response.bytes().await?.to_vec();
        log::debug!("[AudioPlayer] Downloaded {} bytes", bytes.len());

        let (stream, stream_handle) = OutputStream::try_default()?;
        let sink = Sink::try_new(&stream_handle)?;

        let source = Decoder::new(Cursor::new(bytes))?;
        let total_duration = source.total_duration();

        sink.append(source);
        sink.play();

        Ok(Self {
            sink,
            _stream: stream,
            total_duration,
            started_at: Instant::now(),
        })
    }

    /// Start progressive playback of a live MP3 stream: a worker thread
    /// downloads and decodes chunks, the sink plays samples as they arrive.
    /// The body is never held in full, so an endless stream is fine.
    pub fn new_and_play_stream(url: &str) -> Result<Self, Box<dyn std::error::Error>> {
        log::info!("[AudioPlayer] Starting progressive stream from {}", url);

        let (stream, stream_handle) = OutputStream::try_default()?;
        let sink = Sink::try_new(&stream_handle)?;

        let (sample_tx, sample_rx): (Sender<Vec<i16>>, Receiver<Vec<i16>>) = channel();
        let finished = Arc::new(Mutex::new(false));
        let stream_error: Arc<Mutex<Option<String>>> = Arc::new(Mutex::new(None));

        let url_owned = url.to_string();
        let finished_clone = Arc::clone(&finished);
        let error_clone = Arc::clone(&stream_error);
        std::thread::spawn(move || {
            let rt = match crate::utils::error_handling::create_runtime() {
                Ok(r) => r,
                Err(e) => {
                    log::error!("[AudioPlayer] No runtime for stream thread: {}", e);
                    report_stream_end(&finished_clone, &error_clone, Some(e));
                    return;
                }
            };
            match rt.block_on(stream_audio(&url_owned, sample_tx)) {
                Ok(()) => report_stream_end(&finished_clone, &error_clone, None),
                Err(e) => {
                    log::error!("[AudioPlayer] Streaming error: {}", e);
                    report_stream_end(&finished_clone, &error_clone, Some(e.to_string()));
                }
            }
        });

        // Give the worker a moment so an immediately failing URL (bad host,
        // non-2xx) is reported as an error instead of silent playback
        std::thread::sleep(Duration::from_millis(150));
        if let Some(message) = crate::utils::error_handling::safe_lock(&stream_error, "AudioPlayer")
            .and_then(|mut lock| lock.take())
        {
            return Err(message.into());
        }

        // Jamendo radio streams are 44.1 kHz stereo MP3
        let source = StreamingSource::new(sample_rx, 44100, 2, finished);
        sink.append(source);
        sink.play();

        Ok(Self {
            sink,
            _stream: stream,
            total_duration: None,
            started_at: Instant::now(),
        })
    }

    pub fn stop(&mut self) {
        self.sink.stop();
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.sink.set_volume(volume.clamp(0.0, 1.0));
    }

    /// Wall-clock playback position since start.
    pub fn get_position(&self) -> Duration {
        let position = self.started_at.elapsed();
        match self.total_duration {
            Some(total) => position.min(total),
            None => position,
        }
    }

    pub fn get_duration(&self) -> Option<Duration> {
        self.total_duration
    }

    /// True once the sink has drained all queued audio.
    pub fn is_finished(&self) -> bool {
        self.sink.empty()
    }
}

fn report_stream_end(
    finished: &Arc<Mutex<bool>>,
    error: &Arc<Mutex<Option<String>>>,
    message: Option<String>,
) {
    if let Some(message) = message {
        if let Some(mut lock) = crate::utils::error_handling::safe_lock(error, "AudioPlayer") {
            *lock = Some(message);
        }
    }
    if let Some(mut lock) = crate::utils::error_handling::safe_lock(finished, "AudioPlayer") {
        *lock = true;
    }
}

/// Rodio source fed by the streaming thread. Yields silence while the next
/// chunk is in flight and ends when the stream finishes or stalls.
struct StreamingSource {
    sample_rx: Receiver<Vec<i16>>,
    current_samples: Vec<i16>,
    sample_index: usize,
    sample_rate: u32,
    channels: u16,
    finished: Arc<Mutex<bool>>,
    last_sample_at: Instant,
}

impl StreamingSource {
    fn new(
        sample_rx: Receiver<Vec<i16>>,
        sample_rate: u32,
        channels: u16,
        finished: Arc<Mutex<bool>>,
    ) -> Self {
        Self {
            sample_rx,
            current_samples: Vec::new(),
            sample_index: 0,
            sample_rate,
            channels,
            finished,
            last_sample_at: Instant::now(),
        }
    }
}

impl Iterator for StreamingSource {
    type Item = i16;

    fn next(&mut self) -> Option<Self::Item> {
        if self.sample_index < self.current_samples.len() {
            let sample = self.current_samples[self.sample_index];
            self.sample_index += 1;
            return Some(sample);
        }

        match self.sample_rx.try_recv() {
            Ok(samples) => {
                self.current_samples = samples;
                self.sample_index = 0;
                self.last_sample_at = Instant::now();
                if self.current_samples.is_empty() {
                    Some(0)
                } else {
                    self.sample_index = 1;
                    Some(self.current_samples[0])
                }
            }
            Err(_) => {
                let is_finished = crate::utils::error_handling::safe_lock(
                    &self.finished,
                    "StreamingSource",
                )
                .map(|lock| *lock)
                .unwrap_or(true);

                if is_finished {
                    None
                } else if self.last_sample_at.elapsed() > STREAM_STALL_TIMEOUT {
                    log::error!("[StreamingSource] Stream stalled, ending playback");
                    None
                } else {
                    // Silence while waiting for the next chunk
                    Some(0)
                }
            }
        }
    }
}

impl Source for StreamingSource {
    fn current_frame_len(&self) -> Option<usize> {
        None
    }

    fn channels(&self) -> u16 {
        self.channels
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn total_duration(&self) -> Option<Duration> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source_with(finished: bool) -> (Sender<Vec<i16>>, StreamingSource) {
        let (tx, rx) = channel();
        let flag = Arc::new(Mutex::new(finished));
        (tx, StreamingSource::new(rx, 44100, 2, flag))
    }

    #[test]
    fn plays_chunks_as_they_arrive() {
        let (tx, mut source) = source_with(false);
        tx.send(vec![1, 2, 3]).unwrap();

        assert_eq!(source.next(), Some(1));
        assert_eq!(source.next(), Some(2));
        assert_eq!(source.next(), Some(3));
        // Nothing queued yet: silence keeps the sink alive instead of ending it
        assert_eq!(source.next(), Some(0));
    }

    #[test]
    fn ends_once_the_stream_reports_finished() {
        let (tx, mut source) = source_with(true);
        drop(tx);
        assert_eq!(source.next(), None);
    }

    #[test]
    fn drains_queued_samples_before_checking_finished() {
        let (tx, mut source) = source_with(false);
        tx.send(vec![7]).unwrap();
        drop(tx);

        assert_eq!(source.next(), Some(7));
    }
}

/// Download `url` chunk by chunk and push decoded MP3 frames to the sink.
/// Returns when the stream ends or the player is dropped (send fails).
async fn stream_audio(
    url: &str,
    sample_tx: Sender<Vec<i16>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = crate::utils::http::client().get(url).send().await?;
    if !response.status().is_success() {
        return Err(format!("Stream fetch returned status {}", response.status()).into());
    }

    let mut mp3_buffer: Vec<u8> = Vec::new();
    let mut frames_sent = 0usize;

    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        mp3_buffer.extend_from_slice(&chunk);

        // Decode from the buffer start each pass; skip frames already sent
        let mut decoder = Mp3Decoder::new(&mp3_buffer[..]);
        let mut frame_index = 0usize;
        while let Ok(Frame { data, .. }) = decoder.next_frame() {
            if frame_index >= frames_sent {
                if sample_tx.send(data).is_err() {
                    log::debug!("[AudioPlayer] Stream playback stopped by listener");
                    return Ok(());
                }
                frames_sent += 1;
            }
            frame_index += 1;
        }

        if mp3_buffer.len() > STREAM_BUFFER_MAX {
            let trim = mp3_buffer.len() - STREAM_BUFFER_KEEP;
            mp3_buffer.drain(0..trim);
            frames_sent = 0;
        }
    }

    log::info!("[AudioPlayer] Stream ended");
    Ok(())
}
