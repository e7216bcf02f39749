//! **SoundPlayer** — playback of the rig's sound cues.
//!
//! The rig pushes `PlaySound { name }` frames; the player fetches the file from
//! the rig's sound directory and plays it through one `rodio::Sink`. A new cue
//! interrupts whatever is still playing; cues never queue.
//!
//! Not `Send` (rodio's output stream is thread-bound); keep it on the link
//! thread.

use std::io::Cursor;

use rodio::{OutputStream, OutputStreamHandle, Sink, Source};
use tracing::debug;

use crate::error::{PanelError, PanelResult};

pub struct SoundPlayer {
    _stream: OutputStream,
    _stream_handle: OutputStreamHandle,
    sink: Sink,
    client: reqwest::Client,
    /// Sound directory URL including the trailing slash, e.g. `http://rig/sounds/`.
    base: String,
}

impl SoundPlayer {
    /// Open the default output device and bind the player to the rig's sound
    /// directory.
    pub fn new(base: String) -> PanelResult<Self> {
        let (stream, stream_handle) =
            OutputStream::try_default().map_err(|e| PanelError::Playback(e.to_string()))?;
        let sink = Sink::try_new(&stream_handle).map_err(|e| PanelError::Playback(e.to_string()))?;
        debug!("SoundPlayer: sink ready, base {}", base);
        Ok(Self {
            _stream: stream,
            _stream_handle: stream_handle,
            sink,
            client: reqwest::Client::new(),
            base,
        })
    }

    /// Fetch `<base><name>` and play it, cutting off any in-flight cue.
    pub async fn play_named(&self, name: &str) -> PanelResult<()> {
        let url = format!("{}{}", self.base, name);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| PanelError::SoundFetch(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(PanelError::SoundFetch(format!(
                "{} -> {}",
                url,
                resp.status()
            )));
        }
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| PanelError::SoundFetch(e.to_string()))?;
        self.play_bytes(&bytes)
    }

    /// Decode and play raw audio bytes (WAV/MP3). No-op on empty input.
    pub fn play_bytes(&self, bytes: &[u8]) -> PanelResult<()> {
        if bytes.is_empty() {
            return Ok(());
        }
        self.sink.stop();
        let source = rodio::Decoder::new(Cursor::new(bytes.to_vec()))
            .map_err(|e| PanelError::Playback(format!("Decode failed: {}", e)))?;
        self.sink.append(source.convert_samples::<f32>());
        self.sink.play();
        Ok(())
    }

    /// Stop playback and clear the queue.
    pub fn stop(&self) {
        self.sink.stop();
    }

    /// Whether a cue is playing or queued.
    pub fn is_playing(&self) -> bool {
        !self.sink.empty()
    }
}
