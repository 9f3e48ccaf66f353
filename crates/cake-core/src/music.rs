//! Background music: decode state and strategy selection.
//!
//! [`BackgroundMusic`] owns the decisions (which strategy to use, what to
//! stop first, when a start is a no-op); a [`MusicSink`] performs them
//! against the real audio graph. Two strategies exist: looping a decoded
//! buffer through the audio graph, or playing the media element. At most
//! one of them is active at a time.

use crate::error::AudioError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeState {
    Idle,
    Decoding,
    Ready,
    /// Last attempt failed; the next start tries again.
    Unavailable,
    /// The server refused in-memory decoding for this track.
    Refused,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Playback {
    Stopped,
    Buffer,
    Element,
}

/// Side of the music player that touches the platform.
pub trait MusicSink {
    /// Start a looping buffer-backed node. Fails when no buffer is held.
    fn start_buffer_loop(&mut self, volume: f32) -> Result<(), AudioError>;
    /// Stop and disconnect the live buffer node, if any.
    fn stop_buffer_loop(&mut self);
    /// Begin media element playback. Success only means the request was made.
    fn play_element(&mut self, volume: f32) -> Result<(), AudioError>;
    fn pause_element(&mut self);
    /// Element is playing and has made progress.
    fn element_audible(&self) -> bool;
    /// Release the audio context.
    fn close(&mut self) {}
}

#[derive(Clone, Debug)]
pub struct BackgroundMusic {
    decode: DecodeState,
    playback: Playback,
    started_once: bool,
    volume: f32,
}

impl BackgroundMusic {
    pub fn new(volume: f32) -> Self {
        Self {
            decode: DecodeState::Idle,
            playback: Playback::Stopped,
            started_once: false,
            volume,
        }
    }

    pub fn decode_state(&self) -> DecodeState {
        self.decode
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// True when a decode should be attempted before starting.
    pub fn needs_decode(&self) -> bool {
        matches!(self.decode, DecodeState::Idle | DecodeState::Unavailable)
    }

    /// Claim the decode; returns false when one is running, done or refused.
    pub fn begin_decode(&mut self) -> bool {
        if !self.needs_decode() {
            return false;
        }
        self.decode = DecodeState::Decoding;
        true
    }

    pub fn finish_decode(&mut self, result: Result<(), AudioError>) {
        self.decode = match result {
            Ok(()) => DecodeState::Ready,
            Err(e @ (AudioError::Attachment(_) | AudioError::NotAudio(_))) => {
                log::warn!("[music] track refused for decoding: {}", e);
                DecodeState::Refused
            }
            Err(e) => {
                log::warn!("[music] decode unavailable, using media element: {}", e);
                DecodeState::Unavailable
            }
        };
    }

    pub fn is_playing<S: MusicSink + ?Sized>(&self, sink: &S) -> bool {
        self.playback == Playback::Buffer || sink.element_audible()
    }

    /// Start background playback, preferring the decoded buffer.
    ///
    /// Starting while already playing is a no-op, so a double toggle never
    /// leaves two buffer nodes running.
    pub fn start<S: MusicSink + ?Sized>(&mut self, sink: &mut S) -> Playback {
        if self.is_playing(sink) {
            log::debug!("[music] already playing ({:?})", self.playback);
            return self.playback;
        }
        if self.decode == DecodeState::Ready {
            sink.pause_element();
            match sink.start_buffer_loop(self.volume) {
                Ok(()) => {
                    self.playback = Playback::Buffer;
                    self.started_once = true;
                    log::info!("[music] playing via decoded buffer");
                    return self.playback;
                }
                Err(e) => log::warn!("[music] buffer start failed: {}", e),
            }
        }
        if self.playback == Playback::Buffer {
            sink.stop_buffer_loop();
        }
        self.playback = match sink.play_element(self.volume) {
            Ok(()) => {
                self.started_once = true;
                log::info!("[music] playing via media element");
                Playback::Element
            }
            Err(e) => {
                log::warn!("[music] media element play failed: {}", e);
                Playback::Stopped
            }
        };
        self.playback
    }

    /// Stop whichever strategy is active. Idempotent.
    pub fn stop<S: MusicSink + ?Sized>(&mut self, sink: &mut S) {
        match self.playback {
            Playback::Buffer => sink.stop_buffer_loop(),
            Playback::Element | Playback::Stopped => sink.pause_element(),
        }
        self.playback = Playback::Stopped;
    }

    /// Flip playback; returns whether music is now playing.
    pub fn toggle<S: MusicSink + ?Sized>(&mut self, sink: &mut S) -> bool {
        if self.is_playing(sink) {
            self.stop(sink);
            false
        } else {
            self.start(sink) != Playback::Stopped
        }
    }

    /// Start on the first user gesture only; later calls do nothing.
    pub fn start_once<S: MusicSink + ?Sized>(&mut self, sink: &mut S) -> bool {
        if self.started_once {
            return false;
        }
        self.start(sink) != Playback::Stopped
    }

    pub fn has_started(&self) -> bool {
        self.started_once
    }

    pub fn teardown<S: MusicSink + ?Sized>(&mut self, sink: &mut S) {
        self.stop(sink);
        sink.close();
    }
}

/// Decide whether a fetched track can be decoded in memory.
///
/// Non-OK statuses, attachment dispositions and non-audio content types are
/// refused, leaving the media element as the only strategy.
pub fn vet_track_response(
    ok: bool,
    status: u16,
    content_type: Option<&str>,
    content_disposition: Option<&str>,
) -> Result<(), AudioError> {
    if !ok {
        return Err(AudioError::Status(status));
    }
    let disposition = content_disposition.unwrap_or_default();
    if disposition.to_ascii_lowercase().contains("attachment") {
        return Err(AudioError::Attachment(disposition.to_string()));
    }
    let content_type = content_type.unwrap_or_default().to_ascii_lowercase();
    if !content_type.starts_with("audio/") {
        return Err(AudioError::NotAudio(content_type));
    }
    Ok(())
}
