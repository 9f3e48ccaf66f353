use thiserror::Error;

/// Audio failures. All of them degrade playback; none is fatal to the page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AudioError {
    #[error("audio context unavailable: {0}")]
    Context(String),
    #[error("fetch failed: {0}")]
    Fetch(String),
    #[error("fetch returned HTTP {0}")]
    Status(u16),
    #[error("server sent the track as an attachment ({0})")]
    Attachment(String),
    #[error("not an audio response (content-type {0:?})")]
    NotAudio(String),
    #[error("decode failed: {0}")]
    Decode(String),
    #[error("playback failed: {0}")]
    Playback(String),
    #[error("no decoded buffer")]
    NoBuffer,
}
