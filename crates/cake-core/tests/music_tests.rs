// Host-side tests for the background music state machine, driven through a
// recording sink in place of the browser audio stack.

use cake_core::music::vet_track_response;
use cake_core::{AudioError, BackgroundMusic, DecodeState, MusicSink, Playback, MUSIC_VOLUME};

#[derive(Default)]
struct FakeSink {
    has_buffer: bool,
    element_blocked: bool,
    buffer_nodes: usize,
    buffer_starts: usize,
    element_playing: bool,
    element_volume: f32,
    closed: bool,
}

impl MusicSink for FakeSink {
    fn start_buffer_loop(&mut self, _volume: f32) -> Result<(), AudioError> {
        if !self.has_buffer {
            return Err(AudioError::NoBuffer);
        }
        self.buffer_nodes += 1;
        self.buffer_starts += 1;
        Ok(())
    }

    fn stop_buffer_loop(&mut self) {
        self.buffer_nodes = 0;
    }

    fn play_element(&mut self, volume: f32) -> Result<(), AudioError> {
        if self.element_blocked {
            return Err(AudioError::Playback("NotAllowedError".into()));
        }
        self.element_playing = true;
        self.element_volume = volume;
        Ok(())
    }

    fn pause_element(&mut self) {
        self.element_playing = false;
    }

    fn element_audible(&self) -> bool {
        self.element_playing
    }

    fn close(&mut self) {
        self.closed = true;
    }
}

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn decoded() -> (BackgroundMusic, FakeSink) {
    let mut music = BackgroundMusic::new(MUSIC_VOLUME);
    assert!(music.begin_decode());
    music.finish_decode(Ok(()));
    let sink = FakeSink {
        has_buffer: true,
        ..FakeSink::default()
    };
    (music, sink)
}

#[test]
fn decode_is_claimed_once() {
    let mut music = BackgroundMusic::new(MUSIC_VOLUME);
    assert!(music.needs_decode());
    assert!(music.begin_decode());
    assert_eq!(music.decode_state(), DecodeState::Decoding);
    assert!(!music.begin_decode());
    assert!(!music.needs_decode());
}

#[test]
fn failed_decode_is_unavailable_not_fatal() {
    init_logs();
    let mut music = BackgroundMusic::new(MUSIC_VOLUME);
    music.begin_decode();
    music.finish_decode(Err(AudioError::Status(404)));
    assert_eq!(music.decode_state(), DecodeState::Unavailable);
    let mut sink = FakeSink::default();
    assert_eq!(music.start(&mut sink), Playback::Element);
    assert!((sink.element_volume - 0.55).abs() < 1e-6);
}

#[test]
fn failed_decode_is_retried_on_the_next_start() {
    init_logs();
    let mut music = BackgroundMusic::new(MUSIC_VOLUME);
    assert!(music.begin_decode());
    music.finish_decode(Err(AudioError::Fetch("network blip".into())));
    assert_eq!(music.decode_state(), DecodeState::Unavailable);
    assert!(music.needs_decode());
    assert!(music.begin_decode());
    assert_eq!(music.decode_state(), DecodeState::Decoding);
    music.finish_decode(Ok(()));

    let mut sink = FakeSink {
        has_buffer: true,
        ..FakeSink::default()
    };
    assert_eq!(music.start(&mut sink), Playback::Buffer);
}

#[test]
fn refused_track_is_never_decoded_again() {
    init_logs();
    for refusal in [
        AudioError::Attachment("attachment".into()),
        AudioError::NotAudio("text/html".into()),
    ] {
        let mut music = BackgroundMusic::new(MUSIC_VOLUME);
        music.begin_decode();
        music.finish_decode(Err(refusal));
        assert_eq!(music.decode_state(), DecodeState::Refused);
        assert!(!music.needs_decode());
        assert!(!music.begin_decode());
        let mut sink = FakeSink::default();
        assert_eq!(music.start(&mut sink), Playback::Element);
    }
}

#[test]
fn ready_buffer_is_preferred_over_element() {
    let (mut music, mut sink) = decoded();
    assert_eq!(music.start(&mut sink), Playback::Buffer);
    assert_eq!(sink.buffer_nodes, 1);
    assert!(!sink.element_playing);
    assert!(music.is_playing(&sink));
}

#[test]
fn double_start_keeps_a_single_buffer_node() {
    let (mut music, mut sink) = decoded();
    music.start(&mut sink);
    music.start(&mut sink);
    assert_eq!(sink.buffer_nodes, 1);
    assert_eq!(sink.buffer_starts, 1);
}

#[test]
fn buffer_failure_falls_back_to_element() {
    init_logs();
    let (mut music, mut sink) = decoded();
    sink.has_buffer = false;
    assert_eq!(music.start(&mut sink), Playback::Element);
    assert!(sink.element_playing);
    assert_eq!(sink.buffer_nodes, 0);
}

#[test]
fn blocked_element_degrades_to_stopped() {
    let mut music = BackgroundMusic::new(MUSIC_VOLUME);
    let mut sink = FakeSink {
        element_blocked: true,
        ..FakeSink::default()
    };
    assert_eq!(music.start(&mut sink), Playback::Stopped);
    assert!(!music.is_playing(&sink));
    assert!(!music.has_started());
}

#[test]
fn stop_is_idempotent() {
    let (mut music, mut sink) = decoded();
    music.start(&mut sink);
    music.stop(&mut sink);
    music.stop(&mut sink);
    assert_eq!(music.playback(), Playback::Stopped);
    assert_eq!(sink.buffer_nodes, 0);
    assert!(!music.is_playing(&sink));
}

#[test]
fn toggle_flips_between_playing_and_stopped() {
    let (mut music, mut sink) = decoded();
    assert!(music.toggle(&mut sink));
    assert!(!music.toggle(&mut sink));
    assert!(music.toggle(&mut sink));
    assert_eq!(sink.buffer_nodes, 1);
}

#[test]
fn externally_started_element_counts_as_playing() {
    let mut music = BackgroundMusic::new(MUSIC_VOLUME);
    let mut sink = FakeSink {
        element_playing: true,
        ..FakeSink::default()
    };
    assert!(music.is_playing(&sink));
    assert!(!music.toggle(&mut sink));
    assert!(!sink.element_playing);
}

#[test]
fn start_once_only_fires_on_first_gesture() {
    let (mut music, mut sink) = decoded();
    assert!(music.start_once(&mut sink));
    music.stop(&mut sink);
    assert!(!music.start_once(&mut sink));
    assert!(!music.is_playing(&sink));
}

#[test]
fn teardown_stops_and_closes() {
    let (mut music, mut sink) = decoded();
    music.start(&mut sink);
    music.teardown(&mut sink);
    assert_eq!(sink.buffer_nodes, 0);
    assert!(sink.closed);
}

#[test]
fn response_vetting_refuses_non_audio() {
    assert_eq!(
        vet_track_response(false, 404, Some("audio/mpeg"), None),
        Err(AudioError::Status(404))
    );
    assert!(matches!(
        vet_track_response(true, 200, Some("audio/mpeg"), Some("attachment; filename=a.mp3")),
        Err(AudioError::Attachment(_))
    ));
    assert!(matches!(
        vet_track_response(true, 200, Some("text/html"), None),
        Err(AudioError::NotAudio(_))
    ));
    assert!(matches!(
        vet_track_response(true, 200, None, None),
        Err(AudioError::NotAudio(_))
    ));
    assert_eq!(
        vet_track_response(true, 200, Some("Audio/MPEG"), Some("inline")),
        Ok(())
    );
}
