// Host-side tests for overlapping sound-effect bookkeeping.

use cake_core::{SfxState, SfxVoices, SFX_CLEANUP_TIMEOUT_SEC};

#[test]
fn every_trigger_gets_its_own_voice() {
    let mut voices = SfxVoices::new(SFX_CLEANUP_TIMEOUT_SEC);
    let a = voices.begin("a", 0.0);
    let b = voices.begin("b", 0.0);
    assert_ne!(a, b);
    assert_eq!(voices.len(), 2);
    assert_eq!(
        voices.state(a),
        Some(SfxState::Pending {
            deadline: SFX_CLEANUP_TIMEOUT_SEC
        })
    );
}

#[test]
fn ended_voice_is_released() {
    let mut voices = SfxVoices::new(SFX_CLEANUP_TIMEOUT_SEC);
    let id = voices.begin(1, 0.0);
    voices.mark_playing(id);
    assert_eq!(voices.state(id), Some(SfxState::Playing));
    assert_eq!(voices.expire(100.0), Vec::<i32>::new());
    assert_eq!(voices.finish(id), Some(1));
    assert!(voices.is_empty());
    assert_eq!(voices.finish(id), None);
}

#[test]
fn rejected_voice_expires_after_timeout() {
    let mut voices = SfxVoices::new(1.2);
    let id = voices.begin("clone", 9.5);
    voices.mark_rejected(id, 10.0);
    assert_eq!(voices.expire(11.0), Vec::<&str>::new());
    assert_eq!(voices.expire(11.25), vec!["clone"]);
    assert!(voices.is_empty());
}

#[test]
fn unsettled_voice_expires_after_timeout() {
    let mut voices = SfxVoices::new(1.2);
    let id = voices.begin("clone", 3.0);
    assert_eq!(voices.expire(4.0), Vec::<&str>::new());
    assert!(voices.state(id).is_some());
    assert_eq!(voices.expire(4.25), vec!["clone"]);
    assert!(voices.is_empty());
}

#[test]
fn playing_voice_outlives_its_first_deadline() {
    let mut voices = SfxVoices::new(1.0);
    let id = voices.begin(7, 0.0);
    voices.mark_playing(id);
    assert!(voices.expire(60.0).is_empty());
    assert_eq!(voices.finish(id), Some(7));
}

#[test]
fn expire_leaves_other_voices_alone() {
    let mut voices = SfxVoices::new(1.0);
    let rejected = voices.begin(1, 0.0);
    let playing = voices.begin(2, 0.0);
    let pending = voices.begin(3, 4.5);
    voices.mark_rejected(rejected, 0.0);
    voices.mark_playing(playing);
    assert_eq!(voices.expire(5.0), vec![1]);
    assert!(voices.state(playing).is_some());
    assert!(voices.state(pending).is_some());
    let mut rest = voices.drain();
    rest.sort();
    assert_eq!(rest, vec![2, 3]);
}
