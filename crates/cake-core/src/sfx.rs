//! Bookkeeping for overlapping sound-effect clones.
//!
//! Every trigger gets its own instance holding the cloned element. An
//! instance is released when its playback ends or errors. Until the play
//! request resolves it carries a deadline, so a rejected or never-settled
//! request is still released once the cleanup timeout elapses.

use fnv::FnvHashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SfxId(u64);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SfxState {
    /// Play requested, promise not settled yet; released at `deadline`
    /// unless playback starts first.
    Pending { deadline: f64 },
    /// Playing; released by the `ended` or `error` notification.
    Playing,
    /// Play rejected; released at `deadline` (seconds).
    Expiring { deadline: f64 },
}

impl SfxState {
    fn deadline(self) -> Option<f64> {
        match self {
            Self::Pending { deadline } | Self::Expiring { deadline } => Some(deadline),
            Self::Playing => None,
        }
    }
}

#[derive(Debug)]
struct SfxInstance<T> {
    payload: T,
    state: SfxState,
}

#[derive(Debug)]
pub struct SfxVoices<T> {
    voices: FnvHashMap<SfxId, SfxInstance<T>>,
    next_id: u64,
    timeout_sec: f64,
}

impl<T> SfxVoices<T> {
    pub fn new(timeout_sec: f64) -> Self {
        Self {
            voices: FnvHashMap::default(),
            next_id: 0,
            timeout_sec,
        }
    }

    pub fn len(&self) -> usize {
        self.voices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voices.is_empty()
    }

    pub fn state(&self, id: SfxId) -> Option<SfxState> {
        self.voices.get(&id).map(|v| v.state)
    }

    /// Track a new clone whose play request was made at `now`.
    pub fn begin(&mut self, payload: T, now: f64) -> SfxId {
        let id = SfxId(self.next_id);
        self.next_id += 1;
        self.voices.insert(
            id,
            SfxInstance {
                payload,
                state: SfxState::Pending {
                    deadline: now + self.timeout_sec,
                },
            },
        );
        id
    }

    /// Playback started; the voice now lives until it ends or errors.
    pub fn mark_playing(&mut self, id: SfxId) {
        if let Some(v) = self.voices.get_mut(&id) {
            v.state = SfxState::Playing;
        }
    }

    /// The play request failed; schedule release after the timeout.
    pub fn mark_rejected(&mut self, id: SfxId, now: f64) {
        if let Some(v) = self.voices.get_mut(&id) {
            v.state = SfxState::Expiring {
                deadline: now + self.timeout_sec,
            };
        }
    }

    /// Playback ended or failed; hands back the payload for removal.
    pub fn finish(&mut self, id: SfxId) -> Option<T> {
        self.voices.remove(&id).map(|v| v.payload)
    }

    /// Release every instance whose deadline has passed.
    pub fn expire(&mut self, now: f64) -> Vec<T> {
        let due: Vec<SfxId> = self
            .voices
            .iter()
            .filter(|(_, v)| v.state.deadline().is_some_and(|d| d <= now))
            .map(|(id, _)| *id)
            .collect();
        due.into_iter().filter_map(|id| self.finish(id)).collect()
    }

    /// Drop everything, e.g. on teardown.
    pub fn drain(&mut self) -> Vec<T> {
        self.voices.drain().map(|(_, v)| v.payload).collect()
    }
}
