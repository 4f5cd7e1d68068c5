use std::time::Duration;

use log::info;

use overclean_shared::{ActionError, GameInstant, NetworkObjectRef};

use crate::{
    scene::SceneObjects,
    session::{match_clock::ClockTick, MatchClock, ProgressTracker},
};

/// One match as seen by one peer: the shared countdown plus the cleaning
/// progress measured against the cleanables registered on the peer.
pub struct MatchSession {
    duration: Duration,
    clock: MatchClock,
    progress: ProgressTracker,
}

impl MatchSession {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            clock: MatchClock::new(),
            progress: ProgressTracker::new(),
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn clock(&self) -> &MatchClock {
        &self.clock
    }

    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }

    pub fn is_running(&self) -> bool {
        self.clock.target_completion().is_some() && !self.clock.has_ended()
    }

    /// Completion instant for a match the authority starts at `now`
    pub fn target_for(&self, now: GameInstant) -> GameInstant {
        now + self.duration
    }

    pub fn remaining(&self, now: &GameInstant) -> Duration {
        self.clock.remaining(now)
    }

    pub fn clean_percentage(&self, scene: &SceneObjects) -> f32 {
        self.progress.clean_percentage(scene)
    }

    // Crate-public

    /// Apply the authority's target. A replayed start is a no-op.
    pub(crate) fn start(&mut self, target: GameInstant) -> Result<bool, ActionError> {
        let started = self.clock.set_target(target)?;
        if started {
            info!(
                "Match running until {:?}, {} cleanable weight in scene",
                target,
                self.progress.total_weight()
            );
        }
        Ok(started)
    }

    pub(crate) fn track_cleanable(&mut self, object: NetworkObjectRef, weight: u32) {
        self.progress.track(object, weight);
    }

    pub(crate) fn untrack_cleanable(&mut self, object: &NetworkObjectRef) -> bool {
        self.progress.untrack(object)
    }

    pub(crate) fn poll(&mut self, now: &GameInstant) -> ClockTick {
        self.clock.poll(now)
    }
}
