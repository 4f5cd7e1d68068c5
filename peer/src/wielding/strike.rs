use std::time::Duration;

use overclean_shared::{GameInstant, NetworkObjectRef};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrikePhase {
    Idle,
    /// Swing animation running; the stun marker is due at `marker_at`
    WindUp {
        object: NetworkObjectRef,
        marker_at: GameInstant,
    },
    /// Marker stage done; the next strike is allowed at `ready_at`
    Recovery { ready_at: GameInstant },
}

/// What became due while polling
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrikeStep {
    /// Attach the stun marker to `object` if it is still held
    AttachMarker(NetworkObjectRef),
    Ready,
}

/// Local-only strike timing: trigger, marker deadline, recovery deadline.
///
/// Deadlines are checked whenever the peer updates, so nothing blocks and a
/// strike can never overlap the previous one.
pub struct StrikeSequence {
    phase: StrikePhase,
    marker_delay: Duration,
    recovery_delay: Duration,
}

impl StrikeSequence {
    pub fn new(marker_delay: Duration, recovery_delay: Duration) -> Self {
        Self {
            phase: StrikePhase::Idle,
            marker_delay,
            recovery_delay,
        }
    }

    pub fn phase(&self) -> StrikePhase {
        self.phase
    }

    pub fn is_striking(&self) -> bool {
        self.phase != StrikePhase::Idle
    }

    /// Start a strike; refused while one is already in flight
    pub fn trigger(&mut self, now: GameInstant, object: NetworkObjectRef) -> bool {
        if self.is_striking() {
            return false;
        }
        self.phase = StrikePhase::WindUp {
            object,
            marker_at: now + self.marker_delay,
        };
        true
    }

    /// Advance through every deadline reached by `now`
    pub fn poll(&mut self, now: GameInstant) -> Vec<StrikeStep> {
        let mut steps = Vec::new();
        loop {
            match self.phase {
                StrikePhase::Idle => break,
                StrikePhase::WindUp { object, marker_at } => {
                    if !marker_at.is_reached_by(&now) {
                        break;
                    }
                    steps.push(StrikeStep::AttachMarker(object));
                    // recovery counts from the marker deadline, not from this poll
                    self.phase = StrikePhase::Recovery {
                        ready_at: marker_at + self.recovery_delay,
                    };
                }
                StrikePhase::Recovery { ready_at } => {
                    if !ready_at.is_reached_by(&now) {
                        break;
                    }
                    steps.push(StrikeStep::Ready);
                    self.phase = StrikePhase::Idle;
                }
            }
        }
        steps
    }
}
