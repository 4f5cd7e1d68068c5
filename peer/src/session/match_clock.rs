use std::time::Duration;

use log::warn;

use overclean_shared::{ActionError, GameInstant};

/// Result of polling the clock once
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClockTick {
    /// Set when the remaining time should be re-announced
    pub time_changed: Option<Duration>,
    /// Set exactly once, on the poll where remaining time first reaches zero
    pub ended: bool,
}

/// Countdown towards the completion instant chosen by the match authority.
///
/// Every peer derives the remaining time from the same broadcast target and
/// its own clock; nobody re-broadcasts remaining time.
pub struct MatchClock {
    target_completion: Option<GameInstant>,
    last_observed_remaining: Option<Duration>,
    ended: bool,
}

impl MatchClock {
    pub fn new() -> Self {
        Self {
            target_completion: None,
            last_observed_remaining: None,
            ended: false,
        }
    }

    pub fn target_completion(&self) -> Option<GameInstant> {
        self.target_completion
    }

    pub fn has_ended(&self) -> bool {
        self.ended
    }

    /// Accept the authority's target. Re-applying the same target is a
    /// no-op (returns `false`); a different target is refused.
    pub fn set_target(&mut self, target: GameInstant) -> Result<bool, ActionError> {
        match self.target_completion {
            None => {
                self.target_completion = Some(target);
                Ok(true)
            }
            Some(current) if current == target => Ok(false),
            Some(current) => {
                warn!(
                    "Ignoring match target {:?}, already counting down to {:?}",
                    target, current
                );
                Err(ActionError::IllegalAction {
                    action: "StartTimeTracking",
                    reason: "match target is already set",
                })
            }
        }
    }

    /// Zero until a target is known, and once it has passed
    pub fn remaining(&self, now: &GameInstant) -> Duration {
        self.target_completion
            .map_or(Duration::ZERO, |target| target.saturating_duration_since(now))
    }

    pub fn poll(&mut self, now: &GameInstant) -> ClockTick {
        let mut tick = ClockTick::default();
        if self.target_completion.is_none() {
            return tick;
        }

        let remaining = self.remaining(now);
        // whole seconds only go down; an increase is local clock jitter
        let announce = self
            .last_observed_remaining
            .map_or(true, |last| remaining.as_secs() < last.as_secs());
        if announce {
            self.last_observed_remaining = Some(remaining);
            tick.time_changed = Some(remaining);
        }

        if remaining.is_zero() && !self.ended {
            self.ended = true;
            tick.ended = true;
        }
        tick
    }
}

impl Default for MatchClock {
    fn default() -> Self {
        Self::new()
    }
}
