use std::{ops::Add, time::Duration};

/// Wall-clock instant in milliseconds since the UNIX epoch.
///
/// Unlike a monotonic instant this can be sent to another peer and compared
/// against that peer's own clock, which is what the match countdown needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GameInstant {
    millis: u64,
}

impl GameInstant {
    pub const EPOCH: GameInstant = GameInstant { millis: 0 };

    pub const fn from_millis(millis: u64) -> Self {
        Self { millis }
    }

    pub fn from_secs(secs: u64) -> Self {
        Self::from_millis(secs.saturating_mul(1000))
    }

    pub fn as_millis(&self) -> u64 {
        self.millis
    }

    pub fn add_millis(&self, millis: u64) -> Self {
        Self::from_millis(self.millis.saturating_add(millis))
    }

    /// Time from `earlier` to `self`, or zero if `earlier` is actually later
    pub fn saturating_duration_since(&self, earlier: &GameInstant) -> Duration {
        Duration::from_millis(self.millis.saturating_sub(earlier.millis))
    }

    pub fn is_reached_by(&self, now: &GameInstant) -> bool {
        now.millis >= self.millis
    }
}

impl Add<Duration> for GameInstant {
    type Output = GameInstant;

    fn add(self, rhs: Duration) -> GameInstant {
        let millis = u64::try_from(rhs.as_millis()).unwrap_or(u64::MAX);
        self.add_millis(millis)
    }
}
