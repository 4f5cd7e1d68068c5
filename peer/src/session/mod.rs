mod match_clock;
mod match_session;
mod progress;

pub use match_clock::{ClockTick, MatchClock};
pub use match_session::MatchSession;
pub use progress::ProgressTracker;
