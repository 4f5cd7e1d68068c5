mod controller;
mod strike;

pub use controller::{throw_impulse, WieldingController};
pub use strike::{StrikePhase, StrikeSequence, StrikeStep};
