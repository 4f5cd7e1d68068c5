mod candidate;
mod input;
mod selection;
mod state_machine;

pub use candidate::select_candidate;
pub use input::{PlayerInput, ProbeHit};
pub use selection::PlayerSelection;
pub use state_machine::{InteractionCommand, InteractionState, InteractionStateMachine};
