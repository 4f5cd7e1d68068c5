use thiserror::Error;

use overclean_shared::{ActionError, PlayerId, TimeError};

/// Errors surfaced through [`ErrorEvent`](crate::ErrorEvent).
///
/// They are reported on the peer that detected them and never travel to
/// other peers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeerError {
    /// A replicated call could not be applied on this peer and was dropped
    #[error("Dropped remote call {call} from {sender}: {source}")]
    RejectedCall {
        call: &'static str,
        sender: PlayerId,
        #[source]
        source: ActionError,
    },

    #[error(transparent)]
    Action(#[from] ActionError),

    #[error(transparent)]
    Clock(#[from] TimeError),
}
