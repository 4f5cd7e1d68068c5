use thiserror::Error;

use crate::{object_ref::NetworkObjectRef, ownership::OwnershipError, types::PlayerId};

/// Reasons a local or replicated action is refused.
///
/// None of these cross the network: a peer that rejects an action simply
/// never dispatches (or never applies) the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// A transmitted object identifier does not resolve on this peer
    #[error("{object} does not resolve to a live object (during {operation})")]
    UnresolvedReference {
        object: NetworkObjectRef,
        operation: &'static str,
    },

    /// A call names a player this peer has no avatar for
    #[error("{player} is not known to this peer (during {operation})")]
    UnknownPlayer {
        player: PlayerId,
        operation: &'static str,
    },

    /// Legality check failed, usually because state changed between frames
    #[error("Illegal action '{action}': {reason}")]
    IllegalAction {
        action: &'static str,
        reason: &'static str,
    },

    /// A collaborator required by a component is absent; the component is disabled
    #[error("{component} is disabled: missing {dependency}")]
    MissingDependency {
        component: &'static str,
        dependency: &'static str,
    },

    /// A user-facing precondition failed; the message is shown to the player
    #[error("{message}")]
    PreconditionNotMet { message: &'static str },
}

impl ActionError {
    pub fn illegal(action: &'static str, reason: &'static str) -> Self {
        ActionError::IllegalAction { action, reason }
    }
}

impl From<OwnershipError> for ActionError {
    fn from(error: OwnershipError) -> Self {
        match error {
            OwnershipError::UnresolvedReference { object, operation } => {
                ActionError::UnresolvedReference { object, operation }
            }
            OwnershipError::AlreadyRegistered { .. } => {
                ActionError::illegal("register", "object already registered")
            }
        }
    }
}
