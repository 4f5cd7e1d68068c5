use thiserror::Error;

use crate::object_ref::NetworkObjectRef;

/// Errors that can occur during OwnershipRegistry operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OwnershipError {
    /// The ref was never introduced to this peer, or was already torn down
    #[error("{object} is not registered (operation: {operation})")]
    UnresolvedReference {
        object: NetworkObjectRef,
        operation: &'static str,
    },

    /// Scene load registered the same ref twice
    #[error("{object} is already registered")]
    AlreadyRegistered { object: NetworkObjectRef },
}
