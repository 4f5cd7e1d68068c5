//! # Overclean Shared
//! Common functionality shared by every overclean peer: identifiers, the
//! object ownership registry, the team access policy and the remote-call
//! vocabulary that all state changes travel through.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod access;
mod error;
mod game_time;
mod object_ref;
mod ownership;
mod remote;
mod timestamp;
mod types;

pub use access::permits;
pub use error::ActionError;
pub use game_time::GameInstant;
pub use object_ref::NetworkObjectRef;
pub use ownership::{Impulse, ObjectHandle, OwnershipError, OwnershipRegistry, Parent, RigidBody};
pub use remote::{OfflineDispatcher, RemoteAction, RemoteCall, RemoteDispatcher, RpcTarget};
pub use timestamp::{TimeError, Timestamp};
pub use types::{
    AnchorId, HandSlot, Handedness, LocalPlayerInfo, PlayerId, TeamId, TeamOwnership, Vec2, Vec3,
};
