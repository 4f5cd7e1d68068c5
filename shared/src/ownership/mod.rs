mod error;
mod handle;
mod registry;

pub use error::OwnershipError;
pub use handle::{Impulse, ObjectHandle, Parent, RigidBody};
pub use registry::OwnershipRegistry;
