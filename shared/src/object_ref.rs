use std::fmt;

/// Globally unique identifier of a networked physical object.
///
/// Every peer assigns the same ref to the same scene object, so refs can be
/// carried inside remote calls and resolved back into a live handle through
/// the [`OwnershipRegistry`](crate::OwnershipRegistry).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NetworkObjectRef(u32);

impl NetworkObjectRef {
    pub fn from_u32(value: u32) -> Self {
        Self(value)
    }

    pub fn to_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for NetworkObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "object#{}", self.0)
    }
}
