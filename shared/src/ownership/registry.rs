use std::collections::HashMap;

use log::debug;

use crate::{
    object_ref::NetworkObjectRef,
    ownership::{
        error::OwnershipError,
        handle::{Impulse, ObjectHandle, Parent},
    },
    types::Vec3,
};

/// Maps every networked object known to this peer onto its live handle:
/// who it is parented to and whether physics is driving it.
///
/// Objects are registered at scene load and deregistered at teardown. All
/// mutations *set* state, so applying the same replicated call twice leaves
/// the registry unchanged.
pub struct OwnershipRegistry {
    objects: HashMap<NetworkObjectRef, ObjectHandle>,
}

impl OwnershipRegistry {
    pub fn new() -> Self {
        Self {
            objects: HashMap::new(),
        }
    }

    /// Register an object
    ///
    /// # Panics
    ///
    /// Panics if the object is already registered.
    /// Consider using `try_register` for non-panicking error handling.
    pub fn register(&mut self, object: NetworkObjectRef, handle: ObjectHandle) {
        self.try_register(object, handle)
            .expect("Object cannot be registered more than once!")
    }

    /// Register an object
    ///
    /// Returns an error if the object is already registered.
    pub fn try_register(
        &mut self,
        object: NetworkObjectRef,
        handle: ObjectHandle,
    ) -> Result<(), OwnershipError> {
        if self.objects.contains_key(&object) {
            return Err(OwnershipError::AlreadyRegistered { object });
        }
        self.objects.insert(object, handle);
        Ok(())
    }

    pub fn deregister(&mut self, object: &NetworkObjectRef) -> Option<ObjectHandle> {
        self.objects.remove(object)
    }

    pub fn contains(&self, object: &NetworkObjectRef) -> bool {
        self.objects.contains_key(object)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn objects(&self) -> impl Iterator<Item = (&NetworkObjectRef, &ObjectHandle)> {
        self.objects.iter()
    }

    pub fn resolve(&self, object: &NetworkObjectRef) -> Result<&ObjectHandle, OwnershipError> {
        self.objects
            .get(object)
            .ok_or(OwnershipError::UnresolvedReference {
                object: *object,
                operation: "resolve",
            })
    }

    pub fn resolve_mut(
        &mut self,
        object: &NetworkObjectRef,
    ) -> Result<&mut ObjectHandle, OwnershipError> {
        self.objects
            .get_mut(object)
            .ok_or(OwnershipError::UnresolvedReference {
                object: *object,
                operation: "resolve_mut",
            })
    }

    /// Parent the object to a hand anchor and hand it over to the parent
    /// transform: the body turns kinematic and any pending impulse is dropped.
    pub fn reparent(
        &mut self,
        object: &NetworkObjectRef,
        parent: Parent,
        local_offset: Vec3,
        local_rotation: Vec3,
    ) -> Result<(), OwnershipError> {
        let handle = self
            .objects
            .get_mut(object)
            .ok_or(OwnershipError::UnresolvedReference {
                object: *object,
                operation: "reparent",
            })?;

        handle.attach(parent, local_offset, local_rotation);
        debug!("{} reparented to {:?}", object, parent);
        Ok(())
    }

    /// Detach the object into the world and give it to physics with exactly
    /// one initializing impulse.
    pub fn release_to_world(
        &mut self,
        object: &NetworkObjectRef,
        impulse: Impulse,
    ) -> Result<(), OwnershipError> {
        let handle = self
            .objects
            .get_mut(object)
            .ok_or(OwnershipError::UnresolvedReference {
                object: *object,
                operation: "release_to_world",
            })?;

        handle.detach(impulse);
        debug!("{} released with force {:?}", object, impulse.force);
        Ok(())
    }

    /// Hand the pending impulse to the physics simulation
    pub fn take_impulse(&mut self, object: &NetworkObjectRef) -> Option<Impulse> {
        self.objects
            .get_mut(object)
            .and_then(|handle| handle.body_mut().take_impulse())
    }
}

impl Default for OwnershipRegistry {
    fn default() -> Self {
        Self::new()
    }
}
