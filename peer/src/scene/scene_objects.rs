use std::collections::HashMap;

use overclean_shared::{ActionError, NetworkObjectRef};

use crate::scene::scene_object::SceneObject;

/// Interaction-level state of every object in the loaded scene
pub struct SceneObjects {
    objects: HashMap<NetworkObjectRef, SceneObject>,
}

impl SceneObjects {
    pub fn new() -> Self {
        Self {
            objects: HashMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, object: NetworkObjectRef, scene_object: SceneObject) {
        self.objects.insert(object, scene_object);
    }

    pub(crate) fn remove(&mut self, object: &NetworkObjectRef) -> Option<SceneObject> {
        self.objects.remove(object)
    }

    pub fn get(&self, object: &NetworkObjectRef) -> Option<&SceneObject> {
        self.objects.get(object)
    }

    pub(crate) fn get_mut(&mut self, object: &NetworkObjectRef) -> Option<&mut SceneObject> {
        self.objects.get_mut(object)
    }

    pub fn contains(&self, object: &NetworkObjectRef) -> bool {
        self.objects.contains_key(object)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NetworkObjectRef, &SceneObject)> {
        self.objects.iter()
    }

    pub(crate) fn resolve(
        &self,
        object: &NetworkObjectRef,
        operation: &'static str,
    ) -> Result<&SceneObject, ActionError> {
        self.objects
            .get(object)
            .ok_or(ActionError::UnresolvedReference {
                object: *object,
                operation,
            })
    }

    pub(crate) fn resolve_mut(
        &mut self,
        object: &NetworkObjectRef,
        operation: &'static str,
    ) -> Result<&mut SceneObject, ActionError> {
        self.objects
            .get_mut(object)
            .ok_or(ActionError::UnresolvedReference {
                object: *object,
                operation,
            })
    }
}

impl Default for SceneObjects {
    fn default() -> Self {
        Self::new()
    }
}
