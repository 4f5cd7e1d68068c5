mod scene_object;
mod scene_objects;
mod scene_setting;

pub use scene_object::{
    CleanSpec, CleanableState, InteractableState, InteractionMode, ObjectKind, SceneObject,
    StunMarker, WieldCategory, WieldSpec, WieldableState,
};
pub use scene_objects::SceneObjects;
pub use scene_setting::SceneSetting;
