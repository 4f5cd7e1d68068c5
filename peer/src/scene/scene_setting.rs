use overclean_shared::Vec2;

/// Per-scene camera and interaction bounds, supplied when the scene is instantiated
#[derive(Clone, Debug, PartialEq)]
pub struct SceneSetting {
    pub scene_name: String,
    pub bottom_left: Vec2,
    pub upper_right: Vec2,
}

impl SceneSetting {
    pub fn new(scene_name: impl Into<String>, bottom_left: Vec2, upper_right: Vec2) -> Self {
        Self {
            scene_name: scene_name.into(),
            bottom_left,
            upper_right,
        }
    }

    /// Whether a ground-plane point lies inside the bounds (edges included)
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.bottom_left.x
            && point.x <= self.upper_right.x
            && point.y >= self.bottom_left.y
            && point.y <= self.upper_right.y
    }

    /// Index of the setting named `scene_name`
    pub fn find(settings: &[SceneSetting], scene_name: &str) -> Option<usize> {
        settings
            .iter()
            .position(|setting| setting.scene_name == scene_name)
    }
}
