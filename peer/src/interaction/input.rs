use overclean_shared::{NetworkObjectRef, Vec3};

/// One object reported by the proximity probe
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProbeHit {
    pub object: NetworkObjectRef,
    /// Distance from the probe origin
    pub distance: f32,
    pub position: Vec3,
}

impl ProbeHit {
    pub fn new(object: NetworkObjectRef, distance: f32, position: Vec3) -> Self {
        Self {
            object,
            distance,
            position,
        }
    }
}

/// Everything the local player did this update
#[derive(Clone, Debug, Default)]
pub struct PlayerInput {
    pub probe_hits: Vec<ProbeHit>,
    /// Interact input is down this frame
    pub interact_held: bool,
    /// Interact input went down this frame
    pub interact_pressed: bool,
    pub drop_pressed: bool,
    pub use_pressed: bool,
}

impl PlayerInput {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn hovering(hit: ProbeHit) -> Self {
        Self {
            probe_hits: vec![hit],
            ..Self::default()
        }
    }

    /// Interact pressed this frame (and therefore also held)
    pub fn press_interact(mut self) -> Self {
        self.interact_pressed = true;
        self.interact_held = true;
        self
    }

    pub fn hold_interact(mut self) -> Self {
        self.interact_held = true;
        self
    }

    pub fn press_drop(mut self) -> Self {
        self.drop_pressed = true;
        self
    }

    pub fn press_use(mut self) -> Self {
        self.use_pressed = true;
        self
    }
}
