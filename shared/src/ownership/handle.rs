use crate::types::{AnchorId, PlayerId, Vec3};

/// What an object's transform follows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parent {
    World,
    Anchor { player: PlayerId, anchor: AnchorId },
}

/// A one-shot force applied at a world position
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Impulse {
    pub force: Vec3,
    pub at: Vec3,
}

impl Impulse {
    pub fn new(force: Vec3, at: Vec3) -> Self {
        Self { force, at }
    }

    pub fn zero_at(at: Vec3) -> Self {
        Self::new(Vec3::ZERO, at)
    }
}

/// Physics-facing state of an object.
///
/// Kinematic bodies follow their parent and never carry an impulse. Dynamic
/// bodies are simulated and carry the single impulse they were released with
/// until the physics adapter takes it.
#[derive(Clone, Debug, PartialEq)]
pub struct RigidBody {
    kinematic: bool,
    pending_impulse: Option<Impulse>,
}

impl RigidBody {
    pub fn dynamic() -> Self {
        Self {
            kinematic: false,
            pending_impulse: None,
        }
    }

    pub fn is_kinematic(&self) -> bool {
        self.kinematic
    }

    pub fn pending_impulse(&self) -> Option<&Impulse> {
        self.pending_impulse.as_ref()
    }

    pub(crate) fn make_kinematic(&mut self) {
        self.kinematic = true;
        self.pending_impulse = None;
    }

    // overwrites rather than accumulates, so a redelivered release is harmless
    pub(crate) fn release(&mut self, impulse: Impulse) {
        self.kinematic = false;
        self.pending_impulse = Some(impulse);
    }

    pub(crate) fn take_impulse(&mut self) -> Option<Impulse> {
        self.pending_impulse.take()
    }
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::dynamic()
    }
}

/// Live, per-peer view of a networked object
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectHandle {
    parent: Parent,
    position: Vec3,
    local_position: Vec3,
    local_rotation: Vec3,
    body: RigidBody,
}

impl ObjectHandle {
    /// A free, dynamic object resting at `position`
    pub fn at_rest(position: Vec3) -> Self {
        Self {
            parent: Parent::World,
            position,
            local_position: Vec3::ZERO,
            local_rotation: Vec3::ZERO,
            body: RigidBody::dynamic(),
        }
    }

    pub fn parent(&self) -> Parent {
        self.parent
    }

    pub fn holder(&self) -> Option<PlayerId> {
        match self.parent {
            Parent::World => None,
            Parent::Anchor { player, .. } => Some(player),
        }
    }

    /// Last known world position; physics adapters keep this current
    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn local_position(&self) -> Vec3 {
        self.local_position
    }

    pub fn local_rotation(&self) -> Vec3 {
        self.local_rotation
    }

    pub fn body(&self) -> &RigidBody {
        &self.body
    }

    pub(crate) fn attach(&mut self, parent: Parent, local_position: Vec3, local_rotation: Vec3) {
        self.parent = parent;
        self.local_position = local_position;
        self.local_rotation = local_rotation;
        self.body.make_kinematic();
    }

    pub(crate) fn detach(&mut self, impulse: Impulse) {
        self.parent = Parent::World;
        self.position = impulse.at;
        self.local_position = Vec3::ZERO;
        self.local_rotation = Vec3::ZERO;
        self.body.release(impulse);
    }

    pub(crate) fn body_mut(&mut self) -> &mut RigidBody {
        &mut self.body
    }
}
