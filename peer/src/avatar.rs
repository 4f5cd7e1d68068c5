use overclean_shared::{AnchorId, HandSlot, TeamId, Vec3};

/// Hand anchors of a player model
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayerRig {
    pub primary_hand: Option<AnchorId>,
    pub two_hand_anchor: Option<AnchorId>,
}

impl PlayerRig {
    pub fn new(primary_hand: AnchorId, two_hand_anchor: AnchorId) -> Self {
        Self {
            primary_hand: Some(primary_hand),
            two_hand_anchor: Some(two_hand_anchor),
        }
    }

    pub fn anchor(&self, slot: HandSlot) -> Option<AnchorId> {
        match slot {
            HandSlot::Primary => self.primary_hand,
            HandSlot::Secondary => self.two_hand_anchor,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.primary_hand.is_some() && self.two_hand_anchor.is_some()
    }
}

/// Where a player stands and faces, kept current by the movement layer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub forward: Vec3,
    pub up: Vec3,
}

impl Pose {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            forward: Vec3::FORWARD,
            up: Vec3::UP,
        }
    }
}

/// A player as seen by one peer
#[derive(Clone, Debug)]
pub struct Avatar {
    pub(crate) team: Option<TeamId>,
    pub(crate) pose: Pose,
    pub(crate) rig: PlayerRig,
    pub(crate) hand_layer_weight: f32,
}

impl Avatar {
    pub(crate) fn new(team: Option<TeamId>, rig: PlayerRig) -> Self {
        Self {
            team,
            pose: Pose::default(),
            rig,
            hand_layer_weight: 0.0,
        }
    }

    pub fn team(&self) -> Option<TeamId> {
        self.team
    }

    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    pub fn rig(&self) -> &PlayerRig {
        &self.rig
    }

    /// Blend weight of the hand animation layer, 1 while wielding
    pub fn hand_layer_weight(&self) -> f32 {
        self.hand_layer_weight
    }
}
