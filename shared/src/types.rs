use std::{
    fmt,
    ops::{Add, Mul, Sub},
};

/// Actor number of a participant in the room
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(u32);

impl PlayerId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player#{}", self.0)
    }
}

/// Teams are numbered from 1, in lobby order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TeamId(u8);

impl TeamId {
    pub fn new(value: u8) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Team for a zero-based lobby dropdown index, `None` past the last
    /// representable team
    pub fn from_index(index: usize) -> Option<Self> {
        index
            .checked_add(1)
            .and_then(|value| u8::try_from(value).ok())
            .map(Self)
    }

    /// Zero-based dropdown index; `None` for the unnumbered team 0
    pub fn index(&self) -> Option<usize> {
        self.0.checked_sub(1).map(usize::from)
    }
}

/// Which team is allowed to use an object
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TeamOwnership {
    Everyone,
    Team(TeamId),
}

/// Hand anchor an object is parented to while wielded.
///
/// `Secondary` is the two-handed anchor, which spans both hands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HandSlot {
    Primary,
    Secondary,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Handedness {
    OneHanded,
    TwoHanded,
}

impl Handedness {
    pub fn hand_slot(&self) -> HandSlot {
        match self {
            Handedness::OneHanded => HandSlot::Primary,
            Handedness::TwoHanded => HandSlot::Secondary,
        }
    }

    pub fn is_two_handed(&self) -> bool {
        *self == Handedness::TwoHanded
    }
}

/// Identifier of a transform that objects can be parented to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnchorId(u32);

impl AnchorId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

/// What the local peer knows about its own player
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocalPlayerInfo {
    pub player: PlayerId,
    pub team: Option<TeamId>,
    pub number_in_team: Option<u8>,
}

impl LocalPlayerInfo {
    pub fn new(player: PlayerId) -> Self {
        Self {
            player,
            team: None,
            number_in_team: None,
        }
    }

    pub fn with_team(mut self, team: TeamId) -> Self {
        self.team = Some(team);
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    pub const UP: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    pub const FORWARD: Vec3 = Vec3::new(0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn dot(&self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn is_zero(&self) -> bool {
        *self == Vec3::ZERO
    }

    /// Projection onto the ground plane, used for scene bounds checks
    pub fn ground(&self) -> Vec2 {
        Vec2::new(self.x, self.z)
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}
