use std::time::Duration;

use overclean_shared::{permits, HandSlot, Handedness, PlayerId, TeamId, TeamOwnership, Vec3};

/// Which wieldables the team-contact rule knocks out of a player's hands
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WieldCategory {
    Tool,
    CleaningTool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WieldSpec {
    pub handedness: Handedness,
    pub category: WieldCategory,
    pub hand_offset: Vec3,
    pub rotation_offset: Vec3,
}

impl WieldSpec {
    pub fn new(handedness: Handedness, category: WieldCategory) -> Self {
        Self {
            handedness,
            category,
            hand_offset: Vec3::ZERO,
            rotation_offset: Vec3::ZERO,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CleanSpec {
    /// Contribution to the match's clean percentage
    pub weight: u32,
    /// How long interact must be held to finish the task
    pub cleaning_time: Duration,
}

/// Capability of a scene object, fixed when it is registered
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ObjectKind {
    Cleanable(CleanSpec),
    Wieldable(WieldSpec),
    Door,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionMode {
    /// Interaction lasts while the input is held
    Hold,
    /// Interaction is triggered by a single press
    Press,
}

impl ObjectKind {
    pub fn interaction_mode(&self) -> InteractionMode {
        match self {
            ObjectKind::Cleanable(_) => InteractionMode::Hold,
            ObjectKind::Wieldable(_) | ObjectKind::Door => InteractionMode::Press,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InteractableState {
    pub current_interactor: Option<PlayerId>,
    pub is_locked: bool,
    pub owned_by_team: TeamOwnership,
}

impl InteractableState {
    pub fn new(owned_by_team: TeamOwnership) -> Self {
        Self {
            current_interactor: None,
            is_locked: false,
            owned_by_team,
        }
    }

    /// A lock shuts everyone out except the player holding it
    pub fn accepts(&self, player: PlayerId) -> bool {
        !self.is_locked || self.current_interactor == Some(player)
    }

    pub(crate) fn lock_for(&mut self, player: PlayerId) {
        self.current_interactor = Some(player);
        self.is_locked = true;
    }

    /// Returns false when someone else holds the lock
    pub(crate) fn unlock_from(&mut self, player: PlayerId) -> bool {
        if self.current_interactor.is_some() && self.current_interactor != Some(player) {
            return false;
        }
        self.current_interactor = None;
        self.is_locked = false;
        true
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WieldableState {
    pub holder: Option<PlayerId>,
    pub hand_slot: HandSlot,
    pub locked: bool,
}

impl WieldableState {
    fn new(hand_slot: HandSlot) -> Self {
        Self {
            holder: None,
            hand_slot,
            locked: false,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CleanableState {
    pub cleaned: bool,
    /// Local progress of the player cleaning it, 0..=1
    pub progress: f32,
}

/// Marker that makes a swung object stun whoever it collides with
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StunMarker {
    pub owner: PlayerId,
}

#[derive(Clone, Debug)]
pub struct SceneObject {
    pub(crate) kind: ObjectKind,
    pub(crate) interactable: InteractableState,
    pub(crate) wieldable: Option<WieldableState>,
    pub(crate) cleanable: Option<CleanableState>,
    pub(crate) door_open: bool,
    pub(crate) stun_marker: Option<StunMarker>,
}

impl SceneObject {
    pub fn new(kind: ObjectKind, owned_by_team: TeamOwnership) -> Self {
        let wieldable = match kind {
            ObjectKind::Wieldable(spec) => Some(WieldableState::new(spec.handedness.hand_slot())),
            _ => None,
        };
        let cleanable = match kind {
            ObjectKind::Cleanable(_) => Some(CleanableState::default()),
            _ => None,
        };
        Self {
            kind,
            interactable: InteractableState::new(owned_by_team),
            wieldable,
            cleanable,
            door_open: false,
            stun_marker: None,
        }
    }

    pub fn kind(&self) -> &ObjectKind {
        &self.kind
    }

    pub fn interactable(&self) -> &InteractableState {
        &self.interactable
    }

    pub fn wieldable(&self) -> Option<&WieldableState> {
        self.wieldable.as_ref()
    }

    pub fn cleanable(&self) -> Option<&CleanableState> {
        self.cleanable.as_ref()
    }

    pub fn wield_spec(&self) -> Option<&WieldSpec> {
        match &self.kind {
            ObjectKind::Wieldable(spec) => Some(spec),
            _ => None,
        }
    }

    pub fn clean_spec(&self) -> Option<&CleanSpec> {
        match &self.kind {
            ObjectKind::Cleanable(spec) => Some(spec),
            _ => None,
        }
    }

    pub fn is_cleaned(&self) -> bool {
        self.cleanable.map_or(false, |state| state.cleaned)
    }

    pub fn is_door_open(&self) -> bool {
        self.door_open
    }

    pub fn stun_marker(&self) -> Option<&StunMarker> {
        self.stun_marker.as_ref()
    }

    pub fn holder(&self) -> Option<PlayerId> {
        self.wieldable.and_then(|state| state.holder)
    }

    /// Whether `player` on `team` may start (or keep) interacting with this object
    pub fn is_available_to(&self, player: PlayerId, team: Option<TeamId>) -> bool {
        if !self.interactable.accepts(player) {
            return false;
        }
        if !permits(team, self.interactable.owned_by_team) {
            return false;
        }
        if self.is_cleaned() {
            return false;
        }
        if let Some(wieldable) = &self.wieldable {
            if wieldable.locked {
                return false;
            }
        }
        true
    }
}
