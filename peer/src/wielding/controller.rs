use overclean_shared::{Impulse, NetworkObjectRef, Vec3};

use crate::{
    avatar::Pose,
    peer_config::CombatConfig,
    wielding::strike::StrikeSequence,
};

/// Local player's side of wielding: what it holds, the pending force-drop
/// flag and the strike timing.
///
/// `wielding` is set optimistically when a pickup is dispatched and is
/// corrected by the replicated handlers if another player wins the object.
pub struct WieldingController {
    enabled: bool,
    wielding: Option<NetworkObjectRef>,
    force_drop: bool,
    strike: StrikeSequence,
}

impl WieldingController {
    pub fn new(enabled: bool, combat: &CombatConfig) -> Self {
        Self {
            enabled,
            wielding: None,
            force_drop: false,
            strike: StrikeSequence::new(combat.strike_marker_delay, combat.strike_recovery_delay),
        }
    }

    /// False when the local rig has no hand anchors to parent objects to
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn wielding(&self) -> Option<NetworkObjectRef> {
        self.wielding
    }

    pub fn is_wielding(&self) -> bool {
        self.wielding.is_some()
    }

    pub fn strike(&self) -> &StrikeSequence {
        &self.strike
    }

    pub(crate) fn strike_mut(&mut self) -> &mut StrikeSequence {
        &mut self.strike
    }

    pub(crate) fn set_wielding(&mut self, object: NetworkObjectRef) {
        self.wielding = Some(object);
    }

    pub(crate) fn clear_wielding(&mut self) -> Option<NetworkObjectRef> {
        self.wielding.take()
    }

    /// Forget `object` if it is the one being wielded
    pub(crate) fn release_if(&mut self, object: &NetworkObjectRef) -> bool {
        if self.wielding == Some(*object) {
            self.wielding = None;
            return true;
        }
        false
    }

    pub(crate) fn mark_force_drop(&mut self) {
        self.force_drop = true;
    }

    /// Read and reset the force-drop flag
    pub(crate) fn take_force_drop(&mut self) -> bool {
        std::mem::replace(&mut self.force_drop, false)
    }
}

/// Impulse an object is released with when `holder_pose` lets go of it.
///
/// Force-dropped objects just fall; thrown ones fly forward and slightly up.
pub fn throw_impulse(holder_pose: &Pose, combat: &CombatConfig, force_dropped: bool) -> Impulse {
    if force_dropped {
        return Impulse::zero_at(holder_pose.position);
    }
    let force: Vec3 = holder_pose.forward * combat.throw_force_forward
        + holder_pose.up * combat.throw_force_up;
    Impulse::new(force, holder_pose.position)
}
