use log::debug;

use overclean_shared::{
    ActionError, GameInstant, HandSlot, NetworkObjectRef, Parent, PlayerId, RemoteAction,
    RpcTarget, Vec3,
};

use super::Peer;
use crate::{
    scene::{StunMarker, WieldCategory},
    wielding::{throw_impulse, StrikePhase, StrikeStep},
};

impl Peer {
    pub fn wielding(&self) -> Option<NetworkObjectRef> {
        self.wielding.wielding()
    }

    pub fn can_wield(&self) -> bool {
        self.wielding.is_enabled()
    }

    pub fn strike_phase(&self) -> StrikePhase {
        self.wielding.strike().phase()
    }

    /// Take a free wieldable into the local player's hand
    pub fn pickup_object(&mut self, object: NetworkObjectRef) -> Result<(), ActionError> {
        const CALL: &str = "PickupObject";

        if !self.wielding.is_enabled() {
            return Err(ActionError::MissingDependency {
                component: "wielding",
                dependency: "hand anchors on the local rig",
            });
        }
        if self.wielding.is_wielding() {
            return Err(ActionError::illegal(CALL, "already wielding an object"));
        }

        let scene_object = self.scene.resolve(&object, CALL)?;
        let spec = *scene_object
            .wield_spec()
            .ok_or_else(|| ActionError::illegal(CALL, "object is not wieldable"))?;
        if !scene_object.is_available_to(self.local.player, self.local.team) {
            return Err(ActionError::illegal(
                CALL,
                "object is held, locked or owned by another team",
            ));
        }
        self.registry.resolve(&object)?;

        self.wielding.set_wielding(object);
        self.events.push_two_handed(spec.handedness.is_two_handed());
        self.send(
            RpcTarget::AllBuffered,
            RemoteAction::PickupObject {
                hand: spec.handedness.hand_slot(),
                object,
                local_rotation: spec.rotation_offset,
                local_position: spec.hand_offset,
            },
        );
        Ok(())
    }

    /// Throw the wielded object, or let it fall if it was knocked loose
    pub fn drop_object(&mut self) -> Result<(), ActionError> {
        let object = self
            .wielding
            .clear_wielding()
            .ok_or_else(|| ActionError::illegal("ThrowObject", "not wielding anything"))?;
        let force_dropped = self.wielding.take_force_drop();

        let local = self.local.player;
        self.set_hand_layer(local, 0.0);
        if let Some(scene_object) = self.scene.get_mut(&object) {
            if scene_object.stun_marker.take().is_some() {
                self.events.push_stun_marker(object, false);
            }
        }
        self.events.push_two_handed(false);

        self.send(
            RpcTarget::AllBuffered,
            RemoteAction::ThrowObject {
                object,
                force_dropped,
            },
        );

        if let Some(target) = self.interaction.interacting() {
            let commands = self.interaction.force_stop(&target);
            self.execute(commands);
        }
        Ok(())
    }

    /// Knock the wielded cleaning tool out of the local player's hands
    pub fn force_drop_object(&mut self) -> Result<(), ActionError> {
        const CALL: &str = "ThrowObject";

        let object = self
            .wielding
            .wielding()
            .ok_or_else(|| ActionError::illegal(CALL, "not wielding anything"))?;
        let category = self
            .scene
            .get(&object)
            .and_then(|scene_object| scene_object.wield_spec())
            .map(|spec| spec.category);
        if category != Some(WieldCategory::CleaningTool) {
            return Err(ActionError::illegal(CALL, "only cleaning tools can be knocked loose"));
        }

        self.wielding.mark_force_drop();
        self.drop_object()
    }

    /// The local player touched `other`. A cleaning tool is knocked loose when
    /// `other` plays for a different team. Returns whether it was.
    pub fn on_player_contact(&mut self, other: PlayerId) -> Result<bool, ActionError> {
        let other_team = self
            .avatars
            .get(&other)
            .ok_or(ActionError::UnknownPlayer {
                player: other,
                operation: "player_contact",
            })?
            .team;

        let Some(object) = self.wielding.wielding() else {
            return Ok(false);
        };
        match (self.local.team, other_team) {
            (Some(own), Some(theirs)) if own != theirs => {}
            _ => return Ok(false),
        }
        let is_cleaning_tool = self
            .scene
            .get(&object)
            .and_then(|scene_object| scene_object.wield_spec())
            .map_or(false, |spec| spec.category == WieldCategory::CleaningTool);
        if !is_cleaning_tool {
            return Ok(false);
        }

        debug!("{} knocks {} out of our hands", other, object);
        self.force_drop_object()?;
        Ok(true)
    }

    /// Swing the wielded object. The stun marker attaches once the swing lands.
    pub fn strike(&mut self, now: GameInstant) -> Result<(), ActionError> {
        const CALL: &str = "Strike";

        let object = self
            .wielding
            .wielding()
            .ok_or_else(|| ActionError::illegal(CALL, "not wielding anything"))?;
        if !self.wielding.strike_mut().trigger(now, object) {
            return Err(ActionError::illegal(CALL, "a strike is already in progress"));
        }
        self.events.push_hit(object);
        Ok(())
    }

    pub(super) fn poll_strike(&mut self, now: GameInstant) {
        for step in self.wielding.strike_mut().poll(now) {
            match step {
                StrikeStep::AttachMarker(object) => {
                    if self.wielding.wielding() != Some(object) {
                        debug!("{} left the hand before the swing landed", object);
                        continue;
                    }
                    if let Some(scene_object) = self.scene.get_mut(&object) {
                        scene_object.stun_marker = Some(StunMarker {
                            owner: self.local.player,
                        });
                        self.events.push_stun_marker(object, true);
                    }
                }
                StrikeStep::Ready => debug!("Strike recovered"),
            }
        }
    }

    pub(super) fn apply_pickup(
        &mut self,
        sender: PlayerId,
        hand: HandSlot,
        object: NetworkObjectRef,
        local_position: Vec3,
        local_rotation: Vec3,
    ) -> Result<(), ActionError> {
        const CALL: &str = "PickupObject";

        let anchor = self
            .avatars
            .get(&sender)
            .ok_or(ActionError::UnknownPlayer {
                player: sender,
                operation: CALL,
            })?
            .rig
            .anchor(hand)
            .ok_or(ActionError::MissingDependency {
                component: CALL,
                dependency: "hand anchor on the holder's rig",
            })?;
        let scene_object = self.scene.resolve(&object, CALL)?;
        let spec = *scene_object
            .wield_spec()
            .ok_or_else(|| ActionError::illegal(CALL, "object is not wieldable"))?;
        let previous_holder = scene_object.holder();

        self.registry.reparent(
            &object,
            Parent::Anchor {
                player: sender,
                anchor,
            },
            local_position,
            local_rotation,
        )?;
        if let Some(wieldable) = self
            .scene
            .get_mut(&object)
            .and_then(|scene_object| scene_object.wieldable.as_mut())
        {
            wieldable.holder = Some(sender);
            wieldable.hand_slot = hand;
            wieldable.locked = true;
        }

        if let Some(previous) = previous_holder.filter(|previous| *previous != sender) {
            debug!("{} takes {} from {}", sender, object, previous);
            self.set_hand_layer(previous, 0.0);
        }
        self.set_hand_layer(sender, 1.0);

        // the replicated holder is the source of truth for the local hand
        if sender == self.local.player {
            if !self.wielding.is_wielding() {
                self.wielding.set_wielding(object);
                self.events.push_two_handed(spec.handedness.is_two_handed());
            }
        } else if self.wielding.release_if(&object) {
            debug!("Lost {} to {}", object, sender);
            self.events.push_two_handed(false);
        }
        Ok(())
    }

    pub(super) fn apply_throw(
        &mut self,
        sender: PlayerId,
        object: NetworkObjectRef,
        force_dropped: bool,
    ) -> Result<(), ActionError> {
        const CALL: &str = "ThrowObject";

        let holder = self
            .scene
            .resolve(&object, CALL)?
            .wieldable()
            .ok_or_else(|| ActionError::illegal(CALL, "object is not wieldable"))?
            .holder;
        match holder {
            None => {
                debug!("{} is already free", object);
                return Ok(());
            }
            Some(holder) if holder != sender => {
                debug!(
                    "Ignoring stale throw of {} by {}, it is held by {}",
                    object, sender, holder
                );
                return Ok(());
            }
            Some(_) => {}
        }

        let pose = self
            .avatars
            .get(&sender)
            .ok_or(ActionError::UnknownPlayer {
                player: sender,
                operation: CALL,
            })?
            .pose;
        let impulse = throw_impulse(&pose, &self.config.combat, force_dropped);
        self.registry.release_to_world(&object, impulse)?;

        if let Some(scene_object) = self.scene.get_mut(&object) {
            if let Some(wieldable) = scene_object.wieldable.as_mut() {
                wieldable.holder = None;
                wieldable.locked = false;
            }
            if scene_object.stun_marker.take().is_some() {
                self.events.push_stun_marker(object, false);
            }
        }
        self.set_hand_layer(sender, 0.0);
        if force_dropped {
            self.events.push_audio("Throw");
        }
        Ok(())
    }
}
