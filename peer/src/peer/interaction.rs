use std::{collections::VecDeque, time::Duration};

use log::{debug, info};

use overclean_shared::{ActionError, NetworkObjectRef, PlayerId, RemoteAction, RpcTarget, Vec3};

use super::Peer;
use crate::{
    interaction::{InteractionCommand, InteractionState, PlayerSelection},
    scene::ObjectKind,
};

impl Peer {
    pub fn interaction_state(&self) -> InteractionState {
        self.interaction.state()
    }

    pub fn selection(&self) -> PlayerSelection {
        PlayerSelection {
            hovered: self.interaction.hovered(),
            interacting: self.interaction.interacting(),
            wielding: self.wielding.wielding(),
        }
    }

    pub(super) fn execute(&mut self, commands: Vec<InteractionCommand>) {
        let mut queue: VecDeque<InteractionCommand> = commands.into();
        while let Some(command) = queue.pop_front() {
            match command {
                InteractionCommand::Select(target) => {
                    let position = self
                        .registry
                        .resolve(&target)
                        .map_or(Vec3::ZERO, |handle| handle.position());
                    let marker = position + self.config.interaction.selection_marker_offset;
                    self.events.push_selection(Some((target, marker)));
                }
                InteractionCommand::Deselect(_) => {
                    self.events.push_selection(None);
                }
                InteractionCommand::Begin(target) => {
                    let kind = self.scene.get(&target).map(|object| *object.kind());
                    match kind {
                        Some(ObjectKind::Cleanable(_)) => {
                            self.events.push_interacting(true);
                            self.send(
                                RpcTarget::All,
                                RemoteAction::BeginInteraction { object: target },
                            );
                        }
                        Some(ObjectKind::Door) => {
                            let open = !self.scene.get(&target).map_or(false, |o| o.is_door_open());
                            self.events.push_interacting(true);
                            self.send(
                                RpcTarget::All,
                                RemoteAction::BeginInteraction { object: target },
                            );
                            self.send(
                                RpcTarget::AllBuffered,
                                RemoteAction::SetDoor {
                                    object: target,
                                    open,
                                },
                            );
                        }
                        Some(ObjectKind::Wieldable(_)) => {
                            if let Err(error) = self.pickup_object(target) {
                                debug!("Pickup of {} refused: {}", target, error);
                            }
                            // a held object is never interacted with
                            queue.extend(self.interaction.force_stop(&target));
                        }
                        None => {}
                    }
                }
                InteractionCommand::End(target) => {
                    let kind = self.scene.get(&target).map(|object| *object.kind());
                    match kind {
                        Some(ObjectKind::Cleanable(_)) | Some(ObjectKind::Door) => {
                            self.events.push_interacting(false);
                            self.send(
                                RpcTarget::All,
                                RemoteAction::EndInteraction { object: target },
                            );
                        }
                        Some(ObjectKind::Wieldable(_)) => {}
                        None => self.events.push_interacting(false),
                    }
                }
            }
        }
    }

    pub(super) fn advance_cleaning(&mut self, elapsed: Duration) {
        let Some(target) = self.interaction.interacting() else {
            return;
        };
        let progress = {
            let Some(scene_object) = self.scene.get_mut(&target) else {
                return;
            };
            let Some(cleaning_time) = scene_object.clean_spec().map(|spec| spec.cleaning_time)
            else {
                return;
            };
            let Some(state) = scene_object.cleanable.as_mut() else {
                return;
            };
            if state.cleaned {
                return;
            }
            let step = if cleaning_time.is_zero() {
                1.0
            } else {
                elapsed.as_secs_f32() / cleaning_time.as_secs_f32()
            };
            state.progress = (state.progress + step).min(1.0);
            state.progress
        };
        self.events.push_cleaning_progress(target, progress);

        if progress >= 1.0 {
            info!("Finished cleaning {}", target);
            self.send(
                RpcTarget::AllBuffered,
                RemoteAction::CompleteCleaning { object: target },
            );
            let commands = self.interaction.force_stop(&target);
            self.execute(commands);
        }
    }

    pub(super) fn apply_begin_interaction(
        &mut self,
        sender: PlayerId,
        object: NetworkObjectRef,
    ) -> Result<(), ActionError> {
        const CALL: &str = "BeginInteraction";

        let scene_object = self.scene.resolve_mut(&object, CALL)?;
        if let ObjectKind::Wieldable(_) = scene_object.kind {
            return Err(ActionError::illegal(CALL, "wieldables are claimed by pickup"));
        }
        scene_object.interactable.lock_for(sender);
        Ok(())
    }

    pub(super) fn apply_end_interaction(
        &mut self,
        sender: PlayerId,
        object: NetworkObjectRef,
    ) -> Result<(), ActionError> {
        let scene_object = self.scene.resolve_mut(&object, "EndInteraction")?;
        if !scene_object.interactable.unlock_from(sender) {
            debug!("{} does not hold the lock on {}", sender, object);
        }
        Ok(())
    }

    pub(super) fn apply_complete_cleaning(
        &mut self,
        sender: PlayerId,
        object: NetworkObjectRef,
    ) -> Result<(), ActionError> {
        const CALL: &str = "CompleteCleaning";

        let scene_object = self.scene.resolve_mut(&object, CALL)?;
        let state = scene_object
            .cleanable
            .as_mut()
            .ok_or_else(|| ActionError::illegal(CALL, "object is not cleanable"))?;
        if state.cleaned {
            return Ok(());
        }
        state.cleaned = true;
        state.progress = 1.0;
        scene_object.interactable.current_interactor = None;
        scene_object.interactable.is_locked = false;

        info!("{} cleaned by {}", object, sender);
        self.events.push_cleaned(object);
        Ok(())
    }

    pub(super) fn apply_set_door(&mut self, object: NetworkObjectRef, open: bool) -> Result<(), ActionError> {
        const CALL: &str = "SetDoor";

        let scene_object = self.scene.resolve_mut(&object, CALL)?;
        if scene_object.kind != ObjectKind::Door {
            return Err(ActionError::illegal(CALL, "object is not a door"));
        }
        if scene_object.door_open != open {
            scene_object.door_open = open;
            self.events.push_door(object, open);
        }
        Ok(())
    }
}
