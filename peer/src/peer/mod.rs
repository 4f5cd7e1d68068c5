mod interaction;
mod lobby;
mod wielding;

use std::{collections::HashMap, mem, time::Duration};

use log::{debug, info, warn};

use overclean_shared::{
    ActionError, GameInstant, LocalPlayerInfo, NetworkObjectRef, ObjectHandle, OwnershipRegistry,
    PlayerId, RemoteAction, RemoteCall, RemoteDispatcher, RpcTarget, TeamId, TeamOwnership,
    Timestamp, Vec3,
};

use crate::{
    avatar::{Avatar, PlayerRig, Pose},
    events::PeerEvents,
    interaction::{select_candidate, InteractionStateMachine, PlayerInput},
    lobby::Roster,
    peer_config::PeerConfig,
    scene::{ObjectKind, SceneObject, SceneObjects, SceneSetting},
    session::MatchSession,
    wielding::WieldingController,
    PeerError,
};

/// One participant of a room.
///
/// Local input goes in through [`update`](Self::update) and the wielding and
/// lobby methods. Every state change they decide on is dispatched as a
/// [`RemoteCall`], and every peer (the sender included) applies it through
/// [`receive`](Self::receive). When the dispatcher is not in a room the peer
/// applies its own calls directly.
pub struct Peer {
    config: PeerConfig,
    local: LocalPlayerInfo,
    dispatcher: Box<dyn RemoteDispatcher>,
    // World
    registry: OwnershipRegistry,
    scene: SceneObjects,
    active_scene: Option<usize>,
    avatars: HashMap<PlayerId, Avatar>,
    // Local player
    interaction: InteractionStateMachine,
    wielding: WieldingController,
    last_update: Option<GameInstant>,
    // Session
    session: MatchSession,
    roster: Roster,
    // Events
    events: PeerEvents,
}

impl Peer {
    /// Create a new Peer for the local player.
    ///
    /// If `local_rig` lacks a hand anchor, wielding is disabled for the
    /// lifetime of the peer and a `MissingDependency` error event is queued.
    pub fn new(
        config: PeerConfig,
        local: LocalPlayerInfo,
        local_rig: PlayerRig,
        dispatcher: Box<dyn RemoteDispatcher>,
    ) -> Self {
        let mut events = PeerEvents::new();

        let wielding_enabled = local_rig.is_complete();
        if !wielding_enabled {
            let error = ActionError::MissingDependency {
                component: "wielding",
                dependency: "hand anchors on the local rig",
            };
            warn!("{}", error);
            events.push_error(PeerError::Action(error));
        }

        let mut avatars = HashMap::new();
        avatars.insert(local.player, Avatar::new(local.team, local_rig));

        let wielding = WieldingController::new(wielding_enabled, &config.combat);
        let session = MatchSession::new(config.match_config.duration);

        Self {
            config,
            local,
            dispatcher,
            // World
            registry: OwnershipRegistry::new(),
            scene: SceneObjects::new(),
            active_scene: None,
            avatars,
            // Local player
            interaction: InteractionStateMachine::new(),
            wielding,
            last_update: None,
            // Session
            session,
            roster: Roster::new(),
            // Events
            events,
        }
    }

    pub fn config(&self) -> &PeerConfig {
        &self.config
    }

    pub fn local_player(&self) -> PlayerId {
        self.local.player
    }

    pub fn local_info(&self) -> &LocalPlayerInfo {
        &self.local
    }

    /// Whether this peer starts matches and the match clock. Without a known
    /// host, a peer that is not in a room is its own authority.
    pub fn is_authority(&self) -> bool {
        match self.roster.host() {
            Some(host) => host == self.local.player,
            None => !self.dispatcher.is_connected_and_in_room(),
        }
    }

    /// Everything that happened since the last call
    pub fn take_events(&mut self) -> PeerEvents {
        mem::replace(&mut self.events, PeerEvents::new())
    }

    // Avatars

    pub fn spawn_avatar(&mut self, player: PlayerId, team: Option<TeamId>, rig: PlayerRig) {
        if self.avatars.insert(player, Avatar::new(team, rig)).is_some() {
            debug!("Respawned avatar of {}", player);
        }
    }

    pub fn despawn_avatar(&mut self, player: &PlayerId) -> Option<Avatar> {
        self.avatars.remove(player)
    }

    pub fn avatar(&self, player: &PlayerId) -> Option<&Avatar> {
        self.avatars.get(player)
    }

    pub fn set_pose(&mut self, player: PlayerId, pose: Pose) -> Result<(), ActionError> {
        let avatar = self
            .avatars
            .get_mut(&player)
            .ok_or(ActionError::UnknownPlayer {
                player,
                operation: "set_pose",
            })?;
        avatar.pose = pose;
        Ok(())
    }

    // Objects

    /// Register a scene object on this peer, resting at `position`
    pub fn register_object(
        &mut self,
        object: NetworkObjectRef,
        kind: ObjectKind,
        owned_by_team: TeamOwnership,
        position: Vec3,
    ) -> Result<(), ActionError> {
        self.registry
            .try_register(object, ObjectHandle::at_rest(position))?;
        self.scene.insert(object, SceneObject::new(kind, owned_by_team));
        if let ObjectKind::Cleanable(spec) = kind {
            self.session.track_cleanable(object, spec.weight);
        }
        debug!("Registered {} as {:?}", object, kind);
        Ok(())
    }

    /// Tear an object down. Anything the local player was doing with it stops.
    pub fn deregister_object(&mut self, object: &NetworkObjectRef) -> bool {
        let handle = self.registry.deregister(object);
        let scene_object = self.scene.remove(object);
        self.session.untrack_cleanable(object);

        if self.interaction.hovered() == Some(*object) {
            let commands = self.interaction.force_stop(object);
            self.execute(commands);
        }
        if self.wielding.release_if(object) {
            let local = self.local.player;
            self.set_hand_layer(local, 0.0);
            self.events.push_two_handed(false);
        }

        handle.is_some() || scene_object.is_some()
    }

    pub fn registry(&self) -> &OwnershipRegistry {
        &self.registry
    }

    /// Physics adapters drain impulses and write positions back through this
    pub fn registry_mut(&mut self) -> &mut OwnershipRegistry {
        &mut self.registry
    }

    pub fn scene(&self) -> &SceneObjects {
        &self.scene
    }

    pub fn scene_object(&self, object: &NetworkObjectRef) -> Option<&SceneObject> {
        self.scene.get(object)
    }

    /// Use the bounds of `scene_name` for interaction candidates, if configured
    pub fn activate_scene(&mut self, scene_name: &str) -> Option<usize> {
        self.active_scene = SceneSetting::find(&self.config.scenes, scene_name);
        if self.active_scene.is_none() {
            debug!("No scene setting for {}, interaction is unbounded", scene_name);
        }
        self.active_scene
    }

    pub fn active_scene(&self) -> Option<&SceneSetting> {
        self.active_scene
            .and_then(|index| self.config.scenes.get(index))
    }

    // Match

    pub fn session(&self) -> &MatchSession {
        &self.session
    }

    /// Authority only: fix the completion instant and broadcast it
    pub fn begin_match(&mut self, now: GameInstant) -> Result<GameInstant, ActionError> {
        const CALL: &str = "StartTimeTracking";

        if !self.is_authority() {
            return Err(ActionError::illegal(CALL, "only the match authority starts the clock"));
        }
        if self.session.clock().target_completion().is_some() {
            return Err(ActionError::illegal(CALL, "match target is already set"));
        }

        let target_completion = self.session.target_for(now);
        self.send(
            RpcTarget::AllBuffered,
            RemoteAction::StartTimeTracking { target_completion },
        );
        Ok(target_completion)
    }

    pub fn remaining_time(&self, now: &GameInstant) -> Duration {
        self.session.remaining(now)
    }

    pub fn clean_percentage(&self) -> f32 {
        self.session.clean_percentage(&self.scene)
    }

    // Updates

    /// Advance the local player by one frame
    pub fn update(&mut self, now: GameInstant, input: &PlayerInput) {
        let elapsed = self
            .last_update
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(&last));
        self.last_update = Some(now);

        self.poll_strike(now);

        // cleaned, picked up, locked or torn down since last frame
        if let Some(target) = self.interaction.hovered() {
            if !self.is_available(&target) {
                let commands = self.interaction.force_stop(&target);
                self.execute(commands);
            }
        }

        let bounds = self
            .active_scene
            .and_then(|index| self.config.scenes.get(index));
        let candidate = select_candidate(&input.probe_hits, bounds);
        let commands = {
            let scene = &self.scene;
            let player = self.local.player;
            let team = self.local.team;
            self.interaction.update(
                candidate,
                input.interact_held,
                input.interact_pressed,
                |target| {
                    scene
                        .get(target)
                        .map_or(false, |object| object.is_available_to(player, team))
                },
                |target| scene.get(target).map(|object| object.kind().interaction_mode()),
            )
        };
        self.execute(commands);

        if input.interact_held {
            self.advance_cleaning(elapsed);
        }
        if input.drop_pressed && self.wielding.is_wielding() {
            if let Err(error) = self.drop_object() {
                debug!("{}", error);
            }
        }
        if input.use_pressed && self.wielding.is_wielding() {
            if let Err(error) = self.strike(now) {
                debug!("{}", error);
            }
        }

        self.poll_clock(now);
    }

    /// Advance the local player by one frame at the current wall-clock time
    pub fn update_now(&mut self, input: &PlayerInput) -> Result<(), PeerError> {
        let now = Timestamp::try_now()?;
        self.update(now, input);
        Ok(())
    }

    /// Apply a remote call. Calls that cannot be applied are dropped and
    /// reported through [`ErrorEvent`](crate::ErrorEvent).
    pub fn receive(&mut self, call: &RemoteCall) {
        if let Err(source) = self.apply(call) {
            warn!(
                "Dropping {} from {}: {}",
                call.action.name(),
                call.sender,
                source
            );
            self.events.push_error(PeerError::RejectedCall {
                call: call.action.name(),
                sender: call.sender,
                source,
            });
        }
    }

    // Private methods

    fn send(&mut self, target: RpcTarget, action: RemoteAction) {
        let call = RemoteCall::new(self.local.player, action);
        if self.dispatcher.is_connected_and_in_room() {
            self.dispatcher.dispatch(target, call);
        } else if target.includes_sender() {
            self.receive(&call);
        } else {
            debug!("Not in a room, {} is not sent", call.action.name());
        }
    }

    fn is_available(&self, object: &NetworkObjectRef) -> bool {
        self.scene.get(object).map_or(false, |scene_object| {
            scene_object.is_available_to(self.local.player, self.local.team)
        })
    }

    fn set_hand_layer(&mut self, player: PlayerId, weight: f32) {
        if let Some(avatar) = self.avatars.get_mut(&player) {
            if avatar.hand_layer_weight != weight {
                avatar.hand_layer_weight = weight;
                self.events.push_hand_layer(player, weight);
            }
        }
    }

    fn poll_clock(&mut self, now: GameInstant) {
        let tick = self.session.poll(&now);
        if let Some(remaining) = tick.time_changed {
            self.events.push_time_change(remaining);
        }
        if tick.ended {
            if let Some(target) = self.session.clock().target_completion() {
                info!("Match over");
                self.events.push_match_end(target);
            }
        }
    }

    // Handlers

    fn apply(&mut self, call: &RemoteCall) -> Result<(), ActionError> {
        let sender = call.sender;
        match &call.action {
            RemoteAction::PickupObject {
                hand,
                object,
                local_rotation,
                local_position,
            } => self.apply_pickup(sender, *hand, *object, *local_position, *local_rotation),
            RemoteAction::ThrowObject {
                object,
                force_dropped,
            } => self.apply_throw(sender, *object, *force_dropped),
            RemoteAction::BeginInteraction { object } => {
                self.apply_begin_interaction(sender, *object)
            }
            RemoteAction::EndInteraction { object } => self.apply_end_interaction(sender, *object),
            RemoteAction::CompleteCleaning { object } => {
                self.apply_complete_cleaning(sender, *object)
            }
            RemoteAction::SetDoor { object, open } => self.apply_set_door(*object, *open),
            RemoteAction::StartTimeTracking { target_completion } => {
                self.session.start(*target_completion).map(|_| ())
            }
            RemoteAction::SetTeam { player, team } => self.apply_set_team(sender, *player, *team),
            RemoteAction::SetReady { player, ready } => {
                self.apply_set_ready(sender, *player, *ready)
            }
            RemoteAction::StartGame { scene_index } => {
                self.apply_start_game(sender, *scene_index)
            }
        }
    }
}
