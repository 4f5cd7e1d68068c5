use log::info;

use overclean_shared::{ActionError, PlayerId, RemoteAction, RpcTarget, TeamId};

use super::Peer;
use crate::{
    events::PlayerListMode,
    lobby::{Roster, RosterEntry, HOST_LEFT},
};

impl Peer {
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Set the initial host, without announcing a switch
    pub fn set_host(&mut self, host: PlayerId) {
        self.roster.set_host(host);
    }

    pub fn player_joined(&mut self, player: PlayerId, nickname: impl Into<String>) {
        if self.roster.add(RosterEntry::new(player, nickname)) {
            let mode = if player == self.local.player {
                PlayerListMode::LocalPlayerJoined
            } else {
                PlayerListMode::PlayerJoined
            };
            self.events.push_player_list_change(player, mode);
        }
    }

    pub fn player_left(&mut self, player: PlayerId) {
        if self.roster.remove(&player).is_some() {
            self.events
                .push_player_list_change(player, PlayerListMode::PlayerLeft);
        }
    }

    pub fn host_switched(&mut self, new_host: PlayerId) {
        info!("Host switched to {}", new_host);
        self.roster.set_host(new_host);
        self.events.push_message(HOST_LEFT);
        self.events.push_host_change(new_host);
    }

    pub fn set_local_team(&mut self, team: TeamId) -> Result<(), ActionError> {
        if !self.config.match_config.has_team(team) {
            return Err(ActionError::illegal("SetTeam", "no such team"));
        }
        let player = self.local.player;
        self.roster.set_team(player, team)?;

        self.local.team = Some(team);
        self.local.number_in_team = self
            .roster
            .entries()
            .iter()
            .filter(|entry| entry.team == Some(team))
            .position(|entry| entry.player == player)
            .and_then(|position| u8::try_from(position).ok());
        if let Some(avatar) = self.avatars.get_mut(&player) {
            avatar.team = Some(team);
        }

        self.send(RpcTarget::OthersBuffered, RemoteAction::SetTeam { player, team });
        Ok(())
    }

    pub fn set_local_ready(&mut self, ready: bool) -> Result<(), ActionError> {
        let player = self.local.player;
        self.roster.set_ready(player, ready)?;
        self.send(RpcTarget::OthersBuffered, RemoteAction::SetReady { player, ready });
        Ok(())
    }

    pub fn can_start_match(&self) -> Result<(), ActionError> {
        self.roster.can_start_match(&self.config.match_config)
    }

    /// Host only. A failed precondition is also shown as a message.
    pub fn start_game(&mut self, scene_index: usize) -> Result<(), ActionError> {
        if !self.is_authority() {
            return Err(ActionError::illegal("StartGame", "only the host can start the game"));
        }
        if let Err(error) = self.can_start_match() {
            if let ActionError::PreconditionNotMet { message } = &error {
                self.events.push_message(*message);
            }
            return Err(error);
        }

        info!("Starting game in scene {}", scene_index);
        self.send(RpcTarget::All, RemoteAction::StartGame { scene_index });
        Ok(())
    }

    pub(super) fn apply_set_team(
        &mut self,
        sender: PlayerId,
        player: PlayerId,
        team: TeamId,
    ) -> Result<(), ActionError> {
        if player != sender {
            return Err(ActionError::illegal("SetTeam", "players choose their own team"));
        }
        if !self.config.match_config.has_team(team) {
            return Err(ActionError::illegal("SetTeam", "no such team"));
        }
        self.roster.set_team(player, team)?;
        if let Some(avatar) = self.avatars.get_mut(&player) {
            avatar.team = Some(team);
        }
        if player == self.local.player {
            self.local.team = Some(team);
        }
        Ok(())
    }

    pub(super) fn apply_set_ready(
        &mut self,
        sender: PlayerId,
        player: PlayerId,
        ready: bool,
    ) -> Result<(), ActionError> {
        if player != sender {
            return Err(ActionError::illegal("SetReady", "players ready themselves"));
        }
        self.roster.set_ready(player, ready)
    }

    pub(super) fn apply_start_game(
        &mut self,
        sender: PlayerId,
        scene_index: usize,
    ) -> Result<(), ActionError> {
        // with no host known only our own offline call counts
        let from_host = self
            .roster
            .host()
            .map_or(sender == self.local.player, |host| host == sender);
        if !from_host {
            return Err(ActionError::illegal("StartGame", "only the host can start the game"));
        }
        info!("Game starting in scene {}", scene_index);
        self.events.push_game_start(scene_index);
        Ok(())
    }
}
