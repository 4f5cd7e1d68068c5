use log::debug;

use overclean_shared::{ActionError, PlayerId, TeamId};

use crate::peer_config::MatchConfig;

pub const WRONG_PLAYER_COUNT: &str = "You need 2 or 4 players to start the game!";
pub const TEAMS_NOT_EQUAL: &str = "All teams need to be equal!";
pub const NOT_ALL_READY: &str = "All players need to be ready!";
pub const HOST_LEFT: &str = "The host has left the server.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RosterEntry {
    pub player: PlayerId,
    pub nickname: String,
    pub team: Option<TeamId>,
    pub ready: bool,
}

impl RosterEntry {
    pub fn new(player: PlayerId, nickname: impl Into<String>) -> Self {
        Self {
            player,
            nickname: nickname.into(),
            team: None,
            ready: false,
        }
    }
}

/// Players in the room, in join order, with the lobby choices they made
pub struct Roster {
    entries: Vec<RosterEntry>,
    host: Option<PlayerId>,
}

impl Roster {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            host: None,
        }
    }

    pub fn host(&self) -> Option<PlayerId> {
        self.host
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn get(&self, player: &PlayerId) -> Option<&RosterEntry> {
        self.entries.iter().find(|entry| entry.player == *player)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Players on `team`
    pub fn team_size(&self, team: TeamId) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.team == Some(team))
            .count()
    }

    /// Check the room may start a match. Nothing is mutated either way.
    pub fn can_start_match(&self, config: &MatchConfig) -> Result<(), ActionError> {
        let players = self.entries.len();
        if !config.allowed_player_counts.contains(&players) {
            return Err(ActionError::PreconditionNotMet {
                message: WRONG_PLAYER_COUNT,
            });
        }

        if config.team_count > 0 {
            let per_team = players / config.team_count;
            // a team past the last representable id can hold nobody
            let unequal = (0..config.team_count).any(|index| {
                TeamId::from_index(index).map_or(0, |team| self.team_size(team)) != per_team
            });
            if unequal {
                return Err(ActionError::PreconditionNotMet {
                    message: TEAMS_NOT_EQUAL,
                });
            }
        }

        if !self.entries.iter().all(|entry| entry.ready) {
            return Err(ActionError::PreconditionNotMet {
                message: NOT_ALL_READY,
            });
        }

        Ok(())
    }

    // Crate-public

    pub(crate) fn set_host(&mut self, host: PlayerId) {
        self.host = Some(host);
    }

    /// Returns false if the player was already listed
    pub(crate) fn add(&mut self, entry: RosterEntry) -> bool {
        if self.get(&entry.player).is_some() {
            debug!("{} is already in the roster", entry.player);
            return false;
        }
        self.entries.push(entry);
        true
    }

    pub(crate) fn remove(&mut self, player: &PlayerId) -> Option<RosterEntry> {
        let index = self.entries.iter().position(|entry| entry.player == *player)?;
        Some(self.entries.remove(index))
    }

    pub(crate) fn set_team(&mut self, player: PlayerId, team: TeamId) -> Result<(), ActionError> {
        self.entry_mut(player, "SetTeam")?.team = Some(team);
        Ok(())
    }

    pub(crate) fn set_ready(&mut self, player: PlayerId, ready: bool) -> Result<(), ActionError> {
        self.entry_mut(player, "SetReady")?.ready = ready;
        Ok(())
    }

    fn entry_mut(
        &mut self,
        player: PlayerId,
        operation: &'static str,
    ) -> Result<&mut RosterEntry, ActionError> {
        self.entries
            .iter_mut()
            .find(|entry| entry.player == player)
            .ok_or(ActionError::UnknownPlayer { player, operation })
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}
