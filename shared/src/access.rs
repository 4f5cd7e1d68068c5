use crate::types::{TeamId, TeamOwnership};

/// Whether a player on `player_team` may interact with, or pick up, an object
/// owned by `owned_by`.
///
/// Runs for every hovered candidate on every update, so it stays a pure
/// comparison. A player without a team only gets `Everyone` objects.
pub fn permits(player_team: Option<TeamId>, owned_by: TeamOwnership) -> bool {
    match owned_by {
        TeamOwnership::Everyone => true,
        TeamOwnership::Team(team) => player_team == Some(team),
    }
}
