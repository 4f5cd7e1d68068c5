use std::{default::Default, time::Duration};

use overclean_shared::{TeamId, Vec3};

use crate::scene::SceneSetting;

/// Contains Config properties which will be used by a Peer
#[derive(Clone)]
pub struct PeerConfig {
    /// Used to configure hovering and interacting
    pub interaction: InteractionConfig,
    /// Used to configure throwing and striking with wielded objects
    pub combat: CombatConfig,
    /// Used to configure the match countdown and lobby rules
    pub match_config: MatchConfig,
    /// Bounds of every scene, looked up by name when a scene is activated
    pub scenes: Vec<SceneSetting>,
}

impl Default for PeerConfig {
    fn default() -> Self {
        Self {
            interaction: InteractionConfig::default(),
            combat: CombatConfig::default(),
            match_config: MatchConfig::default(),
            scenes: Vec::new(),
        }
    }
}

#[derive(Clone)]
pub struct InteractionConfig {
    /// Offset of the selection marker above the hovered object
    pub selection_marker_offset: Vec3,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            selection_marker_offset: Vec3::new(0.0, 2.0, 0.0),
        }
    }
}

#[derive(Clone)]
pub struct CombatConfig {
    pub throw_force_forward: f32,
    pub throw_force_up: f32,
    /// Delay between the strike trigger and attaching the stun marker
    pub strike_marker_delay: Duration,
    /// Delay between attaching the stun marker and allowing the next strike
    pub strike_recovery_delay: Duration,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            throw_force_forward: 10.0,
            throw_force_up: 3.0,
            strike_marker_delay: Duration::from_millis(300),
            strike_recovery_delay: Duration::from_millis(300),
        }
    }
}

#[derive(Clone)]
pub struct MatchConfig {
    /// Length of a match, counted from when the authority starts it
    pub duration: Duration,
    /// Number of teams players choose from in the lobby
    pub team_count: usize,
    /// Room sizes a match may start with
    pub allowed_player_counts: Vec<usize>,
}

impl MatchConfig {
    /// Teams are numbered `1..=team_count`
    pub fn has_team(&self, team: TeamId) -> bool {
        team.index().map_or(false, |index| index < self.team_count)
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_secs(10 * 60),
            team_count: 2,
            allowed_player_counts: vec![2, 4],
        }
    }
}
