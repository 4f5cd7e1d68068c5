mod roster;

pub use roster::{Roster, RosterEntry, HOST_LEFT, NOT_ALL_READY, TEAMS_NOT_EQUAL, WRONG_PLAYER_COUNT};
