//! # Overclean Peer
//! The runtime each participant of a cleaning match runs: the hover and
//! interact lifecycle for scene objects, wielding and striking, the shared
//! match countdown and cleaning progress, and the lobby start checks.
//!
//! A [`Peer`] never replicates state directly. Every change it decides on is
//! sent as a remote call, and every peer applies that call with the same
//! handler.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod avatar;
mod error;
mod events;
mod interaction;
mod lobby;
mod peer;
mod peer_config;
mod scene;
mod session;
mod wielding;

pub use avatar::{Avatar, PlayerRig, Pose};
pub use error::PeerError;
pub use events::{
    AudioEvent, CleanedEvent, CleaningProgressEvent, DoorEvent, ErrorEvent, Event,
    GameStartEvent, HandLayerEvent, HitEvent, HostLeftEvent, InteractingChangedEvent,
    MatchEndedEvent, MessageEvent, PeerEvents, PlayerListChangedEvent, PlayerListMode,
    SelectionChangedEvent, StunMarkerEvent, TimeChangedEvent, TwoHandedEvent,
};
pub use interaction::{
    select_candidate, InteractionCommand, InteractionState, InteractionStateMachine, PlayerInput,
    PlayerSelection, ProbeHit,
};
pub use lobby::{Roster, RosterEntry, HOST_LEFT, NOT_ALL_READY, TEAMS_NOT_EQUAL, WRONG_PLAYER_COUNT};
pub use peer::Peer;
pub use peer_config::{CombatConfig, InteractionConfig, MatchConfig, PeerConfig};
pub use scene::{
    CleanSpec, CleanableState, InteractableState, InteractionMode, ObjectKind, SceneObject,
    SceneObjects, SceneSetting, StunMarker, WieldCategory, WieldSpec, WieldableState,
};
pub use session::{ClockTick, MatchClock, MatchSession, ProgressTracker};
pub use wielding::{throw_impulse, StrikePhase, StrikeSequence, StrikeStep, WieldingController};
