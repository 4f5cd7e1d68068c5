use crate::{
    game_time::GameInstant,
    object_ref::NetworkObjectRef,
    types::{HandSlot, PlayerId, TeamId, Vec3},
};

/// Which peers a remote call is delivered to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RpcTarget {
    All,
    Others,
    /// Like `All`, and also replayed to peers that join later
    AllBuffered,
    /// Like `Others`, and also replayed to peers that join later
    OthersBuffered,
}

impl RpcTarget {
    pub fn includes_sender(&self) -> bool {
        matches!(self, RpcTarget::All | RpcTarget::AllBuffered)
    }

    pub fn is_buffered(&self) -> bool {
        matches!(self, RpcTarget::AllBuffered | RpcTarget::OthersBuffered)
    }
}

/// State-changing actions every peer applies with the same handler
#[derive(Clone, Debug, PartialEq)]
pub enum RemoteAction {
    PickupObject {
        hand: HandSlot,
        object: NetworkObjectRef,
        local_rotation: Vec3,
        local_position: Vec3,
    },
    ThrowObject {
        object: NetworkObjectRef,
        force_dropped: bool,
    },
    BeginInteraction {
        object: NetworkObjectRef,
    },
    EndInteraction {
        object: NetworkObjectRef,
    },
    CompleteCleaning {
        object: NetworkObjectRef,
    },
    SetDoor {
        object: NetworkObjectRef,
        open: bool,
    },
    StartTimeTracking {
        target_completion: GameInstant,
    },
    SetTeam {
        player: PlayerId,
        team: TeamId,
    },
    SetReady {
        player: PlayerId,
        ready: bool,
    },
    StartGame {
        scene_index: usize,
    },
}

impl RemoteAction {
    pub fn name(&self) -> &'static str {
        match self {
            RemoteAction::PickupObject { .. } => "PickupObject",
            RemoteAction::ThrowObject { .. } => "ThrowObject",
            RemoteAction::BeginInteraction { .. } => "BeginInteraction",
            RemoteAction::EndInteraction { .. } => "EndInteraction",
            RemoteAction::CompleteCleaning { .. } => "CompleteCleaning",
            RemoteAction::SetDoor { .. } => "SetDoor",
            RemoteAction::StartTimeTracking { .. } => "StartTimeTracking",
            RemoteAction::SetTeam { .. } => "SetTeam",
            RemoteAction::SetReady { .. } => "SetReady",
            RemoteAction::StartGame { .. } => "StartGame",
        }
    }
}

/// A remote call as seen by the receiving handler: the acting player plus the action
#[derive(Clone, Debug, PartialEq)]
pub struct RemoteCall {
    pub sender: PlayerId,
    pub action: RemoteAction,
}

impl RemoteCall {
    pub fn new(sender: PlayerId, action: RemoteAction) -> Self {
        Self { sender, action }
    }
}
