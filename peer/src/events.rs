use std::{mem, time::Duration, vec::IntoIter};

use overclean_shared::{GameInstant, NetworkObjectRef, PlayerId, Vec3};

use crate::PeerError;

/// Why the room's player list changed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerListMode {
    PlayerJoined,
    PlayerLeft,
    LocalPlayerJoined,
}

/// Presentation and session notifications produced by a [`Peer`](crate::Peer).
///
/// Nothing here needs an acknowledgement. The host application drains each
/// kind with `events.read::<SomeEvent>()`, in the order they were produced.
pub struct PeerEvents {
    selections: Vec<Option<(NetworkObjectRef, Vec3)>>,
    interacting: Vec<bool>,
    cleaning_progress: Vec<(NetworkObjectRef, f32)>,
    cleaned: Vec<NetworkObjectRef>,
    doors: Vec<(NetworkObjectRef, bool)>,
    hits: Vec<NetworkObjectRef>,
    hand_layers: Vec<(PlayerId, f32)>,
    two_handed: Vec<bool>,
    stun_markers: Vec<(NetworkObjectRef, bool)>,
    audio: Vec<&'static str>,
    messages: Vec<String>,
    time_changes: Vec<Duration>,
    match_ends: Vec<GameInstant>,
    game_starts: Vec<usize>,
    host_changes: Vec<PlayerId>,
    player_list: Vec<(PlayerId, PlayerListMode)>,
    errors: Vec<PeerError>,
    empty: bool,
}

impl PeerEvents {
    pub(crate) fn new() -> Self {
        Self {
            selections: Vec::new(),
            interacting: Vec::new(),
            cleaning_progress: Vec::new(),
            cleaned: Vec::new(),
            doors: Vec::new(),
            hits: Vec::new(),
            hand_layers: Vec::new(),
            two_handed: Vec::new(),
            stun_markers: Vec::new(),
            audio: Vec::new(),
            messages: Vec::new(),
            time_changes: Vec::new(),
            match_ends: Vec::new(),
            game_starts: Vec::new(),
            host_changes: Vec::new(),
            player_list: Vec::new(),
            errors: Vec::new(),
            empty: true,
        }
    }

    // Public

    pub fn is_empty(&self) -> bool {
        self.empty
    }

    pub fn read<V: Event>(&mut self) -> V::Iter {
        V::iter(self)
    }

    pub fn has<V: Event>(&self) -> bool {
        V::has(self)
    }

    /// Drop everything that has not been read yet
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    // Crate-public

    pub(crate) fn push_selection(&mut self, selection: Option<(NetworkObjectRef, Vec3)>) {
        self.selections.push(selection);
        self.empty = false;
    }

    pub(crate) fn push_interacting(&mut self, interacting: bool) {
        self.interacting.push(interacting);
        self.empty = false;
    }

    pub(crate) fn push_cleaning_progress(&mut self, object: NetworkObjectRef, progress: f32) {
        self.cleaning_progress.push((object, progress));
        self.empty = false;
    }

    pub(crate) fn push_cleaned(&mut self, object: NetworkObjectRef) {
        self.cleaned.push(object);
        self.empty = false;
    }

    pub(crate) fn push_door(&mut self, object: NetworkObjectRef, open: bool) {
        self.doors.push((object, open));
        self.empty = false;
    }

    pub(crate) fn push_hit(&mut self, object: NetworkObjectRef) {
        self.hits.push(object);
        self.empty = false;
    }

    pub(crate) fn push_hand_layer(&mut self, player: PlayerId, weight: f32) {
        self.hand_layers.push((player, weight));
        self.empty = false;
    }

    pub(crate) fn push_two_handed(&mut self, two_handed: bool) {
        self.two_handed.push(two_handed);
        self.empty = false;
    }

    pub(crate) fn push_stun_marker(&mut self, object: NetworkObjectRef, attached: bool) {
        self.stun_markers.push((object, attached));
        self.empty = false;
    }

    pub(crate) fn push_audio(&mut self, clip: &'static str) {
        self.audio.push(clip);
        self.empty = false;
    }

    pub(crate) fn push_message(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
        self.empty = false;
    }

    pub(crate) fn push_time_change(&mut self, remaining: Duration) {
        self.time_changes.push(remaining);
        self.empty = false;
    }

    pub(crate) fn push_match_end(&mut self, target: GameInstant) {
        self.match_ends.push(target);
        self.empty = false;
    }

    pub(crate) fn push_game_start(&mut self, scene_index: usize) {
        self.game_starts.push(scene_index);
        self.empty = false;
    }

    pub(crate) fn push_host_change(&mut self, new_host: PlayerId) {
        self.host_changes.push(new_host);
        self.empty = false;
    }

    pub(crate) fn push_player_list_change(&mut self, player: PlayerId, mode: PlayerListMode) {
        self.player_list.push((player, mode));
        self.empty = false;
    }

    pub(crate) fn push_error(&mut self, error: PeerError) {
        self.errors.push(error);
        self.empty = false;
    }
}

// Event Trait
pub trait Event {
    type Iter;

    fn iter(events: &mut PeerEvents) -> Self::Iter;

    fn has(events: &PeerEvents) -> bool;
}

macro_rules! peer_event {
    ($(#[$doc:meta])* $name:ident, $field:ident, $item:ty) => {
        $(#[$doc])*
        pub struct $name;
        impl Event for $name {
            type Iter = IntoIter<$item>;

            fn iter(events: &mut PeerEvents) -> Self::Iter {
                let list = mem::take(&mut events.$field);
                IntoIterator::into_iter(list)
            }

            fn has(events: &PeerEvents) -> bool {
                !events.$field.is_empty()
            }
        }
    };
}

peer_event!(
    /// Selection marker moved onto an object (with marker position) or was hidden
    SelectionChangedEvent,
    selections,
    Option<(NetworkObjectRef, Vec3)>
);
peer_event!(
    /// Drives the "Interacting" animator flag of the local player
    InteractingChangedEvent,
    interacting,
    bool
);
peer_event!(CleaningProgressEvent, cleaning_progress, (NetworkObjectRef, f32));
peer_event!(CleanedEvent, cleaned, NetworkObjectRef);
peer_event!(DoorEvent, doors, (NetworkObjectRef, bool));
peer_event!(
    /// The local player started a strike with the given object
    HitEvent,
    hits,
    NetworkObjectRef
);
peer_event!(HandLayerEvent, hand_layers, (PlayerId, f32));
peer_event!(TwoHandedEvent, two_handed, bool);
peer_event!(StunMarkerEvent, stun_markers, (NetworkObjectRef, bool));
peer_event!(AudioEvent, audio, &'static str);
peer_event!(
    /// Human-readable text for the message popup
    MessageEvent,
    messages,
    String
);
peer_event!(
    /// Remaining match time, whenever its seconds value ticks over
    TimeChangedEvent,
    time_changes,
    Duration
);
peer_event!(MatchEndedEvent, match_ends, GameInstant);
peer_event!(GameStartEvent, game_starts, usize);
peer_event!(HostLeftEvent, host_changes, PlayerId);
peer_event!(PlayerListChangedEvent, player_list, (PlayerId, PlayerListMode));
peer_event!(ErrorEvent, errors, PeerError);
