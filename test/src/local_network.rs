//! In-memory room for E2E testing
//! Routes remote calls between peers in dispatch order, without network I/O

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use log::debug;

use overclean_shared::{PlayerId, RemoteCall, RemoteDispatcher, RpcTarget};

/// Shared room state. Every dispatcher handed out by the same network
/// delivers into the same set of inboxes.
#[derive(Clone)]
pub struct LocalNetwork {
    room: Arc<Mutex<RoomState>>,
}

struct RoomState {
    members: Vec<PlayerId>,
    inboxes: HashMap<PlayerId, VecDeque<RemoteCall>>,
    buffered: Vec<RemoteCall>,
}

impl LocalNetwork {
    pub fn new() -> Self {
        Self {
            room: Arc::new(Mutex::new(RoomState {
                members: Vec::new(),
                inboxes: HashMap::new(),
                buffered: Vec::new(),
            })),
        }
    }

    /// Dispatcher for `player`. It counts as connected once the player has joined.
    pub fn dispatcher(&self, player: PlayerId) -> LocalDispatcher {
        LocalDispatcher {
            player,
            room: self.room.clone(),
        }
    }

    /// Enter the room. Every buffered call so far is queued for the newcomer.
    pub fn join(&self, player: PlayerId) {
        let mut room = self.room.lock().unwrap();
        if room.members.contains(&player) {
            return;
        }
        room.members.push(player);

        let replay: VecDeque<RemoteCall> = room.buffered.iter().cloned().collect();
        debug!("{} joins, replaying {} buffered calls", player, replay.len());
        room.inboxes.insert(player, replay);
    }

    pub fn leave(&self, player: PlayerId) {
        let mut room = self.room.lock().unwrap();
        room.members.retain(|member| *member != player);
        room.inboxes.remove(&player);
    }

    /// Drain everything waiting for `player`, oldest first
    pub fn take_inbox(&self, player: PlayerId) -> Vec<RemoteCall> {
        let mut room = self.room.lock().unwrap();
        room.inboxes
            .get_mut(&player)
            .map(|inbox| inbox.drain(..).collect())
            .unwrap_or_default()
    }

    /// Calls waiting in any inbox
    pub fn pending(&self) -> usize {
        let room = self.room.lock().unwrap();
        room.inboxes.values().map(VecDeque::len).sum()
    }

    pub fn buffered_len(&self) -> usize {
        self.room.lock().unwrap().buffered.len()
    }
}

impl Default for LocalNetwork {
    fn default() -> Self {
        Self::new()
    }
}

pub struct LocalDispatcher {
    player: PlayerId,
    room: Arc<Mutex<RoomState>>,
}

impl RemoteDispatcher for LocalDispatcher {
    fn dispatch(&mut self, target: RpcTarget, call: RemoteCall) {
        let mut room = self.room.lock().unwrap();
        if target.is_buffered() {
            room.buffered.push(call.clone());
        }

        let recipients: Vec<PlayerId> = room
            .members
            .iter()
            .copied()
            .filter(|member| *member != self.player || target.includes_sender())
            .collect();
        for member in recipients {
            if let Some(inbox) = room.inboxes.get_mut(&member) {
                inbox.push_back(call.clone());
            }
        }
    }

    fn is_connected_and_in_room(&self) -> bool {
        self.room.lock().unwrap().members.contains(&self.player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use overclean_shared::{NetworkObjectRef, RemoteAction};

    fn call(sender: u32) -> RemoteCall {
        RemoteCall::new(
            PlayerId::new(sender),
            RemoteAction::EndInteraction {
                object: NetworkObjectRef::from_u32(1),
            },
        )
    }

    #[test]
    fn others_target_skips_sender() {
        let network = LocalNetwork::new();
        network.join(PlayerId::new(1));
        network.join(PlayerId::new(2));

        network
            .dispatcher(PlayerId::new(1))
            .dispatch(RpcTarget::Others, call(1));

        assert!(network.take_inbox(PlayerId::new(1)).is_empty());
        assert_eq!(network.take_inbox(PlayerId::new(2)), vec![call(1)]);
    }

    #[test]
    fn late_joiner_receives_buffered_calls_only() {
        let network = LocalNetwork::new();
        network.join(PlayerId::new(1));
        let mut dispatcher = network.dispatcher(PlayerId::new(1));
        dispatcher.dispatch(RpcTarget::All, call(1));
        dispatcher.dispatch(RpcTarget::AllBuffered, call(1));

        network.join(PlayerId::new(2));
        assert_eq!(network.take_inbox(PlayerId::new(2)).len(), 1);
        assert_eq!(network.buffered_len(), 1);
    }

    #[test]
    fn dispatcher_is_offline_until_joined() {
        let network = LocalNetwork::new();
        let dispatcher = network.dispatcher(PlayerId::new(3));
        assert!(!dispatcher.is_connected_and_in_room());

        network.join(PlayerId::new(3));
        assert!(dispatcher.is_connected_and_in_room());
    }
}
