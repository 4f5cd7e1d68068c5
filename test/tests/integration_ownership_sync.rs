//! Integration tests for wieldable ownership across peers
//! Every peer applies the same calls in the same order, so they must agree on
//! the holder, and no peer may keep wielding an object someone else holds.

use overclean_peer::{ErrorEvent, HandLayerEvent, PeerConfig, PeerError};
use overclean_shared::{ActionError, RemoteAction, RemoteCall, TeamOwnership, Vec3};
use overclean_test::{
    assert_no_dangling_wielding, assert_single_holder, mop, object, player, TestRoom,
};

fn two_player_room() -> TestRoom {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut room = TestRoom::new(PeerConfig::default());
    room.add_player(player(1), None);
    room.add_player(player(2), None);
    room.register_everywhere(object(10), mop(), TeamOwnership::Everyone, Vec3::ZERO);
    room
}

#[test]
fn pickup_is_seen_by_every_peer() {
    let mut room = two_player_room();

    room.peer_mut(player(1)).pickup_object(object(10)).unwrap();
    room.deliver_all();

    assert_single_holder!(room, object(10), Some(player(1)));
    assert_eq!(room.peer(player(1)).wielding(), Some(object(10)));
    assert_eq!(
        room.peer(player(2)).avatar(&player(1)).unwrap().hand_layer_weight(),
        1.0
    );
}

#[test]
fn concurrent_pickups_last_applied_wins() {
    let mut room = two_player_room();

    // both press before either call is delivered
    room.peer_mut(player(1)).pickup_object(object(10)).unwrap();
    room.peer_mut(player(2)).pickup_object(object(10)).unwrap();
    room.deliver_all();

    assert_single_holder!(room, object(10), Some(player(2)));
    assert_no_dangling_wielding!(room);
    assert_eq!(room.peer(player(1)).wielding(), None);
    assert_eq!(room.peer(player(2)).wielding(), Some(object(10)));

    // the loser's hand layer is reset everywhere
    for peer in room.peers() {
        assert_eq!(peer.avatar(&player(1)).unwrap().hand_layer_weight(), 0.0);
        assert_eq!(peer.avatar(&player(2)).unwrap().hand_layer_weight(), 1.0);
    }
}

#[test]
fn loser_sees_its_hand_layer_reset() {
    let mut room = two_player_room();

    room.peer_mut(player(1)).pickup_object(object(10)).unwrap();
    room.peer_mut(player(2)).pickup_object(object(10)).unwrap();
    room.deliver_all();

    let mut events = room.peer_mut(player(1)).take_events();
    let layers: Vec<_> = events.read::<HandLayerEvent>().collect();
    assert_eq!(
        layers,
        vec![(player(1), 1.0), (player(1), 0.0), (player(2), 1.0)]
    );
}

#[test]
fn stale_throw_from_non_holder_is_ignored() {
    let mut room = two_player_room();
    room.peer_mut(player(2)).pickup_object(object(10)).unwrap();
    room.deliver_all();

    let stale = RemoteCall::new(
        player(1),
        RemoteAction::ThrowObject {
            object: object(10),
            force_dropped: false,
        },
    );
    for player_id in [player(1), player(2)] {
        room.peer_mut(player_id).receive(&stale);
    }

    assert_single_holder!(room, object(10), Some(player(2)));
}

#[test]
fn holder_can_pick_up_again_after_throwing() {
    let mut room = two_player_room();

    room.peer_mut(player(1)).pickup_object(object(10)).unwrap();
    room.deliver_all();
    room.peer_mut(player(1)).drop_object().unwrap();
    room.deliver_all();
    assert_single_holder!(room, object(10), None);

    room.peer_mut(player(2)).pickup_object(object(10)).unwrap();
    room.deliver_all();
    assert_single_holder!(room, object(10), Some(player(2)));
}

#[test]
fn held_object_cannot_be_picked_up_locally() {
    let mut room = two_player_room();
    room.peer_mut(player(1)).pickup_object(object(10)).unwrap();
    room.deliver_all();

    let result = room.peer_mut(player(2)).pickup_object(object(10));
    assert!(matches!(result, Err(ActionError::IllegalAction { .. })));
    assert_eq!(room.network().pending(), 0);
}

#[test]
fn unresolved_object_is_dropped_and_reported() {
    let mut room = two_player_room();
    let unknown = object(99);

    room.peer_mut(player(2)).receive(&RemoteCall::new(
        player(1),
        RemoteAction::ThrowObject {
            object: unknown,
            force_dropped: false,
        },
    ));

    let mut events = room.peer_mut(player(2)).take_events();
    let errors: Vec<PeerError> = events.read::<ErrorEvent>().collect();
    assert_eq!(
        errors,
        vec![PeerError::RejectedCall {
            call: "ThrowObject",
            sender: player(1),
            source: ActionError::UnresolvedReference {
                object: unknown,
                operation: "ThrowObject"
            },
        }]
    );
}

#[test]
fn late_joiner_replays_ownership_history() {
    let mut room = two_player_room();
    room.peer_mut(player(1)).pickup_object(object(10)).unwrap();
    room.deliver_all();

    room.add_player(player(3), None);
    room.peer_mut(player(3))
        .register_object(object(10), mop(), TeamOwnership::Everyone, Vec3::ZERO)
        .unwrap();
    room.deliver_all();

    assert_single_holder!(room, object(10), Some(player(1)));
}
