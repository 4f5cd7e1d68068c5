//! Integration tests for the match countdown and cleaning progress
//! The authority broadcasts the completion instant once; every peer,
//! including late joiners, derives the remaining time from its own clock.

use std::time::Duration;

use overclean_peer::{
    ErrorEvent, MatchEndedEvent, PeerConfig, PeerError, PlayerInput, TimeChangedEvent,
};
use overclean_shared::{
    ActionError, GameInstant, RemoteAction, RemoteCall, TeamOwnership, Vec3,
};
use overclean_test::{hit, object, player, stain, TestRoom};

fn minutes(count: u64) -> Duration {
    Duration::from_secs(count * 60)
}

fn room() -> TestRoom {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut room = TestRoom::new(PeerConfig::default());
    room.add_player(player(1), None);
    room.add_player(player(2), None);
    room
}

#[test]
fn late_joiner_sees_the_remaining_time() {
    let mut room = room();
    let start = GameInstant::from_secs(1_700_000_000);

    let target = room.peer_mut(player(1)).begin_match(start).unwrap();
    assert_eq!(target, start + minutes(10));
    room.deliver_all();

    // three minutes later a third player joins and gets the buffered target
    let joined_at = start + minutes(3);
    room.add_player(player(3), None);
    room.deliver_all();

    let late = room.peer_mut(player(3));
    assert_eq!(late.remaining_time(&joined_at), minutes(7));
    late.update(joined_at, &Default::default());
    let mut events = late.take_events();
    let announced: Vec<Duration> = events.read::<TimeChangedEvent>().collect();
    assert_eq!(announced, vec![minutes(7)]);
}

#[test]
fn only_the_authority_begins_the_match() {
    let mut room = room();
    let start = GameInstant::from_secs(100);

    assert!(matches!(
        room.peer_mut(player(2)).begin_match(start),
        Err(ActionError::IllegalAction { .. })
    ));
    assert_eq!(room.network().pending(), 0);

    room.peer_mut(player(1)).begin_match(start).unwrap();
    room.deliver_all();
    assert!(room.peer_mut(player(1)).begin_match(start).is_err());
}

#[test]
fn conflicting_target_is_ignored() {
    let mut room = room();
    let start = GameInstant::from_secs(100);
    let target = room.peer_mut(player(1)).begin_match(start).unwrap();
    room.deliver_all();

    let conflicting = RemoteCall::new(
        player(1),
        RemoteAction::StartTimeTracking {
            target_completion: target + minutes(5),
        },
    );
    let peer = room.peer_mut(player(2));
    peer.receive(&conflicting);

    assert_eq!(peer.session().clock().target_completion(), Some(target));
    let mut events = peer.take_events();
    let errors: Vec<PeerError> = events.read::<ErrorEvent>().collect();
    assert!(matches!(
        errors.as_slice(),
        [PeerError::RejectedCall {
            call: "StartTimeTracking",
            source: ActionError::IllegalAction { .. },
            ..
        }]
    ));
}

#[test]
fn replayed_target_is_a_no_op() {
    let mut room = room();
    let start = GameInstant::from_secs(100);
    let target = room.peer_mut(player(1)).begin_match(start).unwrap();
    room.deliver_all();

    let replay = RemoteCall::new(
        player(1),
        RemoteAction::StartTimeTracking {
            target_completion: target,
        },
    );
    let peer = room.peer_mut(player(2));
    peer.receive(&replay);

    let mut events = peer.take_events();
    assert!(!events.has::<ErrorEvent>());
    assert_eq!(peer.session().clock().target_completion(), Some(target));
}

#[test]
fn match_ends_once_on_every_peer() {
    let mut room = room();
    let start = GameInstant::from_secs(100);
    let target = room.peer_mut(player(1)).begin_match(start).unwrap();
    room.deliver_all();

    room.update_all(target.add_millis(0));
    room.update_all(target.add_millis(1_000));

    for player_id in [player(1), player(2)] {
        let peer = room.peer_mut(player_id);
        assert_eq!(peer.remaining_time(&target), Duration::ZERO);
        let mut events = peer.take_events();
        let ends: Vec<GameInstant> = events.read::<MatchEndedEvent>().collect();
        assert_eq!(ends, vec![target]);
    }
}

#[test]
fn nothing_to_clean_is_zero_percent() {
    let mut room = room();
    room.peer_mut(player(1))
        .begin_match(GameInstant::from_secs(100))
        .unwrap();
    room.deliver_all();

    for peer in room.peers() {
        assert_eq!(peer.clean_percentage(), 0.0);
    }
}

#[test]
fn late_joiner_counts_stains_loaded_after_the_start() {
    let mut room = room();
    let start = GameInstant::from_secs(100);
    room.peer_mut(player(1)).begin_match(start).unwrap();
    room.deliver_all();

    // the buffered start replays before the newcomer's scene has loaded
    room.add_player(player(3), None);
    room.deliver_all();
    assert!(room.peer(player(3)).session().is_running());

    room.register_everywhere(object(7), stain(4), TeamOwnership::Everyone, Vec3::ZERO);
    for peer in room.peers() {
        assert_eq!(peer.clean_percentage(), 0.0);
    }

    let target = hit(object(7), 0.5);
    let frame = |millis: u64| start.add_millis(millis);
    room.peer_mut(player(1))
        .update(frame(0), &PlayerInput::hovering(target));
    room.peer_mut(player(1))
        .update(frame(16), &PlayerInput::hovering(target).press_interact());
    room.deliver_all();
    room.peer_mut(player(1))
        .update(frame(1_016), &PlayerInput::hovering(target).hold_interact());
    room.peer_mut(player(1))
        .update(frame(2_016), &PlayerInput::hovering(target).hold_interact());
    room.deliver_all();

    for peer in room.peers() {
        assert!(peer.scene_object(&object(7)).unwrap().is_cleaned());
        assert_eq!(peer.clean_percentage(), 100.0);
    }
}

#[test]
fn remaining_time_is_zero_before_the_match() {
    let room = room();
    assert_eq!(
        room.peer(player(2)).remaining_time(&GameInstant::from_secs(5)),
        Duration::ZERO
    );
}
