//! Integration tests for hovering and interacting with scene objects

use overclean_peer::{
    CleanedEvent, CleaningProgressEvent, InteractionState, PlayerInput, SelectionChangedEvent,
};
use overclean_shared::{GameInstant, TeamOwnership, Vec3};
use overclean_test::{
    door, hit, hit_at, house_config, mop, object, player, stain, team, TestRoom,
};

fn frame(millis: u64) -> GameInstant {
    GameInstant::from_millis(1_000_000 + millis)
}

fn room() -> TestRoom {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut room = TestRoom::new(house_config());
    room.add_player(player(1), Some(team(1)));
    room.add_player(player(2), Some(team(2)));
    room
}

#[test]
fn other_teams_object_never_reaches_interacting() {
    let mut room = room();
    room.register_everywhere(object(5), door(), TeamOwnership::Team(team(2)), Vec3::ZERO);
    let target = hit(object(5), 1.0);

    let peer = room.peer_mut(player(1));
    peer.update(frame(0), &PlayerInput::hovering(target));
    peer.update(frame(16), &PlayerInput::hovering(target).press_interact());
    peer.update(frame(32), &PlayerInput::hovering(target).hold_interact());

    assert_eq!(peer.interaction_state(), InteractionState::Idle);
    assert!(!peer.scene_object(&object(5)).unwrap().is_door_open());
    assert_eq!(room.network().pending(), 0);
}

#[test]
fn own_teams_door_opens_everywhere() {
    let mut room = room();
    room.register_everywhere(object(5), door(), TeamOwnership::Team(team(2)), Vec3::ZERO);
    let target = hit(object(5), 1.0);

    let peer = room.peer_mut(player(2));
    peer.update(frame(0), &PlayerInput::hovering(target));
    peer.update(frame(16), &PlayerInput::hovering(target).press_interact());
    room.deliver_all();

    for peer in room.peers() {
        assert!(peer.scene_object(&object(5)).unwrap().is_door_open());
    }
}

#[test]
fn hovering_places_selection_marker_above_object() {
    let mut room = room();
    room.register_everywhere(
        object(7),
        stain(1),
        TeamOwnership::Everyone,
        Vec3::new(1.0, 0.0, 1.0),
    );

    let peer = room.peer_mut(player(1));
    peer.update(frame(0), &PlayerInput::hovering(hit(object(7), 0.5)));
    peer.update(frame(16), &PlayerInput::idle());

    let mut events = peer.take_events();
    let selections: Vec<_> = events.read::<SelectionChangedEvent>().collect();
    assert_eq!(
        selections,
        vec![Some((object(7), Vec3::new(1.0, 2.0, 1.0))), None]
    );
}

#[test]
fn cleaning_locks_out_the_other_player_and_completes() {
    let mut room = room();
    room.register_everywhere(object(7), stain(3), TeamOwnership::Everyone, Vec3::ZERO);
    room.register_everywhere(object(8), stain(1), TeamOwnership::Everyone, Vec3::ZERO);
    room.peer_mut(player(1)).begin_match(frame(0)).unwrap();
    room.deliver_all();

    let target = hit(object(7), 0.5);
    room.peer_mut(player(1))
        .update(frame(0), &PlayerInput::hovering(target));
    room.peer_mut(player(1))
        .update(frame(16), &PlayerInput::hovering(target).press_interact());
    room.deliver_all();
    assert_eq!(
        room.peer(player(1)).interaction_state(),
        InteractionState::Interacting(object(7))
    );

    // locked for player 2 on its own peer
    room.peer_mut(player(2))
        .update(frame(16), &PlayerInput::hovering(target).press_interact());
    assert_eq!(room.peer(player(2)).interaction_state(), InteractionState::Idle);

    room.peer_mut(player(1))
        .update(frame(1_016), &PlayerInput::hovering(target).hold_interact());
    room.peer_mut(player(1))
        .update(frame(2_016), &PlayerInput::hovering(target).hold_interact());
    room.deliver_all();

    for peer in room.peers() {
        let stain = peer.scene_object(&object(7)).unwrap();
        assert!(stain.is_cleaned());
        assert!(!stain.interactable().is_locked);
        assert_eq!(peer.clean_percentage(), 75.0);
    }
    assert_eq!(room.peer(player(1)).interaction_state(), InteractionState::Idle);

    let mut events = room.peer_mut(player(1)).take_events();
    let progress: Vec<f32> = events
        .read::<CleaningProgressEvent>()
        .map(|(_, progress)| progress)
        .collect();
    assert_eq!(progress.last().copied(), Some(1.0));
    assert!(progress.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(events.read::<CleanedEvent>().collect::<Vec<_>>(), vec![object(7)]);
}

#[test]
fn releasing_early_keeps_the_stain_dirty_and_unlocked() {
    let mut room = room();
    room.register_everywhere(object(7), stain(1), TeamOwnership::Everyone, Vec3::ZERO);
    let target = hit(object(7), 0.5);

    room.peer_mut(player(1))
        .update(frame(0), &PlayerInput::hovering(target));
    room.peer_mut(player(1))
        .update(frame(16), &PlayerInput::hovering(target).press_interact());
    room.peer_mut(player(1))
        .update(frame(500), &PlayerInput::hovering(target));
    room.deliver_all();

    for peer in room.peers() {
        let stain = peer.scene_object(&object(7)).unwrap();
        assert!(!stain.is_cleaned());
        assert!(!stain.interactable().is_locked);
    }

    // now player 2 can take over
    room.peer_mut(player(2))
        .update(frame(600), &PlayerInput::hovering(target));
    room.peer_mut(player(2))
        .update(frame(616), &PlayerInput::hovering(target).press_interact());
    assert_eq!(
        room.peer(player(2)).interaction_state(),
        InteractionState::Interacting(object(7))
    );
}

#[test]
fn pressing_on_a_wieldable_picks_it_up() {
    let mut room = room();
    room.register_everywhere(object(10), mop(), TeamOwnership::Everyone, Vec3::ZERO);
    let target = hit(object(10), 0.5);

    room.peer_mut(player(1))
        .update(frame(0), &PlayerInput::hovering(target));
    room.peer_mut(player(1))
        .update(frame(16), &PlayerInput::hovering(target).press_interact());
    room.deliver_all();

    assert_eq!(room.peer(player(1)).wielding(), Some(object(10)));
    assert_eq!(room.peer(player(1)).interaction_state(), InteractionState::Idle);
    assert_eq!(
        room.peer(player(2)).scene_object(&object(10)).unwrap().holder(),
        Some(player(1))
    );
}

#[test]
fn nearest_candidate_inside_the_scene_wins() {
    let mut room = room();
    room.register_everywhere(object(1), stain(1), TeamOwnership::Everyone, Vec3::ZERO);
    room.register_everywhere(object(2), stain(1), TeamOwnership::Everyone, Vec3::ZERO);
    room.register_everywhere(object(3), stain(1), TeamOwnership::Everyone, Vec3::ZERO);

    let peer = room.peer_mut(player(1));
    assert_eq!(peer.activate_scene("House"), Some(0));

    let input = PlayerInput {
        probe_hits: vec![
            hit_at(object(1), 0.2, Vec3::new(40.0, 0.0, 0.0)),
            hit_at(object(2), 0.9, Vec3::new(1.0, 0.0, 1.0)),
            hit_at(object(3), 0.6, Vec3::new(-1.0, 0.0, 2.0)),
        ],
        ..PlayerInput::default()
    };
    peer.update(frame(0), &input);

    assert_eq!(peer.selection().hovered, Some(object(3)));
}

#[test]
fn deregistering_the_target_stops_the_interaction() {
    let mut room = room();
    room.register_everywhere(object(7), stain(1), TeamOwnership::Everyone, Vec3::ZERO);
    let target = hit(object(7), 0.5);

    let peer = room.peer_mut(player(1));
    peer.update(frame(0), &PlayerInput::hovering(target));
    peer.update(frame(16), &PlayerInput::hovering(target).press_interact());
    assert!(peer.deregister_object(&object(7)));

    assert_eq!(peer.interaction_state(), InteractionState::Idle);
    assert_eq!(peer.selection().interacting, None);
}
