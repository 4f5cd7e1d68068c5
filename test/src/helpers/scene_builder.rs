use std::time::Duration;

use overclean_peer::{
    CleanSpec, ObjectKind, PeerConfig, PlayerRig, ProbeHit, SceneSetting, WieldCategory, WieldSpec,
};
use overclean_shared::{AnchorId, Handedness, NetworkObjectRef, PlayerId, TeamId, Vec2, Vec3};

pub fn player(id: u32) -> PlayerId {
    PlayerId::new(id)
}

pub fn team(id: u8) -> TeamId {
    TeamId::new(id)
}

pub fn object(id: u32) -> NetworkObjectRef {
    NetworkObjectRef::from_u32(id)
}

/// Rig with both hand anchors
pub fn rig() -> PlayerRig {
    PlayerRig::new(AnchorId::new(1), AnchorId::new(2))
}

/// Two-handed cleaning tool, can be knocked loose
pub fn mop() -> ObjectKind {
    let mut spec = WieldSpec::new(Handedness::TwoHanded, WieldCategory::CleaningTool);
    spec.hand_offset = Vec3::new(0.0, -0.2, 0.1);
    spec.rotation_offset = Vec3::new(0.0, 90.0, 0.0);
    ObjectKind::Wieldable(spec)
}

/// One-handed tool, stays in hand on contact
pub fn bucket() -> ObjectKind {
    ObjectKind::Wieldable(WieldSpec::new(Handedness::OneHanded, WieldCategory::Tool))
}

pub fn stain(weight: u32) -> ObjectKind {
    ObjectKind::Cleanable(CleanSpec {
        weight,
        cleaning_time: Duration::from_secs(2),
    })
}

pub fn door() -> ObjectKind {
    ObjectKind::Door
}

pub fn hit(object: NetworkObjectRef, distance: f32) -> ProbeHit {
    ProbeHit::new(object, distance, Vec3::ZERO)
}

pub fn hit_at(object: NetworkObjectRef, distance: f32, position: Vec3) -> ProbeHit {
    ProbeHit::new(object, distance, position)
}

/// Default config plus a "House" scene spanning -10..10 on both ground axes
pub fn house_config() -> PeerConfig {
    let mut config = PeerConfig::default();
    config.scenes.push(SceneSetting::new(
        "House",
        Vec2::new(-10.0, -10.0),
        Vec2::new(10.0, 10.0),
    ));
    config
}
