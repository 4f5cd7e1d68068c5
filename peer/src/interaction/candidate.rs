use std::cmp::Ordering;

use overclean_shared::NetworkObjectRef;

use crate::{interaction::input::ProbeHit, scene::SceneSetting};

/// Pick the probe hit the player is looking at.
///
/// Nearest hit wins; equal distances fall back to the lowest ref so every
/// peer and every frame agrees. Hits outside the scene bounds are ignored.
pub fn select_candidate(
    hits: &[ProbeHit],
    bounds: Option<&SceneSetting>,
) -> Option<NetworkObjectRef> {
    hits.iter()
        .filter(|hit| hit.distance.is_finite())
        .filter(|hit| bounds.map_or(true, |setting| setting.contains(hit.position.ground())))
        .min_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.object.cmp(&b.object))
        })
        .map(|hit| hit.object)
}
