use std::collections::BTreeMap;

use overclean_shared::NetworkObjectRef;

use crate::scene::SceneObjects;

/// Weights of the cleanables registered on this peer.
///
/// Kept up to date as scene objects register and deregister, so every peer
/// measures against the same set once its scene has loaded, whether or not
/// a match start has reached it yet.
pub struct ProgressTracker {
    cleanables: BTreeMap<NetworkObjectRef, u32>,
    total_weight: u64,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self {
            cleanables: BTreeMap::new(),
            total_weight: 0,
        }
    }

    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    pub fn is_tracked(&self, object: &NetworkObjectRef) -> bool {
        self.cleanables.contains_key(object)
    }

    pub fn cleaned_weight(&self, scene: &SceneObjects) -> u64 {
        self.cleanables
            .iter()
            .filter(|(object, _)| scene.get(object).map_or(false, |o| o.is_cleaned()))
            .map(|(_, weight)| u64::from(*weight))
            .sum()
    }

    /// Cleaned share of the total weight, 0..=100; 0 when nothing is cleanable
    pub fn clean_percentage(&self, scene: &SceneObjects) -> f32 {
        if self.total_weight == 0 {
            return 0.0;
        }
        (self.cleaned_weight(scene) as f64 / self.total_weight as f64 * 100.0) as f32
    }

    // Crate-public

    /// Re-tracking an object replaces its weight
    pub(crate) fn track(&mut self, object: NetworkObjectRef, weight: u32) {
        if let Some(previous) = self.cleanables.insert(object, weight) {
            self.total_weight -= u64::from(previous);
        }
        self.total_weight += u64::from(weight);
    }

    pub(crate) fn untrack(&mut self, object: &NetworkObjectRef) -> bool {
        match self.cleanables.remove(object) {
            Some(weight) => {
                self.total_weight -= u64::from(weight);
                true
            }
            None => false,
        }
    }
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}
