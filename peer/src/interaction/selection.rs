use overclean_shared::NetworkObjectRef;

/// What the local player is pointing at, using, and holding. Never replicated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayerSelection {
    pub hovered: Option<NetworkObjectRef>,
    pub interacting: Option<NetworkObjectRef>,
    pub wielding: Option<NetworkObjectRef>,
}
