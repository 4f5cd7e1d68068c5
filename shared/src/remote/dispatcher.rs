use crate::remote::call::{RemoteCall, RpcTarget};

/// Delivery primitive for remote calls.
///
/// Implementations must deliver reliably and in order, at least once, to
/// every peer named by the target, including the sender for `All` targets,
/// and must replay buffered calls to peers that join later.
pub trait RemoteDispatcher {
    fn dispatch(&mut self, target: RpcTarget, call: RemoteCall);

    /// When this is false the peer applies its own handlers in-process
    /// instead of dispatching.
    fn is_connected_and_in_room(&self) -> bool;
}

/// Dispatcher for a peer that is not in any room: every call is applied locally.
pub struct OfflineDispatcher;

impl RemoteDispatcher for OfflineDispatcher {
    fn dispatch(&mut self, _target: RpcTarget, _call: RemoteCall) {}

    fn is_connected_and_in_room(&self) -> bool {
        false
    }
}
