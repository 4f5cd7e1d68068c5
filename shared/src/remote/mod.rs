mod call;
mod dispatcher;

pub use call::{RemoteAction, RemoteCall, RpcTarget};
pub use dispatcher::{OfflineDispatcher, RemoteDispatcher};
