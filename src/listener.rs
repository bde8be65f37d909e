//! The observer capability consumed by the network layer.

use banter_proto::{ChatMessage, ChatUser};

/// Callbacks the client invokes on observable connection and chat events.
///
/// Implemented by the front end and handed to the client at construction;
/// the client only ever invokes it, never mutates it. Every callback fires
/// on the client's background worker task, so implementations with
/// thread-affinity requirements (e.g. a rendering layer) must hop to their
/// own thread inside the callback.
pub trait ServerListener: Send + Sync {
    /// A remote user joined the session.
    fn on_player_joined(&self, user: &ChatUser);

    /// A remote user left the session.
    fn on_player_left(&self, user: &ChatUser);

    /// A chat message arrived.
    fn on_chat_message(&self, message: &ChatMessage);

    /// The session ended. Always the last callback for a client instance.
    fn on_disconnected(&self);

    /// The connection attempt failed. Terminal; the client does not retry.
    fn on_failed_connection(&self);

    /// The connection was established, under the given local user name.
    fn on_successful_connection(&self, name: &str);
}
