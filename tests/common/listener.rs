//! Recording listener for integration tests.

use std::sync::Arc;
use std::time::Duration;

use banter::ServerListener;
use banter_proto::{ChatMessage, ChatUser};
use tokio::sync::mpsc;
use tokio::time::timeout;

/// One observed listener callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Joined(ChatUser),
    Left(ChatUser),
    Chat(ChatMessage),
    Disconnected,
    FailedConnection,
    SuccessfulConnection(String),
}

/// A `ServerListener` that forwards every callback into a channel.
pub struct RecordingListener {
    tx: mpsc::UnboundedSender<Event>,
}

impl RecordingListener {
    /// Create the listener and the stream of events it records.
    pub fn new() -> (Arc<Self>, EventStream) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Arc::new(Self { tx }), EventStream { rx })
    }

    fn record(&self, event: Event) {
        // The receiving test may have finished already.
        let _ = self.tx.send(event);
    }
}

impl ServerListener for RecordingListener {
    fn on_player_joined(&self, user: &ChatUser) {
        self.record(Event::Joined(user.clone()));
    }

    fn on_player_left(&self, user: &ChatUser) {
        self.record(Event::Left(user.clone()));
    }

    fn on_chat_message(&self, message: &ChatMessage) {
        self.record(Event::Chat(message.clone()));
    }

    fn on_disconnected(&self) {
        self.record(Event::Disconnected);
    }

    fn on_failed_connection(&self) {
        self.record(Event::FailedConnection);
    }

    fn on_successful_connection(&self, name: &str) {
        self.record(Event::SuccessfulConnection(name.to_string()));
    }
}

/// Receiving end of a [`RecordingListener`], in callback order.
pub struct EventStream {
    rx: mpsc::UnboundedReceiver<Event>,
}

impl EventStream {
    /// Wait for the next recorded event.
    pub async fn next(&mut self) -> anyhow::Result<Event> {
        match timeout(Duration::from_secs(5), self.rx.recv()).await {
            Ok(Some(event)) => Ok(event),
            Ok(None) => anyhow::bail!("listener dropped without more events"),
            Err(_) => anyhow::bail!("timed out waiting for a listener event"),
        }
    }

    /// Assert that no event arrives within `window`.
    #[allow(dead_code)]
    pub async fn expect_silence(&mut self, window: Duration) {
        if let Ok(Some(event)) = timeout(window, self.rx.recv()).await {
            panic!("unexpected event: {event:?}");
        }
    }
}
