//! The socket client: owns the TCP connection, the background read loop,
//! outbound sends, and the session lifecycle.
//!
//! A `ChatClient` is one-shot. `start()` spawns a worker task that connects,
//! announces the local user, and reads framed lines until the session ends;
//! a new connection attempt needs a fresh instance. `stop()` and `send()`
//! are callable from any task.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use banter_proto::{ChatMessage, ChatUser, Frame, LineCodec};
use futures_util::{SinkExt, StreamExt};
use parking_lot::Mutex;
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::task::JoinHandle;
use tokio_util::codec::{FramedRead, FramedWrite};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::dispatch::dispatch_line;
use crate::listener::ServerListener;

/// Lifecycle states of a client instance.
///
/// Transitions run `NotConnected → Connecting → Connected → Stopping →
/// NotConnected`; an orderly stop never skips `Stopping`. A failed
/// connection attempt drops straight back to `NotConnected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientState {
    /// No transport. The initial and terminal state.
    NotConnected,
    /// The worker is opening the transport.
    Connecting,
    /// Connected and reading.
    Connected,
    /// The read loop has exited; the shutdown sequence is running.
    Stopping,
}

type Writer = FramedWrite<OwnedWriteHalf, LineCodec>;
type Reader = FramedRead<OwnedReadHalf, LineCodec>;

/// Shared slot for the outbound half of the connection.
///
/// `None` until the connection is established, so pre-connection sends
/// drop instead of queueing. The async mutex serializes concurrent sends.
type WriterSlot = Arc<tokio::sync::Mutex<Option<Writer>>>;

/// A chat client bound to one server endpoint and one local user.
pub struct ChatClient {
    host: String,
    port: u16,
    user: ChatUser,
    listener: Arc<dyn ServerListener>,
    state: Arc<Mutex<ClientState>>,
    started: AtomicBool,
    shutdown: CancellationToken,
    writer: WriterSlot,
}

impl ChatClient {
    /// Create a client for one connection attempt.
    ///
    /// The listener is shared with the caller and only ever invoked, never
    /// mutated, by the client.
    pub fn new(
        host: impl Into<String>,
        port: u16,
        user: ChatUser,
        listener: Arc<dyn ServerListener>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            user,
            listener,
            state: Arc::new(Mutex::new(ClientState::NotConnected)),
            started: AtomicBool::new(false),
            shutdown: CancellationToken::new(),
            writer: Arc::new(tokio::sync::Mutex::new(None)),
        }
    }

    /// The local user this client announces itself as.
    pub fn user(&self) -> &ChatUser {
        &self.user
    }

    /// The current lifecycle state.
    pub fn state(&self) -> ClientState {
        *self.state.lock()
    }

    /// Start the connection attempt on a background worker task.
    ///
    /// Returns the worker's join handle; awaiting it waits for the whole
    /// session to finish. Clients are one-shot: a second call does nothing
    /// beyond logging.
    pub fn start(&self) -> JoinHandle<()> {
        if self.started.swap(true, Ordering::SeqCst) {
            warn!("start() called on an already-started client");
            return tokio::spawn(async {});
        }
        *self.state.lock() = ClientState::Connecting;

        let session = Session {
            host: self.host.clone(),
            port: self.port,
            user: self.user.clone(),
            listener: Arc::clone(&self.listener),
            state: Arc::clone(&self.state),
            shutdown: self.shutdown.clone(),
            writer: Arc::clone(&self.writer),
        };
        tokio::spawn(session.run())
    }

    /// Request an orderly stop. Callable from any task; idempotent.
    ///
    /// Does not close the transport itself: the worker observes the
    /// cancellation on its next loop turn and runs the shutdown sequence,
    /// so `on_disconnected()` may fire after `stop()` returns.
    pub fn stop(&self) {
        debug!("stop requested");
        self.shutdown.cancel();
    }

    /// Send one chat message to the server.
    ///
    /// Empty text is rejected before serialization; both that and a send
    /// attempted before the connection is established drop the message
    /// without error. Send I/O failures are logged and do not end the
    /// session.
    pub async fn send(&self, text: &str) {
        let message = match ChatMessage::new(self.user.name(), text) {
            Ok(message) => message,
            Err(error) => {
                warn!(%error, "refusing to send message");
                return;
            }
        };

        let mut writer = self.writer.lock().await;
        let Some(writer) = writer.as_mut() else {
            debug!("no connection yet; dropping outbound message");
            return;
        };
        if let Err(error) = writer.send(Frame::Message(message).to_string()).await {
            warn!(%error, "failed to send message");
        }
    }
}

/// Everything the background worker needs, cloned out of the client so the
/// caller keeps ownership of the `ChatClient` itself.
struct Session {
    host: String,
    port: u16,
    user: ChatUser,
    listener: Arc<dyn ServerListener>,
    state: Arc<Mutex<ClientState>>,
    shutdown: CancellationToken,
    writer: WriterSlot,
}

impl Session {
    /// Connect, announce, read until the session ends, then shut down.
    async fn run(self) {
        let stream = match TcpStream::connect((self.host.as_str(), self.port)).await {
            Ok(stream) => stream,
            Err(error) => {
                warn!(host = %self.host, port = self.port, %error, "connection failed");
                *self.state.lock() = ClientState::NotConnected;
                self.listener.on_failed_connection();
                return;
            }
        };

        let (read_half, write_half) = stream.into_split();
        let mut reader = FramedRead::new(read_half, LineCodec::new());
        *self.writer.lock().await = Some(FramedWrite::new(write_half, LineCodec::new()));

        *self.state.lock() = ClientState::Connected;
        info!(host = %self.host, port = self.port, user = %self.user, "connected");
        self.listener.on_successful_connection(self.user.name());

        // Announce ourselves before processing any inbound line.
        self.announce(Frame::Connected(self.user.clone())).await;

        self.read_loop(&mut reader).await;
        self.shutdown_sequence().await;
    }

    /// Read framed lines until stopped, the server closes, or the
    /// transport errors. Every exit path falls through to the shutdown
    /// sequence in [`Session::run`].
    async fn read_loop(&self, reader: &mut Reader) {
        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    debug!("read loop observed stop request");
                    return;
                }
                item = reader.next() => match item {
                    Some(Ok(line)) => {
                        debug!(line, "received");
                        dispatch_line(&line, self.listener.as_ref());
                    }
                    Some(Err(error)) => {
                        warn!(%error, "read failed; ending session");
                        return;
                    }
                    None => {
                        info!("server closed the connection");
                        return;
                    }
                }
            }
        }
    }

    /// The last two observable actions of a session, in this order: a
    /// best-effort departure announcement, then `on_disconnected()`.
    /// Runs exactly once per client lifetime.
    async fn shutdown_sequence(&self) {
        *self.state.lock() = ClientState::Stopping;

        let mut writer = self.writer.lock().await;
        if let Some(writer) = writer.as_mut() {
            // The transport may already be gone; that is fine.
            let frame = Frame::Disconnected(self.user.clone());
            if let Err(error) = writer.send(frame.to_string()).await {
                debug!(%error, "departure announcement not delivered");
            }
        }
        *writer = None;
        drop(writer);

        *self.state.lock() = ClientState::NotConnected;
        info!(user = %self.user, "disconnected");
        self.listener.on_disconnected();
    }

    /// Best-effort framed send outside the normal `send()` path.
    async fn announce(&self, frame: Frame) {
        let mut writer = self.writer.lock().await;
        if let Some(writer) = writer.as_mut() {
            if let Err(error) = writer.send(frame.to_string()).await {
                warn!(%error, "failed to send announcement");
            }
        }
    }
}
