//! Integration test common infrastructure.
//!
//! Provides an in-process test chat server, a recording listener, and a
//! helper that wires the two to a freshly connected client.

pub mod listener;
pub mod server;

#[allow(unused_imports)]
pub use listener::{Event, EventStream, RecordingListener};
#[allow(unused_imports)]
pub use server::{TestPeer, TestServer};

use banter::ChatClient;
use banter_proto::ChatUser;
use tokio::task::JoinHandle;

/// Spin up a server, connect a client named `name` to it, and consume the
/// join announcement plus the successful-connection event.
#[allow(dead_code)]
pub async fn connected_client(
    name: &str,
) -> anyhow::Result<(TestPeer, ChatClient, EventStream, JoinHandle<()>)> {
    let server = TestServer::bind().await?;
    let (listener, mut events) = RecordingListener::new();
    let client = ChatClient::new(
        server.host(),
        server.port()?,
        ChatUser::new(name)?,
        listener,
    );
    let worker = client.start();

    let mut peer = server.accept().await?;
    let hello = peer.recv_line().await?;
    assert_eq!(hello, format!("$(CONNECTED){name}"));
    match events.next().await? {
        Event::SuccessfulConnection(n) => assert_eq!(n, name),
        other => anyhow::bail!("expected successful connection, got {other:?}"),
    }

    Ok((peer, client, events, worker))
}
