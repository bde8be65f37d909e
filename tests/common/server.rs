//! In-process test chat server.
//!
//! Binds an ephemeral port, accepts one client at a time, and exposes raw
//! line push/pull so tests can drive and observe the wire directly.

use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::time::timeout;

/// How long any single accept/read may take before the test fails.
const IO_TIMEOUT: Duration = Duration::from_secs(5);

/// A listening test server.
pub struct TestServer {
    listener: TcpListener,
}

impl TestServer {
    /// Bind to an ephemeral localhost port.
    pub async fn bind() -> anyhow::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        Ok(Self { listener })
    }

    /// Host to hand to the client under test.
    pub fn host(&self) -> String {
        "127.0.0.1".to_string()
    }

    /// Port to hand to the client under test.
    pub fn port(&self) -> anyhow::Result<u16> {
        Ok(self.listener.local_addr()?.port())
    }

    /// Accept the next client connection.
    pub async fn accept(&self) -> anyhow::Result<TestPeer> {
        let (stream, _) = timeout(IO_TIMEOUT, self.listener.accept()).await??;
        let (read_half, write_half) = stream.into_split();
        Ok(TestPeer {
            reader: BufReader::new(read_half),
            writer: write_half,
        })
    }
}

/// The server's end of one accepted client connection.
pub struct TestPeer {
    reader: BufReader<OwnedReadHalf>,
    writer: OwnedWriteHalf,
}

impl TestPeer {
    /// Push one raw protocol line to the client.
    pub async fn send_line(&mut self, line: &str) -> anyhow::Result<()> {
        self.writer.write_all(line.as_bytes()).await?;
        if !line.ends_with('\n') {
            self.writer.write_all(b"\n").await?;
        }
        self.writer.flush().await?;
        Ok(())
    }

    /// Receive one line sent by the client, terminator stripped.
    pub async fn recv_line(&mut self) -> anyhow::Result<String> {
        let mut line = String::new();
        let n = timeout(IO_TIMEOUT, self.reader.read_line(&mut line)).await??;
        if n == 0 {
            anyhow::bail!("client closed the connection");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
