//! banter - a minimal chat client.
//!
//! Terminal front end over the `banter` network layer: connects to the
//! configured server, prints chat and roster events, and sends each stdin
//! line as a chat message. `/quit` (or EOF) ends the session.

mod console;

use anyhow::Context;
use banter::{ChatClient, Config};
use banter_proto::{ChatMessage, ChatUser};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::console::Console;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "banter.toml".to_string());

    let config =
        Config::load(&config_path).with_context(|| format!("failed to load {config_path}"))?;
    config.validate()?;

    // Initialize tracing (env filter wins over the config file)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("BANTER_LOG")
                .unwrap_or_else(|_| EnvFilter::new(config.log.filter.clone())),
        )
        .with_target(true)
        .init();

    info!(
        host = %config.server.host,
        port = config.server.port,
        user = %config.user.name,
        "Starting banter"
    );

    let user = ChatUser::new(config.user.name.as_str())
        .map_err(|e| anyhow::anyhow!("invalid user name: {e}"))?;

    let console = Console::new();
    console.client_message("Attempting to connect to server.");

    let client = ChatClient::new(
        config.server.host.clone(),
        config.server.port,
        user,
        console.clone(),
    );
    let mut worker = client.start();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            // The session is over (stopped, server gone, or never connected).
            _ = &mut worker => break,
            input = lines.next_line() => match input {
                Ok(Some(line)) if line == "/quit" => client.stop(),
                Ok(Some(line)) if line.is_empty() => {
                    console.client_message("The message you tried to send was empty.");
                }
                Ok(Some(line)) => {
                    // Echo our own message locally; the server does not.
                    if let Ok(echo) = ChatMessage::new(client.user().name(), line.as_str()) {
                        console.print_message(&echo);
                    }
                    client.send(&line).await;
                }
                Ok(None) => client.stop(),
                Err(e) => {
                    error!(error = %e, "stdin read failed");
                    client.stop();
                }
            }
        }
    }

    info!("Session ended");
    Ok(())
}
