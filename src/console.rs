//! Terminal front end.
//!
//! Implements the listener capability by printing events to stdout and
//! keeping the roster of connected users. Status lines are rendered as chat
//! messages from a synthetic "Client" sender, the same shape as real
//! transcript entries.

use std::sync::Arc;

use banter::ServerListener;
use banter_proto::{ChatMessage, ChatUser};
use parking_lot::Mutex;

/// Stdout-backed chat view.
#[derive(Default)]
pub struct Console {
    roster: Mutex<Vec<ChatUser>>,
}

impl Console {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Print a local status line in transcript format.
    pub fn client_message(&self, text: &str) {
        // "Client" is a valid sender name and callers pass non-empty text.
        if let Ok(message) = ChatMessage::new("Client", text) {
            self.print_message(&message);
        }
    }

    /// Transcript entry layout: `from hh:mm AM/PM`, body on the next line.
    pub fn print_message(&self, message: &ChatMessage) {
        println!("{} {}\n{}", message.from(), message.display_time(), message.text());
    }

    fn print_roster(&self) {
        let roster = self.roster.lock();
        let names: Vec<String> = roster.iter().map(|u| format!("[{}]", u.name())).collect();
        println!("Users: {}", names.join(" "));
    }
}

impl ServerListener for Console {
    fn on_player_joined(&self, user: &ChatUser) {
        self.roster.lock().push(user.clone());
        println!("* {} joined the chat.", user.name());
        self.print_roster();
    }

    fn on_player_left(&self, user: &ChatUser) {
        self.roster.lock().retain(|u| u.name() != user.name());
        println!("* {} left the chat.", user.name());
        self.print_roster();
    }

    fn on_chat_message(&self, message: &ChatMessage) {
        self.print_message(message);
    }

    fn on_disconnected(&self) {
        self.roster.lock().clear();
        self.client_message("Disconnected from server.");
    }

    fn on_failed_connection(&self) {
        self.client_message("Failed to connect to the server with the address and port provided.");
    }

    fn on_successful_connection(&self, name: &str) {
        self.client_message(&format!("Successfully connected to server as {name}."));
    }
}
