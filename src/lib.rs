//! banter - a minimal chat client.
//!
//! The library half of the crate: a [`ChatClient`](client::ChatClient) that
//! owns one TCP connection to a chat server, exchanges tagged line frames
//! (see [`banter_proto`]), and reports connection and chat events to a
//! [`ServerListener`](listener::ServerListener) supplied by the front end.

pub mod client;
pub mod config;
pub mod dispatch;
pub mod listener;

pub use client::{ChatClient, ClientState};
pub use config::{Config, ConfigError};
pub use listener::ServerListener;
