//! Conversation session management.
//!
//! A `Session` holds the interview history and the active model. Each
//! operation returns a `TurnStream` that borrows the session mutably, so
//! only one turn can be in flight, and updates history as it is consumed.

mod chat;
mod manager;
mod types;


pub use manager::Session;
pub use types::{SessionError, StreamingTurn, TurnStream};
