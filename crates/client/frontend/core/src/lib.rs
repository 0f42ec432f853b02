//! Cross-frontend primitives for presenting the game.
//!
//! Houses the message log and the frontend configuration that both the CLI
//! and future graphical clients can reuse.
pub mod config;
pub mod message;

pub use config::{FrontendConfig, MessageConfig};
pub use message::{MessageEntry, MessageLevel, MessageLog};
