//! Terminal UI frontend for the dungeon game.
//!
//! Raw crossterm events become [`InputEvent`]s, the active [`InputMode`]
//! turns them into actions or mode switches, and the [`Session`] resolves
//! each action into a full turn before the next frame is drawn.

mod app;
mod config;
pub mod input;
pub mod logging;
pub mod presentation;
pub mod session;
pub mod state;

pub use app::CliApp;
pub use config::{CliConfig, UiConfig};
pub use input::InputEvent;
pub use session::{Flow, Session, Step, TurnPhase, TurnReport};
pub use state::{InputMode, Transition, TransitionContext};

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
