//! Turn-resolution rules shared across clients.
//!
//! `game-core` defines the entity/actor model, the map registry with its
//! visibility grids, the [`engine::Engine`] that runs enemy turns and
//! recomputes field of view, and the built-in [`action::Action`]s that
//! input modes produce.
pub mod action;
pub mod config;
pub mod engine;
pub mod entity;
pub mod error;
pub mod map;
pub mod state;

pub use action::{Action, ActionError, ActionOutcome, Direction};
pub use config::GameConfig;
pub use engine::{EnemyTurn, Engine, EngineError};
pub use entity::{Actor, Ai, Entity, EntityKind, Fighter, HostileAi};
pub use error::{ErrorSeverity, GameError};
pub use map::{GameMap, Grid, MapError, ParseMapError, TileFlags};
pub use state::{EntityId, MapId, Position, Rgb};
