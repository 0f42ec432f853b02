//! Primitive value types shared by every game-core module.
mod common;

pub use common::{EntityId, MapId, Position, Rgb};
