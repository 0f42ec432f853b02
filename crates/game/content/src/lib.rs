//! Static game content: actor templates and built-in map layouts.
//!
//! Content is consumed at session start-up and never referenced by the
//! engine afterwards.

pub mod factories;
pub mod layouts;

pub use layouts::{ContentError, DEMO, Scenario, build_scenario};
