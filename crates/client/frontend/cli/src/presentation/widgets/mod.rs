//! Widgets composed by [`super::ui`].
pub mod footer;
pub mod game_area;
pub mod history;
pub mod map;
pub mod messages;
