//! Terminal presentation: setup, rendering and the blocking event loop.
pub mod event_loop;
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;
