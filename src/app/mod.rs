//! Application state and input handling, plus the actions the main loop dispatches.

pub mod action;
pub mod event;
pub mod handler;
pub mod prompt;
pub mod state;
