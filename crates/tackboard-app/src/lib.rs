//! Tackboard Application Shell
//!
//! Routes the host's discrete commands, gestures, and text-input events
//! into the core canvas on a single event-processing thread.

mod commands;
mod session;

pub use commands::{Command, CommandBar};
pub use session::{Session, COMMAND_BAR_INSET};
