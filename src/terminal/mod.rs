//! The embedded terminal: session state machine and command handlers.
//!
//! [`session::TerminalSession`] owns everything the overlay shows (window
//! state, scroll-back, input line, history, picker) and turns key events
//! into actions; [`commands`] owns the fixed command vocabulary and what
//! each command replies. The application wires the two together.

pub mod commands;
pub mod session;

pub use commands::{BuiltinCommand, CommandEffect, CommandReply, COMMANDS};
pub use session::{
    HistoryDirection, LineKind, ResumePicker, ScrollbackLine, SessionAction, TerminalSession,
    WindowState,
};
