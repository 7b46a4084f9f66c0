//! Keyboard plumbing: the async event pump and the cheat-code tracker.

pub mod events;
pub mod konami;

pub use events::{AppEvent, EventHandler, TICK_INTERVAL};
pub use konami::KonamiTracker;
