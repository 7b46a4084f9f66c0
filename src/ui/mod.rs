//! Presentation layer: ratatui rendering and terminal lifecycle.
//!
//! Rendering is a pure function of the view state ([`renderer::draw`] takes a
//! [`renderer::FrameView`] of borrowed state); all mutation happens in the
//! application loop. [`terminal`] owns raw mode and the alternate screen.

pub mod renderer;
pub mod sections;
pub mod state;
pub mod terminal;
pub mod theme;

pub use renderer::FrameView;
pub use sections::Section;
pub use state::{BlogPane, ReadingPane, UiState};
pub use terminal::{init, install_panic_hook, restore, Tui};
pub use theme::ColorTheme;
