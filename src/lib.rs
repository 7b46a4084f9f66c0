//! # termfolio - A Personal Portfolio for the Terminal
//!
//! A single-page portfolio rendered in the terminal: markdown blog, skill
//! sheet, experience timeline and an embedded command interpreter with a
//! couple of easter eggs.
//!
//! ## Features
//!
//! - **Markdown Blog**: posts discovered from `posts/<lang>/*.md`, permissive
//!   frontmatter, tag and text filtering, full-post cache
//! - **Embedded Terminal**: a command interpreter in an overlay window with
//!   history, suggestions and minimize/maximize chrome
//! - **Two Languages**: English and Spanish catalogs; the scroll-back
//!   re-localizes in place on a language switch
//! - **Async Loads**: repository reads complete through the event channel and
//!   never block a frame
//!
//! ## Architecture
//!
//! The library is organized into focused modules:
//!
//! - [`error`] - Centralized error types and handling
//! - [`content`] - Document types, frontmatter parsing, content sources
//! - [`repository`] - Read-side repositories over markdown and fixed data
//! - [`terminal`] - The embedded terminal session and its commands
//! - [`ui`] - Ratatui rendering and terminal lifecycle
//! - [`app`] - Application core and component coordination

// Core modules
pub mod config;
pub mod error;
pub mod locale;
pub mod profile;

// Content pipeline
pub mod blog;
pub mod content;
pub mod repository;

// Interaction and presentation
pub mod input;
pub mod terminal;
pub mod ui;

// Core components
pub mod app;

// Re-export commonly used types for convenience
pub use error::{FolioError, Result};

// Public API surface for external usage
pub use app::Application;
pub use locale::Language;
pub use repository::{MarkdownRepository, Repository};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
