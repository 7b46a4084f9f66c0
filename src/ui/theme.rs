//! Color theme definitions using ratatui colors directly.

use ratatui::style::{Color, Modifier, Style};

/// Color theme for the portfolio screens and the terminal overlay.
#[derive(Debug, Clone)]
pub struct ColorTheme {
    /// Normal text color (None uses the terminal default)
    pub normal_text: Option<Color>,

    /// Accent color for the prompt glyph, active tab and links
    pub accent: Color,

    /// Section headings
    pub heading: Style,

    /// Secondary text: dates, hints, tag lists
    pub dim: Color,

    /// Active tab label
    pub tab_active: Style,

    /// Highlighted list row
    pub selection: Style,

    /// Terminal overlay border
    pub terminal_border: Color,

    /// Terminal overlay title bar
    pub terminal_title: Style,

    /// Highlighted autocomplete suggestion
    pub suggestion_selected: Style,

    /// Status line background
    pub status_bg: Color,

    /// Status line text
    pub status_fg: Color,

    /// Error/warning text
    pub error_text: Color,
}

impl Default for ColorTheme {
    /// Default theme: green-on-default with a cyan accent.
    fn default() -> Self {
        Self {
            normal_text: None,
            accent: Color::Cyan,
            heading: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            dim: Color::DarkGray,
            tab_active: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            selection: Style::default().fg(Color::Black).bg(Color::Cyan),
            terminal_border: Color::Green,
            terminal_title: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            suggestion_selected: Style::default().fg(Color::Black).bg(Color::Green),
            status_bg: Color::DarkGray,
            status_fg: Color::White,
            error_text: Color::Red,
        }
    }
}

impl ColorTheme {
    /// Monochrome theme for terminals without color support.
    pub fn monochrome() -> Self {
        Self {
            normal_text: None,
            accent: Color::White,
            heading: Style::default().add_modifier(Modifier::BOLD),
            dim: Color::Gray,
            tab_active: Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
            selection: Style::default().fg(Color::Black).bg(Color::White),
            terminal_border: Color::White,
            terminal_title: Style::default().add_modifier(Modifier::BOLD),
            suggestion_selected: Style::default().fg(Color::Black).bg(Color::White),
            status_bg: Color::Black,
            status_fg: Color::White,
            error_text: Color::White,
        }
    }
}
