//! Terminal session state machine.
//!
//! A [`TerminalSession`] is the single owner of the interactive terminal's
//! state: the window state, the scroll-back buffer, the input line with its
//! suggestion cursor, the command history, and the resume picker. Key events
//! are fed through [`TerminalSession::handle_key`], which mutates the session
//! and reports the one thing the caller must act on as a [`SessionAction`].
//!
//! Command execution itself lives in [`crate::terminal::commands`]; the
//! session only decides *which* string gets executed and records the echo
//! lines. Output lines produced from the message catalog keep their
//! [`MessageKey`] so they can be re-rendered when the UI language changes.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::locale::{Catalog, Language, MessageKey};
use crate::terminal::commands::COMMANDS;

/// Where the terminal window currently is.
///
/// `Minimized` keeps the session (scroll-back, history, input) alive while
/// the overlay collapses to a title bar; `Closed` hides it entirely but the
/// session state still survives until the process exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowState {
    Closed,
    Normal,
    Minimized,
    Maximized,
}

impl WindowState {
    /// The terminal exists on screen in some form (including the minimized bar).
    pub fn is_open(&self) -> bool {
        !matches!(self, WindowState::Closed)
    }

    /// The terminal is accepting keyboard input.
    pub fn is_visible(&self) -> bool {
        matches!(self, WindowState::Normal | WindowState::Maximized)
    }
}

/// Whether a scroll-back line was typed by the visitor or printed by a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Input,
    Output,
}

/// One line of terminal scroll-back.
///
/// Lines that came from the message catalog carry their key in `message` and
/// an empty `text`; the renderer resolves the key against the active language
/// on every frame, so switching languages re-localizes them in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollbackLine {
    pub kind: LineKind,
    pub text: String,
    pub message: Option<MessageKey>,
}

impl ScrollbackLine {
    pub fn input(text: String) -> Self {
        ScrollbackLine {
            kind: LineKind::Input,
            text,
            message: None,
        }
    }

    pub fn output(text: String) -> Self {
        ScrollbackLine {
            kind: LineKind::Output,
            text,
            message: None,
        }
    }

    /// A catalog-backed line, resolved at render time.
    pub fn system(message: MessageKey) -> Self {
        ScrollbackLine {
            kind: LineKind::Output,
            text: String::new(),
            message: Some(message),
        }
    }

    /// The text to display for the given language.
    pub fn display(&self, catalog: &Catalog, language: Language) -> String {
        match self.message {
            Some(key) => catalog.text(language, key),
            None => self.text.clone(),
        }
    }
}

/// The two-entry resume language picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResumePicker {
    pub selected: usize,
}

impl ResumePicker {
    pub fn new() -> Self {
        ResumePicker { selected: 0 }
    }

    /// Up and Down both flip between the two options.
    pub fn toggle(&mut self) {
        self.selected = if self.selected == 0 { 1 } else { 0 };
    }
}

impl Default for ResumePicker {
    fn default() -> Self {
        ResumePicker::new()
    }
}

/// History navigation direction for Up/Down arrows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryDirection {
    Older,
    Newer,
}

/// What the caller must do after a key event, beyond redrawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// Nothing beyond the session's own state changed.
    None,
    /// A command line was submitted and must be executed.
    Execute(String),
    /// The resume picker confirmed the option at this index.
    ResumeChosen(usize),
}

/// Interactive terminal state.
pub struct TerminalSession {
    window: WindowState,
    scrollback: Vec<ScrollbackLine>,
    input: String,
    command_history: Vec<String>,
    /// Index into `command_history` while browsing with Up/Down, `None` when
    /// the input line is live.
    history_cursor: Option<usize>,
    picker: Option<ResumePicker>,
    /// Highlight position within the current suggestion list. Reset to the
    /// first entry whenever the input line changes.
    suggestion_index: usize,
}

impl TerminalSession {
    /// A closed session with the welcome banner already in scroll-back.
    pub fn new() -> Self {
        TerminalSession {
            window: WindowState::Closed,
            scrollback: vec![ScrollbackLine::system(MessageKey::Welcome)],
            input: String::new(),
            command_history: Vec::new(),
            history_cursor: None,
            picker: None,
            suggestion_index: 0,
        }
    }

    // ------------------------------------------------------------------
    // Window state
    // ------------------------------------------------------------------

    pub fn window(&self) -> WindowState {
        self.window
    }

    /// Bring the terminal up: opens it when closed, restores it when
    /// minimized, leaves a visible terminal alone.
    pub fn open(&mut self) {
        if matches!(self.window, WindowState::Closed | WindowState::Minimized) {
            self.window = WindowState::Normal;
        }
    }

    /// Collapse a visible terminal to the title bar.
    pub fn minimize(&mut self) {
        if self.window.is_visible() {
            self.window = WindowState::Minimized;
        }
    }

    /// Bring a minimized terminal back to its normal size.
    pub fn restore(&mut self) {
        if self.window == WindowState::Minimized {
            self.window = WindowState::Normal;
        }
    }

    /// Flip between normal and maximized. Does nothing while minimized or
    /// closed.
    pub fn toggle_maximize(&mut self) {
        self.window = match self.window {
            WindowState::Normal => WindowState::Maximized,
            WindowState::Maximized => WindowState::Normal,
            other => other,
        };
    }

    /// Close the window from any state. Cancels a pending picker; the
    /// scroll-back and history survive for the next open.
    pub fn close(&mut self) {
        self.window = WindowState::Closed;
        self.picker = None;
    }

    // ------------------------------------------------------------------
    // Input line and suggestions
    // ------------------------------------------------------------------

    pub fn input(&self) -> &str {
        &self.input
    }

    fn set_input(&mut self, value: String) {
        self.input = value;
        self.suggestion_index = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        self.input.push(c);
        self.suggestion_index = 0;
    }

    pub fn backspace(&mut self) {
        self.input.pop();
        self.suggestion_index = 0;
    }

    /// Commands matching the current input, in table order.
    ///
    /// Matching is a case-insensitive substring test on the trimmed input; an
    /// exact match suggests nothing (there is nothing left to complete). The
    /// picker suppresses suggestions entirely.
    pub fn suggestions(&self) -> Vec<&'static str> {
        if self.picker.is_some() {
            return Vec::new();
        }
        let needle = self.input.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        COMMANDS
            .iter()
            .copied()
            .filter(|cmd| cmd.contains(&needle) && *cmd != needle)
            .collect()
    }

    /// Highlight position within [`Self::suggestions`], when any exist.
    pub fn suggestion_index(&self) -> usize {
        self.suggestion_index
    }

    /// The highlighted suggestion, if the list is non-empty.
    pub fn selected_suggestion(&self) -> Option<&'static str> {
        let suggestions = self.suggestions();
        if suggestions.is_empty() {
            return None;
        }
        let index = self.suggestion_index.min(suggestions.len() - 1);
        Some(suggestions[index])
    }

    fn suggestion_down(&mut self) {
        let count = self.suggestions().len();
        if count == 0 {
            return;
        }
        self.suggestion_index = if self.suggestion_index + 1 < count {
            self.suggestion_index + 1
        } else {
            0
        };
    }

    fn suggestion_up(&mut self) {
        let count = self.suggestions().len();
        if count == 0 {
            return;
        }
        self.suggestion_index = if self.suggestion_index > 0 {
            self.suggestion_index - 1
        } else {
            count - 1
        };
    }

    /// Tab: replace the input line with the highlighted suggestion and keep
    /// editing.
    pub fn accept_suggestion(&mut self) {
        if let Some(suggestion) = self.selected_suggestion() {
            self.set_input(suggestion.to_string());
        }
    }

    // ------------------------------------------------------------------
    // History
    // ------------------------------------------------------------------

    pub fn navigate_history(&mut self, direction: HistoryDirection) {
        if self.command_history.is_empty() {
            return;
        }
        match direction {
            HistoryDirection::Older => {
                let index = match self.history_cursor {
                    None => self.command_history.len() - 1,
                    Some(i) => i.saturating_sub(1),
                };
                self.history_cursor = Some(index);
                self.set_input(self.command_history[index].clone());
            }
            HistoryDirection::Newer => {
                let Some(current) = self.history_cursor else {
                    return;
                };
                if current + 1 >= self.command_history.len() {
                    self.history_cursor = None;
                    self.set_input(String::new());
                } else {
                    self.history_cursor = Some(current + 1);
                    self.set_input(self.command_history[current + 1].clone());
                }
            }
        }
    }

    #[cfg(test)]
    fn command_history(&self) -> &[String] {
        &self.command_history
    }

    // ------------------------------------------------------------------
    // Submission and scroll-back
    // ------------------------------------------------------------------

    /// Enter: submit the highlighted suggestion if one is showing, otherwise
    /// the typed line. Echoes the command into scroll-back, appends it to
    /// history, clears the input, and returns the command for execution.
    /// Blank input submits nothing.
    pub fn submit(&mut self) -> Option<String> {
        if let Some(suggestion) = self.selected_suggestion() {
            self.input = suggestion.to_string();
        }
        let command = self.input.trim().to_string();
        if command.is_empty() {
            return None;
        }
        self.scrollback
            .push(ScrollbackLine::input(format!("> {command}")));
        self.command_history.push(command.clone());
        self.history_cursor = None;
        self.set_input(String::new());
        Some(command)
    }

    pub fn scrollback(&self) -> &[ScrollbackLine] {
        &self.scrollback
    }

    /// Append one output line. Multi-row command output stays a single
    /// scroll-back entry; the renderer splits embedded newlines into rows.
    pub fn push_output(&mut self, text: &str) {
        self.scrollback.push(ScrollbackLine::output(text.to_string()));
    }

    /// Append a catalog-backed output line.
    pub fn push_system(&mut self, message: MessageKey) {
        self.scrollback.push(ScrollbackLine::system(message));
    }

    /// Drop the scroll-back, leaving only the "cleared" notice.
    pub fn clear_scrollback(&mut self) {
        self.scrollback = vec![ScrollbackLine::system(MessageKey::Cleared)];
    }

    // ------------------------------------------------------------------
    // Resume picker
    // ------------------------------------------------------------------

    pub fn picker(&self) -> Option<&ResumePicker> {
        self.picker.as_ref()
    }

    pub fn open_picker(&mut self) {
        self.picker = Some(ResumePicker::new());
    }

    pub fn close_picker(&mut self) {
        self.picker = None;
    }

    // ------------------------------------------------------------------
    // Key routing
    // ------------------------------------------------------------------

    /// Route one key event while the terminal is visible.
    ///
    /// Window chrome shortcuts win over everything, then an active picker
    /// swallows the navigation keys, then the line editor takes the rest.
    pub fn handle_key(&mut self, key: KeyEvent) -> SessionAction {
        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::CONTROL) => {
                self.close();
                return SessionAction::None;
            }
            (KeyCode::Char('f'), KeyModifiers::CONTROL) => {
                self.toggle_maximize();
                return SessionAction::None;
            }
            _ => {}
        }

        if let Some(picker) = self.picker.as_mut() {
            return match key.code {
                KeyCode::Up | KeyCode::Down => {
                    picker.toggle();
                    SessionAction::None
                }
                KeyCode::Enter => {
                    let chosen = picker.selected;
                    self.picker = None;
                    SessionAction::ResumeChosen(chosen)
                }
                KeyCode::Esc => {
                    self.picker = None;
                    SessionAction::None
                }
                _ => SessionAction::None,
            };
        }

        match key.code {
            KeyCode::Esc => {
                self.minimize();
                SessionAction::None
            }
            KeyCode::Enter => match self.submit() {
                Some(command) => SessionAction::Execute(command),
                None => SessionAction::None,
            },
            KeyCode::Backspace => {
                self.backspace();
                SessionAction::None
            }
            KeyCode::Tab => {
                self.accept_suggestion();
                SessionAction::None
            }
            KeyCode::Up => {
                if self.suggestions().is_empty() {
                    self.navigate_history(HistoryDirection::Older);
                } else {
                    self.suggestion_up();
                }
                SessionAction::None
            }
            KeyCode::Down => {
                if self.suggestions().is_empty() {
                    self.navigate_history(HistoryDirection::Newer);
                } else {
                    self.suggestion_down();
                }
                SessionAction::None
            }
            KeyCode::Char(c) => {
                if !key.modifiers.contains(KeyModifiers::CONTROL) {
                    self.insert_char(c);
                }
                SessionAction::None
            }
            _ => SessionAction::None,
        }
    }
}

impl Default for TerminalSession {
    fn default() -> Self {
        TerminalSession::new()
    }
}
