use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use termfolio::app::ScheduledEffect;
use termfolio::input::{AppEvent, KonamiTracker};
use termfolio::locale::{Catalog, Language, MessageKey};
use termfolio::terminal::commands::{self, BOOKING_DELAY, SUDO_BOOKING_DELAY};
use termfolio::terminal::{CommandEffect, LineKind, SessionAction, TerminalSession, WindowState};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn catalog() -> Catalog {
    Catalog::load_embedded().expect("embedded catalogs parse")
}

fn type_line(session: &mut TerminalSession, text: &str) {
    for c in text.chars() {
        session.handle_key(key(KeyCode::Char(c)));
    }
}

/// Submit the current input line and apply the command's effect the way the
/// application loop does.
fn run_command(session: &mut TerminalSession, catalog: &Catalog, line: &str) -> CommandEffect {
    type_line(session, line);
    let action = session.handle_key(key(KeyCode::Enter));
    let SessionAction::Execute(executed) = action else {
        panic!("expected the line to execute, got {action:?}");
    };

    let reply = commands::execute(&executed, catalog, Language::En);
    if let Some(output) = reply.output {
        session.push_output(&output);
    }
    match reply.effect {
        CommandEffect::ClearScrollback => session.clear_scrollback(),
        CommandEffect::CloseTerminal => session.close(),
        CommandEffect::OpenResumePicker => session.open_picker(),
        CommandEffect::None | CommandEffect::ScheduleBooking(_) => {}
    }
    reply.effect
}

fn rendered(session: &TerminalSession, catalog: &Catalog, language: Language) -> Vec<String> {
    session
        .scrollback()
        .iter()
        .map(|line| line.display(catalog, language))
        .collect()
}

#[test]
fn help_echoes_the_raw_line_and_prints_the_vocabulary() {
    let catalog = catalog();
    let mut session = TerminalSession::new();
    session.open();

    let effect = run_command(&mut session, &catalog, "HELP");
    assert_eq!(effect, CommandEffect::None);

    let lines = rendered(&session, &catalog, Language::En);
    // Welcome banner, the echoed input, then the help text as one entry.
    assert_eq!(lines.len(), 3);
    assert!(lines[1].ends_with("> HELP"), "echo keeps the typed case: {}", lines[1]);
    assert!(lines[2].contains("about"));
    assert!(lines[2].contains("sudo hire-alex"));

    let inputs: Vec<_> = session
        .scrollback()
        .iter()
        .filter(|l| l.kind == LineKind::Input)
        .collect();
    assert_eq!(inputs.len(), 1);
}

#[test]
fn unknown_commands_report_the_input_verbatim() {
    let catalog = catalog();
    let mut session = TerminalSession::new();
    session.open();

    run_command(&mut session, &catalog, "FooBar");
    let lines = rendered(&session, &catalog, Language::En);
    assert!(
        lines.iter().any(|l| l.contains("FooBar")),
        "the message must carry the original spelling"
    );
}

#[test]
fn clear_collapses_scrollback_to_one_localized_line() {
    let catalog = catalog();
    let mut session = TerminalSession::new();
    session.open();

    run_command(&mut session, &catalog, "help");
    assert!(session.scrollback().len() > 2);

    let effect = run_command(&mut session, &catalog, "clear");
    assert_eq!(effect, CommandEffect::ClearScrollback);
    assert_eq!(session.scrollback().len(), 1);

    // The cleared marker re-localizes with the UI language.
    let en = rendered(&session, &catalog, Language::En);
    let es = rendered(&session, &catalog, Language::Es);
    assert_ne!(en[0], es[0]);
    assert_eq!(en[0], catalog.text(Language::En, MessageKey::Cleared));
}

#[test]
fn exit_closes_the_window_but_keeps_the_session() {
    let catalog = catalog();
    let mut session = TerminalSession::new();
    session.open();

    run_command(&mut session, &catalog, "about");
    let before = session.scrollback().len();

    let effect = run_command(&mut session, &catalog, "exit");
    assert_eq!(effect, CommandEffect::CloseTerminal);
    assert_eq!(session.window(), WindowState::Closed);

    session.open();
    assert_eq!(session.window(), WindowState::Normal);
    // Everything typed before the exit is still there, plus its echo line.
    assert_eq!(session.scrollback().len(), before + 1);
}

#[test]
fn resume_picker_flow_from_command_to_choice() {
    let catalog = catalog();
    let mut session = TerminalSession::new();
    session.open();

    let effect = run_command(&mut session, &catalog, "resume");
    assert_eq!(effect, CommandEffect::OpenResumePicker);
    assert!(session.picker().is_some());

    // While the picker is up, arrows flip the option instead of walking
    // history, and Enter confirms.
    session.handle_key(key(KeyCode::Down));
    let action = session.handle_key(key(KeyCode::Enter));
    assert_eq!(action, SessionAction::ResumeChosen(1));
    assert!(session.picker().is_none());
}

#[test]
fn resume_picker_escape_cancels_without_choosing() {
    let catalog = catalog();
    let mut session = TerminalSession::new();
    session.open();

    run_command(&mut session, &catalog, "resume");
    let action = session.handle_key(key(KeyCode::Esc));
    assert_eq!(action, SessionAction::None);
    assert!(session.picker().is_none());
    // Esc went to the picker, not to the window chrome.
    assert_eq!(session.window(), WindowState::Normal);
}

#[test]
fn suggestions_complete_with_tab_and_execute_with_enter() {
    let catalog = catalog();
    let mut session = TerminalSession::new();
    session.open();

    type_line(&mut session, "e");
    assert_eq!(
        session.suggestions(),
        vec!["experience", "resume", "help", "clear", "exit", "sudo hire-alex"]
    );

    // Down twice lands on "help"; Tab replaces the line.
    session.handle_key(key(KeyCode::Down));
    session.handle_key(key(KeyCode::Down));
    session.handle_key(key(KeyCode::Tab));
    assert_eq!(session.input(), "help");

    // An exact command suggests nothing more, so Enter submits it.
    let action = session.handle_key(key(KeyCode::Enter));
    assert_eq!(action, SessionAction::Execute("help".to_string()));
}

#[test]
fn history_walks_old_commands_once_suggestions_are_gone() {
    let catalog = catalog();
    let mut session = TerminalSession::new();
    session.open();

    run_command(&mut session, &catalog, "about");
    run_command(&mut session, &catalog, "contact");

    // Empty prompt: no suggestions, so Up walks history.
    session.handle_key(key(KeyCode::Up));
    assert_eq!(session.input(), "contact");
    session.handle_key(key(KeyCode::Up));
    assert_eq!(session.input(), "about");

    // Down walks back toward the blank live line.
    session.handle_key(key(KeyCode::Down));
    assert_eq!(session.input(), "contact");
    session.handle_key(key(KeyCode::Down));
    assert_eq!(session.input(), "");
}

#[test]
fn window_chrome_shortcuts_work_mid_edit() {
    let mut session = TerminalSession::new();
    session.open();
    type_line(&mut session, "abo");

    session.handle_key(KeyEvent::new(KeyCode::Char('f'), KeyModifiers::CONTROL));
    assert_eq!(session.window(), WindowState::Maximized);

    session.handle_key(key(KeyCode::Esc));
    assert_eq!(session.window(), WindowState::Minimized);

    session.open();
    assert_eq!(session.input(), "abo", "the draft line survives the chrome");

    session.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
    assert_eq!(session.window(), WindowState::Closed);
}

#[test]
fn konami_sequence_opens_the_terminal() {
    let mut tracker = KonamiTracker::new();
    let mut session = TerminalSession::new();
    assert_eq!(session.window(), WindowState::Closed);

    let sequence = [
        KeyCode::Up,
        KeyCode::Up,
        KeyCode::Down,
        KeyCode::Down,
        KeyCode::Left,
        KeyCode::Right,
        KeyCode::Left,
        KeyCode::Right,
        KeyCode::Char('b'),
        KeyCode::Char('a'),
    ];
    for code in sequence {
        if tracker.feed(&key(code)) {
            session.open();
        }
    }
    assert_eq!(session.window(), WindowState::Normal);
}

#[tokio::test(start_paused = true)]
async fn book_command_opens_the_modal_after_its_delay() {
    let catalog = catalog();
    let mut session = TerminalSession::new();
    session.open();

    let effect = run_command(&mut session, &catalog, "book");
    let CommandEffect::ScheduleBooking(delay) = effect else {
        panic!("expected a scheduled booking, got {effect:?}");
    };
    assert_eq!(delay, BOOKING_DELAY);

    let (tx, mut rx) = mpsc::unbounded_channel();
    let _pending = ScheduledEffect::schedule(tx, delay, AppEvent::OpenBooking);

    tokio::time::advance(delay - Duration::from_millis(1)).await;
    tokio::task::yield_now().await;
    assert!(rx.try_recv().is_err(), "the modal must not open early");

    let event = rx.recv().await;
    assert!(matches!(event, Some(AppEvent::OpenBooking)));
}

#[tokio::test(start_paused = true)]
async fn sudo_booking_is_slower_and_cancellable() {
    let catalog = catalog();
    let mut session = TerminalSession::new();
    session.open();

    let effect = run_command(&mut session, &catalog, "sudo hire-alex");
    let CommandEffect::ScheduleBooking(delay) = effect else {
        panic!("expected a scheduled booking, got {effect:?}");
    };
    assert_eq!(delay, SUDO_BOOKING_DELAY);
    assert!(delay > BOOKING_DELAY);

    let (tx, mut rx) = mpsc::unbounded_channel::<AppEvent>();
    let pending = ScheduledEffect::schedule(tx, delay, AppEvent::OpenBooking);
    pending.cancel();

    tokio::time::advance(delay + Duration::from_millis(100)).await;
    tokio::task::yield_now().await;
    assert!(rx.try_recv().is_err(), "a cancelled booking never fires");
}
