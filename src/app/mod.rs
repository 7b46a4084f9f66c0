//! Application core and component coordination.
//!
//! [`Application`] owns every piece of state (session, view state, settings,
//! repositories) and drains a single event channel. Repository loads run as
//! spawned tasks that complete through that channel, tagged with a request id
//! so a stale result can never overwrite a newer one.

pub mod effects;

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::Settings;
use crate::content::{ContentSource, Post, PostMeta};
use crate::error::Result;
use crate::input::{AppEvent, EventHandler, KonamiTracker};
use crate::locale::{Catalog, MessageKey};
use crate::profile::{Achievement, Project, ACHIEVEMENTS, PROFILE, PROJECTS};
use crate::repository::{MarkdownRepository, Repository, StaticRepository};
use crate::terminal::{commands, CommandEffect, SessionAction, TerminalSession};
use crate::ui::state::ReadingPane;
use crate::ui::{renderer, ColorTheme, FrameView, Section, Tui, UiState};

pub use effects::ScheduledEffect;

/// The repository seam the application loads posts through.
pub type PostRepository = dyn Repository<Record = Arc<Post>, Summary = PostMeta>;

/// Global bindings available while the terminal overlay is not focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavCommand {
    Quit,
    OpenTerminal,
    NextSection,
    PrevSection,
    ToggleLanguage,
}

fn nav_command(key: &KeyEvent) -> Option<NavCommand> {
    match key.code {
        KeyCode::Char('q') => Some(NavCommand::Quit),
        KeyCode::Char('`') => Some(NavCommand::OpenTerminal),
        KeyCode::Tab | KeyCode::Right => Some(NavCommand::NextSection),
        KeyCode::BackTab | KeyCode::Left => Some(NavCommand::PrevSection),
        KeyCode::Char('l') => Some(NavCommand::ToggleLanguage),
        _ => None,
    }
}

/// Picker row to resume label and URL.
fn resume_target(option: usize) -> (MessageKey, &'static str) {
    if option == 0 {
        (MessageKey::ResumeOptionEnglish, PROFILE.resume_url)
    } else {
        (MessageKey::ResumeOptionSpanish, PROFILE.resume_url_es)
    }
}

pub struct Application {
    settings: Settings,
    catalog: Catalog,
    theme: ColorTheme,
    repository: Arc<PostRepository>,
    projects: Vec<Project>,
    achievements: Vec<Achievement>,
    session: TerminalSession,
    konami: KonamiTracker,
    ui: UiState,
    events: EventHandler,
    pending_booking: Option<ScheduledEffect>,
    posts_request: u64,
    post_request: u64,
}

impl Application {
    /// Assemble the application around a content source. Terminal setup is
    /// the caller's job; nothing here touches the screen.
    pub async fn new(settings: Settings, source: Arc<dyn ContentSource>) -> Result<Self> {
        let catalog = Catalog::load_embedded()?;
        let repository: Arc<PostRepository> = Arc::new(MarkdownRepository::new(source));

        let project_data = StaticRepository::new(PROJECTS.to_vec());
        let achievement_data = StaticRepository::new(ACHIEVEMENTS.to_vec());
        let projects = project_data.get_all(settings.language).await?;
        let achievements = achievement_data.get_all(settings.language).await?;

        Ok(Self {
            settings,
            catalog,
            theme: ColorTheme::default(),
            repository,
            projects,
            achievements,
            session: TerminalSession::new(),
            konami: KonamiTracker::new(),
            ui: UiState::new(),
            events: EventHandler::new(),
            pending_booking: None,
            posts_request: 0,
            post_request: 0,
        })
    }

    /// Drive the event loop until the visitor quits.
    pub async fn run(mut self, terminal: &mut Tui) -> Result<()> {
        self.request_posts();

        loop {
            let view = FrameView {
                ui: &self.ui,
                session: &self.session,
                catalog: &self.catalog,
                language: self.settings.language,
                theme: &self.theme,
                projects: &self.projects,
                achievements: &self.achievements,
            };
            terminal.draw(|frame| renderer::draw(frame, &view))?;

            let Some(event) = self.events.next().await else {
                break;
            };
            if !self.handle_event(event)? {
                break;
            }
        }
        Ok(())
    }

    /// Returns false when the application should exit.
    fn handle_event(&mut self, event: AppEvent) -> Result<bool> {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            // The next draw picks up the new size.
            AppEvent::Resize(_, _) => Ok(true),
            AppEvent::Tick => {
                self.ui.advance_spinner();
                Ok(true)
            }
            AppEvent::PostsLoaded { request_id, result } => {
                if request_id == self.posts_request {
                    match result {
                        Ok(posts) => self.ui.blog.set_posts(posts),
                        Err(e) => {
                            log::error!("loading the post listing failed: {e}");
                            self.ui.blog.set_posts(Vec::new());
                        }
                    }
                }
                Ok(true)
            }
            AppEvent::PostLoaded { request_id, result } => {
                if request_id == self.post_request {
                    self.ui.blog.post_loading = false;
                    match result {
                        Ok(Some(post)) => self.ui.blog.reading = Some(ReadingPane::new(post)),
                        Ok(None) => log::warn!("selected post is gone from the source"),
                        Err(e) => log::error!("loading a post body failed: {e}"),
                    }
                }
                Ok(true)
            }
            AppEvent::OpenBooking => {
                self.pending_booking = None;
                self.ui.booking_open = true;
                Ok(true)
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(false);
        }

        // The cheat sequence watches the global stream and never consumes
        // the key.
        if self.konami.feed(&key) {
            self.session.open();
        }

        if self.ui.booking_open {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')
            ) {
                self.ui.booking_open = false;
            }
            return Ok(true);
        }

        if self.session.window().is_visible() {
            match self.session.handle_key(key) {
                SessionAction::None => {}
                SessionAction::Execute(line) => self.dispatch_command(&line),
                SessionAction::ResumeChosen(option) => self.resume_chosen(option),
            }
            return Ok(true);
        }

        self.handle_browse_key(key)
    }

    /// Key routing while browsing the portfolio sections.
    fn handle_browse_key(&mut self, key: KeyEvent) -> Result<bool> {
        // An editing search field captures printable input before any
        // global binding, so typing `q` into a query cannot quit.
        if self.ui.section == Section::Blog && self.ui.blog.search_editing {
            match key.code {
                KeyCode::Esc | KeyCode::Enter => self.ui.blog.search_editing = false,
                KeyCode::Backspace => self.ui.blog.pop_query_char(),
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.ui.blog.push_query_char(c)
                }
                _ => {}
            }
            return Ok(true);
        }

        // An open reading pane takes the scroll keys; everything else still
        // reaches the global bindings.
        if self.ui.section == Section::Blog && self.ui.blog.reading.is_some() {
            match key.code {
                KeyCode::Esc => {
                    self.ui.blog.reading = None;
                    return Ok(true);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    if let Some(reading) = self.ui.blog.reading.as_mut() {
                        reading.scroll_down();
                    }
                    return Ok(true);
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    if let Some(reading) = self.ui.blog.reading.as_mut() {
                        reading.scroll_up();
                    }
                    return Ok(true);
                }
                _ => {}
            }
        }

        if let Some(command) = nav_command(&key) {
            return match command {
                NavCommand::Quit => Ok(false),
                NavCommand::OpenTerminal => {
                    self.session.open();
                    Ok(true)
                }
                NavCommand::NextSection => {
                    self.ui.section = self.ui.section.next();
                    Ok(true)
                }
                NavCommand::PrevSection => {
                    self.ui.section = self.ui.section.prev();
                    Ok(true)
                }
                NavCommand::ToggleLanguage => {
                    self.toggle_language();
                    Ok(true)
                }
            };
        }

        match (self.ui.section, key.code) {
            (Section::Skills, KeyCode::Char('c')) => self.ui.cycle_skills_category(),
            (Section::Blog, KeyCode::Down | KeyCode::Char('j')) => self.ui.blog.select_next(),
            (Section::Blog, KeyCode::Up | KeyCode::Char('k')) => self.ui.blog.select_prev(),
            (Section::Blog, KeyCode::Enter) => self.open_selected_post(),
            (Section::Blog, KeyCode::Char('/')) => self.ui.blog.search_editing = true,
            (Section::Blog, KeyCode::Char('t')) => self.ui.blog.cycle_tag(),
            (Section::Blog, KeyCode::Esc) => self.ui.blog.clear_filters(),
            _ => {}
        }
        Ok(true)
    }

    // ------------------------------------------------------------------
    // Terminal commands
    // ------------------------------------------------------------------

    fn dispatch_command(&mut self, line: &str) {
        let reply = commands::execute(line, &self.catalog, self.settings.language);
        if let Some(output) = reply.output {
            self.session.push_output(&output);
        }
        match reply.effect {
            CommandEffect::None => {}
            CommandEffect::ClearScrollback => self.session.clear_scrollback(),
            CommandEffect::CloseTerminal => self.session.close(),
            CommandEffect::OpenResumePicker => self.session.open_picker(),
            CommandEffect::ScheduleBooking(delay) => {
                // Replacing a pending effect cancels its timer.
                self.pending_booking = Some(ScheduledEffect::schedule(
                    self.events.sender(),
                    delay,
                    AppEvent::OpenBooking,
                ));
            }
        }
    }

    fn resume_chosen(&mut self, option: usize) {
        let (label_key, url) = resume_target(option);
        let label = self.catalog.text(self.settings.language, label_key);
        let line = self.catalog.format(
            self.settings.language,
            MessageKey::ResumeDownloading,
            &[("name", &label)],
        );
        self.session.push_output(&format!("{line}\n{url}"));
    }

    // ------------------------------------------------------------------
    // Repository loads
    // ------------------------------------------------------------------

    fn request_posts(&mut self) {
        self.posts_request += 1;
        let request_id = self.posts_request;
        let language = self.settings.language;
        let repository = Arc::clone(&self.repository);
        let tx = self.events.sender();
        self.ui.blog.loading = true;
        tokio::spawn(async move {
            let result = repository.get_all(language).await;
            let _ = tx.send(AppEvent::PostsLoaded { request_id, result });
        });
    }

    fn request_post(&mut self, slug: String) {
        self.post_request += 1;
        let request_id = self.post_request;
        let language = self.settings.language;
        let repository = Arc::clone(&self.repository);
        let tx = self.events.sender();
        self.ui.blog.post_loading = true;
        tokio::spawn(async move {
            let result = repository.get_by_id(&slug, language).await;
            let _ = tx.send(AppEvent::PostLoaded { request_id, result });
        });
    }

    fn open_selected_post(&mut self) {
        if let Some(meta) = self.ui.blog.selected_post() {
            self.request_post(meta.slug);
        }
    }

    fn toggle_language(&mut self) {
        self.settings.language = self.settings.language.toggle();
        if let Err(e) = self.settings.save() {
            log::warn!("could not persist the language preference: {e}");
        }
        // The listing, filters and any open post belong to the old
        // language; invalidate the in-flight post load as well.
        self.ui.blog.clear_filters();
        self.ui.blog.reading = None;
        self.ui.blog.post_loading = false;
        self.post_request += 1;
        self.request_posts();
    }
}
