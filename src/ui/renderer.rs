//! Pure draw functions over the application's view state.
//!
//! Everything here reads a [`FrameView`] and paints; no state is mutated
//! during a draw. The terminal overlay and the booking modal are painted
//! last, over the section body.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{block::Title, Block, BorderType, Borders, Clear, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::locale::{Catalog, Language, MessageKey};
use crate::profile::{filtered_skills, Achievement, Project, EXPERIENCE, PROFILE};
use crate::terminal::session::{LineKind, TerminalSession, WindowState};
use crate::ui::sections::Section;
use crate::ui::state::{ReadingPane, UiState};
use crate::ui::theme::ColorTheme;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Borrowed state for one frame.
pub struct FrameView<'a> {
    pub ui: &'a UiState,
    pub session: &'a TerminalSession,
    pub catalog: &'a Catalog,
    pub language: Language,
    pub theme: &'a ColorTheme,
    pub projects: &'a [Project],
    pub achievements: &'a [Achievement],
}

impl FrameView<'_> {
    fn text(&self, key: MessageKey) -> String {
        self.catalog.text(self.language, key)
    }

    fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.ui.spinner_frame % SPINNER_FRAMES.len()]
    }
}

/// Paint one frame.
pub fn draw(frame: &mut Frame, view: &FrameView) {
    let size = frame.size();
    let [tabs_area, body_area, status_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(size);

    render_tabs(frame, tabs_area, view);
    render_section(frame, body_area, view);
    render_status(frame, status_area, view);

    match view.session.window() {
        WindowState::Normal => render_terminal(frame, overlay_rect(size), view),
        WindowState::Maximized => {
            let area = size.inner(Margin {
                vertical: 1,
                horizontal: 2,
            });
            render_terminal(frame, area, view);
        }
        WindowState::Minimized => render_minimized_bar(frame, size, view),
        WindowState::Closed => {}
    }

    if view.ui.booking_open {
        render_booking_modal(frame, size, view);
    }
}

fn render_tabs(frame: &mut Frame, area: Rect, view: &FrameView) {
    let labels: Vec<String> = Section::ALL
        .iter()
        .map(|section| format!(" {} ", view.text(section.message_key())))
        .collect();

    let tabs = Tabs::new(labels)
        .select(view.ui.section.index())
        .style(Style::default().fg(view.theme.dim))
        .highlight_style(view.theme.tab_active)
        .divider("·")
        .block(Block::default().borders(Borders::BOTTOM));

    frame.render_widget(tabs, area);
}

fn render_section(frame: &mut Frame, area: Rect, view: &FrameView) {
    match view.ui.section {
        Section::Home => render_home(frame, area, view),
        Section::About => render_about(frame, area, view),
        Section::Skills => render_skills(frame, area, view),
        Section::Experience => render_experience(frame, area, view),
        Section::Projects => render_projects(frame, area, view),
        Section::Blog => render_blog(frame, area, view),
        Section::Contact => render_contact(frame, area, view),
    }
}

fn render_home(frame: &mut Frame, area: Rect, view: &FrameView) {
    let accent = Style::default().fg(view.theme.accent);
    let dim = Style::default().fg(view.theme.dim);

    let mut lines = vec![
        Line::from(Span::styled(
            PROFILE.name,
            view.theme.heading.add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} @ {}", PROFILE.role, PROFILE.company),
            accent,
        )),
        Line::from(Span::styled(PROFILE.location, dim)),
        Line::default(),
        Line::from(Span::raw(format!(
            "{}+ yrs · {}+ projects · {}+ technologies · {}+ ☕",
            PROFILE.years_experience,
            PROFILE.projects_completed,
            PROFILE.technologies_mastered,
            PROFILE.coffee_consumed
        ))),
    ];

    // Push the card toward the vertical center.
    let padding = area.height.saturating_sub(lines.len() as u16) / 3;
    for _ in 0..padding {
        lines.insert(0, Line::default());
    }

    let home = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(home, area);
}

fn render_about(frame: &mut Frame, area: Rect, view: &FrameView) {
    let dim = Style::default().fg(view.theme.dim);
    let years = PROFILE.years_experience.to_string();
    let technologies = PROFILE.technologies_mastered.to_string();

    let mut lines = vec![
        Line::from(Span::styled(PROFILE.name, view.theme.heading)),
        Line::from(Span::styled(
            format!("{} @ {}", PROFILE.role, PROFILE.company),
            Style::default().fg(view.theme.accent),
        )),
        Line::default(),
        Line::from(view.catalog.format(
            view.language,
            MessageKey::AboutYearsExp,
            &[("count", &years)],
        )),
        Line::from(view.text(MessageKey::AboutLine2)),
        Line::from(view.catalog.format(
            view.language,
            MessageKey::AboutTechMastered,
            &[("count", &technologies)],
        )),
        Line::default(),
        Line::from(Span::styled(view.text(MessageKey::AboutEducation), dim)),
        Line::from(Span::styled(
            view.catalog.format(
                view.language,
                MessageKey::AboutLocation,
                &[("location", PROFILE.location)],
            ),
            dim,
        )),
        Line::default(),
    ];

    for achievement in view.achievements.iter().filter(|a| a.unlocked) {
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", achievement.icon)),
            Span::raw(achievement.title),
            Span::styled(format!("  {}", achievement.description), dim),
        ]));
    }

    let about = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(about, pad(area));
}

fn render_skills(frame: &mut Frame, area: Rect, view: &FrameView) {
    let dim = Style::default().fg(view.theme.dim);
    let accent = Style::default().fg(view.theme.accent);

    let category_label = match view.ui.skills_category {
        Some(category) => view.text(category.message_key()),
        None => "All".to_string(),
    };

    let mut lines = vec![
        Line::from(Span::styled(
            view.text(MessageKey::SkillsHeading),
            view.theme.heading,
        )),
        Line::from(vec![
            Span::styled(format!("[{category_label}]"), accent),
            Span::styled("  c cycles the category", dim),
        ]),
        Line::default(),
    ];

    for skill in filtered_skills(view.ui.skills_category) {
        let name_style = if skill.is_core {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let mut row = vec![
            Span::raw(format!("{} ", skill.icon.glyph())),
            Span::styled(format!("{:<12}", skill.name), name_style),
            Span::styled("█".repeat(skill.years as usize * 2), accent),
            Span::styled(format!("  {} yrs", skill.years), dim),
        ];
        if skill.is_core {
            row.push(Span::styled(
                format!("  @ {}", skill.used_at.join(", ")),
                dim,
            ));
        }
        lines.push(Line::from(row));
    }

    let skills = Paragraph::new(lines);
    frame.render_widget(skills, pad(area));
}

fn render_experience(frame: &mut Frame, area: Rect, view: &FrameView) {
    let dim = Style::default().fg(view.theme.dim);
    let accent = Style::default().fg(view.theme.accent);

    let mut lines = vec![
        Line::from(Span::styled(
            view.text(MessageKey::ExperienceHeading),
            view.theme.heading,
        )),
        Line::default(),
    ];

    for entry in EXPERIENCE {
        let marker = if entry.current { "▸ " } else { "  " };
        lines.push(Line::from(vec![
            Span::styled(marker, accent),
            Span::styled(format!("{:<11}", entry.period), dim),
            Span::styled(
                format!("{:<24}", entry.role),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(entry.company, accent),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", entry.description),
            dim,
        )));
        lines.push(Line::default());
    }

    let experience = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(experience, pad(area));
}

fn render_projects(frame: &mut Frame, area: Rect, view: &FrameView) {
    let dim = Style::default().fg(view.theme.dim);
    let accent = Style::default().fg(view.theme.accent);

    let mut lines = vec![
        Line::from(Span::styled(
            view.text(MessageKey::TabProjects),
            view.theme.heading,
        )),
        Line::default(),
    ];

    for project in view.projects {
        let star = if project.featured { " ★" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(
                project.title,
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(star, accent),
        ]));
        // Featured projects get the full write-up.
        let blurb = if project.featured {
            project.long_description
        } else {
            project.description
        };
        lines.push(Line::from(Span::raw(format!("  {blurb}"))));
        lines.push(Line::from(Span::styled(
            format!("  {}", project.technologies.join(" · ")),
            dim,
        )));
        if let Some(repo) = project.repo_url {
            lines.push(Line::from(Span::styled(format!("  {repo}"), accent)));
        }
        lines.push(Line::default());
    }

    let projects = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(projects, pad(area));
}

fn render_blog(frame: &mut Frame, area: Rect, view: &FrameView) {
    // A post body is still on its way from the repository.
    if view.ui.blog.post_loading {
        let loading = Paragraph::new(format!("{} ...", view.spinner()));
        frame.render_widget(loading, pad(area));
        return;
    }

    if let Some(reading) = &view.ui.blog.reading {
        render_post(frame, area, view, reading);
        return;
    }

    let [filter_area, list_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(pad(area));

    render_blog_filter(frame, filter_area, view);
    render_blog_list(frame, list_area, view);
}

fn render_blog_filter(frame: &mut Frame, area: Rect, view: &FrameView) {
    let blog = &view.ui.blog;
    let dim = Style::default().fg(view.theme.dim);
    let accent = Style::default().fg(view.theme.accent);

    let mut spans = vec![Span::styled("/ ", accent), Span::raw(blog.filter.query.clone())];
    if blog.search_editing {
        spans.push(Span::styled("█", accent));
    }
    let tag_label = blog.filter.active_tag.as_deref().unwrap_or("*");
    spans.push(Span::styled(format!("   t:{tag_label}"), dim));
    spans.push(Span::styled(
        format!("   {}/{}", blog.visible().len(), blog.posts.len()),
        dim,
    ));

    let filter = Paragraph::new(Line::from(spans));
    frame.render_widget(filter, area);
}

fn render_blog_list(frame: &mut Frame, area: Rect, view: &FrameView) {
    let blog = &view.ui.blog;
    let dim = Style::default().fg(view.theme.dim);

    if blog.loading {
        let loading = Paragraph::new(Line::from(vec![
            Span::raw(format!("{} ", view.spinner())),
            Span::styled(view.text(MessageKey::BlogLoading), dim),
        ]));
        frame.render_widget(loading, area);
        return;
    }

    let visible = blog.visible();
    if visible.is_empty() {
        let empty = Paragraph::new(Span::styled(view.text(MessageKey::BlogNoPosts), dim));
        frame.render_widget(empty, area);
        return;
    }

    let mut lines = Vec::with_capacity(visible.len());
    for (idx, meta) in visible.iter().enumerate() {
        let selected = idx == blog.selected;
        let marker = if selected { "> " } else { "  " };
        let row_style = if selected {
            view.theme.selection
        } else {
            Style::default()
        };
        let tags = if meta.tags.is_empty() {
            String::new()
        } else {
            format!("  [{}]", meta.tags.join(", "))
        };
        lines.push(Line::from(vec![
            Span::styled(marker, row_style),
            Span::styled(format!("{}  ", meta.date), if selected { row_style } else { dim }),
            Span::styled(meta.title.clone(), row_style),
            Span::styled(tags, if selected { row_style } else { dim }),
        ]));
    }

    // Keep the selection on screen.
    let skip = (blog.selected as u16).saturating_sub(area.height.saturating_sub(1));
    let list = Paragraph::new(lines).scroll((skip, 0));
    frame.render_widget(list, area);
}

fn render_post(frame: &mut Frame, area: Rect, view: &FrameView, reading: &ReadingPane) {
    let dim = Style::default().fg(view.theme.dim);
    let meta = &reading.post.meta;

    let [header_area, body_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(pad(area));

    let header = Paragraph::new(vec![
        Line::from(Span::styled(meta.title.clone(), view.theme.heading)),
        Line::from(Span::styled(
            format!("{}  [{}]", meta.date, meta.tags.join(", ")),
            dim,
        )),
    ]);
    frame.render_widget(header, header_area);

    let lines: Vec<Line> = reading
        .post
        .body
        .lines()
        .map(|line| {
            if line.starts_with('#') {
                Line::from(Span::styled(line.to_string(), view.theme.heading))
            } else {
                Line::from(Span::raw(line.to_string()))
            }
        })
        .collect();

    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((reading.scroll, 0));
    frame.render_widget(body, body_area);
}

fn render_contact(frame: &mut Frame, area: Rect, view: &FrameView) {
    let dim = Style::default().fg(view.theme.dim);
    let accent = Style::default().fg(view.theme.accent);

    let lines = vec![
        Line::from(Span::styled(
            view.text(MessageKey::ContactHeading),
            view.theme.heading,
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("GitHub    ", dim),
            Span::styled(PROFILE.github, accent),
        ]),
        Line::from(vec![
            Span::styled("LinkedIn  ", dim),
            Span::styled(PROFILE.linkedin, accent),
        ]),
        Line::from(vec![
            Span::styled("Calendar  ", dim),
            Span::styled(PROFILE.booking_url, accent),
        ]),
        Line::default(),
        Line::from(vec![
            Span::styled("Resume    ", dim),
            Span::styled(PROFILE.resume_url, accent),
        ]),
    ];

    let contact = Paragraph::new(lines);
    frame.render_widget(contact, pad(area));
}

fn render_status(frame: &mut Frame, area: Rect, view: &FrameView) {
    let status = Paragraph::new(format!(
        " {}  ·  {}",
        view.text(MessageKey::StatusHint),
        view.language.label()
    ))
    .style(
        Style::default()
            .bg(view.theme.status_bg)
            .fg(view.theme.status_fg),
    );
    frame.render_widget(status, area);
}

// ----------------------------------------------------------------------
// Terminal overlay
// ----------------------------------------------------------------------

fn render_terminal(frame: &mut Frame, area: Rect, view: &FrameView) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(view.theme.terminal_border))
        .title(Title::from(Span::styled(
            " visitor@termfolio:~ ",
            view.theme.terminal_title,
        )))
        .title(
            Title::from(Span::styled(
                " Esc min · Ctrl+F max · Ctrl+Q close ",
                Style::default().fg(view.theme.dim),
            ))
            .alignment(Alignment::Right),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let input_height = if view.session.picker().is_some() { 3 } else { 1 };
    let [scrollback_area, input_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(input_height)]).areas(inner);

    render_scrollback(frame, scrollback_area, view);

    if view.session.picker().is_some() {
        render_picker(frame, input_area, view);
    } else {
        render_prompt(frame, input_area, view);
        render_suggestions(frame, inner, input_area, view);
    }
}

fn render_scrollback(frame: &mut Frame, area: Rect, view: &FrameView) {
    let accent = Style::default().fg(view.theme.accent);
    // One scroll-back entry can hold several rows of command output.
    let mut rows: Vec<Line> = Vec::new();
    for line in view.session.scrollback() {
        let text = line.display(view.catalog, view.language);
        let style = match line.kind {
            LineKind::Input => accent,
            LineKind::Output => Style::default(),
        };
        for row in text.split('\n') {
            rows.push(Line::from(Span::styled(row.to_string(), style)));
        }
    }

    let skip = (rows.len() as u16).saturating_sub(area.height);
    let scrollback = Paragraph::new(rows).scroll((skip, 0));
    frame.render_widget(scrollback, area);
}

fn render_prompt(frame: &mut Frame, area: Rect, view: &FrameView) {
    let prompt = Paragraph::new(Line::from(vec![
        Span::styled(
            "❯ ",
            Style::default()
                .fg(view.theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(view.session.input()),
    ]));
    frame.render_widget(prompt, area);

    let cursor_x = area.x + 2 + view.session.input().chars().count() as u16;
    frame.set_cursor(cursor_x.min(area.right().saturating_sub(1)), area.y);
}

fn render_suggestions(frame: &mut Frame, inner: Rect, prompt_area: Rect, view: &FrameView) {
    let suggestions = view.session.suggestions();
    if suggestions.is_empty() {
        return;
    }

    let height = (suggestions.len() as u16).min(5);
    if prompt_area.y < inner.y + height {
        return;
    }
    let width = inner.width.saturating_sub(4).min(24);
    let popup = Rect::new(inner.x + 2, prompt_area.y - height, width, height);
    frame.render_widget(Clear, popup);

    let selected = view.session.suggestion_index().min(suggestions.len() - 1);
    let lines: Vec<Line> = suggestions
        .iter()
        .take(height as usize)
        .enumerate()
        .map(|(idx, cmd)| {
            let style = if idx == selected {
                view.theme.suggestion_selected
            } else {
                Style::default().fg(view.theme.dim)
            };
            Line::from(Span::styled(format!(" {cmd:<22}"), style))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), popup);
}

fn render_picker(frame: &mut Frame, area: Rect, view: &FrameView) {
    let Some(picker) = view.session.picker() else {
        return;
    };

    let options = [
        view.text(MessageKey::ResumeOptionEnglish),
        view.text(MessageKey::ResumeOptionSpanish),
    ];

    let mut lines = Vec::with_capacity(3);
    for (idx, option) in options.iter().enumerate() {
        let (marker, style) = if idx == picker.selected {
            ("▸ ", view.theme.selection)
        } else {
            ("  ", Style::default())
        };
        lines.push(Line::from(Span::styled(format!("{marker}{option}"), style)));
    }
    lines.push(Line::from(Span::styled(
        view.text(MessageKey::PickerHint),
        Style::default().fg(view.theme.dim),
    )));

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_minimized_bar(frame: &mut Frame, size: Rect, view: &FrameView) {
    let label = " ● visitor@termfolio (`) ";
    let width = (label.chars().count() as u16).min(size.width);
    let area = Rect::new(
        size.right().saturating_sub(width + 1),
        size.bottom().saturating_sub(2),
        width,
        1,
    );
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(Span::styled(label, view.theme.terminal_title)),
        area,
    );
}

fn render_booking_modal(frame: &mut Frame, size: Rect, view: &FrameView) {
    let area = centered_rect(48, 7, size);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(view.theme.accent))
        .title(Title::from(format!(" {} ", view.text(MessageKey::BookingTitle))));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let body = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(
            PROFILE.booking_url,
            Style::default().fg(view.theme.accent),
        )),
        Line::default(),
        Line::from(Span::styled(
            view.text(MessageKey::BookingHint),
            Style::default().fg(view.theme.dim),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(body, inner);
}

// ----------------------------------------------------------------------
// Geometry helpers
// ----------------------------------------------------------------------

fn pad(area: Rect) -> Rect {
    area.inner(Margin {
        vertical: 1,
        horizontal: 2,
    })
}

fn overlay_rect(area: Rect) -> Rect {
    let width = (area.width * 4 / 5).max(20.min(area.width));
    let height = (area.height * 7 / 10).max(8.min(area.height));
    centered_rect(width, height, area)
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
