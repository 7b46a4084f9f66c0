//! The terminal's command vocabulary and handlers.
//!
//! Commands are a closed set: dispatch is exact on the trimmed, lowercased
//! input, and [`COMMANDS`] doubles as the suggestion table. Handlers render
//! their reply against the active language at execution time; once a reply is
//! in scroll-back it stays in the language it was produced in.

use std::time::Duration;

use crate::locale::{Catalog, Language, MessageKey};
use crate::profile::{filtered_skills, EXPERIENCE, PROFILE};

/// Every command the terminal accepts, in suggestion order.
pub const COMMANDS: [&str; 10] = [
    "about",
    "skills",
    "experience",
    "contact",
    "resume",
    "book",
    "help",
    "clear",
    "exit",
    "sudo hire-alex",
];

/// Delay before the booking modal opens after `book`.
pub const BOOKING_DELAY: Duration = Duration::from_millis(500);
/// Delay after the `sudo` celebration, long enough to read the output.
pub const SUDO_BOOKING_DELAY: Duration = Duration::from_millis(2500);

/// Bar rows in `skills` output show this many entries.
const SKILL_ROWS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinCommand {
    About,
    Skills,
    Experience,
    Contact,
    Resume,
    Book,
    Help,
    Clear,
    Exit,
    SudoHire,
}

impl BuiltinCommand {
    /// Exact match on the trimmed, lowercased input; anything else is unknown.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "about" => Some(BuiltinCommand::About),
            "skills" => Some(BuiltinCommand::Skills),
            "experience" => Some(BuiltinCommand::Experience),
            "contact" => Some(BuiltinCommand::Contact),
            "resume" => Some(BuiltinCommand::Resume),
            "book" => Some(BuiltinCommand::Book),
            "help" => Some(BuiltinCommand::Help),
            "clear" => Some(BuiltinCommand::Clear),
            "exit" => Some(BuiltinCommand::Exit),
            "sudo hire-alex" => Some(BuiltinCommand::SudoHire),
            _ => None,
        }
    }
}

/// Side effect a command asks the application to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandEffect {
    None,
    ClearScrollback,
    CloseTerminal,
    OpenResumePicker,
    /// Open the booking modal after the given delay.
    ScheduleBooking(Duration),
}

/// What a command printed and what it asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandReply {
    /// Scroll-back rows, `\n`-separated. `None` prints nothing.
    pub output: Option<String>,
    pub effect: CommandEffect,
}

impl CommandReply {
    fn text(output: String) -> Self {
        CommandReply {
            output: Some(output),
            effect: CommandEffect::None,
        }
    }

    fn silent(effect: CommandEffect) -> Self {
        CommandReply {
            output: None,
            effect,
        }
    }
}

/// Run one command line and produce its reply.
pub fn execute(input: &str, catalog: &Catalog, language: Language) -> CommandReply {
    match BuiltinCommand::parse(input) {
        Some(BuiltinCommand::About) => CommandReply::text(about(catalog, language)),
        Some(BuiltinCommand::Skills) => CommandReply::text(skills(catalog, language)),
        Some(BuiltinCommand::Experience) => CommandReply::text(experience(catalog, language)),
        Some(BuiltinCommand::Contact) => CommandReply::text(contact(catalog, language)),
        Some(BuiltinCommand::Help) => CommandReply::text(help(catalog, language)),
        Some(BuiltinCommand::Resume) => CommandReply {
            output: Some(catalog.text(language, MessageKey::ResumePrompt)),
            effect: CommandEffect::OpenResumePicker,
        },
        Some(BuiltinCommand::Book) => CommandReply {
            output: Some(catalog.text(language, MessageKey::BookingOpening)),
            effect: CommandEffect::ScheduleBooking(BOOKING_DELAY),
        },
        Some(BuiltinCommand::SudoHire) => CommandReply {
            output: Some(sudo_hire(catalog, language)),
            effect: CommandEffect::ScheduleBooking(SUDO_BOOKING_DELAY),
        },
        Some(BuiltinCommand::Clear) => CommandReply::silent(CommandEffect::ClearScrollback),
        Some(BuiltinCommand::Exit) => CommandReply::silent(CommandEffect::CloseTerminal),
        None => CommandReply::text(catalog.format(
            language,
            MessageKey::CommandNotFound,
            &[("cmd", input.trim())],
        )),
    }
}

fn about(catalog: &Catalog, language: Language) -> String {
    let years = PROFILE.years_experience.to_string();
    let technologies = PROFILE.technologies_mastered.to_string();
    [
        PROFILE.name.to_string(),
        format!("{} @ {}", PROFILE.role, PROFILE.company),
        String::new(),
        catalog.format(language, MessageKey::AboutYearsExp, &[("count", &years)]),
        catalog.text(language, MessageKey::AboutLine2),
        catalog.format(
            language,
            MessageKey::AboutTechMastered,
            &[("count", &technologies)],
        ),
        String::new(),
        catalog.text(language, MessageKey::AboutEducation),
        catalog.format(
            language,
            MessageKey::AboutLocation,
            &[("location", PROFILE.location)],
        ),
    ]
    .join("\n")
}

fn skills(catalog: &Catalog, language: Language) -> String {
    let mut lines = vec![catalog.text(language, MessageKey::SkillsHeading), String::new()];
    for skill in filtered_skills(None).into_iter().take(SKILL_ROWS) {
        let bar = "█".repeat(skill.years as usize * 2);
        lines.push(format!("  {:<12}{:<22}{:>2} yrs", skill.name, bar, skill.years));
    }
    lines.join("\n")
}

fn experience(catalog: &Catalog, language: Language) -> String {
    let mut lines = vec![
        catalog.text(language, MessageKey::ExperienceHeading),
        String::new(),
    ];
    for entry in EXPERIENCE {
        lines.push(format!(
            "  {:<11}{:<24}{}",
            entry.period, entry.role, entry.company
        ));
    }
    lines.join("\n")
}

fn contact(catalog: &Catalog, language: Language) -> String {
    [
        catalog.text(language, MessageKey::ContactHeading),
        format!("GitHub:   {}", PROFILE.github),
        format!("LinkedIn: {}", PROFILE.linkedin),
    ]
    .join("\n")
}

fn help(catalog: &Catalog, language: Language) -> String {
    [
        catalog.text(language, MessageKey::HelpHeading),
        String::new(),
        catalog.text(language, MessageKey::HelpAbout),
        catalog.text(language, MessageKey::HelpSkills),
        catalog.text(language, MessageKey::HelpExperience),
        catalog.text(language, MessageKey::HelpContact),
        catalog.text(language, MessageKey::HelpResume),
        catalog.text(language, MessageKey::HelpBook),
        catalog.text(language, MessageKey::HelpClear),
        catalog.text(language, MessageKey::HelpExit),
        String::new(),
        catalog.text(language, MessageKey::HelpSudo),
    ]
    .join("\n")
}

fn sudo_hire(catalog: &Catalog, language: Language) -> String {
    [
        format!("🎉 {}", catalog.text(language, MessageKey::SudoUnlocked)),
        String::new(),
        catalog.text(language, MessageKey::SudoSending),
        catalog.text(language, MessageKey::SudoProgress),
        String::new(),
        format!("✅ {}", catalog.text(language, MessageKey::SudoReceived)),
        catalog.text(language, MessageKey::SudoCalendar),
    ]
    .join("\n")
}
