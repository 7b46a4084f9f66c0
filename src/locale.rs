//! Language selection and message catalogs.
//!
//! The UI speaks two languages. Catalogs are embedded JSON tables keyed by
//! the canonical names in [`MessageKey::as_str`]; lookups fall back to
//! English and finally to the key name itself, so a hole in a catalog can
//! never take a render path down.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

/// Supported UI languages.
///
/// Content directories use the two-letter code as a path segment; anything
/// unrecognized maps to the fallback language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Es,
}

impl Language {
    pub const FALLBACK: Language = Language::En;

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
        }
    }

    /// Strict parse of a two-letter code, for CLI/config validation.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::En),
            "es" => Some(Language::Es),
            _ => None,
        }
    }

    /// Lenient parse of a content path segment. Unrecognized segments land
    /// on the fallback language rather than being rejected.
    pub fn from_path_segment(segment: &str) -> Self {
        Self::from_code(segment).unwrap_or(Self::FALLBACK)
    }

    pub fn toggle(&self) -> Self {
        match self {
            Language::En => Language::Es,
            Language::Es => Language::En,
        }
    }

    /// Native-language display name, used in the status bar.
    pub fn label(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Español",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::FALLBACK
    }
}

/// Every user-facing message the catalogs can resolve.
///
/// Free-form command output embeds profile data directly; only messages that
/// must re-render on a language switch go through a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    Welcome,
    Cleared,
    CommandNotFound,
    HelpHeading,
    HelpAbout,
    HelpSkills,
    HelpExperience,
    HelpContact,
    HelpResume,
    HelpBook,
    HelpClear,
    HelpExit,
    HelpSudo,
    AboutYearsExp,
    AboutLine2,
    AboutTechMastered,
    AboutEducation,
    AboutLocation,
    SkillsHeading,
    CategoryFrontend,
    CategoryBackend,
    CategoryTools,
    CategoryDesign,
    ExperienceHeading,
    ContactHeading,
    ResumePrompt,
    ResumeOptionEnglish,
    ResumeOptionSpanish,
    ResumeDownloading,
    PickerHint,
    BookingOpening,
    SudoUnlocked,
    SudoSending,
    SudoProgress,
    SudoReceived,
    SudoCalendar,
    BookingTitle,
    BookingHint,
    TabHome,
    TabAbout,
    TabSkills,
    TabExperience,
    TabProjects,
    TabBlog,
    TabContact,
    BlogLoading,
    BlogNoPosts,
    StatusHint,
}

impl MessageKey {
    /// All keys, in catalog order. Used to audit catalogs at load time.
    pub const ALL: [MessageKey; 48] = [
        MessageKey::Welcome,
        MessageKey::Cleared,
        MessageKey::CommandNotFound,
        MessageKey::HelpHeading,
        MessageKey::HelpAbout,
        MessageKey::HelpSkills,
        MessageKey::HelpExperience,
        MessageKey::HelpContact,
        MessageKey::HelpResume,
        MessageKey::HelpBook,
        MessageKey::HelpClear,
        MessageKey::HelpExit,
        MessageKey::HelpSudo,
        MessageKey::AboutYearsExp,
        MessageKey::AboutLine2,
        MessageKey::AboutTechMastered,
        MessageKey::AboutEducation,
        MessageKey::AboutLocation,
        MessageKey::SkillsHeading,
        MessageKey::CategoryFrontend,
        MessageKey::CategoryBackend,
        MessageKey::CategoryTools,
        MessageKey::CategoryDesign,
        MessageKey::ExperienceHeading,
        MessageKey::ContactHeading,
        MessageKey::ResumePrompt,
        MessageKey::ResumeOptionEnglish,
        MessageKey::ResumeOptionSpanish,
        MessageKey::ResumeDownloading,
        MessageKey::PickerHint,
        MessageKey::BookingOpening,
        MessageKey::SudoUnlocked,
        MessageKey::SudoSending,
        MessageKey::SudoProgress,
        MessageKey::SudoReceived,
        MessageKey::SudoCalendar,
        MessageKey::BookingTitle,
        MessageKey::BookingHint,
        MessageKey::TabHome,
        MessageKey::TabAbout,
        MessageKey::TabSkills,
        MessageKey::TabExperience,
        MessageKey::TabProjects,
        MessageKey::TabBlog,
        MessageKey::TabContact,
        MessageKey::BlogLoading,
        MessageKey::BlogNoPosts,
        MessageKey::StatusHint,
    ];

    /// Canonical name, which is also the JSON catalog key and the last-resort
    /// fallback text.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKey::Welcome => "welcome",
            MessageKey::Cleared => "cleared",
            MessageKey::CommandNotFound => "command_not_found",
            MessageKey::HelpHeading => "help_heading",
            MessageKey::HelpAbout => "help_about",
            MessageKey::HelpSkills => "help_skills",
            MessageKey::HelpExperience => "help_experience",
            MessageKey::HelpContact => "help_contact",
            MessageKey::HelpResume => "help_resume",
            MessageKey::HelpBook => "help_book",
            MessageKey::HelpClear => "help_clear",
            MessageKey::HelpExit => "help_exit",
            MessageKey::HelpSudo => "help_sudo",
            MessageKey::AboutYearsExp => "about_years_exp",
            MessageKey::AboutLine2 => "about_line2",
            MessageKey::AboutTechMastered => "about_tech_mastered",
            MessageKey::AboutEducation => "about_education",
            MessageKey::AboutLocation => "about_location",
            MessageKey::SkillsHeading => "skills_heading",
            MessageKey::CategoryFrontend => "category_frontend",
            MessageKey::CategoryBackend => "category_backend",
            MessageKey::CategoryTools => "category_tools",
            MessageKey::CategoryDesign => "category_design",
            MessageKey::ExperienceHeading => "experience_heading",
            MessageKey::ContactHeading => "contact_heading",
            MessageKey::ResumePrompt => "resume_prompt",
            MessageKey::ResumeOptionEnglish => "resume_option_english",
            MessageKey::ResumeOptionSpanish => "resume_option_spanish",
            MessageKey::ResumeDownloading => "resume_downloading",
            MessageKey::PickerHint => "picker_hint",
            MessageKey::BookingOpening => "booking_opening",
            MessageKey::SudoUnlocked => "sudo_unlocked",
            MessageKey::SudoSending => "sudo_sending",
            MessageKey::SudoProgress => "sudo_progress",
            MessageKey::SudoReceived => "sudo_received",
            MessageKey::SudoCalendar => "sudo_calendar",
            MessageKey::BookingTitle => "booking_title",
            MessageKey::BookingHint => "booking_hint",
            MessageKey::TabHome => "tab_home",
            MessageKey::TabAbout => "tab_about",
            MessageKey::TabSkills => "tab_skills",
            MessageKey::TabExperience => "tab_experience",
            MessageKey::TabProjects => "tab_projects",
            MessageKey::TabBlog => "tab_blog",
            MessageKey::TabContact => "tab_contact",
            MessageKey::BlogLoading => "blog_loading",
            MessageKey::BlogNoPosts => "blog_no_posts",
            MessageKey::StatusHint => "status_hint",
        }
    }
}

/// Per-language message tables with an English fallback chain.
pub struct Catalog {
    tables: HashMap<Language, HashMap<String, String>>,
}

impl Catalog {
    /// Build the catalog from the JSON tables compiled into the binary.
    pub fn load_embedded() -> Result<Self> {
        let mut tables = HashMap::new();
        tables.insert(
            Language::En,
            Self::parse_table(include_str!("../locales/en.json"), "en")?,
        );
        tables.insert(
            Language::Es,
            Self::parse_table(include_str!("../locales/es.json"), "es")?,
        );

        let catalog = Self { tables };
        catalog.audit();
        Ok(catalog)
    }

    /// Build a catalog directly from parsed tables. Used by tests.
    pub fn from_tables(tables: HashMap<Language, HashMap<String, String>>) -> Self {
        Self { tables }
    }

    fn parse_table(raw: &str, name: &str) -> Result<HashMap<String, String>> {
        serde_json::from_str(raw)
            .map_err(|e| FolioError::catalog(format!("locale table '{name}' is invalid: {e}")))
    }

    /// Warn once at startup about catalog holes; lookups still fall back.
    fn audit(&self) {
        for (language, table) in &self.tables {
            for key in MessageKey::ALL {
                if !table.contains_key(key.as_str()) {
                    log::warn!(
                        "locale table '{}' is missing key '{}'",
                        language.code(),
                        key.as_str()
                    );
                }
            }
        }
    }

    /// Resolve a message: requested language, then English, then the key name.
    pub fn text(&self, language: Language, key: MessageKey) -> String {
        let name = key.as_str();
        self.tables
            .get(&language)
            .and_then(|table| table.get(name))
            .or_else(|| {
                self.tables
                    .get(&Language::FALLBACK)
                    .and_then(|table| table.get(name))
            })
            .cloned()
            .unwrap_or_else(|| name.to_string())
    }

    /// Resolve a message and substitute `{placeholder}` slots.
    pub fn format(&self, language: Language, key: MessageKey, args: &[(&str, &str)]) -> String {
        let mut text = self.text(language, key);
        for (slot, value) in args {
            text = text.replace(&format!("{{{slot}}}"), value);
        }
        text
    }
}
