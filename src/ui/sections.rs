//! The portfolio's top-level sections and tab cycling.

use crate::locale::MessageKey;

/// One tab of the single-page portfolio, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Skills,
    Experience,
    Projects,
    Blog,
    Contact,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Experience,
        Section::Projects,
        Section::Blog,
        Section::Contact,
    ];

    /// Position in the tab bar.
    pub fn index(&self) -> usize {
        match self {
            Section::Home => 0,
            Section::About => 1,
            Section::Skills => 2,
            Section::Experience => 3,
            Section::Projects => 4,
            Section::Blog => 5,
            Section::Contact => 6,
        }
    }

    /// Next tab, wrapping past the last.
    pub fn next(&self) -> Section {
        Section::ALL[(self.index() + 1) % Section::ALL.len()]
    }

    /// Previous tab, wrapping before the first.
    pub fn prev(&self) -> Section {
        let count = Section::ALL.len();
        Section::ALL[(self.index() + count - 1) % count]
    }

    /// Localized tab label.
    pub fn message_key(&self) -> MessageKey {
        match self {
            Section::Home => MessageKey::TabHome,
            Section::About => MessageKey::TabAbout,
            Section::Skills => MessageKey::TabSkills,
            Section::Experience => MessageKey::TabExperience,
            Section::Projects => MessageKey::TabProjects,
            Section::Blog => MessageKey::TabBlog,
            Section::Contact => MessageKey::TabContact,
        }
    }
}

impl Default for Section {
    fn default() -> Self {
        Section::Home
    }
}
