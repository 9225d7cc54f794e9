//! Scroll-spy for the page document
//!
//! The page is one long scrollable document. Its sections are laid out top to bottom and
//! their first rows are recorded while rendering; these functions map a scroll offset back
//! onto that table.

use std::fmt;

/// Rows above a section's top at which it already counts as active
pub const SECTION_MARGIN: u16 = 3;

/// Scroll offset past which the "back to top" hint is shown
pub const BACK_TO_TOP_THRESHOLD: u16 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] =
        [Section::Home, Section::About, Section::Skills, Section::Projects, Section::Contact];
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        };
        write!(f, "{}", label)
    }
}

/// First document row of a section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionBounds {
    pub section: Section,
    pub top: u16,
}

/// The last section (in table order) whose `top - margin <= offset`; `Home` if none
pub fn active_section(offset: u16, bounds: &[SectionBounds], margin: u16) -> Section {
    bounds
        .iter()
        .filter(|b| b.top.saturating_sub(margin) <= offset)
        .last()
        .map(|b| b.section)
        .unwrap_or_default()
}

/// Document row where `section` starts
pub fn section_top(section: Section, bounds: &[SectionBounds]) -> Option<u16> {
    bounds.iter().find(|b| b.section == section).map(|b| b.top)
}

pub fn show_back_to_top(offset: u16) -> bool {
    offset > BACK_TO_TOP_THRESHOLD
}
