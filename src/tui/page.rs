//! The scrollable page document
//!
//! The whole site (hero, about, skills, projects summary, contact) is laid out as one list
//! of wrapped lines. While building it, the first row of each section is recorded so the
//! navigation bar can follow the scroll position.

use std::fmt;

use chrono::{Datelike, Utc};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::rendering::{ACCENT, BRIGHT, MUTED};
use crate::filters::filter_skill_categories;
use crate::models::SiteProfile;
use crate::navigation::{Section, SectionBounds};
use crate::utils::sanitize_for_terminal;

/// Narrowest wrap width; below this the text is allowed to overflow
const MIN_WRAP_WIDTH: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AboutTab {
    #[default]
    Bio,
    Experience,
    Testimonials,
}

impl AboutTab {
    pub const ALL: [AboutTab; 3] = [AboutTab::Bio, AboutTab::Experience, AboutTab::Testimonials];

    pub fn next(self) -> Self {
        match self {
            AboutTab::Bio => AboutTab::Experience,
            AboutTab::Experience => AboutTab::Testimonials,
            AboutTab::Testimonials => AboutTab::Bio,
        }
    }
}

impl fmt::Display for AboutTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AboutTab::Bio => "Bio",
            AboutTab::Experience => "Experience",
            AboutTab::Testimonials => "Testimonials",
        };
        f.write_str(label)
    }
}

/// View-dependent inputs to the page document
pub struct PageView<'a> {
    pub about_tab: AboutTab,
    pub testimonial_index: usize,
    pub skill_filters: &'a [String],
    pub skill_filter: &'a str,
}

#[derive(Debug, Clone, Default)]
pub struct PageDocument {
    pub lines: Vec<Line<'static>>,
    pub bounds: Vec<SectionBounds>,
}

impl PageDocument {
    pub fn height(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
    }
}

struct PageBuilder {
    doc: PageDocument,
    wrap_width: usize,
}

impl PageBuilder {
    fn new(width: u16) -> Self {
        let wrap_width = usize::from(width).saturating_sub(4).max(MIN_WRAP_WIDTH);
        Self { doc: PageDocument::default(), wrap_width }
    }

    fn row(&self) -> u16 {
        self.doc.height()
    }

    fn push(&mut self, line: Line<'static>) {
        self.doc.lines.push(line);
    }

    fn blank(&mut self) {
        self.push(Line::from(""));
    }

    fn section(&mut self, section: Section, title: &str) {
        self.doc.bounds.push(SectionBounds { section, top: self.row() });
        self.push(Line::from(Span::styled(
            format!("  {}", title),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )));
        self.push(Line::from(Span::styled(
            format!("  {}", "─".repeat(title.chars().count().max(3))),
            Style::default().fg(ACCENT),
        )));
    }

    fn paragraph(&mut self, text: &str, indent: &str, style: Style) {
        let clean = sanitize_for_terminal(text);
        let width = self.wrap_width.saturating_sub(indent.len()).max(MIN_WRAP_WIDTH);
        for line in textwrap::wrap(&clean, width) {
            self.push(Line::from(Span::styled(format!("{}{}", indent, line), style)));
        }
    }

    fn bullet(&mut self, text: &str) {
        let clean = sanitize_for_terminal(text);
        let options = textwrap::Options::new(self.wrap_width)
            .initial_indent("    • ")
            .subsequent_indent("      ");
        for line in textwrap::wrap(&clean, options) {
            self.push(Line::from(line.into_owned()));
        }
    }

    fn finish(self) -> PageDocument {
        self.doc
    }
}

/// Lay out the whole page for a body `width` columns wide
pub fn build_page(profile: &SiteProfile, view: &PageView<'_>, width: u16) -> PageDocument {
    let mut page = PageBuilder::new(width);

    hero(&mut page, profile);
    about(&mut page, profile, view);
    skills(&mut page, profile, view);
    projects(&mut page, profile);
    contact(&mut page, profile);

    page.blank();
    page.push(Line::from(Span::styled(
        format!(
            "  © {} {}. All rights reserved.",
            Utc::now().year(),
            sanitize_for_terminal(&profile.name)
        ),
        Style::default().fg(MUTED),
    )));

    page.finish()
}

fn hero(page: &mut PageBuilder, profile: &SiteProfile) {
    page.doc.bounds.push(SectionBounds { section: Section::Home, top: page.row() });
    page.blank();
    page.push(Line::from(Span::styled(
        format!("  Hi, I'm {}", sanitize_for_terminal(&profile.name)),
        Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD),
    )));
    if !profile.tagline.is_empty() {
        page.paragraph(&profile.tagline, "  ", Style::default().fg(ACCENT));
    }
    page.blank();
    page.push(Line::from(vec![
        Span::styled("  [m] Get in touch", Style::default().fg(BRIGHT).bg(ACCENT)),
        Span::raw("   "),
        Span::styled("[g] Browse projects", Style::default().fg(ACCENT)),
        Span::raw("   "),
        Span::styled("[c] Ask the AI assistant", Style::default().fg(MUTED)),
    ]));
    page.blank();
}

fn about(page: &mut PageBuilder, profile: &SiteProfile, view: &PageView<'_>) {
    page.section(Section::About, "About Me");
    let labels = AboutTab::ALL.iter().map(|t| t.to_string());
    page.push(tab_strip(labels, &view.about_tab.to_string(), "a"));
    page.blank();

    match view.about_tab {
        AboutTab::Bio => page.paragraph(&profile.bio, "  ", Style::default()),
        AboutTab::Experience => {
            for job in &profile.experience {
                let heading = format!(
                    "  {} @ {}",
                    sanitize_for_terminal(&job.title),
                    sanitize_for_terminal(&job.company)
                );
                page.push(Line::from(vec![
                    Span::styled(heading, Style::default().add_modifier(Modifier::BOLD)),
                    Span::styled(format!("  ({})", job.period), Style::default().fg(MUTED)),
                ]));
                for item in &job.responsibilities {
                    page.bullet(item);
                }
                if !job.achievements.is_empty() {
                    page.push(Line::from(Span::styled(
                        "    Achievements:",
                        Style::default().fg(ACCENT),
                    )));
                    for item in &job.achievements {
                        page.bullet(item);
                    }
                }
                page.blank();
            }
        }
        AboutTab::Testimonials => {
            let count = profile.testimonials.len();
            if count == 0 {
                page.push(Line::from(Span::styled(
                    "  No testimonials yet.",
                    Style::default().fg(MUTED),
                )));
            } else {
                let index = view.testimonial_index % count;
                let testimonial = &profile.testimonials[index];
                let quote = format!("\"{}\"", testimonial.text);
                page.paragraph(&quote, "  ", Style::default().add_modifier(Modifier::ITALIC));
                page.push(Line::from(Span::styled(
                    format!(
                        "    - {}   ({}/{})",
                        sanitize_for_terminal(&testimonial.author),
                        index + 1,
                        count
                    ),
                    Style::default().fg(MUTED),
                )));
            }
        }
    }
    page.blank();
}

fn skills(page: &mut PageBuilder, profile: &SiteProfile, view: &PageView<'_>) {
    page.section(Section::Skills, "Skills & Expertise");
    page.push(tab_strip(view.skill_filters.iter().cloned(), view.skill_filter, "f"));
    page.blank();

    for category in filter_skill_categories(&profile.skills, view.skill_filter) {
        page.push(Line::from(Span::styled(
            format!("  {}", sanitize_for_terminal(&category.title)),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        if !category.description.is_empty() {
            page.paragraph(&category.description, "  ", Style::default().fg(MUTED));
        }
        for skill in &category.skills {
            page.push(skill_bar(&skill.name, skill.level));
        }
        page.blank();
    }
}

fn projects(page: &mut PageBuilder, profile: &SiteProfile) {
    page.section(Section::Projects, "Featured Projects");
    page.push(Line::from(Span::styled(
        format!("  {} projects. Press g to search and open them.", profile.projects.len()),
        Style::default().fg(MUTED),
    )));
    page.blank();
    for project in &profile.projects {
        page.push(Line::from(vec![
            Span::styled(
                format!("  {}", sanitize_for_terminal(&project.title)),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", project.technologies.join(", ")),
                Style::default().fg(MUTED),
            ),
        ]));
        page.paragraph(&project.description, "    ", Style::default());
    }
    page.blank();
}

fn contact(page: &mut PageBuilder, profile: &SiteProfile) {
    page.section(Section::Contact, "Get in Touch");
    let info = &profile.contact;
    let rows = [
        ("Email", Some(info.email.as_str())),
        ("Phone", info.phone.as_deref()),
        ("Location", info.location.as_deref()),
        ("GitHub", info.github.as_deref()),
        ("LinkedIn", info.linkedin.as_deref()),
    ];
    for (label, value) in rows {
        if let Some(value) = value {
            page.push(Line::from(vec![
                Span::styled(format!("  {:<10}", label), Style::default().fg(MUTED)),
                Span::raw(sanitize_for_terminal(value)),
            ]));
        }
    }
    page.blank();
    page.push(Line::from(Span::styled(
        "  Press m to send a message.",
        Style::default().fg(ACCENT),
    )));
}

/// One row of selectable labels with the active one highlighted
fn tab_strip(labels: impl Iterator<Item = String>, active: &str, key: &str) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for label in labels {
        let style = if label == active {
            Style::default().fg(BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED)
        };
        spans.push(Span::styled(format!(" {} ", label), style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(format!(" ({} to switch)", key), Style::default().fg(MUTED)));
    Line::from(spans)
}

fn skill_bar(name: &str, level: u8) -> Line<'static> {
    let level = level.min(100);
    let filled = usize::from(level / 5);
    Line::from(vec![
        Span::raw(format!("    {:<18}", sanitize_for_terminal(name))),
        Span::styled("█".repeat(filled), Style::default().fg(ACCENT)),
        Span::styled("░".repeat(20 - filled), Style::default().fg(MUTED)),
        Span::styled(format!(" {:>3}%", level), Style::default().fg(MUTED)),
    ])
}
