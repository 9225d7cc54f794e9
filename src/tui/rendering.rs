use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

use super::app::{ContactOverlay, MessageType, Screen, StatusMessage};
use super::layout::{AppLayout, GalleryLayout};
use super::overlays::{render_chat, render_contact, render_detail};
use super::page::PageDocument;
use crate::chat::ChatSession;
use crate::detail::DetailView;
use crate::filters::FilterState;
use crate::models::Project;
use crate::navigation::{Section, show_back_to_top};
use crate::utils::sanitize_for_terminal;

pub(super) const MUTED: Color = Color::Rgb(113, 113, 122);
pub(super) const BRIGHT: Color = Color::Rgb(250, 250, 250);
pub(super) const ACCENT: Color = Color::Rgb(99, 102, 241); // Indigo
pub(super) const SUCCESS: Color = Color::Rgb(16, 185, 129); // Emerald
pub(super) const ERROR: Color = Color::Rgb(239, 68, 68); // Red
pub(super) const SURFACE: Color = Color::Rgb(24, 24, 27);

/// Everything a frame needs, borrowed from the `App`
pub struct RenderState<'a> {
    pub owner: &'a str,
    pub screen: Screen,
    pub active_section: Section,
    pub document: &'a PageDocument,
    pub scroll: u16,
    pub filter: &'a FilterState,
    pub projects: Vec<&'a Project>,
    pub total_projects: usize,
    pub selected_idx: usize,
    pub detail: Option<&'a DetailView>,
    pub chat: Option<&'a ChatSession>,
    pub chat_input: &'a str,
    pub assistant_configured: bool,
    pub contact: Option<&'a ContactOverlay>,
    pub status_message: Option<&'a StatusMessage>,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState<'_>) {
    let layout = AppLayout::new(frame.area());

    render_nav_bar(frame, layout.nav_area, state.owner, state.active_section);
    match state.screen {
        Screen::Page => render_page(frame, layout.body_area, state.document, state.scroll),
        Screen::Gallery => render_gallery(frame, layout.body_area, state),
    }
    render_status_bar(frame, layout.status_area, state);

    // Overlays, bottom to top
    if let Some(detail) = state.detail {
        render_detail(frame, layout.body_area, detail);
    }
    if let Some(contact) = state.contact {
        render_contact(frame, layout.body_area, contact);
    }
    if let Some(chat) = state.chat {
        render_chat(frame, layout.body_area, chat, state.chat_input, state.assistant_configured);
    }
}

fn render_nav_bar(frame: &mut Frame, area: Rect, owner: &str, active: Section) {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", sanitize_for_terminal(owner)),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
    ];

    for (idx, section) in Section::ALL.iter().enumerate() {
        let style = if *section == active {
            Style::default().fg(BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED)
        };
        spans.push(Span::styled(format!(" {} {} ", idx + 1, section), style));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(SURFACE));
    frame.render_widget(paragraph, area);
}

fn render_page(frame: &mut Frame, area: Rect, document: &PageDocument, scroll: u16) {
    let paragraph = Paragraph::new(Text::from(document.lines.clone())).scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

fn render_gallery(frame: &mut Frame, area: Rect, state: &RenderState<'_>) {
    let layout = GalleryLayout::new(area);

    render_search_box(frame, layout.search_area, state.filter);
    render_project_list(frame, layout.list_area, &state.projects, state.selected_idx);
    render_project_preview(
        frame,
        layout.preview_area,
        state.projects.get(state.selected_idx).copied(),
    );
}

fn render_search_box(frame: &mut Frame, area: Rect, filter: &FilterState) {
    let line = Line::from(vec![
        Span::styled("Search: ", Style::default().fg(MUTED)),
        Span::raw(sanitize_for_terminal(filter.search_term())),
        Span::styled("█", Style::default().fg(ACCENT)),
        Span::raw("   "),
        Span::styled("Tag: ", Style::default().fg(MUTED)),
        Span::styled(
            sanitize_for_terminal(filter.selected_tag()),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(MUTED))
            .title(" Projects "),
    );
    frame.render_widget(paragraph, area);
}

fn render_project_list(frame: &mut Frame, area: Rect, projects: &[&Project], selected_idx: usize) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(MUTED))
        .title(" Results ");

    if projects.is_empty() {
        let empty = Paragraph::new("No projects found matching your criteria.")
            .style(Style::default().fg(MUTED))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = projects
        .iter()
        .enumerate()
        .map(|(idx, project)| {
            let content = format!(
                "{} | {}",
                sanitize_for_terminal(&project.title),
                sanitize_for_terminal(&project.category)
            );

            let style = if idx == selected_idx {
                Style::default().fg(BRIGHT).bg(SUCCESS).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED)
            };

            ListItem::new(content).style(style)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn render_project_preview(frame: &mut Frame, area: Rect, project: Option<&Project>) {
    let content = if let Some(project) = project {
        let mut lines = vec![
            Line::from(Span::styled(
                sanitize_for_terminal(&project.title),
                Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(sanitize_for_terminal(&project.description)),
            Line::from(""),
            Line::from(vec![
                Span::styled("Tech: ", Style::default().fg(MUTED)),
                Span::raw(sanitize_for_terminal(&project.technologies.join(", "))),
            ]),
        ];
        if !project.features.is_empty() {
            lines.push(Line::from(""));
        }
        for feature in &project.features {
            lines.push(Line::from(format!("• {}", sanitize_for_terminal(feature))));
        }
        Text::from(lines)
    } else {
        Text::from("No project selected")
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED))
                .title(" Preview "),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState<'_>) {
    let base = Style::default().fg(BRIGHT).bg(SURFACE);

    if let Some(msg) = state.status_message {
        let color = match msg.message_type {
            MessageType::Success => SUCCESS,
            MessageType::Error => ERROR,
        };
        let paragraph = Paragraph::new(format!(" {} ", msg.text)).style(base.fg(color));
        frame.render_widget(paragraph, area);
        return;
    }

    let mut parts = vec![];
    if state.chat.is_some() {
        parts.push("Enter: send".to_string());
        parts.push("Esc: close chat".to_string());
    } else if state.contact.is_some() {
        parts.push("Tab: next field".to_string());
        parts.push("Ctrl+S: send".to_string());
        parts.push("Esc: cancel".to_string());
    } else if state.detail.is_some() {
        parts.push("←/→: tabs".to_string());
        parts.push("[/]: images".to_string());
        parts.push("Space: play".to_string());
        parts.push("o: link".to_string());
        parts.push("Ctrl+Y: copy".to_string());
        parts.push("Esc: close".to_string());
    } else {
        match state.screen {
            Screen::Page => {
                if show_back_to_top(state.scroll) {
                    parts.push("t: ↑ back to top".to_string());
                }
                parts.push("1-5: jump".to_string());
                parts.push("g: projects".to_string());
                parts.push("a: about tab".to_string());
                parts.push("f: skill filter".to_string());
                parts.push("m: contact".to_string());
                parts.push("c: chat".to_string());
                parts.push("q: quit".to_string());
            }
            Screen::Gallery => {
                if state.projects.len() < state.total_projects {
                    parts.push(format!(
                        "{}/{} projects",
                        state.projects.len(),
                        state.total_projects
                    ));
                } else {
                    parts.push(format!("{} projects", state.total_projects));
                }
                parts.push("Tab: tag".to_string());
                parts.push("Enter: open".to_string());
                parts.push("Ctrl+R: reset".to_string());
                parts.push("Esc: back".to_string());
            }
        }
    }

    frame.render_widget(Paragraph::new(format!(" {} ", parts.join(" | "))).style(base), area);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::navigation::SectionBounds;

    fn create_test_project(id: u32, title: &str) -> Project {
        Project {
            id,
            title: title.to_string(),
            description: "A test project".to_string(),
            category: "Web Development".to_string(),
            technologies: vec!["Rust".to_string()],
            features: vec!["Fast".to_string()],
            image: String::new(),
            demo_video: String::new(),
            images: vec![],
            live_demo: None,
            source_code: None,
        }
    }

    fn create_test_document() -> PageDocument {
        PageDocument {
            lines: (0..40).map(|i| Line::from(format!("line {}", i))).collect(),
            bounds: vec![
                SectionBounds { section: Section::Home, top: 0 },
                SectionBounds { section: Section::About, top: 10 },
            ],
        }
    }

    fn base_state<'a>(
        document: &'a PageDocument,
        filter: &'a FilterState,
        projects: Vec<&'a Project>,
    ) -> RenderState<'a> {
        RenderState {
            owner: "Test Owner",
            screen: Screen::Page,
            active_section: Section::Home,
            document,
            scroll: 0,
            filter,
            total_projects: projects.len(),
            projects,
            selected_idx: 0,
            detail: None,
            chat: None,
            chat_input: "",
            assistant_configured: false,
            contact: None,
            status_message: None,
        }
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal.backend().buffer().content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_render_page_screen() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let document = create_test_document();
        let filter = FilterState::default();
        let mut state = base_state(&document, &filter, vec![]);
        state.scroll = 20;

        terminal.draw(|f| render_ui(f, &state)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Test Owner"));
        assert!(text.contains("line 20"));
        assert!(text.contains("back to top"));
    }

    #[test]
    fn test_render_gallery_with_projects() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let document = PageDocument::default();
        let filter = FilterState::new("", "Rust");
        let projects = [create_test_project(1, "First"), create_test_project(2, "Second")];
        let mut state = base_state(&document, &filter, projects.iter().collect());
        state.screen = Screen::Gallery;
        state.selected_idx = 1;

        terminal.draw(|f| render_ui(f, &state)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Second"));
        assert!(text.contains("Tag: Rust"));
    }

    #[test]
    fn test_render_gallery_empty_results() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let document = PageDocument::default();
        let filter = FilterState::new("zzz", "All");
        let mut state = base_state(&document, &filter, vec![]);
        state.screen = Screen::Gallery;
        state.total_projects = 3;

        terminal.draw(|f| render_ui(f, &state)).unwrap();

        assert!(buffer_text(&terminal).contains("No projects found"));
    }

    #[test]
    fn test_render_status_message() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let document = PageDocument::default();
        let filter = FilterState::default();
        let message = StatusMessage {
            text: "✓ Link copied".to_string(),
            message_type: MessageType::Success,
            expires_at: std::time::Instant::now(),
        };
        let mut state = base_state(&document, &filter, vec![]);
        state.status_message = Some(&message);

        terminal.draw(|f| render_ui(f, &state)).unwrap();

        assert!(buffer_text(&terminal).contains("Link copied"));
    }

    #[test]
    fn test_render_tiny_terminal() {
        let mut terminal = Terminal::new(TestBackend::new(10, 3)).unwrap();
        let document = create_test_document();
        let filter = FilterState::default();
        let state = base_state(&document, &filter, vec![]);

        // Just verify it doesn't panic
        terminal.draw(|f| render_ui(f, &state)).unwrap();
    }
}
