//! Popups drawn over the page or gallery.
//!
//! Each overlay clears its own rectangle first so the screen underneath never bleeds through.

use chrono::Utc;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, LineGauge, Paragraph, Tabs, Wrap};

use super::app::ContactOverlay;
use super::layout::{centered_rect, chat_dock};
use super::rendering::{ACCENT, BRIGHT, MUTED, SUCCESS};
use super::timestamps::format_turn_time;
use crate::assistant::UNAVAILABLE_REPLY;
use crate::chat::{ChatSession, SessionStatus};
use crate::detail::{DetailTab, DetailView, Explanation};
use crate::models::ContactField;
use crate::utils::sanitize_for_terminal;

fn overlay_block(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title(title)
}

/// Project popup: tab strip, then the active tab's content
pub fn render_detail(frame: &mut Frame, area: Rect, detail: &DetailView) {
    let popup = centered_rect(area, 80, 80);
    frame.render_widget(Clear, popup);

    let project = detail.project();
    let block = overlay_block(format!(" {} ", sanitize_for_terminal(&project.title)));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(inner);

    let titles: Vec<String> = DetailTab::ALL.iter().map(ToString::to_string).collect();
    let tabs = Tabs::new(titles)
        .select(detail.active_tab().index())
        .style(Style::default().fg(MUTED))
        .highlight_style(Style::default().fg(BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, chunks[0]);

    match detail.active_tab() {
        DetailTab::Overview => render_overview(frame, chunks[1], detail),
        DetailTab::Technologies => render_technologies(frame, chunks[1], detail),
        DetailTab::Gallery => render_media(frame, chunks[1], detail),
        DetailTab::Explainer => render_explainer(frame, chunks[1], detail),
    }
}

fn render_overview(frame: &mut Frame, area: Rect, detail: &DetailView) {
    let project = detail.project();
    let mut lines = vec![
        Line::from(sanitize_for_terminal(&project.description)),
        Line::from(""),
        Line::from(vec![
            Span::styled("Category: ", Style::default().fg(MUTED)),
            Span::raw(sanitize_for_terminal(&project.category)),
        ]),
    ];

    if !project.features.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Key Features",
            Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD),
        )));
        for feature in &project.features {
            lines.push(Line::from(format!("• {}", sanitize_for_terminal(feature))));
        }
    }

    lines.push(Line::from(""));
    let links = detail.links();
    if links.is_empty() {
        lines.push(Line::from(Span::styled("No public links", Style::default().fg(MUTED))));
    }
    for (idx, link) in links.iter().enumerate() {
        let (marker, style) = if idx == detail.selected_link_index() {
            ("▸ ", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        } else {
            ("  ", Style::default().fg(MUTED))
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{}{}: ", marker, link.kind.label()), style),
            Span::raw(sanitize_for_terminal(link.url)),
        ]));
    }

    frame.render_widget(Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false }), area);
}

fn render_technologies(frame: &mut Frame, area: Rect, detail: &DetailView) {
    let lines: Vec<Line> = detail
        .project()
        .technologies
        .iter()
        .map(|tech| {
            Line::from(vec![
                Span::styled("◆ ", Style::default().fg(ACCENT)),
                Span::raw(sanitize_for_terminal(tech)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(Text::from(lines)), area);
}

fn render_media(frame: &mut Frame, area: Rect, detail: &DetailView) {
    let project = detail.project();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let video = if project.has_demo_video() {
        let state = if detail.playback().is_playing() { "▶ Playing" } else { "⏸ Paused" };
        vec![
            Line::from(vec![
                Span::styled("Demo video: ", Style::default().fg(MUTED)),
                Span::raw(sanitize_for_terminal(&project.demo_video)),
            ]),
            Line::from(format!(
                "{}  {}s / {}s",
                state,
                detail.clock().position().as_secs(),
                detail.clock().duration().as_secs()
            )),
        ]
    } else {
        vec![Line::from(Span::styled("No demo video", Style::default().fg(MUTED)))]
    };
    frame.render_widget(Paragraph::new(Text::from(video)), chunks[0]);

    if project.has_demo_video() {
        let gauge = LineGauge::default()
            .filled_style(Style::default().fg(SUCCESS))
            .unfilled_style(Style::default().fg(MUTED))
            .ratio((detail.playback().progress() / 100.0).clamp(0.0, 1.0));
        frame.render_widget(gauge, chunks[1]);
    }

    let image = match detail.current_image() {
        Some(image) => vec![
            Line::from(format!("Image {}/{}", detail.image_index() + 1, project.images.len())),
            Line::from(Span::styled(sanitize_for_terminal(image), Style::default().fg(ACCENT))),
        ],
        None => vec![Line::from(Span::styled("No images", Style::default().fg(MUTED)))],
    };
    frame.render_widget(Paragraph::new(Text::from(image)).wrap(Wrap { trim: false }), chunks[2]);
}

fn render_explainer(frame: &mut Frame, area: Rect, detail: &DetailView) {
    let text = match detail.explanation() {
        Explanation::NotRequested => {
            Text::styled("Select this tab to ask the assistant.", Style::default().fg(MUTED))
        }
        Explanation::Loading => {
            Text::styled("Generating explanation...", Style::default().fg(MUTED))
        }
        Explanation::Ready(reply) => Text::from(sanitize_for_terminal(reply)),
    };

    frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: false }), area);
}

/// Chat dock: transcript pinned to its newest line above a one-line input box
pub fn render_chat(
    frame: &mut Frame,
    area: Rect,
    chat: &ChatSession,
    input: &str,
    configured: bool,
) {
    let dock = chat_dock(area);
    frame.render_widget(Clear, dock);

    let block = overlay_block(" AI Assistant ".to_string());
    let inner = block.inner(dock);
    frame.render_widget(block, dock);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .split(inner);

    let lines = transcript_lines(chat, configured, chunks[0].width);
    let overflow = lines.len().saturating_sub(usize::from(chunks[0].height));
    let scroll = u16::try_from(overflow).unwrap_or(u16::MAX);
    frame.render_widget(Paragraph::new(Text::from(lines)).scroll((scroll, 0)), chunks[0]);

    let input_box = Paragraph::new(Line::from(vec![
        Span::raw(sanitize_for_terminal(input)),
        Span::styled("█", Style::default().fg(ACCENT)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(MUTED))
            .title(" Ask me anything "),
    );
    frame.render_widget(input_box, chunks[1]);
}

/// Transcript pre-wrapped to `width` so the newest line can be pinned to the bottom
fn transcript_lines(chat: &ChatSession, configured: bool, width: u16) -> Vec<Line<'static>> {
    let width = usize::from(width).max(10);
    let now = Utc::now();
    let mut lines = Vec::new();

    if !configured && chat.turns().is_empty() {
        for row in textwrap::wrap(UNAVAILABLE_REPLY, width) {
            lines.push(Line::from(Span::styled(row.into_owned(), Style::default().fg(MUTED))));
        }
    }

    for turn in chat.turns() {
        let (label, color) = if turn.is_user() { ("You", BRIGHT) } else { ("AI", ACCENT) };
        lines.push(Line::from(vec![
            Span::styled(label, Style::default().fg(color).add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("  {}", format_turn_time(&turn.created_at, &now)),
                Style::default().fg(MUTED),
            ),
        ]));
        for row in textwrap::wrap(&sanitize_for_terminal(&turn.text), width) {
            lines.push(Line::from(row.into_owned()));
        }
        lines.push(Line::from(""));
    }

    if chat.status() == SessionStatus::AwaitingReply {
        let mut thinking = "AI is thinking...".to_string();
        if chat.queued_len() > 0 {
            thinking.push_str(&format!(" ({} queued)", chat.queued_len()));
        }
        lines.push(Line::from(Span::styled(thinking, Style::default().fg(MUTED))));
    }

    lines
}

/// Contact form: one bordered box per field, focused field highlighted
pub fn render_contact(frame: &mut Frame, area: Rect, contact: &ContactOverlay) {
    let popup = centered_rect(area, 60, 70);
    frame.render_widget(Clear, popup);

    let block = overlay_block(" Get In Touch ".to_string());
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3), Constraint::Min(3)])
        .split(inner);

    for (field, chunk) in ContactField::ALL.iter().zip(chunks.iter()) {
        let focused = *field == contact.field;
        let border = if focused { ACCENT } else { MUTED };

        let mut spans = vec![Span::raw(sanitize_for_terminal(contact.form.field(*field)))];
        if focused {
            spans.push(Span::styled("█", Style::default().fg(ACCENT)));
        }

        let paragraph = Paragraph::new(Line::from(spans)).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(format!(" {} ", field)),
        );
        frame.render_widget(paragraph, *chunk);
    }
}
