//! TUI application state and event handling.
//!
//! The `App` owns every piece of view state and runs the main loop via `run()`:
//!
//! - **Page**: the scrollable site document with scroll-spy navigation
//! - **Gallery**: search box, tag filter and project list over the catalog
//! - **Overlays**: project popup, chat dock and contact form, stacked over either screen
//! - **Status messages**: transient feedback with expiry
//! - **Dirty state tracking**: redraw only when something changed (or every 100ms)
//!
//! Assistant calls never block the loop. Chat sessions and popups dispatch them onto the
//! tokio runtime and the loop drains finished replies on every tick.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::layout::Rect;
use tokio::runtime::Handle;

use super::events::{Action, InputMode, poll_event};
use super::layout::AppLayout;
use super::page::{AboutTab, PageDocument, PageView, build_page};
use super::rendering::{RenderState, render_ui};
use crate::assistant::{AssistantGateway, SiteContext};
use crate::catalog::ProjectCatalog;
use crate::chat::ChatSession;
use crate::clipboard::copy_link;
use crate::detail::DetailView;
use crate::filters::{ALL_TAG, FilterState, skill_filters};
use crate::models::{ContactField, ContactForm, Project, SiteProfile};
use crate::navigation::{SECTION_MARGIN, Section, active_section, section_top};

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;
/// Testimonials advance on this period
const TESTIMONIAL_ROTATION: Duration = Duration::from_secs(5);
/// Longest chat question accepted from the input line
const MAX_CHAT_INPUT: usize = 1000;
/// Longest contact field accepted from the form
const MAX_CONTACT_FIELD: usize = 2000;

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Page,
    Gallery,
}

/// Open contact form and its focused field
#[derive(Debug, Clone, Default)]
pub struct ContactOverlay {
    pub form: ContactForm,
    pub field: ContactField,
}

pub struct App {
    profile: SiteProfile,
    catalog: ProjectCatalog,
    gateway: AssistantGateway,
    site_context: Arc<SiteContext>,
    handle: Handle,
    screen: Screen,
    should_quit: bool,
    // Page
    document: PageDocument,
    page_dirty: bool,
    page_width: u16,
    viewport_height: u16,
    scroll: u16,
    about_tab: AboutTab,
    testimonial_index: usize,
    last_rotation: Instant,
    skill_filters: Vec<String>,
    skill_filter_idx: usize,
    // Gallery
    tags: Vec<String>,
    filter: FilterState,
    selected_idx: usize,
    // Overlays
    detail: Option<DetailView>,
    chat: Option<ChatSession>,
    chat_input: String,
    contact: Option<ContactOverlay>,
    status_message: Option<StatusMessage>,
    // Dirty state tracking for efficient rendering
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    pub fn new(
        profile: SiteProfile,
        catalog: ProjectCatalog,
        gateway: AssistantGateway,
        handle: Handle,
    ) -> Self {
        let site_context = Arc::new(SiteContext::from_profile(&profile));
        let skill_filters = skill_filters(&profile.skills);
        let tags = catalog.tags();

        Self {
            profile,
            catalog,
            gateway,
            site_context,
            handle,
            screen: Screen::Page,
            should_quit: false,
            document: PageDocument::default(),
            page_dirty: true,
            page_width: 0,
            viewport_height: 0,
            scroll: 0,
            about_tab: AboutTab::default(),
            testimonial_index: 0,
            last_rotation: Instant::now(),
            skill_filters,
            skill_filter_idx: 0,
            tags,
            filter: FilterState::default(),
            selected_idx: 0,
            detail: None,
            chat: None,
            chat_input: String::new(),
            contact: None,
            status_message: None,
            needs_redraw: true,
            last_draw_time: Instant::now(),
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let mut last_tick = Instant::now();

        while !self.should_quit {
            let now = Instant::now();
            self.tick(now.duration_since(last_tick));
            last_tick = now;

            let size = terminal.size()?;
            let body = AppLayout::new(Rect::new(0, 0, size.width, size.height)).body_area;
            self.layout_page(body.width, body.height);

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let elapsed = now.duration_since(self.last_draw_time);
            if self.needs_redraw || elapsed >= Duration::from_millis(100) {
                terminal.draw(|f| render_ui(f, &self.render_state()))?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100), self.input_mode())?;
            self.handle_action(action);
        }

        Ok(())
    }

    /// Key routing: the topmost overlay wins
    pub fn input_mode(&self) -> InputMode {
        if self.chat.is_some() {
            InputMode::Chat
        } else if self.contact.is_some() {
            InputMode::Contact
        } else if self.detail.is_some() {
            InputMode::Detail
        } else if self.screen == Screen::Gallery {
            InputMode::Gallery
        } else {
            InputMode::Page
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn render_state(&self) -> RenderState<'_> {
        RenderState {
            owner: &self.profile.name,
            screen: self.screen,
            active_section: self.active_section(),
            document: &self.document,
            scroll: self.scroll,
            filter: &self.filter,
            projects: self.filtered_projects(),
            total_projects: self.catalog.len(),
            selected_idx: self.selected_idx,
            detail: self.detail.as_ref(),
            chat: self.chat.as_ref(),
            chat_input: &self.chat_input,
            assistant_configured: self.gateway.is_configured(),
            contact: self.contact.as_ref(),
            status_message: self.status_message.as_ref(),
        }
    }

    /// Advance timers and drain finished assistant calls
    fn tick(&mut self, elapsed: Duration) {
        self.check_and_clear_expired_status();

        if let Some(chat) = self.chat.as_mut()
            && chat.poll() > 0
        {
            self.needs_redraw = true;
        }

        if let Some(detail) = self.detail.as_mut() {
            if detail.poll() {
                self.needs_redraw = true;
            }
            if detail.playback().is_playing() {
                detail.tick(elapsed);
                self.needs_redraw = true;
            }
        }

        if self.last_rotation.elapsed() >= TESTIMONIAL_ROTATION {
            self.rotate_testimonial();
        }
    }

    fn rotate_testimonial(&mut self) {
        self.last_rotation = Instant::now();
        let count = self.profile.testimonials.len();
        if count == 0 {
            return;
        }
        self.testimonial_index = (self.testimonial_index + 1) % count;
        if self.about_tab == AboutTab::Testimonials {
            self.page_dirty = true;
            self.needs_redraw = true;
        }
    }

    /// Rebuild the page document if its inputs or the width changed
    fn layout_page(&mut self, width: u16, height: u16) {
        if self.page_dirty || width != self.page_width {
            let view = PageView {
                about_tab: self.about_tab,
                testimonial_index: self.testimonial_index,
                skill_filters: &self.skill_filters,
                skill_filter: self.skill_filter(),
            };
            self.document = build_page(&self.profile, &view, width);
            self.page_width = width;
            self.page_dirty = false;
            self.needs_redraw = true;
        }
        self.viewport_height = height;
        self.scroll = self.scroll.min(self.max_scroll());
    }

    fn max_scroll(&self) -> u16 {
        self.document.height().saturating_sub(self.viewport_height)
    }

    fn skill_filter(&self) -> &str {
        self.skill_filters.get(self.skill_filter_idx).map(String::as_str).unwrap_or(ALL_TAG)
    }

    pub fn active_section(&self) -> Section {
        active_section(self.scroll, &self.document.bounds, SECTION_MARGIN)
    }

    fn filtered_projects(&self) -> Vec<&Project> {
        self.filter.apply(self.catalog.projects())
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    fn check_and_clear_expired_status(&mut self) {
        let expired = self
            .status_message
            .as_ref()
            .map(|msg| Instant::now() >= msg.expires_at)
            .unwrap_or(false);
        if expired {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action) {
        if action == Action::None {
            return;
        }
        self.needs_redraw = true;

        match action {
            Action::Quit => self.should_quit = true,
            Action::ToggleChat => self.toggle_chat(),
            _ => match self.input_mode() {
                InputMode::Page => self.handle_page_action(action),
                InputMode::Gallery => self.handle_gallery_action(action),
                InputMode::Detail => self.handle_detail_action(action),
                InputMode::Chat => self.handle_chat_action(action),
                InputMode::Contact => self.handle_contact_action(action),
            },
        }
    }

    fn handle_page_action(&mut self, action: Action) {
        let page = self.viewport_height.saturating_sub(2).max(1);
        match action {
            Action::MoveUp => self.scroll = self.scroll.saturating_sub(1),
            Action::MoveDown => self.scroll = (self.scroll + 1).min(self.max_scroll()),
            Action::PageUp => self.scroll = self.scroll.saturating_sub(page),
            Action::PageDown => {
                self.scroll = self.scroll.saturating_add(page).min(self.max_scroll())
            }
            Action::ScrollTop => self.scroll = 0,
            Action::JumpTo(section) => {
                if let Some(top) = section_top(section, &self.document.bounds) {
                    self.scroll = top.min(self.max_scroll());
                }
            }
            Action::OpenGallery => self.screen = Screen::Gallery,
            Action::CycleAboutTab => {
                self.about_tab = self.about_tab.next();
                self.page_dirty = true;
            }
            Action::CycleSkillFilter => {
                if !self.skill_filters.is_empty() {
                    self.skill_filter_idx = (self.skill_filter_idx + 1) % self.skill_filters.len();
                    self.page_dirty = true;
                }
            }
            Action::OpenContact => self.contact = Some(ContactOverlay::default()),
            _ => {}
        }
    }

    fn handle_gallery_action(&mut self, action: Action) {
        match action {
            Action::Back => {
                if self.filter.search_term().is_empty() {
                    self.screen = Screen::Page;
                } else {
                    self.filter.clear_search();
                    self.selected_idx = 0;
                }
            }
            Action::Input(c) => {
                if self.filter.push_char(c) {
                    self.selected_idx = 0;
                }
            }
            Action::DeleteChar => {
                if self.filter.pop_char() {
                    self.selected_idx = 0;
                }
            }
            Action::MoveUp => self.move_selection(-1),
            Action::MoveDown => self.move_selection(1),
            Action::PageUp => self.move_selection(-10),
            Action::PageDown => self.move_selection(10),
            Action::NextTag | Action::PrevTag => {
                self.filter.cycle_tag(&self.tags, action == Action::NextTag);
                self.selected_idx = 0;
            }
            Action::ResetFilters => {
                self.filter.reset();
                self.selected_idx = 0;
                let duration = STATUS_SUCCESS_DURATION_MS;
                self.set_status("✓ Filters reset", MessageType::Success, duration);
            }
            Action::Confirm => self.open_selected_project(),
            _ => {}
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let total = self.filtered_projects().len();
        if total == 0 {
            self.selected_idx = 0;
            return;
        }
        let new_idx = self.selected_idx.saturating_add_signed(delta);
        self.selected_idx = new_idx.min(total - 1);
    }

    fn open_selected_project(&mut self) {
        let Some(id) = self.filtered_projects().get(self.selected_idx).map(|p| p.id) else {
            let duration = STATUS_ERROR_DURATION_MS;
            self.set_status("✗ No project selected", MessageType::Error, duration);
            return;
        };
        self.open_project(id);
    }

    /// Open the popup for `id`, replacing any open one
    pub fn open_project(&mut self, id: u32) {
        self.detail =
            DetailView::open(&self.catalog, id, self.gateway.clone(), self.handle.clone());
        if self.detail.is_none() {
            self.set_status(
                format!("✗ Project {} not found", id),
                MessageType::Error,
                STATUS_ERROR_DURATION_MS,
            );
        }
    }

    fn handle_detail_action(&mut self, action: Action) {
        let Some(detail) = self.detail.as_mut() else {
            return;
        };

        match action {
            Action::Back => self.detail = None,
            Action::NextTab => detail.next_tab(),
            Action::PrevTab => detail.prev_tab(),
            Action::SelectTab(tab) => detail.select_tab(tab),
            Action::NextImage => detail.next_image(),
            Action::PrevImage => detail.prev_image(),
            Action::CycleLink => detail.cycle_link(),
            Action::TogglePlayback => {
                if detail.project().has_demo_video() {
                    detail.toggle_playback();
                } else {
                    self.set_status(
                        "✗ No demo video for this project",
                        MessageType::Error,
                        STATUS_ERROR_DURATION_MS,
                    );
                }
            }
            Action::CopyLink => self.copy_selected_link(),
            _ => {}
        }
    }

    fn copy_selected_link(&mut self) {
        let Some(url) =
            self.detail.as_ref().and_then(|d| d.selected_link()).map(|link| link.url.to_string())
        else {
            self.set_status("✗ No link to copy", MessageType::Error, STATUS_ERROR_DURATION_MS);
            return;
        };

        match copy_link(&url) {
            Ok(()) => self.set_status(
                "✓ Link copied to clipboard",
                MessageType::Success,
                STATUS_SUCCESS_DURATION_MS,
            ),
            Err(e) => self.set_status(
                format!("✗ Clipboard error: {}", e),
                MessageType::Error,
                STATUS_ERROR_DURATION_MS,
            ),
        }
    }

    /// Open a fresh chat session, or close the current one and drop its pending replies
    fn toggle_chat(&mut self) {
        if self.chat.take().is_some() {
            self.chat_input.clear();
            return;
        }
        self.chat = Some(ChatSession::new(
            self.gateway.clone(),
            Arc::clone(&self.site_context),
            self.handle.clone(),
        ));
    }

    fn handle_chat_action(&mut self, action: Action) {
        match action {
            Action::Input(c) => {
                if self.chat_input.chars().count() < MAX_CHAT_INPUT {
                    self.chat_input.push(c);
                }
            }
            Action::DeleteChar => {
                self.chat_input.pop();
            }
            Action::Submit => {
                if let Some(chat) = self.chat.as_mut()
                    && chat.submit(&self.chat_input)
                {
                    self.chat_input.clear();
                }
            }
            _ => {}
        }
    }

    fn handle_contact_action(&mut self, action: Action) {
        let Some(contact) = self.contact.as_mut() else {
            return;
        };

        match action {
            Action::Back => self.contact = None,
            Action::NextField => contact.field = contact.field.next(),
            Action::PrevField => contact.field = contact.field.prev(),
            Action::Input(c) => {
                let value = contact.form.field_mut(contact.field);
                if value.chars().count() < MAX_CONTACT_FIELD {
                    value.push(c);
                }
            }
            Action::DeleteChar => {
                contact.form.field_mut(contact.field).pop();
            }
            Action::Confirm => {
                if contact.field == ContactField::Message {
                    self.submit_contact();
                } else {
                    contact.field = contact.field.next();
                }
            }
            Action::Submit => self.submit_contact(),
            _ => {}
        }
    }

    fn submit_contact(&mut self) {
        let Some(contact) = self.contact.as_mut() else {
            return;
        };

        match contact.form.submit() {
            Ok(submission) => {
                tracing::info!(
                    name = %submission.name,
                    email = %submission.email,
                    chars = submission.message.chars().count(),
                    submitted_at = %submission.submitted_at,
                    "Contact message submitted"
                );
                self.contact = None;
                self.set_status(
                    format!("✓ Thanks, {}! Your message has been received.", submission.name),
                    MessageType::Success,
                    STATUS_SUCCESS_DURATION_MS,
                );
            }
            Err(e) => {
                let crate::models::ValidationError::MissingField(field) = &e;
                contact.field = *field;
                self.set_status(format!("✗ {}", e), MessageType::Error, STATUS_ERROR_DURATION_MS);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::{GeminiTransport, UNAVAILABLE_REPLY};
    use crate::detail::{DetailTab, Explanation};
    use crate::parsers::builtin_profile;

    fn create_test_app(runtime: &tokio::runtime::Runtime) -> App {
        let profile = builtin_profile().unwrap();
        let catalog = ProjectCatalog::new(profile.projects.clone()).unwrap();
        // No credential: the transport is never reached
        let gateway = AssistantGateway::new(
            None,
            Arc::new(GeminiTransport::new("http://127.0.0.1:9", "test-model")),
        );
        let mut app = App::new(profile, catalog, gateway, runtime.handle().clone());
        app.layout_page(80, 20);
        app
    }

    #[test]
    fn test_app_new_initializes_state() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let app = create_test_app(&runtime);

        assert_eq!(app.screen, Screen::Page);
        assert_eq!(app.input_mode(), InputMode::Page);
        assert_eq!(app.scroll, 0);
        assert_eq!(app.active_section(), Section::Home);
        assert_eq!(app.tags[0], "All");
        assert!(!app.should_quit());
    }

    #[test]
    fn test_handle_action_quit() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = create_test_app(&runtime);
        app.handle_action(Action::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn test_scroll_bounds() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = create_test_app(&runtime);

        app.handle_action(Action::MoveUp);
        assert_eq!(app.scroll, 0);

        for _ in 0..10_000 {
            app.handle_action(Action::MoveDown);
        }
        assert_eq!(app.scroll, app.max_scroll());

        app.handle_action(Action::ScrollTop);
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn test_jump_to_section_updates_scroll_spy() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = create_test_app(&runtime);

        app.handle_action(Action::JumpTo(Section::Skills));
        assert_eq!(app.active_section(), Section::Skills);

        app.handle_action(Action::JumpTo(Section::About));
        assert_eq!(app.active_section(), Section::About);
    }

    #[test]
    fn test_gallery_search_filters_and_resets_selection() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = create_test_app(&runtime);
        app.handle_action(Action::OpenGallery);
        assert_eq!(app.input_mode(), InputMode::Gallery);

        app.handle_action(Action::MoveDown);
        assert_eq!(app.selected_idx, 1);

        for c in "python".chars() {
            app.handle_action(Action::Input(c));
        }
        assert_eq!(app.selected_idx, 0);
        let titles: Vec<u32> = app.filtered_projects().iter().map(|p| p.id).collect();
        assert_eq!(titles, vec![2, 3]);
    }

    #[test]
    fn test_gallery_escape_clears_then_leaves() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = create_test_app(&runtime);
        app.handle_action(Action::OpenGallery);
        app.handle_action(Action::Input('x'));

        app.handle_action(Action::Back);
        assert_eq!(app.filter.search_term(), "");
        assert_eq!(app.screen, Screen::Gallery);

        app.handle_action(Action::Back);
        assert_eq!(app.screen, Screen::Page);
    }

    #[test]
    fn test_gallery_tag_cycle_and_reset() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = create_test_app(&runtime);
        app.handle_action(Action::OpenGallery);

        app.handle_action(Action::NextTag);
        assert_eq!(app.filter.selected_tag(), "React");
        assert_eq!(app.filtered_projects().len(), 1);

        app.handle_action(Action::ResetFilters);
        assert!(app.filter.is_identity());
        assert_eq!(
            app.status_message.as_ref().map(|m| m.message_type),
            Some(MessageType::Success)
        );
    }

    #[test]
    fn test_move_selection_bounds() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = create_test_app(&runtime);
        app.handle_action(Action::OpenGallery);

        app.handle_action(Action::PageDown);
        assert_eq!(app.selected_idx, 2);
        app.handle_action(Action::PageUp);
        assert_eq!(app.selected_idx, 0);
    }

    #[test]
    fn test_open_project_from_gallery() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = create_test_app(&runtime);
        app.handle_action(Action::OpenGallery);
        app.handle_action(Action::MoveDown);
        app.handle_action(Action::Confirm);

        assert_eq!(app.input_mode(), InputMode::Detail);
        assert_eq!(app.detail.as_ref().map(|d| d.project().id), Some(2));

        app.handle_action(Action::Back);
        assert!(app.detail.is_none());
        assert_eq!(app.input_mode(), InputMode::Gallery);
    }

    #[test]
    fn test_open_with_empty_results() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = create_test_app(&runtime);
        app.handle_action(Action::OpenGallery);
        for c in "zzzz".chars() {
            app.handle_action(Action::Input(c));
        }
        app.handle_action(Action::Confirm);

        assert!(app.detail.is_none());
        assert_eq!(app.status_message.as_ref().map(|m| m.message_type), Some(MessageType::Error));
    }

    #[test]
    fn test_open_unknown_project() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = create_test_app(&runtime);
        app.open_project(42);
        assert!(app.detail.is_none());
        assert!(app.status_message.as_ref().unwrap().text.contains("not found"));
    }

    #[test]
    fn test_explainer_unconfigured_reply() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = create_test_app(&runtime);
        app.open_project(1);
        app.handle_action(Action::SelectTab(DetailTab::Explainer));

        let detail = app.detail.as_mut().unwrap();
        assert!(runtime.block_on(detail.wait_for_explanation()));
        assert_eq!(detail.explanation(), &Explanation::Ready(UNAVAILABLE_REPLY.to_string()));
    }

    #[test]
    fn test_playback_without_video_reports_error() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = create_test_app(&runtime);
        app.open_project(3);
        app.handle_action(Action::TogglePlayback);

        assert!(!app.detail.as_ref().unwrap().playback().is_playing());
        assert_eq!(app.status_message.as_ref().map(|m| m.message_type), Some(MessageType::Error));
    }

    #[test]
    fn test_chat_toggle_and_submit() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = create_test_app(&runtime);

        app.handle_action(Action::ToggleChat);
        assert_eq!(app.input_mode(), InputMode::Chat);

        for c in "hi".chars() {
            app.handle_action(Action::Input(c));
        }
        app.handle_action(Action::Submit);
        assert!(app.chat_input.is_empty());

        let chat = app.chat.as_mut().unwrap();
        assert_eq!(chat.turns().len(), 1);
        assert!(runtime.block_on(chat.wait_for_reply()));
        assert_eq!(chat.turns()[1].text, UNAVAILABLE_REPLY);

        app.handle_action(Action::ToggleChat);
        assert!(app.chat.is_none());
        assert_eq!(app.input_mode(), InputMode::Page);
    }

    #[test]
    fn test_chat_blank_submit_keeps_input() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = create_test_app(&runtime);
        app.handle_action(Action::ToggleChat);
        app.handle_action(Action::Input(' '));
        app.handle_action(Action::Submit);

        assert_eq!(app.chat_input, " ");
        assert!(app.chat.as_ref().unwrap().turns().is_empty());
    }

    #[test]
    fn test_reopened_chat_starts_fresh() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = create_test_app(&runtime);
        app.handle_action(Action::ToggleChat);
        app.handle_action(Action::Input('a'));
        app.handle_action(Action::Submit);
        let first = app.chat.as_ref().unwrap().id();

        app.handle_action(Action::ToggleChat);
        app.handle_action(Action::ToggleChat);
        let chat = app.chat.as_ref().unwrap();
        assert_ne!(chat.id(), first);
        assert!(chat.turns().is_empty());
    }

    #[test]
    fn test_contact_form_validation_and_submit() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = create_test_app(&runtime);
        app.handle_action(Action::OpenContact);
        assert_eq!(app.input_mode(), InputMode::Contact);

        app.handle_action(Action::Input('S'));
        app.handle_action(Action::Submit);
        let contact = app.contact.as_ref().unwrap();
        assert_eq!(contact.field, ContactField::Email);
        assert_eq!(app.status_message.as_ref().map(|m| m.message_type), Some(MessageType::Error));

        for c in "s@example.com".chars() {
            app.handle_action(Action::Input(c));
        }
        app.handle_action(Action::Confirm);
        for c in "Hello".chars() {
            app.handle_action(Action::Input(c));
        }
        app.handle_action(Action::Confirm);

        assert!(app.contact.is_none());
        let status = app.status_message.as_ref().unwrap();
        assert_eq!(status.message_type, MessageType::Success);
        assert!(status.text.contains("Thanks, S!"));
    }

    #[test]
    fn test_about_tab_and_skill_filter_rebuild_page() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = create_test_app(&runtime);

        app.handle_action(Action::CycleAboutTab);
        assert_eq!(app.about_tab, AboutTab::Experience);
        assert!(app.page_dirty);
        app.layout_page(80, 20);
        assert!(!app.page_dirty);

        app.handle_action(Action::CycleSkillFilter);
        assert_eq!(app.skill_filter(), "Development");
    }

    #[test]
    fn test_testimonial_rotation_wraps() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = create_test_app(&runtime);
        let count = app.profile.testimonials.len();

        for _ in 0..count {
            app.rotate_testimonial();
        }
        assert_eq!(app.testimonial_index, 0);
    }

    #[test]
    fn test_status_message_expiry() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = create_test_app(&runtime);

        app.set_status("Test", MessageType::Success, 0);
        std::thread::sleep(Duration::from_millis(5));
        app.check_and_clear_expired_status();
        assert!(app.status_message.is_none());

        app.set_status("Test", MessageType::Error, 60_000);
        app.check_and_clear_expired_status();
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_handle_action_none_keeps_clean() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = create_test_app(&runtime);
        app.needs_redraw = false;
        app.handle_action(Action::None);
        assert!(!app.needs_redraw);
    }
}
