use std::fmt;
use std::time::Duration;

use tokio::runtime::Handle;

use super::playback::{MediaClock, Playback};
use crate::assistant::{
    AssistantGateway, Completion, EXPLAINER_QUESTION, ProjectContext, PromptContext, ReplyChannel,
    reply_text,
};
use crate::catalog::ProjectCatalog;
use crate::models::{Project, ProjectId, ProjectLink};

/// Length of the simulated demo video
pub const DEMO_VIDEO_LENGTH: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    Overview,
    Technologies,
    Gallery,
    Explainer,
}

impl DetailTab {
    pub const ALL: [DetailTab; 4] =
        [DetailTab::Overview, DetailTab::Technologies, DetailTab::Gallery, DetailTab::Explainer];

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn index(self) -> usize {
        match self {
            DetailTab::Overview => 0,
            DetailTab::Technologies => 1,
            DetailTab::Gallery => 2,
            DetailTab::Explainer => 3,
        }
    }
}

impl fmt::Display for DetailTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DetailTab::Overview => "Overview",
            DetailTab::Technologies => "Technologies",
            DetailTab::Gallery => "Gallery",
            DetailTab::Explainer => "AI Explainer",
        };
        write!(f, "{}", label)
    }
}

/// Explainer text, fetched at most once per popup
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Explanation {
    #[default]
    NotRequested,
    Loading,
    Ready(String),
}

/// State of one open project popup
///
/// Built fresh for every opening; nothing carries over between popups. Dropping the view
/// discards a pending explainer reply.
#[derive(Debug)]
pub struct DetailView {
    project: Project,
    active_tab: DetailTab,
    image_index: usize,
    playback: Playback,
    clock: MediaClock,
    explanation: Explanation,
    selected_link: usize,
    gateway: AssistantGateway,
    replies: ReplyChannel<ProjectId>,
}

impl DetailView {
    /// Open the popup for `id`; `None` if the catalog has no such project
    pub fn open(
        catalog: &ProjectCatalog,
        id: ProjectId,
        gateway: AssistantGateway,
        handle: Handle,
    ) -> Option<Self> {
        let Some(project) = catalog.get(id) else {
            tracing::debug!(id, "No project with this id; popup not opened");
            return None;
        };

        tracing::debug!(id, title = %project.title, "Project popup opened");
        Some(Self {
            project: project.clone(),
            active_tab: DetailTab::default(),
            image_index: 0,
            playback: Playback::default(),
            clock: MediaClock::new(DEMO_VIDEO_LENGTH),
            explanation: Explanation::default(),
            selected_link: 0,
            gateway,
            replies: ReplyChannel::new(handle),
        })
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn active_tab(&self) -> DetailTab {
        self.active_tab
    }

    /// Switch tabs. The first entry into the explainer tab sends the one explainer request.
    pub fn select_tab(&mut self, tab: DetailTab) {
        self.active_tab = tab;
        if tab == DetailTab::Explainer && self.explanation == Explanation::NotRequested {
            self.request_explanation();
        }
    }

    pub fn next_tab(&mut self) {
        self.select_tab(self.active_tab.next());
    }

    pub fn prev_tab(&mut self) {
        self.select_tab(self.active_tab.prev());
    }

    pub fn explanation(&self) -> &Explanation {
        &self.explanation
    }

    fn request_explanation(&mut self) {
        self.explanation = Explanation::Loading;
        let context = PromptContext::Project(ProjectContext::from(&self.project));
        self.replies.dispatch(
            &self.gateway,
            self.project.id,
            EXPLAINER_QUESTION.to_string(),
            context,
        );
    }

    /// Apply an explainer reply if one has arrived
    pub fn poll(&mut self) -> bool {
        match self.replies.try_next() {
            Some(completion) => self.apply(completion),
            None => false,
        }
    }

    /// Wait for the pending explainer reply; `false` if none is pending
    pub async fn wait_for_explanation(&mut self) -> bool {
        if self.explanation != Explanation::Loading {
            return false;
        }
        match self.replies.next().await {
            Some(completion) => self.apply(completion),
            None => false,
        }
    }

    fn apply(&mut self, completion: Completion<ProjectId>) -> bool {
        if completion.key != self.project.id || self.explanation != Explanation::Loading {
            return false;
        }
        // Failures are memoized too; the popup does not retry
        self.explanation = Explanation::Ready(reply_text(completion.result));
        true
    }

    pub fn image_index(&self) -> usize {
        self.image_index
    }

    pub fn current_image(&self) -> Option<&str> {
        self.project.images.get(self.image_index).map(String::as_str)
    }

    pub fn next_image(&mut self) {
        let count = self.project.images.len();
        if count > 0 {
            self.image_index = (self.image_index + 1) % count;
        }
    }

    pub fn prev_image(&mut self) {
        let count = self.project.images.len();
        if count > 0 {
            self.image_index = (self.image_index + count - 1) % count;
        }
    }

    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    pub fn clock(&self) -> &MediaClock {
        &self.clock
    }

    /// Play or pause the demo video; playing a finished video starts it over
    pub fn toggle_playback(&mut self) {
        if !self.playback.is_playing() && self.clock.is_finished() {
            self.clock.rewind();
        }
        self.playback.toggle();
        self.sync_progress();
    }

    /// Progress = position / duration, as a percentage clamped to `[0, 100]`
    pub fn update_playback(&mut self, position: f64, duration: f64) {
        self.playback.update(position, duration);
    }

    /// Advance the simulated video by one UI tick
    pub fn tick(&mut self, elapsed: Duration) {
        if !self.playback.is_playing() {
            return;
        }
        self.clock.advance(elapsed);
        self.sync_progress();
        if self.clock.is_finished() {
            self.playback.pause();
        }
    }

    fn sync_progress(&mut self) {
        let position = self.clock.position().as_secs_f64();
        let duration = self.clock.duration().as_secs_f64();
        self.update_playback(position, duration);
    }

    /// Call-to-action links that are present
    pub fn links(&self) -> Vec<ProjectLink<'_>> {
        self.project.links()
    }

    pub fn selected_link_index(&self) -> usize {
        self.selected_link
    }

    pub fn selected_link(&self) -> Option<ProjectLink<'_>> {
        self.links().get(self.selected_link).copied()
    }

    pub fn cycle_link(&mut self) {
        let count = self.project.links().len();
        if count > 0 {
            self.selected_link = (self.selected_link + 1) % count;
        }
    }
}
