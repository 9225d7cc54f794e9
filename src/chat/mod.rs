//! Chat widget conversation state
//!
//! A [`ChatSession`] lives exactly as long as the chat widget is open. Closing the widget
//! drops the session together with its reply channel, so answers that arrive later are
//! discarded without touching any view.
//!
//! Questions are answered one at a time. A question submitted while another is in flight
//! shows up in the transcript immediately and is sent once the earlier reply lands, so
//! replies are appended in submission order.

use std::collections::VecDeque;
use std::sync::Arc;

use tokio::runtime::Handle;
use uuid::Uuid;

use crate::assistant::{
    AssistantGateway, Completion, PromptContext, ReplyChannel, SiteContext, reply_text,
};
use crate::models::ChatTurn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Idle,
    AwaitingReply,
}

#[derive(Debug)]
pub struct ChatSession {
    id: Uuid,
    turns: Vec<ChatTurn>,
    gateway: AssistantGateway,
    context: Arc<SiteContext>,
    replies: ReplyChannel<u64>,
    queued: VecDeque<(u64, String)>,
    in_flight: Option<u64>,
    next_ticket: u64,
}

impl ChatSession {
    pub fn new(gateway: AssistantGateway, context: Arc<SiteContext>, handle: Handle) -> Self {
        let id = Uuid::new_v4();
        tracing::debug!(session = %id, configured = gateway.is_configured(), "Chat session opened");

        Self {
            id,
            turns: Vec::new(),
            gateway,
            context,
            replies: ReplyChannel::new(handle),
            queued: VecDeque::new(),
            in_flight: None,
            next_ticket: 0,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn status(&self) -> SessionStatus {
        if self.in_flight.is_some() { SessionStatus::AwaitingReply } else { SessionStatus::Idle }
    }

    /// Questions submitted but not yet sent
    pub fn queued_len(&self) -> usize {
        self.queued.len()
    }

    /// Append a user turn and send the question
    ///
    /// Returns `false` (and changes nothing) if `text` is blank. Never blocks.
    pub fn submit(&mut self, text: &str) -> bool {
        let question = text.trim();
        if question.is_empty() {
            return false;
        }

        self.turns.push(ChatTurn::user(question));

        let ticket = self.next_ticket;
        self.next_ticket += 1;

        if self.in_flight.is_none() {
            self.send(ticket, question.to_string());
        } else {
            tracing::debug!(session = %self.id, ticket, "Question queued behind in-flight one");
            self.queued.push_back((ticket, question.to_string()));
        }
        true
    }

    /// Apply every reply that has already arrived. Returns the number of assistant turns
    /// appended.
    pub fn poll(&mut self) -> usize {
        let mut applied = 0;
        while let Some(completion) = self.replies.try_next() {
            if self.apply(completion) {
                applied += 1;
            }
        }
        applied
    }

    /// Wait for the in-flight reply. Returns `false` immediately when nothing is in flight.
    pub async fn wait_for_reply(&mut self) -> bool {
        if self.in_flight.is_none() {
            return false;
        }

        match self.replies.next().await {
            Some(completion) => self.apply(completion),
            None => false,
        }
    }

    fn send(&mut self, ticket: u64, question: String) {
        self.in_flight = Some(ticket);
        let context = PromptContext::Site(Arc::clone(&self.context));
        self.replies.dispatch(&self.gateway, ticket, question, context);
    }

    fn apply(&mut self, completion: Completion<u64>) -> bool {
        if self.in_flight != Some(completion.key) {
            tracing::warn!(
                session = %self.id,
                ticket = completion.key,
                "Unexpected chat reply ignored"
            );
            return false;
        }

        self.turns.push(ChatTurn::assistant(reply_text(completion.result)));
        self.in_flight = None;

        if let Some((ticket, question)) = self.queued.pop_front() {
            self.send(ticket, question);
        }
        true
    }
}
