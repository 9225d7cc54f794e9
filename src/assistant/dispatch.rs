//! Hands gateway calls to the async runtime and brings the replies back to a synchronous
//! owner (the TUI loop polls, the CLI awaits).
//!
//! Each [`ReplyChannel`] belongs to exactly one view. When the view is dropped so is the
//! receiver, and a reply that lands afterwards is discarded by the task that produced it.

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::error::AssistantError;
use super::gateway::AssistantGateway;
use super::prompt::PromptContext;

/// A finished call, tagged with the key the owner chose when dispatching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion<K> {
    pub key: K,
    pub result: Result<String, AssistantError>,
}

#[derive(Debug)]
pub struct ReplyChannel<K> {
    handle: Handle,
    tx: UnboundedSender<Completion<K>>,
    rx: UnboundedReceiver<Completion<K>>,
}

impl<K: Send + 'static> ReplyChannel<K> {
    pub fn new(handle: Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { handle, tx, rx }
    }

    /// Spawn one `ask` on the runtime; never blocks the caller
    ///
    /// Every dispatch delivers exactly one completion. A call whose task panics completes
    /// as an upstream failure.
    pub fn dispatch(
        &self,
        gateway: &AssistantGateway,
        key: K,
        question: String,
        context: PromptContext,
    ) {
        let gateway = gateway.clone();
        let tx = self.tx.clone();
        let call = self.handle.spawn(async move { gateway.ask(&question, &context).await });

        self.handle.spawn(async move {
            let result = match call.await {
                Ok(result) => result,
                Err(e) => {
                    tracing::error!(error = %e, "Assistant task failed");
                    Err(AssistantError::UpstreamFailure(format!("assistant task failed: {}", e)))
                }
            };
            if tx.send(Completion { key, result }).is_err() {
                tracing::debug!("Reply arrived after its view closed; discarded");
            }
        });
    }

    /// Next finished call, if any, without waiting
    pub fn try_next(&mut self) -> Option<Completion<K>> {
        self.rx.try_recv().ok()
    }

    /// Wait for the next finished call
    ///
    /// The channel keeps its own sender, so this only returns `None` if the runtime shuts
    /// down while a task is pending. Panicked calls still arrive as failures.
    pub async fn next(&mut self) -> Option<Completion<K>> {
        self.rx.recv().await
    }
}
