//! Interactive terminal front end: the scrolling site page, the project gallery and the
//! popups layered over them.
mod app;
mod events;
mod layout;
mod overlays;
mod page;
mod rendering;
mod terminal;
mod timestamps;

use anyhow::Result;
pub use app::App;
use tokio::runtime::Handle;

use self::terminal::TerminalManager;
use crate::assistant::AssistantGateway;
use crate::catalog::LoadedProfile;

/// Run the interactive TUI
///
/// `handle` must belong to a runtime that outlives this call; assistant requests run on it
/// while the UI loop stays on the calling thread.
pub fn run_interactive(
    loaded: LoadedProfile,
    gateway: AssistantGateway,
    handle: Handle,
) -> Result<()> {
    let mut manager = TerminalManager::new()?;

    let mut app = App::new(loaded.profile, loaded.catalog, gateway, handle);
    let res = app.run(manager.terminal_mut());

    manager.restore()?;
    res
}
