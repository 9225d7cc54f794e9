//! Portfolio Explorer - Browse a developer portfolio from the terminal
//!
//! This library models a personal portfolio site and the behavior behind it:
//!
//! - Loading a versioned site profile (bio, skills, projects, contact) from JSON
//! - Filtering the project catalog by free text and technology tag
//! - Asking a remote generative-language assistant about the site or one project
//! - Chat sessions and project popups that receive assistant replies asynchronously
//! - Scroll-spy navigation over the rendered page
//!
//! # Example
//!
//! ```no_run
//! use portfolio_explorer::{filter_projects, load_profile};
//!
//! let loaded = load_profile(None)?;
//! for project in filter_projects(loaded.catalog.projects(), "python", "All") {
//!     println!("{} {}", project.id, project.title);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod assistant;
pub mod catalog;
pub mod chat;
pub mod cli;
pub mod clipboard;
pub mod detail;
pub mod filters;
pub mod models;
pub mod navigation;
pub mod parsers;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use assistant::{AssistantError, AssistantGateway, GeminiTransport, Transport};
pub use catalog::{LoadedProfile, ProjectCatalog, load_profile};
pub use chat::ChatSession;
pub use detail::DetailView;
pub use filters::{FilterState, filter_projects};
pub use models::{Project, SiteProfile};
pub use parsers::parse_profile_file;
