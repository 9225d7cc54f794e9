//! Project catalog: the ordered, in-memory list of portfolio projects.
//!
//! The catalog is built once from a [`SiteProfile`] and never changes afterwards. It is the
//! source of truth for the gallery filter and for opening project popups by id.

pub mod loader;

use std::collections::HashSet;

use anyhow::{Result, bail};

use crate::filters::all_tags;
use crate::models::{Project, ProjectId};

pub use loader::{LoadedProfile, ProfileSource, load_profile};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectCatalog {
    projects: Vec<Project>,
}

impl ProjectCatalog {
    /// Build a catalog, keeping the given order
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Two projects share an id
    /// - A project has id 0
    pub fn new(projects: Vec<Project>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(projects.len());
        for project in &projects {
            if project.id == 0 {
                bail!("Project '{}' has id 0; ids must be positive", project.title);
            }
            if !seen.insert(project.id) {
                bail!("Duplicate project id {} ('{}')", project.id, project.title);
            }
        }

        Ok(Self { projects })
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// "All" followed by every technology, first-seen order
    pub fn tags(&self) -> Vec<String> {
        all_tags(&self.projects)
    }
}
