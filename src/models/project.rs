use serde::{Deserialize, Serialize};

/// Stable identity of a project within a catalog
pub type ProjectId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_project_id")]
    pub id: ProjectId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub demo_video: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::parsers::deserializers::deserialize_optional_link"
    )]
    pub live_demo: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::parsers::deserializers::deserialize_optional_link"
    )]
    pub source_code: Option<String>,
}

/// Call-to-action links shown under a project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    LiveDemo,
    SourceCode,
}

impl LinkKind {
    pub fn label(self) -> &'static str {
        match self {
            LinkKind::LiveDemo => "View Live Demo",
            LinkKind::SourceCode => "View Source Code",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectLink<'a> {
    pub kind: LinkKind,
    pub url: &'a str,
}

impl Project {
    /// Links that are actually present, live demo first
    pub fn links(&self) -> Vec<ProjectLink<'_>> {
        let mut links = Vec::with_capacity(2);
        if let Some(url) = self.live_demo.as_deref() {
            links.push(ProjectLink { kind: LinkKind::LiveDemo, url });
        }
        if let Some(url) = self.source_code.as_deref() {
            links.push(ProjectLink { kind: LinkKind::SourceCode, url });
        }
        links
    }

    pub fn has_demo_video(&self) -> bool {
        !self.demo_video.trim().is_empty()
    }
}
