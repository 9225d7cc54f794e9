//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::future::BoxFuture;
use portfolio_explorer::models::Project;
use portfolio_explorer::{AssistantError, AssistantGateway, Transport};
use tempfile::TempDir;

/// Builder for catalog projects with sensible defaults
pub struct ProjectBuilder {
    project: Project,
}

impl ProjectBuilder {
    pub fn new(id: u32, title: &str) -> Self {
        Self {
            project: Project {
                id,
                title: title.to_string(),
                description: String::new(),
                category: "Web Development".to_string(),
                technologies: vec![],
                features: vec![],
                image: String::new(),
                demo_video: String::new(),
                images: vec![],
                live_demo: None,
                source_code: None,
            },
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.project.description = description.to_string();
        self
    }

    pub fn technologies(mut self, techs: &[&str]) -> Self {
        self.project.technologies = techs.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn features(mut self, features: &[&str]) -> Self {
        self.project.features = features.iter().map(|f| f.to_string()).collect();
        self
    }

    pub fn images(mut self, images: &[&str]) -> Self {
        self.project.images = images.iter().map(|i| i.to_string()).collect();
        self
    }

    pub fn demo_video(mut self, url: &str) -> Self {
        self.project.demo_video = url.to_string();
        self
    }

    pub fn live_demo(mut self, url: &str) -> Self {
        self.project.live_demo = Some(url.to_string());
        self
    }

    pub fn source_code(mut self, url: &str) -> Self {
        self.project.source_code = Some(url.to_string());
        self
    }

    pub fn build(self) -> Project {
        self.project
    }
}

/// The three-project catalog used across the filter tests
pub fn sample_projects() -> Vec<Project> {
    vec![
        ProjectBuilder::new(1, "Github-App")
            .description("A look like github app performing some great features.")
            .technologies(&["React", "Node.js", "Express", "MongoDB"])
            .images(&["one.png", "two.png", "three.png"])
            .demo_video("demo.mp4")
            .source_code("https://github.com/example/github-app")
            .build(),
        ProjectBuilder::new(2, "InfiUse")
            .description("A multi-functional LLM.")
            .technologies(&["Python", "Streamlit", "LangChain"])
            .live_demo("https://infiuse.example.com/")
            .source_code("https://github.com/example/infiuse")
            .build(),
        ProjectBuilder::new(3, "Fine-Tuning for Abstractive Text Summarization")
            .description("Developed text summarization project using Transformers.")
            .technologies(&["PyTorch", "Python"])
            .build(),
    ]
}

/// Temp directory holding a profile JSON file
pub struct ProfileDir {
    temp_dir: TempDir,
}

impl ProfileDir {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `content` to `profile.json` and return its path
    pub fn write_profile(&self, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join("profile.json");
        fs::write(&path, content).expect("Failed to write profile.json");
        path
    }
}

impl Default for ProfileDir {
    fn default() -> Self {
        Self::new()
    }
}

/// Minimal valid profile JSON with the given project JSON objects
pub fn profile_json(name: &str, projects: &[&str]) -> String {
    format!(
        r#"{{
            "version": 1,
            "name": "{}",
            "tagline": "Builder of things",
            "bio": "Writes software.",
            "contact": {{ "email": "owner@example.com" }},
            "projects": [{}]
        }}"#,
        name,
        projects.join(",")
    )
}

/// Transport that answers with a fixed reply and counts calls
pub struct CountingTransport {
    reply: Result<String, AssistantError>,
    calls: Arc<AtomicUsize>,
}

impl CountingTransport {
    pub fn replying(reply: &str) -> (Self, Arc<AtomicUsize>) {
        Self::with_result(Ok(reply.to_string()))
    }

    pub fn failing(reason: &str) -> (Self, Arc<AtomicUsize>) {
        Self::with_result(Err(AssistantError::UpstreamFailure(reason.to_string())))
    }

    fn with_result(reply: Result<String, AssistantError>) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (Self { reply, calls: Arc::clone(&calls) }, calls)
    }
}

impl Transport for CountingTransport {
    fn generate<'a>(
        &'a self,
        _api_key: &'a str,
        _prompt: &'a str,
    ) -> BoxFuture<'a, Result<String, AssistantError>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let reply = self.reply.clone();
        Box::pin(async move { reply })
    }
}

/// Configured gateway over a [`CountingTransport`]
pub fn counting_gateway(transport: CountingTransport) -> AssistantGateway {
    AssistantGateway::new(Some("test-key".to_string()), Arc::new(transport))
}
