//! Typed prompt context and prompt construction
//!
//! The assistant sees the site as a versioned JSON document built from the profile, never
//! as free-form text. The same profile always produces the same prompt.

use std::sync::Arc;

use serde::Serialize;

use crate::models::{Project, SiteProfile};

/// Sections of the page, in scroll order
pub const SITE_SECTIONS: [&str; 5] = ["Home", "About", "Skills", "Projects", "Contact"];

/// Question sent when the explainer tab is first opened
pub const EXPLAINER_QUESTION: &str = "Explain this project to a non-specialist visitor in a few \
     short paragraphs: what problem it solves and how the listed technologies fit together.";

/// Site-wide facts for the chat widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContext {
    pub version: u32,
    pub owner: String,
    pub tagline: String,
    pub bio: String,
    pub skills: Vec<SkillSummary>,
    pub projects: Vec<ProjectSummary>,
    pub contact: ContactSummary,
    pub sections: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillSummary {
    pub category: String,
    pub title: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectSummary {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSummary {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

impl SiteContext {
    pub fn from_profile(profile: &SiteProfile) -> Self {
        Self {
            version: profile.version,
            owner: profile.name.clone(),
            tagline: profile.tagline.clone(),
            bio: profile.bio.clone(),
            skills: profile
                .skills
                .iter()
                .map(|category| SkillSummary {
                    category: category.category.clone(),
                    title: category.title.clone(),
                    skills: category.skills.iter().map(|s| s.name.clone()).collect(),
                })
                .collect(),
            projects: profile
                .projects
                .iter()
                .map(|p| ProjectSummary {
                    title: p.title.clone(),
                    description: p.description.clone(),
                    technologies: p.technologies.clone(),
                    features: p.features.clone(),
                })
                .collect(),
            contact: ContactSummary {
                email: profile.contact.email.clone(),
                location: profile.contact.location.clone(),
                github: profile.contact.github.clone(),
                linkedin: profile.contact.linkedin.clone(),
            },
            sections: SITE_SECTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// The fields of one project the explainer may use
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectContext {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub features: Vec<String>,
}

impl From<&Project> for ProjectContext {
    fn from(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            technologies: project.technologies.clone(),
            features: project.features.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptContext {
    /// Shared by every chat question of a session
    Site(Arc<SiteContext>),
    Project(ProjectContext),
}

/// Render a question and its context into the single prompt sent upstream
pub fn build_prompt(question: &str, context: &PromptContext) -> String {
    match context {
        PromptContext::Site(site) => format!(
            "You are a helpful assistant for a personal portfolio website. The website contains \
             information about {}. Here's a comprehensive overview of the website content:\n\n\
             {}\n\nPlease answer the following question about the website or its content: {}",
            site.owner,
            to_pretty_json(site.as_ref()),
            question
        ),
        PromptContext::Project(project) => format!(
            "You are explaining a single project from a personal portfolio website. Only use the \
             project details below.\n\n{}\n\n{}",
            to_pretty_json(project),
            question
        ),
    }
}

fn to_pretty_json<T: Serialize>(value: &T) -> String {
    // Plain structs of strings cannot fail to serialize
    serde_json::to_string_pretty(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::builtin_profile;

    #[test]
    fn test_site_prompt_embeds_context_and_question() {
        let profile = builtin_profile().unwrap();
        let context = PromptContext::Site(Arc::new(SiteContext::from_profile(&profile)));

        let prompt = build_prompt("What kind of work is shown here?", &context);
        assert!(
            prompt.starts_with("You are a helpful assistant for a personal portfolio website.")
        );
        assert!(prompt.contains(&format!("information about {}.", profile.name)));
        assert!(prompt.contains("\"sections\""));
        assert!(prompt.ends_with("its content: What kind of work is shown here?"));
    }

    #[test]
    fn test_site_prompt_is_reproducible() {
        let profile = builtin_profile().unwrap();
        let context = || PromptContext::Site(Arc::new(SiteContext::from_profile(&profile)));
        let a = build_prompt("q", &context());
        let b = build_prompt("q", &context());
        assert_eq!(a, b);
    }

    #[test]
    fn test_project_prompt_scoped_to_project() {
        let profile = builtin_profile().unwrap();
        let project = &profile.projects[0];
        let context = PromptContext::Project(ProjectContext::from(project));

        let prompt = build_prompt(EXPLAINER_QUESTION, &context);
        assert!(prompt.contains(&project.title));
        assert!(prompt.contains("\"features\""));
        assert!(!prompt.contains(&profile.contact.email));
        assert!(prompt.ends_with(EXPLAINER_QUESTION));
    }

    #[test]
    fn test_site_context_lists_sections() {
        let profile = builtin_profile().unwrap();
        let site = SiteContext::from_profile(&profile);
        assert_eq!(site.sections, vec!["Home", "About", "Skills", "Projects", "Contact"]);
        assert_eq!(site.projects.len(), profile.projects.len());
        assert_eq!(site.version, profile.version);
    }

    #[test]
    fn test_site_prompt_lists_project_features() {
        let profile = builtin_profile().unwrap();
        let project = profile.projects.iter().find(|p| !p.features.is_empty()).unwrap();
        let context = PromptContext::Site(Arc::new(SiteContext::from_profile(&profile)));

        let prompt = build_prompt("What does it do?", &context);
        let feature = serde_json::to_string(&project.features[0]).unwrap();
        assert!(prompt.contains(&feature));
    }
}
