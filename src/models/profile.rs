use serde::{Deserialize, Serialize};

use super::project::Project;

/// Current profile schema version
pub const PROFILE_VERSION: u32 = 1;

/// Everything the site knows about its owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteProfile {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub projects: Vec<Project>,
    pub contact: ContactInfo,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Facet used by the skills filter ("Development", "DevOps", ...)
    pub category: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Self-assessed proficiency, 0-100
    #[serde(default)]
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::parsers::deserializers::deserialize_optional_link"
    )]
    pub github: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::parsers::deserializers::deserialize_optional_link"
    )]
    pub linkedin: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub period: String,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub text: String,
    pub author: String,
}

impl SiteProfile {
    pub fn skill_count(&self) -> usize {
        self.skills.iter().map(|category| category.skills.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_profile_defaults() {
        let json = r#"{
            "version": 1,
            "name": "Jordan Avery",
            "contact": { "email": "hello@example.com" }
        }"#;

        let profile: SiteProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.name, "Jordan Avery");
        assert!(profile.projects.is_empty());
        assert!(profile.contact.github.is_none());
        assert_eq!(profile.skill_count(), 0);
    }

    #[test]
    fn test_skill_count_sums_categories() {
        let json = r#"{
            "version": 1,
            "name": "Jordan Avery",
            "contact": { "email": "hello@example.com", "linkedin": "" },
            "skills": [
                { "title": "Front-end", "category": "Development",
                  "skills": [{ "name": "React", "level": 75 }, { "name": "CSS3", "level": 90 }] },
                { "title": "Tools", "category": "DevOps", "skills": [{ "name": "Git" }] }
            ]
        }"#;

        let profile: SiteProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.skill_count(), 3);
        assert_eq!(profile.skills[1].skills[0].level, 0);
        assert!(profile.contact.linkedin.is_none());
    }
}
