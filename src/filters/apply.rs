use std::collections::HashSet;

use crate::models::Project;

/// Tag that matches every project
pub const ALL_TAG: &str = "All";

/// Filter projects by free-text search and a single technology tag
///
/// Matching rules:
/// - Tag: `"All"` matches everything, otherwise exact (case-sensitive) membership in
///   `technologies`
/// - Text: empty term matches everything, otherwise case-insensitive substring of the
///   title, the description, or any technology
/// - A project is kept iff both match
///
/// Catalog order is preserved. No match yields an empty vec.
pub fn filter_projects<'a>(projects: &'a [Project], term: &str, tag: &str) -> Vec<&'a Project> {
    let needle = term.to_lowercase();
    projects.iter().filter(|project| matches_project(project, &needle, tag)).collect()
}

/// `needle` must already be lowercase
pub fn matches_project(project: &Project, needle: &str, tag: &str) -> bool {
    tag_matches(project, tag) && text_matches(project, needle)
}

fn tag_matches(project: &Project, tag: &str) -> bool {
    tag == ALL_TAG || project.technologies.iter().any(|tech| tech == tag)
}

fn text_matches(project: &Project, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    project.title.to_lowercase().contains(needle)
        || project.description.to_lowercase().contains(needle)
        || project.technologies.iter().any(|tech| tech.to_lowercase().contains(needle))
}

/// `"All"` followed by every technology in first-seen order, without duplicates
pub fn all_tags(projects: &[Project]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tags = vec![ALL_TAG.to_string()];

    for tech in projects.iter().flat_map(|project| project.technologies.iter()) {
        if seen.insert(tech.as_str()) {
            tags.push(tech.clone());
        }
    }

    tags
}
