use std::collections::HashSet;

use super::apply::ALL_TAG;
use crate::models::SkillCategory;

/// `"All"` followed by each skill category facet, first-seen order
pub fn skill_filters(categories: &[SkillCategory]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut filters = vec![ALL_TAG.to_string()];
    for category in categories {
        if seen.insert(category.category.as_str()) {
            filters.push(category.category.clone());
        }
    }
    filters
}

pub fn filter_skill_categories<'a>(
    categories: &'a [SkillCategory],
    filter: &str,
) -> Vec<&'a SkillCategory> {
    categories.iter().filter(|c| filter == ALL_TAG || c.category == filter).collect()
}
