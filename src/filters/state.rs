use super::apply::{ALL_TAG, filter_projects};
use crate::models::Project;

/// Longest search term accepted from the search box
pub const MAX_SEARCH_LEN: usize = 256;

/// Gallery filter inputs. `selected_tag == "All"` is the identity filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    search_term: String,
    selected_tag: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self { search_term: String::new(), selected_tag: ALL_TAG.to_string() }
    }
}

impl FilterState {
    pub fn new(search_term: &str, selected_tag: &str) -> Self {
        let mut state = Self::default();
        state.set_search_term(search_term);
        state.set_selected_tag(selected_tag);
        state
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn selected_tag(&self) -> &str {
        &self.selected_tag
    }

    /// Replace the search term, truncated to [`MAX_SEARCH_LEN`] characters
    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.chars().take(MAX_SEARCH_LEN).collect();
    }

    /// Append one typed character; ignored once the term is full
    pub fn push_char(&mut self, c: char) -> bool {
        if self.search_term.chars().count() >= MAX_SEARCH_LEN {
            return false;
        }
        self.search_term.push(c);
        true
    }

    pub fn pop_char(&mut self) -> bool {
        self.search_term.pop().is_some()
    }

    pub fn clear_search(&mut self) {
        self.search_term.clear();
    }

    pub fn set_selected_tag(&mut self, tag: &str) {
        self.selected_tag = tag.to_string();
    }

    /// Cycle through `tags` starting after the current selection.
    /// An unknown selection wraps to the first tag.
    pub fn cycle_tag(&mut self, tags: &[String], forward: bool) {
        if tags.is_empty() {
            return;
        }
        let len = tags.len();
        let next = match tags.iter().position(|t| *t == self.selected_tag) {
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
            None => 0,
        };
        self.selected_tag = tags[next].clone();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_identity(&self) -> bool {
        self.search_term.is_empty() && self.selected_tag == ALL_TAG
    }

    /// Recompute the filtered view from scratch
    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        filter_projects(projects, &self.search_term, &self.selected_tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_identity() {
        let state = FilterState::default();
        assert_eq!(state.search_term(), "");
        assert_eq!(state.selected_tag(), "All");
        assert!(state.is_identity());
    }

    #[test]
    fn test_search_term_capped() {
        let long = "x".repeat(MAX_SEARCH_LEN + 50);
        let mut state = FilterState::default();
        state.set_search_term(&long);
        assert_eq!(state.search_term().chars().count(), MAX_SEARCH_LEN);
        assert!(!state.push_char('y'));
    }

    #[test]
    fn test_push_and_pop() {
        let mut state = FilterState::default();
        assert!(state.push_char('r'));
        assert!(state.push_char('é'));
        assert_eq!(state.search_term(), "ré");
        assert!(state.pop_char());
        assert!(state.pop_char());
        assert!(!state.pop_char());
    }

    #[test]
    fn test_cycle_tag_wraps() {
        let tags: Vec<String> = ["All", "React", "Python"].iter().map(|s| s.to_string()).collect();
        let mut state = FilterState::default();

        state.cycle_tag(&tags, true);
        assert_eq!(state.selected_tag(), "React");
        state.cycle_tag(&tags, true);
        state.cycle_tag(&tags, true);
        assert_eq!(state.selected_tag(), "All");
        state.cycle_tag(&tags, false);
        assert_eq!(state.selected_tag(), "Python");
    }

    #[test]
    fn test_cycle_unknown_tag_resets() {
        let tags = vec!["All".to_string(), "Go".to_string()];
        let mut state = FilterState::new("", "Haskell");
        state.cycle_tag(&tags, true);
        assert_eq!(state.selected_tag(), "All");
    }

    #[test]
    fn test_reset() {
        let mut state = FilterState::new("react", "React");
        assert!(!state.is_identity());
        state.reset();
        assert!(state.is_identity());
    }
}
