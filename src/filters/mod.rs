//! Gallery and skills filtering
//!
//! All filters are pure and recompute their result from scratch on every change; the
//! catalog is small and static.

pub mod apply;
pub mod skills;
pub mod state;

pub use apply::{ALL_TAG, all_tags, filter_projects, matches_project};
pub use skills::{filter_skill_categories, skill_filters};
pub use state::{FilterState, MAX_SEARCH_LEN};
