//! Project popup state: tabs, image carousel, demo playback and the AI explainer

pub mod playback;
pub mod view;

pub use playback::{MediaClock, Playback};
pub use view::{DEMO_VIDEO_LENGTH, DetailTab, DetailView, Explanation};
