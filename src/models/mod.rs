//! Data models for the portfolio.
//!
//! This module defines the data structures used throughout the application:
//!
//! - [`SiteProfile`] - Versioned description of the site owner (bio, skills, projects, contact)
//! - [`Project`] - One entry of the project catalog
//! - [`ChatTurn`] - One line of a chat transcript
//! - [`ContactForm`] - Contact form fields and their validation
//!
//! Profiles are read from JSON with serde; a few fields (project ids, optional links) use
//! custom deserializers from the `deserializers` module.

pub mod chat;
pub mod contact;
pub mod profile;
pub mod project;

pub use chat::{Author, ChatTurn};
pub use contact::{ContactField, ContactForm, ContactSubmission, ValidationError};
pub use profile::{
    ContactInfo, Experience, PROFILE_VERSION, SiteProfile, Skill, SkillCategory, Testimonial,
};
pub use project::{LinkKind, Project, ProjectId, ProjectLink};
