//! JSON parsers for site profiles
//!
//! # Error Handling Strategy
//!
//! - **All-or-nothing**: a profile is loaded completely or not at all. Any malformed field,
//!   zero project id or unsupported schema version fails the load.
//!
//! - **Size limit**: files above 10MB are rejected before any parsing.
//!
//! - **Error propagation**: uses `anyhow::Result` with context naming the file. The CLI
//!   decides whether a failure is fatal (`--profile` given) or falls back to the built-in
//!   profile.

pub mod deserializers;
pub mod profile;

pub use profile::{builtin_profile, parse_profile_file, parse_profile_str};
