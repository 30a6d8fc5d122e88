//! Authoring helpers shared by listings and post pages.
//!
//! # Responsibility
//! - Parse and render content dates.
//! - Derive plain-text excerpts and reading time from markdown bodies.

pub mod dates;
pub mod excerpt;
pub mod read_time;
