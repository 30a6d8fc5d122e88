//! Listing use-case services.
//!
//! # Responsibility
//! - Hold per-page listing state on behalf of UI layers.
//! - Keep UI layers decoupled from filter evaluation details.

pub mod listing_service;
