//! Listing filter/search engine.
//!
//! # Responsibility
//! - Model the filter/sort controls of blog and project listings.
//! - Derive the visible, ordered subset from a static item list.
//!
//! # Invariants
//! - Evaluation is a pure function of `(items, state)`.
//! - Active facets combine conjunctively.

pub mod engine;
pub mod state;
