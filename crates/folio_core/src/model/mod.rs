//! Content model for blog and project listings.
//!
//! # Responsibility
//! - Define the item record rendered by both listings.
//! - Own the static, validated item list a page works from.
//!
//! # Invariants
//! - Item ids are unique within one catalog.
//! - A catalog is immutable once built; filtering only derives views of it.

pub mod catalog;
pub mod item;
