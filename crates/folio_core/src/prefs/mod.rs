//! Persisted site preferences.
//!
//! # Responsibility
//! - Model the light/dark theme choice.
//! - Load and save it explicitly through a preference store.
//!
//! # Invariants
//! - A store that has never saved a theme reports [`Theme::Light`].

pub mod store;
pub mod theme;
