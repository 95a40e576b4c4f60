//! Leptos front end for the tactics reference.
//!
//! The browser app lives in `web` and is compiled only with `--features web`
//! on wasm32. Other targets get the page template and its element contract,
//! which the host tests check against [`PageConfig::default`].

pub use tactics::config::PageConfig;

/// Trunk page template served with the app.
pub const INDEX_HTML: &str = include_str!("../index.html");

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::{start, start_with};
