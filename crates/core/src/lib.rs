//! # tactics
//!
//! Selection-to-render mapping for a browser tactics reference.
//!
//! A tactics dataset holds per-map/per-side and per-operator strategies. This
//! crate turns the current selector values into panel view models; the
//! browser crate (`tactics_web`) only mounts those models into the DOM.
//!
//! ## Quick Start
//!
//! ```
//! use tactics::prelude::*;
//!
//! let dataset = Dataset::from_json_str(
//!     r#"{"maps":{"house":{"attack":{"bomb":[{"description":"Push A"}]}}},"operators":{}}"#,
//! )
//! .unwrap();
//!
//! let panel = render_map_panel(&dataset, "house", "attack");
//! assert_eq!(panel.sections()[0].heading, "Bomb");
//! ```
//!
//! ## Modules
//!
//! - [`dataset`]: Loaded data and the load-error taxonomy
//! - [`entry`]: Step and tactic-entry classification
//! - [`selector`]: Selector option population
//! - [`render`]: Map/operator panel view models
//! - [`page`]: Startup once the load settles (selector population)
//! - [`config`]: Page wiring (dataset URL, element ids, log level)

pub mod config;
pub mod dataset;
pub mod entry;
pub mod page;
pub mod render;
pub mod selector;

pub mod prelude {
    pub use crate::config::PageConfig;
    pub use crate::dataset::{Dataset, LoadError};
    pub use crate::entry::{Step, TacticEntry};
    pub use crate::page::{populate, start_page, SelectControl, Selectors, Started, StartupError};
    pub use crate::render::{
        render_map_panel, render_operator_panel, render_step, Panel, RenderedStep, SectionBody,
        StepImage, TacticSection,
    };
    pub use crate::selector::{map_options, operator_options, SelectOption};
}
