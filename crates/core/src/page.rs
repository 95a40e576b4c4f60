//! Page startup: what happens once the dataset load settles.
//!
//! The browser crate supplies the controls; everything that decides whether
//! and what to populate lives here so it can be exercised off the browser.

use thiserror::Error;

use crate::dataset::{Dataset, LoadError};
use crate::selector::{map_options, operator_options, SelectOption};

/// A selection control the page owns (a `<select>` in the browser).
pub trait SelectControl {
    /// Adds `option` after any options already present.
    fn append_option(&mut self, option: &SelectOption) -> Result<(), String>;

    /// Currently selected value (empty when the control has no options).
    fn value(&self) -> String;
}

/// The three selectors of the page.
#[derive(Debug)]
pub struct Selectors<S> {
    pub map: S,
    pub side: S,
    pub operator: S,
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Error fetching tactics data: {0}")]
    Load(#[from] LoadError),

    #[error("tactics: page setup failed: {0}")]
    Page(String),
}

/// A page whose selectors are populated and ready for the first render.
#[derive(Debug)]
pub struct Started<S, P> {
    pub dataset: Dataset,
    pub selectors: Selectors<S>,
    /// Whatever else `locate` found (the panels, in the browser).
    pub panels: P,
}

/// Appends one option per entry; pre-existing options (a placeholder) stay.
pub fn populate<S: SelectControl>(control: &mut S, options: &[SelectOption]) -> Result<(), String> {
    for option in options {
        control.append_option(option)?;
    }
    Ok(())
}

/// Turns a settled load into a populated page.
///
/// A failed load returns before `locate` runs, so nothing on the page is
/// touched; the caller only reports the error.
pub fn start_page<S, P>(
    load: Result<Dataset, LoadError>,
    locate: impl FnOnce() -> Result<(Selectors<S>, P), String>,
) -> Result<Started<S, P>, StartupError>
where
    S: SelectControl,
{
    let dataset = load?;
    let (mut selectors, panels) = locate().map_err(StartupError::Page)?;

    populate(&mut selectors.map, &map_options(&dataset)).map_err(StartupError::Page)?;
    populate(&mut selectors.operator, &operator_options(&dataset)).map_err(StartupError::Page)?;

    Ok(Started {
        dataset,
        selectors,
        panels,
    })
}
