//! Framework-agnostic view models for the project admin UI.
//!
//! Each view model holds the state a rendering layer needs (filter/sort,
//! active tab, form drafts) and loads data through the sync stores. None of
//! them know anything about widgets.

pub mod detail;
pub mod form;
pub mod list;
pub mod validation;
