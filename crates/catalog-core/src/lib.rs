//! Shared building blocks for Catalog Insights.
//!
//! Holds the catalog record model, the crate-wide error type, date parsing
//! for the `date_added` column, CLI settings with persisted last-used values,
//! and number formatting used by the dashboard.

pub mod dates;
pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;

pub use error::{CatalogError, Result};
