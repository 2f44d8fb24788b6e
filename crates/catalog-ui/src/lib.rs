//! Terminal UI layer for Catalog Insights.
//!
//! Provides themes, the header and share-bar components, chart panels,
//! narrative captions, the data preview table, and the paged application
//! event loop built on top of [`ratatui`].

pub mod app;
pub mod charts;
pub mod components;
pub mod narrative;
pub mod table_view;
pub mod themes;

pub use catalog_core as core;
