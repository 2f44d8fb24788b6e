//! Data layer for Catalog Insights.
//!
//! Loads the cleaned catalog CSV into an in-memory [`CatalogTable`] and
//! computes the chart-ready summaries the dashboard renders: type
//! distribution, top countries, yearly additions, top ratings, top directors
//! and the headline overview.
//!
//! [`CatalogTable`]: catalog_core::models::CatalogTable

pub mod overview;
pub mod reader;
pub mod summary;
pub mod views;

pub use catalog_core as core;
