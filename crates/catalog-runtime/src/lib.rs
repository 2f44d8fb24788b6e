//! Runtime layer for Catalog Insights.
//!
//! Owns the load-once dataset handle and assembles the per-render
//! [`report::DashboardReport`] that the presentation host consumes.

pub mod dataset_manager;
pub mod report;

pub use catalog_core as core;
pub use catalog_data as data;
