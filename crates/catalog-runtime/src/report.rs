//! One render's worth of chart data.
//!
//! [`DashboardReport::build`] runs every aggregation view against the same
//! table. A view that fails is recorded as [`ChartOutcome::Failed`] so the
//! host can degrade that one chart and still show the rest.

use std::fmt;

use catalog_core::dates::DatePolicy;
use catalog_core::error::Result;
use catalog_core::models::CatalogTable;
use catalog_data::overview::{overview, CatalogOverview};
use catalog_data::summary::{CategorySummary, YearlySummary};
use catalog_data::views;
use serde::Serialize;

// ── ViewKind ──────────────────────────────────────────────────────────────────

/// Identifies one of the aggregation views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    TypeDistribution,
    TopCountries,
    YearlyAdditions,
    TopRatings,
    TopDirectors,
}

impl ViewKind {
    pub const ALL: [ViewKind; 5] = [
        ViewKind::TypeDistribution,
        ViewKind::TopCountries,
        ViewKind::YearlyAdditions,
        ViewKind::TopRatings,
        ViewKind::TopDirectors,
    ];

    /// Chart title.
    pub fn title(&self) -> &'static str {
        match self {
            ViewKind::TypeDistribution => "What is the catalog made of?",
            ViewKind::TopCountries => "Where is the content produced?",
            ViewKind::YearlyAdditions => "How has the acquisition strategy evolved?",
            ViewKind::TopRatings => "Which audiences does the catalog target?",
            ViewKind::TopDirectors => "Who shapes the catalog?",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ViewKind::TypeDistribution => "type_distribution",
            ViewKind::TopCountries => "top_countries",
            ViewKind::YearlyAdditions => "yearly_additions",
            ViewKind::TopRatings => "top_ratings",
            ViewKind::TopDirectors => "top_directors",
        };
        f.write_str(name)
    }
}

// ── ChartOutcome ──────────────────────────────────────────────────────────────

/// Result of a single view, kept apart from the others.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "lowercase")]
pub enum ChartOutcome<T> {
    Ready(T),
    Failed { error: String },
}

impl<T> ChartOutcome<T> {
    fn from_result(kind: ViewKind, result: Result<T>) -> Self {
        match result {
            Ok(value) => ChartOutcome::Ready(value),
            Err(e) => {
                tracing::warn!(view = %kind, error = %e, "view failed; chart will be degraded");
                ChartOutcome::Failed {
                    error: e.to_string(),
                }
            }
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            ChartOutcome::Ready(value) => Some(value),
            ChartOutcome::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ChartOutcome::Ready(_) => None,
            ChartOutcome::Failed { error } => Some(error),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ChartOutcome::Failed { .. })
    }
}

// ── DashboardReport ───────────────────────────────────────────────────────────

/// Every summary the dashboard draws, computed from one table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    /// Dataset file the table came from, if known.
    pub source: Option<String>,
    pub date_policy: DatePolicy,
    pub overview: CatalogOverview,
    pub type_distribution: ChartOutcome<CategorySummary>,
    pub top_countries: ChartOutcome<CategorySummary>,
    pub yearly_additions: ChartOutcome<YearlySummary>,
    pub top_ratings: ChartOutcome<CategorySummary>,
    pub top_directors: ChartOutcome<CategorySummary>,
}

impl DashboardReport {
    /// Run every view once against `table`.
    pub fn build(table: &CatalogTable, date_policy: DatePolicy) -> Self {
        let report = Self {
            source: table.source().map(|p| p.display().to_string()),
            date_policy,
            overview: overview(table),
            type_distribution: ChartOutcome::Ready(views::type_distribution(table)),
            top_countries: ChartOutcome::Ready(views::top_countries(table)),
            yearly_additions: ChartOutcome::from_result(
                ViewKind::YearlyAdditions,
                views::yearly_additions_with(table, date_policy),
            ),
            top_ratings: ChartOutcome::Ready(views::top_ratings(table)),
            top_directors: ChartOutcome::Ready(views::top_directors(table)),
        };

        tracing::info!(
            titles = report.overview.total_titles,
            failed = report.failed_views().len(),
            "dashboard report built"
        );
        report
    }

    /// The category summary behind `kind`, or `None` for the yearly view.
    pub fn category(&self, kind: ViewKind) -> Option<&ChartOutcome<CategorySummary>> {
        match kind {
            ViewKind::TypeDistribution => Some(&self.type_distribution),
            ViewKind::TopCountries => Some(&self.top_countries),
            ViewKind::TopRatings => Some(&self.top_ratings),
            ViewKind::TopDirectors => Some(&self.top_directors),
            ViewKind::YearlyAdditions => None,
        }
    }

    /// Views whose chart has to be degraded.
    pub fn failed_views(&self) -> Vec<ViewKind> {
        ViewKind::ALL
            .into_iter()
            .filter(|kind| match self.category(*kind) {
                Some(outcome) => outcome.is_failed(),
                None => self.yearly_additions.is_failed(),
            })
            .collect()
    }

    /// Pretty-printed JSON form of the report.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
