//! The five aggregation views behind the dashboard charts.
//!
//! Every view is a pure function of the table it is handed: no caching, no
//! shared state, same input gives the same output.

use std::collections::{BTreeMap, HashMap};

use catalog_core::dates::{year_added, DatePolicy};
use catalog_core::error::{CatalogError, Result};
use catalog_core::models::{CatalogRecord, CatalogTable};
use tracing::{debug, warn};

use crate::summary::{CategoryCount, CategorySummary, YearlyCount, YearlySummary};

/// How many entries the ranked views keep.
pub const TOP_N: usize = 10;

// ── CategoryCounter ───────────────────────────────────────────────────────────

/// Counts labels while remembering the order they were first seen in.
#[derive(Default)]
struct CategoryCounter {
    entries: Vec<CategoryCount>,
    index: HashMap<String, usize>,
}

impl CategoryCounter {
    fn add(&mut self, label: &str) {
        match self.index.get(label) {
            Some(&i) => self.entries[i].count += 1,
            None => {
                self.index.insert(label.to_string(), self.entries.len());
                self.entries.push(CategoryCount {
                    label: label.to_string(),
                    count: 1,
                });
            }
        }
    }

    /// Sort by count descending and keep at most `limit` entries.
    ///
    /// The sort is stable, so ties stay in first-seen order.
    fn into_ranked(mut self, limit: Option<usize>) -> CategorySummary {
        self.entries.sort_by(|a, b| b.count.cmp(&a.count));
        if let Some(limit) = limit {
            self.entries.truncate(limit);
        }
        CategorySummary::new(self.entries)
    }
}

fn count_by<'a>(
    table: &'a CatalogTable,
    key: impl Fn(&'a CatalogRecord) -> Option<&'a str>,
    limit: Option<usize>,
) -> CategorySummary {
    let mut counter = CategoryCounter::default();
    for record in table {
        if let Some(label) = key(record) {
            counter.add(label);
        }
    }
    counter.into_ranked(limit)
}

// ── Views ─────────────────────────────────────────────────────────────────────

/// Number of titles per type.  Every type value is counted, expected or not.
pub fn type_distribution(table: &CatalogTable) -> CategorySummary {
    count_by(table, |r| Some(r.kind.label()), None)
}

/// The [`TOP_N`] countries with the most titles; titles without a country are
/// left out.
pub fn top_countries(table: &CatalogTable) -> CategorySummary {
    count_by(table, |r| r.country.as_deref(), Some(TOP_N))
}

/// Titles added per `(type, year)`, failing on the first malformed date.
pub fn yearly_additions(table: &CatalogTable) -> Result<YearlySummary> {
    yearly_additions_with(table, DatePolicy::Strict)
}

/// Titles added per `(type, year)` under an explicit [`DatePolicy`].
///
/// Entries come out grouped by type label, each group in ascending year.
pub fn yearly_additions_with(table: &CatalogTable, policy: DatePolicy) -> Result<YearlySummary> {
    let mut buckets: BTreeMap<(String, i32), u64> = BTreeMap::new();
    let mut skipped = 0usize;

    for record in table {
        let year = match year_added(record) {
            Ok(year) => year,
            Err(err @ CatalogError::MalformedDate { .. }) => match policy {
                DatePolicy::Strict => return Err(err),
                DatePolicy::SkipMalformed => {
                    skipped += 1;
                    continue;
                }
            },
            Err(other) => return Err(other),
        };
        *buckets
            .entry((record.kind.label().to_string(), year))
            .or_insert(0) += 1;
    }

    if skipped > 0 {
        warn!("Skipped {} titles with a malformed date_added", skipped);
    }
    debug!("Yearly additions: {} (type, year) buckets", buckets.len());

    Ok(YearlySummary::new(
        buckets
            .into_iter()
            .map(|((kind, year), count)| YearlyCount { kind, year, count })
            .collect(),
    ))
}

/// The [`TOP_N`] most common ratings across the whole catalog.
///
/// Titles with a blank rating are not counted.
pub fn top_ratings(table: &CatalogTable) -> CategorySummary {
    count_by(table, |r| r.rating.as_deref(), Some(TOP_N))
}

/// The [`TOP_N`] directors with the most titles.
///
/// A multi-director string counts as one distinct director.
pub fn top_directors(table: &CatalogTable) -> CategorySummary {
    count_by(table, |r| r.director.as_deref(), Some(TOP_N))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
