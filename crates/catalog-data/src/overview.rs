//! Headline figures for the top of the dashboard.

use std::collections::HashSet;

use catalog_core::dates::parse_date_added;
use catalog_core::models::CatalogTable;
use chrono::Datelike;
use serde::Serialize;

/// Catalog-wide totals shown as key metrics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogOverview {
    pub total_titles: u64,
    pub distinct_countries: u64,
    pub distinct_directors: u64,
    pub distinct_ratings: u64,
    /// Earliest year a title was added, ignoring unparsable dates.
    pub first_year_added: Option<i32>,
    /// Latest year a title was added, ignoring unparsable dates.
    pub last_year_added: Option<i32>,
    /// Titles whose `date_added` does not parse.
    pub undated_titles: u64,
}

impl CatalogOverview {
    /// Number of calendar years spanned by `date_added`, inclusive.
    pub fn years_covered(&self) -> Option<u32> {
        match (self.first_year_added, self.last_year_added) {
            (Some(first), Some(last)) => Some((last - first) as u32 + 1),
            _ => None,
        }
    }
}

/// Compute the [`CatalogOverview`] for `table`.
pub fn overview(table: &CatalogTable) -> CatalogOverview {
    let mut countries: HashSet<&str> = HashSet::new();
    let mut directors: HashSet<&str> = HashSet::new();
    let mut ratings: HashSet<&str> = HashSet::new();
    let mut first: Option<i32> = None;
    let mut last: Option<i32> = None;
    let mut undated = 0u64;

    for record in table {
        if let Some(c) = record.country.as_deref() {
            countries.insert(c);
        }
        if let Some(d) = record.director.as_deref() {
            directors.insert(d);
        }
        if let Some(r) = record.rating.as_deref() {
            ratings.insert(r);
        }

        match parse_date_added(&record.date_added) {
            Some(date) => {
                let year = date.year();
                first = Some(first.map_or(year, |f| f.min(year)));
                last = Some(last.map_or(year, |l| l.max(year)));
            }
            None => undated += 1,
        }
    }

    CatalogOverview {
        total_titles: table.len() as u64,
        distinct_countries: countries.len() as u64,
        distinct_directors: directors.len() as u64,
        distinct_ratings: ratings.len() as u64,
        first_year_added: first,
        last_year_added: last,
        undated_titles: undated,
    }
}
