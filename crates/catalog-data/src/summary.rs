//! Chart-ready result types produced by the aggregation views.

use serde::{Deserialize, Serialize};

// ── CategorySummary ───────────────────────────────────────────────────────────

/// One bar (or pie slice): a label and how many records carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: u64,
}

/// Ordered `label → count` mapping for a single categorical column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategorySummary {
    entries: Vec<CategoryCount>,
}

impl CategorySummary {
    pub fn new(entries: Vec<CategoryCount>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[CategoryCount] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Labels in display order.
    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }

    /// Counts in display order, parallel to [`Self::labels`].
    pub fn counts(&self) -> Vec<u64> {
        self.entries.iter().map(|e| e.count).collect()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Count for `label`, if present.
    pub fn get(&self, label: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.count)
    }

    /// The first (largest, for ranked views) entry.
    pub fn leader(&self) -> Option<&CategoryCount> {
        self.entries.first()
    }
}

// ── YearlySummary ─────────────────────────────────────────────────────────────

/// Number of titles of one type added in one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyCount {
    pub kind: String,
    pub year: i32,
    pub count: u64,
}

/// All points of one type, in chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearSeries {
    pub kind: String,
    pub points: Vec<(i32, u64)>,
}

/// `(type, year) → count` mapping, ordered by type then year ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct YearlySummary {
    entries: Vec<YearlyCount>,
}

impl YearlySummary {
    pub fn new(entries: Vec<YearlyCount>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[YearlyCount] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn get(&self, kind: &str, year: i32) -> Option<u64> {
        self.entries
            .iter()
            .find(|e| e.kind == kind && e.year == year)
            .map(|e| e.count)
    }

    /// Earliest and latest year across all types.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let min = self.entries.iter().map(|e| e.year).min()?;
        let max = self.entries.iter().map(|e| e.year).max()?;
        Some((min, max))
    }

    /// Split into one connected series per type.
    ///
    /// Relies on the entries being grouped by type, which every summary
    /// built by the views guarantees.
    pub fn series(&self) -> Vec<YearSeries> {
        let mut series: Vec<YearSeries> = Vec::new();
        for entry in &self.entries {
            match series.last_mut() {
                Some(s) if s.kind == entry.kind => s.points.push((entry.year, entry.count)),
                _ => series.push(YearSeries {
                    kind: entry.kind.clone(),
                    points: vec![(entry.year, entry.count)],
                }),
            }
        }
        series
    }
}
