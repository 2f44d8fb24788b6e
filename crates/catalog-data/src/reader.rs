//! CSV discovery and loading for Catalog Insights.
//!
//! Reads the cleaned catalog file into a [`CatalogTable`], normalising the
//! missing-value markers written by upstream cleaning into `None`.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

use catalog_core::error::{CatalogError, Result};
use catalog_core::models::{CatalogRecord, CatalogTable, ContentType, DEFAULT_MISSING_MARKERS};
use serde::Deserialize;
use tracing::{debug, info, warn};

/// Columns every dataset must provide.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "show_id",
    "type",
    "country",
    "date_added",
    "director",
    "rating",
];

// ── Options ───────────────────────────────────────────────────────────────────

/// Knobs for reading the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Values in `country` / `director` that mean "missing".
    pub missing_markers: Vec<String>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            missing_markers: DEFAULT_MISSING_MARKERS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl LoadOptions {
    fn is_missing(&self, value: &str) -> bool {
        value.is_empty() || self.missing_markers.iter().any(|m| m == value)
    }

    /// Trim `value` and map it to `None` when empty or a missing marker.
    pub fn normalize(&self, value: &str) -> Option<String> {
        let trimmed = value.trim();
        if self.is_missing(trimmed) {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

// ── Raw row ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct RawRow {
    show_id: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    title: Option<String>,
    country: String,
    date_added: String,
    director: String,
    rating: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    release_year: Option<i32>,
}

impl RawRow {
    fn into_record(self, options: &LoadOptions) -> CatalogRecord {
        CatalogRecord {
            show_id: self.show_id,
            kind: ContentType::from(self.kind.as_str()),
            title: self.title.filter(|t| !t.is_empty()),
            country: options.normalize(&self.country),
            date_added: self.date_added,
            director: options.normalize(&self.director),
            rating: Some(self.rating.trim())
                .filter(|r| !r.is_empty())
                .map(str::to_string),
            release_year: self.release_year,
        }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Find all `.csv` files recursively under `dir`, sorted by path.
pub fn find_csv_files(dir: &Path) -> Vec<PathBuf> {
    if !dir.exists() {
        warn!("Dataset directory does not exist: {}", dir.display());
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry.file_type().is_file()
                && entry
                    .path()
                    .extension()
                    .map(|ext| ext.eq_ignore_ascii_case("csv"))
                    .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files
}

/// Turn a configured location into the concrete file to read.
///
/// A file path is returned as-is; a directory resolves to its first CSV file.
pub fn resolve_dataset_path(path: &Path) -> Result<PathBuf> {
    if path.is_file() {
        return Ok(path.to_path_buf());
    }
    if path.is_dir() {
        return find_csv_files(path)
            .into_iter()
            .next()
            .ok_or_else(|| CatalogError::unavailable(path, "no CSV files found"));
    }
    Err(CatalogError::unavailable(path, "file not found"))
}

/// Load the dataset at `path` into a [`CatalogTable`].
///
/// Fails with [`CatalogError::DataUnavailable`] when the file is missing,
/// unreadable, lacks a required column, or contains an undecodable row.
pub fn load(path: &Path, options: &LoadOptions) -> Result<CatalogTable> {
    let resolved = resolve_dataset_path(path)?;
    let started = Instant::now();

    let file =
        std::fs::File::open(&resolved).map_err(|e| CatalogError::unavailable(&resolved, e))?;
    let records = read_records(file, options, &resolved)?;

    info!(
        "Loaded {} records from {} in {:.2?}",
        records.len(),
        resolved.display(),
        started.elapsed()
    );

    Ok(CatalogTable::new(records).with_source(resolved))
}

/// Load records from any reader, e.g. an in-memory buffer.
pub fn load_from_reader<R: Read>(reader: R, options: &LoadOptions) -> Result<CatalogTable> {
    let records = read_records(reader, options, Path::new("<reader>"))?;
    Ok(CatalogTable::new(records))
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn read_records<R: Read>(
    reader: R,
    options: &LoadOptions,
    origin: &Path,
) -> Result<Vec<CatalogRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| CatalogError::unavailable(origin, e))?
        .clone();
    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .copied()
        .find(|col| !headers.iter().any(|h| h == *col))
    {
        return Err(CatalogError::unavailable(
            origin,
            format!("missing column '{}'", missing),
        ));
    }

    let mut records = Vec::new();
    let mut missing_country = 0usize;
    let mut missing_director = 0usize;

    for row in rdr.deserialize::<RawRow>() {
        let row = row.map_err(|e| CatalogError::unavailable(origin, e))?;
        let record = row.into_record(options);
        if record.country.is_none() {
            missing_country += 1;
        }
        if record.director.is_none() {
            missing_director += 1;
        }
        records.push(record);
    }

    debug!(
        "{}: {} rows, {} without country, {} without director",
        origin.display(),
        records.len(),
        missing_country,
        missing_director,
    );

    Ok(records)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
