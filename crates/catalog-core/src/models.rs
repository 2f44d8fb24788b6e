use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Marker strings that upstream cleaning writes in place of a missing
/// country or director.
pub const DEFAULT_MISSING_MARKERS: &[&str] = &["Unknown", "Desconocido"];

/// The kind of title a record describes.
///
/// The dataset is expected to contain only movies and TV shows, but any other
/// value is preserved verbatim in [`ContentType::Other`] so aggregations can
/// still count and surface it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContentType {
    Movie,
    TvShow,
    Other(String),
}

impl ContentType {
    /// The label used in the dataset and on charts.
    pub fn label(&self) -> &str {
        match self {
            ContentType::Movie => "Movie",
            ContentType::TvShow => "TV Show",
            ContentType::Other(s) => s,
        }
    }
}

impl From<&str> for ContentType {
    fn from(s: &str) -> Self {
        match s.trim() {
            "Movie" => ContentType::Movie,
            "TV Show" => ContentType::TvShow,
            other => ContentType::Other(other.to_string()),
        }
    }
}

impl From<String> for ContentType {
    fn from(s: String) -> Self {
        ContentType::from(s.as_str())
    }
}

impl From<ContentType> for String {
    fn from(kind: ContentType) -> Self {
        kind.label().to_string()
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One title in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    /// Unique identifier from the `show_id` column.
    pub show_id: String,
    /// Movie, TV show, or whatever else the dataset says.
    pub kind: ContentType,
    /// Display title, when the dataset carries one.
    #[serde(default)]
    pub title: Option<String>,
    /// Production country; `None` when the dataset marks it as missing.
    #[serde(default)]
    pub country: Option<String>,
    /// Raw `date_added` text in `DD/MM/YYYY` form.
    pub date_added: String,
    /// Director string (possibly several names); `None` when missing.
    #[serde(default)]
    pub director: Option<String>,
    /// Audience rating label, e.g. `"TV-MA"`; `None` when the cell is blank.
    #[serde(default)]
    pub rating: Option<String>,
    /// Original release year, when the dataset carries one.
    #[serde(default)]
    pub release_year: Option<i32>,
}

impl CatalogRecord {
    /// Start a record with only the identifier and type set.
    pub fn new(show_id: impl Into<String>, kind: impl Into<ContentType>) -> Self {
        Self {
            show_id: show_id.into(),
            kind: kind.into(),
            title: None,
            country: None,
            date_added: String::new(),
            director: None,
            rating: None,
            release_year: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_date_added(mut self, date_added: impl Into<String>) -> Self {
        self.date_added = date_added.into();
        self
    }

    pub fn with_director(mut self, director: impl Into<String>) -> Self {
        self.director = Some(director.into());
        self
    }

    pub fn with_rating(mut self, rating: impl Into<String>) -> Self {
        self.rating = Some(rating.into());
        self
    }

    pub fn with_release_year(mut self, year: i32) -> Self {
        self.release_year = Some(year);
        self
    }
}

/// The full, immutable set of records loaded from the dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogTable {
    records: Vec<CatalogRecord>,
    source: Option<PathBuf>,
}

impl CatalogTable {
    pub fn new(records: Vec<CatalogRecord>) -> Self {
        Self {
            records,
            source: None,
        }
    }

    /// Attach the path the records were read from.
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn records(&self) -> &[CatalogRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// File the table was loaded from, if it came from disk.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

impl FromIterator<CatalogRecord> for CatalogTable {
    fn from_iter<I: IntoIterator<Item = CatalogRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CatalogTable {
    type Item = &'a CatalogRecord;
    type IntoIter = std::slice::Iter<'a, CatalogRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_from_known_labels() {
        assert_eq!(ContentType::from("Movie"), ContentType::Movie);
        assert_eq!(ContentType::from("TV Show"), ContentType::TvShow);
        assert_eq!(ContentType::from(" Movie "), ContentType::Movie);
    }

    #[test]
    fn test_content_type_preserves_unexpected_values() {
        let kind = ContentType::from("Documentary");
        assert_eq!(kind, ContentType::Other("Documentary".to_string()));
        assert_eq!(kind.label(), "Documentary");
    }

    #[test]
    fn test_content_type_serializes_as_label() {
        let json = serde_json::to_string(&ContentType::TvShow).unwrap();
        assert_eq!(json, "\"TV Show\"");
        let back: ContentType = serde_json::from_str("\"Movie\"").unwrap();
        assert_eq!(back, ContentType::Movie);
    }

    #[test]
    fn test_record_builder() {
        let record = CatalogRecord::new("s1", "Movie")
            .with_country("India")
            .with_director("Rajiv Chilaka")
            .with_date_added("25/09/2021")
            .with_rating("TV-Y7");

        assert_eq!(record.kind, ContentType::Movie);
        assert_eq!(record.country.as_deref(), Some("India"));
        assert_eq!(record.director.as_deref(), Some("Rajiv Chilaka"));
        assert_eq!(record.rating.as_deref(), Some("TV-Y7"));
        assert!(record.title.is_none());
    }

    #[test]
    fn test_table_collects_from_iterator() {
        let table: CatalogTable = (0..3)
            .map(|i| CatalogRecord::new(format!("s{i}"), "Movie"))
            .collect();
        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
        assert!(table.source().is_none());
        assert_eq!(table.iter().count(), 3);
    }

    #[test]
    fn test_table_with_source() {
        let table = CatalogTable::new(vec![]).with_source("/tmp/titles.csv");
        assert!(table.is_empty());
        assert_eq!(table.source(), Some(Path::new("/tmp/titles.csv")));
    }
}
