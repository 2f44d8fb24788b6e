//! Load-once handle to the catalog dataset.
//!
//! [`DatasetManager::table`] reads the file on first use and hands out the
//! same [`Arc<CatalogTable>`] afterwards, so every render shares one
//! immutable table. [`DatasetManager::reload`] replaces it explicitly.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use catalog_core::error::Result;
use catalog_core::models::CatalogTable;
use catalog_data::reader::{self, LoadOptions};

/// Owns the dataset location and the loaded table.
///
/// # Example
/// ```no_run
/// use catalog_runtime::dataset_manager::DatasetManager;
/// use catalog_runtime::data::reader::LoadOptions;
///
/// let mut mgr = DatasetManager::new("Dataset/titles.csv", LoadOptions::default());
/// let table = mgr.table().expect("dataset");
/// println!("{} titles", table.len());
/// ```
pub struct DatasetManager {
    /// File or directory the table is read from.
    path: PathBuf,
    /// Reader configuration.
    options: LoadOptions,
    /// The loaded table, shared read-only with every consumer.
    cache: Option<Arc<CatalogTable>>,
    /// When the cache was last populated.
    loaded_at: Option<Instant>,
    /// Human-readable description of the last load failure.
    last_error: Option<String>,
}

impl DatasetManager {
    pub fn new(path: impl Into<PathBuf>, options: LoadOptions) -> Self {
        Self {
            path: path.into(),
            options,
            cache: None,
            loaded_at: None,
            last_error: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Return the table, loading it on the first call.
    pub fn table(&mut self) -> Result<Arc<CatalogTable>> {
        if let Some(table) = &self.cache {
            tracing::debug!("returning cached catalog table");
            return Ok(Arc::clone(table));
        }
        self.reload()
    }

    /// Read the dataset again and replace the cached table.
    ///
    /// On failure the previous table is dropped as well.
    pub fn reload(&mut self) -> Result<Arc<CatalogTable>> {
        match reader::load(&self.path, &self.options) {
            Ok(table) => {
                let table = Arc::new(table);
                tracing::debug!(records = table.len(), "catalog table loaded");
                self.cache = Some(Arc::clone(&table));
                self.loaded_at = Some(Instant::now());
                self.last_error = None;
                Ok(table)
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load catalog table");
                self.cache = None;
                self.loaded_at = None;
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Whether a table is currently held.
    pub fn is_loaded(&self) -> bool {
        self.cache.is_some()
    }

    /// When the current table was loaded, or `None` if nothing is loaded.
    pub fn loaded_at(&self) -> Option<Instant> {
        self.loaded_at
    }

    /// Description of the last load failure, or `None`.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::error::CatalogError;
    use std::time::Duration;
    use tempfile::TempDir;

    const HEADER: &str = "show_id,type,country,date_added,director,rating\n";

    fn write_dataset(dir: &TempDir, rows: &[&str]) -> PathBuf {
        let path = dir.path().join("titles.csv");
        let mut body = HEADER.to_string();
        for row in rows {
            body.push_str(row);
            body.push('\n');
        }
        std::fs::write(&path, body).expect("write dataset");
        path
    }

    #[test]
    fn test_nothing_loaded_before_first_call() {
        let dir = TempDir::new().unwrap();
        let mgr = DatasetManager::new(dir.path().join("titles.csv"), LoadOptions::default());
        assert!(!mgr.is_loaded());
        assert!(mgr.loaded_at().is_none());
        assert!(mgr.last_error().is_none());
    }

    #[test]
    fn test_table_loads_once_and_shares_reference() {
        let dir = TempDir::new().unwrap();
        let path = write_dataset(&dir, &["s1,Movie,USA,01/01/2020,A,PG"]);
        let mut mgr = DatasetManager::new(&path, LoadOptions::default());

        let first = mgr.table().unwrap();
        let ts1 = mgr.loaded_at().unwrap();

        // Changing the file does not affect the cached table.
        write_dataset(&dir, &["s1,Movie,USA,01/01/2020,A,PG", "s2,Movie,USA,01/01/2020,B,PG"]);
        let second = mgr.table().unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.len(), 1);
        assert_eq!(mgr.loaded_at().unwrap(), ts1);
    }

    #[test]
    fn test_reload_picks_up_changes() {
        let dir = TempDir::new().unwrap();
        let path = write_dataset(&dir, &["s1,Movie,USA,01/01/2020,A,PG"]);
        let mut mgr = DatasetManager::new(&path, LoadOptions::default());

        let first = mgr.table().unwrap();
        let ts1 = mgr.loaded_at().unwrap();
        std::thread::sleep(Duration::from_millis(5));

        write_dataset(&dir, &["s1,Movie,USA,01/01/2020,A,PG", "s2,Movie,USA,01/01/2020,B,PG"]);
        let second = mgr.reload().unwrap();

        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(second.len(), 2);
        assert!(mgr.loaded_at().unwrap() > ts1);
        // Holders of the old table still see the old data.
        assert_eq!(first.len(), 1);
    }

    #[test]
    fn test_missing_file_records_error() {
        let dir = TempDir::new().unwrap();
        let mut mgr = DatasetManager::new(dir.path().join("absent.csv"), LoadOptions::default());

        let err = mgr.table().unwrap_err();
        assert!(matches!(err, CatalogError::DataUnavailable { .. }));
        assert!(!mgr.is_loaded());
        assert!(mgr.last_error().unwrap().contains("Dataset unavailable"));
    }

    #[test]
    fn test_failed_reload_drops_previous_table() {
        let dir = TempDir::new().unwrap();
        let path = write_dataset(&dir, &["s1,Movie,USA,01/01/2020,A,PG"]);
        let mut mgr = DatasetManager::new(&path, LoadOptions::default());
        mgr.table().unwrap();

        std::fs::remove_file(&path).unwrap();
        assert!(mgr.reload().is_err());
        assert!(!mgr.is_loaded());
        assert!(mgr.loaded_at().is_none());
    }

    #[test]
    fn test_success_clears_last_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("titles.csv");
        let mut mgr = DatasetManager::new(&path, LoadOptions::default());

        assert!(mgr.table().is_err());
        assert!(mgr.last_error().is_some());

        write_dataset(&dir, &["s1,Movie,USA,01/01/2020,A,PG"]);
        mgr.table().unwrap();
        assert!(mgr.last_error().is_none());
    }
}
