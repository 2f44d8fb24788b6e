use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use catalog_core::settings::DEFAULT_DATA_PATH;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Name of the per-user application directory under `$HOME`.
pub const APP_DIR: &str = ".catalog-insights";

// ── Directory bootstrap ────────────────────────────────────────────────────────

/// Ensure the standard `~/.catalog-insights/` hierarchy exists and return its
/// root.
pub fn ensure_directories() -> anyhow::Result<PathBuf> {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    ensure_directories_in(&home)
}

/// Create `<home>/.catalog-insights/` with its `logs/` and `data/`
/// subdirectories.
pub fn ensure_directories_in(home: &Path) -> anyhow::Result<PathBuf> {
    let app_dir = home.join(APP_DIR);
    std::fs::create_dir_all(&app_dir)?;
    std::fs::create_dir_all(app_dir.join("logs"))?;
    std::fs::create_dir_all(app_dir.join("data"))?;
    Ok(app_dir)
}

/// Log file used when the TUI owns the terminal and no `--log-file` is given.
pub fn default_log_file(app_dir: &Path) -> PathBuf {
    app_dir.join("logs").join("catalog-dashboard.log")
}

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Map a CLI level name to an [`EnvFilter`] directive.
///
/// Falls back to `"info"` for anything unrecognised.
pub fn filter_directive(log_level: &str) -> &'static str {
    match log_level.to_uppercase().as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARNING" | "WARN" => "warn",
        "ERROR" | "CRITICAL" => "error",
        _ => "info",
    }
}

/// Initialise the global `tracing` subscriber.
///
/// With `log_file` set, events are appended to that file without ANSI
/// colours; otherwise they go to stderr.
pub fn setup_logging(log_level: &str, log_file: Option<&Path>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(filter_directive(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let (file_layer, stderr_layer) = match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let layer = fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file));
            (Some(layer), None)
        }
        None => (
            None,
            Some(
                fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_writer(std::io::stderr),
            ),
        ),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    Ok(())
}

// ── Data-path discovery ────────────────────────────────────────────────────────

/// Decide where to read the catalog from.
///
/// Checks in order and returns the first that applies:
/// 1. the explicit `--data-path` (or last-used) value,
/// 2. `Dataset/netflix_titles_procesado.csv` under the working directory,
/// 3. `~/.catalog-insights/data/` when it exists.
///
/// Falls back to the default relative path so the load error names it.
pub fn discover_data_path(explicit: Option<PathBuf>) -> PathBuf {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    discover_data_path_in(explicit, &cwd, dirs::home_dir().as_deref())
}

/// [`discover_data_path`] with explicit working and home directories.
pub fn discover_data_path_in(explicit: Option<PathBuf>, cwd: &Path, home: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }

    let local = cwd.join(DEFAULT_DATA_PATH);
    if local.is_file() {
        return local;
    }

    if let Some(home) = home {
        let data_dir = home.join(APP_DIR).join("data");
        if data_dir.is_dir() && !catalog_data::reader::find_csv_files(&data_dir).is_empty() {
            return data_dir;
        }
    }

    PathBuf::from(DEFAULT_DATA_PATH)
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // ── ensure_directories ────────────────────────────────────────────────────

    #[test]
    fn test_ensure_directories_in() {
        let tmp = TempDir::new().expect("tempdir");

        let app_dir = ensure_directories_in(tmp.path()).expect("ensure_directories_in");

        assert_eq!(app_dir, tmp.path().join(APP_DIR));
        assert!(app_dir.is_dir());
        assert!(app_dir.join("logs").is_dir(), "logs subdir must exist");
        assert!(app_dir.join("data").is_dir(), "data subdir must exist");
    }

    #[test]
    fn test_ensure_directories_in_is_idempotent() {
        let tmp = TempDir::new().expect("tempdir");
        ensure_directories_in(tmp.path()).unwrap();
        assert!(ensure_directories_in(tmp.path()).is_ok());
    }

    #[test]
    fn test_default_log_file() {
        let path = default_log_file(Path::new("/home/u/.catalog-insights"));
        assert_eq!(
            path,
            PathBuf::from("/home/u/.catalog-insights/logs/catalog-dashboard.log")
        );
    }

    // ── filter_directive ──────────────────────────────────────────────────────

    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive("DEBUG"), "debug");
        assert_eq!(filter_directive("info"), "info");
        assert_eq!(filter_directive("WARNING"), "warn");
        assert_eq!(filter_directive("CRITICAL"), "error");
        assert_eq!(filter_directive("verbose"), "info");
    }

    // ── discover_data_path ────────────────────────────────────────────────────

    #[test]
    fn test_discover_explicit_path_wins() {
        let tmp = TempDir::new().expect("tempdir");
        let explicit = PathBuf::from("/somewhere/else.csv");
        let path = discover_data_path_in(Some(explicit.clone()), tmp.path(), Some(tmp.path()));
        assert_eq!(path, explicit);
    }

    #[test]
    fn test_discover_local_dataset() {
        let tmp = TempDir::new().expect("tempdir");
        let local = tmp.path().join(DEFAULT_DATA_PATH);
        std::fs::create_dir_all(local.parent().unwrap()).unwrap();
        std::fs::write(&local, "show_id\n").unwrap();

        let path = discover_data_path_in(None, tmp.path(), None);
        assert_eq!(path, local);
    }

    #[test]
    fn test_discover_home_data_dir() {
        let cwd = TempDir::new().expect("tempdir");
        let home = TempDir::new().expect("tempdir");
        let data_dir = ensure_directories_in(home.path()).unwrap().join("data");
        std::fs::write(data_dir.join("titles.csv"), "show_id\n").unwrap();

        let path = discover_data_path_in(None, cwd.path(), Some(home.path()));
        assert_eq!(path, data_dir);
    }

    #[test]
    fn test_discover_ignores_empty_home_data_dir() {
        let cwd = TempDir::new().expect("tempdir");
        let home = TempDir::new().expect("tempdir");
        ensure_directories_in(home.path()).unwrap();

        let path = discover_data_path_in(None, cwd.path(), Some(home.path()));
        assert_eq!(path, PathBuf::from(DEFAULT_DATA_PATH));
    }
}
