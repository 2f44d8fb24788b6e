mod bootstrap;

use std::sync::Arc;

use anyhow::{Context, Result};
use catalog_core::settings::Settings;
use catalog_data::reader::LoadOptions;
use catalog_runtime::dataset_manager::DatasetManager;
use catalog_runtime::report::DashboardReport;
use catalog_ui::app::App;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::load_with_last_used();

    let app_dir = bootstrap::ensure_directories()?;
    // The TUI owns the terminal, so its logs go to a file unless told otherwise.
    let log_file = settings.log_file.clone().or_else(|| {
        (!settings.wants_json()).then(|| bootstrap::default_log_file(&app_dir))
    });
    bootstrap::setup_logging(&settings.log_level, log_file.as_deref())?;

    tracing::info!("Catalog Insights v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Output: {}, Theme: {}, Date policy: {}",
        settings.output,
        settings.theme,
        settings.date_policy.as_str()
    );

    let data_path = bootstrap::discover_data_path(settings.data_path.clone());
    let options = LoadOptions {
        delimiter: settings.delimiter_byte()?,
        missing_markers: settings.missing_markers(),
    };

    let mut manager = DatasetManager::new(&data_path, options);
    let table = manager
        .table()
        .with_context(|| format!("could not load the catalog from {}", data_path.display()))?;

    let report = DashboardReport::build(&table, settings.date_policy);

    if settings.wants_json() {
        println!("{}", report.to_json_pretty()?);
        return Ok(());
    }

    let app = App::new(&settings.theme, report, Arc::clone(&table));
    app.run().await?;

    Ok(())
}
