//! Export command implementation.

use anyhow::{Context, Result};
use barback::export::{ConsoleProgress, ExportFormat, ExportProgress, RecipeExporter};
use barback::store::MemoryStore;
use barback::Config;
use std::path::{Path, PathBuf};

/// Run the export command.
pub fn run_export(
    dataset: &Path,
    bar_id: i64,
    output: Option<PathBuf>,
    format: ExportFormat,
    backup_dir: Option<PathBuf>,
    no_progress: bool,
) -> Result<()> {
    tracing::info!("Exporting bar {} in {} format", bar_id, format);

    let store = MemoryStore::from_dataset_file(dataset)
        .with_context(|| format!("Failed to load dataset {}", dataset.display()))?;

    let mut config = Config::default();
    if let Some(dir) = backup_dir {
        config.backup_dir = dir;
    }

    let progress = if no_progress {
        None
    } else {
        Some(ConsoleProgress::new("Export:"))
    };
    let progress_ref: Option<&dyn ExportProgress> =
        progress.as_ref().map(|p| p as &dyn ExportProgress);

    let exporter = RecipeExporter::new(&store, &store, config);
    let report = exporter
        .export(bar_id, output, format, progress_ref)
        .context("Export failed")?;

    println!();
    println!(
        "Exported {} cocktails, {} ingredients, {} media files",
        report.cocktails, report.ingredients, report.media_files
    );
    for warning in &report.warnings {
        println!("Warning: {}", warning);
    }
    println!("Export complete: {}", report.path.display());

    Ok(())
}
