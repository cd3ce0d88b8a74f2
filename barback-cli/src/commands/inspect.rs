//! Inspect command implementation.

use anyhow::{Context, Result};
use barback::export::ExportManifest;
use std::fs::File;
use std::path::Path;
use zip::ZipArchive;

/// Print a produced archive's manifest and entry list.
pub fn run_inspect(path: &Path) -> Result<()> {
    tracing::info!("Inspecting archive {}", path.display());

    let file = File::open(path).with_context(|| format!("Cannot open {}", path.display()))?;
    let mut archive = ZipArchive::new(file).context("Not a valid archive container")?;

    match archive.by_name("_meta.json") {
        Ok(entry) => {
            let manifest: ExportManifest =
                serde_json::from_reader(entry).context("Cannot parse _meta.json")?;
            println!("Produced by {} v{} on {}", manifest.called_from, manifest.version, manifest.date);
        }
        Err(_) => println!("No _meta.json manifest present"),
    }

    println!();
    for i in 0..archive.len() {
        let entry = archive.by_index(i).context("Cannot read entry")?;
        println!("{:>10}  {}", entry.size(), entry.name());
    }
    println!();
    println!("{} entries", archive.len());

    Ok(())
}
