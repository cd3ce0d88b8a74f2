//! Recipe dataset export orchestration.
//!
//! One sequential run per invocation: cocktails, then ingredients, then the
//! base tables, then the manifest. Each entity's record is written before
//! its media files. Any fatal error unwinds through the archive writer,
//! which discards the partial container on drop.

use crate::config::Config;
use crate::error::Result;
use crate::export::archive::ArchiveWriter;
use crate::export::encode::encode;
use crate::export::media::resolve_media;
use crate::export::record::{
    category_rows, glass_rows, method_rows, snapshot_cocktail, snapshot_ingredient, utensil_rows,
};
use crate::export::types::{ExportFormat, ExportManifest, ExportProgress, ExportReport, ExportWarning};
use crate::store::{MediaStore, RecipeStore};
use crate::model::BarId;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Producer identifier recorded in the manifest.
const CALLED_FROM: &str = "barback::export::recipes";

/// Drives the snapshot -> encode -> archive pipeline for one bar.
pub struct RecipeExporter<'a> {
    store: &'a dyn RecipeStore,
    media: &'a dyn MediaStore,
    config: Config,
}

impl<'a> RecipeExporter<'a> {
    pub fn new(store: &'a dyn RecipeStore, media: &'a dyn MediaStore, config: Config) -> Self {
        Self {
            store,
            media,
            config,
        }
    }

    /// Export one bar's dataset into a single archive container.
    ///
    /// A caller-supplied `output` path wins; otherwise the archive lands in
    /// the configured backup directory under a timestamped name. Returns
    /// the finished path together with collected warnings.
    ///
    /// # Errors
    ///
    /// Fatal errors (container creation, incomplete entities, encoding,
    /// archive I/O) abort the run and leave no file at the target path.
    pub fn export(
        &self,
        bar_id: BarId,
        output: Option<PathBuf>,
        format: ExportFormat,
        progress: Option<&dyn ExportProgress>,
    ) -> Result<ExportReport> {
        let result = self.run(bar_id, output, format, progress);
        if let (Err(e), Some(p)) = (&result, progress) {
            p.on_error(&e.to_string());
        }
        result
    }

    fn run(
        &self,
        bar_id: BarId,
        output: Option<PathBuf>,
        format: ExportFormat,
        progress: Option<&dyn ExportProgress>,
    ) -> Result<ExportReport> {
        let path = output.unwrap_or_else(|| default_output_path(&self.config.backup_dir));
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        tracing::info!("Exporting bar {} as {} to {}", bar_id, format, path.display());
        let mut writer = ArchiveWriter::create(&path)?;
        let mut warnings = Vec::new();

        let cocktails = self.dump_cocktails(bar_id, format, &mut writer, &mut warnings, progress)?;
        let ingredients = self.dump_ingredients(bar_id, format, &mut writer, &mut warnings, progress)?;
        self.dump_base_data(bar_id, format, &mut writer)?;
        self.write_manifest(&mut writer)?;

        let path = writer.finalize()?;
        tracing::info!(
            "Export finished: {} ({} cocktails, {} ingredients, {} media files, {} warnings)",
            path.display(),
            cocktails.0,
            ingredients.0,
            cocktails.1 + ingredients.1,
            warnings.len()
        );
        if let Some(p) = progress {
            p.on_complete((cocktails.0 + ingredients.0) as u64);
        }

        Ok(ExportReport {
            path,
            cocktails: cocktails.0,
            ingredients: ingredients.0,
            media_files: cocktails.1 + ingredients.1,
            warnings,
        })
    }

    fn dump_cocktails(
        &self,
        bar_id: BarId,
        format: ExportFormat,
        writer: &mut ArchiveWriter,
        warnings: &mut Vec<ExportWarning>,
        progress: Option<&dyn ExportProgress>,
    ) -> Result<(usize, usize)> {
        let cocktails = self.store.cocktails(bar_id)?;
        let total = cocktails.len() as u64;
        let mut media_files = 0;

        for (n, cocktail) in cocktails.iter().enumerate() {
            let record = snapshot_cocktail(cocktail)?;
            let bytes = encode(&record, format)?;
            writer.put_bytes(
                &format!("cocktails/{}.{}", record.id, format.extension()),
                &bytes,
            )?;

            for resolved in resolve_media(
                self.media,
                "cocktails/images",
                &record.id,
                &cocktail.images,
                warnings,
            ) {
                writer.put_file(&resolved.source, &resolved.entry_name)?;
                media_files += 1;
            }

            if let Some(p) = progress {
                p.on_progress(n as u64 + 1, total, "Exporting cocktails");
            }
        }

        Ok((cocktails.len(), media_files))
    }

    fn dump_ingredients(
        &self,
        bar_id: BarId,
        format: ExportFormat,
        writer: &mut ArchiveWriter,
        warnings: &mut Vec<ExportWarning>,
        progress: Option<&dyn ExportProgress>,
    ) -> Result<(usize, usize)> {
        let ingredients = self.store.ingredients(bar_id)?;
        let total = ingredients.len() as u64;
        let mut media_files = 0;

        for (n, ingredient) in ingredients.iter().enumerate() {
            let record = snapshot_ingredient(ingredient)?;
            let bytes = encode(&record, format)?;
            writer.put_bytes(
                &format!("ingredients/{}.{}", record.id, format.extension()),
                &bytes,
            )?;

            for resolved in resolve_media(
                self.media,
                "ingredients/images",
                &record.id,
                &ingredient.images,
                warnings,
            ) {
                writer.put_file(&resolved.source, &resolved.entry_name)?;
                media_files += 1;
            }

            if let Some(p) = progress {
                p.on_progress(n as u64 + 1, total, "Exporting ingredients");
            }
        }

        Ok((ingredients.len(), media_files))
    }

    /// Dump the four base taxonomy tables. A table with no rows for this
    /// bar produces no entry.
    fn dump_base_data(
        &self,
        bar_id: BarId,
        format: ExportFormat,
        writer: &mut ArchiveWriter,
    ) -> Result<()> {
        self.dump_rows(writer, format, "base_glasses", &glass_rows(&self.store.glasses(bar_id)?))?;
        self.dump_rows(writer, format, "base_methods", &method_rows(&self.store.methods(bar_id)?))?;
        self.dump_rows(writer, format, "base_utensils", &utensil_rows(&self.store.utensils(bar_id)?))?;
        self.dump_rows(
            writer,
            format,
            "base_ingredient_categories",
            &category_rows(&self.store.ingredient_categories(bar_id)?),
        )?;
        Ok(())
    }

    fn dump_rows<T: Serialize>(
        &self,
        writer: &mut ArchiveWriter,
        format: ExportFormat,
        name: &str,
        rows: &[T],
    ) -> Result<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let bytes = encode(&rows, format)?;
        writer.put_bytes(&format!("{}.{}", name, format.extension()), &bytes)
    }

    /// `_meta.json` is JSON in both formats.
    fn write_manifest(&self, writer: &mut ArchiveWriter) -> Result<()> {
        let manifest = ExportManifest {
            version: env!("CARGO_PKG_VERSION").to_string(),
            date: chrono::Utc::now().to_rfc3339(),
            called_from: CALLED_FROM.to_string(),
        };
        let bytes = encode(&manifest, ExportFormat::Json)?;
        writer.put_bytes("_meta.json", &bytes)
    }
}

fn default_output_path(backup_dir: &Path) -> PathBuf {
    let stamp = chrono::Local::now().format("%Y%m%d%H%M");
    backup_dir.join(format!("{}_recipes.zip", stamp))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path_shape() {
        let path = default_output_path(Path::new("/var/backups"));
        let name = path.file_name().unwrap().to_str().unwrap();

        assert!(path.starts_with("/var/backups"));
        assert!(name.ends_with("_recipes.zip"));
        let stamp = name.strip_suffix("_recipes.zip").unwrap();
        assert_eq!(stamp.len(), 12, "expected YYYYMMDDHHmm, got {stamp}");
        assert!(stamp.chars().all(|c| c.is_ascii_digit()));
    }
}
