//! Recipe dataset export.
//!
//! Pipeline per entity: snapshot -> encode -> archive entry, with media
//! files copied alongside under a matching path. One `_meta.json` manifest
//! entry describes the run.

pub mod archive;
pub mod encode;
pub mod media;
pub mod recipes;
pub mod record;
pub mod types;

pub use archive::ArchiveWriter;
pub use recipes::RecipeExporter;
pub use types::{
    ConsoleProgress, ExportFormat, ExportManifest, ExportProgress, ExportReport, ExportWarning,
    NoopProgress,
};
