//! Media resolution: ordered references become archive copy instructions.

use crate::export::types::ExportWarning;
use crate::model::Media;
use crate::store::MediaStore;
use std::path::PathBuf;

/// One media file scheduled for copying into the container.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMedia {
    pub source: PathBuf,
    pub entry_name: String,
}

/// Resolve an entity's media references into `(source, entry name)` pairs.
///
/// References are ordered by ascending `sort` regardless of how the store
/// returned them, and entries are named `{dir}/{owner_id}-{n}.{ext}` with
/// `n` starting at 1 per owner. A reference whose source file is absent is
/// skipped with a warning and does not consume an index, so the numbering
/// of the produced entries stays dense.
pub fn resolve_media(
    store: &dyn MediaStore,
    dir: &str,
    owner_id: &str,
    media: &[Media],
    warnings: &mut Vec<ExportWarning>,
) -> Vec<ResolvedMedia> {
    let mut ordered: Vec<&Media> = media.iter().collect();
    ordered.sort_by_key(|m| m.sort);

    let mut resolved = Vec::with_capacity(ordered.len());
    let mut index = 1usize;

    for media in ordered {
        let source = store.source_path(media);
        if !source.is_file() {
            tracing::warn!(
                "Missing media file {} for \"{}\", skipping entry",
                source.display(),
                owner_id
            );
            warnings.push(ExportWarning::MediaMissing {
                owner: owner_id.to_string(),
                path: source,
            });
            continue;
        }

        resolved.push(ResolvedMedia {
            source,
            entry_name: format!("{}/{}-{}.{}", dir, owner_id, index, media.file_extension),
        });
        index += 1;
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MediaOwner;
    use crate::store::MemoryStore;
    use std::fs;
    use tempfile::TempDir;

    fn media(id: i64, file: &str, sort: i32) -> Media {
        Media {
            id,
            owner: MediaOwner::Cocktail(1),
            file_path: file.to_string(),
            file_extension: "jpg".to_string(),
            sort,
            copyright: None,
        }
    }

    #[test]
    fn test_entries_ordered_by_sort_not_input_order() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.jpg"), b"a").unwrap();
        fs::write(temp.path().join("b.jpg"), b"b").unwrap();
        let store = MemoryStore::new(temp.path());

        // Input arrives in reverse sort order
        let refs = vec![media(1, "b.jpg", 2), media(2, "a.jpg", 1)];
        let mut warnings = Vec::new();
        let resolved = resolve_media(&store, "cocktails/images", "negroni", &refs, &mut warnings);

        assert_eq!(resolved[0].entry_name, "cocktails/images/negroni-1.jpg");
        assert!(resolved[0].source.ends_with("a.jpg"));
        assert_eq!(resolved[1].entry_name, "cocktails/images/negroni-2.jpg");
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_missing_file_skipped_and_numbering_stays_dense() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("first.jpg"), b"1").unwrap();
        fs::write(temp.path().join("third.jpg"), b"3").unwrap();
        let store = MemoryStore::new(temp.path());

        let refs = vec![
            media(1, "first.jpg", 1),
            media(2, "gone.jpg", 2),
            media(3, "third.jpg", 3),
        ];
        let mut warnings = Vec::new();
        let resolved = resolve_media(&store, "ingredients/images", "gin", &refs, &mut warnings);

        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].entry_name, "ingredients/images/gin-1.jpg");
        assert_eq!(resolved[1].entry_name, "ingredients/images/gin-2.jpg");

        assert_eq!(warnings.len(), 1);
        let ExportWarning::MediaMissing { owner, path } = &warnings[0];
        assert_eq!(owner, "gin");
        assert!(path.ends_with("gone.jpg"));
    }

    #[test]
    fn test_numbering_restarts_per_owner() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("x.jpg"), b"x").unwrap();
        let store = MemoryStore::new(temp.path());

        let refs = vec![media(1, "x.jpg", 5)];
        let mut warnings = Vec::new();

        let first = resolve_media(&store, "cocktails/images", "mai-tai", &refs, &mut warnings);
        let second = resolve_media(&store, "cocktails/images", "zombie", &refs, &mut warnings);

        assert_eq!(first[0].entry_name, "cocktails/images/mai-tai-1.jpg");
        assert_eq!(second[0].entry_name, "cocktails/images/zombie-1.jpg");
    }
}
