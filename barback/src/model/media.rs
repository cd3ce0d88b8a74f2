use serde::{Deserialize, Serialize};

/// The entity a media file is attached to.
///
/// A media file belongs to exactly one cocktail or one ingredient, never
/// both; dispatch happens on the variant tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum MediaOwner {
    Cocktail(i64),
    Ingredient(i64),
}

/// An ordered reference to one stored media file.
///
/// `file_path` is relative to the media root; resolving it to a readable
/// absolute path is the media store's job. `sort` defines the canonical
/// order for export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Media {
    pub id: i64,
    pub owner: MediaOwner,
    pub file_path: String,
    pub file_extension: String,
    pub sort: i32,
    #[serde(default)]
    pub copyright: Option<String>,
}
