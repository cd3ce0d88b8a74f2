use super::base::IngredientCategory;
use super::cocktail::IngredientRef;
use super::media::Media;
use serde::{Deserialize, Serialize};

/// An ingredient, optionally parented to another ingredient of the same bar.
///
/// The parent edge is a plain id plus a one-level hydrated reference; the
/// store rejects writes that would turn the parent chain into a cycle, so
/// export never has to walk the full tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: i64,
    pub bar_id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub category: Option<IngredientCategory>,
    pub strength: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub parent: Option<IngredientRef>,
    #[serde(default)]
    pub images: Vec<Media>,
}

impl Ingredient {
    /// Reference form of this ingredient, as embedded in usages and
    /// substitute lists.
    pub fn to_ref(&self) -> IngredientRef {
        IngredientRef {
            id: self.id,
            bar_id: self.bar_id,
            name: self.name.clone(),
            slug: self.slug.clone(),
        }
    }
}
