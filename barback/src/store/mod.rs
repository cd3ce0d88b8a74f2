//! Collaborator boundaries: the data-access layer and media storage.
//!
//! The export engine only ever reads through these traits. Implementations
//! must return fully hydrated rows; export treats a missing relation as a
//! data-integrity bug, not something to recover from.

mod memory;

pub use memory::{Dataset, MemoryStore};

use crate::error::Result;
use crate::model::{
    BarId, Cocktail, CocktailMethod, Glass, Ingredient, IngredientCategory, Media, Utensil,
};
use std::path::PathBuf;

/// Read access to a bar's recipe dataset.
///
/// Every method is scoped by `bar_id` and returns rows with their export
/// relations hydrated (usages + substitutes + glass + method + tags +
/// images for cocktails; category + parent + images for ingredients).
pub trait RecipeStore {
    fn cocktails(&self, bar_id: BarId) -> Result<Vec<Cocktail>>;
    fn ingredients(&self, bar_id: BarId) -> Result<Vec<Ingredient>>;
    fn glasses(&self, bar_id: BarId) -> Result<Vec<Glass>>;
    fn methods(&self, bar_id: BarId) -> Result<Vec<CocktailMethod>>;
    fn utensils(&self, bar_id: BarId) -> Result<Vec<Utensil>>;
    fn ingredient_categories(&self, bar_id: BarId) -> Result<Vec<IngredientCategory>>;
}

/// Read access to stored media files.
///
/// The export engine never resizes or hashes; it only needs a readable
/// source path per reference. The file extension travels on the reference
/// itself.
pub trait MediaStore {
    fn source_path(&self, media: &Media) -> PathBuf;
}
