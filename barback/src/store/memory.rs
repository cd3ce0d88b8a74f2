//! In-memory store backing the CLI and the test suite.
//!
//! Entities are held normalized; the read side hydrates relations by id
//! lookup, so insertion order inside a dataset does not matter beyond the
//! write-time invariant checks.

use super::{MediaStore, RecipeStore};
use crate::error::{Error, Result};
use crate::model::{
    BarId, Cocktail, CocktailMethod, Glass, Ingredient, IngredientCategory, Media, MediaOwner,
    Utensil,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Serializable snapshot of a full dataset, as consumed by the CLI.
///
/// `media_root` is resolved relative to the dataset file's directory when
/// it is not absolute.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub media_root: Option<PathBuf>,
    #[serde(default)]
    pub glasses: Vec<Glass>,
    #[serde(default)]
    pub methods: Vec<CocktailMethod>,
    #[serde(default)]
    pub utensils: Vec<Utensil>,
    #[serde(default)]
    pub ingredient_categories: Vec<IngredientCategory>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub cocktails: Vec<Cocktail>,
}

/// In-memory implementation of [`RecipeStore`] and [`MediaStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    media_root: PathBuf,
    glasses: Vec<Glass>,
    methods: Vec<CocktailMethod>,
    utensils: Vec<Utensil>,
    categories: Vec<IngredientCategory>,
    ingredients: Vec<Ingredient>,
    cocktails: Vec<Cocktail>,
}

impl MemoryStore {
    pub fn new(media_root: impl Into<PathBuf>) -> Self {
        Self {
            media_root: media_root.into(),
            ..Self::default()
        }
    }

    /// Build a store from a dataset file (JSON).
    pub fn from_dataset_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|e| Error::Store(format!("Cannot read dataset {}: {}", path.display(), e)))?;
        let dataset: Dataset = serde_json::from_str(&raw)
            .map_err(|e| Error::Store(format!("Cannot parse dataset {}: {}", path.display(), e)))?;

        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        let media_root = match &dataset.media_root {
            Some(root) if root.is_absolute() => root.clone(),
            Some(root) => base_dir.join(root),
            None => base_dir.to_path_buf(),
        };

        Self::from_dataset(dataset, media_root)
    }

    /// Build a store from an already-parsed dataset, running every
    /// write-time invariant check.
    pub fn from_dataset(dataset: Dataset, media_root: impl Into<PathBuf>) -> Result<Self> {
        let mut store = Self::new(media_root);

        for glass in dataset.glasses {
            store.add_glass(glass);
        }
        for method in dataset.methods {
            store.add_method(method);
        }
        for utensil in dataset.utensils {
            store.add_utensil(utensil);
        }
        for category in dataset.ingredient_categories {
            store.add_ingredient_category(category);
        }
        for ingredient in dataset.ingredients {
            store.add_ingredient(ingredient)?;
        }
        for cocktail in dataset.cocktails {
            store.add_cocktail(cocktail)?;
        }

        Ok(store)
    }

    pub fn add_glass(&mut self, glass: Glass) {
        self.glasses.push(glass);
    }

    pub fn add_method(&mut self, method: CocktailMethod) {
        self.methods.push(method);
    }

    pub fn add_utensil(&mut self, utensil: Utensil) {
        self.utensils.push(utensil);
    }

    pub fn add_ingredient_category(&mut self, category: IngredientCategory) {
        self.categories.push(category);
    }

    /// Insert an ingredient, rejecting a parent edge that would close a
    /// cycle. The walk follows already-known parents only; any cycle is
    /// caught when its final edge is inserted.
    pub fn add_ingredient(&mut self, ingredient: Ingredient) -> Result<()> {
        if let Some(parent_id) = ingredient.parent_id {
            if parent_id == ingredient.id {
                return Err(Error::IngredientCycle(format!(
                    "\"{}\" cannot be its own parent",
                    ingredient.slug
                )));
            }

            let mut cursor = Some(parent_id);
            while let Some(id) = cursor {
                if id == ingredient.id {
                    return Err(Error::IngredientCycle(format!(
                        "parent chain of \"{}\" loops back onto itself",
                        ingredient.slug
                    )));
                }
                cursor = self
                    .ingredients
                    .iter()
                    .find(|i| i.id == id)
                    .and_then(|i| i.parent_id);
            }
        }

        for image in &ingredient.images {
            if image.owner != MediaOwner::Ingredient(ingredient.id) {
                return Err(Error::Store(format!(
                    "media {} does not belong to ingredient \"{}\"",
                    image.id, ingredient.slug
                )));
            }
        }

        self.ingredients.push(ingredient);
        Ok(())
    }

    /// Insert a cocktail, rejecting usages or substitutes that reference an
    /// ingredient of another bar.
    pub fn add_cocktail(&mut self, cocktail: Cocktail) -> Result<()> {
        for usage in &cocktail.ingredients {
            let ingredient = self
                .ingredients
                .iter()
                .find(|i| i.id == usage.ingredient_id)
                .ok_or_else(|| {
                    Error::Store(format!(
                        "cocktail \"{}\" uses unknown ingredient {}",
                        cocktail.slug, usage.ingredient_id
                    ))
                })?;
            if ingredient.bar_id != cocktail.bar_id {
                return Err(Error::Store(format!(
                    "cocktail \"{}\" uses ingredient \"{}\" from another bar",
                    cocktail.slug, ingredient.slug
                )));
            }

            for substitute in &usage.substitutes {
                if substitute.bar_id != cocktail.bar_id {
                    return Err(Error::Store(format!(
                        "cocktail \"{}\" lists substitute \"{}\" from another bar",
                        cocktail.slug, substitute.slug
                    )));
                }
            }
        }

        for image in &cocktail.images {
            if image.owner != MediaOwner::Cocktail(cocktail.id) {
                return Err(Error::Store(format!(
                    "media {} does not belong to cocktail \"{}\"",
                    image.id, cocktail.slug
                )));
            }
        }

        self.cocktails.push(cocktail);
        Ok(())
    }
}

impl RecipeStore for MemoryStore {
    fn cocktails(&self, bar_id: BarId) -> Result<Vec<Cocktail>> {
        let mut rows: Vec<Cocktail> = self
            .cocktails
            .iter()
            .filter(|c| c.bar_id == bar_id)
            .cloned()
            .collect();

        for cocktail in &mut rows {
            for usage in &mut cocktail.ingredients {
                usage.ingredient = self
                    .ingredients
                    .iter()
                    .find(|i| i.id == usage.ingredient_id)
                    .map(Ingredient::to_ref);
            }
            if let Some(glass_id) = cocktail.glass_id {
                cocktail.glass = self.glasses.iter().find(|g| g.id == glass_id).cloned();
            }
            if let Some(method_id) = cocktail.method_id {
                cocktail.method = self.methods.iter().find(|m| m.id == method_id).cloned();
            }
        }

        Ok(rows)
    }

    fn ingredients(&self, bar_id: BarId) -> Result<Vec<Ingredient>> {
        let mut rows: Vec<Ingredient> = self
            .ingredients
            .iter()
            .filter(|i| i.bar_id == bar_id)
            .cloned()
            .collect();

        for ingredient in &mut rows {
            if let Some(category_id) = ingredient.category_id {
                ingredient.category = self
                    .categories
                    .iter()
                    .find(|c| c.id == category_id)
                    .cloned();
            }
            if let Some(parent_id) = ingredient.parent_id {
                ingredient.parent = self
                    .ingredients
                    .iter()
                    .find(|i| i.id == parent_id)
                    .map(Ingredient::to_ref);
            }
        }

        Ok(rows)
    }

    fn glasses(&self, bar_id: BarId) -> Result<Vec<Glass>> {
        Ok(self
            .glasses
            .iter()
            .filter(|g| g.bar_id == bar_id)
            .cloned()
            .collect())
    }

    fn methods(&self, bar_id: BarId) -> Result<Vec<CocktailMethod>> {
        Ok(self
            .methods
            .iter()
            .filter(|m| m.bar_id == bar_id)
            .cloned()
            .collect())
    }

    fn utensils(&self, bar_id: BarId) -> Result<Vec<Utensil>> {
        Ok(self
            .utensils
            .iter()
            .filter(|u| u.bar_id == bar_id)
            .cloned()
            .collect())
    }

    fn ingredient_categories(&self, bar_id: BarId) -> Result<Vec<IngredientCategory>> {
        Ok(self
            .categories
            .iter()
            .filter(|c| c.bar_id == bar_id)
            .cloned()
            .collect())
    }
}

impl MediaStore for MemoryStore {
    fn source_path(&self, media: &Media) -> PathBuf {
        self.media_root.join(&media.file_path)
    }
}
