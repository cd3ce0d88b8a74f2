//! Bar-scoped entity model.
//!
//! Every entity carries an explicit `bar_id`; there is no ambient
//! "current bar" anywhere in the engine. Relations that the export engine
//! needs are carried inline on the entity, already hydrated by the store.

mod base;
mod cocktail;
mod ingredient;
mod media;

pub use base::{CocktailMethod, Glass, IngredientCategory, Utensil};
pub use cocktail::{Cocktail, CocktailIngredient, IngredientRef};
pub use ingredient::Ingredient;
pub use media::{Media, MediaOwner};

/// Tenant scope identifier. Every entity belongs to exactly one bar.
pub type BarId = i64;
