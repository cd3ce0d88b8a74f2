use super::base::{CocktailMethod, Glass};
use super::media::Media;
use serde::{Deserialize, Serialize};

/// Lightweight reference to an ingredient used inside another entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRef {
    pub id: i64,
    pub bar_id: i64,
    pub name: String,
    pub slug: String,
}

/// One ingredient usage inside a cocktail.
///
/// `ingredient` is `None` only when the relation was not hydrated by the
/// store; a usage always points at a real ingredient of the same bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CocktailIngredient {
    pub ingredient_id: i64,
    #[serde(default)]
    pub ingredient: Option<IngredientRef>,
    pub amount: f64,
    pub units: String,
    #[serde(default)]
    pub optional: bool,
    pub sort: i32,
    #[serde(default)]
    pub substitutes: Vec<IngredientRef>,
}

/// A cocktail with every relation the export engine needs carried inline.
///
/// `glass_id`/`method_id` of `None` mean the relation is genuinely absent;
/// an id with a `None` object means the store did not hydrate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cocktail {
    pub id: i64,
    pub bar_id: i64,
    pub name: String,
    pub slug: String,
    pub instructions: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub garnish: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub glass_id: Option<i64>,
    #[serde(default)]
    pub glass: Option<Glass>,
    #[serde(default)]
    pub method_id: Option<i64>,
    #[serde(default)]
    pub method: Option<CocktailMethod>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<CocktailIngredient>,
    #[serde(default)]
    pub images: Vec<Media>,
}
