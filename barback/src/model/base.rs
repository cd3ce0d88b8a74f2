//! Base taxonomy rows: simple name/description tables scoped to a bar.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Glass {
    pub id: i64,
    pub bar_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CocktailMethod {
    pub id: i64,
    pub bar_id: i64,
    pub name: String,
    pub dilution_percentage: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Utensil {
    pub id: i64,
    pub bar_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientCategory {
    pub id: i64,
    pub bar_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}
