//! Entity snapshotting: hydrated entities become canonical records.
//!
//! A record is a plain serde struct, so its key set and order are fixed by
//! the declaration and identical across runs. `_id` names both the
//! serialized entry and the media files that belong to it.

use crate::error::{Error, Result};
use crate::model::{Cocktail, Glass, Ingredient, IngredientCategory, CocktailMethod, Utensil};
use serde::{Deserialize, Serialize};

/// Canonical form of one cocktail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CocktailRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub instructions: String,
    pub description: Option<String>,
    pub garnish: Option<String>,
    pub source: Option<String>,
    pub glass: Option<String>,
    pub method: Option<MethodRecord>,
    pub tags: Vec<String>,
    pub ingredients: Vec<UsageRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodRecord {
    pub name: String,
    pub dilution_percentage: i32,
}

/// One ingredient usage inside a cocktail record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageRecord {
    pub name: String,
    pub amount: f64,
    pub units: String,
    pub optional: bool,
    pub substitutes: Vec<String>,
}

/// Canonical form of one ingredient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub category: Option<String>,
    pub strength: f64,
    pub description: Option<String>,
    pub origin: Option<String>,
    pub color: Option<String>,
    pub parent: Option<String>,
}

// Base-table dump rows. Only the shareable columns survive the projection;
// ids and bar scoping stay behind.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlassRow {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodRow {
    pub name: String,
    pub dilution_percentage: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtensilRow {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRow {
    pub name: String,
    pub description: Option<String>,
}

/// Snapshot a hydrated cocktail into its canonical record.
///
/// Usages are emitted in ascending `sort` order; tags and substitutes keep
/// their stored order.
///
/// # Errors
///
/// Returns [`Error::IncompleteEntity`] if a required relation was not
/// hydrated by the store.
pub fn snapshot_cocktail(cocktail: &Cocktail) -> Result<CocktailRecord> {
    if cocktail.glass_id.is_some() && cocktail.glass.is_none() {
        return Err(incomplete("cocktail", &cocktail.slug, "glass"));
    }
    if cocktail.method_id.is_some() && cocktail.method.is_none() {
        return Err(incomplete("cocktail", &cocktail.slug, "method"));
    }

    let mut usages = cocktail.ingredients.clone();
    usages.sort_by_key(|u| u.sort);

    let ingredients = usages
        .iter()
        .map(|usage| {
            let ingredient = usage
                .ingredient
                .as_ref()
                .ok_or_else(|| incomplete("cocktail", &cocktail.slug, "ingredient"))?;
            Ok(UsageRecord {
                name: ingredient.name.clone(),
                amount: usage.amount,
                units: usage.units.clone(),
                optional: usage.optional,
                substitutes: usage.substitutes.iter().map(|s| s.name.clone()).collect(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CocktailRecord {
        id: cocktail.slug.clone(),
        name: cocktail.name.clone(),
        instructions: cocktail.instructions.clone(),
        description: cocktail.description.clone(),
        garnish: cocktail.garnish.clone(),
        source: cocktail.source.clone(),
        glass: cocktail.glass.as_ref().map(|g| g.name.clone()),
        method: cocktail.method.as_ref().map(|m| MethodRecord {
            name: m.name.clone(),
            dilution_percentage: m.dilution_percentage,
        }),
        tags: cocktail.tags.clone(),
        ingredients,
    })
}

/// Snapshot a hydrated ingredient into its canonical record.
///
/// # Errors
///
/// Returns [`Error::IncompleteEntity`] if the category, or a present
/// parent edge, was not hydrated by the store.
pub fn snapshot_ingredient(ingredient: &Ingredient) -> Result<IngredientRecord> {
    if ingredient.category_id.is_some() && ingredient.category.is_none() {
        return Err(incomplete("ingredient", &ingredient.slug, "category"));
    }
    if ingredient.parent_id.is_some() && ingredient.parent.is_none() {
        return Err(incomplete("ingredient", &ingredient.slug, "parent"));
    }

    Ok(IngredientRecord {
        id: ingredient.slug.clone(),
        name: ingredient.name.clone(),
        category: ingredient.category.as_ref().map(|c| c.name.clone()),
        strength: ingredient.strength,
        description: ingredient.description.clone(),
        origin: ingredient.origin.clone(),
        color: ingredient.color.clone(),
        parent: ingredient.parent.as_ref().map(|p| p.name.clone()),
    })
}

pub fn glass_rows(glasses: &[Glass]) -> Vec<GlassRow> {
    glasses
        .iter()
        .map(|g| GlassRow {
            name: g.name.clone(),
            description: g.description.clone(),
        })
        .collect()
}

pub fn method_rows(methods: &[CocktailMethod]) -> Vec<MethodRow> {
    methods
        .iter()
        .map(|m| MethodRow {
            name: m.name.clone(),
            dilution_percentage: m.dilution_percentage,
        })
        .collect()
}

pub fn utensil_rows(utensils: &[Utensil]) -> Vec<UtensilRow> {
    utensils
        .iter()
        .map(|u| UtensilRow {
            name: u.name.clone(),
            description: u.description.clone(),
        })
        .collect()
}

pub fn category_rows(categories: &[IngredientCategory]) -> Vec<CategoryRow> {
    categories
        .iter()
        .map(|c| CategoryRow {
            name: c.name.clone(),
            description: c.description.clone(),
        })
        .collect()
}

fn incomplete(kind: &'static str, id: &str, relation: &'static str) -> Error {
    Error::IncompleteEntity {
        kind,
        id: id.to_string(),
        relation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CocktailIngredient, IngredientRef};

    fn usage(name: &str, sort: i32) -> CocktailIngredient {
        CocktailIngredient {
            ingredient_id: sort as i64,
            ingredient: Some(IngredientRef {
                id: sort as i64,
                bar_id: 1,
                name: name.to_string(),
                slug: name.to_lowercase(),
            }),
            amount: 30.0,
            units: "ml".to_string(),
            optional: false,
            sort,
            substitutes: vec![],
        }
    }

    fn cocktail() -> Cocktail {
        Cocktail {
            id: 1,
            bar_id: 1,
            name: "Negroni".to_string(),
            slug: "negroni".to_string(),
            instructions: "Stir over ice.\nStrain.".to_string(),
            description: None,
            garnish: Some("Orange peel".to_string()),
            source: None,
            glass_id: None,
            glass: None,
            method_id: None,
            method: None,
            tags: vec!["bitter".to_string()],
            ingredients: vec![usage("Campari", 2), usage("Gin", 1)],
            images: vec![],
        }
    }

    #[test]
    fn test_snapshot_is_deterministic() {
        let c = cocktail();
        assert_eq!(snapshot_cocktail(&c).unwrap(), snapshot_cocktail(&c).unwrap());
    }

    #[test]
    fn test_usages_ordered_by_sort() {
        let record = snapshot_cocktail(&cocktail()).unwrap();
        let names: Vec<&str> = record.ingredients.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Gin", "Campari"]);
    }

    #[test]
    fn test_unhydrated_usage_is_incomplete() {
        let mut c = cocktail();
        c.ingredients[0].ingredient = None;
        let result = snapshot_cocktail(&c);
        assert!(matches!(
            result,
            Err(Error::IncompleteEntity { relation: "ingredient", .. })
        ));
    }

    #[test]
    fn test_unhydrated_glass_is_incomplete() {
        let mut c = cocktail();
        c.glass_id = Some(7);
        let result = snapshot_cocktail(&c);
        assert!(matches!(
            result,
            Err(Error::IncompleteEntity { relation: "glass", .. })
        ));
    }

    #[test]
    fn test_unhydrated_category_is_incomplete() {
        let ingredient = Ingredient {
            id: 1,
            bar_id: 1,
            name: "Gin".to_string(),
            slug: "gin".to_string(),
            category_id: Some(1),
            category: None,
            strength: 40.0,
            description: None,
            origin: None,
            color: None,
            parent_id: None,
            parent: None,
            images: vec![],
        };
        let result = snapshot_ingredient(&ingredient);
        assert!(matches!(
            result,
            Err(Error::IncompleteEntity { relation: "category", .. })
        ));
    }

    #[test]
    fn test_record_id_is_slug() {
        let record = snapshot_cocktail(&cocktail()).unwrap();
        assert_eq!(record.id, "negroni");
    }
}
