use chrono::{DateTime, Utc};
use serde::Deserialize;

use spudstock_core::{Difficulty, Potato, Quality, Recipe};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreatePotatoRequest {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub variety: String,
    #[serde(default)]
    pub origin: String,
    pub weight: f64,
    pub quality: Quality,
    /// Missing harvest dates default to now (a freshly created record is
    /// freshly harvested).
    pub harvest_date: Option<DateTime<Utc>>,
    pub price: f64,
}

impl CreatePotatoRequest {
    pub fn into_potato(self) -> Potato {
        Potato {
            id: self.id,
            variety: self.variety,
            origin: self.origin,
            weight: self.weight,
            quality: self.quality,
            harvest_date: self.harvest_date.unwrap_or_else(Utc::now),
            price: self.price,
        }
    }
}

/// Update body. The path id names the record; any id in the body is
/// ignored.
#[derive(Debug, Deserialize)]
pub struct UpdatePotatoRequest {
    #[serde(default)]
    pub variety: String,
    #[serde(default)]
    pub origin: String,
    pub weight: f64,
    pub quality: Quality,
    pub harvest_date: Option<DateTime<Utc>>,
    pub price: f64,
}

impl UpdatePotatoRequest {
    pub fn into_potato(self, id: &str) -> Potato {
        Potato {
            id: id.to_string(),
            variety: self.variety,
            origin: self.origin,
            weight: self.weight,
            quality: self.quality,
            harvest_date: self.harvest_date.unwrap_or_else(Utc::now),
            price: self.price,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateRecipeRequest {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub variety: String,
    pub cooking_time: u32,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    pub servings: u32,
}

impl CreateRecipeRequest {
    pub fn into_recipe(self) -> Recipe {
        Recipe {
            id: self.id,
            name: self.name,
            variety: self.variety,
            cooking_time: self.cooking_time,
            difficulty: self.difficulty,
            ingredients: self.ingredients,
            instructions: self.instructions,
            servings: self.servings,
        }
    }
}

// -------------------------
// Query DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct VarietyQuery {
    pub variety: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    pub variety: Option<String>,
    pub difficulty: Option<String>,
}
