use chrono::{DateTime, Utc};
use cookbook_core::{Difficulty, Recipe, RecipeId, RecipePatch, ValidRecipe};
use diesel::prelude::*;

use crate::store::StoreError;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RecipeRow {
    pub id: String,
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub time: i32,
    pub difficulty: String,
    pub category: String,
    pub cooking_method: String,
    pub kitchen_equipment: Vec<String>,
    pub chef: String,
    pub tags: Vec<String>,
    pub reviews: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<RecipeRow> for Recipe {
    type Error = StoreError;

    fn try_from(row: RecipeRow) -> Result<Self, Self::Error> {
        let id = RecipeId::parse(row.id.trim()).map_err(|_| StoreError::Corrupt {
            id: row.id.clone(),
            reason: "identifier is not 24 hex characters".to_string(),
        })?;
        let difficulty = row
            .difficulty
            .parse::<Difficulty>()
            .map_err(|e| StoreError::Corrupt {
                id: row.id.clone(),
                reason: e.to_string(),
            })?;

        Ok(Recipe {
            id,
            name: row.name,
            ingredients: row.ingredients,
            instructions: row.instructions,
            time: row.time,
            difficulty,
            category: row.category,
            cooking_method: row.cooking_method,
            kitchen_equipment: row.kitchen_equipment,
            chef: row.chef,
            tags: row.tags,
            reviews: row.reviews,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Insert payload; id and timestamps come from column defaults.
#[derive(Insertable)]
#[diesel(table_name = crate::schema::recipes)]
pub struct NewRecipeRow<'a> {
    pub name: &'a str,
    pub ingredients: &'a [String],
    pub instructions: &'a [String],
    pub time: i32,
    pub difficulty: &'a str,
    pub category: &'a str,
    pub cooking_method: &'a str,
    pub kitchen_equipment: &'a [String],
    pub chef: &'a str,
    pub tags: &'a [String],
    pub reviews: &'a [String],
}

impl<'a> From<&'a ValidRecipe> for NewRecipeRow<'a> {
    fn from(recipe: &'a ValidRecipe) -> Self {
        Self {
            name: &recipe.name,
            ingredients: &recipe.ingredients,
            instructions: &recipe.instructions,
            time: recipe.time,
            difficulty: recipe.difficulty.as_str(),
            category: &recipe.category,
            cooking_method: &recipe.cooking_method,
            kitchen_equipment: &recipe.kitchen_equipment,
            chef: &recipe.chef,
            tags: &recipe.tags,
            reviews: &recipe.reviews,
        }
    }
}

/// Partial update; `None` columns are left out of the SET clause.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::recipes)]
pub struct RecipeChangeset<'a> {
    pub name: Option<&'a str>,
    pub ingredients: Option<&'a [String]>,
    pub instructions: Option<&'a [String]>,
    pub time: Option<i32>,
    pub difficulty: Option<&'a str>,
    pub category: Option<&'a str>,
    pub cooking_method: Option<&'a str>,
    pub kitchen_equipment: Option<&'a [String]>,
    pub chef: Option<&'a str>,
    pub tags: Option<&'a [String]>,
    pub reviews: Option<&'a [String]>,
}

impl<'a> From<&'a RecipePatch> for RecipeChangeset<'a> {
    fn from(patch: &'a RecipePatch) -> Self {
        Self {
            name: patch.name.as_deref(),
            ingredients: patch.ingredients.as_deref(),
            instructions: patch.instructions.as_deref(),
            time: patch.time,
            difficulty: patch.difficulty.map(|d| d.as_str()),
            category: patch.category.as_deref(),
            cooking_method: patch.cooking_method.as_deref(),
            kitchen_equipment: patch.kitchen_equipment.as_deref(),
            chef: patch.chef.as_deref(),
            tags: patch.tags.as_deref(),
            reviews: patch.reviews.as_deref(),
        }
    }
}
