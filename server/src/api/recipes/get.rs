use crate::api::{ApiError, MessageResponse, Status};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use cookbook_core::{cooking_time_display, Difficulty, Recipe, RecipeId};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeResponse {
    #[serde(rename = "_id")]
    pub id: RecipeId,
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    /// Minutes
    pub time: i32,
    /// Derived from `time`, e.g. "1 hr 30 min"
    pub cooking_time_display: String,
    pub difficulty: Difficulty,
    pub category: String,
    pub cooking_method: String,
    pub kitchen_equipment: Vec<String>,
    pub chef: String,
    pub tags: Vec<String>,
    pub reviews: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        Self {
            cooking_time_display: cooking_time_display(recipe.time),
            id: recipe.id,
            name: recipe.name,
            ingredients: recipe.ingredients,
            instructions: recipe.instructions,
            time: recipe.time,
            difficulty: recipe.difficulty,
            category: recipe.category,
            cooking_method: recipe.cooking_method,
            kitchen_equipment: recipe.kitchen_equipment,
            chef: recipe.chef,
            tags: recipe.tags,
            reviews: recipe.reviews,
            created_at: recipe.created_at,
            updated_at: recipe.updated_at,
        }
    }
}

/// Single-recipe envelope
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeEnvelope {
    pub status: Status,
    pub data: RecipeResponse,
}

impl RecipeEnvelope {
    pub fn success(recipe: Recipe) -> Json<Self> {
        Json(Self {
            status: Status::Success,
            data: recipe.into(),
        })
    }
}

pub(super) fn not_found() -> ApiError {
    ApiError::NotFound("Recipe not found".to_string())
}

#[utoipa::path(
    get,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe ID (24 hex characters)")
    ),
    responses(
        (status = 200, description = "Recipe details", body = RecipeEnvelope),
        (status = 400, description = "Invalid recipe ID format", body = MessageResponse),
        (status = 404, description = "Recipe not found", body = MessageResponse),
        (status = 500, description = "Store failure", body = MessageResponse)
    )
)]
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RecipeEnvelope>, ApiError> {
    let id = RecipeId::parse(&id)?;

    let recipe = state
        .store
        .find_by_id(&id)
        .await
        .map_err(|e| state.store_error(e))?
        .ok_or_else(not_found)?;

    Ok(RecipeEnvelope::success(recipe))
}
