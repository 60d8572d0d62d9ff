use super::create::malformed_body;
use super::get::{not_found, RecipeEnvelope};
use crate::api::{ApiError, MessageResponse};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use cookbook_core::{RecipeId, RecipeInput};

#[utoipa::path(
    put,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe ID (24 hex characters)")
    ),
    request_body = RecipeInput,
    responses(
        (status = 200, description = "Recipe updated; only supplied fields change", body = RecipeEnvelope),
        (status = 400, description = "Invalid ID or validation failed", body = MessageResponse),
        (status = 404, description = "Recipe not found", body = MessageResponse),
        (status = 500, description = "Store failure", body = MessageResponse)
    )
)]
pub async fn update_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<RecipeInput>, JsonRejection>,
) -> Result<Json<RecipeEnvelope>, ApiError> {
    let id = RecipeId::parse(&id)?;
    let Json(input) = body.map_err(malformed_body)?;
    let patch = input.into_patch()?;

    let updated = state
        .store
        .update_by_id(&id, patch)
        .await
        .map_err(|e| state.store_error(e))?
        .ok_or_else(not_found)?;
    tracing::info!(%id, "updated recipe");

    Ok(RecipeEnvelope::success(updated))
}
