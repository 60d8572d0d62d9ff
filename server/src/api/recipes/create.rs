use super::get::RecipeEnvelope;
use crate::api::{ApiError, MessageResponse};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use cookbook_core::{RecipeInput, ValidationError};

/// Turn a body extraction failure into a validation error.
pub(super) fn malformed_body(rejection: JsonRejection) -> ApiError {
    ApiError::Validation(ValidationError::Malformed(rejection.body_text()))
}

#[utoipa::path(
    post,
    path = "/api/recipes",
    tag = "recipes",
    request_body = RecipeInput,
    responses(
        (status = 201, description = "Recipe created successfully", body = RecipeEnvelope),
        (status = 400, description = "Validation failed", body = MessageResponse),
        (status = 500, description = "Store failure", body = MessageResponse)
    )
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    body: Result<Json<RecipeInput>, JsonRejection>,
) -> Result<(StatusCode, Json<RecipeEnvelope>), ApiError> {
    let Json(input) = body.map_err(malformed_body)?;
    let recipe = input.into_valid()?;

    let created = state
        .store
        .insert(recipe)
        .await
        .map_err(|e| state.store_error(e))?;
    tracing::info!(id = %created.id, "created recipe");

    Ok((StatusCode::CREATED, RecipeEnvelope::success(created)))
}
