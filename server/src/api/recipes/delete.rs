use super::get::not_found;
use crate::api::{ApiError, MessageResponse, Status};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use cookbook_core::RecipeId;

#[utoipa::path(
    delete,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe ID (24 hex characters)")
    ),
    responses(
        (status = 200, description = "Recipe deleted", body = MessageResponse),
        (status = 400, description = "Invalid recipe ID format", body = MessageResponse),
        (status = 404, description = "Recipe not found", body = MessageResponse),
        (status = 500, description = "Store failure", body = MessageResponse)
    )
)]
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = RecipeId::parse(&id)?;

    let deleted = state
        .store
        .delete_by_id(&id)
        .await
        .map_err(|e| state.store_error(e))?;
    if !deleted {
        return Err(not_found());
    }
    tracing::info!(%id, "deleted recipe");

    Ok(Json(MessageResponse {
        status: Status::Success,
        message: "Recipe deleted successfully".to_string(),
    }))
}
