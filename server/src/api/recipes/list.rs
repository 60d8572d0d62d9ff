use super::get::RecipeResponse;
use crate::api::{ApiError, MessageResponse, Status};
use crate::state::AppState;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use cookbook_core::{PageRequest, Pagination, RecipeFilter};
use serde::Serialize;
use utoipa::{IntoParams, ToSchema};

/// Query string as raw key/value pairs. Repeated or malformed keys are kept
/// as-is and never reject the request.
pub(super) type QueryPairs = Vec<(String, String)>;

/// First value given for `key`.
pub(super) fn first_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Page selection. Values that are missing, non-numeric or below 1 fall back
/// to the defaults. A repeated key uses its first value.
#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListRecipesParams {
    /// Page number, 1-based (default: 1)
    #[param(value_type = Option<i64>)]
    pub page: Option<String>,
    /// Page size (default: 10)
    #[param(value_type = Option<i64>)]
    pub limit: Option<String>,
}

impl ListRecipesParams {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            page: first_value(pairs, "page").map(str::to_string),
            limit: first_value(pairs, "limit").map(str::to_string),
        }
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::parse(self.page.as_deref(), self.limit.as_deref())
    }
}

/// Paged list envelope
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeListEnvelope {
    pub status: Status,
    /// Number of recipes in `data`
    pub results: usize,
    pub pagination: Pagination,
    pub data: Vec<RecipeResponse>,
}

/// Count and load one page for `filter`.
pub(super) async fn recipe_page(
    state: &AppState,
    filter: RecipeFilter,
    request: PageRequest,
) -> Result<Json<RecipeListEnvelope>, ApiError> {
    let total = state
        .store
        .count(&filter)
        .await
        .map_err(|e| state.store_error(e))?;

    let data: Vec<RecipeResponse> = state
        .store
        .find_page(&filter, request.skip(), request.limit)
        .await
        .map_err(|e| state.store_error(e))?
        .into_iter()
        .map(RecipeResponse::from)
        .collect();

    Ok(Json(RecipeListEnvelope {
        status: Status::Success,
        results: data.len(),
        pagination: Pagination::new(request, total),
        data,
    }))
}

#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = "recipes",
    params(ListRecipesParams),
    responses(
        (status = 200, description = "Page of recipes, newest first", body = RecipeListEnvelope),
        (status = 500, description = "Store failure", body = MessageResponse)
    )
)]
pub async fn list_recipes(
    State(state): State<AppState>,
    pairs: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<RecipeListEnvelope>, ApiError> {
    let pairs = pairs.map(|Query(p)| p).unwrap_or_default();
    let request = ListRecipesParams::from_pairs(&pairs).page_request();
    recipe_page(&state, RecipeFilter::All, request).await
}
