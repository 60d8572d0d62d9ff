use super::list::{
    first_value, recipe_page, ListRecipesParams, QueryPairs, RecipeListEnvelope,
};
use crate::api::{ApiError, MessageResponse};
use crate::state::AppState;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use cookbook_core::{PageRequest, RecipeFilter};
use utoipa::IntoParams;

#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchRecipesParams {
    /// Search text. Three or more characters use the full-text index over
    /// name, category and tags; shorter queries match substrings of name,
    /// category, tags and ingredients.
    pub query: Option<String>,
    #[param(value_type = Option<i64>)]
    pub page: Option<String>,
    #[param(value_type = Option<i64>)]
    pub limit: Option<String>,
}

impl SearchRecipesParams {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let paging = ListRecipesParams::from_pairs(pairs);
        Self {
            query: first_value(pairs, "query").map(str::to_string),
            page: paging.page,
            limit: paging.limit,
        }
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::parse(self.page.as_deref(), self.limit.as_deref())
    }
}

#[utoipa::path(
    get,
    path = "/api/recipes/search",
    tag = "recipes",
    params(SearchRecipesParams),
    responses(
        (status = 200, description = "Page of matching recipes", body = RecipeListEnvelope),
        (status = 400, description = "Missing search query", body = MessageResponse),
        (status = 500, description = "Store failure", body = MessageResponse)
    )
)]
pub async fn search_recipes(
    State(state): State<AppState>,
    pairs: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<RecipeListEnvelope>, ApiError> {
    let pairs = pairs.map(|Query(p)| p).unwrap_or_default();
    let params = SearchRecipesParams::from_pairs(&pairs);

    let filter = params
        .query
        .as_deref()
        .and_then(RecipeFilter::search)
        .ok_or(ApiError::MissingParameter("query"))?;
    tracing::debug!(?filter, "searching recipes");

    recipe_page(&state, filter, params.page_request()).await
}
