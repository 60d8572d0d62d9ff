use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

/// Path whose request span is demoted to TRACE so probes don't flood the log
pub const PING_PATH: &str = "/ping";

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WelcomeResponse {
    pub message: String,
    #[schema(example = "Database is connected")]
    pub db_status: String,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(welcome))
        .route(PING_PATH, get(ping))
}

#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Service banner with database status", body = WelcomeResponse)
    )
)]
pub async fn welcome(State(state): State<AppState>) -> Json<WelcomeResponse> {
    let db_status = match state.store.ping().await {
        Ok(()) => "Database is connected",
        Err(e) => {
            tracing::warn!(error = %e, "database ping failed");
            "Database is disconnected"
        }
    };

    Json(WelcomeResponse {
        message: "Welcome to the Cookbook app!".to_string(),
        db_status: db_status.to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/ping",
    tag = "health",
    responses(
        (status = 200, description = "Liveness probe", body = String, content_type = "text/plain")
    )
)]
pub async fn ping() -> &'static str {
    "Server is alive"
}

#[derive(OpenApi)]
#[openapi(paths(welcome, ping), components(schemas(WelcomeResponse)))]
pub struct ApiDoc;
