pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod search;
pub mod update;

use crate::state::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/recipes endpoints (mounted at /api/recipes)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_recipes).post(create::create_recipe))
        .route("/search", get(search::search_recipes))
        .route(
            "/{id}",
            get(get::get_recipe)
                .put(update::update_recipe)
                .delete(delete::delete_recipe),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_recipes,
        search::search_recipes,
        get::get_recipe,
        create::create_recipe,
        update::update_recipe,
        delete::delete_recipe,
    ),
    components(schemas(
        cookbook_core::RecipeInput,
        cookbook_core::RecipeId,
        cookbook_core::Difficulty,
        cookbook_core::Pagination,
        get::RecipeResponse,
        get::RecipeEnvelope,
        list::RecipeListEnvelope,
    ))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use crate::api::test_support::*;
    use crate::config::Environment;
    use crate::store::FakeRecipeStore;
    use axum::http::StatusCode;
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn tea() -> Value {
        json!({
            "name": "Tea",
            "ingredients": ["water", "tea leaves"],
            "instructions": ["boil", "steep"],
            "time": 5,
            "difficulty": "Easy",
            "category": "Beverage",
            "cookingMethod": "Boiling",
            "chef": "Ana",
            "tags": ["drink"]
        })
    }

    fn recipe(name: &str, category: &str, tags: &[&str]) -> Value {
        let mut body = tea();
        body["name"] = json!(name);
        body["category"] = json!(category);
        body["tags"] = json!(tags);
        body["ingredients"] = json!(["salt"]);
        body
    }

    async fn create(app: &axum::Router, body: Value) -> String {
        let (status, body) = send(app, "POST", "/api/recipes", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED, "create failed: {body}");
        body["data"]["_id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_create_tea() {
        let (app, _) = app();
        let (status, body) = send(&app, "POST", "/api/recipes", Some(tea())).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["status"], "success");
        let data = &body["data"];
        assert_eq!(data["name"], "Tea");
        assert_eq!(data["time"], 5);
        assert_eq!(data["cookingTimeDisplay"], "5 minutes");
        assert_eq!(data["kitchenEquipment"], json!([]));
        assert_eq!(data["reviews"], json!([]));
        assert_eq!(data["_id"].as_str().unwrap().len(), 24);
        assert_eq!(data["createdAt"], data["updatedAt"]);
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let (app, _) = app();
        let id = create(&app, tea()).await;

        let (status, body) = send(&app, "GET", &format!("/api/recipes/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["_id"], id.as_str());
        assert_eq!(body["data"]["ingredients"], json!(["water", "tea leaves"]));
        assert_eq!(body["data"]["difficulty"], "Easy");

        let upper = id.to_ascii_uppercase();
        let (status, _) = send(&app, "GET", &format!("/api/recipes/{upper}"), None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_get_rejects_malformed_id() {
        let (app, _) = app();
        let (status, body) = send(&app, "GET", "/api/recipes/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "fail");
        assert_eq!(body["message"], "Invalid recipe ID format: abc");
    }

    #[tokio::test]
    async fn test_get_unassigned_id() {
        let (app, _) = app();
        let (status, body) =
            send(&app, "GET", "/api/recipes/000000000000000000000000", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"], "fail");
        assert_eq!(body["message"], "Recipe not found");
    }

    #[tokio::test]
    async fn test_create_time_boundary() {
        let (app, _) = app();
        let mut body = tea();
        body["time"] = json!(1440);
        let id = create(&app, body).await;
        assert_eq!(id.len(), 24);

        let mut body = tea();
        body["time"] = json!(1441);
        let (status, body) = send(&app, "POST", "/api/recipes", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "fail");
        assert!(body["message"].as_str().unwrap().contains("time"));

        let (_, list) = send(&app, "GET", "/api/recipes", None).await;
        assert_eq!(list["pagination"]["total"], 1);
    }

    #[tokio::test]
    async fn test_create_name_too_short() {
        let (app, _) = app();
        let mut body = tea();
        body["name"] = json!("Te");
        let (status, body) = send(&app, "POST", "/api/recipes", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].as_str().unwrap().contains("name"));
    }

    #[tokio::test]
    async fn test_create_reports_every_missing_field() {
        let (app, _) = app();
        let (status, body) = send(&app, "POST", "/api/recipes", Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let message = body["message"].as_str().unwrap();
        for field in ["name", "ingredients", "instructions", "time", "difficulty", "tags"] {
            assert!(message.contains(field), "{field} missing from {message}");
        }
    }

    #[tokio::test]
    async fn test_create_rejects_malformed_bodies() {
        let (app, _) = app();

        let (status, body) = send_raw(&app, "POST", "/api/recipes", "{not json".to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["status"], "fail");

        let mut wrong_type = tea();
        wrong_type["time"] = json!("5");
        let (status, _) = send(&app, "POST", "/api/recipes", Some(wrong_type)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let mut unknown = tea();
        unknown["rating"] = json!(5);
        let (status, body) = send(&app, "POST", "/api/recipes", Some(unknown)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].as_str().unwrap().contains("rating"));
    }

    #[tokio::test]
    async fn test_create_rejects_nul_characters() {
        let (app, _) = app();
        let mut body = tea();
        body["category"] = json!("Bev\u{0}erage");
        let (status, body) = send(&app, "POST", "/api/recipes", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "fail");
        assert!(body["message"].as_str().unwrap().contains("category"));

        let (_, list) = send(&app, "GET", "/api/recipes", None).await;
        assert_eq!(list["pagination"]["total"], 0);
    }

    #[tokio::test]
    async fn test_create_strips_legacy_ids() {
        let (app, _) = app();
        let mut body = tea();
        body["tags"] = json!(["drink", "5f8d0d55b54764421b7156c9"]);
        body["chef"] = json!("5f8d0d55b54764421b7156ca");
        let (status, body) = send(&app, "POST", "/api/recipes", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["tags"], json!(["drink"]));
        assert_eq!(body["data"]["chef"], "Not specified");

        let mut only_legacy = tea();
        only_legacy["tags"] = json!(["5f8d0d55b54764421b7156c9"]);
        let (status, _) = send(&app, "POST", "/api/recipes", Some(only_legacy)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_applies_supplied_fields() {
        let (app, _) = app();
        let id = create(&app, tea()).await;

        let (status, body) = send(
            &app,
            "PUT",
            &format!("/api/recipes/{id}"),
            Some(json!({"time": 90, "tags": ["hot", "drink"]})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let data = &body["data"];
        assert_eq!(data["time"], 90);
        assert_eq!(data["cookingTimeDisplay"], "1 hr 30 min");
        assert_eq!(data["tags"], json!(["hot", "drink"]));
        assert_eq!(data["name"], "Tea");
        assert_eq!(data["_id"], id.as_str());
    }

    #[tokio::test]
    async fn test_update_accepts_echoed_response() {
        let (app, _) = app();
        let id = create(&app, tea()).await;
        let (_, fetched) = send(&app, "GET", &format!("/api/recipes/{id}"), None).await;

        let mut echoed = fetched["data"].clone();
        echoed["name"] = json!("Green Tea");
        let (status, body) =
            send(&app, "PUT", &format!("/api/recipes/{id}"), Some(echoed)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["name"], "Green Tea");
    }

    #[tokio::test]
    async fn test_update_errors() {
        let (app, _) = app();
        let id = create(&app, tea()).await;

        let (status, _) = send(&app, "PUT", "/api/recipes/abc", Some(json!({"time": 10}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(
            &app,
            "PUT",
            "/api/recipes/000000000000000000000000",
            Some(json!({"time": 10})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(
            &app,
            "PUT",
            &format!("/api/recipes/{id}"),
            Some(json!({"difficulty": "Extreme"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, body) = send(&app, "GET", &format!("/api/recipes/{id}"), None).await;
        assert_eq!(body["data"]["difficulty"], "Easy");
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let (app, _) = app();
        let id = create(&app, tea()).await;
        let path = format!("/api/recipes/{id}");

        let (status, body) = send(&app, "DELETE", &path, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "success");
        assert_eq!(body["message"], "Recipe deleted successfully");

        let (status, body) = send(&app, "DELETE", &path, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"], "fail");

        let (status, _) = send(&app, "GET", &path, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, "DELETE", "/api/recipes/xyz", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_empty() {
        let (app, _) = app();
        let (status, body) = send(&app, "GET", "/api/recipes", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "success");
        assert_eq!(body["results"], 0);
        assert_eq!(body["data"], json!([]));
        assert_eq!(
            body["pagination"],
            json!({"total": 0, "page": 1, "pages": 0, "limit": 10})
        );
    }

    #[tokio::test]
    async fn test_list_pages_newest_first() {
        let (app, _) = app();
        for n in 1..=5 {
            create(&app, recipe(&format!("Recipe {n}"), "Dinner", &["main"])).await;
        }

        let (status, body) = send(&app, "GET", "/api/recipes?page=2&limit=2", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["results"], 2);
        assert_eq!(
            body["pagination"],
            json!({"total": 5, "page": 2, "pages": 3, "limit": 2})
        );
        assert_eq!(body["data"][0]["name"], "Recipe 3");
        assert_eq!(body["data"][1]["name"], "Recipe 2");

        let (_, body) = send(&app, "GET", "/api/recipes?page=3&limit=2", None).await;
        assert_eq!(body["results"], 1);
        assert_eq!(body["data"][0]["name"], "Recipe 1");
    }

    #[tokio::test]
    async fn test_list_bad_paging_falls_back() {
        let (app, _) = app();
        create(&app, tea()).await;

        for query in ["page=0&limit=-5", "page=abc&limit=xyz", "page=&limit=", "page=1&page=2"] {
            let (status, body) = send(&app, "GET", &format!("/api/recipes?{query}"), None).await;
            assert_eq!(status, StatusCode::OK, "{query}");
            assert_eq!(body["pagination"]["page"], 1, "{query}");
            assert_eq!(body["pagination"]["limit"], 10, "{query}");
        }

        let (_, body) = send(&app, "GET", "/api/recipes?limit=250", None).await;
        assert_eq!(
            body["pagination"],
            json!({"total": 1, "page": 1, "pages": 1, "limit": 250})
        );

        let (_, body) = send(&app, "GET", "/api/recipes?page=2.5&limit=10abc", None).await;
        assert_eq!(body["pagination"]["page"], 2);
        assert_eq!(body["pagination"]["limit"], 10);
    }

    #[tokio::test]
    async fn test_search_keeps_query_when_paging_is_repeated() {
        let (app, _) = app();
        create(&app, recipe("Green Tea", "Beverage", &["drink"])).await;

        for uri in [
            "/api/recipes/search?query=tea&page=1&page=2",
            "/api/recipes/search?query=tea&limit=5&limit=x",
            "/api/recipes/search?page=oops&query=tea&query=steak",
        ] {
            let (status, body) = send(&app, "GET", uri, None).await;
            assert_eq!(status, StatusCode::OK, "{uri}: {body}");
            assert_eq!(body["pagination"]["page"], 1, "{uri}");
            assert_eq!(body["results"], 1, "{uri}");
            assert_eq!(body["data"][0]["name"], "Green Tea", "{uri}");
        }

        let (_, body) = send(&app, "GET", "/api/recipes/search?query=tea&limit=5&limit=x", None).await;
        assert_eq!(body["pagination"]["limit"], 5);
    }

    #[tokio::test]
    async fn test_search_short_query_uses_substring() {
        let (app, _) = app();
        create(&app, recipe("Tea", "Beverage", &["drink"])).await;
        create(&app, recipe("Steak", "Dinner", &["meat"])).await;
        create(&app, recipe("Pancakes", "Breakfast", &["sweet"])).await;

        let (status, body) = send(&app, "GET", "/api/recipes/search?query=te", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["results"], 2);
        let names: Vec<&str> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Steak", "Tea"]);
    }

    #[tokio::test]
    async fn test_search_full_text() {
        let (app, _) = app();
        create(&app, recipe("Green Tea", "Beverage", &["drink"])).await;
        create(&app, recipe("Steak", "Dinner", &["meat"])).await;

        let (status, body) =
            send(&app, "GET", "/api/recipes/search?query=dinner%20beverage", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["pagination"]["total"], 2);

        let (_, body) = send(&app, "GET", "/api/recipes/search?query=meat", None).await;
        assert_eq!(body["results"], 1);
        assert_eq!(body["data"][0]["name"], "Steak");
    }

    #[tokio::test]
    async fn test_search_requires_query() {
        let (app, _) = app();
        for uri in ["/api/recipes/search", "/api/recipes/search?query=", "/api/recipes/search?query=%20%20"] {
            let (status, body) = send(&app, "GET", uri, None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body["status"], "fail");
            assert_eq!(body["message"], "query is required");
        }
    }

    #[tokio::test]
    async fn test_store_failure_is_500() {
        let (app, store) = app();
        store.fail_all();

        let (status, body) = send(&app, "GET", "/api/recipes", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["status"], "error");
        assert!(body["message"].as_str().unwrap().contains("connection closed"));

        let (status, _) = send(&app, "POST", "/api/recipes", Some(tea())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_store_failure_hidden_in_production() {
        let store = Arc::new(FakeRecipeStore::new());
        store.fail_all();
        let app = app_with(store, Environment::Production);

        let (status, body) =
            send(&app, "GET", "/api/recipes/000000000000000000000000", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "Something went wrong");
    }

    #[tokio::test]
    async fn test_validation_runs_before_store() {
        let (app, store) = app();
        store.fail_all();
        let mut body = tea();
        body["time"] = json!(0);
        let (status, _) = send(&app, "POST", "/api/recipes", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, "GET", "/api/recipes/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
