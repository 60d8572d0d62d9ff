//! Recipe persistence.
//!
//! Handlers talk to a [`RecipeStore`] trait object held in the application
//! state. The PostgreSQL implementation is used in production; tests run the
//! same handlers against an in-memory fake.

#[cfg(test)]
mod fake;
mod pg;

#[cfg(test)]
pub use fake::FakeRecipeStore;
pub use pg::PgRecipeStore;

use async_trait::async_trait;
use cookbook_core::{Recipe, RecipeFilter, RecipeId, RecipePatch, ValidRecipe};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),

    #[error("query failed: {0}")]
    Query(#[from] diesel::result::Error),

    #[error("database task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("stored recipe {id} is invalid: {reason}")]
    Corrupt { id: String, reason: String },
}

/// Query and write operations over the recipe collection.
///
/// Callers validate input and identifier shape before calling in; the store
/// only reports persistence failures.
#[async_trait]
pub trait RecipeStore: Send + Sync + fmt::Debug {
    /// Number of recipes matching `filter`.
    async fn count(&self, filter: &RecipeFilter) -> Result<i64, StoreError>;

    /// One page of matching recipes, newest first.
    async fn find_page(
        &self,
        filter: &RecipeFilter,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Recipe>, StoreError>;

    async fn find_by_id(&self, id: &RecipeId) -> Result<Option<Recipe>, StoreError>;

    /// Insert a recipe; the store assigns id and timestamps.
    async fn insert(&self, recipe: ValidRecipe) -> Result<Recipe, StoreError>;

    /// Apply `patch` and refresh `updated_at`. `None` if no such recipe.
    async fn update_by_id(
        &self,
        id: &RecipeId,
        patch: RecipePatch,
    ) -> Result<Option<Recipe>, StoreError>;

    /// Returns false if no recipe had this id.
    async fn delete_by_id(&self, id: &RecipeId) -> Result<bool, StoreError>;

    /// Round trip to the backing store.
    async fn ping(&self) -> Result<(), StoreError>;
}
