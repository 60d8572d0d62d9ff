use super::{RecipeStore, StoreError};
use crate::db::DbPool;
use crate::models::{NewRecipeRow, RecipeChangeset, RecipeRow};
use crate::schema::recipes;
use async_trait::async_trait;
use cookbook_core::search::like_pattern;
use cookbook_core::{Recipe, RecipeFilter, RecipeId, RecipePatch, ValidRecipe};
use diesel::dsl::now;
use diesel::pg::Pg;
use diesel::prelude::*;

/// Recipe store backed by PostgreSQL through a Diesel r2d2 pool.
///
/// Diesel is synchronous, so each operation checks out a connection and runs
/// on the blocking thread pool inside a `db.query` span.
#[derive(Debug, Clone)]
pub struct PgRecipeStore {
    pool: DbPool,
}

impl PgRecipeStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn run<T, F>(&self, operation: &'static str, f: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&mut PgConnection) -> Result<T, StoreError> + Send + 'static,
    {
        let pool = self.pool.clone();
        let span = tracing::debug_span!("db.query", operation);
        tokio::task::spawn_blocking(move || {
            let _entered = span.enter();
            let mut conn = pool.get()?;
            f(&mut conn)
        })
        .await?
    }
}

fn filtered(filter: &RecipeFilter) -> recipes::BoxedQuery<'static, Pg> {
    let query = recipes::table.into_boxed();
    match filter {
        RecipeFilter::All => query,
        RecipeFilter::FullText(text) => query.filter(crate::full_text_match!(text.clone())),
        RecipeFilter::Substring(text) => {
            let pattern = like_pattern(text);
            query.filter(
                recipes::name
                    .ilike(pattern.clone())
                    .or(recipes::category.ilike(pattern.clone()))
                    .or(crate::any_element_ilike!("tags", pattern.clone()))
                    .or(crate::any_element_ilike!("ingredients", pattern)),
            )
        }
    }
}

/// SET clause for an update. `updated_at` is refreshed even when the patch is
/// empty.
fn changes(
    patch: &RecipePatch,
) -> (
    RecipeChangeset<'_>,
    diesel::dsl::Eq<recipes::updated_at, now>,
) {
    (RecipeChangeset::from(patch), recipes::updated_at.eq(now))
}

fn into_recipes(rows: Vec<RecipeRow>) -> Result<Vec<Recipe>, StoreError> {
    rows.into_iter().map(Recipe::try_from).collect()
}

#[async_trait]
impl RecipeStore for PgRecipeStore {
    async fn count(&self, filter: &RecipeFilter) -> Result<i64, StoreError> {
        let filter = filter.clone();
        self.run("count", move |conn| {
            Ok(filtered(&filter).count().get_result::<i64>(conn)?)
        })
        .await
    }

    async fn find_page(
        &self,
        filter: &RecipeFilter,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Recipe>, StoreError> {
        let filter = filter.clone();
        self.run("find_page", move |conn| {
            let rows = filtered(&filter)
                .order((recipes::created_at.desc(), recipes::id.desc()))
                .offset(skip)
                .limit(limit)
                .select(RecipeRow::as_select())
                .load::<RecipeRow>(conn)?;
            into_recipes(rows)
        })
        .await
    }

    async fn find_by_id(&self, id: &RecipeId) -> Result<Option<Recipe>, StoreError> {
        let id = id.clone();
        self.run("find_by_id", move |conn| {
            recipes::table
                .find(id.as_str())
                .select(RecipeRow::as_select())
                .first::<RecipeRow>(conn)
                .optional()?
                .map(Recipe::try_from)
                .transpose()
        })
        .await
    }

    async fn insert(&self, recipe: ValidRecipe) -> Result<Recipe, StoreError> {
        self.run("insert", move |conn| {
            let row = diesel::insert_into(recipes::table)
                .values(NewRecipeRow::from(&recipe))
                .returning(RecipeRow::as_returning())
                .get_result::<RecipeRow>(conn)?;
            Recipe::try_from(row)
        })
        .await
    }

    async fn update_by_id(
        &self,
        id: &RecipeId,
        patch: RecipePatch,
    ) -> Result<Option<Recipe>, StoreError> {
        let id = id.clone();
        self.run("update_by_id", move |conn| {
            diesel::update(recipes::table.find(id.as_str()))
                .set(changes(&patch))
                .returning(RecipeRow::as_returning())
                .get_result::<RecipeRow>(conn)
                .optional()?
                .map(Recipe::try_from)
                .transpose()
        })
        .await
    }

    async fn delete_by_id(&self, id: &RecipeId) -> Result<bool, StoreError> {
        let id = id.clone();
        self.run("delete_by_id", move |conn| {
            let deleted = diesel::delete(recipes::table.find(id.as_str())).execute(conn)?;
            Ok(deleted > 0)
        })
        .await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.run("ping", |conn| {
            diesel::sql_query("SELECT 1").execute(conn)?;
            Ok(())
        })
        .await
    }
}
