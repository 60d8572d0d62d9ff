//! In-memory recipe store for handler tests.
//!
//! Substring search behaves like the SQL version. Full-text search is
//! approximated: a recipe matches when any query term is a prefix of a word
//! in its name, category or tags.

use super::{RecipeStore, StoreError};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use cookbook_core::{Recipe, RecipeFilter, RecipeId, RecipePatch, ValidRecipe};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::RwLock;

#[derive(Debug, Default)]
pub struct FakeRecipeStore {
    /// Insertion order, oldest first
    recipes: RwLock<Vec<Recipe>>,
    next_id: AtomicU64,
    failing: AtomicBool,
}

impl FakeRecipeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail as if the connection dropped.
    pub fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Query(DieselError::DatabaseError(
                DatabaseErrorKind::ClosedConnection,
                Box::new("connection closed".to_string()),
            )));
        }
        Ok(())
    }

    fn matching(&self, filter: &RecipeFilter) -> Vec<Recipe> {
        let recipes = self.recipes.read().unwrap();
        recipes
            .iter()
            .rev()
            .filter(|recipe| matches(filter, recipe))
            .cloned()
            .collect()
    }
}

fn matches(filter: &RecipeFilter, recipe: &Recipe) -> bool {
    match filter {
        RecipeFilter::All => true,
        RecipeFilter::Substring(needle) => {
            let needle = needle.to_lowercase();
            let contains = |value: &String| value.to_lowercase().contains(&needle);
            contains(&recipe.name)
                || contains(&recipe.category)
                || recipe.tags.iter().any(contains)
                || recipe.ingredients.iter().any(contains)
        }
        RecipeFilter::FullText(query) => {
            let terms = words(query);
            let mut document = words(&recipe.name);
            document.extend(words(&recipe.category));
            for tag in &recipe.tags {
                document.extend(words(tag));
            }
            terms
                .iter()
                .any(|term| document.iter().any(|word| word.starts_with(term.as_str())))
        }
    }
}

fn words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn clamp(value: i64) -> usize {
    usize::try_from(value.max(0)).unwrap_or(usize::MAX)
}

#[async_trait]
impl RecipeStore for FakeRecipeStore {
    async fn count(&self, filter: &RecipeFilter) -> Result<i64, StoreError> {
        self.check_available()?;
        Ok(self.matching(filter).len() as i64)
    }

    async fn find_page(
        &self,
        filter: &RecipeFilter,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Recipe>, StoreError> {
        self.check_available()?;
        Ok(self
            .matching(filter)
            .into_iter()
            .skip(clamp(skip))
            .take(clamp(limit))
            .collect())
    }

    async fn find_by_id(&self, id: &RecipeId) -> Result<Option<Recipe>, StoreError> {
        self.check_available()?;
        let recipes = self.recipes.read().unwrap();
        Ok(recipes.iter().find(|r| &r.id == id).cloned())
    }

    async fn insert(&self, recipe: ValidRecipe) -> Result<Recipe, StoreError> {
        self.check_available()?;
        let n = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let id = RecipeId::parse(&format!("{:024x}", 0xa000_0000_u64 + n)).unwrap();
        // Distinct timestamps keep newest-first ordering deterministic
        let created_at = Utc::now() + Duration::milliseconds(n as i64);

        let stored = Recipe {
            id,
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
            created_at,
            updated_at: created_at,
        };
        self.recipes.write().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn update_by_id(
        &self,
        id: &RecipeId,
        patch: RecipePatch,
    ) -> Result<Option<Recipe>, StoreError> {
        self.check_available()?;
        let mut recipes = self.recipes.write().unwrap();
        let Some(recipe) = recipes.iter_mut().find(|r| &r.id == id) else {
            return Ok(None);
        };

        if let Some(name) = patch.name {
            recipe.name = name;
        }
        if let Some(ingredients) = patch.ingredients {
            recipe.ingredients = ingredients;
        }
        if let Some(instructions) = patch.instructions {
            recipe.instructions = instructions;
        }
        if let Some(time) = patch.time {
            recipe.time = time;
        }
        if let Some(difficulty) = patch.difficulty {
            recipe.difficulty = difficulty;
        }
        if let Some(category) = patch.category {
            recipe.category = category;
        }
        if let Some(cooking_method) = patch.cooking_method {
            recipe.cooking_method = cooking_method;
        }
        if let Some(kitchen_equipment) = patch.kitchen_equipment {
            recipe.kitchen_equipment = kitchen_equipment;
        }
        if let Some(chef) = patch.chef {
            recipe.chef = chef;
        }
        if let Some(tags) = patch.tags {
            recipe.tags = tags;
        }
        if let Some(reviews) = patch.reviews {
            recipe.reviews = reviews;
        }
        recipe.updated_at = Utc::now().max(recipe.created_at + Duration::milliseconds(1));

        Ok(Some(recipe.clone()))
    }

    async fn delete_by_id(&self, id: &RecipeId) -> Result<bool, StoreError> {
        self.check_available()?;
        let mut recipes = self.recipes.write().unwrap();
        let before = recipes.len();
        recipes.retain(|r| &r.id != id);
        Ok(recipes.len() < before)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check_available()
    }
}
