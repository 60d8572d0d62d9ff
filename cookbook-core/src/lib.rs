pub mod error;
pub mod id;
pub mod pagination;
pub mod recipe;
pub mod sanitize;
pub mod search;
pub mod validate;

pub use error::{FieldError, InvalidIdFormat, UnknownDifficulty, ValidationError};
pub use id::RecipeId;
pub use pagination::{PageRequest, Pagination};
pub use recipe::{cooking_time_display, Difficulty, Recipe, RecipeInput};
pub use search::{RecipeFilter, SearchMode};
pub use validate::{RecipePatch, ValidRecipe};
