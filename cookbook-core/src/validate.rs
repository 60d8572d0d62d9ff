//! Field validation for recipe writes.
//!
//! Input is sanitized first and then checked field by field, so a list whose
//! only entries were legacy identifiers counts as empty.

use crate::error::{FieldError, ValidationError};
use crate::recipe::{Difficulty, RecipeInput, READ_ONLY_FIELDS};

pub const NAME_MIN_CHARS: usize = 3;
pub const NAME_MAX_CHARS: usize = 100;
pub const TIME_MIN_MINUTES: i64 = 1;
pub const TIME_MAX_MINUTES: i64 = 1440;

/// A complete recipe that passed validation, ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRecipe {
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub time: i32,
    pub difficulty: Difficulty,
    pub category: String,
    pub cooking_method: String,
    pub kitchen_equipment: Vec<String>,
    pub chef: String,
    pub tags: Vec<String>,
    pub reviews: Vec<String>,
}

/// A validated partial update. `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipePatch {
    pub name: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub instructions: Option<Vec<String>>,
    pub time: Option<i32>,
    pub difficulty: Option<Difficulty>,
    pub category: Option<String>,
    pub cooking_method: Option<String>,
    pub kitchen_equipment: Option<Vec<String>>,
    pub chef: Option<String>,
    pub tags: Option<Vec<String>>,
    pub reviews: Option<Vec<String>>,
}

impl RecipePatch {
    pub fn is_empty(&self) -> bool {
        *self == RecipePatch::default()
    }
}

/// Collects field errors while each field is checked.
#[derive(Default)]
struct Checker {
    errors: Vec<FieldError>,
}

impl Checker {
    fn fail(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    fn required<T>(&mut self, field: &'static str, value: Option<T>, message: &str) -> Option<T> {
        if value.is_none() {
            self.fail(field, message);
        }
        value
    }

    /// Postgres text columns cannot hold NUL.
    fn no_nul(&mut self, field: &'static str, value: &str) -> bool {
        if value.contains('\0') {
            self.fail(field, "Must not contain NUL characters");
            return false;
        }
        true
    }

    fn name(&mut self, value: String) -> Option<String> {
        if !self.no_nul("name", &value) {
            return None;
        }
        let trimmed = value.trim();
        let len = trimmed.chars().count();
        if len < NAME_MIN_CHARS {
            self.fail("name", "Name must be at least 3 characters");
            None
        } else if len > NAME_MAX_CHARS {
            self.fail("name", "Name cannot exceed 100 characters");
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    fn text(&mut self, field: &'static str, value: String, message: &str) -> Option<String> {
        if !self.no_nul(field, &value) {
            return None;
        }
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.fail(field, message);
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// Non-empty list of non-empty entries.
    fn entries(
        &mut self,
        field: &'static str,
        items: Vec<String>,
        message: &str,
    ) -> Option<Vec<String>> {
        if items.is_empty() {
            self.fail(field, message);
            return None;
        }
        if let Some(index) = items.iter().position(|item| item.trim().is_empty()) {
            self.fail(field, format!("Entry {} must not be empty", index + 1));
            return None;
        }
        self.plain_entries(field, items)
    }

    /// List that may be empty but whose entries must be storable.
    fn plain_entries(&mut self, field: &'static str, items: Vec<String>) -> Option<Vec<String>> {
        if let Some(index) = items.iter().position(|item| item.contains('\0')) {
            self.fail(field, format!("Entry {} must not contain NUL characters", index + 1));
            return None;
        }
        Some(items)
    }

    fn time(&mut self, minutes: i64) -> Option<i32> {
        if minutes < TIME_MIN_MINUTES {
            self.fail("time", "Cooking time must be at least 1 minute");
            None
        } else if minutes > TIME_MAX_MINUTES {
            self.fail("time", "Cooking time cannot exceed 24 hours (1440 minutes)");
            None
        } else {
            i32::try_from(minutes).ok()
        }
    }

    fn difficulty(&mut self, value: String) -> Option<Difficulty> {
        match value.parse::<Difficulty>() {
            Ok(difficulty) => Some(difficulty),
            Err(_) => {
                self.fail("difficulty", "Difficulty must be Easy, Medium, or Hard");
                None
            }
        }
    }

    fn finish<T>(self, value: Option<T>) -> Result<T, ValidationError> {
        match value {
            Some(value) if self.errors.is_empty() => Ok(value),
            _ => Err(ValidationError::Fields(self.errors)),
        }
    }
}

impl RecipeInput {
    fn reject_unknown_fields(&self) -> Result<(), ValidationError> {
        match self
            .extra
            .keys()
            .find(|key| !READ_ONLY_FIELDS.contains(&key.as_str()))
        {
            Some(key) => Err(ValidationError::UnknownField(key.clone())),
            None => Ok(()),
        }
    }

    /// Validate a create request. Every required field must be present.
    pub fn into_valid(self) -> Result<ValidRecipe, ValidationError> {
        self.reject_unknown_fields()?;
        let input = self.sanitized();
        let mut check = Checker::default();

        let name = check
            .required("name", input.name, "Recipe name is required")
            .and_then(|v| check.name(v));
        let ingredients = check
            .required("ingredients", input.ingredients, "Ingredients are required")
            .and_then(|v| check.entries("ingredients", v, "At least one ingredient is required"));
        let instructions = check
            .required("instructions", input.instructions, "Instructions are required")
            .and_then(|v| {
                check.entries("instructions", v, "At least one instruction step is required")
            });
        let time = check
            .required("time", input.time, "Cooking time is required")
            .and_then(|v| check.time(v));
        let difficulty = check
            .required("difficulty", input.difficulty, "Difficulty level is required")
            .and_then(|v| check.difficulty(v));
        let category = check
            .required("category", input.category, "Category is required")
            .and_then(|v| check.text("category", v, "Category is required"));
        let cooking_method = check
            .required("cookingMethod", input.cooking_method, "Cooking method is required")
            .and_then(|v| check.text("cookingMethod", v, "Cooking method is required"));
        let chef = check
            .required("chef", input.chef, "Chef name is required")
            .and_then(|v| check.text("chef", v, "Chef name is required"));
        let tags = check
            .required("tags", input.tags, "Tags are required")
            .and_then(|v| check.entries("tags", v, "At least one tag is required"));
        let kitchen_equipment = check.plain_entries(
            "kitchenEquipment",
            input.kitchen_equipment.unwrap_or_default(),
        );
        let reviews = check.plain_entries("reviews", input.reviews.unwrap_or_default());

        let recipe = (|| {
            Some(ValidRecipe {
                name: name?,
                ingredients: ingredients?,
                instructions: instructions?,
                time: time?,
                difficulty: difficulty?,
                category: category?,
                cooking_method: cooking_method?,
                kitchen_equipment: kitchen_equipment?,
                chef: chef?,
                tags: tags?,
                reviews: reviews?,
            })
        })();

        check.finish(recipe)
    }

    /// Validate an update request. Only the supplied fields are checked.
    pub fn into_patch(self) -> Result<RecipePatch, ValidationError> {
        self.reject_unknown_fields()?;
        let input = self.sanitized();
        let mut check = Checker::default();

        let patch = RecipePatch {
            name: input.name.and_then(|v| check.name(v)),
            ingredients: input.ingredients.and_then(|v| {
                check.entries("ingredients", v, "At least one ingredient is required")
            }),
            instructions: input.instructions.and_then(|v| {
                check.entries("instructions", v, "At least one instruction step is required")
            }),
            time: input.time.and_then(|v| check.time(v)),
            difficulty: input.difficulty.and_then(|v| check.difficulty(v)),
            category: input
                .category
                .and_then(|v| check.text("category", v, "Category is required")),
            cooking_method: input
                .cooking_method
                .and_then(|v| check.text("cookingMethod", v, "Cooking method is required")),
            kitchen_equipment: input
                .kitchen_equipment
                .and_then(|v| check.plain_entries("kitchenEquipment", v)),
            chef: input
                .chef
                .and_then(|v| check.text("chef", v, "Chef name is required")),
            tags: input
                .tags
                .and_then(|v| check.entries("tags", v, "At least one tag is required")),
            reviews: input
                .reviews
                .and_then(|v| check.plain_entries("reviews", v)),
        };

        check.finish(Some(patch))
    }
}
