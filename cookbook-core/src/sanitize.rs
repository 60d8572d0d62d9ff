//! Removal of legacy identifier values from free-text fields.
//!
//! Earlier schema revisions stored references to other collections in the
//! recipe's text fields. Any leftover value with the identifier shape is
//! stripped from arrays, and replaced with [`NOT_SPECIFIED`] in scalars.

use crate::id::is_object_id;
use crate::recipe::RecipeInput;

pub const NOT_SPECIFIED: &str = "Not specified";

pub fn is_legacy_id(value: &str) -> bool {
    is_object_id(value.trim())
}

pub fn strip_legacy_ids(items: Vec<String>) -> Vec<String> {
    items.into_iter().filter(|item| !is_legacy_id(item)).collect()
}

pub fn replace_legacy_scalar(value: String) -> String {
    if is_legacy_id(&value) {
        NOT_SPECIFIED.to_string()
    } else {
        value
    }
}

impl RecipeInput {
    /// Apply legacy identifier cleanup to every supplied text field.
    ///
    /// `name` is left alone; it never held a reference.
    pub fn sanitized(self) -> Self {
        Self {
            ingredients: self.ingredients.map(strip_legacy_ids),
            instructions: self.instructions.map(strip_legacy_ids),
            kitchen_equipment: self.kitchen_equipment.map(strip_legacy_ids),
            tags: self.tags.map(strip_legacy_ids),
            reviews: self.reviews.map(strip_legacy_ids),
            category: self.category.map(replace_legacy_scalar),
            cooking_method: self.cooking_method.map(replace_legacy_scalar),
            chef: self.chef.map(replace_legacy_scalar),
            ..self
        }
    }
}
