use crate::error::UnknownDifficulty;
use crate::id::RecipeId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Recipe difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: &'static [Difficulty] = &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    /// Exact, case-sensitive match on the stored spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .iter()
            .copied()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| UnknownDifficulty(s.to_string()))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recipe as held by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    /// Minutes
    pub time: i32,
    pub difficulty: Difficulty,
    pub category: String,
    pub cooking_method: String,
    pub kitchen_equipment: Vec<String>,
    pub chef: String,
    pub tags: Vec<String>,
    pub reviews: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields a client may echo back from an earlier response. They are accepted
/// in request bodies and ignored.
pub const READ_ONLY_FIELDS: &[&str] = &[
    "_id",
    "id",
    "createdAt",
    "updatedAt",
    "cookingTimeDisplay",
    "__v",
];

/// Request body for creating or updating a recipe.
///
/// Every field is optional at the JSON level so that all missing or invalid
/// fields can be reported together. Create requires the full set; update
/// applies only the fields present.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeInput {
    #[schema(example = "Tea")]
    pub name: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub instructions: Option<Vec<String>>,
    /// Cooking time in minutes (1-1440)
    #[schema(example = 5)]
    pub time: Option<i64>,
    /// One of Easy, Medium, Hard
    #[schema(example = "Easy")]
    pub difficulty: Option<String>,
    pub category: Option<String>,
    pub cooking_method: Option<String>,
    pub kitchen_equipment: Option<Vec<String>>,
    pub chef: Option<String>,
    pub tags: Option<Vec<String>>,
    pub reviews: Option<Vec<String>>,
    #[serde(flatten)]
    #[schema(ignore)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Human-readable cooking time: "45 minutes", "2 hr", "1 hr 30 min".
pub fn cooking_time_display(minutes: i32) -> String {
    if minutes < 60 {
        return format!("{} minutes", minutes);
    }
    let hours = minutes / 60;
    let rest = minutes % 60;
    if rest > 0 {
        format!("{} hr {} min", hours, rest)
    } else {
        format!("{} hr", hours)
    }
}
