//! Recipe identifiers.
//!
//! Identifiers are 24 hexadecimal characters, the shape the store generates.
//! Anything else is rejected before a query is issued.

use crate::error::InvalidIdFormat;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

pub const ID_LEN: usize = 24;

/// Returns true if `value` has the identifier shape (24 hex digits, any case).
pub fn is_object_id(value: &str) -> bool {
    value.len() == ID_LEN && value.bytes().all(|b| b.is_ascii_hexdigit())
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
#[schema(value_type = String, example = "65a1f0c2e4b0a1b2c3d4e5f6")]
pub struct RecipeId(String);

impl RecipeId {
    /// Parse an identifier, normalizing to lowercase.
    pub fn parse(raw: &str) -> Result<Self, InvalidIdFormat> {
        if is_object_id(raw) {
            Ok(Self(raw.to_ascii_lowercase()))
        } else {
            Err(InvalidIdFormat(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for RecipeId {
    type Err = InvalidIdFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RecipeId {
    type Error = InvalidIdFormat;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RecipeId> for String {
    fn from(id: RecipeId) -> Self {
        id.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
