//! Search mode selection.
//!
//! Queries of three or more characters go to the store's full-text index
//! over name, category and tags. Shorter queries are poor index candidates
//! and use a case-insensitive substring match over name, category, tags
//! and ingredients instead.

pub const FULL_TEXT_MIN_CHARS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    FullText,
    Substring,
}

impl SearchMode {
    pub fn for_query(query: &str) -> Self {
        if query.chars().count() >= FULL_TEXT_MIN_CHARS {
            SearchMode::FullText
        } else {
            SearchMode::Substring
        }
    }
}

/// Which recipes a count or page query covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeFilter {
    All,
    FullText(String),
    Substring(String),
}

impl RecipeFilter {
    /// Filter for a user search. Returns `None` for a blank query.
    pub fn search(query: &str) -> Option<Self> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        Some(match SearchMode::for_query(query) {
            SearchMode::FullText => RecipeFilter::FullText(query.to_string()),
            SearchMode::Substring => RecipeFilter::Substring(query.to_string()),
        })
    }
}

/// SQL LIKE pattern matching `needle` literally anywhere in a value.
pub fn like_pattern(needle: &str) -> String {
    let escaped = needle
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}
