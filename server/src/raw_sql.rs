//! Raw SQL fragments that can't be expressed in Diesel's type-safe DSL.
//!
//! # Safety
//!
//! User input is ALWAYS passed via `.bind()` parameters. No string
//! concatenation or interpolation with user data.

/// Full-text match against the trigger-maintained `search_vector`.
///
/// `plainto_tsquery` joins the query's terms with `&`; replacing those with
/// `|` matches recipes containing any term.
///
/// # Why raw SQL?
/// Diesel has no tsvector/tsquery support.
#[macro_export]
macro_rules! full_text_match {
    ($query:expr) => {
        diesel::dsl::sql::<diesel::sql_types::Bool>(
            "(recipes.search_vector @@ replace(plainto_tsquery('english', ",
        )
        .bind::<diesel::sql_types::Text, _>($query)
        .sql(")::text, '&', '|')::tsquery)")
    };
}

/// Case-insensitive LIKE against any element of a text array column.
///
/// `$column` must be a literal column name, never user input.
///
/// # Why raw SQL?
/// Diesel has no `unnest()`-based element matching.
#[macro_export]
macro_rules! any_element_ilike {
    ($column:literal, $pattern:expr) => {
        diesel::dsl::sql::<diesel::sql_types::Bool>(concat!(
            "EXISTS (SELECT 1 FROM unnest(recipes.",
            $column,
            ") AS element WHERE element ILIKE "
        ))
        .bind::<diesel::sql_types::Text, _>($pattern)
        .sql(")")
    };
}
