// Mirrors migrations/2025-01-15-000000_create_recipes.
// `search_vector` is maintained by a trigger and only read through raw_sql.

diesel::table! {
    recipes (id) {
        #[max_length = 24]
        id -> Varchar,
        #[max_length = 100]
        name -> Varchar,
        ingredients -> Array<Text>,
        instructions -> Array<Text>,
        time -> Int4,
        #[max_length = 10]
        difficulty -> Varchar,
        category -> Text,
        cooking_method -> Text,
        kitchen_equipment -> Array<Text>,
        chef -> Text,
        tags -> Array<Text>,
        reviews -> Array<Text>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}
