//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. They are
//! used by Diesel for compile-time query validation and type-safe SQL
//! generation.

diesel::table! {
    /// Registered user accounts.
    users (id) {
        /// Primary key.
        id -> Int4,
        /// Display name chosen at signup.
        username -> Varchar,
        /// Login email; unique at the schema level.
        email -> Varchar,
        /// Argon2 PHC digest of the signup password.
        password -> Varchar,
    }
}

diesel::table! {
    /// Submitted links.
    posts (id) {
        /// Primary key.
        id -> Int4,
        /// Headline shown in listings.
        title -> Varchar,
        /// Link the post points at.
        post_url -> Varchar,
        /// Owning user.
        user_id -> Int4,
        /// Set on insert.
        created_at -> Timestamptz,
        /// Refreshed on every modification.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Comments on posts; removed with their post (`ON DELETE CASCADE`).
    comments (id) {
        /// Primary key.
        id -> Int4,
        /// Body text.
        comment_text -> Text,
        /// Post the comment belongs to.
        post_id -> Int4,
        /// Authoring user.
        user_id -> Int4,
        /// Set on insert.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Upvotes; one row per upvote action, deliberately without a
    /// uniqueness constraint. Removed with their post.
    votes (id) {
        /// Primary key.
        id -> Int4,
        /// Post being upvoted.
        post_id -> Int4,
        /// Voting user.
        user_id -> Int4,
    }
}

diesel::joinable!(posts -> users (user_id));
diesel::joinable!(comments -> posts (post_id));
diesel::joinable!(comments -> users (user_id));
diesel::joinable!(votes -> posts (post_id));
diesel::joinable!(votes -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(users, posts, comments, votes);
