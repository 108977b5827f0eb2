//! Post entity and read models.

use chrono::{DateTime, Utc};

/// Post as listed on pages: author and live vote count included.
///
/// `vote_count` is computed by the repository from the votes table at query
/// time; it is never stored on the row.
#[derive(Debug, Clone)]
pub struct Post {
    /// Generated primary key.
    pub id: i32,
    /// Headline shown in listings.
    pub title: String,
    /// Link the post points at.
    pub post_url: String,
    /// Owning user.
    pub user_id: i32,
    /// Username of the owning user.
    pub username: String,
    /// Set on insert.
    pub created_at: DateTime<Utc>,
    /// Refreshed whenever the post is modified.
    pub updated_at: DateTime<Utc>,
    /// Live count of vote rows referencing this post.
    pub vote_count: i64,
}

/// Insert payload for a post; the owner comes from the session, never the
/// request body.
#[derive(Debug, Clone)]
pub struct NewPost {
    /// Headline shown in listings.
    pub title: String,
    /// Link the post points at.
    pub post_url: String,
    /// Owning user taken from the session.
    pub user_id: i32,
}
