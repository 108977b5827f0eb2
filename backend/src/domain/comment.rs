//! Comment entity.

use chrono::{DateTime, Utc};

/// Comment as rendered on the single-post page, commenter included.
#[derive(Debug, Clone)]
pub struct Comment {
    /// Generated primary key.
    pub id: i32,
    /// Body text.
    pub comment_text: String,
    /// Post the comment belongs to; removed with it.
    pub post_id: i32,
    /// Authoring user.
    pub user_id: i32,
    /// Username of the authoring user.
    pub username: String,
    /// Set on insert.
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a comment; the author comes from the session, never
/// the request body.
#[derive(Debug, Clone)]
pub struct NewComment {
    /// Body text.
    pub comment_text: String,
    /// Post being commented on.
    pub post_id: i32,
    /// Authoring user taken from the session.
    pub user_id: i32,
}
