//! Vote (upvote) entity.
//!
//! Votes are write-only from the application's point of view: rows are
//! inserted one per upvote action and only ever read back as the aggregate
//! count on a post. There is no uniqueness constraint, so the same user may
//! upvote a post repeatedly.

/// Insert payload for an upvote; the voter comes from the session.
#[derive(Debug, Clone)]
pub struct NewVote {
    /// Post being upvoted.
    pub post_id: i32,
    /// Voting user taken from the session.
    pub user_id: i32,
}
