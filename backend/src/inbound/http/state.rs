//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{CommentRepository, PostRepository, UserRepository, VoteRepository};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// User signup and login lookups.
    pub users: Arc<dyn UserRepository>,
    /// Post CRUD and listings.
    pub posts: Arc<dyn PostRepository>,
    /// Comment creation and per-post listings.
    pub comments: Arc<dyn CommentRepository>,
    /// Upvote inserts.
    pub votes: Arc<dyn VoteRepository>,
}

impl HttpState {
    /// Bundle the port implementations used by the handlers.
    pub fn new(
        users: Arc<dyn UserRepository>,
        posts: Arc<dyn PostRepository>,
        comments: Arc<dyn CommentRepository>,
        votes: Arc<dyn VoteRepository>,
    ) -> Self {
        Self {
            users,
            posts,
            comments,
            votes,
        }
    }
}
