//! Port abstraction for comment persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{Comment, NewComment};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by comment repository adapters.
    pub enum CommentPersistenceError {
        /// Repository connection could not be established.
        Connection => "comment repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query => "comment repository query failed: {message}",
    }
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Insert a new comment and return the generated id.
    async fn create(&self, comment: &NewComment) -> Result<i32, CommentPersistenceError>;

    /// Comments on one post, oldest first, with commenter usernames.
    async fn list_for_post(&self, post_id: i32) -> Result<Vec<Comment>, CommentPersistenceError>;
}
