//! Port abstraction for post persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{NewPost, Post};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by post repository adapters.
    pub enum PostPersistenceError {
        /// Repository connection could not be established.
        Connection => "post repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query => "post repository query failed: {message}",
        /// The targeted post does not exist.
        NotFound => "post not found: {message}",
    }
}

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a new post and return the generated id.
    async fn create(&self, post: &NewPost) -> Result<i32, PostPersistenceError>;

    /// Overwrite the title of an existing post, refreshing its update
    /// timestamp. Fails with `NotFound` when no row matches.
    async fn update_title(&self, id: i32, title: &str) -> Result<(), PostPersistenceError>;

    /// Delete a post. Comments and votes cascade at the schema level.
    /// Fails with `NotFound` when no row matches.
    async fn delete(&self, id: i32) -> Result<(), PostPersistenceError>;

    /// All posts, most recent first, with author and vote count.
    async fn list_all(&self) -> Result<Vec<Post>, PostPersistenceError>;

    /// Posts owned by one user, most recent first.
    async fn list_by_user(&self, user_id: i32) -> Result<Vec<Post>, PostPersistenceError>;

    /// Fetch one post by id with author and vote count.
    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, PostPersistenceError>;
}
