//! Port abstraction for user persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{NewUser, User};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query => "user repository query failed: {message}",
        /// A schema constraint rejected the write (e.g. duplicate email).
        Constraint => "user repository constraint violated: {message}",
    }
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user and return the generated id.
    async fn create(&self, user: &NewUser) -> Result<i32, UserPersistenceError>;

    /// Fetch a user by email address, digest included.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserPersistenceError>;
}
