//! Port abstraction for vote persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::NewVote;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by vote repository adapters.
    pub enum VotePersistenceError {
        /// Repository connection could not be established.
        Connection => "vote repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query => "vote repository query failed: {message}",
    }
}

#[async_trait]
pub trait VoteRepository: Send + Sync {
    /// Insert one upvote row. No duplicate check: the same user may vote
    /// for the same post any number of times.
    async fn create(&self, vote: &NewVote) -> Result<(), VotePersistenceError>;
}
