//! PostgreSQL-backed `VoteRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::NewVote;
use crate::domain::ports::{VotePersistenceError, VoteRepository};

use super::models::NewVoteRow;
use super::pool::{DbPool, PoolError};
use super::schema::votes;

/// Diesel-backed implementation of the `VoteRepository` port.
#[derive(Clone)]
pub struct DieselVoteRepository {
    pool: DbPool,
}

impl DieselVoteRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain vote persistence errors.
fn map_pool_error(error: PoolError) -> VotePersistenceError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            VotePersistenceError::connection(message)
        }
    }
}

/// Map Diesel errors to domain vote persistence errors.
fn map_diesel_error(error: diesel::result::Error) -> VotePersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    debug!(error = %error, "vote repository operation failed");
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            VotePersistenceError::connection("database connection error")
        }
        _ => VotePersistenceError::query("database error"),
    }
}

#[async_trait]
impl VoteRepository for DieselVoteRepository {
    async fn create(&self, vote: &NewVote) -> Result<(), VotePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewVoteRow {
            post_id: vote.post_id,
            user_id: vote.user_id,
        };

        diesel::insert_into(votes::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(())
    }
}
