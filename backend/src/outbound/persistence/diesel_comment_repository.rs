//! PostgreSQL-backed `CommentRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{CommentPersistenceError, CommentRepository};
use crate::domain::{Comment, NewComment};

use super::models::{CommentRow, NewCommentRow};
use super::pool::{DbPool, PoolError};
use super::schema::{comments, users};

/// Diesel-backed implementation of the `CommentRepository` port.
#[derive(Clone)]
pub struct DieselCommentRepository {
    pool: DbPool,
}

impl DieselCommentRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain comment persistence errors.
fn map_pool_error(error: PoolError) -> CommentPersistenceError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            CommentPersistenceError::connection(message)
        }
    }
}

/// Map Diesel errors to domain comment persistence errors.
fn map_diesel_error(error: diesel::result::Error) -> CommentPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    debug!(error = %error, "comment repository operation failed");
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            CommentPersistenceError::connection("database connection error")
        }
        _ => CommentPersistenceError::query("database error"),
    }
}

#[async_trait]
impl CommentRepository for DieselCommentRepository {
    async fn create(&self, comment: &NewComment) -> Result<i32, CommentPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewCommentRow {
            comment_text: &comment.comment_text,
            post_id: comment.post_id,
            user_id: comment.user_id,
        };

        diesel::insert_into(comments::table)
            .values(&row)
            .returning(comments::id)
            .get_result::<i32>(&mut conn)
            .await
            .map_err(map_diesel_error)
    }

    async fn list_for_post(&self, post_id: i32) -> Result<Vec<Comment>, CommentPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<(CommentRow, String)> = comments::table
            .inner_join(users::table)
            .filter(comments::post_id.eq(post_id))
            .order(comments::created_at.asc())
            .select((CommentRow::as_select(), users::username))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows
            .into_iter()
            .map(|(row, username)| Comment {
                id: row.id,
                comment_text: row.comment_text,
                post_id: row.post_id,
                user_id: row.user_id,
                username,
                created_at: row.created_at,
            })
            .collect())
    }
}
