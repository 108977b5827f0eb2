//! PostgreSQL-backed `PostRepository` implementation using Diesel ORM.
//!
//! Vote counts are computed per query with a correlated subselect over the
//! votes table rather than stored on the row, so a listing is always
//! consistent with the live vote data. Author usernames come from an inner
//! join on the users table.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{PostPersistenceError, PostRepository};
use crate::domain::{NewPost, Post};

use super::models::{NewPostRow, PostRow};
use super::pool::{DbPool, PoolError};
use super::schema::{posts, users, votes};

/// Diesel-backed implementation of the `PostRepository` port.
#[derive(Clone)]
pub struct DieselPostRepository {
    pool: DbPool,
}

impl DieselPostRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain post persistence errors.
fn map_pool_error(error: PoolError) -> PostPersistenceError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            PostPersistenceError::connection(message)
        }
    }
}

/// Map Diesel errors to domain post persistence errors.
fn map_diesel_error(error: diesel::result::Error) -> PostPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    debug!(error = %error, "post repository operation failed");
    match error {
        DieselError::NotFound => PostPersistenceError::not_found("no post matched the query"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            PostPersistenceError::connection("database connection error")
        }
        _ => PostPersistenceError::query("database error"),
    }
}

/// Joined row shape shared by every post read: row, author, live count.
type PostListing = (PostRow, String, Option<i64>);

fn listing_to_post(listing: PostListing) -> Post {
    let (row, username, vote_count) = listing;
    Post {
        id: row.id,
        title: row.title,
        post_url: row.post_url,
        user_id: row.user_id,
        username,
        created_at: row.created_at,
        updated_at: row.updated_at,
        vote_count: vote_count.unwrap_or(0),
    }
}

#[async_trait]
impl PostRepository for DieselPostRepository {
    async fn create(&self, post: &NewPost) -> Result<i32, PostPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewPostRow {
            title: &post.title,
            post_url: &post.post_url,
            user_id: post.user_id,
        };

        diesel::insert_into(posts::table)
            .values(&row)
            .returning(posts::id)
            .get_result::<i32>(&mut conn)
            .await
            .map_err(map_diesel_error)
    }

    async fn update_title(&self, id: i32, title: &str) -> Result<(), PostPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let updated = diesel::update(posts::table.find(id))
            .set((posts::title.eq(title), posts::updated_at.eq(diesel::dsl::now)))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if updated == 0 {
            return Err(PostPersistenceError::not_found(format!(
                "no post with id {id}"
            )));
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), PostPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(posts::table.find(id))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if deleted == 0 {
            return Err(PostPersistenceError::not_found(format!(
                "no post with id {id}"
            )));
        }
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Post>, PostPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let vote_count = votes::table
            .filter(votes::post_id.eq(posts::id))
            .count()
            .single_value();

        let listings: Vec<PostListing> = posts::table
            .inner_join(users::table)
            .order(posts::created_at.desc())
            .select((PostRow::as_select(), users::username, vote_count))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(listings.into_iter().map(listing_to_post).collect())
    }

    async fn list_by_user(&self, user_id: i32) -> Result<Vec<Post>, PostPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let vote_count = votes::table
            .filter(votes::post_id.eq(posts::id))
            .count()
            .single_value();

        let listings: Vec<PostListing> = posts::table
            .inner_join(users::table)
            .filter(posts::user_id.eq(user_id))
            .order(posts::created_at.desc())
            .select((PostRow::as_select(), users::username, vote_count))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(listings.into_iter().map(listing_to_post).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, PostPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let vote_count = votes::table
            .filter(votes::post_id.eq(posts::id))
            .count()
            .single_value();

        let listing: Option<PostListing> = posts::table
            .inner_join(users::table)
            .filter(posts::id.eq(id))
            .select((PostRow::as_select(), users::username, vote_count))
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(listing.map(listing_to_post))
    }
}
