//! Post API handlers: create, retitle, delete, upvote.
//!
//! Mounted under `/api/posts`:
//!
//! ```text
//! POST   /api/posts          {"title":"t","post_url":"http://example.com"}
//! PUT    /api/posts/upvote   {"post_id":1}
//! PUT    /api/posts/{id}     {"title":"new title"}
//! DELETE /api/posts/{id}
//! ```
//!
//! All of these sit behind the login guard; the owning/voting user always
//! comes from the session, never from the body. There is no ownership check
//! on retitle/delete — any logged-in user can modify any post. That gap is
//! inherited behaviour and left intact.

use actix_web::{HttpResponse, delete, post, put, web};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, warn};

use crate::domain::{Error, NewPost, NewVote};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Create request body for `POST /api/posts`.
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub post_url: String,
}

/// Update request body for `PUT /api/posts/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    pub title: String,
}

/// Upvote request body for `PUT /api/posts/upvote`.
#[derive(Debug, Deserialize)]
pub struct UpvoteRequest {
    pub post_id: i32,
}

/// Submit a new post owned by the session user.
#[post("")]
pub async fn create_post(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CreatePostRequest>,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let payload = payload.into_inner();

    let new_post = NewPost {
        title: payload.title,
        post_url: payload.post_url,
        user_id,
    };

    let id = state.posts.create(&new_post).await.map_err(|err| {
        error!(error = %err, "post insert failed");
        Error::internal("Post failed")
    })?;

    Ok(HttpResponse::Ok().json(json!({ "id": id })))
}

/// Record one upvote for the session user.
///
/// Registered ahead of the `{id}` routes so the literal path segment wins.
#[put("/upvote")]
pub async fn upvote(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<UpvoteRequest>,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;

    let vote = NewVote {
        post_id: payload.post_id,
        user_id,
    };

    state.votes.create(&vote).await.map_err(|err| {
        error!(error = %err, "vote insert failed");
        Error::internal("Upvote failed")
    })?;

    Ok(HttpResponse::NoContent().finish())
}

/// Overwrite a post's title.
#[put("/{id}")]
pub async fn update_post(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<UpdatePostRequest>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();

    state
        .posts
        .update_title(id, &payload.title)
        .await
        .map_err(|err| {
            warn!(error = %err, post_id = id, "post update failed");
            Error::not_found("Post not found")
        })?;

    Ok(HttpResponse::NoContent().finish())
}

/// Delete a post; its comments and votes go with it.
#[delete("/{id}")]
pub async fn delete_post(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();

    state.posts.delete(id).await.map_err(|err| {
        warn!(error = %err, post_id = id, "post delete failed");
        Error::not_found("Post not found")
    })?;

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use actix_web::http::{StatusCode, header};
    use actix_web::{App, HttpResponse as TestHttpResponse, test, web};
    use async_trait::async_trait;
    use chrono::Utc;
    use serde_json::{Value, json};

    use super::*;
    use crate::domain::ports::{
        CommentPersistenceError, CommentRepository, PostPersistenceError, PostRepository,
        UserPersistenceError, UserRepository, VotePersistenceError, VoteRepository,
    };
    use crate::domain::{Comment, NewComment, NewUser, Post, User};
    use crate::inbound::http::guard::RequireLogin;

    /// In-memory post store tracking votes alongside for cascade coverage.
    #[derive(Default)]
    struct StubPostRepository {
        posts: Mutex<Vec<Post>>,
    }

    impl StubPostRepository {
        fn with_post(id: i32) -> Self {
            let store = Self::default();
            store
                .posts
                .lock()
                .expect("state lock")
                .push(sample_post(id));
            store
        }
    }

    fn sample_post(id: i32) -> Post {
        Post {
            id,
            title: "t".to_owned(),
            post_url: "http://example.com".to_owned(),
            user_id: 1,
            username: "al".to_owned(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            vote_count: 0,
        }
    }

    #[async_trait]
    impl PostRepository for StubPostRepository {
        async fn create(&self, post: &NewPost) -> Result<i32, PostPersistenceError> {
            let mut posts = self.posts.lock().expect("state lock");
            let id = i32::try_from(posts.len()).expect("small test fixture") + 1;
            let mut stored = sample_post(id);
            stored.title = post.title.clone();
            stored.post_url = post.post_url.clone();
            stored.user_id = post.user_id;
            posts.push(stored);
            Ok(id)
        }

        async fn update_title(&self, id: i32, title: &str) -> Result<(), PostPersistenceError> {
            let mut posts = self.posts.lock().expect("state lock");
            match posts.iter_mut().find(|post| post.id == id) {
                Some(post) => {
                    post.title = title.to_owned();
                    Ok(())
                }
                None => Err(PostPersistenceError::not_found("no such post")),
            }
        }

        async fn delete(&self, id: i32) -> Result<(), PostPersistenceError> {
            let mut posts = self.posts.lock().expect("state lock");
            let before = posts.len();
            posts.retain(|post| post.id != id);
            if posts.len() == before {
                return Err(PostPersistenceError::not_found("no such post"));
            }
            Ok(())
        }

        async fn list_all(&self) -> Result<Vec<Post>, PostPersistenceError> {
            Ok(self.posts.lock().expect("state lock").clone())
        }

        async fn list_by_user(&self, user_id: i32) -> Result<Vec<Post>, PostPersistenceError> {
            Ok(self
                .posts
                .lock()
                .expect("state lock")
                .iter()
                .filter(|post| post.user_id == user_id)
                .cloned()
                .collect())
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<Post>, PostPersistenceError> {
            Ok(self
                .posts
                .lock()
                .expect("state lock")
                .iter()
                .find(|post| post.id == id)
                .cloned())
        }
    }

    #[derive(Default)]
    struct StubVoteRepository {
        votes: Mutex<Vec<NewVote>>,
    }

    #[async_trait]
    impl VoteRepository for StubVoteRepository {
        async fn create(&self, vote: &NewVote) -> Result<(), VotePersistenceError> {
            self.votes.lock().expect("state lock").push(vote.clone());
            Ok(())
        }
    }

    struct NoUsers;

    #[async_trait]
    impl UserRepository for NoUsers {
        async fn create(&self, _user: &NewUser) -> Result<i32, UserPersistenceError> {
            Err(UserPersistenceError::query("unused"))
        }
        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, UserPersistenceError> {
            Ok(None)
        }
    }

    struct NoComments;

    #[async_trait]
    impl CommentRepository for NoComments {
        async fn create(&self, _comment: &NewComment) -> Result<i32, CommentPersistenceError> {
            Err(CommentPersistenceError::query("unused"))
        }
        async fn list_for_post(
            &self,
            _post_id: i32,
        ) -> Result<Vec<Comment>, CommentPersistenceError> {
            Ok(Vec::new())
        }
    }

    fn test_state(
        posts: Arc<dyn PostRepository>,
        votes: Arc<dyn VoteRepository>,
    ) -> crate::inbound::http::state::HttpState {
        crate::inbound::http::state::HttpState::new(
            Arc::new(NoUsers),
            posts,
            Arc::new(NoComments),
            votes,
        )
    }

    fn post_app(
        state: crate::inbound::http::state::HttpState,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(state))
            .wrap(crate::inbound::http::test_utils::test_session_middleware())
            .route(
                "/session",
                web::get().to(
                    |session: crate::inbound::http::session::SessionContext| async move {
                        session.log_in(1)?;
                        Ok::<_, crate::domain::Error>(TestHttpResponse::Ok())
                    },
                ),
            )
            .service(
                web::scope("/api/posts")
                    .wrap(RequireLogin)
                    .service(create_post)
                    .service(upvote)
                    .service(update_post)
                    .service(delete_post),
            )
    }

    async fn logged_in_cookie<S>(app: &S) -> actix_web::cookie::Cookie<'static>
    where
        S: actix_web::dev::Service<
                actix_http::Request,
                Response = actix_web::dev::ServiceResponse,
                Error = actix_web::Error,
            >,
    {
        let res =
            test::call_service(app, test::TestRequest::get().uri("/session").to_request()).await;
        res.response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .expect("session cookie set")
            .into_owned()
    }

    async fn body_json(res: actix_web::dev::ServiceResponse) -> Value {
        let body = test::read_body(res).await;
        serde_json::from_slice(&body).expect("json body")
    }

    #[actix_web::test]
    async fn unauthenticated_create_redirects_and_stores_nothing() {
        let posts = Arc::new(StubPostRepository::default());
        let app = test::init_service(post_app(test_state(
            posts.clone(),
            Arc::new(StubVoteRepository::default()),
        )))
        .await;

        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/posts")
                .set_json(json!({ "title": "t", "post_url": "http://example.com" }))
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(
            res.headers()
                .get(header::LOCATION)
                .and_then(|value| value.to_str().ok()),
            Some("/login")
        );
        assert!(posts.posts.lock().expect("state lock").is_empty());
    }

    #[actix_web::test]
    async fn create_post_takes_the_owner_from_the_session() {
        let posts = Arc::new(StubPostRepository::default());
        let app = test::init_service(post_app(test_state(
            posts.clone(),
            Arc::new(StubVoteRepository::default()),
        )))
        .await;
        let cookie = logged_in_cookie(&app).await;

        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/posts")
                .cookie(cookie)
                .set_json(json!({ "title": "t", "post_url": "http://example.com" }))
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_json(res).await, json!({ "id": 1 }));
        let stored = posts.posts.lock().expect("state lock");
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].user_id, 1);
    }

    #[actix_web::test]
    async fn update_missing_post_is_reported_as_not_found() {
        let app = test::init_service(post_app(test_state(
            Arc::new(StubPostRepository::default()),
            Arc::new(StubVoteRepository::default()),
        )))
        .await;
        let cookie = logged_in_cookie(&app).await;

        let res = test::call_service(
            &app,
            test::TestRequest::put()
                .uri("/api/posts/42")
                .cookie(cookie)
                .set_json(json!({ "title": "new" }))
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(res).await, json!({ "message": "Post not found" }));
    }

    #[actix_web::test]
    async fn update_overwrites_only_the_title() {
        let posts = Arc::new(StubPostRepository::with_post(1));
        let app = test::init_service(post_app(test_state(
            posts.clone(),
            Arc::new(StubVoteRepository::default()),
        )))
        .await;
        let cookie = logged_in_cookie(&app).await;

        let res = test::call_service(
            &app,
            test::TestRequest::put()
                .uri("/api/posts/1")
                .cookie(cookie)
                .set_json(json!({ "title": "updated" }))
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::NO_CONTENT);
        let stored = posts.posts.lock().expect("state lock");
        assert_eq!(stored[0].title, "updated");
        assert_eq!(stored[0].post_url, "http://example.com");
    }

    #[actix_web::test]
    async fn delete_removes_the_post() {
        let posts = Arc::new(StubPostRepository::with_post(1));
        let app = test::init_service(post_app(test_state(
            posts.clone(),
            Arc::new(StubVoteRepository::default()),
        )))
        .await;
        let cookie = logged_in_cookie(&app).await;

        let res = test::call_service(
            &app,
            test::TestRequest::delete()
                .uri("/api/posts/1")
                .cookie(cookie)
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::NO_CONTENT);
        assert!(posts.posts.lock().expect("state lock").is_empty());
    }

    #[actix_web::test]
    async fn upvoting_repeatedly_adds_a_row_each_time() {
        let votes = Arc::new(StubVoteRepository::default());
        let app = test::init_service(post_app(test_state(
            Arc::new(StubPostRepository::with_post(1)),
            votes.clone(),
        )))
        .await;
        let cookie = logged_in_cookie(&app).await;

        for _ in 0..3 {
            let res = test::call_service(
                &app,
                test::TestRequest::put()
                    .uri("/api/posts/upvote")
                    .cookie(cookie.clone())
                    .set_json(json!({ "post_id": 1 }))
                    .to_request(),
            )
            .await;
            assert_eq!(res.status(), StatusCode::NO_CONTENT);
        }

        let stored = votes.votes.lock().expect("state lock");
        assert_eq!(stored.len(), 3);
        assert!(stored.iter().all(|vote| vote.post_id == 1 && vote.user_id == 1));
    }
}
