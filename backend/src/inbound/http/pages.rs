//! Public page handlers: home listing, login form, single post.
//!
//! Pages are rendered server-side with askama templates. The single-post
//! lookup is deliberately unforgiving: a missing post surfaces as a generic
//! internal error rather than a handled 404.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get, web};
use askama::Template;
use tracing::error;

use crate::domain::{Comment, Error, Post};
use crate::inbound::http::ApiResult;
use crate::inbound::http::filters;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

#[derive(Template)]
#[template(path = "homepage.html")]
struct HomeTemplate {
    posts: Vec<Post>,
    logged_in: bool,
}

#[derive(Template)]
#[template(path = "login.html")]
struct LoginTemplate {
    logged_in: bool,
}

#[derive(Template)]
#[template(path = "single-post.html")]
struct SinglePostTemplate {
    post: Post,
    comments: Vec<Comment>,
    comment_count: i64,
    logged_in: bool,
}

fn render_error(err: askama::Error) -> Error {
    error!(error = %err, "template rendering failed");
    Error::internal("Internal server error")
}

fn page(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}

/// Home index: every post, most recent first.
#[get("/")]
pub async fn index(state: web::Data<HttpState>, session: SessionContext) -> ApiResult<HttpResponse> {
    let posts = state.posts.list_all().await.map_err(|err| {
        error!(error = %err, "post listing failed");
        Error::internal("Internal server error")
    })?;

    let body = HomeTemplate {
        posts,
        logged_in: session.is_logged_in(),
    }
    .render()
    .map_err(render_error)?;
    Ok(page(body))
}

/// Login and signup forms.
#[get("/login")]
pub async fn login_page(session: SessionContext) -> ApiResult<HttpResponse> {
    let body = LoginTemplate {
        logged_in: session.is_logged_in(),
    }
    .render()
    .map_err(render_error)?;
    Ok(page(body))
}

/// One post with its comments.
#[get("/post/{id}")]
pub async fn single_post(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .find_by_id(id)
        .await
        .map_err(|err| {
            error!(error = %err, post_id = id, "single post lookup failed");
            Error::internal("Internal server error")
        })?
        // A missing post is not handled here; it bubbles as a plain 500.
        .ok_or_else(|| Error::internal("Internal server error"))?;

    let comments = state.comments.list_for_post(id).await.map_err(|err| {
        error!(error = %err, post_id = id, "comment listing failed");
        Error::internal("Internal server error")
    })?;

    let comment_count = i64::try_from(comments.len()).unwrap_or(i64::MAX);
    let body = SinglePostTemplate {
        post,
        comments,
        comment_count,
        logged_in: session.is_logged_in(),
    }
    .render()
    .map_err(render_error)?;
    Ok(page(body))
}
