//! Dashboard page handlers, login-guarded at the scope level.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get, web};
use askama::Template;
use tracing::error;

use crate::domain::{Error, Post};
use crate::inbound::http::ApiResult;
use crate::inbound::http::filters;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardTemplate {
    posts: Vec<Post>,
    logged_in: bool,
}

#[derive(Template)]
#[template(path = "edit-post.html")]
struct EditPostTemplate {
    post: Post,
    logged_in: bool,
}

/// The session user's own posts, most recent first.
#[get("")]
pub async fn dashboard(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;

    let posts = state.posts.list_by_user(user_id).await.map_err(|err| {
        error!(error = %err, "dashboard listing failed");
        Error::internal("Internal server error")
    })?;

    let body = DashboardTemplate {
        posts,
        logged_in: true,
    }
    .render()
    .map_err(|err| {
        error!(error = %err, "template rendering failed");
        Error::internal("Internal server error")
    })?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body))
}

/// Edit form for one post.
#[get("/edit/{id}")]
pub async fn edit_post(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .find_by_id(id)
        .await
        .map_err(|err| {
            error!(error = %err, post_id = id, "edit lookup failed");
            Error::internal("Internal server error")
        })?
        // Mirrors the single-post page: a missing post is a plain 500.
        .ok_or_else(|| Error::internal("Internal server error"))?;

    let body = EditPostTemplate {
        post,
        logged_in: true,
    }
    .render()
    .map_err(|err| {
        error!(error = %err, "template rendering failed");
        Error::internal("Internal server error")
    })?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rstest::rstest;

    fn own_post(id: i32, title: &str) -> Post {
        Post {
            id,
            title: title.to_owned(),
            post_url: "https://www.rust-lang.org/learn".to_owned(),
            user_id: 1,
            username: "al".to_owned(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            vote_count: 0,
        }
    }

    #[rstest]
    fn dashboard_links_each_post_to_its_edit_page() {
        let body = DashboardTemplate {
            posts: vec![own_post(4, "first"), own_post(9, "second")],
            logged_in: true,
        }
        .render()
        .expect("renders");

        assert!(body.contains("/dashboard/edit/4"));
        assert!(body.contains("/dashboard/edit/9"));
        assert!(body.contains("first"));
        assert!(body.contains("second"));
    }

    #[rstest]
    fn edit_page_prefills_the_current_title() {
        let body = EditPostTemplate {
            post: own_post(4, "editable title"),
            logged_in: true,
        }
        .render()
        .expect("renders");

        assert!(body.contains("editable title"));
        assert!(body.contains("rust-lang.org"));
    }
}
