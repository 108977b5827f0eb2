//! Comment API handler.
//!
//! ```text
//! POST /api/comments {"comment_text":"nice find","post_id":1}
//! ```
//!
//! Sits behind the login guard; the commenting user comes from the session.

use actix_web::{HttpResponse, post, web};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use crate::domain::{Error, NewComment};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Create request body for `POST /api/comments`.
#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub comment_text: String,
    pub post_id: i32,
}

/// Attach a comment to a post as the session user.
#[post("")]
pub async fn create_comment(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CreateCommentRequest>,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let payload = payload.into_inner();

    let new_comment = NewComment {
        comment_text: payload.comment_text,
        post_id: payload.post_id,
        user_id,
    };

    let id = state.comments.create(&new_comment).await.map_err(|err| {
        error!(error = %err, "comment insert failed");
        Error::internal("Comment failed")
    })?;

    Ok(HttpResponse::Ok().json(json!({ "id": id })))
}
