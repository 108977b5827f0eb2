//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into the short JSON bodies and status
//! codes the API promises. Callers only ever see the client-safe message;
//! underlying causes are logged where the error is constructed.

use actix_web::{HttpResponse, ResponseError, http::StatusCode, http::header};
use serde_json::json;
use tracing::error;

use crate::domain::{Error, ErrorCode};

use super::guard::LOGIN_PATH;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest | ErrorCode::BadCredentials => StatusCode::BAD_REQUEST,
        ErrorCode::NotLoggedIn => StatusCode::FOUND,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        // A missing login renders exactly like the guard's rejection, so
        // handlers that read the session themselves stay indistinguishable
        // from guarded scopes.
        if self.code() == ErrorCode::NotLoggedIn {
            return HttpResponse::Found()
                .insert_header((header::LOCATION, LOGIN_PATH))
                .finish();
        }

        HttpResponse::build(self.status_code()).json(json!({ "message": self.message() }))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // Do not leak implementation details to clients.
        error!(error = %err, "actix error promoted to domain error");
        Self::internal("Internal server error")
    }
}
