//! User API handlers: signup, login, logout.
//!
//! ```text
//! POST /api/users        {"username":"al","email":"al@x.com","password":"secret"}
//! POST /api/users/login  {"email":"al@x.com","password":"secret"}
//! POST /api/users/logout
//! ```
//!
//! Failure reporting is deliberately coarse: validation problems, duplicate
//! emails, and database failures all collapse into one generic signup
//! failure, and unknown emails are indistinguishable from wrong passwords.
//! The real causes only reach the server log.

use actix_web::{HttpResponse, post, web};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, warn};
use zeroize::Zeroizing;

use crate::domain::{Error, NewUser};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Signup request body for `POST /api/users`.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Login request body for `POST /api/users/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Create a user account and establish a logged-in session.
#[post("/users")]
pub async fn signup(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<SignupRequest>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();

    let new_user = NewUser::try_from_parts(&payload.username, &payload.email, &payload.password)
        .map_err(|err| {
            warn!(error = %err, "signup validation failed");
            Error::internal("Signup failed")
        })?;

    let id = state.users.create(&new_user).await.map_err(|err| {
        error!(error = %err, "signup insert failed");
        Error::internal("Signup failed")
    })?;

    session.log_in(id)?;
    Ok(HttpResponse::Ok().json(json!({ "id": id })))
}

/// Authenticate by email and password and establish a logged-in session.
#[post("/users/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    let password = Zeroizing::new(payload.password);

    let user = state
        .users
        .find_by_email(&payload.email)
        .await
        .map_err(|err| {
            warn!(error = %err, "login lookup failed");
            Error::bad_credentials("Incorrect credentials")
        })?
        .ok_or_else(|| Error::bad_credentials("Incorrect credentials"))?;

    if !user.password.verify(&password) {
        return Err(Error::bad_credentials("Incorrect credentials"));
    }

    session.log_in(user.id)?;
    Ok(HttpResponse::Ok().json(json!({ "id": user.id })))
}

/// Drop the session.
#[post("/users/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.log_out();
    HttpResponse::NoContent().finish()
}
