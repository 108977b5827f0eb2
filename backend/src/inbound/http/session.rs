//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! Provides a thin wrapper around Actix sessions so handlers only deal with
//! domain-friendly operations: establishing a logged-in session, reading the
//! current user id, and tearing the session down.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::error;

use crate::domain::Error;

pub(crate) const USER_ID_KEY: &str = "user_id";
pub(crate) const LOGGED_IN_KEY: &str = "loggedIn";

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Reset the session and mark it as logged in for the given user.
    ///
    /// Any previous session data is discarded first, so a signup or login
    /// never inherits state from an earlier identity.
    pub fn log_in(&self, user_id: i32) -> Result<(), Error> {
        self.0.clear();
        self.0
            .insert(USER_ID_KEY, user_id)
            .and_then(|()| self.0.insert(LOGGED_IN_KEY, true))
            .map_err(|err| {
                error!(error = %err, "failed to persist session");
                Error::internal("session update failed")
            })
    }

    /// Remove all session state and invalidate the cookie.
    pub fn log_out(&self) {
        self.0.purge();
    }

    /// Whether the session carries the logged-in flag.
    pub fn is_logged_in(&self) -> bool {
        self.0
            .get::<bool>(LOGGED_IN_KEY)
            .unwrap_or(None)
            .unwrap_or(false)
    }

    /// Fetch the current user id from the session, if present.
    pub fn user_id(&self) -> Option<i32> {
        self.0.get::<i32>(USER_ID_KEY).unwrap_or(None)
    }

    /// Require an authenticated user id or fail the way the login guard
    /// does (a redirect to the login page, even on API routes).
    pub fn require_user_id(&self) -> Result<i32, Error> {
        self.user_id().ok_or_else(Error::not_logged_in)
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
