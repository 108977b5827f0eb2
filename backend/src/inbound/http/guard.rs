//! Login-requiring middleware for page and API scopes.
//!
//! Wraps a service and checks the session's logged-in flag before dispatch.
//! Anonymous requests are answered with a `302 Found` redirect to the login
//! page. API scopes reuse the same guard, so unauthenticated API calls also
//! receive the redirect rather than a structured error; that collision
//! between page and API semantics is inherited behaviour and left intact.

use actix_session::SessionExt;
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::header;
use actix_web::{Error, HttpResponse};
use futures_util::future::{LocalBoxFuture, Ready, ready};

use super::session::LOGGED_IN_KEY;

/// Path anonymous requests are redirected to.
pub(crate) const LOGIN_PATH: &str = "/login";

/// Guard middleware; wrap a scope with it to require a logged-in session.
pub struct RequireLogin;

impl<S, B> Transform<S, ServiceRequest> for RequireLogin
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RequireLoginMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireLoginMiddleware { service }))
    }
}

/// Service produced by [`RequireLogin`].
pub struct RequireLoginMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequireLoginMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let logged_in = req
            .get_session()
            .get::<bool>(LOGGED_IN_KEY)
            .unwrap_or(None)
            .unwrap_or(false);

        if logged_in {
            let fut = self.service.call(req);
            return Box::pin(async move { fut.await.map(|res| res.map_into_left_body()) });
        }

        Box::pin(async move {
            let (request, _) = req.into_parts();
            let response = HttpResponse::Found()
                .insert_header((header::LOCATION, LOGIN_PATH))
                .finish()
                .map_into_right_body();
            Ok(ServiceResponse::new(request, response))
        })
    }
}
