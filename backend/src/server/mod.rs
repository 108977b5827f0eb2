//! Server construction: session middleware, route table, state wiring.

mod config;

pub use config::{AppConfig, ConfigError};

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::NormalizePath;
use actix_web::{App, web};

use crate::inbound::http::guard::RequireLogin;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{comments, dashboard, pages, posts, users};

/// Assemble the application: session middleware, pages, dashboard, and the
/// JSON API with its guarded scope.
///
/// Route order inside the API scope matters: `/posts/upvote` must be
/// registered ahead of `/posts/{id}` so the literal segment wins.
pub fn build_app(
    state: web::Data<HttpState>,
    key: Key,
    cookie_secure: bool,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".to_owned())
        .cookie_path("/".to_owned())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_same_site(SameSite::Lax)
        .build();

    let api = web::scope("/api")
        .service(users::signup)
        .service(users::login)
        .service(users::logout)
        .service(
            web::scope("/posts")
                .wrap(RequireLogin)
                .service(posts::create_post)
                .service(posts::upvote)
                .service(posts::update_post)
                .service(posts::delete_post),
        )
        .service(
            web::scope("/comments")
                .wrap(RequireLogin)
                .service(comments::create_comment),
        );

    let dashboard_pages = web::scope("/dashboard")
        .wrap(RequireLogin)
        .service(dashboard::dashboard)
        .service(dashboard::edit_post);

    App::new()
        .app_data(state)
        .wrap(session)
        // Trailing slashes are optional: /dashboard/ and /dashboard match.
        .wrap(NormalizePath::trim())
        .service(api)
        .service(dashboard_pages)
        .service(pages::index)
        .service(pages::login_page)
        .service(pages::single_post)
}
