//! Backend entry point: configuration, migrations, pool, HTTP server.

use std::sync::Arc;

use actix_web::{HttpServer, web};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::state::HttpState;
use backend::outbound::persistence::{
    DbPool, DieselCommentRepository, DieselPostRepository, DieselUserRepository,
    DieselVoteRepository, PoolConfig, run_pending,
};
use backend::server::{AppConfig, build_app};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;

    run_pending(&config.database_url)
        .await
        .map_err(std::io::Error::other)?;

    let pool = DbPool::new(PoolConfig::new(&config.database_url))
        .await
        .map_err(std::io::Error::other)?;

    let state = web::Data::new(HttpState::new(
        Arc::new(DieselUserRepository::new(pool.clone())),
        Arc::new(DieselPostRepository::new(pool.clone())),
        Arc::new(DieselCommentRepository::new(pool.clone())),
        Arc::new(DieselVoteRepository::new(pool)),
    ));

    let key = config.signing_key();
    let cookie_secure = config.cookie_secure;
    let bind_addr = config.bind_addr;

    info!(%bind_addr, "starting server");
    HttpServer::new(move || build_app(state.clone(), key.clone(), cookie_secure))
        .bind(bind_addr)?
        .run()
        .await
}
