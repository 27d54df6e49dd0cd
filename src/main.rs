//! CodeArena - Application Entry Point
//!
//! This is the main entry point for the CodeArena server.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method, header::CONTENT_TYPE},
    middleware as axum_middleware,
};
use redis::Client as RedisClient;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use codearena::{
    config::CONFIG,
    db, handlers,
    middleware::{logging::logging_middleware, rate_limit::rate_limit_middleware},
    providers::{ChatClient, JudgeClient, MediaClient},
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| CONFIG.server.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting CodeArena server...");

    // Initialize database connection pool
    tracing::info!("Connecting to database...");
    let db_pool = PgPoolOptions::new()
        .max_connections(CONFIG.database.max_connections)
        .connect(&CONFIG.database.url)
        .await?;

    // Run database migrations
    tracing::info!("Running database migrations...");
    db::run_migrations(&db_pool).await?;

    // Initialize Redis connection
    tracing::info!("Connecting to Redis...");
    let redis_client = RedisClient::open(CONFIG.redis.url.as_str())?;
    let redis_conn = redis::aio::ConnectionManager::new(redis_client).await?;

    // Build provider clients
    let judge = Arc::new(JudgeClient::new(&CONFIG.judge)?);
    let media = MediaClient::new(&CONFIG.media)?;
    let chat = ChatClient::new(&CONFIG.ai)?;

    // Create application state
    let state = AppState::new(db_pool, redis_conn, judge, media, chat, CONFIG.clone());

    // CORS is restricted to the configured origin list; the API carries a
    // session cookie, so wildcard origins are not an option.
    let allowed_origins = CONFIG
        .cors
        .allowed_origins
        .iter()
        .map(|o| o.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true);

    // Build the router
    let app = Router::new()
        .merge(handlers::routes(state.clone()))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ))
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state);

    // Start the server
    let addr = SocketAddr::new(CONFIG.server.host.parse()?, CONFIG.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
