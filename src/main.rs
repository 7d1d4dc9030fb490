// src/main.rs

use std::sync::Arc;
use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use trivia_api::config::Config;
use trivia_api::routes;
use trivia_api::state::AppState;
use trivia_api::store::postgres::PgStore;

const CONNECT_ATTEMPTS: u32 = 5;
const CONNECT_BACKOFF: Duration = Duration::from_secs(2);

/// Console output plus a daily `trivia.log` under `log_dir`.
/// The returned guard flushes the file writer when dropped.
fn init_tracing(config: &Config) -> WorkerGuard {
    let (file_writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(&config.log_dir, "trivia.log"));

    tracing_subscriber::registry()
        .with(EnvFilter::new(&config.rust_log))
        .with(fmt::layer().with_writer(std::io::stdout).with_target(false))
        .with(fmt::layer().with_writer(file_writer).with_ansi(false))
        .init();

    guard
}

/// Retries while Postgres is still starting.
async fn connect(config: &Config) -> PgPool {
    let options = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .acquire_timeout(Duration::from_secs(3));

    let mut attempt = 1;
    loop {
        match options.clone().connect(&config.database_url).await {
            Ok(pool) => return pool,
            Err(e) if attempt < CONNECT_ATTEMPTS => {
                tracing::warn!(
                    "Trivia database unreachable (attempt {}/{}): {}",
                    attempt,
                    CONNECT_ATTEMPTS,
                    e
                );
                attempt += 1;
                tokio::time::sleep(CONNECT_BACKOFF).await;
            }
            Err(e) => panic!("Giving up on the trivia database after {} attempts: {}", attempt, e),
        }
    }
}

#[tokio::main]
async fn main() {
    let config = Config::from_env();
    let _log_guard = init_tracing(&config);

    let pool = connect(&config).await;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to apply trivia schema and seed migrations");
    tracing::info!("Trivia schema is up to date");

    let app = routes::create_router(AppState::new(Arc::new(PgStore::new(pool))));

    let listener = tokio::net::TcpListener::bind(config.server_addr)
        .await
        .expect("Failed to bind listening address");
    tracing::info!("Trivia API listening on {}", config.server_addr);

    axum::serve(listener, app).await.expect("Server error");
}
