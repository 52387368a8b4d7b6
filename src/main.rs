use anyhow::{Context, Result};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vecinal_core::application::{
    ports::{security::TokenVerifier, time::Clock},
    services::ApplicationServices,
};
use vecinal_core::config::AppConfig;
use vecinal_core::domain::user::UserRepository;
use vecinal_core::infrastructure::{
    database, repositories::PostgresUserRepository, security::token::JwtTokenVerifier,
    time::SystemClock,
};
use vecinal_core::presentation::http::{routes::build_router_with_origins, state::HttpState};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.database_max_connections())
        .await
        .context("failed to connect to database")?;
    database::run_migrations(&pool)
        .await
        .context("failed to run migrations")?;

    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool));
    let token_verifier: Arc<dyn TokenVerifier> = Arc::new(JwtTokenVerifier::new(
        config.jwt_secret(),
        config.jwt_issuer(),
        config.jwt_audience(),
    )?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(user_repo, token_verifier, clock));
    let state = HttpState { services };

    let app = build_router_with_origins(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
