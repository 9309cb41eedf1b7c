use actix_web::{middleware::Condition, web, App, HttpServer};
use anyhow::Context;
use portfolio_service::config::{LogFormat, ServeMode};
use portfolio_service::handlers::{self, server};
use portfolio_service::middleware::MetricsMiddleware;
use portfolio_service::services::{MemStorage, Storage, SystemClock};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Portfolio Service
///
/// # Routes
///
/// - `/api/blog`, `/api/blog/{id}` - Journal posts
/// - `/api/timeline` - Career milestones, ordered by `order`
/// - `/api/media` - Media gallery
/// - `/api/contact` - Contact form submissions
/// - `/health`, `/health/live`, `/metrics`, `/api/openapi.json` - Operations
///
/// `PORTFOLIO_SERVE_MODE=functions` mounts every API route as an independent
/// function with permissive CORS headers instead of the CORS middleware.
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = match portfolio_service::Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let json_logs = config.log.format == LogFormat::Json;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(json_logs.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json_logs).then(|| tracing_subscriber::fmt::layer()))
        .init();

    tracing::info!("Starting portfolio-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    let clock = Arc::new(SystemClock);
    let storage: Arc<dyn Storage> = if config.storage.seed_demo_data {
        Arc::new(MemStorage::new(clock))
    } else {
        tracing::info!("Demo content disabled; starting with empty collections");
        Arc::new(MemStorage::unseeded(clock))
    };
    let storage = web::Data::from(storage);

    let mode = config.app.mode;
    let allowed_origins = config.cors.allowed_origins.clone();
    let bind_address = config.bind_address();
    tracing::info!(?mode, address = %bind_address, "HTTP server binding");

    let mut http = HttpServer::new(move || {
        App::new()
            .app_data(storage.clone())
            .wrap(Condition::new(
                mode == ServeMode::Server,
                server::cors(&allowed_origins),
            ))
            .wrap(MetricsMiddleware)
            .wrap(tracing_actix_web::TracingLogger::default())
            .configure(move |cfg| handlers::configure(mode, cfg))
    });
    if config.app.workers > 0 {
        http = http.workers(config.app.workers);
    }

    http.bind(&bind_address)
        .with_context(|| format!("failed to bind {bind_address}"))?
        .run()
        .await
        .context("HTTP server terminated with an error")?;

    tracing::info!("Portfolio-service shutting down");
    Ok(())
}
