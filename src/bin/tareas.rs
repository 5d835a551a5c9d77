use std::net::SocketAddr;

use axum::{Router, routing::get};
use tower::limit::ConcurrencyLimitLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tienda_api::{
    config::AppConfig,
    routes::{doc::tasks_scalar_docs, not_found, tasks},
    services::task_service::TaskStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tienda_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let port = std::env::var("TASKS_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3001);

    let store = TaskStore::with_seed_tasks();

    let app = Router::new()
        .route("/", get(tasks::index))
        .nest("/api/tasks", tasks::router())
        .merge(tasks_scalar_docs())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(1024 * 1024))
        .layer(ConcurrencyLimitLayer::new(100))
        .with_state(store);

    let addr = SocketAddr::from((config.host.parse::<std::net::IpAddr>()?, port));
    tracing::info!("listening on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;

    Ok(())
}
