use std::sync::Arc;

use axum::{extract::Extension, routing::get, Router};
use labreport_core::EvaluationService;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod dto;
mod error;
mod routers;

use config::Settings;

/// Build the Axum application around an evaluation service
fn create_app(service: Arc<EvaluationService>) -> Router {
    let routes = Router::new()
        .route("/", get(routers::health::root))
        .nest("/api", routers::create_router())
        .fallback(error::not_found);

    with_layers(routes, service)
}

/// Tracing, permissive CORS, panic recovery and the shared service
fn with_layers(router: Router, service: Arc<EvaluationService>) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
            .layer(CorsLayer::permissive())
            .layer(CatchPanicLayer::custom(error::handle_panic))
            .layer(Extension(service)),
    )
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "labreport_server=debug,labreport_core=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let settings = Settings::load();
    info!("Starting lab report evaluator with settings: {:?}", settings);

    let service = Arc::new(EvaluationService::new(&settings.llm_config())?);
    if service.is_mock_mode() {
        info!("DEEPSEEK_API_KEY is not set, serving mock evaluations");
    }

    let app = create_app(service);

    // Start the server
    let listener = tokio::net::TcpListener::bind(&settings.server_address()).await?;
    info!("Server listening on {}", settings.server_address());

    axum::serve(listener, app).await?;

    Ok(())
}
