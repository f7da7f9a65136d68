use axum::Router;

pub mod evaluate;
pub mod health;

/// Create the main API router
pub fn create_router() -> Router {
    Router::new()
        .merge(evaluate::create_router())
        .nest("/test", health::create_router())
}
