pub mod assets;
pub mod contact;
pub mod health;
pub mod pages;
pub mod sections;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/health", get(health::health_handler))
        .route("/assets/{*path}", get(assets::serve))
        .merge(sections::router())
        .merge(contact::router())
        .with_state(state)
}
