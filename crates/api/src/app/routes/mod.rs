use axum::Router;

pub mod potatoes;
pub mod recipes;
pub mod system;

/// Assemble the `/api/v1` router from the per-domain routers.
pub fn router() -> Router {
    Router::new()
        .merge(potatoes::router())
        .merge(recipes::router())
}
