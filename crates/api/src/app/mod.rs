//! HTTP API application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `routes/`: HTTP routes + handlers (one file per domain area)
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};

use spudstock_registry::InMemoryRegistry;
use spudstock_service::{PotatoService, RecipeService};

pub mod dto;
pub mod errors;
pub mod routes;

/// Request-facing services, shared across handlers.
pub struct AppServices {
    pub potatoes: PotatoService<Arc<InMemoryRegistry>>,
    pub recipes: RecipeService<Arc<InMemoryRegistry>>,
}

impl AppServices {
    pub fn new(registry: Arc<InMemoryRegistry>) -> Self {
        Self {
            potatoes: PotatoService::new(registry.clone()),
            recipes: RecipeService::new(registry),
        }
    }
}

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(registry: Arc<InMemoryRegistry>) -> Router {
    let services = Arc::new(AppServices::new(registry));

    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api/v1", routes::router())
        .layer(Extension(services))
}
