//! `spudstock-service` — request-facing operations over the registry.
//!
//! Two services, one per entity kind. Both validate before any store
//! mutation and compute every derived view from a single registry snapshot;
//! nothing here caches, every read recomputes from scratch.

pub mod potato;
pub mod recipe;

pub use potato::PotatoService;
pub use recipe::RecipeService;
