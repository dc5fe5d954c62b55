//! `spudstock-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** types and rules (no infrastructure
//! concerns): the two entity kinds, their invariants, and the derived
//! read-only view types.

pub mod error;
pub mod potato;
pub mod recipe;
pub mod summary;

pub use error::{DomainError, DomainResult};
pub use potato::{Potato, Quality, VARIETIES};
pub use recipe::{Difficulty, Recipe};
pub use summary::{Freshness, InventorySummary, PotatoAnalytics, VarietySummary};
