//! `spudstock-registry` — the single source of truth for both entity kinds.
//!
//! The registry is volatile, single-process and memory-resident. Each entity
//! kind is guarded by its own reader/writer lock; no operation ever holds
//! both locks, so there is no cross-kind ordering to deadlock on.

pub mod sequence;
pub mod store;

pub use sequence::IdSequence;
pub use store::{InMemoryRegistry, Registry};
