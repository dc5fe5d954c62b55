//! `spudstock-tasks` — periodic background mutation of the registry.
//!
//! Four independently-timed repeating tasks keep the demo dataset alive:
//! the grower and recipe generator add records, the remover simulates
//! sales, the degrader ages quality. Each task runs on its own thread on
//! its own interval; a slow or failing task never delays another, and a
//! failed mutation attempt is logged and the task continues on its next
//! tick.

pub mod config;
pub mod degrader;
pub mod grower;
pub mod pools;
pub mod recipes;
pub mod remover;
pub mod scheduler;

pub use config::TaskIntervals;
pub use scheduler::{Scheduler, TaskHandle};

use rand::SeedableRng;
use rand::rngs::SmallRng;
use spudstock_registry::Registry;

/// Spawn the full task set against `registry` and hand back the scheduler
/// that owns their cancellation handles.
pub fn start<R>(registry: R, intervals: TaskIntervals) -> Scheduler
where
    R: Registry + Clone + 'static,
{
    let mut scheduler = Scheduler::new();

    {
        let registry = registry.clone();
        let mut rng = SmallRng::from_entropy();
        scheduler.spawn("grower", intervals.grower, move || {
            grower::grow(&registry, &mut rng)
        });
    }
    {
        let registry = registry.clone();
        let mut rng = SmallRng::from_entropy();
        scheduler.spawn("recipe-generator", intervals.recipe_generator, move || {
            recipes::generate(&registry, &mut rng)
        });
    }
    {
        let registry = registry.clone();
        let mut rng = SmallRng::from_entropy();
        scheduler.spawn("remover", intervals.remover, move || {
            remover::remove_for_sale(&registry, &mut rng)
        });
    }
    {
        let registry = registry.clone();
        scheduler.spawn("degrader", intervals.degrader, move || {
            degrader::degrade(&registry)
        });
    }

    scheduler
}
