use std::time::Duration;

use tracing::warn;

/// One interval per task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskIntervals {
    pub grower: Duration,
    pub recipe_generator: Duration,
    pub remover: Duration,
    pub degrader: Duration,
}

impl Default for TaskIntervals {
    fn default() -> Self {
        Self {
            grower: Duration::from_secs(3),
            recipe_generator: Duration::from_secs(8),
            remover: Duration::from_secs(10),
            degrader: Duration::from_secs(20),
        }
    }
}

impl TaskIntervals {
    /// Read intervals from `SPUDSTOCK_*_INTERVAL_MS` env vars, keeping the
    /// default for any that is unset. An unparsable value is ignored with
    /// a warning.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            grower: env_interval("SPUDSTOCK_GROWER_INTERVAL_MS", defaults.grower),
            recipe_generator: env_interval(
                "SPUDSTOCK_RECIPE_GENERATOR_INTERVAL_MS",
                defaults.recipe_generator,
            ),
            remover: env_interval("SPUDSTOCK_REMOVER_INTERVAL_MS", defaults.remover),
            degrader: env_interval("SPUDSTOCK_DEGRADER_INTERVAL_MS", defaults.degrader),
        }
    }
}

fn env_interval(key: &str, default: Duration) -> Duration {
    match std::env::var(key) {
        Ok(raw) => match raw.parse::<u64>() {
            Ok(ms) if ms > 0 => Duration::from_millis(ms),
            _ => {
                warn!(key, value = %raw, "ignoring invalid interval override");
                default
            }
        },
        Err(_) => default,
    }
}
