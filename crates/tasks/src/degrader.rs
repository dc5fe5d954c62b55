use chrono::{DateTime, Utc};
use tracing::debug;

use spudstock_registry::Registry;

/// One degrader tick at the current instant.
pub fn degrade<R: Registry>(registry: &R) {
    degrade_at(registry, Utc::now());
}

/// Scan one snapshot and age quality one step where due.
///
/// Transitions only move Premium→Standard→Economy, driven purely by whole
/// days since harvest; re-running on unchanged data is a no-op. A record
/// removed between the snapshot and the update surfaces `NotFound`, which
/// is benign and must not recreate the record.
pub fn degrade_at<R: Registry>(registry: &R, now: DateTime<Utc>) {
    for mut potato in registry.potatoes() {
        let age = potato.age_days(now);
        let Some(next) = potato.quality.degraded(age) else {
            continue;
        };

        let id = potato.id.clone();
        potato.quality = next;
        match registry.update_potato(&id, potato) {
            Ok(()) => debug!(potato_id = %id, quality = %next, age_days = age, "quality degraded"),
            Err(err) => debug!(potato_id = %id, %err, "potato removed mid-scan, skipping"),
        }
    }
}
