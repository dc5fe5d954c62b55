use rand::Rng;
use rand::rngs::SmallRng;
use tracing::{debug, info};

use spudstock_core::VARIETIES;
use spudstock_registry::Registry;

/// One remover tick: pick a random variety, sell one random potato of it.
///
/// An empty selection is a no-op tick. A delete that loses the race to a
/// concurrent caller is benign: logged, never retried, never escalated.
pub fn remove_for_sale<R: Registry>(registry: &R, rng: &mut SmallRng) {
    let variety = VARIETIES[rng.gen_range(0..VARIETIES.len())];

    let candidates = registry.potatoes_by_variety(variety);
    if candidates.is_empty() {
        return;
    }

    let potato = &candidates[rng.gen_range(0..candidates.len())];
    match registry.delete_potato(&potato.id) {
        Ok(()) => info!(
            potato_id = %potato.id,
            variety = %potato.variety,
            weight_kg = potato.weight,
            price = potato.price,
            quality = %potato.quality,
            "sale completed"
        ),
        Err(err) => debug!(potato_id = %potato.id, %err, "potato already gone, skipping sale"),
    }
}
