use chrono::{Duration, Utc};
use rand::Rng;
use rand::rngs::SmallRng;
use tracing::debug;

use spudstock_core::{Potato, Quality, VARIETIES};
use spudstock_registry::Registry;

use crate::pools::{ORIGINS, QUALITIES};

/// One grower tick: synthesize a potato and add it to the registry.
///
/// Weight is uniform in [0.20, 0.60) kg; price is a quality-dependent base
/// plus uniform [0, 1.5) noise; harvest date is now minus 0–13 whole days.
pub fn grow<R: Registry>(registry: &R, rng: &mut SmallRng) {
    let id = format!("p{}", registry.next_id());

    let variety = VARIETIES[rng.gen_range(0..VARIETIES.len())];
    let origin = ORIGINS[rng.gen_range(0..ORIGINS.len())];
    let quality = QUALITIES[rng.gen_range(0..QUALITIES.len())];

    let weight = rng.gen_range(0.20..0.60);
    let base_price = match quality {
        Quality::Premium => 3.5,
        Quality::Standard => 2.0,
        Quality::Economy => 1.5,
    };
    let price = base_price + rng.gen_range(0.0..1.5);

    let days_ago = rng.gen_range(0..14);
    let harvest_date = Utc::now() - Duration::days(days_ago);

    let potato = Potato {
        id: id.clone(),
        variety: variety.to_string(),
        origin: origin.to_string(),
        weight,
        quality,
        harvest_date,
        price,
    };

    registry.add_potato(potato);
    debug!(potato_id = %id, variety, quality = %quality, "grew a new potato");
}
