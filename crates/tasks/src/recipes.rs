use rand::Rng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use tracing::debug;

use spudstock_core::{Recipe, VARIETIES};
use spudstock_registry::Registry;

use crate::pools::{DIFFICULTIES, INGREDIENT_EXTRAS, INSTRUCTIONS, recipe_names};

/// One recipe-generator tick: synthesize a recipe for a random variety and
/// add it to the registry.
pub fn generate<R: Registry>(registry: &R, rng: &mut SmallRng) {
    let id = format!("r{}", registry.next_id());

    let variety = VARIETIES[rng.gen_range(0..VARIETIES.len())];
    let names = recipe_names(variety);
    let name = names[rng.gen_range(0..names.len())];

    let difficulty = DIFFICULTIES[rng.gen_range(0..DIFFICULTIES.len())];
    let cooking_time = rng.gen_range(20..80);
    let servings = rng.gen_range(2..8);

    let recipe = Recipe {
        id: id.clone(),
        name: name.to_string(),
        variety: variety.to_string(),
        cooking_time,
        difficulty,
        ingredients: random_ingredients(variety, rng),
        instructions: INSTRUCTIONS.iter().map(|s| s.to_string()).collect(),
        servings,
    };

    registry.add_recipe(recipe);
    debug!(recipe_id = %id, variety, name, "generated a new recipe");
}

/// The variety itself plus 2–5 shuffled extras.
fn random_ingredients(variety: &str, rng: &mut SmallRng) -> Vec<String> {
    let mut ingredients = vec![format!(
        "{} lbs {variety} potatoes",
        rng.gen_range(1..4)
    )];

    let mut extras = INGREDIENT_EXTRAS;
    extras.shuffle(rng);

    let count = rng.gen_range(2..6);
    ingredients.extend(extras.iter().take(count).map(|s| s.to_string()));
    ingredients
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use spudstock_registry::InMemoryRegistry;

    use super::*;

    #[test]
    fn generated_recipes_satisfy_the_invariants() {
        let registry = InMemoryRegistry::new();
        let mut rng = SmallRng::seed_from_u64(42);

        for _ in 0..100 {
            generate(&registry, &mut rng);
        }

        let all = registry.recipes();
        assert_eq!(all.len(), 100);
        for r in all {
            assert!(r.validate().is_ok());
            assert!((20..80).contains(&r.cooking_time));
            assert!((2..8).contains(&r.servings));
            assert!(VARIETIES.contains(&r.variety.as_str()));
            assert!(recipe_names(&r.variety).contains(&r.name.as_str()));
            // Base ingredient plus 2..=5 extras.
            assert!((3..=6).contains(&r.ingredients.len()));
            assert_eq!(r.instructions.len(), INSTRUCTIONS.len());
        }
    }

    #[test]
    fn generator_ids_share_the_potato_sequence() {
        let registry = InMemoryRegistry::new();
        let mut rng = SmallRng::seed_from_u64(7);

        crate::grower::grow(&registry, &mut rng);
        generate(&registry, &mut rng);

        assert!(registry.potato("p1001").is_some());
        assert!(registry.recipe("r1002").is_some());
    }
}
