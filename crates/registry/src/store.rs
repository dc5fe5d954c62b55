//! Entity storage: trait contract and the in-memory implementation.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use spudstock_core::{DomainError, DomainResult, Potato, Recipe};

use crate::sequence::IdSequence;

/// CRUD+scan contract over both entity kinds.
///
/// Callers always receive owned copies, never aliases into store-internal
/// state. Writes to a given key are linearized by the kind's lock: the
/// outcome of concurrent update/delete on one key is decided solely by
/// lock-acquisition order, and an update on a since-deleted key reports
/// `NotFound` rather than resurrecting the record.
pub trait Registry: Send + Sync {
    /// Insert or overwrite by key. Last writer wins; adding the same key
    /// twice is not an error.
    fn add_potato(&self, potato: Potato);

    /// Point lookup.
    fn potato(&self, id: &str) -> Option<Potato>;

    /// Materialized snapshot of every record under a single shared-lock
    /// acquisition. Order unspecified.
    fn potatoes(&self) -> Vec<Potato>;

    /// Snapshot filtered by variety, evaluated under the same single lock
    /// acquisition as [`Registry::potatoes`].
    fn potatoes_by_variety(&self, variety: &str) -> Vec<Potato>;

    /// Replace the full record atomically. `NotFound` if the key is absent
    /// at the time the exclusive lock is acquired.
    fn update_potato(&self, id: &str, potato: Potato) -> DomainResult<()>;

    /// Remove the key. `NotFound` if absent.
    fn delete_potato(&self, id: &str) -> DomainResult<()>;

    fn add_recipe(&self, recipe: Recipe);

    fn recipe(&self, id: &str) -> Option<Recipe>;

    fn recipes(&self) -> Vec<Recipe>;

    fn recipes_by_variety(&self, variety: &str) -> Vec<Recipe>;

    /// Next value of the shared id sequence (see [`IdSequence`]).
    fn next_id(&self) -> u64;
}

impl<R> Registry for Arc<R>
where
    R: Registry + ?Sized,
{
    fn add_potato(&self, potato: Potato) {
        (**self).add_potato(potato)
    }

    fn potato(&self, id: &str) -> Option<Potato> {
        (**self).potato(id)
    }

    fn potatoes(&self) -> Vec<Potato> {
        (**self).potatoes()
    }

    fn potatoes_by_variety(&self, variety: &str) -> Vec<Potato> {
        (**self).potatoes_by_variety(variety)
    }

    fn update_potato(&self, id: &str, potato: Potato) -> DomainResult<()> {
        (**self).update_potato(id, potato)
    }

    fn delete_potato(&self, id: &str) -> DomainResult<()> {
        (**self).delete_potato(id)
    }

    fn add_recipe(&self, recipe: Recipe) {
        (**self).add_recipe(recipe)
    }

    fn recipe(&self, id: &str) -> Option<Recipe> {
        (**self).recipe(id)
    }

    fn recipes(&self) -> Vec<Recipe> {
        (**self).recipes()
    }

    fn recipes_by_variety(&self, variety: &str) -> Vec<Recipe> {
        (**self).recipes_by_variety(variety)
    }

    fn next_id(&self) -> u64 {
        (**self).next_id()
    }
}

/// In-memory registry.
///
/// One independent reader/writer lock per entity kind: readers proceed
/// together, writers serialize against everyone on that kind. No invariant
/// spans both kinds, so no operation takes both locks.
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    potatoes: RwLock<HashMap<String, Potato>>,
    recipes: RwLock<HashMap<String, Recipe>>,
    sequence: IdSequence,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arc() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

impl Registry for InMemoryRegistry {
    fn add_potato(&self, potato: Potato) {
        let mut potatoes = self.potatoes.write().unwrap();
        potatoes.insert(potato.id.clone(), potato);
    }

    fn potato(&self, id: &str) -> Option<Potato> {
        let potatoes = self.potatoes.read().unwrap();
        potatoes.get(id).cloned()
    }

    fn potatoes(&self) -> Vec<Potato> {
        let potatoes = self.potatoes.read().unwrap();
        potatoes.values().cloned().collect()
    }

    fn potatoes_by_variety(&self, variety: &str) -> Vec<Potato> {
        let potatoes = self.potatoes.read().unwrap();
        potatoes
            .values()
            .filter(|p| p.variety == variety)
            .cloned()
            .collect()
    }

    fn update_potato(&self, id: &str, potato: Potato) -> DomainResult<()> {
        let mut potatoes = self.potatoes.write().unwrap();
        if !potatoes.contains_key(id) {
            return Err(DomainError::not_found());
        }
        potatoes.insert(id.to_string(), potato);
        Ok(())
    }

    fn delete_potato(&self, id: &str) -> DomainResult<()> {
        let mut potatoes = self.potatoes.write().unwrap();
        match potatoes.remove(id) {
            Some(_) => Ok(()),
            None => Err(DomainError::not_found()),
        }
    }

    fn add_recipe(&self, recipe: Recipe) {
        let mut recipes = self.recipes.write().unwrap();
        recipes.insert(recipe.id.clone(), recipe);
    }

    fn recipe(&self, id: &str) -> Option<Recipe> {
        let recipes = self.recipes.read().unwrap();
        recipes.get(id).cloned()
    }

    fn recipes(&self) -> Vec<Recipe> {
        let recipes = self.recipes.read().unwrap();
        recipes.values().cloned().collect()
    }

    fn recipes_by_variety(&self, variety: &str) -> Vec<Recipe> {
        let recipes = self.recipes.read().unwrap();
        recipes
            .values()
            .filter(|r| r.variety == variety)
            .cloned()
            .collect()
    }

    fn next_id(&self) -> u64 {
        self.sequence.next()
    }
}
