use spudstock_core::{Difficulty, DomainError, DomainResult, Recipe};
use spudstock_registry::Registry;

/// Recipe CRUD plus recommendation.
pub struct RecipeService<R: Registry> {
    registry: R,
}

impl<R: Registry> RecipeService<R> {
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    /// Validate and insert a new recipe. The registry is untouched when
    /// validation fails.
    pub fn create(&self, recipe: Recipe) -> DomainResult<Recipe> {
        recipe.validate()?;
        self.registry.add_recipe(recipe.clone());
        Ok(recipe)
    }

    pub fn get(&self, id: &str) -> DomainResult<Recipe> {
        self.registry.recipe(id).ok_or_else(DomainError::not_found)
    }

    pub fn all(&self) -> Vec<Recipe> {
        self.registry.recipes()
    }

    pub fn by_variety(&self, variety: &str) -> Vec<Recipe> {
        self.registry.recipes_by_variety(variety)
    }

    /// First recipe for the variety matching the difficulty when one is
    /// given, else the first recipe of the variety, else `NoMatch`.
    ///
    /// Evaluated over one snapshot; "first" is relative to snapshot order,
    /// which is unspecified.
    pub fn recommend(&self, variety: &str, difficulty: Option<Difficulty>) -> DomainResult<Recipe> {
        let recipes = self.registry.recipes_by_variety(variety);

        if let Some(wanted) = difficulty {
            if let Some(recipe) = recipes.iter().find(|r| r.difficulty == wanted) {
                return Ok(recipe.clone());
            }
        }

        recipes
            .into_iter()
            .next()
            .ok_or_else(DomainError::no_match)
    }
}
