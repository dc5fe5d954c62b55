use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Recipe difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl core::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Difficulty {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Easy" => Ok(Difficulty::Easy),
            "Medium" => Ok(Difficulty::Medium),
            "Hard" => Ok(Difficulty::Hard),
            other => Err(DomainError::validation(format!(
                "unknown difficulty: {other}"
            ))),
        }
    }
}

/// A recipe associated with a potato variety.
///
/// Recipes are created by request or by the recipe-generator task and are
/// never updated or deleted by any defined operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub variety: String,
    pub cooking_time: u32,
    pub difficulty: Difficulty,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub servings: u32,
}

impl Recipe {
    /// Check the record invariants.
    pub fn validate(&self) -> DomainResult<()> {
        if self.id.is_empty() || self.name.is_empty() || self.variety.is_empty() {
            return Err(DomainError::validation(
                "id, name and variety cannot be empty",
            ));
        }
        if self.cooking_time == 0 {
            return Err(DomainError::validation("cooking time must be positive"));
        }
        Ok(())
    }
}
