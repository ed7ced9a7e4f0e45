use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default recipe file name, relative to the assets folder.
pub const RECIPE_FILE: &str = "recipe.ron";

#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON parse error: {0}")]
    RonSpanned(#[from] ron::error::SpannedError),
}

/// One ingredient of a build recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub tech_type: String,
    pub amount: u32,
}

/// Materials consumed when an arrow is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recipe {
    pub craft_amount: u32,
    pub ingredients: Vec<Ingredient>,
    pub linked_items: Vec<String>,
}

impl Default for Recipe {
    fn default() -> Self {
        Self {
            craft_amount: 1,
            ingredients: Vec::new(),
            linked_items: Vec::new(),
        }
    }
}

impl Recipe {
    /// Total number of ingredient units.
    pub fn total_cost(&self) -> u32 {
        self.ingredients.iter().map(|i| i.amount).sum()
    }
}

/// Load a recipe from a RON file.
pub fn load_recipe(path: &Path) -> Result<Recipe, RecipeError> {
    let contents = fs::read_to_string(path)?;
    let recipe: Recipe = ron::from_str(&contents)?;
    Ok(recipe)
}
