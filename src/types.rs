use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Raw meal object as returned by TheMealDB search endpoint
pub type RawMealData = serde_json::Value;

/// One ingredient with its (possibly empty) measure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientLine {
    pub ingredient: String,
    pub measure: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A meal after normalization, ready to be written out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRecipe {
    pub id: Option<String>,
    pub title: Option<String>,
    pub category: Option<String>,
    pub area: Option<String>,
    pub instructions: Option<String>,
    pub thumbnail: Option<String>,
    pub youtube: Option<String>,
    pub ingredients: Vec<IngredientLine>,
    pub tags: Vec<String>,
    pub source: Option<String>,
    pub estimated_time: u32,
    pub estimated_calories: u32,
    pub difficulty: Difficulty,
    pub servings: u32,
}

/// The single document written per run.
///
/// `total` is computed from `recipes` on construction and cannot be set on its own.
#[derive(Debug, Clone, Serialize)]
pub struct OutputDocument {
    recipes: Vec<NormalizedRecipe>,
    total: usize,
    generated_at: String,
}

impl OutputDocument {
    pub fn new(recipes: Vec<NormalizedRecipe>, generated_at: impl Into<String>) -> Self {
        let total = recipes.len();
        Self {
            recipes,
            total,
            generated_at: generated_at.into(),
        }
    }

    pub fn recipes(&self) -> &[NormalizedRecipe] {
        &self.recipes
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn generated_at(&self) -> &str {
        &self.generated_at
    }
}

/// A source of raw meals, searchable by first letter
#[async_trait::async_trait]
pub trait MealApi: Send + Sync {
    /// Unique identifier for this source
    fn api_name(&self) -> &'static str;

    /// Fetch every meal whose name starts with `letter`
    async fn search_by_letter(&self, letter: char) -> Result<Vec<RawMealData>>;
}
