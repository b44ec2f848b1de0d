//! Defaults for a pipeline run. `PipelineConfig::default()` is built from these,
//! so a run with no overrides matches the documented behavior exactly.
use std::time::Duration;

pub const MEALDB_API: &str = "themealdb";
pub const MEALDB_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";
pub const REQUEST_DELAY: Duration = Duration::from_millis(500);

pub const DEFAULT_OUTPUT_FILE: &str = "mealdb_recipes.json";
pub const DEFAULT_SERVINGS: u32 = 4;

/// TheMealDB exposes ingredient/measure pairs as `strIngredient1..=20`.
pub const MAX_INGREDIENT_SLOTS: usize = 20;

// Derived field heuristics
pub const CHARS_PER_MINUTE: usize = 50;
pub const MIN_ESTIMATED_TIME: usize = 30;
pub const MAX_ESTIMATED_TIME: usize = 180;
pub const MIN_CALORIES: u32 = 200;
pub const MAX_CALORIES: u32 = 800;
pub const MEDIUM_INSTRUCTIONS_THRESHOLD: usize = 500;
pub const HARD_INSTRUCTIONS_THRESHOLD: usize = 1000;

pub const GENERATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
