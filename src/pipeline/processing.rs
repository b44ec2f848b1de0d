use crate::constants::{
    CHARS_PER_MINUTE, HARD_INSTRUCTIONS_THRESHOLD, MAX_CALORIES, MAX_ESTIMATED_TIME,
    MAX_INGREDIENT_SLOTS, MEDIUM_INSTRUCTIONS_THRESHOLD, MIN_CALORIES, MIN_ESTIMATED_TIME,
};
use crate::rng::RangeRng;
use crate::types::{Difficulty, IngredientLine, NormalizedRecipe, RawMealData};
use tracing::{debug, instrument};

/// Normalize every raw meal, in input order. Missing fields are defaulted,
/// never rejected.
#[instrument(skip_all, fields(meals = meals.len()))]
pub fn process_meal_data(
    meals: &[RawMealData],
    servings: u32,
    rng: &mut dyn RangeRng,
) -> Vec<NormalizedRecipe> {
    let recipes: Vec<NormalizedRecipe> = meals
        .iter()
        .map(|meal| process_meal(meal, servings, rng))
        .collect();

    debug!("Normalized {} meals", recipes.len());
    recipes
}

pub fn process_meal(
    meal: &RawMealData,
    servings: u32,
    rng: &mut dyn RangeRng,
) -> NormalizedRecipe {
    let instructions = str_field(meal, "strInstructions");
    let instructions_length = instructions.as_deref().map_or(0, |s| s.chars().count());

    NormalizedRecipe {
        id: str_field(meal, "idMeal"),
        title: str_field(meal, "strMeal"),
        category: str_field(meal, "strCategory"),
        area: str_field(meal, "strArea"),
        thumbnail: str_field(meal, "strMealThumb"),
        youtube: str_field(meal, "strYoutube"),
        ingredients: extract_ingredients(meal),
        tags: split_tags(meal["strTags"].as_str()),
        source: str_field(meal, "strSource"),
        estimated_time: estimate_time(instructions_length),
        estimated_calories: rng.next_in_range(MIN_CALORIES, MAX_CALORIES),
        difficulty: estimate_difficulty(instructions_length),
        servings,
        instructions,
    }
}

fn str_field(meal: &RawMealData, key: &str) -> Option<String> {
    meal[key].as_str().map(str::to_string)
}

/// Collect `strIngredientN`/`strMeasureN` pairs for N in 1..=20, keeping only
/// slots whose ingredient is non-blank.
pub fn extract_ingredients(meal: &RawMealData) -> Vec<IngredientLine> {
    (1..=MAX_INGREDIENT_SLOTS)
        .filter_map(|i| {
            let ingredient = meal[format!("strIngredient{i}")].as_str()?.trim();
            if ingredient.is_empty() {
                return None;
            }
            let measure = meal[format!("strMeasure{i}")].as_str().unwrap_or("").trim();
            Some(IngredientLine {
                ingredient: ingredient.to_string(),
                measure: measure.to_string(),
            })
        })
        .collect()
}

/// Split on commas. Pieces are kept as-is, surrounding whitespace included.
pub fn split_tags(raw: Option<&str>) -> Vec<String> {
    match raw {
        Some(s) if !s.is_empty() => s.split(',').map(str::to_string).collect(),
        _ => Vec::new(),
    }
}

/// Minutes from instruction length: one minute per 50 characters, truncated,
/// then clamped to [30, 180].
pub fn estimate_time(instructions_length: usize) -> u32 {
    (instructions_length / CHARS_PER_MINUTE).clamp(MIN_ESTIMATED_TIME, MAX_ESTIMATED_TIME) as u32
}

pub fn estimate_difficulty(instructions_length: usize) -> Difficulty {
    if instructions_length > HARD_INSTRUCTIONS_THRESHOLD {
        Difficulty::Hard
    } else if instructions_length > MEDIUM_INSTRUCTIONS_THRESHOLD {
        Difficulty::Medium
    } else {
        Difficulty::Easy
    }
}
