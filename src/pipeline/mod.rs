pub mod output;
pub mod processing;
pub mod throttle;

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::progress::LetterProgress;
use crate::rng::RangeRng;
use crate::types::{MealApi, RawMealData};
use metrics::{counter, histogram};
use serde::Serialize;
use tracing::{error, info, instrument};

use self::output::write_output;
use self::processing::process_meal_data;
use self::throttle::Throttle;

/// Result of a complete pipeline run
#[derive(Debug, Serialize)]
pub struct PipelineResult {
    pub api_name: String,
    pub letters_queried: usize,
    pub letters_empty: usize,
    pub total_fetched: usize,
    pub total_written: usize,
    pub output_file: String,
}

pub struct Pipeline {
    api: Box<dyn MealApi>,
    throttle: Box<dyn Throttle>,
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(api: Box<dyn MealApi>, throttle: Box<dyn Throttle>, config: PipelineConfig) -> Self {
        Self {
            api,
            throttle,
            config,
        }
    }

    /// Fetch one letter. Any failure is logged and turned into an empty result
    /// so the run carries on with the next letter.
    #[instrument(skip(self), fields(api_name = %self.api.api_name()))]
    pub async fn fetch_meals_by_letter(&self, letter: char) -> Vec<RawMealData> {
        let api_name = self.api.api_name();
        counter!("mealdb_letters_fetched_total", "api" => api_name).increment(1);
        let t_fetch = std::time::Instant::now();

        let meals = match self.api.search_by_letter(letter).await {
            Ok(meals) => meals,
            Err(e) => {
                error!("Error fetching meals starting with {}: {}", letter, e);
                counter!("mealdb_fetch_errors_total", "api" => api_name).increment(1);
                Vec::new()
            }
        };

        histogram!("mealdb_fetch_duration_seconds", "api" => api_name)
            .record(t_fetch.elapsed().as_secs_f64());
        meals
    }

    /// Fetch every configured letter in order and concatenate the results.
    pub async fn fetch_all_meals(&self) -> Vec<RawMealData> {
        self.collect_meals().await.0
    }

    /// Returns the concatenated meals and the number of letters that yielded none.
    async fn collect_meals(&self) -> (Vec<RawMealData>, usize) {
        let alphabet = &self.config.alphabet;
        let progress = LetterProgress::new(alphabet.len(), self.config.show_progress);
        let mut all_meals = Vec::new();
        let mut letters_empty = 0;

        for &letter in alphabet {
            progress.start_letter(letter);
            progress.println(format!("\nFetching meals starting with letter: {letter}"));

            let meals = self.fetch_meals_by_letter(letter).await;
            if meals.is_empty() {
                letters_empty += 1;
                progress.println(format!("No meals found starting with {letter}"));
            } else {
                info!("Found {} meals starting with {}", meals.len(), letter);
                progress.println(format!("Found {} meals starting with {}", meals.len(), letter));
                all_meals.extend(meals);
            }
            progress.advance();

            self.throttle.wait().await;
        }
        progress.finish();

        counter!("mealdb_meals_fetched_total", "api" => self.api.api_name())
            .increment(all_meals.len() as u64);
        (all_meals, letters_empty)
    }

    /// Fetch, normalize and write. Fetch errors are absorbed per letter; a
    /// write failure aborts the run.
    #[instrument(skip(self, rng), fields(api_name = %self.api.api_name()))]
    pub async fn run(&self, rng: &mut dyn RangeRng) -> Result<PipelineResult> {
        let api_name = self.api.api_name().to_string();
        info!("Starting pipeline for {}", api_name);

        let (raw_meals, letters_empty) = self.collect_meals().await;
        info!("Total meals fetched: {}", raw_meals.len());
        println!("\nTotal meals fetched: {}", raw_meals.len());

        let recipes = process_meal_data(&raw_meals, self.config.servings, rng);

        let output_path = &self.config.output_path;
        let document = write_output(recipes, output_path)?;
        counter!("mealdb_recipes_written_total", "api" => api_name.clone())
            .increment(document.total() as u64);

        Ok(PipelineResult {
            api_name,
            letters_queried: self.config.alphabet.len(),
            letters_empty,
            total_fetched: raw_meals.len(),
            total_written: document.total(),
            output_file: output_path.display().to_string(),
        })
    }
}
