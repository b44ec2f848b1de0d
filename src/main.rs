use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use mealdb_scraper::apis::mealdb::MealDbApi;
use mealdb_scraper::config::{parse_letters, FileConfig, PipelineConfig};
use mealdb_scraper::logging;
use mealdb_scraper::pipeline::throttle::FixedDelay;
use mealdb_scraper::pipeline::Pipeline;
use mealdb_scraper::rng::{RangeRng, SeededRangeRng, ThreadRangeRng};

#[derive(Parser)]
#[command(name = "mealdb_scraper")]
#[command(about = "Fetch TheMealDB recipes, enrich them and write a seed JSON file")]
#[command(version = "0.1.0")]
struct Cli {
    /// TOML file with overrides (base_url, letters, delay_ms, timeout_secs, servings, output, log_dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Letters to query, in order (e.g. "abc")
    #[arg(long)]
    letters: Option<String>,

    /// Delay between letters in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Seed calorie estimates for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Disable the progress bar
    #[arg(long)]
    no_progress: bool,

    /// Also write JSON logs to a daily rolling file in this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

impl Cli {
    /// Defaults, then the config file, then flags
    fn pipeline_config(&self) -> anyhow::Result<PipelineConfig> {
        let mut config = PipelineConfig::default();

        if let Some(path) = &self.config {
            let file = FileConfig::load(path)?;
            config = config.merge_file(file)?;
        }
        if let Some(output) = &self.output {
            config.output_path = output.clone();
        }
        if let Some(letters) = &self.letters {
            config.alphabet = parse_letters(letters)?;
        }
        if let Some(ms) = self.delay_ms {
            config.request_delay = Duration::from_millis(ms);
        }
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if self.no_progress {
            config.show_progress = false;
        }
        if let Some(log_dir) = &self.log_dir {
            config.log_dir = Some(log_dir.clone());
        }
        Ok(config)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.pipeline_config().context("invalid configuration")?;
    let _log_guard =
        logging::init_logging(config.log_dir.as_deref()).context("failed to set up log file")?;

    println!("Starting MealDB data extraction...");
    info!(base_url = %config.base_url, letters = config.alphabet.len(), "Starting MealDB data extraction");

    let api = MealDbApi::new(&config).context("failed to build HTTP client")?;
    let throttle = FixedDelay::new(config.request_delay);
    let pipeline = Pipeline::new(Box::new(api), Box::new(throttle), config);

    let mut rng: Box<dyn RangeRng> = match cli.seed {
        Some(seed) => Box::new(SeededRangeRng::new(seed)),
        None => Box::new(ThreadRangeRng),
    };

    let result = pipeline
        .run(rng.as_mut())
        .await
        .context("pipeline run failed")?;

    println!("\nData successfully saved to {}", result.output_file);
    println!("Total recipes: {}", result.total_written);
    if result.letters_empty > 0 {
        println!(
            "   Letters with no meals: {}/{}",
            result.letters_empty, result.letters_queried
        );
    }
    info!(
        total_fetched = result.total_fetched,
        total_written = result.total_written,
        output_file = %result.output_file,
        "Pipeline finished"
    );

    Ok(())
}
