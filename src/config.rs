use crate::constants::{
    ALPHABET, DEFAULT_OUTPUT_FILE, DEFAULT_SERVINGS, MEALDB_BASE_URL, REQUEST_DELAY,
};
use crate::error::{Result, ScraperError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Everything a pipeline run needs, passed in explicitly
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub base_url: String,
    pub alphabet: Vec<char>,
    pub request_delay: Duration,
    pub request_timeout: Option<Duration>,
    pub servings: u32,
    pub output_path: PathBuf,
    pub show_progress: bool,
    /// JSON log files go here when set; unset means console logging only
    pub log_dir: Option<PathBuf>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            base_url: MEALDB_BASE_URL.to_string(),
            alphabet: ALPHABET.chars().collect(),
            request_delay: REQUEST_DELAY,
            request_timeout: None,
            servings: DEFAULT_SERVINGS,
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            show_progress: true,
            log_dir: None,
        }
    }
}

/// Optional overrides read from a TOML file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub base_url: Option<String>,
    pub letters: Option<String>,
    pub delay_ms: Option<u64>,
    pub timeout_secs: Option<u64>,
    pub servings: Option<u32>,
    pub output: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ScraperError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: FileConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

impl PipelineConfig {
    /// Apply every field the file sets; unset fields keep their current value
    pub fn merge_file(mut self, file: FileConfig) -> Result<Self> {
        if let Some(base_url) = file.base_url {
            self.base_url = base_url;
        }
        if let Some(letters) = file.letters {
            self.alphabet = parse_letters(&letters)?;
        }
        if let Some(ms) = file.delay_ms {
            self.request_delay = Duration::from_millis(ms);
        }
        if let Some(secs) = file.timeout_secs {
            self.request_timeout = Some(Duration::from_secs(secs));
        }
        if let Some(servings) = file.servings {
            self.servings = servings;
        }
        if let Some(output) = file.output {
            self.output_path = output;
        }
        if let Some(log_dir) = file.log_dir {
            self.log_dir = Some(log_dir);
        }
        Ok(self)
    }
}

/// Parse a letter list such as `"abc"`. Only lowercase ASCII letters are
/// accepted, since they are sent verbatim as the `f` query parameter.
pub fn parse_letters(s: &str) -> Result<Vec<char>> {
    let letters: Vec<char> = s.chars().collect();
    if letters.is_empty() {
        return Err(ScraperError::Config("letter list is empty".into()));
    }
    if let Some(bad) = letters.iter().find(|c| !c.is_ascii_lowercase()) {
        return Err(ScraperError::Config(format!(
            "invalid letter '{bad}': expected a-z"
        )));
    }
    Ok(letters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_matches_documented_run() {
        let config = PipelineConfig::default();
        assert_eq!(config.alphabet.len(), 26);
        assert_eq!(config.alphabet.first(), Some(&'a'));
        assert_eq!(config.alphabet.last(), Some(&'z'));
        assert_eq!(config.request_delay, Duration::from_millis(500));
        assert_eq!(config.servings, 4);
        assert_eq!(config.output_path, PathBuf::from("mealdb_recipes.json"));
        assert_eq!(config.base_url, "https://www.themealdb.com/api/json/v1/1");
        assert!(config.request_timeout.is_none());
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn parse_letters_rejects_uppercase_and_empty() {
        assert_eq!(parse_letters("xyz").unwrap(), vec!['x', 'y', 'z']);
        assert!(matches!(parse_letters(""), Err(ScraperError::Config(_))));
        assert!(matches!(parse_letters("aB"), Err(ScraperError::Config(_))));
        assert!(matches!(parse_letters("a1"), Err(ScraperError::Config(_))));
    }

    #[test]
    fn merge_file_overrides_only_set_fields() {
        let file = FileConfig {
            letters: Some("mq".into()),
            delay_ms: Some(0),
            ..Default::default()
        };
        let config = PipelineConfig::default().merge_file(file).unwrap();
        assert_eq!(config.alphabet, vec!['m', 'q']);
        assert_eq!(config.request_delay, Duration::ZERO);
        assert_eq!(config.servings, 4);
        assert_eq!(config.output_path, PathBuf::from("mealdb_recipes.json"));
    }

    #[test]
    fn load_reads_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "servings = 6\noutput = \"out/seed.json\"\ntimeout_secs = 10\nlog_dir = \"logs\""
        )
        .unwrap();

        let loaded = FileConfig::load(file.path()).unwrap();
        let config = PipelineConfig::default().merge_file(loaded).unwrap();
        assert_eq!(config.servings, 6);
        assert_eq!(config.output_path, PathBuf::from("out/seed.json"));
        assert_eq!(config.request_timeout, Some(Duration::from_secs(10)));
        assert_eq!(config.log_dir, Some(PathBuf::from("logs")));
    }

    #[test]
    fn load_rejects_unknown_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "retries = 3").unwrap();
        assert!(matches!(
            FileConfig::load(file.path()),
            Err(ScraperError::Toml(_))
        ));
    }

    #[test]
    fn load_missing_file_is_config_error() {
        let result = FileConfig::load(Path::new("/nonexistent/mealdb.toml"));
        assert!(matches!(result, Err(ScraperError::Config(_))));
    }
}
