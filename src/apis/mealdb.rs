use crate::config::PipelineConfig;
use crate::constants::MEALDB_API;
use crate::error::{Result, ScraperError};
use crate::types::{MealApi, RawMealData};
use serde_json::Value;
use tracing::{debug, instrument};

pub struct MealDbApi {
    client: reqwest::Client,
    base_url: String,
}

impl MealDbApi {
    pub fn new(config: &PipelineConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn search_url(&self, letter: char) -> String {
        format!("{}/search.php?f={}", self.base_url, letter)
    }
}

/// Pull the `meals` array out of a search response.
///
/// The API answers `{"meals": null}` when nothing matches, so a null, missing
/// or non-array field all mean no meals.
pub fn extract_meals(body: &Value) -> Vec<RawMealData> {
    match body.get("meals") {
        Some(Value::Array(meals)) => meals.clone(),
        _ => Vec::new(),
    }
}

#[async_trait::async_trait]
impl MealApi for MealDbApi {
    fn api_name(&self) -> &'static str {
        MEALDB_API
    }

    #[instrument(skip(self))]
    async fn search_by_letter(&self, letter: char) -> Result<Vec<RawMealData>> {
        let url = self.search_url(letter);
        debug!("GET {}", url);

        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ScraperError::Api {
                message: format!("{} responded with status {}", url, status.as_u16()),
            });
        }

        let payload = resp.bytes().await?;
        let data: Value = serde_json::from_slice(&payload)?;
        let meals = extract_meals(&data);

        debug!("Decoded {} meals for letter {}", meals.len(), letter);
        Ok(meals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn search_url_uses_first_letter_param() {
        let api = MealDbApi::new(&PipelineConfig::default()).unwrap();
        assert_eq!(
            api.search_url('b'),
            "https://www.themealdb.com/api/json/v1/1/search.php?f=b"
        );
    }

    #[test]
    fn search_url_ignores_trailing_slash_on_base() {
        let config = PipelineConfig {
            base_url: "http://localhost:8080/api/".into(),
            ..Default::default()
        };
        let api = MealDbApi::new(&config).unwrap();
        assert_eq!(api.search_url('q'), "http://localhost:8080/api/search.php?f=q");
    }

    #[test]
    fn extract_meals_returns_array_in_order() {
        let body = json!({
            "meals": [
                { "idMeal": "52768", "strMeal": "Apple Frangipan Tart" },
                { "idMeal": "52893", "strMeal": "Apple & Blackberry Crumble" }
            ]
        });

        let meals = extract_meals(&body);
        assert_eq!(meals.len(), 2);
        assert_eq!(meals[0]["idMeal"], "52768");
        assert_eq!(meals[1]["strMeal"], "Apple & Blackberry Crumble");
    }

    #[test]
    fn extract_meals_null_or_missing_is_empty() {
        assert!(extract_meals(&json!({ "meals": null })).is_empty());
        assert!(extract_meals(&json!({})).is_empty());
        assert!(extract_meals(&json!({ "meals": "nope" })).is_empty());
    }

    #[test]
    fn api_name_is_stable() {
        let api = MealDbApi::new(&PipelineConfig::default()).unwrap();
        assert_eq!(api.api_name(), "themealdb");
    }
}
