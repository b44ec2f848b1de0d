use crate::constants::GENERATED_AT_FORMAT;
use crate::error::Result;
use crate::types::{NormalizedRecipe, OutputDocument};
use chrono::Local;
use std::fs;
use std::path::Path;
use tracing::{info, instrument};

/// Wrap the recipes in an `OutputDocument` stamped with the current local time
/// and write it to `path`, replacing any existing file.
pub fn write_output(recipes: Vec<NormalizedRecipe>, path: &Path) -> Result<OutputDocument> {
    let generated_at = Local::now().format(GENERATED_AT_FORMAT).to_string();
    let document = OutputDocument::new(recipes, generated_at);
    write_document(&document, path)?;
    Ok(document)
}

/// Pretty-printed with two-space indentation. Not atomic: a failure partway
/// can leave a truncated file behind.
#[instrument(skip(document), fields(total = document.total()))]
pub fn write_document(document: &OutputDocument, path: &Path) -> Result<()> {
    let json_content = serde_json::to_string_pretty(document)?;
    fs::write(path, json_content)?;

    info!("Wrote {} recipes to {}", document.total(), path.display());
    Ok(())
}
