//! Course catalog loading.
//!
//! A catalog is a JSON array of `{id, title, content?}` objects. Loading it
//! replaces everything the engine held before.

use anyhow::{Context, Result};
use course_rag_core::engine::CourseEngine;
use course_rag_core::models::CourseRecord;
use std::path::Path;
use std::sync::Arc;

use crate::config::Config;

/// Read and parse a catalog file.
pub fn load_catalog(path: &Path) -> Result<Vec<CourseRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read course catalog: {}", path.display()))?;
    parse_catalog(&content)
        .with_context(|| format!("Failed to parse course catalog: {}", path.display()))
}

pub fn parse_catalog(json: &str) -> Result<Vec<CourseRecord>> {
    let records: Vec<CourseRecord> = serde_json::from_str(json)?;
    Ok(records)
}

/// Build an engine from config and load the catalog into it.
///
/// `catalog_override` wins over `[catalog].path`. With neither, the engine
/// starts empty.
pub fn build_engine(config: &Config, catalog_override: Option<&Path>) -> Result<Arc<CourseEngine>> {
    let engine = Arc::new(CourseEngine::new(config.engine_settings()));

    let catalog_path = catalog_override.or(config.catalog.path.as_deref());
    match catalog_path {
        Some(path) => {
            let records = load_catalog(path)?;
            let snapshot = engine.load(&records);
            tracing::info!(
                path = %path.display(),
                courses = snapshot.len(),
                chunks = snapshot.total_chunks(),
                "loaded course catalog"
            );
        }
        None => {
            tracing::warn!("no course catalog configured; starting with an empty store");
        }
    }

    Ok(engine)
}
