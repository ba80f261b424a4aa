use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::state::data_model::TableData;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("dataset document has no 'data' array")]
    MissingData,

    #[error("dataset 'data' array contains non-object elements")]
    NotArrayOfObjects,
}

/// Parses a `{ "data": [ {..}, .. ] }` document into rows.
pub fn parse_dataset(source: &str) -> Result<TableData, DatasetError> {
    let value: Value = serde_json::from_str(source)?;

    let Value::Object(mut document) = value else {
        return Err(DatasetError::MissingData);
    };
    let Some(Value::Array(items)) = document.remove("data") else {
        return Err(DatasetError::MissingData);
    };

    let mut rows = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::Object(map) => rows.push(map),
            _ => return Err(DatasetError::NotArrayOfObjects),
        }
    }
    Ok(rows)
}

pub fn load_dataset(path: &Path) -> Result<TableData, DatasetError> {
    let content = fs::read_to_string(path)?;
    parse_dataset(&content)
}

/// Reads a dataset published at `url_path` from a local copy of the site
/// under `root`.
pub async fn fetch_dataset(root: &Path, url_path: &str) -> Result<TableData, DatasetError> {
    let path = resolve_dataset_path(root, url_path);
    debug!(url = url_path, path = %path.display(), "loading dataset");
    let content = tokio::fs::read_to_string(&path).await?;
    let rows = parse_dataset(&content)?;
    debug!(rows = rows.len(), "dataset loaded");
    Ok(rows)
}

/// Maps a site URL path (query string ignored) onto the data root.
pub fn resolve_dataset_path(root: &Path, url_path: &str) -> PathBuf {
    let without_query = url_path.split(['?', '#']).next().unwrap_or_default();
    let relative = without_query.trim_start_matches('/');
    root.join(relative)
}

/// URL for a dataset, with a timestamp query when caches must be bypassed.
pub fn dataset_url(path: &str, cache_stamp: Option<u128>) -> String {
    match cache_stamp {
        Some(stamp) => format!("{path}?{stamp}"),
        None => path.to_string(),
    }
}
