use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

use crate::state::locale::Locale;
use crate::state::presets::TablePreset;
use crate::state::table_state::TableConfig;

pub const DATA_DIR_VAR: &str = "PULSE_DATA_DIR";
pub const TABLE_VAR: &str = "PULSE_TABLE";
pub const LANGUAGE_VAR: &str = "PULSE_LANGUAGE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("dashboard config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unknown table '{id}'")]
    UnknownTable { id: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TableSettings {
    pub dataset: String,
    #[serde(default)]
    pub csv: Option<String>,
    pub preset: TablePreset,
    /// Appends a timestamp query so cached copies of the dataset are skipped.
    #[serde(default)]
    pub cache_bust: bool,
}

impl TableSettings {
    pub fn table_config(&self, locale_hint: Option<Locale>) -> TableConfig {
        TableConfig {
            columns: self.preset.columns(),
            csv: self.csv.clone(),
            locale_hint,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DashboardConfig {
    pub default_table: String,
    #[serde(default)]
    pub background_regions: Vec<String>,
    pub tables: BTreeMap<String, TableSettings>,
}

impl DashboardConfig {
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::parse(include_str!("../assets/dashboard.json"))
    }

    pub fn parse(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(source)?;
        config.table(&config.default_table)?;
        Ok(config)
    }

    pub fn table(&self, id: &str) -> Result<&TableSettings, ConfigError> {
        self.tables
            .get(id)
            .ok_or_else(|| ConfigError::UnknownTable { id: id.to_string() })
    }

    /// The requested table, or the default one when no id is given.
    pub fn select(&self, id: Option<&str>) -> Result<(&str, &TableSettings), ConfigError> {
        let id = id.unwrap_or(&self.default_table);
        let (key, settings) = self
            .tables
            .get_key_value(id)
            .ok_or_else(|| ConfigError::UnknownTable { id: id.to_string() })?;
        Ok((key.as_str(), settings))
    }
}

/// Process-level overrides.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Environment {
    pub data_dir: PathBuf,
    pub table: Option<String>,
    pub language: Option<String>,
}

impl Environment {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        Self {
            data_dir: non_empty(DATA_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            table: non_empty(TABLE_VAR),
            language: lookup(LANGUAGE_VAR),
        }
    }
}
