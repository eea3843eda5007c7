// ABOUTME: Environment-driven cookbook configuration with validated defaults
// ABOUTME: Resolves data folder, id step, rounding, tab stripping and extra unit aliases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{cookbook, env_config, files, units};
use crate::errors::{AppError, AppResult};
use crate::recipes::{FractionTable, IngredientParser, LineSegmenter, Rounding, UnitAliases};
use std::env;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Runtime configuration for the cookbook
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookbookConfig {
    /// Folder holding the recipe and conversion files
    pub data_dir: PathBuf,
    /// Increment used for new recipe ids
    pub id_step: u64,
    /// Decimals kept when converting and scaling
    pub rounding_decimals: u8,
    /// Whether pasted text has tab characters removed
    pub strip_tabs: bool,
    /// Optional JSON file with extra unit spellings
    pub unit_aliases_file: Option<PathBuf>,
}

impl Default for CookbookConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(files::DEFAULT_DATA_DIR),
            id_step: cookbook::DEFAULT_ID_STEP,
            rounding_decimals: units::DEFAULT_ROUNDING_DECIMALS,
            strip_tabs: true,
            unit_aliases_file: None,
        }
    }
}

impl CookbookConfig {
    /// Load configuration from environment variables
    ///
    /// Unset variables take their defaults. Values that do not parse, a zero
    /// id step and an out-of-range precision are logged and replaced by the
    /// default.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let id_step = parse_env(env_config::ID_STEP, defaults.id_step, |step| *step > 0);
        let rounding_decimals = parse_env(
            env_config::ROUNDING_DECIMALS,
            defaults.rounding_decimals,
            |decimals| *decimals <= units::MAX_ROUNDING_DECIMALS,
        );
        let strip_tabs = env::var(env_config::STRIP_TABS).map_or(defaults.strip_tabs, |value| {
            parse_bool(&value).unwrap_or_else(|| {
                warn!(
                    variable = env_config::STRIP_TABS,
                    value = %value,
                    "Invalid boolean, using default"
                );
                defaults.strip_tabs
            })
        });
        let unit_aliases_file = env::var(env_config::UNIT_ALIASES)
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let config = Self {
            data_dir: PathBuf::from(env_var_or(env_config::DATA_DIR, files::DEFAULT_DATA_DIR)),
            id_step,
            rounding_decimals,
            strip_tabs,
            unit_aliases_file,
        };
        debug!(?config, "Configuration loaded from environment");
        config
    }

    /// Override the data folder
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Path of the recipe collection file
    #[must_use]
    pub fn recipes_path(&self) -> PathBuf {
        self.data_dir.join(files::RECIPES)
    }

    /// Path of the density table file
    #[must_use]
    pub fn conversion_path(&self) -> PathBuf {
        self.data_dir.join(files::CONVERSION_TABLE)
    }

    /// Rounding used by conversion and scaling
    #[must_use]
    pub const fn rounding(&self) -> Rounding {
        Rounding::new(self.rounding_decimals)
    }

    /// Line segmenter matching the tab setting
    #[must_use]
    pub const fn segmenter(&self) -> LineSegmenter {
        LineSegmenter::new(self.strip_tabs)
    }

    /// Create the data folder when it does not exist yet
    ///
    /// # Errors
    ///
    /// Returns a storage error if the folder cannot be created
    pub async fn ensure_data_dir(&self) -> AppResult<()> {
        if tokio::fs::try_exists(&self.data_dir).await? {
            return Ok(());
        }
        tokio::fs::create_dir_all(&self.data_dir).await.map_err(|e| {
            AppError::storage(format!(
                "cannot create data folder {}",
                self.data_dir.display()
            ))
            .with_source(e)
        })?;
        info!(data_dir = %self.data_dir.display(), "Created data folder");
        Ok(())
    }

    /// Default aliases, with the optional alias file merged over them
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the alias file cannot be read, is not
    /// valid JSON, or holds an invalid multiplier
    pub async fn load_unit_aliases(&self) -> AppResult<UnitAliases> {
        let mut aliases = UnitAliases::default();
        let Some(path) = &self.unit_aliases_file else {
            return Ok(aliases);
        };

        let extra = read_alias_file(path).await?;
        let count = extra.len();
        aliases
            .extend(extra)
            .map_err(|e| AppError::config(format!("{}: {e}", path.display())).with_source(e))?;
        info!(file = %path.display(), count, "Merged extra unit aliases");
        Ok(aliases)
    }

    /// Parser built from this configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the alias file cannot be loaded
    pub async fn build_parser(&self) -> AppResult<IngredientParser> {
        let aliases = self.load_unit_aliases().await?;
        Ok(IngredientParser::new(
            self.segmenter(),
            aliases,
            FractionTable::default(),
        ))
    }
}

async fn read_alias_file(path: &Path) -> AppResult<UnitAliases> {
    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        AppError::config(format!("cannot read unit alias file {}", path.display())).with_source(e)
    })?;
    serde_json::from_str(&content).map_err(|e| {
        AppError::config(format!("unit alias file {} is not valid", path.display())).with_source(e)
    })
}

/// Parse a variable, falling back to `default` when unset or rejected
fn parse_env<T>(key: &str, default: T, accept: impl Fn(&T) -> bool) -> T
where
    T: FromStr + Display + Copy,
{
    let Ok(raw) = env::var(key) else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) if accept(&value) => value,
        _ => {
            warn!(variable = key, value = %raw, default = %default, "Invalid value, using default");
            default
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
