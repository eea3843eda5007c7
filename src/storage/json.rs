// ABOUTME: JSON file store keeping recipes.json and conversion.json in the data folder
// ABOUTME: Reads legacy bare-array recipe files and writes through a temporary file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{to_pretty_json, CookbookStore};
use crate::config::CookbookConfig;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::logging::AppLogger;
use crate::recipes::{ConversionTable, Cookbook, CookbookDocument};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Store backed by two pretty-printed JSON files
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    recipes_path: PathBuf,
    conversion_path: PathBuf,
}

impl JsonFileStore {
    /// Store using explicit file paths
    #[must_use]
    pub fn new(recipes_path: impl Into<PathBuf>, conversion_path: impl Into<PathBuf>) -> Self {
        Self {
            recipes_path: recipes_path.into(),
            conversion_path: conversion_path.into(),
        }
    }

    /// Store using the file names configured for the data folder
    #[must_use]
    pub fn from_config(config: &CookbookConfig) -> Self {
        Self::new(config.recipes_path(), config.conversion_path())
    }

    /// Recipe collection file
    #[must_use]
    pub fn recipes_path(&self) -> &Path {
        &self.recipes_path
    }

    /// Density table file
    #[must_use]
    pub fn conversion_path(&self) -> &Path {
        &self.conversion_path
    }
}

#[async_trait]
impl CookbookStore for JsonFileStore {
    async fn load_cookbook(&self) -> AppResult<Cookbook> {
        let document: Option<CookbookDocument> = read_json(&self.recipes_path).await?;
        let cookbook = document.map(Cookbook::from).unwrap_or_default();
        debug!(recipes = cookbook.len(), last_id = cookbook.last_id(), "Cookbook loaded");
        Ok(cookbook)
    }

    async fn save_cookbook(&self, cookbook: &Cookbook) -> AppResult<()> {
        write_json(&self.recipes_path, cookbook).await
    }

    async fn load_conversion_table(&self) -> AppResult<ConversionTable> {
        let table: Option<ConversionTable> = read_json(&self.conversion_path).await?;
        Ok(table.unwrap_or_default())
    }

    async fn save_conversion_table(&self, table: &ConversionTable) -> AppResult<()> {
        write_json(&self.conversion_path, table).await
    }
}

/// Read and decode a file, `None` when it does not exist
async fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<Option<T>> {
    let started = Instant::now();
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!(file = %path.display(), "File does not exist, starting empty");
            return Ok(None);
        }
        Err(e) => {
            AppLogger::log_storage_operation("read", &path.display().to_string(), false, elapsed_ms(started));
            return Err(AppError::storage(format!("cannot read {}", path.display())).with_source(e));
        }
    };

    let value = serde_json::from_str(&content).map_err(|e| {
        AppError::new(
            ErrorCode::SerializationError,
            format!("{} is corrupt. Please correct or delete the file", path.display()),
        )
        .with_source(e)
    })?;
    AppLogger::log_storage_operation("read", &path.display().to_string(), true, elapsed_ms(started));
    Ok(Some(value))
}

/// Encode and write a file through a temporary sibling
async fn write_json<T: serde::Serialize + Sync>(path: &Path, value: &T) -> AppResult<()> {
    let started = Instant::now();
    let content = to_pretty_json(value)?;
    let temp_path = temp_sibling(path);

    let result = async {
        tokio::fs::write(&temp_path, content.as_bytes()).await?;
        tokio::fs::rename(&temp_path, path).await
    }
    .await;

    let file = path.display().to_string();
    AppLogger::log_storage_operation("write", &file, result.is_ok(), elapsed_ms(started));
    result.map_err(|e| AppError::storage(format!("cannot write {file}")).with_source(e))
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(std::ffi::OsStr::to_os_string)
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
