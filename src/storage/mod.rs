// ABOUTME: Persistence boundary for the cookbook and the density table
// ABOUTME: Defines the CookbookStore trait with JSON file and in-memory backends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Storage
//!
//! The engine never touches the filesystem. A [`CookbookStore`] hands it a
//! fully populated [`Cookbook`] and [`ConversionTable`] at startup and takes
//! them back after every mutation.

/// JSON files in the data folder
pub mod json;
/// Process-local store for tests and tooling
pub mod memory;

pub use json::JsonFileStore;
pub use memory::InMemoryStore;

use crate::errors::AppResult;
use crate::recipes::{ConversionTable, Cookbook};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Storage backend for the recipe collection and the density table
#[async_trait]
pub trait CookbookStore: Send + Sync {
    /// Load the recipe collection; an absent collection is empty
    async fn load_cookbook(&self) -> AppResult<Cookbook>;

    /// Persist the whole recipe collection
    async fn save_cookbook(&self, cookbook: &Cookbook) -> AppResult<()>;

    /// Load the density table; an absent table is empty
    async fn load_conversion_table(&self) -> AppResult<ConversionTable>;

    /// Persist the whole density table
    async fn save_conversion_table(&self, table: &ConversionTable) -> AppResult<()>;
}

/// Serialize as JSON indented with four spaces
///
/// # Errors
///
/// Returns a serialization error if `value` cannot be represented as JSON
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> AppResult<String> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
