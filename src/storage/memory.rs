// ABOUTME: In-memory cookbook store for tests and tooling
// ABOUTME: Keeps the last saved snapshots behind tokio RwLocks and counts saves
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::CookbookStore;
use crate::errors::AppResult;
use crate::recipes::{ConversionTable, Cookbook};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Store that keeps snapshots in process memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    cookbook: Arc<RwLock<Cookbook>>,
    table: Arc<RwLock<ConversionTable>>,
    saves: Arc<AtomicUsize>,
}

impl InMemoryStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with a collection and a density table
    #[must_use]
    pub fn with_data(cookbook: Cookbook, table: ConversionTable) -> Self {
        Self {
            cookbook: Arc::new(RwLock::new(cookbook)),
            table: Arc::new(RwLock::new(table)),
            saves: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of successful saves of either kind
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Last saved recipe collection
    pub async fn saved_cookbook(&self) -> Cookbook {
        self.cookbook.read().await.clone()
    }

    /// Last saved density table
    pub async fn saved_conversion_table(&self) -> ConversionTable {
        self.table.read().await.clone()
    }
}

#[async_trait]
impl CookbookStore for InMemoryStore {
    async fn load_cookbook(&self) -> AppResult<Cookbook> {
        Ok(self.cookbook.read().await.clone())
    }

    async fn save_cookbook(&self, cookbook: &Cookbook) -> AppResult<()> {
        cookbook.clone_into(&mut *self.cookbook.write().await);
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn load_conversion_table(&self) -> AppResult<ConversionTable> {
        Ok(self.table.read().await.clone())
    }

    async fn save_conversion_table(&self, table: &ConversionTable) -> AppResult<()> {
        table.clone_into(&mut *self.table.write().await);
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
