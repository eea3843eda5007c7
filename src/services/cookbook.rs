// ABOUTME: Concurrency-safe cookbook service shared by every entry point
// ABOUTME: Serializes mutations behind tokio RwLocks and persists after each one
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Cookbook service
//!
//! The engine types are plain values with no locking of their own. This
//! service owns the process-wide [`Cookbook`] and [`ConversionTable`] and
//! gives them the guarantees a multi-user front end needs:
//!
//! - every mutation holds the write lock until its save has finished, so two
//!   mutations never interleave and the store always sees a complete state
//! - a mutation works on a copy and only replaces the shared state after the
//!   store accepted it, so a failed save leaves memory unchanged
//! - readers take the read lock and receive owned snapshots

use crate::config::CookbookConfig;
use crate::errors::{AppError, AppResult, RecipeError};
use crate::logging::AppLogger;
use crate::recipes::{
    AltUnitConverter, ConversionTable, Cookbook, Ingredient, IngredientParser, Recipe,
    RecipeDraft, Rounding,
};
use crate::storage::{to_pretty_json, CookbookStore, JsonFileStore};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Shared cookbook state with persistence after each mutation
#[derive(Clone)]
pub struct CookbookService {
    cookbook: Arc<RwLock<Cookbook>>,
    table: Arc<RwLock<ConversionTable>>,
    parser: Arc<IngredientParser>,
    rounding: Rounding,
    store: Arc<dyn CookbookStore>,
}

impl CookbookService {
    /// Service over already-loaded state
    #[must_use]
    pub fn new(
        cookbook: Cookbook,
        table: ConversionTable,
        parser: IngredientParser,
        rounding: Rounding,
        store: Arc<dyn CookbookStore>,
    ) -> Self {
        Self {
            cookbook: Arc::new(RwLock::new(cookbook)),
            table: Arc::new(RwLock::new(table)),
            parser: Arc::new(parser),
            rounding,
            store,
        }
    }

    /// Load state from `store` using the configured parser, rounding and id step
    ///
    /// # Errors
    ///
    /// Returns an error if the alias file or either stored collection cannot
    /// be loaded
    pub async fn load(config: &CookbookConfig, store: Arc<dyn CookbookStore>) -> AppResult<Self> {
        let parser = config.build_parser().await?;
        let cookbook = store.load_cookbook().await?.with_id_step(config.id_step);
        let table = store.load_conversion_table().await?;
        info!(
            recipes = cookbook.len(),
            densities = table.len(),
            id_step = cookbook.id_step(),
            "Cookbook service loaded"
        );
        Ok(Self::new(cookbook, table, parser, config.rounding(), store))
    }

    /// Create the data folder if needed and load from its JSON files
    ///
    /// # Errors
    ///
    /// Returns an error if the folder cannot be created or the files cannot
    /// be loaded
    pub async fn open(config: &CookbookConfig) -> AppResult<Self> {
        config.ensure_data_dir().await?;
        let store = Arc::new(JsonFileStore::from_config(config));
        Self::load(config, store).await
    }

    /// Parser used for pasted ingredient text
    #[must_use]
    pub fn parser(&self) -> &IngredientParser {
        &self.parser
    }

    /// Rounding used for conversion and scaling
    #[must_use]
    pub const fn rounding(&self) -> Rounding {
        self.rounding
    }

    /// Parse a pasted ingredient block
    #[must_use]
    pub fn parse_ingredients(&self, text: &str) -> Vec<Ingredient> {
        self.parser.parse_text(text)
    }

    /// Add a recipe and return its id
    ///
    /// # Errors
    ///
    /// Returns an error for a blank name or non-positive portions, or if the
    /// collection cannot be saved
    pub async fn add_recipe(&self, draft: RecipeDraft, author: &str) -> AppResult<u64> {
        validate_draft(&draft)?;
        let mut guard = self.cookbook.write().await;
        let mut updated = guard.clone();
        let id = updated.add(Recipe::new(draft, author));
        self.store.save_cookbook(&updated).await?;
        *guard = updated;
        AppLogger::log_recipe_event("created", id, Some(author));
        Ok(id)
    }

    /// Add a recipe whose ingredients are given as pasted text
    ///
    /// Ingredients already present in `draft` are replaced.
    ///
    /// # Errors
    ///
    /// Same as [`CookbookService::add_recipe`]
    pub async fn add_recipe_from_text(
        &self,
        draft: RecipeDraft,
        ingredients_text: &str,
        author: &str,
    ) -> AppResult<u64> {
        let ingredients = self.parse_ingredients(ingredients_text);
        debug!(count = ingredients.len(), "Parsed pasted ingredients");
        self.add_recipe(draft.with_ingredients(ingredients), author)
            .await
    }

    /// Snapshot of one recipe
    ///
    /// # Errors
    ///
    /// Returns a not-found error if no recipe has this id
    pub async fn find(&self, id: u64) -> AppResult<Recipe> {
        debug!(recipe.id = id, "Looking up recipe");
        Ok(self.cookbook.read().await.find(id)?)
    }

    /// Replace the editable fields of a recipe
    ///
    /// # Errors
    ///
    /// Returns a not-found error for an unknown id, a validation error for a
    /// blank name or non-positive portions, or a storage error
    pub async fn update_recipe(&self, id: u64, draft: RecipeDraft, author: &str) -> AppResult<Recipe> {
        validate_draft(&draft)?;
        let mut guard = self.cookbook.write().await;
        let mut updated = guard.clone();
        updated.update(id, draft, author)?;
        let recipe = updated.find(id)?;
        self.store.save_cookbook(&updated).await?;
        *guard = updated;
        AppLogger::log_recipe_event("updated", id, Some(author));
        Ok(recipe)
    }

    /// Remove a recipe and return its final snapshot
    ///
    /// # Errors
    ///
    /// Returns a not-found error for an unknown id, or a storage error
    pub async fn remove_recipe(&self, id: u64) -> AppResult<Recipe> {
        let mut guard = self.cookbook.write().await;
        let mut updated = guard.clone();
        let removed = updated.remove(id)?;
        self.store.save_cookbook(&updated).await?;
        *guard = updated;
        AppLogger::log_recipe_event("removed", id, None);
        Ok(removed)
    }

    /// Recipes matching `needle` in their name or an ingredient, ignoring case
    pub async fn search(&self, needle: &str) -> Vec<Recipe> {
        let results = self.cookbook.read().await.find_by_text(needle);
        debug!(needle, matches = results.len(), "Recipe search");
        results
    }

    /// A stored recipe rescaled to `portions`; the stored one is unchanged
    ///
    /// # Errors
    ///
    /// Returns a not-found error for an unknown id or a range error for
    /// non-positive portions
    pub async fn adjust_portions(&self, id: u64, portions: f64) -> AppResult<Recipe> {
        let recipe = self.find(id).await?;
        Ok(recipe.adjust_portions(portions, self.rounding)?)
    }

    /// Display lines for a recipe's ingredients, with alternate units from
    /// the current density table
    pub async fn render_ingredients(&self, recipe: &Recipe) -> Vec<String> {
        let table = self.table.read().await;
        let converter = AltUnitConverter::new(&table, self.rounding);
        recipe
            .ingredients()
            .iter()
            .map(|ingredient| converter.display(ingredient))
            .collect()
    }

    /// Set the density of an item, returning the previous factor
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank item or a non-positive factor,
    /// or a storage error
    pub async fn set_density(&self, item: &str, factor: f64) -> AppResult<Option<f64>> {
        let mut guard = self.table.write().await;
        let mut updated = guard.clone();
        let previous = updated.insert(item, factor)?;
        self.store.save_conversion_table(&updated).await?;
        *guard = updated;
        AppLogger::log_density_event("set", item, Some(factor));
        Ok(previous)
    }

    /// Remove the density of an item, returning it if it was known
    ///
    /// # Errors
    ///
    /// Returns a storage error if the table cannot be saved
    pub async fn remove_density(&self, item: &str) -> AppResult<Option<f64>> {
        let mut guard = self.table.write().await;
        let mut updated = guard.clone();
        let Some(previous) = updated.remove(item) else {
            return Ok(None);
        };
        self.store.save_conversion_table(&updated).await?;
        *guard = updated;
        AppLogger::log_density_event("removed", item, None);
        Ok(Some(previous))
    }

    /// Known densities sorted by item
    pub async fn densities(&self) -> Vec<(String, f64)> {
        self.table
            .read()
            .await
            .iter()
            .map(|(item, factor)| (item.to_owned(), factor))
            .collect()
    }

    /// Snapshot of the density table
    pub async fn conversion_table(&self) -> ConversionTable {
        self.table.read().await.clone()
    }

    /// Distinct tags across all recipes, sorted
    pub async fn all_tags(&self) -> Vec<String> {
        self.cookbook.read().await.tags()
    }

    /// All recipes ordered by name
    pub async fn list(&self) -> Vec<Recipe> {
        self.cookbook
            .read()
            .await
            .sorted_by_name()
            .into_iter()
            .cloned()
            .collect()
    }

    /// The recipe collection as stored, indented JSON
    ///
    /// # Errors
    ///
    /// Returns a serialization error if encoding fails
    pub async fn export_recipes_json(&self) -> AppResult<String> {
        to_pretty_json(&*self.cookbook.read().await)
    }

    /// The density table as stored, indented JSON
    ///
    /// # Errors
    ///
    /// Returns a serialization error if encoding fails
    pub async fn export_conversion_json(&self) -> AppResult<String> {
        to_pretty_json(&*self.table.read().await)
    }
}

fn validate_draft(draft: &RecipeDraft) -> AppResult<()> {
    if draft.name.trim().is_empty() {
        return Err(AppError::from(RecipeError::EmptyName));
    }
    if !draft.portions.is_finite() || draft.portions <= 0.0 {
        return Err(AppError::from(RecipeError::InvalidPortions {
            portions: draft.portions,
        }));
    }
    Ok(())
}
