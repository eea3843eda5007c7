// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging, the sample ingredient block and service builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `cookbook`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use cookbook::recipes::{
    ConversionTable, Cookbook, Ingredient, IngredientParser, Recipe, RecipeDraft, Rounding, Unit,
};
use cookbook::services::CookbookService;
use cookbook::storage::InMemoryStore;
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Ingredient block as pasted from a recipe website: 12 ingredients separated
/// by indented blank lines
pub const SAMPLE_INGREDIENTS: &str = "\n\t\t1 tablespoon extra-virgin olive oil\n\t\t\n\t\t1 cup thinly sliced celery\n\t\t\n\t\t1 cup chopped carrots\n\t\t\n\t\t½ cup chopped onions\n\t\t\n\t\t8 ounces button mushrooms, sliced\n\t\t\n\t\t¼ cup all-purpose flour\n\t\t\n\t\t½ teaspoon ground pepper\n\t\t\n\t\t½ teaspoon salt\n\t\t\n\t\t4 cups low-sodium vegetable broth\n\t\t\n\t\t2 cups cooked wild rice\n\t\t\n\t\t½ cup heavy cream\n\t\t\n\t\t2 tablespoons chopped fresh parsley";

/// Draft with a name, portions and a single gram ingredient
pub fn gram_draft(name: &str, portions: f64, grams: f64, item: &str) -> RecipeDraft {
    RecipeDraft::new(name, portions)
        .with_ingredients(vec![Ingredient::measured(grams, Unit::Gram, item, "")])
}

/// Recipe built from the sample block
pub fn sample_recipe(name: &str) -> Recipe {
    let ingredients = IngredientParser::default().parse_text(SAMPLE_INGREDIENTS);
    Recipe::new(
        RecipeDraft::new(name, 4.0)
            .with_ingredients(ingredients)
            .with_tag("soup")
            .with_step("Chop the vegetables"),
        "tester",
    )
}

/// Service over an empty in-memory store, returning the store for inspection
pub fn memory_service() -> (CookbookService, InMemoryStore) {
    init_test_logging();
    let store = InMemoryStore::new();
    let service = CookbookService::new(
        Cookbook::new(),
        ConversionTable::new(),
        IngredientParser::default(),
        Rounding::default(),
        Arc::new(store.clone()),
    );
    (service, store)
}
