// ABOUTME: Recipe commands for cookbook-cli
// ABOUTME: Handles parse, add, show, list, search, remove and tags operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use cookbook::config::CookbookConfig;
use cookbook::errors::AppResult;
use cookbook::recipes::RecipeDraft;
use cookbook::services::CookbookService;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

use crate::helpers::display::{display_parsed_ingredient, display_recipe, display_recipe_summary};
use crate::helpers::input::read_text;

/// Fields collected by the `add` subcommand
pub struct AddInput {
    pub name: String,
    pub portions: f64,
    pub ingredients: Option<PathBuf>,
    pub steps: Vec<String>,
    pub tags: Vec<String>,
    pub minutes: Option<u64>,
    pub notes: Option<String>,
    pub source: Option<String>,
    pub source_link: Option<String>,
}

/// Parse pasted text and print one row per ingredient
pub async fn parse(config: &CookbookConfig, file: Option<&Path>) -> Result<()> {
    let parser = config.build_parser().await?;
    let text = read_text(file).await?;
    let ingredients = parser.parse_text(&text);
    for ingredient in &ingredients {
        display_parsed_ingredient(ingredient);
    }
    info!(count = ingredients.len(), "Parsed ingredients");
    Ok(())
}

/// Add a recipe from command-line fields
pub async fn add(service: &CookbookService, input: AddInput, author: &str) -> AppResult<()> {
    let mut draft = RecipeDraft::new(input.name, input.portions)
        .with_notes(input.notes.unwrap_or_default())
        .with_source(
            input.source.unwrap_or_default(),
            input.source_link.unwrap_or_default(),
        );
    if let Some(minutes) = input.minutes {
        draft = draft.with_duration(Duration::from_secs(minutes.saturating_mul(60)));
    }
    draft = input.steps.into_iter().fold(draft, RecipeDraft::with_step);
    draft = input.tags.into_iter().fold(draft, RecipeDraft::with_tag);

    let id = match input.ingredients {
        Some(path) => {
            let text = read_text(Some(&path)).await?;
            service.add_recipe_from_text(draft, &text, author).await?
        }
        None => service.add_recipe(draft, author).await?,
    };
    println!("Added recipe {id}");
    Ok(())
}

/// Show a recipe, rescaled when portions are given
pub async fn show(service: &CookbookService, id: u64, portions: Option<f64>) -> AppResult<()> {
    let recipe = match portions {
        Some(portions) => service.adjust_portions(id, portions).await?,
        None => service.find(id).await?,
    };
    let lines = service.render_ingredients(&recipe).await;
    display_recipe(&recipe, &lines);
    Ok(())
}

/// List every recipe by name
pub async fn list(service: &CookbookService) {
    for recipe in service.list().await {
        display_recipe_summary(&recipe);
    }
}

/// Print recipes matching a search text
pub async fn search(service: &CookbookService, needle: &str) {
    let results = service.search(needle).await;
    if results.is_empty() {
        println!("No recipes match '{needle}'");
    }
    for recipe in &results {
        display_recipe_summary(recipe);
    }
}

/// Remove a recipe
pub async fn remove(service: &CookbookService, id: u64) -> AppResult<()> {
    let removed = service.remove_recipe(id).await?;
    println!("Removed recipe {id} ({})", removed.display_name());
    Ok(())
}

/// Print all tags in use
pub async fn tags(service: &CookbookService) {
    for tag in service.all_tags().await {
        println!("{tag}");
    }
}
