// ABOUTME: Density table commands for cookbook-cli
// ABOUTME: Handles set, remove and list of per-item ml-per-gram factors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use cookbook::errors::AppResult;
use cookbook::services::CookbookService;

/// Set or replace the density of an item
pub async fn set(service: &CookbookService, item: &str, factor: f64) -> AppResult<()> {
    match service.set_density(item, factor).await? {
        Some(previous) => println!("Updated density of {item}: {previous} -> {factor} ml/g"),
        None => println!("Added density of {item}: {factor} ml/g"),
    }
    Ok(())
}

/// Remove the density of an item
pub async fn remove(service: &CookbookService, item: &str) -> AppResult<()> {
    match service.remove_density(item).await? {
        Some(previous) => println!("Removed density of {item} ({previous} ml/g)"),
        None => println!("No density known for {item}"),
    }
    Ok(())
}

/// Print every known density
pub async fn list(service: &CookbookService) {
    let densities = service.densities().await;
    if densities.is_empty() {
        println!("No densities defined");
    }
    for (item, factor) in densities {
        println!("{item:<30} {factor} ml/g");
    }
}
