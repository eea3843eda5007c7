// ABOUTME: Export commands for cookbook-cli
// ABOUTME: Prints the stored recipe collection or density table as indented JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use cookbook::errors::AppResult;
use cookbook::services::CookbookService;

/// Print the recipe collection
pub async fn recipes(service: &CookbookService) -> AppResult<()> {
    println!("{}", service.export_recipes_json().await?);
    Ok(())
}

/// Print the density table
pub async fn table(service: &CookbookService) -> AppResult<()> {
    println!("{}", service.export_conversion_json().await?);
    Ok(())
}
