// ABOUTME: Output formatting helpers for cookbook-cli
// ABOUTME: Provides consistent display functions for recipes and parsed ingredients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use cookbook::recipes::{Ingredient, Recipe};

/// One-line summary used by list and search output
pub fn display_recipe_summary(recipe: &Recipe) {
    let tags = recipe.tags().iter().cloned().collect::<Vec<_>>().join(", ");
    if tags.is_empty() {
        println!("{:>6}  {}", recipe.id(), recipe.display_name());
    } else {
        println!("{:>6}  {}  [{tags}]", recipe.id(), recipe.display_name());
    }
}

/// Full recipe page with rendered ingredient lines
pub fn display_recipe(recipe: &Recipe, ingredient_lines: &[String]) {
    println!("\n{}", recipe.display_name());
    println!("{}", "=".repeat(60));
    println!("   Id: {}", recipe.id());
    println!("   Portions: {}", recipe.portions());
    if !recipe.duration().is_zero() {
        println!("   Time: {} min", recipe.duration().as_secs() / 60);
    }
    if !recipe.tags().is_empty() {
        let tags = recipe.tags().iter().cloned().collect::<Vec<_>>().join(", ");
        println!("   Tags: {tags}");
    }

    println!("\nIngredients:");
    for line in ingredient_lines {
        println!("   - {line}");
    }

    if !recipe.steps().is_empty() {
        println!("\nSteps:");
        for (number, step) in recipe.steps().iter().enumerate() {
            println!("   {}. {step}", number + 1);
        }
    }

    if !recipe.notes().is_empty() {
        println!("\nNotes:\n   {}", recipe.notes());
    }
    if !recipe.source().is_empty() || !recipe.source_link().is_empty() {
        println!("\nSource: {} {}", recipe.source(), recipe.source_link());
    }
    println!(
        "\nCreated by {} on {}, updated by {} on {}",
        recipe.created_by(),
        recipe.created_at().format("%Y-%m-%d %H:%M UTC"),
        recipe.updated_by(),
        recipe.updated_at().format("%Y-%m-%d %H:%M UTC")
    );
}

/// Parsed ingredient in a fixed-width table row
pub fn display_parsed_ingredient(ingredient: &Ingredient) {
    match ingredient {
        Ingredient::Measured(measured) => println!(
            "{:>8}  {:<6} {:<40} {}",
            measured.amount,
            measured.unit.label(),
            measured.item,
            measured.notes
        ),
        Ingredient::Unparsed { line } => println!("{:>8}  {:<6} {line}", "?", ""),
    }
}
