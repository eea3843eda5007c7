// ABOUTME: Recipe ingestion module turning pasted text into scalable, convertible recipes
// ABOUTME: Groups the unit model, line segmenter, parser, conversion engine and cookbook model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipes Module
//!
//! Data flows leaf-first through the submodules:
//!
//! ```text
//! pasted text -> LineSegmenter -> IngredientParser (UnitAliases) -> Vec<Ingredient>
//!             -> Recipe -> Cookbook
//! ```
//!
//! Alternate units are never stored. [`AltUnitConverter`] recomputes them from
//! the current [`ConversionTable`] each time an ingredient is displayed.
//!
//! ## Example Usage
//!
//! ```text
//! use cookbook_recipes::recipes::{IngredientParser, Unit};
//!
//! let parser = IngredientParser::default();
//! let ingredient = parser.parse_line("1 cup carrots, chopped");
//! assert_eq!(ingredient.unit(), Some(Unit::Cup));
//! assert_eq!(ingredient.notes(), "chopped");
//! ```

/// Alternate-unit conversion and rounding
pub mod conversion;
/// Cookbook collection and id allocation
pub mod cookbook;
/// Ingredient and recipe data models
pub mod models;
/// Ingredient line parser
pub mod parser;
/// Unicode-aware line segmentation
pub mod segmenter;
/// Canonical units and unit aliases
pub mod units;

// Re-export main types for convenience
pub use conversion::{alt_units, AltUnitConverter, ConversionTable, Rounding};
pub use cookbook::{Cookbook, CookbookDocument};
pub use models::{Ingredient, MeasuredIngredient, Recipe, RecipeDraft};
pub use parser::{parse_ingredients, FractionTable, IngredientParser};
pub use segmenter::{segment_lines, LineSegmenter};
pub use units::{Unit, UnitAlias, UnitAliases};
