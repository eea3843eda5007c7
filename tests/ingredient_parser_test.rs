// ABOUTME: Integration tests for the ingredient line parser and unit alias table
// ABOUTME: Covers anchors, unit lookahead, notes splitting, fractions and the unparsed fallback
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Tests for ingredient parsing including:
//! - `amount [unit] item[, notes]` lines in English and Dutch
//! - Vulgar fraction glyphs
//! - Lines without any quantity

mod common;

use common::SAMPLE_INGREDIENTS;
use cookbook::errors::RecipeError;
use cookbook::recipes::{
    parse_ingredients, segment_lines, Ingredient, IngredientParser, MeasuredIngredient, Unit,
    UnitAlias, UnitAliases,
};

fn parse(line: &str) -> Ingredient {
    IngredientParser::default().parse_line(line)
}

fn measured(line: &str) -> MeasuredIngredient {
    match parse(line) {
        Ingredient::Measured(measured) => measured,
        Ingredient::Unparsed { line } => panic!("expected an amount in {line:?}"),
    }
}

// ============================================================================
// Unit Alias Tests
// ============================================================================

#[test]
fn test_aliases_resolve_both_languages() {
    let aliases = UnitAliases::default();
    assert_eq!(aliases.resolve("tbsp"), Some(UnitAlias::plain(Unit::Tablespoon)));
    assert_eq!(aliases.resolve("eetlepels"), Some(UnitAlias::plain(Unit::Tablespoon)));
    assert_eq!(aliases.resolve("tl."), Some(UnitAlias::plain(Unit::Teaspoon)));
    assert_eq!(aliases.resolve("stuks"), Some(UnitAlias::plain(Unit::Piece)));
}

#[test]
fn test_aliases_carry_multipliers() {
    let aliases = UnitAliases::default();
    let kg = aliases.resolve("kg").unwrap();
    assert_eq!(kg.unit, Unit::Gram);
    assert_eq!(kg.apply(1.5), 1500.0);
    let liter = aliases.resolve("liter").unwrap();
    assert_eq!(liter.unit, Unit::Milliliter);
    assert_eq!(liter.multiplier, 1000.0);
}

#[test]
fn test_alias_lookup_expects_lowercase() {
    let aliases = UnitAliases::default();
    assert!(aliases.resolve("KG").is_none());
    assert!(aliases.resolve("ounces").is_none());
}

#[test]
fn test_alias_insert_validates() {
    let mut aliases = UnitAliases::empty();
    assert!(aliases.is_empty());
    assert_eq!(
        aliases.insert("  ", UnitAlias::plain(Unit::Gram)),
        Err(RecipeError::EmptyName)
    );
    assert!(matches!(
        aliases.insert("oz", UnitAlias::scaled(Unit::Gram, 0.0)),
        Err(RecipeError::InvalidMultiplier { .. })
    ));
    aliases.insert(" OZ ", UnitAlias::scaled(Unit::Gram, 28.0)).unwrap();
    assert_eq!(aliases.resolve("oz").map(|a| a.multiplier), Some(28.0));
    assert_eq!(aliases.remove("Oz").map(|a| a.unit), Some(Unit::Gram));
    assert!(aliases.is_empty());
}

#[test]
fn test_unit_labels_match_stored_form() {
    let labels: Vec<&str> = Unit::ALL.iter().map(Unit::label).collect();
    assert_eq!(labels, vec!["g", "cup", "ml", "el", "tl", "stuks"]);
    assert_eq!(serde_json::to_string(&Unit::Tablespoon).unwrap(), "\"el\"");
    assert_eq!(serde_json::from_str::<Unit>("\"stuks\"").unwrap(), Unit::Piece);
}

// ============================================================================
// Line Parsing Tests
// ============================================================================

#[test]
fn test_amount_unit_item() {
    let ingredient = parse("1 tablespoon extra-virgin olive oil");
    assert_eq!(
        ingredient,
        Ingredient::measured(1.0, Unit::Tablespoon, "extra-virgin olive oil", "")
    );
}

#[test]
fn test_trailing_notes_after_comma() {
    let ingredient = measured("1 cup carrots, chopped");
    assert_eq!(ingredient.amount, 1.0);
    assert_eq!(ingredient.unit, Unit::Cup);
    assert_eq!(ingredient.item, "carrots");
    assert_eq!(ingredient.notes, "chopped");
}

#[test]
fn test_text_before_amount_becomes_notes() {
    let ingredient = measured("Verse 200 g spinazie");
    assert_eq!(ingredient.amount, 200.0);
    assert_eq!(ingredient.unit, Unit::Gram);
    assert_eq!(ingredient.item, "spinazie");
    assert_eq!(ingredient.notes, "Verse");
}

#[test]
fn test_comma_kept_when_prefix_present() {
    let ingredient = measured("about 2 cups rice, rinsed");
    assert_eq!(ingredient.item, "rice, rinsed");
    assert_eq!(ingredient.notes, "about");
}

#[test]
fn test_multiplier_units_are_normalized() {
    let kg = measured("1 kg aardappelen");
    assert_eq!((kg.amount, kg.unit), (1000.0, Unit::Gram));
    let liter = measured("1.5 liter melk");
    assert_eq!((liter.amount, liter.unit), (1500.0, Unit::Milliliter));
    assert_eq!(liter.item, "melk");
}

#[test]
fn test_unit_token_is_case_insensitive() {
    let ingredient = measured("2 EL Olijfolie");
    assert_eq!(ingredient.unit, Unit::Tablespoon);
    assert_eq!(ingredient.item, "olijfolie");
}

#[test]
fn test_unknown_unit_defaults_to_piece() {
    let ingredient = measured("8 ounces button mushrooms, sliced");
    assert_eq!(ingredient.amount, 8.0);
    assert_eq!(ingredient.unit, Unit::Piece);
    assert_eq!(ingredient.item, "ounces button mushrooms");
    assert_eq!(ingredient.notes, "sliced");
}

#[test]
fn test_only_next_token_is_tried_as_unit() {
    let ingredient = measured("2 large cups flour");
    assert_eq!(ingredient.unit, Unit::Piece);
    assert_eq!(ingredient.item, "large cups flour");
}

#[test]
fn test_only_first_quantity_is_the_amount() {
    let ingredient = measured("2 eggs or 3 whites");
    assert_eq!(ingredient.amount, 2.0);
    assert_eq!(ingredient.item, "eggs or 3 whites");
}

#[test]
fn test_fraction_glyphs() {
    let half = measured("½ cup chopped onions");
    assert_eq!((half.amount, half.unit), (0.5, Unit::Cup));
    assert_eq!(half.item, "chopped onions");

    let quarter = measured("¼ cup all-purpose flour");
    assert_eq!(quarter.amount, 0.25);

    let third = measured("⅓ tl zout");
    assert_eq!((third.amount, third.unit), (0.33, Unit::Teaspoon));
}

#[test]
fn test_fraction_inside_token_counts() {
    let ingredient = measured("(½) cup sugar");
    assert_eq!(ingredient.amount, 0.5);
    assert_eq!(ingredient.unit, Unit::Cup);
    assert_eq!(ingredient.item, "sugar");
}

#[test]
fn test_amount_as_last_token() {
    let ingredient = measured("Eggs 3");
    assert_eq!(ingredient.amount, 3.0);
    assert_eq!(ingredient.unit, Unit::Piece);
    assert_eq!(ingredient.item, "");
    assert_eq!(ingredient.notes, "Eggs");
}

#[test]
fn test_line_without_quantity_is_unparsed() {
    let ingredient = parse("  Zout en peper naar smaak ");
    assert_eq!(
        ingredient,
        Ingredient::Unparsed {
            line: "Zout en peper naar smaak".to_owned()
        }
    );
    assert_eq!(ingredient.amount(), 0.0);
    assert_eq!(ingredient.item(), "Zout en peper naar smaak");
    assert_eq!(ingredient.notes(), "");
    assert!(ingredient.unit().is_none());
}

#[test]
fn test_negative_and_non_finite_numbers_are_not_amounts() {
    assert!(!parse("-1 apple").is_measured());
    assert!(!parse("inf stuff").is_measured());
    assert!(!parse("NaN apples").is_measured());
}

#[test]
fn test_unknown_fraction_glyph_is_not_an_amount() {
    assert!(!parse("¾ cup milk").is_measured());
}

// ============================================================================
// Block Parsing Tests
// ============================================================================

#[test]
fn test_sample_block_yields_twelve_ingredients() {
    let ingredients = parse_ingredients(SAMPLE_INGREDIENTS);
    assert_eq!(ingredients.len(), 12);
    assert_eq!(ingredients[0].amount(), 1.0);
    assert_eq!(ingredients[3].unit(), Some(Unit::Cup));
    assert_eq!(ingredients[3].amount(), 0.5);
    assert_eq!(ingredients[6].unit(), Some(Unit::Teaspoon));
    assert_eq!(ingredients[8].amount(), 4.0);
    assert_eq!(ingredients[8].item(), "low-sodium vegetable broth");
    assert_eq!(ingredients[11].unit(), Some(Unit::Tablespoon));
    assert!(ingredients.iter().all(Ingredient::is_measured));
}

#[test]
fn test_parsing_preserves_line_count() {
    let texts = [
        SAMPLE_INGREDIENTS,
        "Zout\n\n1 kg bloem\r\npeper\n",
        "\u{00a0}\n¾\n-2\n",
        "",
    ];
    for text in texts {
        assert_eq!(parse_ingredients(text).len(), segment_lines(text).len());
    }
}

#[test]
fn test_extra_aliases_are_used() {
    let mut parser = IngredientParser::default();
    parser
        .aliases_mut()
        .insert("ounces", UnitAlias::scaled(Unit::Gram, 28.0))
        .unwrap();
    let ingredient = parser.parse_line("8 ounces button mushrooms");
    assert_eq!(ingredient.unit(), Some(Unit::Gram));
    assert_eq!(ingredient.amount(), 224.0);
}
