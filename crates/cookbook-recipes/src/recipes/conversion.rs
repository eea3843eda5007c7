// ABOUTME: Alternate-unit conversion for recipe ingredients
// ABOUTME: Converts between kitchen volumes and, with a per-item density, between grams and volume
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use cookbook_core::constants::units::{
    ALT_UNIT_SEPARATOR, DEFAULT_ROUNDING_DECIMALS, ML_PER_CUP, ML_PER_TBSP, ML_PER_TSP,
};
use cookbook_core::errors::RecipeError;
use serde::{Deserialize, Serialize};

use super::models::Ingredient;
use super::units::Unit;

/// Fixed decimal rounding applied to converted and scaled amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rounding {
    decimals: u8,
}

impl Default for Rounding {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_ROUNDING_DECIMALS,
        }
    }
}

impl Rounding {
    /// Keep `decimals` digits after the decimal point
    #[must_use]
    pub const fn new(decimals: u8) -> Self {
        Self { decimals }
    }

    /// Number of decimals kept
    #[must_use]
    pub const fn decimals(&self) -> u8 {
        self.decimals
    }

    /// Round half away from zero, e.g. 0.5555 becomes 0.6 with one decimal
    #[must_use]
    pub fn round(&self, value: f64) -> f64 {
        let scale = 10_f64.powi(i32::from(self.decimals));
        (value * scale).round() / scale
    }
}

/// Per-item density table
///
/// Each factor is the number of milliliters one gram of the item takes up,
/// so grams × factor gives milliliters and milliliters ÷ factor gives grams.
/// Items are keyed by lowercase name; an absent item simply has no
/// mass/volume conversion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, f64>",
    into = "BTreeMap<String, f64>"
)]
pub struct ConversionTable {
    factors: BTreeMap<String, f64>,
}

impl TryFrom<BTreeMap<String, f64>> for ConversionTable {
    type Error = RecipeError;

    fn try_from(factors: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        let mut table = Self::default();
        for (item, factor) in factors {
            table.insert(&item, factor)?;
        }
        Ok(table)
    }
}

impl From<ConversionTable> for BTreeMap<String, f64> {
    fn from(table: ConversionTable) -> Self {
        table.factors
    }
}

impl ConversionTable {
    /// Empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Density factor for an item, matched case-insensitively
    #[must_use]
    pub fn density(&self, item: &str) -> Option<f64> {
        self.factors.get(&item.trim().to_lowercase()).copied()
    }

    /// Set the factor for an item, returning the previous one
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::EmptyName` for a blank item and
    /// `RecipeError::InvalidDensity` unless the factor is finite and positive.
    pub fn insert(&mut self, item: &str, factor: f64) -> Result<Option<f64>, RecipeError> {
        let item = item.trim().to_lowercase();
        if item.is_empty() {
            return Err(RecipeError::EmptyName);
        }
        if !factor.is_finite() || factor <= 0.0 {
            return Err(RecipeError::InvalidDensity { item, factor });
        }
        Ok(self.factors.insert(item, factor))
    }

    /// Drop the factor for an item, returning it if present
    pub fn remove(&mut self, item: &str) -> Option<f64> {
        self.factors.remove(&item.trim().to_lowercase())
    }

    /// Entries sorted by item name
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.factors.iter().map(|(item, factor)| (item.as_str(), *factor))
    }

    /// Number of items with a known density
    #[must_use]
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    /// Whether no density is known
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    fn grams_to_ml(&self, item: &str, grams: f64) -> Option<f64> {
        self.density(item).map(|factor| grams * factor)
    }

    fn ml_to_grams(&self, item: &str, ml: f64) -> Option<f64> {
        self.density(item).map(|factor| ml / factor)
    }
}

/// Renders ingredients with their equivalents in other units
///
/// Nothing is cached: every call recomputes from the current table, so a
/// density edit shows up the next time an ingredient is displayed.
#[derive(Debug, Clone, Copy)]
pub struct AltUnitConverter<'a> {
    table: &'a ConversionTable,
    rounding: Rounding,
}

impl<'a> AltUnitConverter<'a> {
    /// Converter over a density table
    #[must_use]
    pub const fn new(table: &'a ConversionTable, rounding: Rounding) -> Self {
        Self { table, rounding }
    }

    /// Equivalent amounts in other units, joined with `" / "`
    ///
    /// Terms that round to zero are left out, as are gram/volume terms for
    /// items without a density. Pieces and unparsed lines have no equivalents.
    #[must_use]
    pub fn alt_units(&self, ingredient: &Ingredient) -> String {
        let Ingredient::Measured(measured) = ingredient else {
            return String::new();
        };
        let item = measured.item.as_str();
        let amount = measured.amount;
        let mut terms = AltTerms::new(self.rounding);

        match measured.unit {
            Unit::Gram => {
                if let Some(ml) = self.table.grams_to_ml(item, amount) {
                    let ml = self.rounding.round(ml);
                    if ml != 0.0 {
                        terms.push(ml, Unit::Milliliter);
                        terms.push(ml / ML_PER_CUP, Unit::Cup);
                    }
                }
            }
            Unit::Cup => {
                let ml = self.rounding.round(amount * ML_PER_CUP);
                if ml != 0.0 {
                    terms.push(ml, Unit::Milliliter);
                    if let Some(grams) = self.table.ml_to_grams(item, ml) {
                        terms.push(grams, Unit::Gram);
                    }
                }
            }
            Unit::Milliliter => {
                terms.push(amount / ML_PER_CUP, Unit::Cup);
                if let Some(grams) = self.table.ml_to_grams(item, amount) {
                    terms.push(grams, Unit::Gram);
                }
            }
            Unit::Tablespoon | Unit::Teaspoon => {
                let ratio = if measured.unit == Unit::Tablespoon {
                    ML_PER_TBSP
                } else {
                    ML_PER_TSP
                };
                let ml = self.rounding.round(amount * ratio);
                terms.push(ml, Unit::Milliliter);
                terms.push(ml / ML_PER_CUP, Unit::Cup);
                if let Some(grams) = self.table.ml_to_grams(item, ml) {
                    terms.push(grams, Unit::Gram);
                }
            }
            Unit::Piece => {}
        }

        terms.join()
    }

    /// Display form used by recipe pages
    ///
    /// `"<amount> <unit> <item>[, <notes>][ (<alt units>)]"`, without the unit
    /// for pieces. Notes are shown in lower case. Unparsed lines are shown as
    /// they were pasted.
    #[must_use]
    pub fn display(&self, ingredient: &Ingredient) -> String {
        let measured = match ingredient {
            Ingredient::Measured(measured) => measured,
            Ingredient::Unparsed { line } => return line.clone(),
        };

        let mut out = if measured.unit == Unit::Piece {
            format!("{} {}", measured.amount, measured.item)
        } else {
            format!("{} {} {}", measured.amount, measured.unit, measured.item)
        };
        if !measured.notes.is_empty() {
            out.push_str(&format!(", {}", measured.notes.to_lowercase()));
        }
        let alt = self.alt_units(ingredient);
        if !alt.is_empty() {
            out.push_str(&format!(" ({alt})"));
        }
        out
    }
}

/// Compute alternate units with the default rounding
#[must_use]
pub fn alt_units(ingredient: &Ingredient, table: &ConversionTable) -> String {
    AltUnitConverter::new(table, Rounding::default()).alt_units(ingredient)
}

/// Collects rounded, non-zero terms in insertion order
struct AltTerms {
    rounding: Rounding,
    terms: Vec<String>,
}

impl AltTerms {
    const fn new(rounding: Rounding) -> Self {
        Self {
            rounding,
            terms: Vec::new(),
        }
    }

    fn push(&mut self, value: f64, unit: Unit) {
        let value = self.rounding.round(value);
        if value != 0.0 {
            self.terms.push(format!("{value} {unit}"));
        }
    }

    fn join(self) -> String {
        self.terms.join(ALT_UNIT_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_one_decimal() {
        let rounding = Rounding::default();
        assert_eq!(rounding.round(0.5555), 0.6);
        assert_eq!(rounding.round(236.588_237), 236.6);
        assert_eq!(rounding.round(0.04), 0.0);
    }

    #[test]
    fn test_rounding_more_decimals() {
        assert_eq!(Rounding::new(3).round(0.5555), 0.556);
        assert_eq!(Rounding::new(0).round(2.5), 3.0);
    }
}
