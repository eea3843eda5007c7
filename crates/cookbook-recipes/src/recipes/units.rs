// ABOUTME: Canonical measurement units and the free-text unit alias table
// ABOUTME: Resolves English and Dutch unit spellings to a unit plus magnitude multiplier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

use cookbook_core::constants::units::{GRAMS_PER_KG, ML_PER_LITER};
use cookbook_core::errors::RecipeError;
use serde::{Deserialize, Serialize};

/// Ingredient measurement unit
///
/// Serialized with the short labels used by the stored recipe files, which
/// are also the labels shown when an ingredient is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Unit {
    /// Weight in grams
    #[serde(rename = "g")]
    Gram,
    /// US cups
    #[serde(rename = "cup")]
    Cup,
    /// Volume in milliliters
    #[serde(rename = "ml")]
    Milliliter,
    /// Tablespoons (eetlepel)
    #[serde(rename = "el")]
    Tablespoon,
    /// Teaspoons (theelepel)
    #[serde(rename = "tl")]
    Teaspoon,
    /// Count of whole items
    #[default]
    #[serde(rename = "stuks")]
    Piece,
}

impl Unit {
    /// Every canonical unit, in display order
    pub const ALL: [Self; 6] = [
        Self::Gram,
        Self::Cup,
        Self::Milliliter,
        Self::Tablespoon,
        Self::Teaspoon,
        Self::Piece,
    ];

    /// Label used in display strings and stored files
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Gram => "g",
            Self::Cup => "cup",
            Self::Milliliter => "ml",
            Self::Tablespoon => "el",
            Self::Teaspoon => "tl",
            Self::Piece => "stuks",
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.label())
    }
}

/// A resolved unit word: the canonical unit and the factor that brings the
/// stated amount into that unit (e.g. "kg" is `Gram` with multiplier 1000)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitAlias {
    /// Canonical unit the word stands for
    pub unit: Unit,
    /// Factor applied to the amount
    #[serde(default = "default_multiplier")]
    pub multiplier: f64,
}

const fn default_multiplier() -> f64 {
    1.0
}

impl UnitAlias {
    /// Alias that maps one-to-one onto its unit
    #[must_use]
    pub const fn plain(unit: Unit) -> Self {
        Self {
            unit,
            multiplier: 1.0,
        }
    }

    /// Alias for a larger magnitude of its unit
    #[must_use]
    pub const fn scaled(unit: Unit, multiplier: f64) -> Self {
        Self { unit, multiplier }
    }

    /// Apply the multiplier to an amount stated in this alias
    #[must_use]
    pub fn apply(&self, amount: f64) -> f64 {
        amount * self.multiplier
    }
}

/// Built-in spellings, English and Dutch, with trailing-dot abbreviations
const DEFAULT_ALIASES: &[(&str, UnitAlias)] = &[
    ("gram", UnitAlias::plain(Unit::Gram)),
    ("grams", UnitAlias::plain(Unit::Gram)),
    ("gr", UnitAlias::plain(Unit::Gram)),
    ("gr.", UnitAlias::plain(Unit::Gram)),
    ("g", UnitAlias::plain(Unit::Gram)),
    ("g.", UnitAlias::plain(Unit::Gram)),
    ("kilogram", UnitAlias::scaled(Unit::Gram, GRAMS_PER_KG)),
    ("kg", UnitAlias::scaled(Unit::Gram, GRAMS_PER_KG)),
    ("kg.", UnitAlias::scaled(Unit::Gram, GRAMS_PER_KG)),
    ("cup", UnitAlias::plain(Unit::Cup)),
    ("cups", UnitAlias::plain(Unit::Cup)),
    ("ml", UnitAlias::plain(Unit::Milliliter)),
    ("milliliter", UnitAlias::plain(Unit::Milliliter)),
    ("liter", UnitAlias::scaled(Unit::Milliliter, ML_PER_LITER)),
    ("tbsp", UnitAlias::plain(Unit::Tablespoon)),
    ("tablespoon", UnitAlias::plain(Unit::Tablespoon)),
    ("tablespoons", UnitAlias::plain(Unit::Tablespoon)),
    ("el", UnitAlias::plain(Unit::Tablespoon)),
    ("el.", UnitAlias::plain(Unit::Tablespoon)),
    ("eetlepel", UnitAlias::plain(Unit::Tablespoon)),
    ("eetlepels", UnitAlias::plain(Unit::Tablespoon)),
    ("tsp", UnitAlias::plain(Unit::Teaspoon)),
    ("teaspoon", UnitAlias::plain(Unit::Teaspoon)),
    ("teaspoons", UnitAlias::plain(Unit::Teaspoon)),
    ("tl", UnitAlias::plain(Unit::Teaspoon)),
    ("tl.", UnitAlias::plain(Unit::Teaspoon)),
    ("theelepel", UnitAlias::plain(Unit::Teaspoon)),
    ("theelepels", UnitAlias::plain(Unit::Teaspoon)),
    ("stuk", UnitAlias::plain(Unit::Piece)),
    ("stuks", UnitAlias::plain(Unit::Piece)),
    ("pieces", UnitAlias::plain(Unit::Piece)),
    ("pcs", UnitAlias::plain(Unit::Piece)),
];

/// Mapping from lowercase unit words to canonical units
///
/// Loaded once at startup and read-only while parsing; [`UnitAliases::insert`]
/// and [`UnitAliases::remove`] exist for explicit administrative edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitAliases {
    aliases: HashMap<String, UnitAlias>,
}

impl Default for UnitAliases {
    fn default() -> Self {
        Self {
            aliases: DEFAULT_ALIASES
                .iter()
                .map(|(word, alias)| ((*word).to_owned(), *alias))
                .collect(),
        }
    }
}

impl UnitAliases {
    /// Table without any spellings
    #[must_use]
    pub fn empty() -> Self {
        Self {
            aliases: HashMap::new(),
        }
    }

    /// Resolve an already-lowercased token
    ///
    /// Returns `None` when the token is not a unit word.
    #[must_use]
    pub fn resolve(&self, token: &str) -> Option<UnitAlias> {
        self.aliases.get(token).copied()
    }

    /// Register or replace a spelling
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::EmptyName` for a blank word and
    /// `RecipeError::InvalidMultiplier` unless the multiplier is finite and positive.
    pub fn insert(&mut self, word: &str, alias: UnitAlias) -> Result<(), RecipeError> {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return Err(RecipeError::EmptyName);
        }
        if !alias.multiplier.is_finite() || alias.multiplier <= 0.0 {
            return Err(RecipeError::InvalidMultiplier {
                alias: word,
                multiplier: alias.multiplier,
            });
        }
        self.aliases.insert(word, alias);
        Ok(())
    }

    /// Remove a spelling, returning what it resolved to
    pub fn remove(&mut self, word: &str) -> Option<UnitAlias> {
        self.aliases.remove(&word.trim().to_lowercase())
    }

    /// Merge another table over this one, validating every entry
    ///
    /// # Errors
    ///
    /// Stops at the first entry [`UnitAliases::insert`] rejects.
    pub fn extend(&mut self, other: Self) -> Result<(), RecipeError> {
        for (word, alias) in other.aliases {
            self.insert(&word, alias)?;
        }
        Ok(())
    }

    /// Number of registered spellings
    #[must_use]
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// Whether no spelling is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}
