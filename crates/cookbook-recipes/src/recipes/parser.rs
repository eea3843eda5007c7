// ABOUTME: Ingredient line parser turning pasted recipe text into structured ingredients
// ABOUTME: Finds the amount anchor, resolves the unit word after it and splits item from notes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::models::Ingredient;
use super::segmenter::LineSegmenter;
use super::units::{Unit, UnitAliases};

/// Built-in vulgar fraction glyphs
const DEFAULT_FRACTIONS: &[(char, f64)] = &[('½', 0.5), ('¼', 0.25), ('⅓', 0.33)];

/// Vulgar fraction glyphs recognized as quantities
///
/// A token containing one of these glyphs anywhere counts as a quantity and
/// takes the glyph's value; digits next to the glyph are not added to it.
#[derive(Debug, Clone, PartialEq)]
pub struct FractionTable {
    glyphs: Vec<(char, f64)>,
}

impl Default for FractionTable {
    fn default() -> Self {
        Self {
            glyphs: DEFAULT_FRACTIONS.to_vec(),
        }
    }
}

impl FractionTable {
    /// Value of the first known glyph found in `token`
    #[must_use]
    pub fn value_in(&self, token: &str) -> Option<f64> {
        self.glyphs
            .iter()
            .find(|(glyph, _)| token.contains(*glyph))
            .map(|(_, value)| *value)
    }

    /// Register or replace a glyph
    pub fn insert(&mut self, glyph: char, value: f64) {
        if let Some(entry) = self.glyphs.iter_mut().find(|(known, _)| *known == glyph) {
            entry.1 = value;
        } else {
            self.glyphs.push((glyph, value));
        }
    }

    /// Number of known glyphs
    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Whether no glyph is known
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

/// Parses `amount [unit] item[, notes]` lines
///
/// Parsing is total: every line gives exactly one [`Ingredient`], falling back
/// to [`Ingredient::Unparsed`] when the line holds no quantity.
#[derive(Debug, Clone, Default)]
pub struct IngredientParser {
    segmenter: LineSegmenter,
    aliases: UnitAliases,
    fractions: FractionTable,
}

impl IngredientParser {
    /// Parser with explicit tables
    #[must_use]
    pub const fn new(segmenter: LineSegmenter, aliases: UnitAliases, fractions: FractionTable) -> Self {
        Self {
            segmenter,
            aliases,
            fractions,
        }
    }

    /// Unit alias table in use
    #[must_use]
    pub const fn aliases(&self) -> &UnitAliases {
        &self.aliases
    }

    /// Mutable alias table, for administrative edits
    pub fn aliases_mut(&mut self) -> &mut UnitAliases {
        &mut self.aliases
    }

    /// Fraction glyphs in use
    #[must_use]
    pub const fn fractions(&self) -> &FractionTable {
        &self.fractions
    }

    /// Line segmenter in use
    #[must_use]
    pub const fn segmenter(&self) -> &LineSegmenter {
        &self.segmenter
    }

    /// Split pasted text into lines
    #[must_use]
    pub fn segment(&self, text: &str) -> Vec<String> {
        self.segmenter.segment(text)
    }

    /// Parse a pasted block, one ingredient per non-empty line
    #[must_use]
    pub fn parse_text(&self, text: &str) -> Vec<Ingredient> {
        self.segment(text)
            .iter()
            .map(|line| self.parse_line(line))
            .collect()
    }

    /// Parse a single line
    ///
    /// Only the first quantity on the line is used. The token right after it
    /// is the only one tried as a unit; anything before the quantity becomes
    /// the notes, otherwise notes are taken from after the first comma.
    #[must_use]
    pub fn parse_line(&self, line: &str) -> Ingredient {
        let tokens = tokens_with_offsets(line);

        let Some((index, quantity)) = tokens
            .iter()
            .enumerate()
            .find_map(|(index, (_, token))| self.quantity(token).map(|q| (index, q)))
        else {
            return Ingredient::unparsed(line);
        };

        let (anchor_start, anchor) = tokens[index];
        let mut item_start = anchor_start + anchor.len() + 1;
        let mut unit = Unit::Piece;
        let mut amount = quantity;

        if let Some((_, next)) = tokens.get(index + 1) {
            if let Some(alias) = self.aliases.resolve(&next.to_lowercase()) {
                unit = alias.unit;
                amount = alias.apply(quantity);
                item_start += next.len() + 1;
            }
        }

        let item = line.get(item_start..).unwrap_or_default().trim();
        let prefix = line.get(..anchor_start).unwrap_or_default().trim();

        if prefix.is_empty() {
            if let Some((item, notes)) = item.split_once(',') {
                return Ingredient::measured(amount, unit, item, notes);
            }
        }
        Ingredient::measured(amount, unit, item, prefix)
    }

    fn quantity(&self, token: &str) -> Option<f64> {
        if let Some(value) = self.fractions.value_in(token) {
            return Some(value);
        }
        token
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() && *value >= 0.0)
    }
}

/// Tokens split on single spaces, each with its byte offset in the line
fn tokens_with_offsets(line: &str) -> Vec<(usize, &str)> {
    let mut offset = 0;
    line.split(' ')
        .map(|token| {
            let start = offset;
            offset += token.len() + 1;
            (start, token)
        })
        .collect()
}

/// Segment and parse with the default tables
#[must_use]
pub fn parse_ingredients(text: &str) -> Vec<Ingredient> {
    IngredientParser::default().parse_text(text)
}
