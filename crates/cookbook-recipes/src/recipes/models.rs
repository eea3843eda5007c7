// ABOUTME: Data models for recipes and their ingredients
// ABOUTME: Defines Ingredient, RecipeDraft and Recipe with create/update/scale transitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeSet;
use std::time::Duration;

use chrono::{DateTime, Utc};
use cookbook_core::errors::RecipeError;
use serde::{Deserialize, Serialize};

use super::conversion::Rounding;
use super::units::Unit;

/// An ingredient line that carried an amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasuredIngredient {
    /// Amount in `unit`, never negative
    pub amount: f64,
    /// Measurement unit
    pub unit: Unit,
    /// Ingredient name, lowercase
    pub item: String,
    /// Preparation note (sliced, chopped, ...), may be empty
    #[serde(default)]
    pub notes: String,
}

impl MeasuredIngredient {
    /// Create an ingredient; the item is trimmed and lowercased
    #[must_use]
    pub fn new(amount: f64, unit: Unit, item: &str, notes: &str) -> Self {
        debug_assert!(
            amount.is_finite() && amount >= 0.0,
            "ingredient amount must be a non-negative number, got {amount}"
        );
        Self {
            amount,
            unit,
            item: item.trim().to_lowercase(),
            notes: notes.trim().to_owned(),
        }
    }
}

/// One line item of a recipe
///
/// A line without any amount is kept as `Unparsed` with the text it came
/// from, rather than as a zeroed ingredient that could be mistaken for a real
/// one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Ingredient {
    /// Amount, unit, item and notes were recognized
    Measured(MeasuredIngredient),
    /// No amount was found; the trimmed source line is kept as-is
    Unparsed {
        /// Source line
        line: String,
    },
}

impl Ingredient {
    /// Create a measured ingredient
    #[must_use]
    pub fn measured(amount: f64, unit: Unit, item: &str, notes: &str) -> Self {
        Self::Measured(MeasuredIngredient::new(amount, unit, item, notes))
    }

    /// Create the fallback form for a line without an amount
    #[must_use]
    pub fn unparsed(line: &str) -> Self {
        Self::Unparsed {
            line: line.trim().to_owned(),
        }
    }

    /// Amount in the ingredient's unit; zero for unparsed lines
    #[must_use]
    pub const fn amount(&self) -> f64 {
        match self {
            Self::Measured(measured) => measured.amount,
            Self::Unparsed { .. } => 0.0,
        }
    }

    /// Unit, if the line was parsed
    #[must_use]
    pub const fn unit(&self) -> Option<Unit> {
        match self {
            Self::Measured(measured) => Some(measured.unit),
            Self::Unparsed { .. } => None,
        }
    }

    /// Item name, or the whole line for unparsed ingredients
    #[must_use]
    pub fn item(&self) -> &str {
        match self {
            Self::Measured(measured) => &measured.item,
            Self::Unparsed { line } => line,
        }
    }

    /// Preparation notes; always empty for unparsed lines
    #[must_use]
    pub fn notes(&self) -> &str {
        match self {
            Self::Measured(measured) => &measured.notes,
            Self::Unparsed { .. } => "",
        }
    }

    /// Whether an amount was recognized
    #[must_use]
    pub const fn is_measured(&self) -> bool {
        matches!(self, Self::Measured(_))
    }

    fn scale(&mut self, factor: f64, rounding: Rounding) {
        if let Self::Measured(measured) = self {
            measured.amount = rounding.round(measured.amount * factor);
        }
    }
}

/// The editable part of a recipe
///
/// Used both to create a recipe and to replace its fields on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeDraft {
    /// Recipe name
    pub name: String,
    /// Ordered ingredient list
    pub ingredients: Vec<Ingredient>,
    /// Ordered cooking steps
    pub steps: Vec<String>,
    /// Tags for categorization
    pub tags: BTreeSet<String>,
    /// Number of portions the amounts are written for
    pub portions: f64,
    /// Cooking time
    pub duration: Duration,
    /// Free-text notes or description
    pub notes: String,
    /// Where the recipe comes from
    pub source: String,
    /// Hyperlink to the source
    pub source_link: String,
}

impl RecipeDraft {
    /// Draft with a name and portions; everything else empty
    #[must_use]
    pub fn new(name: impl Into<String>, portions: f64) -> Self {
        Self {
            name: name.into(),
            ingredients: Vec::new(),
            steps: Vec::new(),
            tags: BTreeSet::new(),
            portions,
            duration: Duration::ZERO,
            notes: String::new(),
            source: String::new(),
            source_link: String::new(),
        }
    }

    /// Set the ingredient list
    #[must_use]
    pub fn with_ingredients(mut self, ingredients: Vec<Ingredient>) -> Self {
        self.ingredients = ingredients;
        self
    }

    /// Add an instruction step
    #[must_use]
    pub fn with_step(mut self, step: impl Into<String>) -> Self {
        self.steps.push(step.into());
        self
    }

    /// Add a tag
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    /// Set cooking time
    #[must_use]
    pub const fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set notes
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Set source and its hyperlink
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>, link: impl Into<String>) -> Self {
        self.source = source.into();
        self.source_link = link.into();
        self
    }
}

/// A stored recipe
///
/// Created through [`Recipe::new`] and changed only through [`Recipe::update`],
/// which refreshes the update stamp and never touches the creation stamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    id: u64,
    name: String,
    ingredients: Vec<Ingredient>,
    #[serde(default)]
    steps: Vec<String>,
    #[serde(default)]
    tags: BTreeSet<String>,
    portions: f64,
    #[serde(default, with = "duration_secs")]
    duration: Duration,
    #[serde(default)]
    notes: String,
    #[serde(default)]
    source: String,
    #[serde(default)]
    source_link: String,
    created_by: String,
    created_at: DateTime<Utc>,
    updated_by: String,
    updated_at: DateTime<Utc>,
}

impl Recipe {
    /// Create a recipe; creation and update stamps are identical
    ///
    /// The id stays 0 until the recipe is added to a cookbook.
    #[must_use]
    pub fn new(draft: RecipeDraft, author: &str) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name: draft.name,
            ingredients: draft.ingredients,
            steps: draft.steps,
            tags: draft.tags,
            portions: draft.portions,
            duration: draft.duration,
            notes: draft.notes,
            source: draft.source,
            source_link: draft.source_link,
            created_by: author.to_owned(),
            created_at: now,
            updated_by: author.to_owned(),
            updated_at: now,
        }
    }

    /// Replace every editable field and stamp the update
    pub fn update(&mut self, draft: RecipeDraft, author: &str) {
        self.name = draft.name;
        self.ingredients = draft.ingredients;
        self.steps = draft.steps;
        self.tags = draft.tags;
        self.portions = draft.portions;
        self.duration = draft.duration;
        self.notes = draft.notes;
        self.source = draft.source;
        self.source_link = draft.source_link;
        self.updated_by = author.to_owned();
        self.updated_at = Utc::now();
    }

    /// Copy of the editable fields, for building an update
    #[must_use]
    pub fn to_draft(&self) -> RecipeDraft {
        RecipeDraft {
            name: self.name.clone(),
            ingredients: self.ingredients.clone(),
            steps: self.steps.clone(),
            tags: self.tags.clone(),
            portions: self.portions,
            duration: self.duration,
            notes: self.notes.clone(),
            source: self.source.clone(),
            source_link: self.source_link.clone(),
        }
    }

    /// Copy of this recipe for a different number of portions
    ///
    /// The ratio `new / old` is rounded first and each amount is rounded
    /// again after multiplying. Stored recipes were scaled this way, so the
    /// double rounding is kept as is.
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::InvalidPortions` when either the recipe's own
    /// portions or `new_portions` is not a positive number.
    pub fn adjust_portions(&self, new_portions: f64, rounding: Rounding) -> Result<Self, RecipeError> {
        validate_portions(self.portions)?;
        validate_portions(new_portions)?;

        let factor = rounding.round(new_portions / self.portions);
        let mut adjusted = self.clone();
        adjusted.portions = new_portions;
        for ingredient in &mut adjusted.ingredients {
            ingredient.scale(factor, rounding);
        }
        Ok(adjusted)
    }

    pub(crate) fn assign_id(&mut self, id: u64) {
        self.id = id;
    }

    /// Recipe id, 0 before the recipe joins a cookbook
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Recipe name as entered
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name with the first letter upper case and the rest lower case
    #[must_use]
    pub fn display_name(&self) -> String {
        let mut chars = self.name.chars();
        let Some(first) = chars.next() else {
            return String::new();
        };
        let mut title: String = first.to_uppercase().collect();
        title.push_str(&chars.as_str().to_lowercase());
        title
    }

    /// Ordered ingredients
    #[must_use]
    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    /// Ordered steps
    #[must_use]
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// Tags
    #[must_use]
    pub const fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// Portions the amounts are written for
    #[must_use]
    pub const fn portions(&self) -> f64 {
        self.portions
    }

    /// Cooking time
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Free-text notes
    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Source description
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Source hyperlink
    #[must_use]
    pub fn source_link(&self) -> &str {
        &self.source_link
    }

    /// Who created the recipe
    #[must_use]
    pub fn created_by(&self) -> &str {
        &self.created_by
    }

    /// When the recipe was created
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Who last updated the recipe
    #[must_use]
    pub fn updated_by(&self) -> &str {
        &self.updated_by
    }

    /// When the recipe was last updated
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

fn validate_portions(portions: f64) -> Result<(), RecipeError> {
    if portions.is_finite() && portions > 0.0 {
        Ok(())
    } else {
        Err(RecipeError::InvalidPortions { portions })
    }
}

/// Durations are stored as whole seconds
mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}
