// ABOUTME: Cookbook collection with id allocation, lookup, update, removal and text search
// ABOUTME: Owns recipes exclusively and keeps ids unique and never reused
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeSet;
use std::fmt;

use cookbook_core::constants::cookbook::DEFAULT_ID_STEP;
use cookbook_core::errors::RecipeError;
use serde::de::value::{MapAccessDeserializer, SeqAccessDeserializer};
use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use super::models::{Recipe, RecipeDraft};

const fn default_id_step() -> u64 {
    DEFAULT_ID_STEP
}

/// Ordered collection of recipes
///
/// New ids are `max(existing ids, last handed-out id) + step`. The high-water
/// mark is persisted with the collection, so an id freed by [`Cookbook::remove`]
/// is never handed out again, even after a restart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cookbook {
    #[serde(default)]
    last_id: u64,
    recipes: Vec<Recipe>,
    #[serde(skip, default = "default_id_step")]
    id_step: u64,
}

impl Default for Cookbook {
    fn default() -> Self {
        Self {
            last_id: 0,
            recipes: Vec::new(),
            id_step: DEFAULT_ID_STEP,
        }
    }
}

/// Stored form of a cookbook
///
/// Older files hold a bare array of recipes without the id high-water mark.
/// The variant is picked from the outer JSON shape, so an error inside a
/// recipe keeps its own message and position.
#[derive(Debug, Clone)]
pub enum CookbookDocument {
    /// `{ "last_id": n, "recipes": [...] }`
    Current(Cookbook),
    /// `[...]`
    Legacy(Vec<Recipe>),
}

impl<'de> Deserialize<'de> for CookbookDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DocumentVisitor)
    }
}

struct DocumentVisitor;

impl<'de> Visitor<'de> for DocumentVisitor {
    type Value = CookbookDocument;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a cookbook object or an array of recipes")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<Self::Value, A::Error> {
        Vec::<Recipe>::deserialize(SeqAccessDeserializer::new(seq)).map(CookbookDocument::Legacy)
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        Cookbook::deserialize(MapAccessDeserializer::new(map)).map(CookbookDocument::Current)
    }
}

impl From<CookbookDocument> for Cookbook {
    fn from(document: CookbookDocument) -> Self {
        match document {
            CookbookDocument::Current(cookbook) => Self::from_parts(cookbook.recipes, cookbook.last_id),
            CookbookDocument::Legacy(recipes) => Self::from_parts(recipes, 0),
        }
    }
}

impl Cookbook {
    /// Empty cookbook with the default id step
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different id increment; a zero step is replaced by the default
    #[must_use]
    pub const fn with_id_step(mut self, id_step: u64) -> Self {
        self.id_step = if id_step == 0 { DEFAULT_ID_STEP } else { id_step };
        self
    }

    /// Rebuild from stored recipes and a high-water mark
    #[must_use]
    pub fn from_parts(recipes: Vec<Recipe>, last_id: u64) -> Self {
        let max_id = recipes.iter().map(Recipe::id).max().unwrap_or(0);
        Self {
            last_id: last_id.max(max_id),
            recipes,
            id_step: DEFAULT_ID_STEP,
        }
    }

    /// Increment used for new ids
    #[must_use]
    pub const fn id_step(&self) -> u64 {
        self.id_step
    }

    /// Highest id ever handed out
    #[must_use]
    pub const fn last_id(&self) -> u64 {
        self.last_id
    }

    /// Add a recipe, assigning and returning its id
    pub fn add(&mut self, mut recipe: Recipe) -> u64 {
        let id = self.next_id();
        recipe.assign_id(id);
        self.recipes.push(recipe);
        self.last_id = id;
        id
    }

    fn next_id(&self) -> u64 {
        let max_id = self.recipes.iter().map(Recipe::id).max().unwrap_or(0);
        max_id.max(self.last_id) + self.id_step
    }

    /// Copy of the recipe with this id
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::RecipeNotFound` if no recipe has this id.
    pub fn find(&self, id: u64) -> Result<Recipe, RecipeError> {
        self.get(id).cloned().ok_or(RecipeError::not_found(id))
    }

    /// Borrow the recipe with this id
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id() == id)
    }

    /// Mutable reference to the recipe with this id
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::RecipeNotFound` if no recipe has this id.
    pub fn find_mut(&mut self, id: u64) -> Result<&mut Recipe, RecipeError> {
        self.recipes
            .iter_mut()
            .find(|recipe| recipe.id() == id)
            .ok_or(RecipeError::not_found(id))
    }

    /// Replace the editable fields of a recipe and stamp the update
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::RecipeNotFound` if no recipe has this id.
    pub fn update(&mut self, id: u64, draft: RecipeDraft, author: &str) -> Result<(), RecipeError> {
        self.find_mut(id)?.update(draft, author);
        Ok(())
    }

    /// Remove a recipe, returning it
    ///
    /// The last recipe takes the removed one's slot, then the collection is
    /// re-sorted by name. Recipes with equal names keep their relative order.
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::RecipeNotFound` if no recipe has this id.
    pub fn remove(&mut self, id: u64) -> Result<Recipe, RecipeError> {
        let index = self
            .recipes
            .iter()
            .position(|recipe| recipe.id() == id)
            .ok_or(RecipeError::not_found(id))?;
        let removed = self.recipes.swap_remove(index);
        self.recipes.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(removed)
    }

    /// Recipes whose name or any ingredient item contains `needle`,
    /// ignoring case
    #[must_use]
    pub fn find_by_text(&self, needle: &str) -> Vec<Recipe> {
        let needle = needle.to_lowercase();
        self.recipes
            .iter()
            .filter(|recipe| {
                recipe.name().to_lowercase().contains(&needle)
                    || recipe
                        .ingredients()
                        .iter()
                        .any(|ingredient| ingredient.item().to_lowercase().contains(&needle))
            })
            .cloned()
            .collect()
    }

    /// Distinct tags across all recipes, sorted
    #[must_use]
    pub fn tags(&self) -> Vec<String> {
        self.recipes
            .iter()
            .flat_map(|recipe| recipe.tags().iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Recipes ordered by name, leaving the collection untouched
    #[must_use]
    pub fn sorted_by_name(&self) -> Vec<&Recipe> {
        let mut sorted: Vec<&Recipe> = self.recipes.iter().collect();
        sorted.sort_by(|a, b| a.name().cmp(b.name()));
        sorted
    }

    /// Recipes in collection order
    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    /// Recipes in collection order
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Number of recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the cookbook holds no recipe
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
