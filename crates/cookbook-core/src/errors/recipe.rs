// ABOUTME: Domain error types for the recipe engine
// ABOUTME: Structured errors for cookbook lookups and administrative table updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Error Types
//!
//! Errors raised by the cookbook model and by administrative edits of the
//! alias and density tables. Parsing never produces an error: a line without
//! an amount becomes an unparsed ingredient, and a missing density simply
//! drops the corresponding alternate unit.

use thiserror::Error;

/// Errors specific to recipe and table operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecipeError {
    /// No recipe with this id exists in the cookbook
    #[error("recipe {id} not found")]
    RecipeNotFound {
        /// Requested recipe id
        id: u64,
    },
    /// Portions must be finite and strictly positive
    #[error("invalid portions {portions}: must be a positive number")]
    InvalidPortions {
        /// Rejected portions value
        portions: f64,
    },
    /// Density factors must be finite and strictly positive
    #[error("invalid density {factor} for '{item}': must be a positive number")]
    InvalidDensity {
        /// Item the density was meant for
        item: String,
        /// Rejected factor
        factor: f64,
    },
    /// Alias multipliers must be finite and strictly positive
    #[error("invalid multiplier {multiplier} for unit alias '{alias}'")]
    InvalidMultiplier {
        /// Alias being registered
        alias: String,
        /// Rejected multiplier
        multiplier: f64,
    },
    /// Aliases and item names cannot be blank
    #[error("name must not be empty")]
    EmptyName,
}

impl RecipeError {
    /// Create a "recipe not found" error
    #[must_use]
    pub const fn not_found(id: u64) -> Self {
        Self::RecipeNotFound { id }
    }

    /// Whether this error means the requested recipe does not exist
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::RecipeNotFound { .. })
    }
}
