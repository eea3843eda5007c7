// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for measurement, allocation and environment configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Volume ratios and rounding precision used by the conversion engine
pub mod units;

/// Recipe id allocation and cookbook defaults
pub mod cookbook;

/// Service identity used in structured logs
pub mod service_names {
    /// Name reported by the logging bootstrap
    pub const COOKBOOK: &str = "cookbook";
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Folder holding `recipes.json` and `conversion.json`
    pub const DATA_DIR: &str = "COOKBOOK_DATA_DIR";
    /// Recipe id increment
    pub const ID_STEP: &str = "COOKBOOK_ID_STEP";
    /// Decimal places kept when rounding converted and scaled amounts
    pub const ROUNDING_DECIMALS: &str = "COOKBOOK_ROUNDING_DECIMALS";
    /// Whether the line segmenter strips tab characters
    pub const STRIP_TABS: &str = "COOKBOOK_STRIP_TABS";
    /// Optional JSON file with extra unit aliases
    pub const UNIT_ALIASES: &str = "COOKBOOK_UNIT_ALIASES";
}

/// File names inside the data folder
pub mod files {
    /// Recipe collection
    pub const RECIPES: &str = "recipes.json";
    /// Per-item density table
    pub const CONVERSION_TABLE: &str = "conversion.json";
    /// Default data folder, relative to the working directory
    pub const DEFAULT_DATA_DIR: &str = "./config";
}
