// ABOUTME: Main library entry point for the cookbook recipe manager
// ABOUTME: Wires configuration, logging, storage and the shared cookbook service around the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Cookbook
//!
//! A personal recipe manager. Recipes are stored with their ingredients,
//! steps and metadata; pasted ingredient text is parsed into structured,
//! unit-normalized ingredients that can be shown in alternate units and
//! rescaled to any number of portions.
//!
//! ## Architecture
//!
//! - **recipes**: the synchronous engine (`cookbook-recipes` crate)
//! - **errors** / **constants**: shared foundation (`cookbook-core` crate)
//! - **config**: environment-driven settings
//! - **logging**: tracing subscriber setup
//! - **storage**: JSON file and in-memory persistence
//! - **services**: the lock-protected [`services::CookbookService`]
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use cookbook::config::CookbookConfig;
//! use cookbook::errors::AppResult;
//! use cookbook::recipes::RecipeDraft;
//! use cookbook::services::CookbookService;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = CookbookConfig::from_env();
//!     let service = CookbookService::open(&config).await?;
//!
//!     let id = service
//!         .add_recipe_from_text(RecipeDraft::new("Soup", 4.0), "1 cup carrots, chopped", "chef")
//!         .await?;
//!     let recipe = service.adjust_portions(id, 8.0).await?;
//!     for line in service.render_ingredients(&recipe).await {
//!         println!("{line}");
//!     }
//!     Ok(())
//! }
//! ```

/// Application constants organized by domain
pub use cookbook_core::constants;

/// Unified error handling with standard error codes
pub use cookbook_core::errors;

/// Ingredient parsing, unit conversion and cookbook model
pub use cookbook_recipes::recipes;

/// Environment-driven configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Concurrency-safe domain services
pub mod services;

/// Persistence of the cookbook and density table
pub mod storage;
