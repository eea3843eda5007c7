// ABOUTME: Domain service layer shared by the CLI and any future front end
// ABOUTME: Provides the lock-protected cookbook service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services are protocol-agnostic so a CLI and a web front end apply the same
//! rules to the same shared state.

/// Recipe collection and density table operations
pub mod cookbook;

pub use cookbook::CookbookService;
