// ABOUTME: Core types and constants for the cookbook recipe manager
// ABOUTME: Foundation crate with error handling and measurement constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Cookbook Core
//!
//! Foundation crate providing shared types and constants for the cookbook
//! workspace. It is kept free of I/O and runtime dependencies so the engine
//! crate and the application crate can both build on it.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode` and the domain-level `RecipeError`
//! - **constants**: physical volume ratios, allocation and rounding defaults

/// Unified error handling with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;
