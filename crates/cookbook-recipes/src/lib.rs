// ABOUTME: Recipe engine crate for ingredient parsing, unit conversion and portion scaling
// ABOUTME: Synchronous and free of I/O so it can be shared by the CLI and the service layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Cookbook Recipes
//!
//! The ingestion and conversion engine of the cookbook. Everything here is
//! plain computation over owned values; persistence, locking and logging
//! live in the application crate.

/// Recipe parsing, conversion and collection types
pub mod recipes;

pub use recipes::*;
