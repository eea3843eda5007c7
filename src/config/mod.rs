// ABOUTME: Configuration management module for the cookbook
// ABOUTME: Re-exports the environment-driven CookbookConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! All settings come from environment variables with defaults; see
//! [`CookbookConfig::from_env`].

/// Environment and data folder configuration
pub mod environment;

pub use environment::CookbookConfig;
