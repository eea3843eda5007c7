// ABOUTME: Re-exports command modules for cookbook-cli
// ABOUTME: Provides recipe, density and export commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod density;
pub mod export;
pub mod recipe;
