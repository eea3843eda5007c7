// ABOUTME: Cookbook allocation constants
// ABOUTME: Recipe id increment and related defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Increment used for each new recipe id.
///
/// With a step of 10 ids run 10, 20, 30; with 12 they run 12, 24, 36.
/// Sparse ids stay short enough to type into a URL by hand.
pub const DEFAULT_ID_STEP: u64 = 10;
