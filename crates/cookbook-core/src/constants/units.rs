// ABOUTME: Kitchen volume conversion constants and rounding defaults
// ABOUTME: Provides named constants to eliminate magic numbers in unit conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Milliliters in one US cup
pub const ML_PER_CUP: f64 = 236.588_237;

/// Milliliters in one US tablespoon
pub const ML_PER_TBSP: f64 = 14.786_764_8;

/// Milliliters in one US teaspoon
pub const ML_PER_TSP: f64 = 4.928_921_59;

/// Grams in one kilogram
pub const GRAMS_PER_KG: f64 = 1000.0;

/// Milliliters in one liter
pub const ML_PER_LITER: f64 = 1000.0;

/// Decimal places kept for displayed and scaled amounts
pub const DEFAULT_ROUNDING_DECIMALS: u8 = 1;

/// Separator between alternate-unit terms
pub const ALT_UNIT_SEPARATOR: &str = " / ";

/// Highest accepted rounding precision
pub const MAX_ROUNDING_DECIMALS: u8 = 6;
