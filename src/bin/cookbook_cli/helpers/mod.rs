// ABOUTME: Re-exports helper modules for cookbook-cli
// ABOUTME: Provides display formatting and input reading utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
pub mod input;
