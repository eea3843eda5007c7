// ABOUTME: Input reading helpers for cookbook-cli
// ABOUTME: Reads pasted text from a file or from stdin
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use cookbook::errors::{AppError, AppResult};
use std::path::Path;
use tokio::io::AsyncReadExt;

/// Read a whole file, or stdin when the path is absent or `-`
pub async fn read_text(path: Option<&Path>) -> AppResult<String> {
    match path {
        Some(path) if path != Path::new("-") => tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::invalid_input(format!("cannot read {}", path.display())).with_source(e)
        }),
        _ => {
            let mut text = String::new();
            tokio::io::stdin().read_to_string(&mut text).await?;
            Ok(text)
        }
    }
}
