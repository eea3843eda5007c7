// ABOUTME: Line segmentation for pasted recipe text
// ABOUTME: Normalizes Unicode and whitespace, then splits text into non-empty lines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use unicode_normalization::UnicodeNormalization;

/// No-break space, common in text copied from web pages
const NO_BREAK_SPACE: char = '\u{00a0}';
/// Narrow no-break space, used between numbers and units by some sites
const NARROW_NO_BREAK_SPACE: char = '\u{202f}';

/// Splits raw pasted text into lines
///
/// The segmenter is stateless: the same input always gives the same lines,
/// and segmenting its own output joined with `\n` gives that output back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSegmenter {
    strip_tabs: bool,
}

impl Default for LineSegmenter {
    fn default() -> Self {
        Self { strip_tabs: true }
    }
}

impl LineSegmenter {
    /// Create a segmenter, choosing whether tab characters are removed
    #[must_use]
    pub const fn new(strip_tabs: bool) -> Self {
        Self { strip_tabs }
    }

    /// Whether tab characters are removed before splitting
    #[must_use]
    pub const fn strips_tabs(&self) -> bool {
        self.strip_tabs
    }

    /// Normalize `raw` and split it into non-empty lines, in input order
    ///
    /// Lines are not trimmed; a line holding only spaces is kept.
    #[must_use]
    pub fn segment(&self, raw: &str) -> Vec<String> {
        // Compose last: dropping a tab can bring a letter and a combining mark together
        let normalized: String = raw
            .chars()
            .filter_map(|c| match c {
                '\r' => Some('\n'),
                NO_BREAK_SPACE | NARROW_NO_BREAK_SPACE => Some(' '),
                '\t' if self.strip_tabs => None,
                other => Some(other),
            })
            .nfc()
            .collect();

        normalized
            .split('\n')
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect()
    }
}

/// Segment text with the default settings (tabs stripped)
#[must_use]
pub fn segment_lines(raw: &str) -> Vec<String> {
    LineSegmenter::default().segment(raw)
}
