// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tokenization shared by every ranker.
//!
//! Two flavors. [`tokenize`] lowercases and splits on whitespace, keeping
//! punctuation attached to its word ("flow," stays "flow,") - this is what
//! the three rankers see. [`tokenize_strict`] additionally strips anything
//! that is not alphanumeric or underscore, and feeds the similarity
//! utilities only. No stemming in either.

/// Lowercase the input and split on runs of whitespace.
///
/// Empty tokens are dropped; an empty or all-whitespace input yields an
/// empty vector. Deterministic and pure.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Like [`tokenize`], but strips non-word characters before splitting.
///
/// "flow," and "flow" tokenize identically here, which is what cosine
/// comparison wants and the rankers deliberately do not get.
pub fn tokenize_strict(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();
    cleaned
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
