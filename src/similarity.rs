// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text-similarity utilities: cosine similarity over term-frequency
//! vectors, related-document lookup, and key-phrase extraction.
//!
//! These work on the strict tokenization (punctuation stripped, stop
//! words removed), unlike the rankers, which deliberately match raw
//! whitespace tokens.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use crate::tokenize::tokenize_strict;
use crate::types::{Document, SearchResult};

/// Common English function words, excluded from every similarity vector.
/// Loaded once from the embedded JSON list.
static STOP_WORDS: LazyLock<HashSet<String>> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../data/stop_words.json"))
        .expect("embedded stop_words.json is well-formed")
});

/// Strict tokens with stop words removed.
fn content_tokens(text: &str) -> Vec<String> {
    tokenize_strict(text)
        .into_iter()
        .filter(|token| !STOP_WORDS.contains(token))
        .collect()
}

/// Term-frequency map of a token stream.
pub fn term_frequencies(tokens: &[String]) -> HashMap<String, usize> {
    let mut frequencies = HashMap::new();
    for token in tokens {
        *frequencies.entry(token.clone()).or_insert(0) += 1;
    }
    frequencies
}

/// Cosine similarity between the term-frequency vectors of two texts.
///
/// Punctuation is stripped and stop words are dropped before counting.
/// A text with no content tokens left has zero magnitude, and any
/// comparison against it returns 0.0 rather than dividing by zero.
pub fn cosine_similarity(a: &str, b: &str) -> f64 {
    let freq_a = term_frequencies(&content_tokens(a));
    let freq_b = term_frequencies(&content_tokens(b));

    let mut dot = 0.0;
    let mut mag_a = 0.0;
    let mut mag_b = 0.0;

    for (term, &fa) in &freq_a {
        let fa = fa as f64;
        mag_a += fa * fa;
        if let Some(&fb) = freq_b.get(term) {
            dot += fa * fb as f64;
        }
    }
    for &fb in freq_b.values() {
        let fb = fb as f64;
        mag_b += fb * fb;
    }

    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }
    dot / (mag_a.sqrt() * mag_b.sqrt())
}

/// Documents whose body reads similar to a probe text.
///
/// Every body is compared to the probe by [`cosine_similarity`]; results
/// at or above the threshold come back sorted by descending similarity,
/// stable over corpus order, with the similarity in
/// [`SearchResult::score`].
pub fn related_documents(probe: &str, corpus: &[Document], threshold: f64) -> Vec<SearchResult> {
    let mut related: Vec<SearchResult> = corpus
        .iter()
        .filter_map(|doc| {
            let similarity = cosine_similarity(probe, &doc.body);
            (similarity >= threshold).then(|| SearchResult {
                doc_id: doc.id,
                title: doc.title.clone(),
                body: doc.body.clone(),
                bibliography: doc.bibliography.clone(),
                score: similarity,
            })
        })
        .collect();

    related.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    related
}

/// The most frequent content terms of a text, most frequent first.
///
/// Ties keep first-encounter order, so of two equally frequent terms the
/// one appearing earlier in the text wins the spot.
pub fn key_phrases(text: &str, limit: usize) -> Vec<String> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for token in content_tokens(text) {
        if !counts.contains_key(&token) {
            order.push(token.clone());
        }
        *counts.entry(token).or_insert(0) += 1;
    }

    order.sort_by(|a, b| counts[b].cmp(&counts[a]));
    order.truncate(limit);
    order
}
