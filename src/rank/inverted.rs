// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverted-index ranking: exact token lookups against per-call postings.

use std::collections::HashMap;

use crate::tokenize::tokenize;
use crate::types::{Document, SearchResult};

/// Postings: body token → indices of the documents containing it.
///
/// Presence only. A token repeated inside one document still yields a
/// single posting for that document, so document-side repetition never
/// inflates a score.
fn build_postings(corpus: &[Document]) -> HashMap<String, Vec<usize>> {
    let mut postings: HashMap<String, Vec<usize>> = HashMap::new();

    for (index, doc) in corpus.iter().enumerate() {
        let mut tokens = tokenize(&doc.body);
        tokens.sort();
        tokens.dedup();
        for token in tokens {
            postings.entry(token).or_default().push(index);
        }
    }

    postings
}

/// Score every document by how often the expansion set's tokens hit its
/// postings.
///
/// Each occurrence of a token in each variant counts once per posting
/// document, so query-side repetition weighs in linearly. The final score
/// is the hit count divided by the variant count. Documents with no hits
/// at all are omitted rather than reported at zero.
pub(crate) fn rank(expansions: &[String], corpus: &[Document]) -> Vec<SearchResult> {
    if expansions.is_empty() {
        return Vec::new();
    }

    let postings = build_postings(corpus);

    let mut hits = vec![0usize; corpus.len()];
    for expansion in expansions {
        for token in tokenize(expansion) {
            if let Some(indices) = postings.get(&token) {
                for &index in indices {
                    hits[index] += 1;
                }
            }
        }
    }

    let scored: Vec<(usize, f64)> = hits
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(index, &count)| (index, count as f64 / expansions.len() as f64))
        .collect();

    super::assemble_sorted(scored, corpus)
}
