// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranking: score a corpus against an expanded query set.
//!
//! Three interchangeable models, selected per call:
//!
//! | Model                         | Match unit                  | Score shape            |
//! |-------------------------------|-----------------------------|------------------------|
//! | [`RetrievalModel::Inverted`]  | exact body token            | hits ÷ variant count   |
//! | [`RetrievalModel::Boolean`]   | substring over capped vocab | coverage in `[0, 1]`   |
//! | [`RetrievalModel::Bm25`]      | exact body token            | Okapi BM25, averaged   |
//!
//! Every call is self-contained: it expands the query, builds whatever
//! working structure its model needs (postings, presence matrix, corpus
//! statistics), scores, and discards the lot. Nothing is cached between
//! calls, so concurrent calls over a shared immutable corpus need no
//! synchronization.

mod bm25;
mod boolean;
mod inverted;

pub use bm25::{B, K1};
pub use boolean::MAX_TERMS;

use crate::expand::expand;
use crate::types::{Document, RetrievalModel, SearchResult};

/// Rank a corpus against a query under the chosen retrieval model.
///
/// The query is expanded once (see [`crate::expand::expand`]) and the whole
/// variant set is handed to the model. An empty or whitespace-only query,
/// or an empty corpus, short-circuits to an empty result list.
///
/// Results are sorted by descending score. The sort is stable and applies
/// no secondary key, so equal scores keep corpus order and callers can
/// re-sort on their own keys afterwards.
pub fn search(query: &str, corpus: &[Document], model: RetrievalModel) -> Vec<SearchResult> {
    if query.trim().is_empty() || corpus.is_empty() {
        return Vec::new();
    }

    let expansions = expand(query);
    tracing::debug!(
        model = model.as_str(),
        variants = expansions.len(),
        documents = corpus.len(),
        "ranking corpus"
    );

    match model {
        RetrievalModel::Inverted => inverted::rank(&expansions, corpus),
        RetrievalModel::Boolean => boolean::rank(&expansions, corpus),
        RetrievalModel::Bm25 => bm25::rank(&expansions, corpus),
    }
}

/// Turn per-index scores into full results, sorted by descending score.
///
/// Rankers hand over `(corpus index, score)` pairs in corpus order; the
/// stable sort therefore leaves equal scores in corpus order. Indices come
/// straight from corpus enumeration, so the lookup cannot be out of range.
fn assemble_sorted(scored: Vec<(usize, f64)>, corpus: &[Document]) -> Vec<SearchResult> {
    let mut results: Vec<SearchResult> = scored
        .into_iter()
        .map(|(index, score)| {
            let doc = &corpus[index];
            SearchResult {
                doc_id: doc.id,
                title: doc.title.clone(),
                body: doc.body.clone(),
                bibliography: doc.bibliography.clone(),
                score,
            }
        })
        .collect();

    results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    results
}
