// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Okapi BM25 ranking with per-call corpus statistics.

use std::collections::HashMap;

use crate::tokenize::tokenize;
use crate::types::{Document, SearchResult};

/// Term-frequency saturation. Higher values let repeated terms keep
/// earning score for longer before the curve flattens.
pub const K1: f64 = 1.5;

/// Length-normalization strength. `0.0` would ignore document length;
/// `1.0` would normalize fully against the corpus average.
pub const B: f64 = 0.75;

/// Everything BM25 needs to know about a corpus, computed in one pass.
struct CorpusStats {
    /// Per-document term frequencies, corpus order.
    term_counts: Vec<HashMap<String, usize>>,
    /// Per-document token counts, corpus order.
    doc_lens: Vec<usize>,
    /// Mean token count across the corpus.
    avg_doc_len: f64,
    /// Inverse document frequency per term:
    /// `ln((N - df + 0.5) / (df + 0.5) + 1)`. The `+ 1` inside the log
    /// keeps the value positive even for terms present in every document;
    /// it is stored as computed, with no clamping.
    idf: HashMap<String, f64>,
}

fn corpus_stats(corpus: &[Document]) -> CorpusStats {
    let mut term_counts = Vec::with_capacity(corpus.len());
    let mut doc_lens = Vec::with_capacity(corpus.len());
    let mut doc_freq: HashMap<String, usize> = HashMap::new();

    for doc in corpus {
        let tokens = tokenize(&doc.body);
        doc_lens.push(tokens.len());

        let mut counts: HashMap<String, usize> = HashMap::new();
        for token in tokens {
            *counts.entry(token).or_insert(0) += 1;
        }
        for term in counts.keys() {
            *doc_freq.entry(term.clone()).or_insert(0) += 1;
        }
        term_counts.push(counts);
    }

    let n = corpus.len() as f64;
    let idf = doc_freq
        .into_iter()
        .map(|(term, df)| {
            let df = df as f64;
            (term, ((n - df + 0.5) / (df + 0.5) + 1.0).ln())
        })
        .collect();

    let total_len: usize = doc_lens.iter().sum();
    let avg_doc_len = if doc_lens.is_empty() {
        0.0
    } else {
        total_len as f64 / doc_lens.len() as f64
    };

    CorpusStats {
        term_counts,
        doc_lens,
        avg_doc_len,
        idf,
    }
}

/// Score every document with BM25 against each variant and average over
/// the expansion set.
///
/// Query tokens are taken as they come: a token repeated within or across
/// variants is scored each time. Terms absent from the corpus contribute
/// nothing. Documents whose averaged score stays at zero are omitted.
pub(crate) fn rank(expansions: &[String], corpus: &[Document]) -> Vec<SearchResult> {
    if expansions.is_empty() {
        return Vec::new();
    }

    let stats = corpus_stats(corpus);
    if stats.avg_doc_len == 0.0 {
        // Every body tokenized to nothing; no term can score.
        return Vec::new();
    }

    let query_tokens: Vec<Vec<String>> = expansions.iter().map(|e| tokenize(e)).collect();

    let mut scored = Vec::new();
    for (index, counts) in stats.term_counts.iter().enumerate() {
        let doc_len = stats.doc_lens[index] as f64;
        let norm = K1 * (1.0 - B + B * (doc_len / stats.avg_doc_len));

        let mut total = 0.0;
        for tokens in &query_tokens {
            for token in tokens {
                let Some(&idf) = stats.idf.get(token) else {
                    continue;
                };
                let tf = counts.get(token).copied().unwrap_or(0) as f64;
                total += idf * ((tf * (K1 + 1.0)) / (tf + norm));
            }
        }

        let score = total / expansions.len() as f64;
        if score > 0.0 {
            scored.push((index, score));
        }
    }

    super::assemble_sorted(scored, corpus)
}
