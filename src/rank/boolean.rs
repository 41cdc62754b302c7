// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Boolean coverage ranking over a capped document-term presence matrix.
//!
//! Query tokens count only when they appear in the corpus-wide vocabulary,
//! but a vocabulary term marks every document whose lowercased body
//! contains it as a substring. "flow", tokenized anywhere in the corpus,
//! therefore also matches a document that only says "flowering". Coverage
//! is the fraction of a variant's qualifying tokens matched, which pins
//! every score into `[0, 1]`.

use std::collections::HashMap;

use crate::tokenize::tokenize;
use crate::types::{Document, SearchResult};

/// Vocabulary cap. Term collection stops after this many distinct
/// qualifying tokens, counted in corpus scan order; later tokens never
/// participate in matching.
pub const MAX_TERMS: usize = 1000;

/// Cell budget for the presence matrix. Corpora whose matrix would exceed
/// it are refused at construction and the ranking degrades to an empty
/// result list.
const MAX_MATRIX_CELLS: usize = 25_000_000;

/// Tokens shorter than three characters carry no coverage weight.
fn qualifies(token: &str) -> bool {
    token.chars().count() > 2
}

/// Document × vocabulary-term presence matrix.
struct TermMatrix {
    /// Column index per vocabulary term.
    columns: HashMap<String, usize>,
    /// One row per document, `true` where the lowercased body
    /// substring-contains the column's term.
    rows: Vec<Vec<bool>>,
}

fn build_matrix(corpus: &[Document]) -> Result<TermMatrix, String> {
    let mut columns: HashMap<String, usize> = HashMap::new();
    'scan: for doc in corpus {
        for token in tokenize(&doc.body) {
            if qualifies(&token) && !columns.contains_key(&token) {
                let next = columns.len();
                columns.insert(token, next);
                if columns.len() == MAX_TERMS {
                    break 'scan;
                }
            }
        }
    }

    let cells = corpus.len().saturating_mul(columns.len());
    if cells > MAX_MATRIX_CELLS {
        return Err(format!(
            "{} documents x {} terms needs {} matrix cells, over the {} budget",
            corpus.len(),
            columns.len(),
            cells,
            MAX_MATRIX_CELLS
        ));
    }

    let mut ordered = vec![""; columns.len()];
    for (term, &column) in &columns {
        ordered[column] = term.as_str();
    }

    let rows = corpus
        .iter()
        .map(|doc| {
            let body = doc.body.to_lowercase();
            ordered.iter().map(|term| body.contains(term)).collect()
        })
        .collect();

    Ok(TermMatrix { columns, rows })
}

/// Score every document by its average coverage of the expansion set.
///
/// Per variant, coverage is the count of qualifying tokens present in the
/// document's matrix row divided by the variant's qualifying-token count
/// (zero when none qualify). Per-variant coverages are averaged over the
/// whole set. Matrix construction failure is absorbed: the caller sees an
/// empty list and a warning, never an error.
pub(crate) fn rank(expansions: &[String], corpus: &[Document]) -> Vec<SearchResult> {
    if expansions.is_empty() {
        return Vec::new();
    }

    let matrix = match build_matrix(corpus) {
        Ok(matrix) => matrix,
        Err(reason) => {
            tracing::warn!(%reason, "presence matrix construction failed, returning no results");
            return Vec::new();
        }
    };

    let filtered: Vec<Vec<String>> = expansions
        .iter()
        .map(|expansion| {
            tokenize(expansion)
                .into_iter()
                .filter(|token| qualifies(token))
                .collect()
        })
        .collect();

    let mut scored = Vec::new();
    for (index, row) in matrix.rows.iter().enumerate() {
        let mut total = 0.0;
        for tokens in &filtered {
            if tokens.is_empty() {
                continue;
            }
            let matched = tokens
                .iter()
                .filter(|token| matrix.columns.get(*token).is_some_and(|&column| row[column]))
                .count();
            total += matched as f64 / tokens.len() as f64;
        }

        let score = total / expansions.len() as f64;
        if score > 0.0 {
            scored.push((index, score));
        }
    }

    super::assemble_sorted(scored, corpus)
}
