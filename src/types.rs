// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a retrieval call.
//!
//! Three types cross the public boundary: what goes in ([`Document`]), what
//! comes out ([`SearchResult`]), and which ranking model to run
//! ([`RetrievalModel`]). Everything else a ranker needs (postings, presence
//! matrices, term statistics) is call-scoped and private to its module.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **SearchResult**: `doc_id` always names a document from the corpus the
//!   call received, and `score` is finite and non-negative.
//! - **Corpus order**: a corpus is a plain slice; index position is an
//!   internal offset during scoring and never leaks into results.

use serde::{Deserialize, Serialize};

use crate::error::Error;

// =============================================================================
// DOCUMENT TYPES
// =============================================================================

/// One searchable record: caller-assigned id plus three text fields.
///
/// Immutable once loaded. The engine never checks id uniqueness - feed it two
/// documents with the same id and both get ranked independently.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: u32,
    pub title: String,
    /// Body text; the only field the rankers tokenize.
    pub body: String,
    /// Free-form citation string, carried through to results untouched.
    #[serde(default)]
    pub bibliography: String,
}

/// A scored projection of a [`Document`], created fresh per query.
///
/// Carries full document fields so callers can render results without a
/// second corpus lookup. The producing call sorts by `score` descending with
/// a stable sort and no secondary key, so callers can re-sort ties by their
/// own criteria (recency, title) without losing relevance order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub doc_id: u32,
    pub title: String,
    pub body: String,
    pub bibliography: String,
    /// Relevance under the model that produced it. Scales differ per model:
    /// term-overlap counts for inverted, `[0, 1]` coverage for boolean,
    /// unbounded BM25 sums for bm25. Comparable within one call, not across
    /// models.
    pub score: f64,
}

// =============================================================================
// MODEL SELECTION
// =============================================================================

/// Which ranking algorithm a call should run.
///
/// The three models are variants of one capability (score a corpus against
/// an expanded query set) and differ in how they count a match:
///
/// | Model      | Match unit                  | Score shape              |
/// |------------|-----------------------------|--------------------------|
/// | `Inverted` | exact token in postings     | avg hit count            |
/// | `Boolean`  | substring in body           | avg coverage in `[0, 1]` |
/// | `Bm25`     | token frequency, idf-scaled | avg BM25 sum             |
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RetrievalModel {
    /// Presence-only postings, scored by summed term overlap.
    Inverted,
    /// Bounded-vocabulary presence matrix, scored by query-term coverage.
    Boolean,
    /// Okapi BM25 with corpus-wide idf and length normalization.
    #[default]
    Bm25,
}

impl RetrievalModel {
    /// Lowercase name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            RetrievalModel::Inverted => "inverted",
            RetrievalModel::Boolean => "boolean",
            RetrievalModel::Bm25 => "bm25",
        }
    }
}

impl std::str::FromStr for RetrievalModel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "inverted" => Ok(RetrievalModel::Inverted),
            "boolean" => Ok(RetrievalModel::Boolean),
            "bm25" => Ok(RetrievalModel::Bm25),
            other => Err(Error::UnknownModel(other.to_string())),
        }
    }
}

impl std::fmt::Display for RetrievalModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
