// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query expansion: one query in, a set of related query variants out.
//!
//! [`expand`] turns "energy flow" into the original plus synonym
//! substitutions ("power flow", "energy stream") plus affix variants
//! ("preenergy", "flowtion"). Every ranker scores a document against the
//! whole set and divides by its size, so recall improves without any
//! per-document work at index time.
//!
//! Two variant shapes coexist and the difference is load-bearing:
//!
//! - Synonym variants substitute in place, holding the other terms fixed:
//!   "energy flow" → "power flow".
//! - Prefix/suffix variants enter as bare single terms: "energy flow" →
//!   "preenergy", never "preenergy flow".
//!
//! Do not "repair" the affix shape into full-query substitution - scoring
//! averages are calibrated against the set as produced here, and single-term
//! variants deliberately dilute less than full-query ones.
//!
//! The synonym table lives in `data/synonyms.json` and is embedded at
//! compile time; prefixes, suffixes, and the suggestion phrasing tables are
//! small enough to stay in code.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

// =============================================================================
// FIXED TABLES
// =============================================================================

/// Synonym rows for common technical and scientific terms, keyed by the
/// lowercase term. Loaded once from the embedded JSON table.
static SYNONYMS: LazyLock<HashMap<String, Vec<String>>> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../data/synonyms.json"))
        .expect("embedded synonyms.json is well-formed")
});

/// Affix lists for morphological variants. Strip the affix when the term
/// already carries it, attach it otherwise.
const PREFIXES: [&str; 10] = [
    "pre", "post", "sub", "super", "hyper", "ultra", "micro", "macro", "multi", "uni",
];

const SUFFIXES: [&str; 10] = [
    "tion", "sion", "ment", "ity", "ness", "ance", "ence", "able", "ible", "ive",
];

/// Interrogative lead-ins for [`suggest`].
const QUESTION_PREFIXES: [&str; 20] = [
    "how to", "what is", "why", "when", "where", "who", "which", "can", "does", "do", "is",
    "are", "was", "were", "will", "should", "could", "would", "may", "might",
];

/// Topic framings for [`suggest`].
const TOPIC_SUFFIXES: [&str; 20] = [
    "tutorial",
    "guide",
    "examples",
    "definition",
    "meaning",
    "explanation",
    "overview",
    "introduction",
    "basics",
    "advanced",
    "tips",
    "tricks",
    "best practices",
    "comparison",
    "difference",
    "similarities",
    "advantages",
    "disadvantages",
    "benefits",
    "drawbacks",
];

// =============================================================================
// VARIANT SET
// =============================================================================

/// Insertion-ordered string set: a Vec for deterministic iteration plus a
/// HashSet for O(1) dedup.
struct VariantSet {
    ordered: Vec<String>,
    seen: HashSet<String>,
}

impl VariantSet {
    fn new() -> Self {
        VariantSet {
            ordered: Vec::new(),
            seen: HashSet::new(),
        }
    }

    fn insert(&mut self, variant: String) {
        if self.seen.insert(variant.clone()) {
            self.ordered.push(variant);
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}

// =============================================================================
// EXPANSION
// =============================================================================

/// Expand a query into its set of related variants.
///
/// The result always starts with the query itself, verbatim. Then, for every
/// whitespace term of the lowercased query:
///
/// 1. each synonym-table entry yields a full-query variant with that term
///    substituted in place (every occurrence of it);
/// 2. each prefix yields a bare single-term variant, stripped if the term
///    already starts with it, prepended otherwise;
/// 3. each suffix likewise, stripped if the term ends with it, appended
///    otherwise.
///
/// Duplicates collapse; insertion order is preserved. An empty query
/// expands to a set containing only the empty string. Terms absent from
/// the synonym table contribute no synonym variants.
pub fn expand(query: &str) -> Vec<String> {
    let lowered = query.to_lowercase();
    let terms: Vec<&str> = lowered.split_whitespace().collect();

    let mut variants = VariantSet::new();
    variants.insert(query.to_string());

    for term in &terms {
        if let Some(synonyms) = SYNONYMS.get(*term) {
            for synonym in synonyms {
                let substituted: Vec<&str> = terms
                    .iter()
                    .map(|t| if t == term { synonym.as_str() } else { *t })
                    .collect();
                variants.insert(substituted.join(" "));
            }
        }
    }

    for term in &terms {
        for prefix in PREFIXES {
            match term.strip_prefix(prefix) {
                Some(stripped) => variants.insert(stripped.to_string()),
                None => variants.insert(format!("{prefix}{term}")),
            }
        }
        for suffix in SUFFIXES {
            match term.strip_suffix(suffix) {
                Some(stripped) => variants.insert(stripped.to_string()),
                None => variants.insert(format!("{term}{suffix}")),
            }
        }
    }

    variants.into_vec()
}

/// Union of the synonym rows for every term of the query.
///
/// Unlike [`expand`] this returns bare related terms, not query variants.
/// Terms without a synonym row contribute nothing; an all-unknown query
/// yields an empty vector.
pub fn related_terms(query: &str) -> Vec<String> {
    let lowered = query.to_lowercase();

    let mut related = VariantSet::new();
    for term in lowered.split_whitespace() {
        if let Some(synonyms) = SYNONYMS.get(term) {
            for synonym in synonyms {
                related.insert(synonym.clone());
            }
        }
    }

    related.into_vec()
}

// =============================================================================
// SUGGESTIONS
// =============================================================================

/// Reformulations of a query for display as search suggestions.
///
/// Three families, in order: the query behind each interrogative lead-in
/// ("how to energy flow"), the query ahead of each topic framing
/// ("energy flow tutorial"), and for every term with a synonym row, the
/// synonym alone plus the synonym paired with each remaining term
/// ("power flow", "power" having already been inserted). Deduplicated,
/// insertion-ordered.
pub fn suggest(query: &str) -> Vec<String> {
    let lowered = query.to_lowercase();
    let terms: Vec<&str> = lowered.split_whitespace().collect();

    let mut suggestions = VariantSet::new();

    for prefix in QUESTION_PREFIXES {
        suggestions.insert(format!("{prefix} {query}"));
    }
    for suffix in TOPIC_SUFFIXES {
        suggestions.insert(format!("{query} {suffix}"));
    }

    for term in &terms {
        if let Some(synonyms) = SYNONYMS.get(*term) {
            for synonym in synonyms {
                suggestions.insert(synonym.clone());
                for other in &terms {
                    if other != term {
                        suggestions.insert(format!("{synonym} {other}"));
                    }
                }
            }
        }
    }

    suggestions.into_vec()
}
