//! Inverted-postings model behavior through the public entry point.
//!
//! Scoring recap: every expansion variant is tokenized, each token found in
//! a document's postings adds one hit, and the hit total is divided by the
//! number of variants.

use super::common::{assert_results_well_formed, physics_corpus};
use trawl::{expand, search, RetrievalModel};

#[test]
fn test_most_overlapping_doc_ranks_first() {
    let corpus = physics_corpus();
    let results = search("energy flow", &corpus, RetrievalModel::Inverted);

    let ids: Vec<u32> = results.iter().map(|r| r.doc_id).collect();
    assert_eq!(ids, [1, 3, 4]);
    assert_results_well_formed(&results, &corpus);
}

#[test]
fn test_score_is_hits_over_variant_count() {
    let corpus = physics_corpus();
    let results = search("energy flow", &corpus, RetrievalModel::Inverted);

    // Doc 1 holds both query tokens: 2 hits from the raw variant plus 1
    // from each of the five synonym substitutions on either side.
    let variants = expand("energy flow").len() as f64;
    assert!((results[0].score - 12.0 / variants).abs() < 1e-12);
}

#[test]
fn test_tied_scores_keep_corpus_order() {
    let corpus = physics_corpus();
    let results = search("energy flow", &corpus, RetrievalModel::Inverted);

    // Docs 3 and 4 each collect 6 hits; doc 3 comes first in the corpus.
    assert_eq!(results[1].doc_id, 3);
    assert_eq!(results[2].doc_id, 4);
    assert!((results[1].score - results[2].score).abs() < 1e-12);
}

#[test]
fn test_synonym_tokens_count_as_hits() {
    let corpus = physics_corpus();
    let results = search("velocity", &corpus, RetrievalModel::Inverted);

    // Doc 2 holds "velocity" and the synonym "motion", nothing else matches.
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].doc_id, 2);
    let variants = expand("velocity").len() as f64;
    assert!((results[0].score - 2.0 / variants).abs() < 1e-12);
}

#[test]
fn test_unmatched_query_returns_nothing() {
    let results = search(
        "quantum chromodynamics",
        &physics_corpus(),
        RetrievalModel::Inverted,
    );
    assert!(results.is_empty());
}
