//! BM25 model behavior through the public entry point.

use super::common::{assert_results_well_formed, make_corpus, physics_corpus};
use trawl::{search, RetrievalModel};

#[test]
fn test_repetition_raises_relevance() {
    let corpus = make_corpus(&["cheese platter", "cheese cheese cheese platter"]);
    let results = search("cheese", &corpus, RetrievalModel::Bm25);

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].doc_id, 2);
    assert!(results[0].score > results[1].score);
}

#[test]
fn test_rare_terms_outweigh_common_ones() {
    // "shared" appears in every body, "durian" in exactly one. Bodies have
    // equal length so only inverse document frequency separates them.
    let corpus = make_corpus(&[
        "shared durian words here",
        "shared banana words here",
        "shared cherry words here",
    ]);
    let results = search("shared durian", &corpus, RetrievalModel::Bm25);

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].doc_id, 1);
    assert!(results[0].score > 2.0 * results[1].score);
}

#[test]
fn test_shorter_documents_win_at_equal_frequency() {
    let corpus = make_corpus(&["comet dust tail orbit period ellipse", "comet dust"]);
    let results = search("comet", &corpus, RetrievalModel::Bm25);

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].doc_id, 2);
}

#[test]
fn test_expansion_terms_contribute() {
    // The query says "velocity"; only the synonym "motion" appears on disk.
    let corpus = make_corpus(&["circular motion of planets", "rings of dust and ice"]);
    let results = search("velocity", &corpus, RetrievalModel::Bm25);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].doc_id, 1);
}

#[test]
fn test_fixture_ordering_matches_the_other_models() {
    let corpus = physics_corpus();
    let results = search("energy flow", &corpus, RetrievalModel::Bm25);

    let ids: Vec<u32> = results.iter().map(|r| r.doc_id).collect();
    assert_eq!(ids, [1, 3, 4]);
    assert_results_well_formed(&results, &corpus);
}
