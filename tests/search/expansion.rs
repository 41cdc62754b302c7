//! Query expansion surface: variants, related terms, and suggestions.

use super::common::{make_corpus, physics_corpus};
use trawl::{expand, related_terms, search, suggest, RetrievalModel};

#[test]
fn test_single_known_term_expands_to_twenty_six_variants() {
    // 1 raw + 5 synonyms + 10 prefix forms + 10 suffix forms
    assert_eq!(expand("velocity").len(), 26);
}

#[test]
fn test_two_term_query_grows_per_term() {
    // 1 raw + 5 synonyms per side + 20 affix forms per term
    assert_eq!(expand("energy flow").len(), 51);
}

#[test]
fn test_affix_variants_stay_single_terms() {
    let variants = expand("energy flow");
    assert!(variants.contains(&"preenergy".to_string()));
    assert!(!variants.iter().any(|v| v.starts_with("preenergy ")));
}

#[test]
fn test_synonyms_reach_paraphrased_documents() {
    let corpus = make_corpus(&[
        "a controlled trial of new methods",
        "harvest yields and soil quality",
    ]);
    let results = search("experiment", &corpus, RetrievalModel::Inverted);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].doc_id, 1);
}

#[test]
fn test_related_terms_union_in_row_order() {
    assert_eq!(
        related_terms("pressure wave"),
        [
            "force",
            "stress",
            "tension",
            "compression",
            "load",
            "oscillation",
            "vibration",
            "pulse",
            "ripple",
            "undulation",
        ]
    );
}

#[test]
fn test_suggest_families_arrive_in_order() {
    let suggestions = suggest("pressure");

    // 20 question lead-ins, then 20 topic framings, then the synonyms.
    assert_eq!(suggestions[0], "how to pressure");
    assert_eq!(suggestions[20], "pressure tutorial");
    assert!(suggestions.contains(&"stress".to_string()));
    assert_eq!(suggestions.len(), 45);
}

#[test]
fn test_expansion_drives_all_three_models() {
    let corpus = physics_corpus();
    for model in [
        RetrievalModel::Inverted,
        RetrievalModel::Boolean,
        RetrievalModel::Bm25,
    ] {
        let results = search("velocity", &corpus, model);
        assert!(
            results.iter().any(|r| r.doc_id == 2),
            "model {:?} missed the kinematics doc",
            model
        );
    }
}
