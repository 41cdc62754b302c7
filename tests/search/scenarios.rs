//! End-to-end retrieval scenarios spanning expansion, ranking, and loading.

use super::common::{corpus_file, make_doc, physics_corpus};
use trawl::{load_corpus, search, RetrievalModel};

const ALL_MODELS: [RetrievalModel; 3] = [
    RetrievalModel::Inverted,
    RetrievalModel::Boolean,
    RetrievalModel::Bm25,
];

#[test]
fn test_all_models_agree_on_the_energy_flow_ordering() {
    let corpus = physics_corpus();
    for model in ALL_MODELS {
        let results = search("energy flow", &corpus, model);
        let ids: Vec<u32> = results.iter().map(|r| r.doc_id).collect();
        assert_eq!(ids, [1, 3, 4], "unexpected order under {:?}", model);
    }
}

#[test]
fn test_results_carry_document_fields_through() {
    let corpus = vec![make_doc(11, "Energy Transfer", "energy moves between systems")];
    let results = search("energy", &corpus, RetrievalModel::Bm25);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].doc_id, 11);
    assert_eq!(results[0].title, "Energy Transfer");
    assert_eq!(results[0].body, "energy moves between systems");
    assert_eq!(results[0].bibliography, "");
}

#[test]
fn test_duplicate_ids_rank_independently() {
    let corpus = vec![
        make_doc(5, "Copy A", "energy flow"),
        make_doc(5, "Copy B", "energy flow"),
    ];
    let results = search("energy", &corpus, RetrievalModel::Inverted);

    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.doc_id == 5));
}

#[test]
fn test_loaded_corpus_ranks_identically_to_in_memory() {
    let corpus = physics_corpus();
    let file = corpus_file(&corpus);
    let loaded = load_corpus(file.path()).expect("load corpus");
    assert_eq!(loaded, corpus);

    let from_disk = search("energy flow", &loaded, RetrievalModel::Bm25);
    let in_memory = search("energy flow", &corpus, RetrievalModel::Bm25);
    assert_eq!(from_disk, in_memory);
}

#[test]
fn test_blank_queries_and_empty_corpora_return_nothing() {
    let corpus = physics_corpus();
    for model in ALL_MODELS {
        assert!(search("", &corpus, model).is_empty());
        assert!(search("   ", &corpus, model).is_empty());
        assert!(search("energy", &[], model).is_empty());
    }
}

#[test]
fn test_repeated_searches_are_identical() {
    let corpus = physics_corpus();
    for model in ALL_MODELS {
        assert_eq!(
            search("pressure wave", &corpus, model),
            search("pressure wave", &corpus, model)
        );
    }
}
