//! Shared test utilities and fixtures.

#![allow(dead_code)]

use trawl::{Document, SearchResult};

// Re-export canonical test utilities from trawl::testing
pub use trawl::testing::{make_corpus, make_doc};

// ============================================================================
// FIXTURE CORPORA
// ============================================================================

/// Six-document physics corpus used across the search suites.
///
/// Bodies are short so expected scores stay hand-checkable.
pub fn physics_corpus() -> Vec<Document> {
    vec![
        make_doc(
            1,
            "Energy Transfer",
            "the flow of energy between systems drives every process",
        ),
        make_doc(
            2,
            "Kinematics",
            "a study of motion and velocity in one dimension",
        ),
        make_doc(
            3,
            "Thermodynamics",
            "heat is energy in transit and entropy always grows",
        ),
        make_doc(
            4,
            "Fluid Dynamics",
            "water flow through a pipe depends on pressure and viscosity",
        ),
        make_doc(
            5,
            "Optics",
            "light bends when it crosses between transparent materials",
        ),
        make_doc(
            6,
            "Acoustics",
            "sound is a pressure wave moving through a medium",
        ),
    ]
}

/// Write documents to a temporary JSON corpus file.
pub fn corpus_file(docs: &[Document]) -> tempfile::NamedTempFile {
    let file = tempfile::NamedTempFile::new().expect("create temp corpus file");
    let json = serde_json::to_string_pretty(docs).expect("serialize corpus");
    std::fs::write(file.path(), json).expect("write corpus file");
    file
}

// ============================================================================
// INVARIANT HELPERS
// ============================================================================

/// Assert the invariants every ranking call must uphold: descending scores,
/// finite positive values, and ids drawn from the corpus.
pub fn assert_results_well_formed(results: &[SearchResult], corpus: &[Document]) {
    for i in 1..results.len() {
        assert!(
            results[i - 1].score >= results[i].score,
            "INVARIANT VIOLATED: results not sorted at {}: {} < {}",
            i,
            results[i - 1].score,
            results[i].score
        );
    }
    for result in results {
        assert!(
            result.score.is_finite() && result.score > 0.0,
            "INVARIANT VIOLATED: score {} is not finite and positive",
            result.score
        );
        assert!(
            corpus.iter().any(|doc| doc.id == result.doc_id),
            "INVARIANT VIOLATED: doc_id {} not present in the corpus",
            result.doc_id
        );
    }
}
