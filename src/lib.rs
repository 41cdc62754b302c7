//! Query-expanding document retrieval over small in-memory corpora.
//!
//! This crate ranks a corpus of documents against a free-text query. The
//! query is first expanded into a set of variants (synonyms substituted in
//! place, morphological prefix/suffix forms), then every document is scored
//! against the whole variant set under one of three retrieval models.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  expand.rs  │────▶│  rank/*.rs   │────▶│   types.rs   │
//! │ (synonyms,  │     │  (inverted,  │     │  (Document,  │
//! │  affixes)   │     │boolean, bm25)│     │ SearchResult)│
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │                    │
//!        └────────┬───────────┘
//!                 ▼
//!        ┌──────────────────┐     ┌───────────────┐
//!        │   tokenize.rs    │◀────│ similarity.rs │
//!        │ (plain + strict) │     │ (cosine, key  │
//!        └──────────────────┘     │    phrases)   │
//!                                 └───────────────┘
//! ```
//!
//! # Retrieval models
//!
//! | Model      | Match unit             | Character                      |
//! |------------|------------------------|--------------------------------|
//! | `inverted` | exact body token       | cheap, recall via expansion    |
//! | `boolean`  | substring containment  | forgiving, coverage in `[0,1]` |
//! | `bm25`     | exact token, tf·idf    | relevance-ranked, the default  |
//!
//! # Usage
//!
//! ```ignore
//! use trawl::{load_corpus, search, RetrievalModel};
//!
//! let corpus = load_corpus("corpus.json")?;
//! let results = search("energy flow", &corpus, RetrievalModel::Bm25);
//! for hit in results.iter().take(10) {
//!     println!("{:7.3}  {}", hit.score, hit.title);
//! }
//! ```

// Module declarations
mod corpus;
mod error;
mod expand;
mod rank;
mod similarity;
pub mod testing;
mod tokenize;
mod types;

// Re-exports for public API
pub use corpus::load_corpus;
pub use error::{Error, Result};
pub use expand::{expand, related_terms, suggest};
pub use rank::{search, B, K1, MAX_TERMS};
pub use similarity::{cosine_similarity, key_phrases, related_documents, term_frequencies};
pub use tokenize::{tokenize, tokenize_strict};
pub use types::{Document, RetrievalModel, SearchResult};
