//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::Document;

/// Create a test document with an empty bibliography.
///
/// This is the canonical implementation used across all tests.
pub fn make_doc(id: u32, title: &str, body: &str) -> Document {
    Document {
        id,
        title: title.to_string(),
        body: body.to_string(),
        bibliography: String::new(),
    }
}

/// Create a corpus from bare body strings. Ids count up from 1 and titles
/// follow them ("Doc 1", "Doc 2", ...).
pub fn make_corpus(bodies: &[&str]) -> Vec<Document> {
    bodies
        .iter()
        .enumerate()
        .map(|(i, body)| make_doc(i as u32 + 1, &format!("Doc {}", i + 1), body))
        .collect()
}
