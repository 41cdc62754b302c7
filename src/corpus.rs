// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus ingestion from JSON files.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::types::Document;

/// Load a corpus from a JSON array of documents.
///
/// The file holds the serialized form of [`Document`]:
/// `[{"id": 1, "title": "...", "body": "...", "bibliography": "..."}]`
/// with `bibliography` optional. Ids are taken as supplied; uniqueness is
/// not checked, and a duplicated id simply ranks twice.
pub fn load_corpus(path: impl AsRef<Path>) -> Result<Vec<Document>> {
    let raw = fs::read_to_string(path)?;
    let corpus = serde_json::from_str(&raw)?;
    Ok(corpus)
}
