// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy for corpus loading and model selection.
//!
//! Ranking itself is infallible by construction: empty inputs short-circuit
//! and every division site guards its denominator. Typed errors only arise
//! at the boundaries where untrusted input enters - reading a corpus file,
//! parsing its JSON, naming a model, or addressing a document by id.

/// Everything that can go wrong before a ranking call starts.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid corpus JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown retrieval model '{0}' (expected inverted, boolean, or bm25)")]
    UnknownModel(String),

    #[error("no document with id {0} in corpus")]
    UnknownDocument(u32),
}

pub type Result<T> = core::result::Result<T, Error>;
