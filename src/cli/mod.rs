// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the trawl command-line interface.
//!
//! Five subcommands: `search` ranks a corpus against a query, `expand`
//! prints the variant set a query grows into, `suggest` prints query
//! reformulations, `related` finds documents similar to one already in
//! the corpus, and `stats` summarizes a corpus file.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "trawl",
    about = "Query-expanding document retrieval for small corpora",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank a corpus against a query
    Search {
        /// Path to corpus JSON file
        corpus: String,

        /// Search query
        query: String,

        /// Retrieval model: inverted, boolean, or bm25
        #[arg(short, long, default_value = "bm25")]
        model: String,

        /// Maximum number of results to display
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Show the expansion set for a query
    Expand {
        /// Query to expand
        query: String,
    },

    /// Print reformulation suggestions for a query
    Suggest {
        /// Query to reformulate
        query: String,
    },

    /// Find documents similar to one already in the corpus
    Related {
        /// Path to corpus JSON file
        corpus: String,

        /// Id of the probe document
        id: u32,

        /// Maximum number of documents to display
        #[arg(short, long, default_value = "5")]
        limit: usize,

        /// Minimum cosine similarity to report
        #[arg(short, long, default_value = "0.3")]
        threshold: f64,
    },

    /// Summarize a corpus file
    Stats {
        /// Path to corpus JSON file
        corpus: String,
    },
}
