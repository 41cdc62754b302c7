use std::collections::HashSet;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use trawl::{
    expand, key_phrases, load_corpus, related_documents, related_terms, search, suggest, tokenize,
    Error, RetrievalModel,
};

mod cli;
use cli::display;
use cli::{Cli, Commands};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Search {
            corpus,
            query,
            model,
            limit,
        } => run_search(&corpus, &query, &model, limit),
        Commands::Expand { query } => run_expand(&query),
        Commands::Suggest { query } => run_suggest(&query),
        Commands::Related {
            corpus,
            id,
            limit,
            threshold,
        } => run_related(&corpus, id, limit, threshold),
        Commands::Stats { corpus } => run_stats(&corpus),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// Rank a corpus file against a query and print the top hits
fn run_search(corpus_path: &str, query: &str, model: &str, limit: usize) -> trawl::Result<()> {
    let model: RetrievalModel = model.parse()?;
    let corpus = load_corpus(corpus_path)?;
    let results = search(query, &corpus, model);

    display::section_top("SEARCH");
    display::row(&format!(
        "  Query:   {}",
        display::themed(display::WHITE, &[display::BOLD], query)
    ));
    display::row(&format!("  Model:   {}", model.as_str()));
    display::row(&format!(
        "  Corpus:  {} ({} documents)",
        display::truncate_path(corpus_path, 40),
        corpus.len()
    ));
    display::section_mid(&format!("RESULTS ({})", results.len()));
    if results.is_empty() {
        display::row("  no matching documents");
    }
    for hit in results.iter().take(limit) {
        display::row(&format!(
            "  {}  {}  {}",
            display::score_value(hit.score),
            display::pad_right(&display::truncate_text(&hit.title, 48), 48),
            display::styled(&[display::DIM], &format!("#{}", hit.doc_id)),
        ));
        display::row(&format!(
            "           {}",
            display::styled(&[display::DIM], &display::truncate_text(&hit.body, 64)),
        ));
    }
    display::section_bot();
    Ok(())
}

/// Print every variant a query expands into
fn run_expand(query: &str) -> trawl::Result<()> {
    let variants = expand(query);

    display::section_top("EXPANSION");
    display::row(&format!(
        "  Query:     {}",
        display::themed(display::WHITE, &[display::BOLD], query)
    ));
    display::row(&format!("  Variants:  {}", variants.len()));
    display::section_mid("VARIANTS");
    for variant in &variants {
        display::row(&format!("  {}", display::truncate_text(variant, 76)));
    }
    let related = related_terms(query);
    if !related.is_empty() {
        display::section_mid("RELATED TERMS");
        display::row(&format!(
            "  {}",
            display::truncate_text(&related.join(", "), 76)
        ));
    }
    display::section_bot();
    Ok(())
}

/// Print reformulation suggestions for a query
fn run_suggest(query: &str) -> trawl::Result<()> {
    let suggestions = suggest(query);

    display::section_top("SUGGESTIONS");
    display::row(&format!(
        "  Query:  {}",
        display::themed(display::WHITE, &[display::BOLD], query)
    ));
    display::section_mid(&format!("REFORMULATIONS ({})", suggestions.len()));
    for suggestion in &suggestions {
        display::row(&format!("  {}", display::truncate_text(suggestion, 76)));
    }
    display::section_bot();
    Ok(())
}

/// Find documents similar to one already in the corpus
fn run_related(corpus_path: &str, id: u32, limit: usize, threshold: f64) -> trawl::Result<()> {
    let corpus = load_corpus(corpus_path)?;
    let probe = corpus
        .iter()
        .find(|doc| doc.id == id)
        .ok_or(Error::UnknownDocument(id))?;

    let related = related_documents(&probe.body, &corpus, threshold);
    // The probe matches itself with similarity 1.0; drop it from the output
    let neighbors: Vec<_> = related
        .iter()
        .filter(|hit| hit.doc_id != id)
        .take(limit)
        .collect();

    display::section_top("RELATED");
    display::row(&format!(
        "  Probe:      {}  {}",
        display::themed(display::WHITE, &[display::BOLD], &probe.title),
        display::styled(&[display::DIM], &format!("#{}", probe.id)),
    ));
    display::row(&format!("  Threshold:  {:.2}", threshold));
    display::section_mid(&format!("DOCUMENTS ({})", neighbors.len()));
    if neighbors.is_empty() {
        display::row("  nothing above the threshold");
    }
    for hit in &neighbors {
        display::row(&format!(
            "  {}  {}  {}",
            display::score_value(hit.score),
            display::pad_right(&display::truncate_text(&hit.title, 48), 48),
            display::styled(&[display::DIM], &format!("#{}", hit.doc_id)),
        ));
    }
    display::section_bot();
    Ok(())
}

/// Summarize a corpus file: size, vocabulary, key phrases
fn run_stats(corpus_path: &str) -> trawl::Result<()> {
    let corpus = load_corpus(corpus_path)?;
    let file_size = std::fs::metadata(corpus_path)?.len() as usize;

    let mut vocabulary: HashSet<String> = HashSet::new();
    let mut token_total = 0usize;
    let mut combined = String::new();
    for doc in &corpus {
        let tokens = tokenize(&doc.body);
        token_total += tokens.len();
        vocabulary.extend(tokens);
        combined.push_str(&doc.body);
        combined.push(' ');
    }
    let avg_tokens = if corpus.is_empty() {
        0.0
    } else {
        token_total as f64 / corpus.len() as f64
    };
    let phrases = key_phrases(&combined, 5);

    display::double_header();
    display::title("CORPUS STATISTICS");
    display::double_divider();
    display::row_double(&format!(
        "  File:             {}",
        display::truncate_path(corpus_path, 56)
    ));
    display::row_double(&format!(
        "  Size:             {}",
        display::format_size(file_size)
    ));
    display::row_double(&format!("  Documents:        {}", corpus.len()));
    display::row_double(&format!("  Distinct tokens:  {}", vocabulary.len()));
    display::row_double(&format!(
        "  Avg body length:  {:.1} tokens",
        avg_tokens
    ));
    display::row_double(&format!(
        "  Key phrases:      {}",
        display::truncate_text(&phrases.join(", "), 58)
    ));
    display::double_footer();
    Ok(())
}
