//! Batch pipeline: configuration -> seed words -> engine -> output file

use std::path::PathBuf;
use tracing::info;

use crate::affixes::{self, Affixes};
use crate::config::RunConfig;
use crate::errors::AppError;
use crate::metrics::Metrics;
use crate::mutator::MutationEngine;
use crate::padding::{PaddingList, Placement};
use crate::writer::write_results;

pub const BANNER: &str = "\nbrutekit - Password List Generator\n\
A powerful mutation-based wordlist generator\n\
For security testing and password analysis";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub words: usize,
    pub mutations: usize,
    pub output: PathBuf,
}

/// Padding list for a run: the built-in defaults unless `-cpo`, then `-ap`.
pub fn build_paddings(cfg: &RunConfig) -> Result<PaddingList, AppError> {
    let mut paddings = if cfg.custom_paddings_only {
        PaddingList::empty()
    } else {
        PaddingList::load()?
    };
    let added = paddings.append(&cfg.append_padding);
    info!(total = paddings.len(), custom = added, "padding list ready");
    Ok(paddings)
}

pub fn build_affixes(cfg: &RunConfig) -> Result<Affixes, AppError> {
    let numbers = affixes::numbering(cfg.append_numbering, cfg.numbering_limit);
    let years = affixes::parse_years(&cfg.years)?;
    Ok(Affixes::new(numbers, years))
}

pub fn build_engine(cfg: &RunConfig) -> Result<MutationEngine, AppError> {
    let placement = Placement::from_flags(cfg.common_paddings_before, cfg.common_paddings_after);
    Ok(MutationEngine::new(build_paddings(cfg)?)
        .with_placement(placement)
        .with_affixes(build_affixes(cfg)?))
}

/// Mutate every seed word into one accumulator, in input order.
pub fn generate_all(engine: &MutationEngine, words: &[&str], metrics: &Metrics) -> Vec<String> {
    let mut acc = Vec::new();
    for word in words {
        let before = acc.len();
        acc = engine.generate_into(word, acc);
        metrics.words_processed.inc();
        metrics.mutations_generated.inc_by((acc.len() - before) as u64);
    }
    acc
}

/// Generate and write the wordlist described by `cfg`.
pub fn run(cfg: &RunConfig, metrics: &Metrics) -> Result<RunSummary, AppError> {
    let engine = build_engine(cfg)?;
    let words = cfg.seed_words();
    info!(words = words.len(), "generating mutations");

    let mutations = generate_all(&engine, &words, metrics);
    write_results(&cfg.output, &mutations)?;

    Ok(RunSummary {
        words: metrics.words_processed.get() as usize,
        mutations: metrics.mutations_generated.get() as usize,
        output: cfg.output.clone(),
    })
}
