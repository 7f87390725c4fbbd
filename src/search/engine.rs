//! Search driver: FASTA input to sorted tabular output.
//!
//! Targets are scanned and extended in parallel; every hit carries its
//! target index, and the final sort makes output order independent of
//! scheduling.

use anyhow::{bail, Context, Result};
use bio::io::fasta;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use crate::common::{compare_hits, write_hits, Hit};
use crate::extend::{extend_seed, ExtendParams, Msp};
use crate::scoring::ScoringScheme;
use crate::seed::WordIndex;

use super::args::SearchArgs;

pub fn run(args: SearchArgs) -> Result<()> {
    let num_threads = if args.num_threads == 0 {
        num_cpus::get()
    } else {
        args.num_threads
    };

    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
        .context("Failed to build thread pool")?;

    // Validate configuration before touching any input.
    let scoring = ScoringScheme::new(args.match_score, args.mismatch_score)?;
    if args.x_drop <= 0 {
        bail!("drop-off threshold must be positive, got {}", args.x_drop);
    }
    let params = ExtendParams {
        scoring,
        x_drop: args.x_drop,
        max_extend: args.max_extend,
    };

    let (query, query_id, targets, target_ids) = read_sequences(&args)?;
    if targets.is_empty() {
        return Ok(());
    }

    let index = WordIndex::build(&query, args.word_size)?;
    if args.verbose {
        eprintln!(
            "[INFO] Indexed {} words ({} distinct) at word size {}",
            index.num_words(),
            index.num_distinct(),
            args.word_size
        );
    }

    let bar = ProgressBar::new(targets.len() as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}")
            .unwrap(),
    );

    let mut hits: Vec<Hit> = targets
        .par_iter()
        .enumerate()
        .map(|(t_idx, target)| {
            let seeds = index.scan_target(t_idx, target, args.seed_policy);
            let target_hits: Vec<Hit> = seeds
                .iter()
                .map(|seed| {
                    let msp = extend_seed(seed, &query, target, &params);
                    build_hit(&query_id, &target_ids[t_idx], &query, target, &msp)
                })
                .collect();
            bar.inc(1);
            target_hits
        })
        .flatten()
        .collect();
    bar.finish_and_clear();

    if args.verbose {
        eprintln!(
            "[INFO] {} alignments across {} targets",
            hits.len(),
            targets.len()
        );
    }

    hits.sort_by(compare_hits);
    write_hits(&hits, args.out.as_ref())?;
    Ok(())
}

/// Convert one alignment into a printable hit.
///
/// Identity and mismatch counts come from re-walking the aligned windows;
/// coordinates switch to the 1-based inclusive output convention.
fn build_hit(query_id: &str, target_id: &str, query: &[u8], target: &[u8], msp: &Msp) -> Hit {
    let t_window = &target[msp.target_start..msp.target_end];
    let q_window = &query[msp.query_start..msp.query_end];
    let matches = t_window
        .iter()
        .zip(q_window.iter())
        .filter(|(a, b)| a == b)
        .count();
    let length = msp.len();
    let identity = if length == 0 {
        0.0
    } else {
        100.0 * matches as f64 / length as f64
    };

    Hit {
        query_id: query_id.to_string(),
        target_id: target_id.to_string(),
        identity,
        length,
        mismatch: length - matches,
        q_start: msp.query_start + 1,
        q_end: msp.query_end,
        t_start: msp.target_start + 1,
        t_end: msp.target_end,
        score: msp.score,
        t_idx: msp.target_idx as u32,
    }
}

/// Read the query (first record) and the full target collection.
fn read_sequences(args: &SearchArgs) -> Result<(Vec<u8>, String, Vec<Vec<u8>>, Vec<String>)> {
    if args.verbose {
        eprintln!("Reading query & target...");
    }

    let query_reader = fasta::Reader::from_file(&args.query)
        .with_context(|| format!("Failed to open query {}", args.query.display()))?;
    let query_record = query_reader
        .records()
        .filter_map(|r| r.ok())
        .next()
        .context("query FASTA contains no records")?;
    let query_id = query_record
        .id()
        .split_whitespace()
        .next()
        .unwrap_or("unknown")
        .to_string();

    let target_reader = fasta::Reader::from_file(&args.target)
        .with_context(|| format!("Failed to open target {}", args.target.display()))?;
    let mut targets = Vec::new();
    let mut target_ids = Vec::new();
    for record in target_reader.records().filter_map(|r| r.ok()) {
        target_ids.push(
            record
                .id()
                .split_whitespace()
                .next()
                .unwrap_or("unknown")
                .to_string(),
        );
        targets.push(record.seq().to_vec());
    }

    Ok((query_record.seq().to_vec(), query_id, targets, target_ids))
}
