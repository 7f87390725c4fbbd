use clap::Args;
use std::path::PathBuf;

use super::constants::{
    DEFAULT_MATCH_SCORE, DEFAULT_MISMATCH_SCORE, DEFAULT_WORD_SIZE, DEFAULT_X_DROP,
};
use crate::seed::SeedPolicy;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Query FASTA; the first record is searched.
    #[arg(short, long)]
    pub query: PathBuf,
    /// Target FASTA; every record is scanned.
    #[arg(short, long)]
    pub target: PathBuf,
    #[arg(short, long, default_value_t = DEFAULT_WORD_SIZE)]
    pub word_size: usize,
    #[arg(long, default_value_t = DEFAULT_MATCH_SCORE)]
    pub match_score: i32,
    #[arg(long, default_value_t = DEFAULT_MISMATCH_SCORE)]
    pub mismatch_score: i32,
    /// Drop-off threshold for ungapped extension.
    #[arg(short = 'x', long, default_value_t = DEFAULT_X_DROP)]
    pub x_drop: i32,
    /// Cap on extension steps per direction (0 = unbounded).
    #[arg(long, default_value_t = 0)]
    pub max_extend: usize,
    /// How target matches bind to repeated query words.
    #[arg(long, value_enum, default_value_t = SeedPolicy::All)]
    pub seed_policy: SeedPolicy,
    #[arg(short = 'n', long, default_value_t = 0)]
    pub num_threads: usize,
    #[arg(short, long)]
    pub out: Option<PathBuf>,
    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,
}
