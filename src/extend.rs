//! Greedy bidirectional seed extension with drop-off termination.
//!
//! Each seed is grown left and then right one symbol pair at a time.
//! Extension in a direction halts when either sequence runs out or the
//! running score falls more than the drop-off threshold below the best
//! score seen, which bounds the work per seed without a dynamic-programming
//! matrix. The reported alignment is a greedy local optimum, not
//! necessarily the best alignment through that seed.

use crate::scoring::ScoringScheme;
use crate::search::constants::DEFAULT_X_DROP;
use crate::seed::{Seed, SeedMap};

/// Parameters controlling seed extension.
#[derive(Debug, Clone, Copy)]
pub struct ExtendParams {
    pub scoring: ScoringScheme,
    /// Stop extending once the running score falls this far below the best.
    pub x_drop: i32,
    /// Cap on extension steps per direction; 0 is unbounded.
    pub max_extend: usize,
}

impl Default for ExtendParams {
    fn default() -> Self {
        Self {
            scoring: ScoringScheme::default(),
            x_drop: DEFAULT_X_DROP,
            max_extend: 0,
        }
    }
}

/// A maximal scoring pair: the best-scoring ungapped alignment reachable
/// from one seed by single-step extension.
///
/// Bounds are half-open, always span equal lengths on both sequences, and
/// always contain the originating seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Msp {
    pub target_idx: usize,
    pub target_start: usize,
    pub target_end: usize,
    pub query_start: usize,
    pub query_end: usize,
    pub score: i32,
}

impl Msp {
    /// Alignment length; the target and query windows are equally long.
    pub fn len(&self) -> usize {
        self.target_end - self.target_start
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Extend one seed left, then right, stopping on drop-off.
///
/// Bounds only move on strict score improvement: a tie leaves the best
/// alignment where it was.
pub fn extend_seed(
    seed: &Seed,
    query: &[u8],
    target: &[u8],
    params: &ExtendParams,
) -> Msp {
    let Seed {
        target_idx,
        target_pos: i,
        query_pos: j,
        word_len: w,
    } = *seed;
    let scoring = params.scoring;
    let x = params.x_drop;

    let mut current = scoring.score_window(&target[i..i + w], &query[j..j + w]);
    let mut max = current;
    let (mut t_start, mut t_end) = (i, i + w);
    let (mut q_start, mut q_end) = (j, j + w);

    // Left of the seed, one symbol pair per step.
    let max_left = i.min(j);
    let mut off = 1;
    while off <= max_left && current > max - x {
        if params.max_extend != 0 && off > params.max_extend {
            break;
        }
        current += scoring.score_symbol(target[i - off], query[j - off]);
        if current > max {
            max = current;
            t_start = i - off;
            q_start = j - off;
        }
        off += 1;
    }

    // Right of the best bounds so far, restarting from the best score.
    current = max;
    let mut ti = t_end;
    let mut qj = q_end;
    let mut steps = 0;
    while ti < target.len() && qj < query.len() && current > max - x {
        if params.max_extend != 0 && steps >= params.max_extend {
            break;
        }
        current += scoring.score_symbol(target[ti], query[qj]);
        if current > max {
            max = current;
            t_end = ti + 1;
            q_end = qj + 1;
        }
        ti += 1;
        qj += 1;
        steps += 1;
    }

    Msp {
        target_idx,
        target_start: t_start,
        target_end: t_end,
        query_start: q_start,
        query_end: q_end,
        score: max,
    }
}

/// Extend every seed in the map; one alignment per seed, never
/// deduplicated, even when two seeds converge on the same region.
pub fn extend_all<S: AsRef<[u8]>>(
    seeds: &SeedMap,
    query: &[u8],
    targets: &[S],
    params: &ExtendParams,
) -> Vec<Msp> {
    let mut msps = Vec::new();
    for seed_list in seeds.values() {
        for seed in seed_list {
            let target = targets[seed.target_idx].as_ref();
            msps.push(extend_seed(seed, query, target, params));
        }
    }
    msps
}
