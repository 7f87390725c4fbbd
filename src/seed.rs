//! Query word indexing and seed location.
//!
//! The query is decomposed into all overlapping fixed-length words, held in
//! a hash-keyed lookup so each target window costs one probe instead of a
//! scan of the word list. Matching windows become seeds, the anchors that
//! extension later grows into alignments.

use anyhow::{bail, Result};
use clap::ValueEnum;
use rustc_hash::FxHashMap;

/// How target matches bind to a query word that occurs more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SeedPolicy {
    /// One seed per matching query offset.
    All,
    /// Bind every match to the leftmost matching query offset only.
    First,
}

/// An exact word match between the query and one target sequence.
///
/// Invariant: `target[target_pos..target_pos+word_len]` equals
/// `query[query_pos..query_pos+word_len]` byte for byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seed {
    pub target_idx: usize,
    pub target_pos: usize,
    pub query_pos: usize,
    pub word_len: usize,
}

/// Word content mapped to every seed sharing that content.
pub type SeedMap = FxHashMap<Vec<u8>, Vec<Seed>>;

/// Pack a word over {A,C,G,T} into 2 bits per symbol.
///
/// Byte-exact: case variants and ambiguity codes are not packable, so a
/// query containing them is indexed with raw-bytes keys instead.
#[inline]
pub fn encode_word(seq: &[u8], start: usize, w: usize) -> Option<u64> {
    if w > 32 || start + w > seq.len() {
        return None;
    }
    let mut code: u64 = 0;
    for i in 0..w {
        let bits = match seq[start + i] {
            b'A' => 0,
            b'C' => 1,
            b'G' => 2,
            b'T' => 3,
            _ => return None,
        };
        code = (code << 2) | bits;
    }
    Some(code)
}

enum WordTable {
    /// 2-bit packed keys, for pure {A,C,G,T} queries with word size <= 32.
    Packed(FxHashMap<u64, Vec<u32>>),
    /// Raw-bytes keys for any other alphabet; identical match semantics.
    Bytes(FxHashMap<Vec<u8>, Vec<u32>>),
}

/// Hash-keyed index of all overlapping query words.
///
/// Offsets for a given word content are stored in ascending query order, so
/// the first entry is always the leftmost occurrence.
pub struct WordIndex {
    table: WordTable,
    word_size: usize,
    num_words: usize,
}

impl WordIndex {
    /// Build the index over a query sequence.
    ///
    /// A word size of zero or one exceeding the query length is a
    /// configuration error, rejected before any indexing happens.
    pub fn build(query: &[u8], word_size: usize) -> Result<Self> {
        if word_size == 0 {
            bail!("word size must be positive");
        }
        if word_size > query.len() {
            bail!(
                "word size {} exceeds query length {}",
                word_size,
                query.len()
            );
        }

        let num_words = query.len() - word_size + 1;
        let packable = word_size <= 32
            && query
                .iter()
                .all(|b| matches!(b, b'A' | b'C' | b'G' | b'T'));

        let table = if packable {
            let mut map: FxHashMap<u64, Vec<u32>> = FxHashMap::default();
            for pos in 0..num_words {
                if let Some(code) = encode_word(query, pos, word_size) {
                    map.entry(code).or_default().push(pos as u32);
                }
            }
            WordTable::Packed(map)
        } else {
            let mut map: FxHashMap<Vec<u8>, Vec<u32>> = FxHashMap::default();
            for pos in 0..num_words {
                map.entry(query[pos..pos + word_size].to_vec())
                    .or_default()
                    .push(pos as u32);
            }
            WordTable::Bytes(map)
        };

        Ok(Self {
            table,
            word_size,
            num_words,
        })
    }

    pub fn word_size(&self) -> usize {
        self.word_size
    }

    /// Number of overlapping words the query yields, repeats included.
    pub fn num_words(&self) -> usize {
        self.num_words
    }

    /// Number of distinct word contents in the table.
    pub fn num_distinct(&self) -> usize {
        match &self.table {
            WordTable::Packed(map) => map.len(),
            WordTable::Bytes(map) => map.len(),
        }
    }

    /// Query offsets whose word equals the given target window, leftmost
    /// first. Empty when no query word matches.
    fn offsets_for(&self, window: &[u8]) -> &[u32] {
        match &self.table {
            WordTable::Packed(map) => encode_word(window, 0, self.word_size)
                .and_then(|code| map.get(&code))
                .map(|v| v.as_slice())
                .unwrap_or(&[]),
            WordTable::Bytes(map) => {
                map.get(window).map(|v| v.as_slice()).unwrap_or(&[])
            }
        }
    }

    /// Scan one target sequence for exact word matches.
    ///
    /// Seeds come out in ascending target offset. Under `SeedPolicy::All`
    /// every matching query offset contributes its own seed; under
    /// `SeedPolicy::First` only the leftmost does. Targets shorter than the
    /// word size yield nothing.
    pub fn scan_target(
        &self,
        target_idx: usize,
        target: &[u8],
        policy: SeedPolicy,
    ) -> Vec<Seed> {
        let w = self.word_size;
        let mut seeds = Vec::new();
        if target.len() < w {
            return seeds;
        }

        for pos in 0..=(target.len() - w) {
            let offsets = self.offsets_for(&target[pos..pos + w]);
            let picked = match policy {
                SeedPolicy::All => offsets,
                SeedPolicy::First => &offsets[..offsets.len().min(1)],
            };
            for &q_pos in picked {
                seeds.push(Seed {
                    target_idx,
                    target_pos: pos,
                    query_pos: q_pos as usize,
                    word_len: w,
                });
            }
        }

        seeds
    }
}

/// Build the word-content → seeds map across the whole target collection,
/// targets in collection order, offsets ascending within each target.
pub fn locate_seeds<S: AsRef<[u8]>>(
    index: &WordIndex,
    targets: &[S],
    policy: SeedPolicy,
) -> SeedMap {
    let mut map: SeedMap = FxHashMap::default();
    for (t, target) in targets.iter().enumerate() {
        let target = target.as_ref();
        for seed in index.scan_target(t, target, policy) {
            let content = target[seed.target_pos..seed.target_pos + seed.word_len].to_vec();
            map.entry(content).or_default().push(seed);
        }
    }
    map
}
