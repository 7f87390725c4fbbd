//! Synthetic sequence source: random FASTA over a weighted alphabet.
//!
//! Each symbol is drawn independently by walking the cumulative frequency
//! table with a uniform variate. Seeded runs are fully reproducible.

use anyhow::{bail, Context, Result};
use bio::io::fasta;
use clap::Args;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Symbol frequency table over the nucleotide alphabet.
#[derive(Debug, Clone)]
pub struct FreqTable {
    entries: Vec<(u8, f64)>,
}

impl FreqTable {
    pub fn uniform() -> Self {
        Self {
            entries: vec![(b'A', 0.25), (b'C', 0.25), (b'G', 0.25), (b'T', 0.25)],
        }
    }

    /// Parse "0.25,0.25,0.25,0.25" as A,C,G,T frequencies.
    pub fn parse(spec: &str) -> Result<Self> {
        let freqs: Vec<f64> = spec
            .split(',')
            .map(|s| {
                s.trim()
                    .parse::<f64>()
                    .with_context(|| format!("invalid frequency {:?}", s))
            })
            .collect::<Result<_>>()?;
        if freqs.len() != 4 {
            bail!(
                "expected 4 comma-separated frequencies (A,C,G,T), got {}",
                freqs.len()
            );
        }
        if freqs.iter().any(|&f| f < 0.0) {
            bail!("frequencies must be non-negative");
        }
        let total: f64 = freqs.iter().sum();
        if (total - 1.0).abs() > 1e-6 {
            bail!("frequencies must sum to 1, got {}", total);
        }
        Ok(Self {
            entries: b"ACGT".iter().copied().zip(freqs).collect(),
        })
    }

    /// Draw one symbol for a uniform variate in [0, 1).
    fn draw(&self, r: f64) -> u8 {
        let mut acc = 0.0;
        for &(symbol, freq) in &self.entries {
            acc += freq;
            if r <= acc {
                return symbol;
            }
        }
        // Rounding can leave r above the accumulated total; the last
        // symbol absorbs it.
        self.entries[self.entries.len() - 1].0
    }

    pub fn sample(&self, rng: &mut StdRng, length: usize) -> Vec<u8> {
        (0..length).map(|_| self.draw(rng.gen::<f64>())).collect()
    }
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Number of sequences to emit.
    #[arg(short, long, default_value_t = 1)]
    pub count: usize,
    /// Length of each sequence.
    #[arg(short, long, default_value_t = 2000)]
    pub length: usize,
    /// A,C,G,T frequencies, comma separated.
    #[arg(long, default_value = "0.25,0.25,0.25,0.25")]
    pub freq: String,
    /// RNG seed; omit for a fresh one.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Sequence id prefix.
    #[arg(long, default_value = "seq")]
    pub prefix: String,
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let table = FreqTable::parse(&args.freq)?;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let stdout = io::stdout();
    let writer: Box<dyn Write> = if let Some(path) = &args.out {
        Box::new(BufWriter::new(File::create(path).with_context(|| {
            format!("Failed to create {}", path.display())
        })?))
    } else {
        Box::new(BufWriter::new(stdout.lock()))
    };
    let mut fasta_writer = fasta::Writer::new(writer);

    for n in 0..args.count {
        let seq = table.sample(&mut rng, args.length);
        let id = format!("{}{}", args.prefix, n + 1);
        fasta_writer.write(&id, None, &seq)?;
    }
    Ok(())
}
