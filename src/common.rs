use anyhow::Result;
use std::cmp::Ordering;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// One reported alignment, ready for tabular output.
#[derive(Debug, Clone)]
pub struct Hit {
    pub query_id: String,
    pub target_id: String,
    pub identity: f64,
    pub length: usize,
    pub mismatch: usize,
    /// 1-based inclusive coordinates, as printed.
    pub q_start: usize,
    pub q_end: usize,
    pub t_start: usize,
    pub t_end: usize,
    /// Raw alignment score.
    pub score: i32,
    /// Target index (input order); used for ordering, not printed.
    pub t_idx: u32,
}

/// Output ordering for hits.
///
/// Order: score DESC → t_idx ASC → t_start ASC → t_end DESC
///        → q_start ASC → q_end DESC
pub fn compare_hits(a: &Hit, b: &Hit) -> Ordering {
    match b.score.cmp(&a.score) {
        Ordering::Equal => {}
        ord => return ord,
    }
    match a.t_idx.cmp(&b.t_idx) {
        Ordering::Equal => {}
        ord => return ord,
    }
    match a.t_start.cmp(&b.t_start) {
        Ordering::Equal => {}
        ord => return ord,
    }
    match b.t_end.cmp(&a.t_end) {
        Ordering::Equal => {}
        ord => return ord,
    }
    match a.q_start.cmp(&b.q_start) {
        Ordering::Equal => {}
        ord => return ord,
    }
    b.q_end.cmp(&a.q_end)
}

/// Write hits as tab-separated lines, to a file or stdout.
pub fn write_hits(hits: &[Hit], out_path: Option<&PathBuf>) -> Result<()> {
    let stdout = io::stdout();
    let mut writer: Box<dyn Write> = if let Some(path) = out_path {
        Box::new(BufWriter::new(File::create(path)?))
    } else {
        Box::new(BufWriter::new(stdout.lock()))
    };

    for hit in hits {
        writeln!(
            writer,
            "{}\t{}\t{:.3}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            hit.query_id,
            hit.target_id,
            hit.identity,
            hit.length,
            hit.mismatch,
            hit.q_start,
            hit.q_end,
            hit.t_start,
            hit.t_end,
            hit.score
        )?;
    }
    Ok(())
}
