//! Tests for output ordering.

use seedex::common::{compare_hits, Hit};
use std::cmp::Ordering;

fn hit(score: i32, t_idx: u32, t_start: usize, t_end: usize) -> Hit {
    Hit {
        query_id: "q".to_string(),
        target_id: format!("t{}", t_idx),
        identity: 100.0,
        length: t_end - t_start,
        mismatch: 0,
        q_start: 1,
        q_end: t_end - t_start,
        t_start,
        t_end,
        score,
        t_idx,
    }
}

#[test]
fn test_higher_score_sorts_first() {
    let a = hit(80, 1, 10, 20);
    let b = hit(60, 0, 1, 11);
    assert_eq!(compare_hits(&a, &b), Ordering::Less);
    assert_eq!(compare_hits(&b, &a), Ordering::Greater);
}

#[test]
fn test_score_tie_breaks_on_target_index_then_coordinates() {
    let a = hit(60, 0, 5, 15);
    let b = hit(60, 1, 1, 11);
    assert_eq!(compare_hits(&a, &b), Ordering::Less, "lower target index first");

    let c = hit(60, 0, 1, 11);
    let d = hit(60, 0, 5, 15);
    assert_eq!(compare_hits(&c, &d), Ordering::Less, "lower target start first");

    // Same start: longer alignment (larger end) first
    let e = hit(60, 0, 1, 20);
    let f = hit(60, 0, 1, 11);
    assert_eq!(compare_hits(&e, &f), Ordering::Less);
}

#[test]
fn test_sort_is_deterministic() {
    let mut hits = vec![
        hit(60, 1, 0, 10),
        hit(80, 0, 3, 13),
        hit(60, 0, 7, 17),
        hit(60, 0, 2, 12),
    ];
    hits.sort_by(compare_hits);
    let order: Vec<(i32, u32, usize)> =
        hits.iter().map(|h| (h.score, h.t_idx, h.t_start)).collect();
    assert_eq!(order, vec![(80, 0, 3), (60, 0, 2), (60, 0, 7), (60, 1, 0)]);
}
