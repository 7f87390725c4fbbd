//! Tests for greedy drop-off extension.

use seedex::extend::{extend_all, extend_seed, ExtendParams, Msp};
use seedex::scoring::ScoringScheme;
use seedex::seed::{locate_seeds, Seed, SeedPolicy, WordIndex};

fn params(match_score: i32, mismatch_score: i32, x_drop: i32) -> ExtendParams {
    ExtendParams {
        scoring: ScoringScheme::new(match_score, mismatch_score).unwrap(),
        x_drop,
        max_extend: 0,
    }
}

#[test]
fn test_homopolymer_extension_capped_by_query_length() {
    // 12-symbol query inside a 16-symbol target: the seed at the origin
    // cannot extend left, and right extension halts the moment the query
    // runs out, leaving the seed window itself as the alignment
    let query = b"AAAAAAAAAAAA";
    let target = b"AAAAAAAAAAAAAAAA";
    let seed = Seed {
        target_idx: 0,
        target_pos: 0,
        query_pos: 0,
        word_len: 12,
    };

    let msp = extend_seed(&seed, query, target, &ExtendParams::default());
    assert_eq!(
        msp,
        Msp {
            target_idx: 0,
            target_start: 0,
            target_end: 12,
            query_start: 0,
            query_end: 12,
            score: 12 * 5,
        }
    );
}

#[test]
fn test_extension_grows_both_directions() {
    // Seed in the middle of identical sequences swallows them whole
    let query = b"ACGTACGTACGT";
    let target = b"ACGTACGTACGT";
    let seed = Seed {
        target_idx: 0,
        target_pos: 4,
        query_pos: 4,
        word_len: 4,
    };

    let msp = extend_seed(&seed, query, target, &ExtendParams::default());
    assert_eq!(msp.target_start, 0);
    assert_eq!(msp.target_end, 12);
    assert_eq!(msp.query_start, 0);
    assert_eq!(msp.query_end, 12);
    assert_eq!(msp.score, 12 * 5);
}

#[test]
fn test_drop_off_stops_extension_with_room_left() {
    // After the seed the target diverges completely; the running score
    // falls from 30 by 4 per step and extension must stop at the drop-off
    // (30 - 20), with positions remaining on both sequences
    let query = b"AAAAAATTTTTT";
    let target = b"AAAAAACCCCCCCCCC";
    let seed = Seed {
        target_idx: 0,
        target_pos: 0,
        query_pos: 0,
        word_len: 6,
    };

    let msp = extend_seed(&seed, query, target, &params(5, -4, 20));
    assert_eq!(msp.score, 30);
    assert_eq!((msp.target_start, msp.target_end), (0, 6));
    assert_eq!((msp.query_start, msp.query_end), (0, 6));
}

#[test]
fn test_tie_does_not_move_bounds() {
    // With match +4 / mismatch -4, a mismatch followed by a match brings
    // the running score back to exactly the maximum; the bound must stay
    // on the seed because ties are not improvements
    let query = b"AAGA";
    let target = b"AATA";
    let seed = Seed {
        target_idx: 0,
        target_pos: 0,
        query_pos: 0,
        word_len: 2,
    };

    let msp = extend_seed(&seed, query, target, &params(4, -4, 20));
    assert_eq!(msp.score, 8);
    assert_eq!((msp.target_start, msp.target_end), (0, 2));
    assert_eq!((msp.query_start, msp.query_end), (0, 2));
}

#[test]
fn test_recovery_after_dip_extends_through_mismatch() {
    // A single mismatch inside otherwise identical sequences is absorbed:
    // the score dips, recovers above the old maximum, and the bounds jump
    // over the mismatch
    let query = b"ACGTACGTACGT";
    let target = b"ACGTACCTACGT";
    let seed = Seed {
        target_idx: 0,
        target_pos: 0,
        query_pos: 0,
        word_len: 4,
    };

    let msp = extend_seed(&seed, query, target, &ExtendParams::default());
    assert_eq!(msp.target_start, 0);
    assert_eq!(msp.target_end, 12);
    assert_eq!(msp.score, 11 * 5 - 4);
}

#[test]
fn test_seed_at_end_extends_left_only() {
    let query = b"TTTTACGT";
    let target = b"GGGGACGT";
    let seed = Seed {
        target_idx: 0,
        target_pos: 4,
        query_pos: 4,
        word_len: 4,
    };

    let msp = extend_seed(&seed, query, target, &ExtendParams::default());
    // No room on the right; the left symbols all mismatch, so the seed
    // window stands
    assert_eq!((msp.target_start, msp.target_end), (4, 8));
    assert_eq!((msp.query_start, msp.query_end), (4, 8));
    assert_eq!(msp.score, 4 * 5);
}

#[test]
fn test_max_extend_caps_each_direction() {
    let query = b"ACGTACGTACGTACGT";
    let target = b"ACGTACGTACGTACGT";
    let seed = Seed {
        target_idx: 0,
        target_pos: 8,
        query_pos: 8,
        word_len: 4,
    };

    let p = ExtendParams {
        max_extend: 2,
        ..Default::default()
    };
    let msp = extend_seed(&seed, query, target, &p);
    assert_eq!((msp.target_start, msp.target_end), (6, 14));
    assert_eq!(msp.score, 8 * 5);
}

#[test]
fn test_msp_invariants_hold_over_seed_map() {
    let query = b"ACGTACGTACAGTT";
    let targets: Vec<&[u8]> = vec![b"GGACGTACGTAGG", b"ACAGTTACGT", b"TTTTTTTT"];
    let w = 4;
    let index = WordIndex::build(query, w).unwrap();
    let seeds = locate_seeds(&index, &targets, SeedPolicy::All);
    let msps = extend_all(&seeds, query, &targets, &ExtendParams::default());

    let seed_count: usize = seeds.values().map(|v| v.len()).sum();
    assert_eq!(msps.len(), seed_count, "one alignment per seed");

    for msp in &msps {
        // Equal-length windows within bounds
        assert_eq!(msp.target_end - msp.target_start, msp.query_end - msp.query_start);
        assert!(msp.target_end <= targets[msp.target_idx].len());
        assert!(msp.query_end <= query.len());
        assert!(msp.len() >= w);
    }

    // Containment: each seed's alignment covers the seed span
    for list in seeds.values() {
        for seed in list {
            let msp = extend_seed(
                seed,
                query,
                targets[seed.target_idx],
                &ExtendParams::default(),
            );
            assert!(msp.target_start <= seed.target_pos);
            assert!(msp.target_end >= seed.target_pos + w);
            assert!(msp.query_start <= seed.query_pos);
            assert!(msp.query_end >= seed.query_pos + w);
        }
    }
}

#[test]
fn test_extend_all_on_empty_map_is_empty() {
    let seeds = seedex::seed::SeedMap::default();
    let targets: Vec<&[u8]> = Vec::new();
    assert!(extend_all(&seeds, b"ACGT", &targets, &ExtendParams::default()).is_empty());
}
