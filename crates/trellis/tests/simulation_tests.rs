//! Simulation tests: ball movement, switch flips, rendering

use pretty_assertions::assert_eq;
use trellis::*;

use trellis::Switch::{Left as L, Right as R};

// ═══════════════════════════════════════════════════════════════════════
// Single Drops
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_drop_a_on_fresh_trellis() {
    let mut trellis = Trellis::default();
    trellis.drop_ball('a').unwrap();

    assert_eq!(
        trellis.configuration(),
        vec![vec![R, L, L], vec![L, L], vec![R, L, L]]
    );
    assert_eq!(trellis.ball(), None);
    assert_eq!(trellis.ball_path(), &[(0, 0), (2, 0)]);
}

#[test]
fn test_drop_sequence_a_b_c() {
    let mut trellis = Trellis::default();

    trellis.drop_ball('a').unwrap();
    trellis.drop_ball('b').unwrap();
    assert_eq!(
        trellis.configuration(),
        vec![vec![R, R, L], vec![R, L], vec![L, L, L]]
    );

    trellis.drop_ball('c').unwrap();
    assert_eq!(
        trellis.configuration(),
        vec![vec![R, R, R], vec![R, R], vec![L, R, L]]
    );
}

#[test]
fn test_drop_balls_matches_single_drops() {
    let mut one_by_one = Trellis::default();
    for letter in "abc".chars() {
        one_by_one.drop_ball(letter).unwrap();
    }

    let mut all_at_once = Trellis::default();
    all_at_once.drop_balls("abc").unwrap();

    assert_eq!(one_by_one.configuration(), all_at_once.configuration());
}

#[test]
fn test_uppercase_letters_are_accepted() {
    let mut lower = Trellis::default();
    lower.drop_balls("acb").unwrap();

    let mut upper = Trellis::default();
    upper.drop_balls("ACB").unwrap();

    assert_eq!(lower, upper);
}

#[test]
fn test_invalid_word_leaves_trellis_untouched() {
    let mut trellis = Trellis::default();
    assert!(matches!(
        trellis.drop_balls("abd"),
        Err(TrellisError::InvalidAction { .. })
    ));
    assert!(trellis.is_identity());

    assert!(trellis.drop_balls("a1").is_err());
    assert!(trellis.is_identity());
}

#[test]
fn test_empty_word_is_noop() {
    let mut trellis = Trellis::default();
    trellis.drop_balls("").unwrap();
    assert!(trellis.is_identity());
}

// ═══════════════════════════════════════════════════════════════════════
// Stepping
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_step_by_step_middle_slot() {
    let mut trellis = Trellis::default();
    trellis.insert_ball(1).unwrap();

    // Non-edge even switch pointing left sends the ball down-left
    assert!(trellis.step());
    assert_eq!(trellis.ball(), Some((1, 0)));
    assert_eq!(trellis.state(0, 1), Some(R));

    // Odd switch pointing left keeps the column
    assert!(trellis.step());
    assert_eq!(trellis.ball(), Some((2, 0)));

    // Last row: ball leaves
    assert!(trellis.step());
    assert_eq!(trellis.ball(), None);
    assert!(!trellis.step());
    assert_eq!(trellis.ball_path(), &[(0, 1), (1, 0), (2, 0)]);
}

#[test]
fn test_right_edge_skips_odd_row_when_right() {
    let mut trellis = Trellis::default();
    trellis.flip(0, 2);
    trellis.insert_ball(2).unwrap();
    trellis.step();
    assert_eq!(trellis.ball(), Some((2, 2)));
    assert_eq!(trellis.state(0, 2), Some(L));
}

#[test]
fn test_left_edge_enters_odd_row_when_right() {
    let mut trellis = Trellis::default();
    trellis.flip(0, 0);
    trellis.insert_ball(0).unwrap();
    trellis.step();
    assert_eq!(trellis.ball(), Some((1, 0)));
}

#[test]
fn test_odd_row_right_moves_column() {
    let mut trellis = Trellis::default();
    trellis.flip(1, 0);
    trellis.insert_ball(1).unwrap();
    trellis.step();
    trellis.step();
    assert_eq!(trellis.ball(), Some((2, 1)));
}

#[test]
fn test_ball_reaches_bottom_of_tall_trellis() {
    let mut trellis = Trellis::new(3, 4).unwrap();
    for letter in "abcdeedcba".chars() {
        trellis.drop_ball(letter).unwrap();
        assert_eq!(trellis.ball(), None);
        let &(last_row, _) = trellis.ball_path().last().unwrap();
        assert_eq!(last_row, trellis.rows() - 1);
    }
}

#[test]
fn test_insert_ball_out_of_range() {
    let mut trellis = Trellis::default();
    assert!(trellis.insert_ball(3).is_err());
    assert_eq!(trellis.ball(), None);
}

#[test]
fn test_reset_keeps_ball() {
    let mut trellis = Trellis::default();
    trellis.insert_ball(0).unwrap();
    trellis.step();
    trellis.reset();
    assert!(trellis.is_identity());
    assert!(trellis.ball_path().is_empty());
    assert_eq!(trellis.ball(), Some((2, 0)));
}

// ═══════════════════════════════════════════════════════════════════════
// Tracing and Rendering
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_traced_drop_reports_every_frame() {
    let mut trellis = Trellis::default();
    let mut frames = Vec::new();
    trellis
        .drop_ball_traced('a', |t| frames.push((t.ball(), t.to_string())))
        .unwrap();

    assert_eq!(frames.len(), 3);
    assert_eq!(frames[0].0, Some((0, 0)));
    assert_eq!(frames[1].0, Some((2, 0)));
    assert_eq!(frames[2].0, None);
    assert_eq!(frames[2].1, "x   o   o\n  o   o  \nx   o   o");
}

#[test]
fn test_traced_word_visits_each_ball() {
    let mut trellis = Trellis::default();
    let mut inserted = 0;
    trellis
        .drop_balls_traced("cab", |t| {
            if t.ball_path().is_empty() {
                inserted += 1;
            }
        })
        .unwrap();
    assert_eq!(inserted, 3);
}

#[test]
fn test_render_width_one() {
    let mut trellis = Trellis::new(1, 1).unwrap();
    trellis.drop_ball('b').unwrap();
    assert_eq!(trellis.render(RenderStyle::Plain), "o   x\n  x  \nx   o");
}
