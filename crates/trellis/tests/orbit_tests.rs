//! Orbit and period tests on the 1x2 trellis

use pretty_assertions::assert_eq;
use trellis::*;

fn orbit(word: &str, start: &str) -> Vec<String> {
    let mut trellis = Trellis::default();
    trellis
        .orbit(word, start, &SimContext::new())
        .unwrap()
        .iter()
        .map(Word::to_string)
        .collect()
}

// ═══════════════════════════════════════════════════════════════════════
// Orbits
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_orbit_of_a() {
    assert_eq!(
        orbit("a", ""),
        vec!["", "a", "aa", "aaa", "aaaa", "aaaaa", "bbcc", "abbcc"]
    );
}

#[test]
fn test_orbit_of_ab() {
    assert_eq!(
        orbit("ab", ""),
        vec!["", "ab", "aabb", "aaabbb", "cccc", "abcccc", "cc", "abcc"]
    );
}

#[test]
fn test_orbit_of_abc() {
    assert_eq!(orbit("abc", ""), vec!["", "abc"]);
}

#[test]
fn test_orbit_from_start() {
    assert_eq!(
        orbit("a", "b"),
        vec!["b", "ab", "aab", "aaab", "aaaab", "aaaaab", "bbbcc", "abbbcc"]
    );
}

#[test]
fn test_orbit_of_identity_word() {
    assert_eq!(orbit("aabbcc", ""), vec![""]);
}

// ═══════════════════════════════════════════════════════════════════════
// Periods
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_atomic_periods() {
    let mut trellis = Trellis::default();
    let ctx = SimContext::new();
    for letter in ["a", "b", "c", "A"] {
        assert_eq!(trellis.period_of(letter, &ctx).unwrap(), 8);
    }
}

#[test]
fn test_composite_periods() {
    let mut trellis = Trellis::default();
    let ctx = SimContext::new();
    assert_eq!(trellis.period_of("ab", &ctx).unwrap(), 8);
    assert_eq!(trellis.period_of("bc", &ctx).unwrap(), 8);
    assert_eq!(trellis.period_of("abc", &ctx).unwrap(), 2);
    assert_eq!(trellis.period_of("", &ctx).unwrap(), 1);
}

#[test]
fn test_period_divides_bound() {
    let mut trellis = Trellis::new(1, 1).unwrap();
    let ctx = SimContext::new();
    for word in ["a", "b", "ab", "aab"] {
        let period = trellis.period_of(word, &ctx).unwrap();
        assert_eq!(trellis.period() as usize % period, 0, "period of {}", word);
    }
}

#[test]
fn test_applying_word_period_times_is_identity() {
    let mut trellis = Trellis::new(2, 2).unwrap();
    let ctx = SimContext::new();
    let period = trellis.period_of("ac", &ctx).unwrap();
    assert!(trellis.is_identity());
    for _ in 0..period {
        trellis.drop_balls("ac").unwrap();
    }
    assert!(trellis.is_identity());
}

#[test]
fn test_interrupted_orbit() {
    let mut trellis = Trellis::default();
    let ctx = SimContext::new();
    ctx.interrupt();
    assert_eq!(trellis.orbit("a", "", &ctx), Err(TrellisError::Interrupted));
}
