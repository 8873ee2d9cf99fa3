//! Survey tests

use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use trellis::*;

#[test]
fn test_survey_one_by_two() {
    let mut trellis = Trellis::default();
    let survey = Survey::run(&mut trellis, false, &SimContext::new()).unwrap();

    assert_eq!(survey.irreducible_count, 128);
    assert_eq!(
        survey.periods,
        BTreeMap::from([(1, 1), (2, 7), (4, 24), (8, 96)])
    );
    assert_eq!(survey.periods.values().sum::<usize>(), 128);
    assert!(trellis.is_identity());
}

#[test]
fn test_survey_json() {
    let mut trellis = Trellis::default();
    let survey = Survey::run(&mut trellis, true, &SimContext::new()).unwrap();
    let json = serde_json::to_value(&survey).unwrap();

    assert_eq!(json["height"], 1);
    assert_eq!(json["width"], 2);
    assert_eq!(json["period_bound"], 8);
    assert_eq!(json["strictly_weight_reducing"], true);
    assert_eq!(json["irreducible_count"], 128);
    assert_eq!(json["periods"]["8"], 96);
}

#[test]
fn test_survey_display() {
    let mut trellis = Trellis::default();
    let survey = Survey::run(&mut trellis, true, &SimContext::new()).unwrap();
    let text = survey.to_string();

    assert!(text.starts_with("Trellis 1x2 (period bound 8, strict rewrites)"));
    assert!(text.contains("Irreducible elements: 128"));
    assert!(text.contains("       8        96"));
}

#[test]
fn test_survey_interrupted() {
    let mut trellis = Trellis::default();
    let ctx = SimContext::new();
    ctx.interrupt();
    assert_eq!(
        Survey::run(&mut trellis, true, &ctx),
        Err(TrellisError::Interrupted)
    );
}
