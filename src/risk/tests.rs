#![cfg(test)]

use super::*;
use crate::dataset::{LocationRecord, PostalCode};
use proptest::prelude::*;

fn location(baseline: f64, projected: f64, prone: bool, hotspot: bool) -> LocationRecord {
    LocationRecord {
        postal_code: PostalCode::normalize("018956").unwrap(),
        latitude: 1.2966,
        longitude: 103.852,
        road_name: "Stamford Road".into(),
        address: "1 Stamford Road".into(),
        baseline_depth: baseline,
        projected_depth: projected,
        flood_prone: prone,
        hotspot,
        source_rows: 1,
    }
}

#[test]
fn boundaries_are_exact() {
    assert_eq!(classify(0.4999).tier, RiskTier::Low);
    assert_eq!(classify(0.5).tier, RiskTier::Medium);
    assert_eq!(classify(1.0).tier, RiskTier::Medium);
    assert_eq!(classify(1.0001).tier, RiskTier::High);
}

#[test]
fn out_of_range_depths_are_not_clamped() {
    assert_eq!(classify(-0.3).tier, RiskTier::Low);
    assert_eq!(classify(0.0).tier, RiskTier::Low);
    assert_eq!(classify(250.0).tier, RiskTier::High);
}

#[test]
fn each_tier_has_a_fixed_severity_token() {
    let low = classify(0.1);
    let medium = classify(0.7);
    let high = classify(1.4);
    assert_eq!(low.severity.token(), "severity-low");
    assert_eq!(medium.severity.token(), "severity-medium");
    assert_eq!(high.severity.token(), "severity-high");
    assert_eq!(
        serde_json::to_string(&high.severity).unwrap(),
        "\"severity-high\""
    );
    assert_eq!(
        [low.tier.rank(), medium.tier.rank(), high.tier.rank()],
        [0, 1, 2]
    );
}

#[test]
fn advisory_follows_overall_tier() {
    assert_eq!(
        Advisory::for_tier(RiskTier::High),
        Advisory::ReviewInsuranceAndMitigation
    );
    assert_eq!(Advisory::for_tier(RiskTier::Medium), Advisory::StayVigilant);
    assert_eq!(Advisory::for_tier(RiskTier::Low), Advisory::RoutineMonitoring);
    assert!(Advisory::StayVigilant.message().starts_with("Medium risk"));
}

#[test]
fn change_direction_tracks_sign() {
    let rising = DepthChange::between(0.5, 1.0);
    assert_eq!(rising.direction, ChangeDirection::Increasing);
    assert!((rising.delta - 0.5).abs() < 1e-9);

    let falling = DepthChange::between(0.8, 0.3);
    assert_eq!(falling.direction, ChangeDirection::Decreasing);
    assert!((falling.delta + 0.5).abs() < 1e-9);
    assert!((falling.magnitude() - 0.5).abs() < 1e-9);

    assert_eq!(
        DepthChange::between(0.4, 0.4).direction,
        ChangeDirection::Increasing
    );
}

#[test]
fn indicators_mirror_record_flags() {
    let record = location(0.2, 0.3, true, false);
    let prone = AreaIndicator::flood_prone(&record);
    let hotspot = AreaIndicator::hotspot(&record);
    assert!(prone.active);
    assert_eq!(prone.answer(), "Yes");
    assert_eq!(prone.kind.label(), "Flood-Prone Area");
    assert!(!hotspot.active);
    assert_eq!(hotspot.answer(), "No");
}

proptest! {
    #[test]
    fn severity_is_monotonic_in_depth(a in -2.0f64..5.0, b in -2.0f64..5.0) {
        let (shallow, deep) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(classify(shallow).tier.rank() <= classify(deep).tier.rank());
    }

    #[test]
    fn severity_matches_tier(depth in 0.0f64..3.0) {
        let assessment = classify(depth);
        prop_assert_eq!(assessment.severity, assessment.tier.severity());
    }
}
