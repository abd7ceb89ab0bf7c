use super::*;

use crate::foundation::error::RingweaveError;

fn seq(raw: &[&[usize]]) -> Vec<Matchup> {
    raw.iter().map(|m| Matchup::new(m.to_vec())).collect()
}

#[test]
fn report_bundles_consistent_views_of_one_sequence() {
    let cfg = StreamConfig::new(8, 2).unwrap();
    let matchups = seq(&[&[0, 1], &[0, 2], &[4, 5]]);
    let report = SpectrumReport::build(&cfg, matchups.clone()).unwrap();

    assert_eq!(report.matchups, matchups);
    assert_eq!(report.strides.strides.len(), matchups.len());
    assert_eq!(report.strides.categories.len(), matchups.len());
    assert_eq!(report.participation.matchup_count(), matchups.len());
    assert_eq!(report.participation.participant_count(), cfg.network_size);
}

#[test]
fn report_round_trips_through_json() {
    let cfg = StreamConfig::new(8, 2).unwrap();
    let report = SpectrumReport::build(&cfg, seq(&[&[0, 1], &[0, 2], &[4, 5]])).unwrap();
    let json = serde_json::to_string(&report).unwrap();
    let back: SpectrumReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back.strides.categories, report.strides.categories);
    assert_eq!(back.participation.frequency, report.participation.frequency);
    assert_eq!(back.matchups, report.matchups);
}

#[test]
fn no_partial_report_on_contract_violation() {
    let cfg = StreamConfig::new(8, 2).unwrap();
    let err = SpectrumReport::build(&cfg, seq(&[&[0, 1], &[6, 6]])).unwrap_err();
    assert!(matches!(err, RingweaveError::ContractViolation(_)));
}
