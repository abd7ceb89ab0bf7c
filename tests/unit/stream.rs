use super::*;

#[test]
fn collect_preserves_source_order() {
    let cfg = StreamConfig::new(8, 2).unwrap();
    let source = vec![
        Matchup::new(vec![4, 5]),
        Matchup::new(vec![0, 1]),
        Matchup::new(vec![0, 2]),
    ];
    let collected = collect_validated(&cfg, source.clone()).unwrap();
    assert_eq!(collected, source);
}

#[test]
fn collect_rejects_an_empty_source() {
    let cfg = StreamConfig::new(8, 2).unwrap();
    assert!(matches!(
        collect_validated(&cfg, Vec::new()),
        Err(RingweaveError::DegenerateInput(_))
    ));
}

#[test]
fn collect_rejects_contract_violations() {
    let cfg = StreamConfig::new(8, 2).unwrap();
    let source = vec![Matchup::new(vec![0, 1]), Matchup::new(vec![2, 2])];
    assert!(matches!(
        collect_validated(&cfg, source),
        Err(RingweaveError::ContractViolation(_))
    ));
}

#[test]
fn json_adapter_decodes_the_wire_shape() {
    let matchups = matchups_from_json("[[0,1],[0,2],[4,5]]").unwrap();
    assert_eq!(matchups.len(), 3);
    assert_eq!(matchups[1].members(), &[0, 2]);
}

#[test]
fn json_adapter_reports_malformed_input() {
    assert!(matches!(
        matchups_from_json("[[0,1],"),
        Err(RingweaveError::Serde(_))
    ));
    assert!(matches!(
        matchups_from_json("{\"not\": \"a sequence\"}"),
        Err(RingweaveError::Serde(_))
    ));
}
