use super::*;

fn seq(raw: &[&[usize]]) -> Vec<Matchup> {
    raw.iter().map(|m| Matchup::new(m.to_vec())).collect()
}

#[test]
fn reference_sequence_buckets_as_expected() {
    // strides [1, 2, 1], max_level = floor(log2(2)) + 1 = 2.
    let h = StrideHierarchy::build(&seq(&[&[0, 1], &[0, 2], &[4, 5]])).unwrap();
    assert_eq!(h.strides, vec![1, 2, 1]);
    assert_eq!(h.max_level, 2);
    assert_eq!(h.categories, vec![1, 0, 1]);
}

#[test]
fn largest_stride_lands_in_category_zero() {
    let h = StrideHierarchy::build(&seq(&[&[0, 1], &[0, 16], &[2, 10], &[16, 0]])).unwrap();
    assert_eq!(h.max_level, 5);
    for (stride, category) in h.strides.iter().zip(&h.categories) {
        assert!(*category < h.max_level);
        if *stride == 16 {
            assert_eq!(*category, 0);
        }
    }
    assert_eq!(h.categories[1], 0);
    assert_eq!(h.categories[3], 0);
}

#[test]
fn stride_ignores_members_beyond_the_first_two() {
    // The fixed positional choice: (8, 1, 2) has stride 7, not min pairwise.
    let h = StrideHierarchy::build(&seq(&[&[8, 1, 2], &[0, 8, 100]])).unwrap();
    assert_eq!(h.strides, vec![7, 8]);
}

#[test]
fn empty_sequence_is_degenerate() {
    assert!(matches!(
        StrideHierarchy::build(&[]),
        Err(RingweaveError::DegenerateInput(_))
    ));
}

#[test]
fn zero_stride_is_a_contract_violation() {
    assert!(matches!(
        StrideHierarchy::build(&seq(&[&[0, 1], &[3, 3]])),
        Err(RingweaveError::ContractViolation(_))
    ));
}

#[test]
fn single_member_matchups_have_no_stride() {
    assert!(matches!(
        StrideHierarchy::build(&seq(&[&[4]])),
        Err(RingweaveError::ContractViolation(_))
    ));
}
