use super::*;

use std::f64::consts::TAU;

fn layout(n: usize) -> RingLayout {
    RingLayout::new(&StreamConfig::new(n, 1).unwrap())
}

#[test]
fn positions_sit_on_the_unit_circle() {
    for n in [1, 2, 3, 8, 97] {
        let ring = layout(n);
        assert_eq!(ring.len(), n);
        for p in ring.positions() {
            let r2 = p.x * p.x + p.y * p.y;
            assert!((r2 - 1.0).abs() < 1e-12, "|p|^2 = {r2} for n = {n}");
        }
    }
}

#[test]
fn spacing_is_exactly_tau_over_n_in_index_order() {
    let n = 12;
    let ring = layout(n);
    for i in 0..n {
        let p = ring.position(i);
        let angle = p.y.atan2(p.x).rem_euclid(TAU);
        let expected = (TAU * i as f64 / n as f64).rem_euclid(TAU);
        assert!((angle - expected).abs() < 1e-12);
    }
}

#[test]
fn index_zero_is_at_angle_zero() {
    let ring = layout(5);
    let p = ring.position(0);
    assert!((p.x - 1.0).abs() < 1e-12);
    assert!(p.y.abs() < 1e-12);
}

#[test]
fn layout_is_deterministic() {
    let a = layout(31);
    let b = layout(31);
    assert_eq!(a.positions(), b.positions());
}
