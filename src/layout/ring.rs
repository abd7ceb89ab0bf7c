use std::f64::consts::TAU;

use crate::foundation::core::{Point, StreamConfig};

/// Deterministic placement of every participant on the unit circle.
///
/// Participant `i` sits at angle `TAU * i / network_size`, so consecutive
/// indices are spaced exactly `TAU / network_size` radians apart and index 0
/// is at `(1, 0)`. A pure function of `network_size` alone.
#[derive(Clone, Debug)]
pub struct RingLayout {
    positions: Vec<Point>,
}

impl RingLayout {
    /// Compute positions for every participant in `config`'s network.
    pub fn new(config: &StreamConfig) -> Self {
        let n = config.network_size;
        let positions = (0..n)
            .map(|i| {
                let theta = TAU * (i as f64) / (n as f64);
                Point::new(theta.cos(), theta.sin())
            })
            .collect();
        Self { positions }
    }

    /// Position of participant `i`. Panics if `i` is out of range; callers
    /// validate matchups against the config before indexing.
    pub fn position(&self, i: usize) -> Point {
        self.positions[i]
    }

    /// All positions in participant order.
    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    /// Number of placed participants.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the layout is empty (never true for a validated config).
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/ring.rs"]
mod tests;
