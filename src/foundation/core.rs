use crate::foundation::error::{RingweaveError, RingweaveResult};

pub use kurbo::{Point, Vec2};

/// 0-based animation frame index.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Validated stream parameters shared by both derivation paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StreamConfig {
    /// Total number of participants in the network.
    pub network_size: usize,
    /// Number of participants selected together in one matchup.
    pub match_size: usize,
}

impl StreamConfig {
    /// Validate and build a config. Fails before any matchup is requested.
    pub fn new(network_size: usize, match_size: usize) -> RingweaveResult<Self> {
        if network_size == 0 {
            return Err(RingweaveError::config("network_size must be > 0"));
        }
        if match_size == 0 {
            return Err(RingweaveError::config("match_size must be > 0"));
        }
        if match_size > network_size {
            return Err(RingweaveError::config(format!(
                "match_size {match_size} exceeds network_size {network_size}"
            )));
        }
        Ok(Self {
            network_size,
            match_size,
        })
    }

    /// Number of unordered pairs within one matchup, `C(match_size, 2)`.
    pub fn pairs_per_matchup(self) -> usize {
        self.match_size * (self.match_size - 1) / 2
    }

    /// Number of most-recent arcs exempt from per-frame decay.
    pub fn trailing_window(self) -> usize {
        self.match_size - 1
    }
}

/// One matchup: an ordered tuple of distinct participant indices.
///
/// The distinctness/range invariants are owned by the external matchup
/// source; [`Matchup::validate`] is how the core asserts them at its boundary
/// instead of computing nonsense downstream.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Matchup(Vec<usize>);

impl Matchup {
    /// Wrap an ordered tuple of participant indices.
    pub fn new(members: Vec<usize>) -> Self {
        Self(members)
    }

    /// Participant indices in source order.
    pub fn members(&self) -> &[usize] {
        &self.0
    }

    /// Check this matchup against the source contract for `config`.
    pub fn validate(&self, config: &StreamConfig) -> RingweaveResult<()> {
        if self.0.len() != config.match_size {
            return Err(RingweaveError::contract(format!(
                "matchup {:?} has {} members, expected {}",
                self.0,
                self.0.len(),
                config.match_size
            )));
        }
        for (pos, &p) in self.0.iter().enumerate() {
            if p >= config.network_size {
                return Err(RingweaveError::contract(format!(
                    "participant {p} out of range for network of {}",
                    config.network_size
                )));
            }
            if self.0[..pos].contains(&p) {
                return Err(RingweaveError::contract(format!(
                    "duplicate participant {p} in matchup {:?}",
                    self.0
                )));
            }
        }
        Ok(())
    }

    /// Stride of this matchup: the absolute difference of its first two
    /// members. This is a fixed positional choice regardless of `match_size`,
    /// not a min/max over all pairs. `None` if the matchup has fewer than two
    /// members.
    pub fn stride(&self) -> Option<u64> {
        match self.0.as_slice() {
            [a, b, ..] => Some(a.abs_diff(*b) as u64),
            _ => None,
        }
    }

    /// Iterate the unordered member pairs in lexicographic positional order:
    /// `(m[0],m[1]), (m[0],m[2]), .., (m[1],m[2]), ..`.
    pub fn pairs(&self) -> PairIter<'_> {
        PairIter::new(&self.0)
    }
}

/// Combinatorial pair iterator over a fixed, ordered collection.
///
/// Yields every `(items[i], items[j])` with `i < j`, ordered by `(i, j)`.
/// Decoupled from any matchup-size assumption; an empty or single-element
/// slice yields nothing.
#[derive(Clone, Debug)]
pub struct PairIter<'a> {
    items: &'a [usize],
    i: usize,
    j: usize,
}

impl<'a> PairIter<'a> {
    /// Build a pair iterator over `items`.
    pub fn new(items: &'a [usize]) -> Self {
        Self { items, i: 0, j: 1 }
    }
}

impl Iterator for PairIter<'_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i + 1 >= self.items.len() {
            return None;
        }
        let out = (self.items[self.i], self.items[self.j]);
        self.j += 1;
        if self.j >= self.items.len() {
            self.i += 1;
            self.j = self.i + 1;
        }
        Some(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
