use crate::foundation::core::{Matchup, StreamConfig};
use crate::foundation::error::{RingweaveError, RingweaveResult};

/// Membership matrix of participants over matchups, with derived statistics.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Participation {
    matchup_count: usize,
    /// Row-major matrix, `network_size` rows by `matchup_count` columns;
    /// `true` where the row's participant took part in the column's matchup.
    matrix: Vec<bool>,
    /// Matchups each participant appears in.
    pub frequency: Vec<usize>,
    /// First matchup index each participant appears in; `None` for
    /// participants the stream never selected.
    pub first_appearance: Vec<Option<usize>>,
}

impl Participation {
    /// Track participation over a fully materialized sequence.
    pub fn build(config: &StreamConfig, matchups: &[Matchup]) -> RingweaveResult<Self> {
        if matchups.is_empty() {
            return Err(RingweaveError::degenerate(
                "participation tracking needs at least one matchup",
            ));
        }

        let rows = config.network_size;
        let cols = matchups.len();
        let mut matrix = vec![false; rows * cols];
        let mut frequency = vec![0usize; rows];
        let mut first_appearance = vec![None; rows];

        for (j, m) in matchups.iter().enumerate() {
            m.validate(config)?;
            for &p in m.members() {
                matrix[p * cols + j] = true;
                frequency[p] += 1;
                first_appearance[p].get_or_insert(j);
            }
        }

        Ok(Self {
            matchup_count: cols,
            matrix,
            frequency,
            first_appearance,
        })
    }

    /// Whether participant `p` took part in matchup `j`.
    pub fn took_part(&self, p: usize, j: usize) -> bool {
        self.matrix[p * self.matchup_count + j]
    }

    /// One participant's row of the matrix.
    pub fn row(&self, p: usize) -> &[bool] {
        &self.matrix[p * self.matchup_count..(p + 1) * self.matchup_count]
    }

    /// Number of participants (matrix rows).
    pub fn participant_count(&self) -> usize {
        self.frequency.len()
    }

    /// Number of matchups (matrix columns).
    pub fn matchup_count(&self) -> usize {
        self.matchup_count
    }
}

#[cfg(test)]
#[path = "../../tests/unit/analysis/participation.rs"]
mod tests;
