use crate::analysis::participation::Participation;
use crate::analysis::stride::StrideHierarchy;
use crate::foundation::core::{Matchup, StreamConfig};
use crate::foundation::error::RingweaveResult;

/// Everything the spectral view consumes, assembled in one pass.
///
/// Bundles the raw matchup table (stream order preserved) with the stride
/// hierarchy and participation statistics. Fails as a whole: a contract
/// violation anywhere in the sequence means no partial report is emitted.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SpectrumReport {
    /// Stream parameters the report was built against.
    pub config: StreamConfig,
    /// The raw sequence, exactly as the source ordered it.
    pub matchups: Vec<Matchup>,
    /// Stride buckets and levels.
    pub strides: StrideHierarchy,
    /// Membership matrix, frequencies, first appearances.
    pub participation: Participation,
}

impl SpectrumReport {
    /// Build the full analysis over a materialized sequence.
    #[tracing::instrument(skip(matchups))]
    pub fn build(config: &StreamConfig, matchups: Vec<Matchup>) -> RingweaveResult<Self> {
        let strides = StrideHierarchy::build(&matchups)?;
        let participation = Participation::build(config, &matchups)?;
        Ok(Self {
            config: *config,
            matchups,
            strides,
            participation,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/analysis/spectrum.rs"]
mod tests;
