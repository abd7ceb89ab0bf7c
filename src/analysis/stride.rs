use crate::foundation::core::Matchup;
use crate::foundation::error::{RingweaveError, RingweaveResult};

/// Per-matchup strides bucketed into hierarchical log2 levels.
///
/// The stride of a matchup is the absolute difference of its *first two*
/// members, whatever the matchup size. Level 0 is the coarsest bucket, the
/// one holding the globally largest stride; higher categories mark smaller
/// strides, read as denser local structure.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct StrideHierarchy {
    /// Stride per matchup, in stream order.
    pub strides: Vec<u64>,
    /// Bucket per matchup, each in `[0, max_level)`.
    pub categories: Vec<u32>,
    /// Number of buckets, `floor(log2(max stride)) + 1`.
    pub max_level: u32,
}

impl StrideHierarchy {
    /// Analyze a fully materialized sequence.
    ///
    /// Global statistics (`max_level`) depend on the whole sequence, so this
    /// is deliberately not streamable. An empty sequence is degenerate; a
    /// zero stride means the source emitted a duplicate index and is rejected
    /// instead of feeding `log2(0)` downstream.
    pub fn build(matchups: &[Matchup]) -> RingweaveResult<Self> {
        if matchups.is_empty() {
            return Err(RingweaveError::degenerate(
                "stride analysis needs at least one matchup",
            ));
        }

        let mut strides = Vec::with_capacity(matchups.len());
        for m in matchups {
            let stride = m.stride().ok_or_else(|| {
                RingweaveError::contract(format!(
                    "matchup {:?} has fewer than two members, stride undefined",
                    m.members()
                ))
            })?;
            if stride == 0 {
                return Err(RingweaveError::contract(format!(
                    "zero stride in matchup {:?}",
                    m.members()
                )));
            }
            strides.push(stride);
        }

        // Non-empty and all strides > 0 at this point.
        let max_stride = strides.iter().copied().max().unwrap_or(1);
        let max_level = max_stride.ilog2() + 1;
        let categories = strides.iter().map(|s| max_level - s.ilog2() - 1).collect();

        Ok(Self {
            strides,
            categories,
            max_level,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/analysis/stride.rs"]
mod tests;
