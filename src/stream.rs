//! Boundary helpers for the external matchup source.
//!
//! The generator is a black box that owns enumeration order and count; the
//! core only asserts its contract. Sources are plain `Iterator<Item =
//! Matchup>` values; adapt whatever the generator hands out with
//! [`Matchup::new`]. IO is front-loaded here so the derivation modules stay
//! pure.

use crate::foundation::core::{Matchup, StreamConfig};
use crate::foundation::error::{RingweaveError, RingweaveResult};

/// Materialize a source for the analysis path, validating every matchup.
///
/// Order is preserved exactly; nothing is deduped, reordered, or re-derived.
/// An empty source is rejected here so the analyzers never see one.
pub fn collect_validated<I>(config: &StreamConfig, source: I) -> RingweaveResult<Vec<Matchup>>
where
    I: IntoIterator<Item = Matchup>,
{
    let mut out = Vec::new();
    for m in source {
        m.validate(config)?;
        out.push(m);
    }
    if out.is_empty() {
        return Err(RingweaveError::degenerate("matchup source produced nothing"));
    }
    Ok(out)
}

/// Decode a matchup sequence from its JSON wire shape, `[[0,1],[0,2],..]`.
pub fn matchups_from_json(json: &str) -> RingweaveResult<Vec<Matchup>> {
    serde_json::from_str::<Vec<Matchup>>(json)
        .map_err(|e| RingweaveError::serde(format!("matchup sequence: {e}")))
}

#[cfg(test)]
#[path = "../tests/unit/stream.rs"]
mod tests;
