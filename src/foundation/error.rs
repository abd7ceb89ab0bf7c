/// Convenience result type used across Ringweave.
pub type RingweaveResult<T> = Result<T, RingweaveError>;

/// Top-level error taxonomy used by the derivation APIs.
///
/// Everything here is detected before any partial output is emitted, and
/// nothing is retried: the derivations are pure and deterministic, so a retry
/// would fail identically.
#[derive(thiserror::Error, Debug)]
pub enum RingweaveError {
    /// Invalid stream configuration (`network_size`/`match_size` out of
    /// bounds); raised before any matchup is requested from the source.
    #[error("configuration error: {0}")]
    Config(String),

    /// The matchup sequence is empty; stride/participation statistics over an
    /// empty set are undefined.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    /// The matchup source broke its contract: wrong arity, an out-of-range
    /// index, a duplicate index, or a zero stride.
    #[error("source contract violation: {0}")]
    ContractViolation(String),

    /// Errors when serializing or deserializing snapshot/report data.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RingweaveError {
    /// Build a [`RingweaveError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`RingweaveError::DegenerateInput`] value.
    pub fn degenerate(msg: impl Into<String>) -> Self {
        Self::DegenerateInput(msg.into())
    }

    /// Build a [`RingweaveError::ContractViolation`] value.
    pub fn contract(msg: impl Into<String>) -> Self {
        Self::ContractViolation(msg.into())
    }

    /// Build a [`RingweaveError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
