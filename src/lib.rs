//! Ringweave derives renderable analytic structures from a *matchup stream*:
//! a finite, ordered sequence of fixed-size combinations of participant
//! indices drawn from a network of fixed size.
//!
//! The stream comes from an external combinatorial generator and is treated
//! as a black box (`Iterator<Item = Matchup>`). Ringweave owns the derivation
//! layer between that generator and a rendering sink:
//!
//! 1. **Animation path** (streaming): participants are laid out on a unit
//!    circle ([`RingLayout`]), each matchup contributes one quadratic chord
//!    arc per participant pair ([`QuadArc`]), and [`MatchupAnimator`] advances
//!    a highlight-then-fade opacity state machine one matchup per frame.
//! 2. **Analysis path** (materialized): [`StrideHierarchy`] buckets each
//!    matchup's stride into a log2 level, and [`Participation`] builds a
//!    membership matrix with frequency and first-appearance statistics.
//!    [`SpectrumReport`] bundles both for a spectral-style view.
//!
//! The two paths share no runtime state. Everything downstream (plotting,
//! colormaps, media export, interactive controls) is an external sink that
//! consumes the serializable snapshot/report types with no feedback into the
//! core.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: every derivation is a pure function of the config and
//!   the given sequence; source order is preserved, never re-derived.
//! - **No IO in the core**: file/JSON handling lives at the edges
//!   ([`stream`] helpers and the CLI bin).
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod analysis;
mod animation;
mod foundation;
mod geometry;
mod layout;

pub mod stream;

pub use analysis::participation::Participation;
pub use analysis::spectrum::SpectrumReport;
pub use analysis::stride::StrideHierarchy;
pub use animation::machine::{
    AnimatedArc, ArcSnapshot, DECAY_FACTOR, DEFAULT_OPACITY, FrameSnapshot, HIGHLIGHT_OPACITY,
    IDLE_FRAMES, MIN_OPACITY, MatchupAnimator, StepOutcome, suggested_interval_ms,
};
pub use foundation::core::{FrameIndex, Matchup, PairIter, Point, StreamConfig, Vec2};
pub use foundation::error::{RingweaveError, RingweaveResult};
pub use geometry::chord::{MAX_CONTROL_RADIUS, QuadArc};
pub use layout::ring::RingLayout;
