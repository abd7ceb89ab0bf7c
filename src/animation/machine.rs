use crate::foundation::core::{FrameIndex, Matchup, StreamConfig};
use crate::foundation::error::RingweaveResult;
use crate::geometry::chord::QuadArc;
use crate::layout::ring::RingLayout;

/// Opacity of the final arc appended in a frame.
pub const DEFAULT_OPACITY: f64 = 0.5;
/// Opacity of the other arcs appended in the same frame.
pub const HIGHLIGHT_OPACITY: f64 = 0.8;
/// Per-frame multiplicative fade applied outside the trailing window.
pub const DECAY_FACTOR: f64 = 0.99;
/// Opacity floor; faded arcs stay visible at this level forever.
pub const MIN_OPACITY: f64 = 0.1;
/// Decay-only frames run after the source is exhausted, before halting.
pub const IDLE_FRAMES: u64 = 10;

/// One arc in the animator's append-only arena.
///
/// Arcs are created once, never removed, and their opacity only decreases
/// after the frame that created them.
#[derive(Clone, Copy, Debug)]
pub struct AnimatedArc {
    /// Chord geometry, fixed at creation.
    pub arc: QuadArc,
    /// Frame that created this arc.
    pub created: FrameIndex,
    /// Current opacity in `[MIN_OPACITY, 1.0]`.
    pub opacity: f64,
}

/// Serializable per-arc view handed to the render sink.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct ArcSnapshot {
    /// Endpoints and control point.
    pub path: QuadArc,
    /// Opacity at the snapshot frame.
    pub opacity: f64,
}

/// Serializable per-frame view of the whole arena, in creation order.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct FrameSnapshot {
    /// Frame the snapshot was taken after.
    pub frame: FrameIndex,
    /// Every arc created so far, oldest first.
    pub arcs: Vec<ArcSnapshot>,
}

/// What a single [`MatchupAnimator::step`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// A matchup was consumed and its arcs appended.
    Consumed,
    /// The source is exhausted; this was a decay-only idle frame.
    Idle,
    /// The idle tail is spent; the machine no longer changes state.
    Halted,
}

/// Incremental highlight-then-fade state machine over a matchup stream.
///
/// Consumes at most one matchup per step, so the source is never
/// materialized; arbitrarily long streams animate in memory proportional to
/// the arcs emitted so far (the arena is append-only by design). The
/// animator owns all opacity state: render sinks only ever see immutable
/// [`FrameSnapshot`]s.
#[derive(Debug)]
pub struct MatchupAnimator<I> {
    config: StreamConfig,
    layout: RingLayout,
    source: I,
    arcs: Vec<AnimatedArc>,
    frame: u64,
    idle_left: u64,
    halted: bool,
}

impl<I> MatchupAnimator<I>
where
    I: Iterator<Item = Matchup>,
{
    /// Build an animator over `source` for the given config.
    pub fn new(config: StreamConfig, source: I) -> Self {
        let layout = RingLayout::new(&config);
        Self {
            config,
            layout,
            source,
            arcs: Vec::new(),
            frame: 0,
            idle_left: IDLE_FRAMES,
            halted: false,
        }
    }

    /// Advance one frame.
    ///
    /// While the source has matchups: consume one, validate it, append one
    /// arc per positional pair at [`DEFAULT_OPACITY`], then raise all but the
    /// last of those to [`HIGHLIGHT_OPACITY`]. Every step, arcs outside the
    /// most recent `match_size - 1` decay by [`DECAY_FACTOR`] down to
    /// [`MIN_OPACITY`]. A contract-violating matchup surfaces before any of
    /// its arcs are appended.
    #[tracing::instrument(skip(self))]
    pub fn step(&mut self) -> RingweaveResult<StepOutcome> {
        if self.halted {
            return Ok(StepOutcome::Halted);
        }

        let consumed = match self.source.next() {
            Some(matchup) => {
                matchup.validate(&self.config)?;
                let before = self.arcs.len();
                for (a, b) in matchup.pairs() {
                    self.arcs.push(AnimatedArc {
                        arc: QuadArc::between(self.layout.position(a), self.layout.position(b)),
                        created: FrameIndex(self.frame),
                        opacity: DEFAULT_OPACITY,
                    });
                }
                let appended = self.arcs.len() - before;
                if appended > 1 {
                    let last = self.arcs.len() - 1;
                    for arc in &mut self.arcs[before..last] {
                        arc.opacity = HIGHLIGHT_OPACITY;
                    }
                }
                true
            }
            None => {
                if self.idle_left == 0 {
                    self.halted = true;
                    return Ok(StepOutcome::Halted);
                }
                self.idle_left -= 1;
                false
            }
        };

        let decay_end = self.arcs.len().saturating_sub(self.config.trailing_window());
        for arc in &mut self.arcs[..decay_end] {
            arc.opacity = (arc.opacity * DECAY_FACTOR).max(MIN_OPACITY);
        }

        self.frame += 1;
        Ok(if consumed {
            StepOutcome::Consumed
        } else {
            StepOutcome::Idle
        })
    }

    /// Immutable view of the arena after the last step.
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            frame: FrameIndex(self.frame),
            arcs: self
                .arcs
                .iter()
                .map(|a| ArcSnapshot {
                    path: a.arc,
                    opacity: a.opacity,
                })
                .collect(),
        }
    }

    /// Every arc created so far, oldest first.
    pub fn arcs(&self) -> &[AnimatedArc] {
        &self.arcs
    }

    /// Frames stepped so far.
    pub fn frame(&self) -> FrameIndex {
        FrameIndex(self.frame)
    }

    /// Whether the idle tail has been spent.
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Ring layout the arcs were built against.
    pub fn layout(&self) -> &RingLayout {
        &self.layout
    }

    /// Step until halted, collecting one snapshot per frame.
    pub fn run_to_halt(mut self) -> RingweaveResult<Vec<FrameSnapshot>> {
        let mut frames = Vec::new();
        loop {
            match self.step()? {
                StepOutcome::Halted => return Ok(frames),
                StepOutcome::Consumed | StepOutcome::Idle => frames.push(self.snapshot()),
            }
        }
    }
}

/// Frame-pacing hint for rendering loops, in milliseconds.
///
/// Larger networks animate faster; clamped to `[20, 100]`. Pacing itself is
/// an external rendering-loop concern, the core never sleeps.
pub fn suggested_interval_ms(config: &StreamConfig) -> u64 {
    ((5000 / config.network_size) as u64).clamp(20, 100)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/machine.rs"]
mod tests;
