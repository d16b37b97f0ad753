use std::time::Duration;

/// Accumulated fractions within this distance of a whole stroke count as complete.
const COMPLETION_EPSILON: f64 = 1e-9;

/// Where an animation currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Every stroke has been traced (or there are no strokes).
    Idle,
    /// Tracing the median of stroke `i`.
    AnimatingStroke(usize),
}

/// Ephemeral per-character animation state.
///
/// `stroke_index == total` means complete. `progress` is the traced fraction of the current
/// stroke's median, in `[0, 1)` while animating.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationState {
    /// Index of the stroke being traced.
    pub stroke_index: usize,
    /// Traced fraction of the current stroke.
    pub progress: f64,
}

impl AnimationState {
    /// Start of the animation. For a character without strokes this is already `Idle`.
    pub fn initial() -> Self {
        Self {
            stroke_index: 0,
            progress: 0.0,
        }
    }

    /// Phase for a character with `total` strokes.
    pub fn phase(self, total: usize) -> Phase {
        if self.stroke_index >= total {
            Phase::Idle
        } else {
            Phase::AnimatingStroke(self.stroke_index)
        }
    }

    /// Advance by `elapsed_fraction` of one stroke duration.
    ///
    /// Completing a stroke moves to the next one with progress reset to zero; leftover time is
    /// dropped so a single call never moves past more than one stroke. Idle is absorbing.
    ///
    /// Hosts that track time should prefer [`AnimationState::advance_elapsed`], which does not
    /// accumulate rounding error.
    pub fn advance(self, elapsed_fraction: f64, total: usize) -> Self {
        if self.stroke_index >= total {
            return Self {
                stroke_index: total,
                progress: 0.0,
            };
        }
        let step = if elapsed_fraction.is_finite() {
            elapsed_fraction.max(0.0)
        } else {
            0.0
        };
        let progress = self.progress + step;
        if progress >= 1.0 - COMPLETION_EPSILON {
            Self {
                stroke_index: self.stroke_index + 1,
                progress: 0.0,
            }
        } else {
            Self {
                stroke_index: self.stroke_index,
                progress,
            }
        }
    }

    /// Move to the point `stroke_elapsed` into the current stroke.
    ///
    /// `stroke_elapsed` is the exact time accumulated on this stroke; reaching `stroke_duration`
    /// completes it. Progress is derived from integer nanoseconds, so tick sizes that do not divide
    /// the duration evenly still finish on the tick that reaches it.
    pub fn advance_elapsed(
        self,
        stroke_elapsed: Duration,
        stroke_duration: Duration,
        total: usize,
    ) -> Self {
        if self.stroke_index >= total {
            return Self {
                stroke_index: total,
                progress: 0.0,
            };
        }
        if stroke_elapsed >= stroke_duration {
            return Self {
                stroke_index: self.stroke_index + 1,
                progress: 0.0,
            };
        }
        Self {
            stroke_index: self.stroke_index,
            progress: stroke_elapsed.as_nanos() as f64 / stroke_duration.as_nanos() as f64,
        }
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/state.rs"]
mod tests;
