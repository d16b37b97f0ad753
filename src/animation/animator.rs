use crate::animation::ease::Ease;
use crate::animation::glyph::{FramePlan, PreparedGlyph};
use crate::animation::scheduler::{Scheduler, Tick, TickHandle};
use crate::animation::state::{AnimationState, Phase};
use crate::dataset::record::{MedianPoint, StrokeEntry};
use crate::dataset::store::StrokeDataset;
use crate::foundation::error::{BihuaError, BihuaResult};
use std::time::Duration;

/// Timing configuration for a [`StrokeAnimator`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AnimatorOpts {
    /// Time to trace one stroke, in milliseconds.
    pub stroke_duration_ms: u64,
    /// Requested ticker cadence, in milliseconds.
    pub tick_interval_ms: u64,
    /// Easing applied to per-stroke progress.
    pub ease: Ease,
}

impl Default for AnimatorOpts {
    fn default() -> Self {
        Self {
            stroke_duration_ms: 800,
            tick_interval_ms: 16,
            ease: Ease::Linear,
        }
    }
}

impl AnimatorOpts {
    /// Reject zero durations.
    pub fn validate(&self) -> BihuaResult<()> {
        if self.stroke_duration_ms == 0 {
            return Err(BihuaError::validation("stroke_duration_ms must be > 0"));
        }
        if self.tick_interval_ms == 0 {
            return Err(BihuaError::validation("tick_interval_ms must be > 0"));
        }
        Ok(())
    }

    /// Per-stroke duration.
    pub fn stroke_duration(&self) -> Duration {
        Duration::from_millis(self.stroke_duration_ms)
    }

    /// Ticker cadence.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

/// Stroke-order animation for one displayed character.
///
/// Owns the animation state and at most one live ticker. Changing the character or disposing the
/// animator cancels that ticker before anything else, and ticks carrying any other handle are
/// ignored, so a stale timer can never move the new state.
#[derive(Debug)]
pub struct StrokeAnimator<S: Scheduler> {
    glyph: Option<PreparedGlyph>,
    state: AnimationState,
    stroke_elapsed: Duration,
    opts: AnimatorOpts,
    scheduler: S,
    ticker: Option<TickHandle>,
}

impl<S: Scheduler> StrokeAnimator<S> {
    /// Animator for one character's strokes and medians.
    pub fn new(
        strokes: &[String],
        medians: &[Vec<MedianPoint>],
        opts: AnimatorOpts,
        scheduler: S,
    ) -> BihuaResult<Self> {
        opts.validate()?;
        let glyph = PreparedGlyph::new(strokes, medians)?;
        Ok(Self::with_glyph(Some(glyph), opts, scheduler))
    }

    /// Animator for a character without stroke data. Every frame is [`FramePlan::Unavailable`].
    pub fn unavailable(opts: AnimatorOpts, scheduler: S) -> BihuaResult<Self> {
        opts.validate()?;
        Ok(Self::with_glyph(None, opts, scheduler))
    }

    /// Animator for `ch` looked up in `dataset`; a missing character is not an error.
    pub fn for_character(
        dataset: &StrokeDataset,
        ch: char,
        opts: AnimatorOpts,
        scheduler: S,
    ) -> BihuaResult<Self> {
        opts.validate()?;
        let glyph = prepare_entry(dataset.get(ch));
        if glyph.is_none() {
            tracing::info!(character = %ch, "no stroke data; animation unavailable");
        }
        Ok(Self::with_glyph(glyph, opts, scheduler))
    }

    fn with_glyph(glyph: Option<PreparedGlyph>, opts: AnimatorOpts, scheduler: S) -> Self {
        Self {
            glyph,
            state: AnimationState::initial(),
            stroke_elapsed: Duration::ZERO,
            opts,
            scheduler,
            ticker: None,
        }
    }

    /// Begin ticking. No-op when already running, complete, or unavailable.
    pub fn start(&mut self) {
        if self.ticker.is_some() || self.phase() == Phase::Idle {
            return;
        }
        let handle = self.scheduler.schedule_tick(self.opts.tick_interval());
        tracing::debug!(handle = handle.0, "stroke animation started");
        self.ticker = Some(handle);
    }

    /// Apply one tick. Ticks from any ticker but the live one are dropped.
    pub fn on_tick(&mut self, tick: Tick) -> Phase {
        if self.ticker != Some(tick.handle) {
            tracing::trace!(handle = tick.handle.0, "ignoring stale tick");
            return self.phase();
        }

        let total = self.total_strokes();
        let elapsed = self.stroke_elapsed.saturating_add(tick.elapsed);
        let prev = self.state;
        self.state = prev.advance_elapsed(elapsed, self.opts.stroke_duration(), total);
        if self.state.stroke_index == prev.stroke_index {
            self.stroke_elapsed = elapsed;
        } else {
            self.stroke_elapsed = Duration::ZERO;
            tracing::debug!(
                stroke = prev.stroke_index,
                total,
                "stroke traced"
            );
        }

        let phase = self.state.phase(total);
        if phase == Phase::Idle {
            self.stop_ticker();
        }
        phase
    }

    /// Switch to new stroke data. The old ticker is cancelled and the state restarts; call
    /// [`StrokeAnimator::start`] to run again.
    ///
    /// Mismatched stroke and median counts leave the animator stopped and unavailable.
    pub fn reset(&mut self, strokes: &[String], medians: &[Vec<MedianPoint>]) -> BihuaResult<()> {
        self.replace_glyph(None);
        let glyph = PreparedGlyph::new(strokes, medians)?;
        self.glyph = Some(glyph);
        Ok(())
    }

    /// Switch to a dataset entry, or to "unavailable" for `None`.
    pub fn reset_entry(&mut self, entry: Option<&StrokeEntry>) {
        let glyph = prepare_entry(entry);
        self.replace_glyph(glyph);
    }

    fn replace_glyph(&mut self, glyph: Option<PreparedGlyph>) {
        self.stop_ticker();
        self.glyph = glyph;
        self.restart_state();
    }

    fn restart_state(&mut self) {
        self.state = AnimationState::initial();
        self.stroke_elapsed = Duration::ZERO;
    }

    /// Restart the current character from its first stroke.
    pub fn replay(&mut self) {
        self.stop_ticker();
        self.restart_state();
        self.start();
    }

    /// Cancel the ticker. Safe to call more than once.
    pub fn dispose(&mut self) {
        self.stop_ticker();
    }

    fn stop_ticker(&mut self) {
        if let Some(handle) = self.ticker.take() {
            self.scheduler.cancel(handle);
            tracing::debug!(handle = handle.0, "stroke animation ticker cancelled");
        }
    }

    /// Layers for the current state, with easing applied to progress.
    pub fn current_draw_plan(&self) -> FramePlan<'_> {
        let progress = self.opts.ease.apply(self.state.progress);
        self.frame_at(self.state.stroke_index, progress)
    }

    /// Layers for an arbitrary instant, independent of the live state.
    pub fn frame_at(&self, stroke_index: usize, progress: f64) -> FramePlan<'_> {
        match &self.glyph {
            Some(glyph) => FramePlan::Ready(glyph.plan_at(stroke_index, progress)),
            None => FramePlan::Unavailable,
        }
    }

    /// Current state.
    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.state.phase(self.total_strokes())
    }

    /// Number of strokes, zero when unavailable.
    pub fn total_strokes(&self) -> usize {
        self.glyph.as_ref().map_or(0, PreparedGlyph::stroke_count)
    }

    /// Return `true` when stroke data is loaded.
    pub fn is_available(&self) -> bool {
        self.glyph.is_some()
    }

    /// Return `true` while a ticker is live.
    pub fn is_running(&self) -> bool {
        self.ticker.is_some()
    }

    /// Live ticker handle, if any.
    pub fn ticker(&self) -> Option<TickHandle> {
        self.ticker
    }

    /// Timing configuration.
    pub fn opts(&self) -> &AnimatorOpts {
        &self.opts
    }

    /// Scheduler owning the ticker.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable access to the scheduler, for hosts that drive it directly.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

impl<S: Scheduler> Drop for StrokeAnimator<S> {
    fn drop(&mut self) {
        self.stop_ticker();
    }
}

fn prepare_entry(entry: Option<&StrokeEntry>) -> Option<PreparedGlyph> {
    let entry = entry?;
    match PreparedGlyph::from_entry(entry) {
        Ok(glyph) => Some(glyph),
        Err(e) => {
            tracing::warn!(character = %entry.character, error = %e, "unusable stroke entry");
            None
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/animator.rs"]
mod tests;
