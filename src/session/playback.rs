use crate::animation::animator::{AnimatorOpts, StrokeAnimator};
use crate::animation::scheduler::{ManualScheduler, Tick};
use crate::dataset::store::StrokeDataset;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{BihuaError, BihuaResult};
use crate::render::cpu::CpuSurface;
use crate::render::style::RenderOpts;
use crate::render::surface::{FrameRGBA, draw_frame_plan};
use std::time::Duration;

/// Highest accepted playback frame rate.
pub const MAX_FPS: u32 = 1000;

/// Options for offline playback.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlaybackOpts {
    /// Frames per second of the produced sequence.
    pub fps: u32,
    /// Extra copies of the final frame appended after the animation completes.
    pub hold_frames: u32,
}

impl Default for PlaybackOpts {
    fn default() -> Self {
        Self {
            fps: 30,
            hold_frames: 0,
        }
    }
}

/// Counters reported by [`PlaybackSession::render_all`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaybackStats {
    /// Frames pushed to the sink.
    pub frames: u64,
    /// Strokes animated.
    pub strokes: usize,
}

/// Renders a character's stroke animation frame by frame without a UI event loop.
///
/// Acts as the host for a [`StrokeAnimator`]: each output frame is followed by one tick of
/// `1 / fps` seconds delivered on the animator's live ticker.
pub struct PlaybackSession {
    animator: StrokeAnimator<ManualScheduler>,
    render: RenderOpts,
    opts: PlaybackOpts,
    surface: CpuSurface,
}

impl PlaybackSession {
    /// Session around an existing animator.
    pub fn new(
        animator: StrokeAnimator<ManualScheduler>,
        render: RenderOpts,
        opts: PlaybackOpts,
    ) -> BihuaResult<Self> {
        if opts.fps == 0 || opts.fps > MAX_FPS {
            return Err(BihuaError::validation(format!(
                "playback fps must be in 1..={MAX_FPS}, got {}",
                opts.fps
            )));
        }
        render.validate()?;
        Ok(Self {
            animator,
            render,
            opts,
            surface: CpuSurface::new(),
        })
    }

    /// Session for `ch` looked up in `dataset`.
    pub fn for_character(
        dataset: &StrokeDataset,
        ch: char,
        animator: AnimatorOpts,
        render: RenderOpts,
        opts: PlaybackOpts,
    ) -> BihuaResult<Self> {
        let animator = StrokeAnimator::for_character(dataset, ch, animator, ManualScheduler::new())?;
        Self::new(animator, render, opts)
    }

    /// Animator driven by this session.
    pub fn animator(&self) -> &StrokeAnimator<ManualScheduler> {
        &self.animator
    }

    /// Mutable access to the animator, e.g. to switch characters between runs.
    pub fn animator_mut(&mut self) -> &mut StrokeAnimator<ManualScheduler> {
        &mut self.animator
    }

    /// Rasterize the animator's current state.
    pub fn render_current(&mut self) -> BihuaResult<FrameRGBA> {
        let plan = self.animator.current_draw_plan();
        draw_frame_plan(&plan, &self.render, &mut self.surface)
    }

    /// Rasterize an arbitrary instant without touching the live state.
    pub fn render_at(&mut self, stroke_index: usize, progress: f64) -> BihuaResult<FrameRGBA> {
        let plan = self.animator.frame_at(stroke_index, progress);
        draw_frame_plan(&plan, &self.render, &mut self.surface)
    }

    /// Replay the animation from the first stroke and push every frame into `sink`.
    ///
    /// The last frame shows every stroke traced. A character without data yields one blank frame.
    #[tracing::instrument(skip(self, sink))]
    pub fn render_all(&mut self, sink: &mut dyn FrameSink) -> BihuaResult<PlaybackStats> {
        let fps = self.opts.fps;
        sink.begin(SinkConfig {
            width: self.render.canvas.width,
            height: self.render.canvas.height,
            fps,
        })?;

        self.animator.replay();
        let mut idx = 0u64;
        let last = loop {
            let frame = self.render_current()?;
            sink.push_frame(FrameIndex(idx), &frame)?;
            idx += 1;
            let Some(handle) = self.animator.ticker() else {
                break frame;
            };
            self.animator.on_tick(Tick {
                handle,
                elapsed: frame_time(idx, fps).saturating_sub(frame_time(idx - 1, fps)),
            });
        };

        for _ in 0..self.opts.hold_frames {
            sink.push_frame(FrameIndex(idx), &last)?;
            idx += 1;
        }
        sink.end()?;

        let stats = PlaybackStats {
            frames: idx,
            strokes: self.animator.total_strokes(),
        };
        tracing::debug!(frames = stats.frames, strokes = stats.strokes, "playback rendered");
        Ok(stats)
    }
}

/// Timestamp of frame `idx` at `fps`, truncated to whole nanoseconds.
///
/// Tick lengths are differences of these timestamps, so `fps` ticks always sum to one second.
fn frame_time(idx: u64, fps: u32) -> Duration {
    let nanos = u128::from(idx) * 1_000_000_000 / u128::from(fps.max(1));
    Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
}

#[cfg(test)]
#[path = "../../tests/unit/session/playback.rs"]
mod tests;
