//! Stroke-order animation for Chinese characters.
//!
//! - Load a [`StrokeDataset`] (one JSON record per line: `character`, `strokes`, `medians`)
//! - Drive a [`StrokeAnimator`] with ticks from a [`Scheduler`]
//! - Turn each [`FramePlan`] into pixels with [`draw_frame_plan`] on a [`DrawSurface`], or let a
//!   [`PlaybackSession`] do all of it into a [`FrameSink`]
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod dataset;
pub(crate) mod encode;
pub(crate) mod geometry;
pub(crate) mod render;
pub(crate) mod session;

pub use crate::foundation::core::{
    Affine, BezPath, Canvas, FrameIndex, GLYPH_GRID, Point, Vec2,
};
pub use crate::foundation::error::{BihuaError, BihuaResult};

pub use crate::animation::animator::{AnimatorOpts, StrokeAnimator};
pub use crate::animation::ease::Ease;
pub use crate::animation::glyph::{DrawPlan, FramePlan, PreparedGlyph};
pub use crate::animation::scheduler::{ManualScheduler, Scheduler, Tick, TickHandle};
pub use crate::animation::state::{AnimationState, Phase};
pub use crate::dataset::record::{LineOutcome, MedianPoint, SkipReason, StrokeEntry};
pub use crate::dataset::store::{LoadReport, StrokeDataset};
pub use crate::encode::sink::{FrameSink, InMemorySink, PngSequenceSink, SinkConfig, write_png};
pub use crate::geometry::glyph_space::{GLYPH_BASELINE, GlyphSpace};
pub use crate::geometry::path::StrokePath;
pub use crate::render::color::Rgba8;
pub use crate::render::cpu::CpuSurface;
pub use crate::render::style::{LineCap, RenderOpts, StrokeStyle};
pub use crate::render::surface::{
    DrawSurface, FrameRGBA, Layer, StrokePaint, draw_frame_plan, draw_plan,
};
pub use crate::session::playback::{MAX_FPS, PlaybackOpts, PlaybackSession, PlaybackStats};
