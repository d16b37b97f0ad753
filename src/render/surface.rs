use crate::animation::glyph::{DrawPlan, FramePlan};
use crate::foundation::core::{BezPath, Canvas, GLYPH_GRID};
use crate::foundation::error::BihuaResult;
use crate::geometry::glyph_space::GlyphSpace;
use crate::geometry::path::StrokePath;
use crate::render::color::Rgba8;
use crate::render::style::{LineCap, RenderOpts, StrokeStyle};

/// A rendered frame as RGBA8 pixels.
///
/// Frames are **premultiplied alpha**; the flag makes that explicit at API boundaries.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Straight-alpha copy of the pixel data, as image encoders expect.
    pub fn to_straight_rgba(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        if !self.premultiplied {
            return out;
        }
        for px in out.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 {
                px[0] = 0;
                px[1] = 0;
                px[2] = 0;
                continue;
            }
            px[0] = ((u16::from(px[0]) * 255 + a / 2) / a).min(255) as u8;
            px[1] = ((u16::from(px[1]) * 255 + a / 2) / a).min(255) as u8;
            px[2] = ((u16::from(px[2]) * 255 + a / 2) / a).min(255) as u8;
        }
        out
    }
}

/// Which draw-plan layer a stroke belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    /// Stroke outline backdrop.
    Outline,
    /// Fully traced median.
    CompletedMedian,
    /// Median currently being traced.
    ActiveMedian,
}

/// A stroke style resolved to canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokePaint {
    /// Stroke color.
    pub color: Rgba8,
    /// Line width in pixels.
    pub width_px: f64,
    /// Line cap (round caps also round joins).
    pub cap: LineCap,
}

impl StrokePaint {
    fn resolve(style: &StrokeStyle, px_per_unit: f64) -> Self {
        Self {
            color: style.color,
            width_px: style.width * px_per_unit,
            cap: style.cap,
        }
    }
}

/// A destination the renderer can stroke canvas-space paths onto.
///
/// Calls arrive as `begin`, any number of `stroke_path`, then `finish`. Later strokes paint over
/// earlier ones.
pub trait DrawSurface {
    /// Value produced by [`DrawSurface::finish`].
    type Output;

    /// Prepare a fresh `canvas`-sized target, cleared to `background` if given.
    fn begin(&mut self, canvas: Canvas, background: Option<Rgba8>) -> BihuaResult<()>;

    /// Stroke `path`, already in canvas pixels.
    fn stroke_path(&mut self, layer: Layer, path: &BezPath, paint: &StrokePaint)
    -> BihuaResult<()>;

    /// Complete the frame.
    fn finish(&mut self) -> BihuaResult<Self::Output>;
}

/// Render `plan` onto `surface`: outlines first, then traced medians, then the active median.
pub fn draw_plan<S: DrawSurface + ?Sized>(
    plan: &DrawPlan<'_>,
    opts: &RenderOpts,
    surface: &mut S,
) -> BihuaResult<S::Output> {
    let space = GlyphSpace::new(opts.canvas, opts.baseline);
    let (w, h) = opts.canvas.size_f64();
    let px_per_unit = w.min(h) / GLYPH_GRID;

    let outline = StrokePaint::resolve(&opts.outline, px_per_unit);
    let completed = StrokePaint::resolve(opts.completed_style(), px_per_unit);
    let active = StrokePaint::resolve(&opts.pen, px_per_unit);

    surface.begin(opts.canvas, opts.background)?;
    for path in plan.outlines {
        stroke_layer(surface, &space, Layer::Outline, path, &outline)?;
    }
    for path in plan.completed_medians {
        stroke_layer(surface, &space, Layer::CompletedMedian, path, &completed)?;
    }
    if let Some(path) = &plan.active_median {
        stroke_layer(surface, &space, Layer::ActiveMedian, path, &active)?;
    }
    surface.finish()
}

/// Render a frame query result. An unavailable character renders as a blank canvas.
pub fn draw_frame_plan<S: DrawSurface + ?Sized>(
    plan: &FramePlan<'_>,
    opts: &RenderOpts,
    surface: &mut S,
) -> BihuaResult<S::Output> {
    match plan {
        FramePlan::Ready(plan) => draw_plan(plan, opts, surface),
        FramePlan::Unavailable => {
            tracing::trace!("rendering blank frame for unavailable character");
            surface.begin(opts.canvas, opts.background)?;
            surface.finish()
        }
    }
}

fn stroke_layer<S: DrawSurface + ?Sized>(
    surface: &mut S,
    space: &GlyphSpace,
    layer: Layer,
    path: &StrokePath,
    paint: &StrokePaint,
) -> BihuaResult<()> {
    if path.is_empty() {
        return Ok(());
    }
    surface.stroke_path(layer, &space.apply(path.bez_path()), paint)
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
