use crate::foundation::core::{BezPath, Canvas};
use crate::foundation::error::{BihuaError, BihuaResult};
use crate::render::color::Rgba8;
use crate::render::style::LineCap;
use crate::render::surface::{DrawSurface, FrameRGBA, Layer, StrokePaint};

/// CPU raster surface powered by `vello_cpu`.
///
/// The render context is kept between frames and only rebuilt when the canvas size changes.
#[derive(Default)]
pub struct CpuSurface {
    ctx: Option<vello_cpu::RenderContext>,
    canvas: Option<Canvas>,
}

impl CpuSurface {
    /// Surface with no frame in progress.
    pub fn new() -> Self {
        Self::default()
    }

    fn ctx_mut(&mut self) -> BihuaResult<&mut vello_cpu::RenderContext> {
        self.ctx
            .as_mut()
            .ok_or_else(|| BihuaError::render("cpu surface used before begin"))
    }
}

impl DrawSurface for CpuSurface {
    type Output = FrameRGBA;

    fn begin(&mut self, canvas: Canvas, background: Option<Rgba8>) -> BihuaResult<()> {
        let (width, height) = canvas_u16(canvas)?;
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        if let Some(bg) = background {
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(bg.r, bg.g, bg.b, bg.a));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(width),
                f64::from(height),
            ));
        }
        self.ctx = Some(ctx);
        self.canvas = Some(canvas);
        Ok(())
    }

    fn stroke_path(
        &mut self,
        _layer: Layer,
        path: &BezPath,
        paint: &StrokePaint,
    ) -> BihuaResult<()> {
        let ctx = self.ctx_mut()?;
        let (cap, join) = match paint.cap {
            LineCap::Butt => (vello_cpu::kurbo::Cap::Butt, vello_cpu::kurbo::Join::Miter),
            LineCap::Round => (vello_cpu::kurbo::Cap::Round, vello_cpu::kurbo::Join::Round),
        };
        let c = paint.color;
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
        ctx.set_stroke(
            vello_cpu::kurbo::Stroke::new(paint.width_px)
                .with_caps(cap)
                .with_join(join),
        );
        ctx.stroke_path(&bezpath_to_cpu(path));
        Ok(())
    }

    fn finish(&mut self) -> BihuaResult<FrameRGBA> {
        let canvas = self
            .canvas
            .take()
            .ok_or_else(|| BihuaError::render("cpu surface finished before begin"))?;
        let (width, height) = canvas_u16(canvas)?;
        let ctx = self.ctx_mut()?;
        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);
        Ok(FrameRGBA {
            width: canvas.width,
            height: canvas.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

fn canvas_u16(canvas: Canvas) -> BihuaResult<(u16, u16)> {
    let width: u16 = canvas
        .width
        .try_into()
        .map_err(|_| BihuaError::render("surface width exceeds u16"))?;
    let height: u16 = canvas
        .height
        .try_into()
        .map_err(|_| BihuaError::render("surface height exceeds u16"))?;
    if width == 0 || height == 0 {
        return Err(BihuaError::render("surface size must be > 0"));
    }
    Ok((width, height))
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
