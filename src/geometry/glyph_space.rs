use crate::foundation::core::{Affine, BezPath, Canvas, GLYPH_GRID, Point};

/// Glyph-unit y coordinate that lands on the top edge of the canvas.
///
/// Stroke datasets put the em box between y = -124 and y = 900 with y pointing up. The value is a
/// calibration constant for that convention, not something derived from the data.
pub const GLYPH_BASELINE: f64 = 900.0;

/// Mapping from the 1024-unit glyph grid onto a pixel canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphSpace {
    affine: Affine,
}

impl GlyphSpace {
    /// Scale by `(W/1024, H/1024)`, flip the vertical axis and shift by `baseline` glyph units.
    pub fn new(canvas: Canvas, baseline: f64) -> Self {
        let (w, h) = canvas.size_f64();
        let sx = w / GLYPH_GRID;
        let sy = h / GLYPH_GRID;
        Self {
            affine: Affine::new([sx, 0.0, 0.0, -sy, 0.0, baseline * sy]),
        }
    }

    /// Mapping with the default [`GLYPH_BASELINE`].
    pub fn for_canvas(canvas: Canvas) -> Self {
        Self::new(canvas, GLYPH_BASELINE)
    }

    /// Underlying affine transform.
    pub fn affine(self) -> Affine {
        self.affine
    }

    /// Map a glyph-space point to canvas pixels.
    pub fn to_canvas(self, p: Point) -> Point {
        self.affine * p
    }

    /// Map a glyph-space path to canvas pixels.
    pub fn apply(self, path: &BezPath) -> BezPath {
        let mut out = path.clone();
        out.apply_affine(self.affine);
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/glyph_space.rs"]
mod tests;
