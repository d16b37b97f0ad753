use crate::foundation::error::{BihuaError, BihuaResult};

pub use kurbo::{Affine, BezPath, Point, Vec2};

/// Side length of the square glyph coordinate grid used by stroke datasets.
pub const GLYPH_GRID: f64 = 1024.0;

/// 0-based index of a rendered frame within a playback.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create a validated canvas. Both sides must be non-zero and fit the raster backend.
    pub fn new(width: u32, height: u32) -> BihuaResult<Self> {
        let canvas = Self { width, height };
        canvas.validate()?;
        Ok(canvas)
    }

    /// Square canvas helper.
    pub fn square(side: u32) -> BihuaResult<Self> {
        Self::new(side, side)
    }

    pub(crate) fn validate(self) -> BihuaResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(BihuaError::validation("canvas width and height must be > 0"));
        }
        if self.width > u32::from(u16::MAX) || self.height > u32::from(u16::MAX) {
            return Err(BihuaError::validation("canvas side exceeds u16"));
        }
        Ok(())
    }

    /// Canvas size as floating-point `(width, height)`.
    pub fn size_f64(self) -> (f64, f64) {
        (f64::from(self.width), f64::from(self.height))
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
