use crate::foundation::core::Canvas;
use crate::foundation::error::{BihuaError, BihuaResult};
use crate::geometry::glyph_space::GLYPH_BASELINE;
use crate::render::color::Rgba8;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Line cap for stroked paths.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCap {
    /// Flat end at the path end point.
    #[default]
    Butt,
    /// Semicircular end; joins are rounded as well.
    Round,
}

/// Stroke appearance. `width` is in glyph units and scales with the canvas.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StrokeStyle {
    pub color: Rgba8,
    pub width: f64,
    #[serde(default)]
    pub cap: LineCap,
}

impl StrokeStyle {
    /// Thin black stroke for outlines.
    pub fn outline() -> Self {
        Self {
            color: Rgba8::BLACK,
            width: 6.0,
            cap: LineCap::Butt,
        }
    }

    /// Thick rounded ink stroke for medians.
    pub fn pen() -> Self {
        Self {
            color: Rgba8::rgb(0xd3, 0x2f, 0x2f),
            width: 48.0,
            cap: LineCap::Round,
        }
    }
}

/// Rendering configuration, loadable from JSON. Missing fields take their defaults.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderOpts {
    /// Output size in pixels.
    pub canvas: Canvas,
    /// Clear color; `None` leaves the frame transparent.
    pub background: Option<Rgba8>,
    /// Style of stroke outlines.
    pub outline: StrokeStyle,
    /// Style of the median being traced.
    pub pen: StrokeStyle,
    /// Style of already traced medians; defaults to `pen`.
    pub completed_pen: Option<StrokeStyle>,
    /// Glyph-unit y coordinate mapped to the top edge of the canvas.
    pub baseline: f64,
}

impl Default for RenderOpts {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            background: Some(Rgba8::WHITE),
            outline: StrokeStyle::outline(),
            pen: StrokeStyle::pen(),
            completed_pen: None,
            baseline: GLYPH_BASELINE,
        }
    }
}

impl RenderOpts {
    /// Parse options from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> BihuaResult<Self> {
        let opts: Self = serde_json::from_reader(r)
            .map_err(|e| BihuaError::serde(format!("parse render options JSON: {e}")))?;
        opts.validate()?;
        Ok(opts)
    }

    /// Parse options from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> BihuaResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            BihuaError::validation(format!("open render options '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check canvas bounds, stroke widths and baseline.
    pub fn validate(&self) -> BihuaResult<()> {
        self.canvas.validate()?;
        let styles = [Some(&self.outline), Some(&self.pen), self.completed_pen.as_ref()];
        for style in styles.into_iter().flatten() {
            if !(style.width.is_finite() && style.width > 0.0) {
                return Err(BihuaError::validation("stroke width must be finite and > 0"));
            }
        }
        if !self.baseline.is_finite() {
            return Err(BihuaError::validation("baseline must be finite"));
        }
        Ok(())
    }

    /// Style used for traced medians.
    pub fn completed_style(&self) -> &StrokeStyle {
        self.completed_pen.as_ref().unwrap_or(&self.pen)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/style.rs"]
mod tests;
