use crate::dataset::record::{MedianPoint, StrokeEntry};
use crate::foundation::error::{BihuaError, BihuaResult};
use crate::geometry::path::StrokePath;

/// Geometry layers to draw for one animation instant, in glyph units.
///
/// Draw order is `outlines`, then `completed_medians`, then `active_median`.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawPlan<'a> {
    /// Every stroke outline, always complete. Malformed outlines are empty paths.
    pub outlines: &'a [StrokePath],
    /// Medians of strokes already traced.
    pub completed_medians: &'a [StrokePath],
    /// Traced part of the current stroke's median.
    pub active_median: Option<StrokePath>,
}

/// Frame query result.
#[derive(Debug, Clone, PartialEq)]
pub enum FramePlan<'a> {
    /// Stroke data exists; draw these layers.
    Ready(DrawPlan<'a>),
    /// No stroke data for the character. Hosts show an informational state, not an error.
    Unavailable,
}

impl<'a> FramePlan<'a> {
    /// Borrow the draw plan, if any.
    pub fn as_ready(&self) -> Option<&DrawPlan<'a>> {
        match self {
            Self::Ready(plan) => Some(plan),
            Self::Unavailable => None,
        }
    }

    /// Return `true` for [`FramePlan::Unavailable`].
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable)
    }
}

/// Parsed stroke geometry for one character.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreparedGlyph {
    outlines: Vec<StrokePath>,
    medians: Vec<StrokePath>,
}

impl PreparedGlyph {
    /// Parse outlines and medians. Bad paths degrade to empty ones; only a count mismatch fails.
    pub fn new(strokes: &[String], medians: &[Vec<MedianPoint>]) -> BihuaResult<Self> {
        if strokes.len() != medians.len() {
            return Err(BihuaError::validation(format!(
                "{} stroke outlines but {} medians",
                strokes.len(),
                medians.len()
            )));
        }
        Ok(Self {
            outlines: strokes.iter().map(|d| StrokePath::parse(d)).collect(),
            medians: medians
                .iter()
                .map(|pts| StrokePath::from_polyline(pts))
                .collect(),
        })
    }

    /// Prepare a dataset entry.
    pub fn from_entry(entry: &StrokeEntry) -> BihuaResult<Self> {
        Self::new(&entry.strokes, &entry.medians)
    }

    /// Number of strokes.
    pub fn stroke_count(&self) -> usize {
        self.outlines.len()
    }

    /// Stroke outlines in writing order.
    pub fn outlines(&self) -> &[StrokePath] {
        &self.outlines
    }

    /// Stroke medians in writing order.
    pub fn medians(&self) -> &[StrokePath] {
        &self.medians
    }

    /// Layers for stroke `stroke_index` traced to `progress`.
    ///
    /// `stroke_index` past the end means everything is traced.
    pub fn plan_at(&self, stroke_index: usize, progress: f64) -> DrawPlan<'_> {
        let idx = stroke_index.min(self.medians.len());
        let active_median = self
            .medians
            .get(idx)
            .map(|m| m.extract_prefix(progress))
            .filter(|p| !p.is_empty());
        DrawPlan {
            outlines: &self.outlines,
            completed_medians: &self.medians[..idx],
            active_median,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/glyph.rs"]
mod tests;
