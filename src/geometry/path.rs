use crate::dataset::record::MedianPoint;
use crate::foundation::core::{BezPath, Point};
use kurbo::{ParamCurve, ParamCurveArclen, PathEl, PathSeg};

/// Arc-length accuracy in glyph units.
pub(crate) const ARCLEN_ACCURACY: f64 = 1e-6;

/// A traceable stroke path (outline or median) in glyph units.
///
/// Construction never fails: malformed input produces an empty path, which draws nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrokePath {
    path: BezPath,
}

impl StrokePath {
    /// Empty path.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse an SVG path description (`M`, `L`, `Q`, `C`, `Z`, ...).
    pub fn parse(d: &str) -> Self {
        match BezPath::from_svg(d.trim()) {
            Ok(path) => Self { path },
            Err(e) => {
                tracing::warn!(error = %e, "invalid stroke path description; drawing nothing");
                Self::empty()
            }
        }
    }

    /// Build an open polyline through `points`. Fewer than two points is a zero-length path.
    pub fn from_polyline(points: &[MedianPoint]) -> Self {
        if points.len() < 2 {
            return Self::empty();
        }
        let mut path = BezPath::new();
        path.move_to(Point::new(points[0][0], points[0][1]));
        for p in &points[1..] {
            path.line_to(Point::new(p[0], p[1]));
        }
        Self { path }
    }

    /// Borrow the underlying kurbo path.
    pub fn bez_path(&self) -> &BezPath {
        &self.path
    }

    /// Return `true` when the path has no drawable segment.
    pub fn is_empty(&self) -> bool {
        self.path.segments().next().is_none()
    }

    /// Total arc length over every subpath.
    pub fn arc_length(&self) -> f64 {
        self.path
            .segments()
            .map(|seg| seg.arclen(ARCLEN_ACCURACY))
            .sum()
    }

    /// Leading `percent` of the path by arc length.
    ///
    /// Each contour is truncated at the same fraction of its own length. `percent <= 0` (or NaN)
    /// yields an empty path and `percent >= 1` yields the path unchanged.
    pub fn extract_prefix(&self, percent: f64) -> StrokePath {
        if percent.is_nan() || percent <= 0.0 {
            return Self::empty();
        }
        if percent >= 1.0 {
            return self.clone();
        }

        let mut out = BezPath::new();
        for contour in contours(&self.path) {
            append_contour_prefix(&mut out, &contour, percent);
        }
        Self { path: out }
    }
}

impl From<BezPath> for StrokePath {
    fn from(path: BezPath) -> Self {
        Self { path }
    }
}

/// Split a path into its contours, each starting at a `MoveTo`.
fn contours(path: &BezPath) -> Vec<BezPath> {
    let mut out: Vec<Vec<PathEl>> = Vec::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(_) => out.push(vec![el]),
            _ => match out.last_mut() {
                Some(cur) => cur.push(el),
                // kurbo paths always start with MoveTo; tolerate hand-built ones that don't.
                None => out.push(vec![PathEl::MoveTo(Point::ORIGIN), el]),
            },
        }
    }
    out.into_iter().map(BezPath::from_vec).collect()
}

fn append_contour_prefix(out: &mut BezPath, contour: &BezPath, percent: f64) {
    let segs: Vec<(PathSeg, f64)> = contour
        .segments()
        .map(|seg| (seg, seg.arclen(ARCLEN_ACCURACY)))
        .collect();
    let total: f64 = segs.iter().map(|(_, len)| len).sum();
    if segs.is_empty() || total <= 0.0 {
        return;
    }

    let target = total * percent;
    let mut walked = 0.0;
    out.move_to(segs[0].0.start());
    for (seg, len) in segs {
        if walked + len >= target {
            let t = if len > 0.0 {
                seg.inv_arclen(target - walked, ARCLEN_ACCURACY)
                    .clamp(0.0, 1.0)
            } else {
                0.0
            };
            if t > 0.0 {
                out.push(seg.subsegment(0.0..t).as_path_el());
            }
            return;
        }
        out.push(seg.as_path_el());
        walked += len;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/path.rs"]
mod tests;
