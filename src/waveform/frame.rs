use kurbo::{PathEl, Shape as _};

use crate::foundation::core::{BezPath, Extent, Point, Rect, lerp_point};

/// One keyframe of a looping shape animation.
#[derive(Clone, Debug, serde::Serialize)]
pub struct PathFrame {
    /// Global phase offset this frame was evaluated at.
    pub phase: f64,
    /// Sample nodes along the top contour, left to right.
    pub points: Vec<Point>,
    /// Closed region: top contour, bottom corners, back to the first node.
    #[serde(rename = "d", serialize_with = "serialize_path_data")]
    pub path: BezPath,
}

fn serialize_path_data<S: serde::Serializer>(path: &BezPath, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&path.to_svg())
}

impl PathFrame {
    /// SVG path-data text for this frame.
    pub fn path_data(&self) -> String {
        self.path.to_svg()
    }

    /// Number of sample nodes.
    pub fn sample_count(&self) -> usize {
        self.points.len()
    }

    /// Horizontal coordinate of each sample node.
    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.x)
    }

    /// `true` when the path ends with a close command.
    pub fn is_closed(&self) -> bool {
        matches!(self.path.elements().last(), Some(PathEl::ClosePath))
    }

    /// `true` when both paths have the same command sequence and can be tweened pointwise.
    pub fn is_interpolable_with(&self, other: &PathFrame) -> bool {
        let a = self.path.elements();
        let b = other.path.elements();
        a.len() == b.len()
            && a
                .iter()
                .zip(b)
                .all(|(x, y)| std::mem::discriminant(x) == std::mem::discriminant(y))
    }

    /// Axis-aligned bounds of the closed region.
    pub fn bounds(&self) -> Rect {
        self.path.bounding_box()
    }
}

/// Path under construction for a filled wave region.
pub(crate) struct RegionBuilder {
    path: BezPath,
    extent: Extent,
}

impl RegionBuilder {
    pub(crate) fn start(extent: Extent, origin: Point) -> Self {
        let mut path = BezPath::new();
        path.move_to(origin);
        Self { path, extent }
    }

    pub(crate) fn line_to(&mut self, p: Point) {
        self.path.line_to(p);
    }

    pub(crate) fn quad_to(&mut self, ctrl: Point, p: Point) {
        self.path.quad_to(ctrl, p);
    }

    pub(crate) fn curve_to(&mut self, c1: Point, c2: Point, p: Point) {
        self.path.curve_to(c1, c2, p);
    }

    /// Straight edges through `pts`, skipping the first node (already the current point).
    pub(crate) fn polyline(&mut self, pts: &[Point]) {
        for &p in pts.iter().skip(1) {
            self.line_to(p);
        }
    }

    /// Polyline whose interior corners are cut by quadratic arcs of up to `radius`.
    ///
    /// Every interior vertex emits exactly one line and one quad, even when the radius is
    /// zero, so frames built with different radii stay interpolable.
    pub(crate) fn rounded_polyline(&mut self, pts: &[Point], radius: f64) {
        let n = pts.len();
        if n < 2 {
            return;
        }
        for i in 1..n - 1 {
            let (prev, v, next) = (pts[i - 1], pts[i], pts[i + 1]);
            self.line_to(toward(v, prev, radius));
            self.quad_to(v, toward(v, next, radius));
        }
        self.line_to(pts[n - 1]);
    }

    /// Smooth curve through `pts` using Catmull-Rom tangents converted to cubic Béziers.
    pub(crate) fn catmull_rom(&mut self, pts: &[Point]) {
        let n = pts.len();
        for i in 0..n.saturating_sub(1) {
            let p0 = pts[i.saturating_sub(1)];
            let p1 = pts[i];
            let p2 = pts[i + 1];
            let p3 = pts[(i + 2).min(n - 1)];
            let c1 = p1 + (p2 - p0) / 6.0;
            let c2 = p2 - (p3 - p1) / 6.0;
            self.curve_to(c1, c2, p2);
        }
    }

    /// Quadratic segments through the midpoints of `pts`, using each node as control.
    pub(crate) fn midpoint_quads(&mut self, pts: &[Point]) {
        let n = pts.len();
        if n < 2 {
            return;
        }
        for i in 1..n - 1 {
            self.quad_to(pts[i], lerp_point(pts[i], pts[i + 1], 0.5));
        }
        self.line_to(pts[n - 1]);
    }

    /// Drop to the bottom corners and close back to the origin.
    pub(crate) fn finish(mut self) -> BezPath {
        let (w, h) = (self.extent.width, self.extent.height);
        self.path.line_to(Point::new(w, h));
        self.path.line_to(Point::new(0.0, h));
        self.path.close_path();
        self.path
    }
}

/// Point `dist` from `v` in the direction of `target`, never past the edge midpoint.
fn toward(v: Point, target: Point, dist: f64) -> Point {
    let len = (target - v).hypot();
    if len <= f64::EPSILON {
        return v;
    }
    lerp_point(v, target, (dist.max(0.0) / len).min(0.5))
}

#[cfg(test)]
#[path = "../../tests/unit/waveform/frame.rs"]
mod tests;
