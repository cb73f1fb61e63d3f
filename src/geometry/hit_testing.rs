use egui::{Pos2, Rect};
use kurbo::{Affine, BezPath, Shape};

use crate::curve::Curve;
use crate::geometry::{to_kurbo_rect, to_point};

/// Rectangles flatten to straight segments, so any tolerance works.
const PATH_TOLERANCE: f64 = 0.1;

/// A screen selection rectangle carried into world space. Under a rotated
/// view it becomes a parallelogram, so it is kept as a closed path.
#[derive(Debug, Clone)]
pub struct SelectionArea {
    path: BezPath,
    bounds: kurbo::Rect,
}

impl SelectionArea {
    pub fn new(path: BezPath) -> Self {
        let bounds = path.bounding_box();
        Self { path, bounds }
    }

    pub fn from_rect(rect: Rect) -> Self {
        Self::transformed(Affine::IDENTITY, rect)
    }

    /// `rect` mapped through `transform`.
    pub fn transformed(transform: Affine, rect: Rect) -> Self {
        Self::new(transform * to_kurbo_rect(rect).to_path(PATH_TOLERANCE))
    }

    pub fn bounds(&self) -> kurbo::Rect {
        self.bounds
    }

    /// A region spanned by a click without drag has no area and holds nothing.
    pub fn contains(&self, pt: Pos2) -> bool {
        self.path.area() != 0.0 && self.path.contains(to_point(pt))
    }

    /// Coarse overlap of the area's bounds with `rect`. An empty `rect`
    /// never overlaps.
    pub fn overlaps_box(&self, rect: Rect) -> bool {
        if is_empty_box(rect) {
            return false;
        }
        let other = to_kurbo_rect(rect);
        self.bounds.x0 <= other.x1
            && other.x0 <= self.bounds.x1
            && self.bounds.y0 <= other.y1
            && other.y0 <= self.bounds.y1
    }
}

/// A box with zero width or zero height, e.g. the bounds of a single point
/// or of a perfectly horizontal / vertical curve.
pub fn is_empty_box(rect: Rect) -> bool {
    rect.width() <= 0.0 || rect.height() <= 0.0
}

/// Decides whether a curve is caught by a world-space selection area.
///
/// The bounding box must overlap the area (a degenerate box is exempt from
/// this pre-check) and at least one sampled point must lie inside the area.
pub fn curve_in_selection(curve: &Curve, area: &SelectionArea) -> bool {
    let bbox = curve.bounding_box();
    if !area.overlaps_box(bbox) && !is_empty_box(bbox) {
        return false;
    }

    curve.points().iter().any(|pt| area.contains(*pt))
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, Color32};
    use std::f64::consts::FRAC_PI_4;

    fn curve(points: &[Pos2]) -> Curve {
        let mut c = Curve::new(points[0], Color32::BLACK, 2.0);
        for p in &points[1..] {
            c.add_point(*p);
        }
        c
    }

    fn area(min: Pos2, max: Pos2) -> SelectionArea {
        SelectionArea::from_rect(Rect::from_min_max(min, max))
    }

    #[test]
    fn test_area_contains_interior_points() {
        let area = area(pos2(0.0, 0.0), pos2(10.0, 10.0));
        assert!(area.contains(pos2(5.0, 5.0)));
        assert!(area.contains(pos2(0.5, 9.5)));
        assert!(!area.contains(pos2(11.0, 5.0)));
        assert!(!area.contains(pos2(5.0, -1.0)));
    }

    #[test]
    fn test_click_area_holds_nothing() {
        let area = area(pos2(4.0, 4.0), pos2(4.0, 4.0));
        assert!(!area.contains(pos2(4.0, 4.0)));
        assert!(!curve_in_selection(&curve(&[pos2(4.0, 4.0)]), &area));
    }

    #[test]
    fn test_rotated_area() {
        // 10 x 10 square turned 45 degrees about the origin: a diamond with
        // corners (0, 0), (7.07, 7.07), (0, 14.14), (-7.07, 7.07)
        let diamond = SelectionArea::transformed(
            Affine::rotate(FRAC_PI_4),
            Rect::from_min_max(pos2(0.0, 0.0), pos2(10.0, 10.0)),
        );
        assert!(diamond.contains(pos2(0.0, 7.0)));
        assert!(!diamond.contains(pos2(6.0, 1.0)));
        assert!(diamond.bounds().x0 < -7.0);

        let far_box = Rect::from_min_max(pos2(20.0, 20.0), pos2(30.0, 30.0));
        assert!(!diamond.overlaps_box(far_box));
        let near_box = Rect::from_min_max(pos2(5.0, 5.0), pos2(30.0, 30.0));
        assert!(diamond.overlaps_box(near_box));
    }

    #[test]
    fn test_curve_outside_is_not_selected() {
        let region = area(pos2(0.0, 0.0), pos2(10.0, 10.0));
        let c = curve(&[pos2(50.0, 50.0), pos2(60.0, 70.0)]);
        assert!(!curve_in_selection(&c, &region));
    }

    #[test]
    fn test_bbox_overlap_without_point_inside_is_not_selected() {
        // the curve's bounds cover the region but both points lie outside
        let region = area(pos2(40.0, 0.0), pos2(60.0, 20.0));
        let c = curve(&[pos2(0.0, 0.0), pos2(100.0, 100.0)]);
        assert!(!curve_in_selection(&c, &region));
    }

    #[test]
    fn test_one_point_inside_is_enough() {
        let region = area(pos2(0.0, 0.0), pos2(20.0, 20.0));
        let c = curve(&[pos2(-30.0, -5.0), pos2(10.0, 10.0), pos2(60.0, 40.0), pos2(90.0, -10.0)]);
        assert_eq!(c.points().iter().filter(|p| region.contains(**p)).count(), 1);
        assert!(curve_in_selection(&c, &region));
    }

    #[test]
    fn test_single_point_curve_inside_is_selected() {
        let region = area(pos2(0.0, 0.0), pos2(10.0, 10.0));
        let c = curve(&[pos2(4.0, 4.0)]);
        assert!(curve_in_selection(&c, &region));
    }
}
