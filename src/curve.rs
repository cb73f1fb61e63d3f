use egui::{Color32, Pos2, Rect};

/// Stroke widths never go below this, however often they are narrowed.
pub const MIN_STROKE_WIDTH: f32 = 1.0;

/// A freehand polyline in world coordinates.
///
/// Points are only ever appended. The bounding box is the running union of
/// every point added so far, so a fresh curve has a zero-area box sitting on
/// its first point.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    points: Vec<Pos2>,
    bounding_box: Rect,
    color: Color32,
    stroke_width: f32,
}

impl Curve {
    pub fn new(first: Pos2, color: Color32, stroke_width: f32) -> Self {
        Self {
            points: vec![first],
            bounding_box: Rect::from_min_max(first, first),
            color,
            stroke_width: stroke_width.max(MIN_STROKE_WIDTH),
        }
    }

    /// Appends a point. Sampling density is the caller's business.
    pub fn add_point(&mut self, pt: Pos2) {
        self.points.push(pt);
        self.bounding_box.extend_with(pt);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn last_point(&self) -> Pos2 {
        // never empty: constructed with a first point, append-only afterwards
        self.points[self.points.len() - 1]
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn bounding_box(&self) -> Rect {
        self.bounding_box
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    pub fn set_stroke_width(&mut self, width: f32) {
        self.stroke_width = width.max(MIN_STROKE_WIDTH);
    }

    pub fn adjust_stroke_width(&mut self, delta: f32) {
        self.set_stroke_width(self.stroke_width + delta);
    }
}
