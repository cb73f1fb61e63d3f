use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke, Vec2};

use crate::controller::SketchController;
use crate::curve::Curve;
use crate::state::Mode;
use crate::view::ViewTransform;

const SELECTED_CURVE_COLOR: Color32 = Color32::from_rgb(255, 200, 0);
const SELECTION_BOX_COLOR: Color32 = Color32::from_rgba_premultiplied(64, 0, 0, 64);
const SELECTION_BOX_WIDTH: f32 = 3.0;
const INFO_COLOR: Color32 = Color32::from_rgba_premultiplied(128, 0, 0, 128);
const CROSS_HAIR_COLOR: Color32 = Color32::from_rgba_premultiplied(64, 0, 0, 64);
const CROSS_HAIR_WIDTH: f32 = 5.0;
const CROSS_HAIR_RADIUS: f32 = 30.0;
const PEN_TIP_OFFSET: f32 = 30.0;
const INFO_OFFSET: Vec2 = Vec2::new(20.0, 10.0);

/// Paints the sketch. Reads the controller, never changes it.
#[derive(Debug)]
pub struct Renderer {
    background: Color32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            background: Color32::WHITE,
        }
    }

    /// Renders the current frame into `rect`, the canvas area on screen.
    pub fn render(&self, painter: &Painter, rect: Rect, sketch: &SketchController) {
        painter.rect_filled(rect, 0.0, self.background);
        let painter = painter.with_clip_rect(rect);

        // world space
        let view = sketch.view();
        for curve in sketch.unselected() {
            draw_curve(&painter, rect, view, curve, curve.color());
        }
        for curve in sketch.selected() {
            draw_curve(&painter, rect, view, curve, SELECTED_CURVE_COLOR);
        }
        if let Some(curve) = sketch.current_curve() {
            draw_curve(&painter, rect, view, curve, curve.color());
        }

        // screen space
        if let Some(region) = sketch.selection_region() {
            painter.rect_stroke(
                region.rect().translate(rect.min.to_vec2()),
                0.0,
                Stroke::new(SELECTION_BOX_WIDTH, SELECTION_BOX_COLOR),
            );
        }
        if sketch.mode() == Mode::ZoomRotate {
            draw_cross_hair(&painter, rect.min + view.pivot().to_vec2());
        }
        if sketch.mode() == Mode::Color {
            draw_palette(&painter, rect, sketch);
        }
        draw_pen_tip(&painter, rect, sketch);

        painter.text(
            rect.min + INFO_OFFSET,
            Align2::LEFT_TOP,
            sketch.mode().label(),
            FontId::monospace(24.0),
            INFO_COLOR,
        );
    }
}

fn to_screen(rect: Rect, view: &ViewTransform, world: Pos2) -> Pos2 {
    rect.min + view.world_to_screen(world).to_vec2()
}

fn draw_curve(painter: &Painter, rect: Rect, view: &ViewTransform, curve: &Curve, color: Color32) {
    if curve.point_count() < 2 {
        return;
    }
    let points: Vec<Pos2> = curve
        .points()
        .iter()
        .map(|pt| to_screen(rect, view, *pt))
        .collect();
    let width = curve.stroke_width() * view.zoom();
    painter.add(Shape::line(points, Stroke::new(width, color)));
}

fn draw_cross_hair(painter: &Painter, center: Pos2) {
    let stroke = Stroke::new(CROSS_HAIR_WIDTH, CROSS_HAIR_COLOR);
    let r = CROSS_HAIR_RADIUS;
    painter.line_segment([center - Vec2::new(r, 0.0), center + Vec2::new(r, 0.0)], stroke);
    painter.line_segment([center - Vec2::new(0.0, r), center + Vec2::new(0.0, r)], stroke);
}

fn draw_palette(painter: &Painter, rect: Rect, sketch: &SketchController) {
    let palette = sketch.palette();
    let viewport = sketch.viewport();
    for row in 0..palette.brightness_cells() {
        for col in 0..palette.hue_cells() {
            if let Some(color) = palette.color(row, col) {
                let cell = palette.cell_rect(row, col, viewport);
                painter.rect_filled(cell.translate(rect.min.to_vec2()), 0.0, color);
            }
        }
    }
}

/// Pen preview in the top-right corner: current color, current width as it
/// would appear at the present zoom.
fn draw_pen_tip(painter: &Painter, rect: Rect, sketch: &SketchController) {
    let center = Pos2::new(rect.max.x - PEN_TIP_OFFSET, rect.min.y + PEN_TIP_OFFSET);
    let radius = sketch.pen_width() * sketch.view().zoom() / 2.0;
    painter.circle_filled(center, radius, sketch.pen_color());
}
