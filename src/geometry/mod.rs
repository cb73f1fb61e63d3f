//! Bridges between egui's `f32` screen types and kurbo's `f64` geometry.

pub mod hit_testing;

pub use hit_testing::{curve_in_selection, is_empty_box, SelectionArea};

use egui::{Pos2, Rect};

pub fn to_point(pos: Pos2) -> kurbo::Point {
    kurbo::Point::new(pos.x as f64, pos.y as f64)
}

pub fn to_pos2(point: kurbo::Point) -> Pos2 {
    Pos2::new(point.x as f32, point.y as f32)
}

pub fn to_kurbo_rect(rect: Rect) -> kurbo::Rect {
    kurbo::Rect::new(
        rect.min.x as f64,
        rect.min.y as f64,
        rect.max.x as f64,
        rect.max.y as f64,
    )
}
