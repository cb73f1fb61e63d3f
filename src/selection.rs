use egui::{Pos2, Rect};

/// Rubber-band rectangle in screen space, spanned by the press point and the
/// current drag point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionRegion {
    anchor: Pos2,
    rect: Rect,
}

impl SelectionRegion {
    pub fn new(anchor: Pos2) -> Self {
        Self {
            anchor,
            rect: Rect::from_min_max(anchor, anchor),
        }
    }

    /// Recomputes the rectangle from the anchor; dragging back past the
    /// anchor shrinks and flips it.
    pub fn update(&mut self, current: Pos2) {
        self.rect = Rect::from_two_pos(self.anchor, current);
    }

    pub fn anchor(&self) -> Pos2 {
        self.anchor
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }
}
