use egui::Color32;

use crate::curve::Curve;
use crate::geometry::hit_testing::{curve_in_selection, SelectionArea};

/// The committed strokes, split into unselected and selected curves.
///
/// Each curve sits in exactly one of the two lists; moving between them
/// transfers ownership, so a curve can never show up twice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Drawing {
    unselected: Vec<Curve>,
    selected: Vec<Curve>,
}

impl Drawing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_curve(&mut self, curve: Curve) {
        self.unselected.push(curve);
    }

    pub fn unselected(&self) -> &[Curve] {
        &self.unselected
    }

    pub fn selected(&self) -> &[Curve] {
        &self.selected
    }

    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    pub fn curve_count(&self) -> usize {
        self.unselected.len() + self.selected.len()
    }

    /// Moves every unselected curve caught by `region` into the selection and
    /// returns how many moved. Already selected curves are left alone.
    pub fn select_in(&mut self, region: &SelectionArea) -> usize {
        let (hits, misses): (Vec<Curve>, Vec<Curve>) = std::mem::take(&mut self.unselected)
            .into_iter()
            .partition(|curve| curve_in_selection(curve, region));

        self.unselected = misses;
        let count = hits.len();
        self.selected.extend(hits);
        count
    }

    /// Returns all selected curves to the unselected list.
    pub fn deselect_all(&mut self) {
        self.unselected.append(&mut self.selected);
    }

    /// Throws the selected curves away and returns how many there were.
    pub fn delete_selected(&mut self) -> usize {
        let count = self.selected.len();
        self.selected.clear();
        count
    }

    pub fn recolor_selected(&mut self, color: Color32) {
        for curve in &mut self.selected {
            curve.set_color(color);
        }
    }

    pub fn adjust_selected_width(&mut self, delta: f32) {
        for curve in &mut self.selected {
            curve.adjust_stroke_width(delta);
        }
    }

    /// Swaps in a restored unselected list and drops the selection.
    pub fn restore(&mut self, curves: Vec<Curve>) {
        self.unselected = curves;
        self.selected.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, Pos2, Rect};

    fn curve(a: Pos2, b: Pos2) -> Curve {
        let mut c = Curve::new(a, Color32::BLACK, 2.0);
        c.add_point(b);
        c
    }

    fn region(min: Pos2, max: Pos2) -> SelectionArea {
        SelectionArea::from_rect(Rect::from_min_max(min, max))
    }

    #[test]
    fn test_select_moves_curves_without_duplication() {
        let mut drawing = Drawing::new();
        drawing.add_curve(curve(pos2(0.0, 0.0), pos2(5.0, 5.0)));
        drawing.add_curve(curve(pos2(100.0, 100.0), pos2(120.0, 110.0)));

        assert_eq!(drawing.select_in(&region(pos2(-1.0, -1.0), pos2(10.0, 10.0))), 1);
        // the same region again finds nothing new
        assert_eq!(drawing.select_in(&region(pos2(-1.0, -1.0), pos2(10.0, 10.0))), 0);

        assert_eq!(drawing.selected().len(), 1);
        assert_eq!(drawing.unselected().len(), 1);
        assert_eq!(drawing.curve_count(), 2);
    }

    #[test]
    fn test_deselect_and_delete() {
        let mut drawing = Drawing::new();
        drawing.add_curve(curve(pos2(0.0, 0.0), pos2(5.0, 5.0)));
        drawing.add_curve(curve(pos2(2.0, 2.0), pos2(8.0, 3.0)));
        drawing.select_in(&region(pos2(-1.0, -1.0), pos2(10.0, 10.0)));
        assert!(drawing.has_selection());

        drawing.deselect_all();
        assert!(!drawing.has_selection());
        assert_eq!(drawing.unselected().len(), 2);

        drawing.select_in(&region(pos2(-1.0, -1.0), pos2(10.0, 10.0)));
        assert_eq!(drawing.delete_selected(), 2);
        assert_eq!(drawing.curve_count(), 0);
    }

    #[test]
    fn test_edits_only_touch_selection() {
        let mut drawing = Drawing::new();
        drawing.add_curve(curve(pos2(0.0, 0.0), pos2(5.0, 5.0)));
        drawing.add_curve(curve(pos2(50.0, 50.0), pos2(60.0, 60.0)));
        drawing.select_in(&region(pos2(-1.0, -1.0), pos2(10.0, 10.0)));

        drawing.recolor_selected(Color32::RED);
        drawing.adjust_selected_width(3.0);

        assert_eq!(drawing.selected()[0].color(), Color32::RED);
        assert_eq!(drawing.selected()[0].stroke_width(), 5.0);
        assert_eq!(drawing.unselected()[0].color(), Color32::BLACK);
        assert_eq!(drawing.unselected()[0].stroke_width(), 2.0);
    }
}
