use egui::{Color32, Pos2, Vec2};

use crate::config::SketchConfig;
use crate::curve::{Curve, MIN_STROKE_WIDTH};
use crate::document::Drawing;
use crate::history::SnapshotHistory;
use crate::input::{InputEvent, SketchKey};
use crate::palette::Palette;
use crate::selection::SelectionRegion;
use crate::state::{ActionKey, Mode, QuasiKey};
use crate::view::ViewTransform;

/// Pen color for new curves until the palette picks another one.
pub const DEFAULT_PEN_COLOR: Color32 = Color32::BLACK;

/// Owns the whole sketch and interprets input through the current mode.
///
/// Every pointer position handed in is in canvas-local screen space; it goes
/// through the view transform before it touches a curve or a hit test.
/// Handlers never fail: events that make no sense in the current state are
/// dropped.
#[derive(Debug)]
pub struct SketchController {
    mode: Mode,
    drawing: Drawing,
    current_curve: Option<Curve>,
    selection_region: Option<SelectionRegion>,
    view: ViewTransform,
    history: SnapshotHistory,
    palette: Palette,
    pen_color: Color32,
    pen_width: f32,
    viewport: Vec2,
    min_point_distance: f32,
    stroke_width_step: f32,
    needs_repaint: bool,
}

impl Default for SketchController {
    fn default() -> Self {
        Self::new(&SketchConfig::default())
    }
}

impl SketchController {
    pub fn new(config: &SketchConfig) -> Self {
        let mut controller = Self {
            mode: Mode::Draw,
            drawing: Drawing::new(),
            current_curve: None,
            selection_region: None,
            view: ViewTransform::new(
                Pos2::new(config.pivot[0], config.pivot[1]),
                config.min_arm_length,
            ),
            history: SnapshotHistory::new(config.history_capacity),
            palette: Palette::new(config.palette),
            pen_color: DEFAULT_PEN_COLOR,
            pen_width: config.default_stroke_width.max(MIN_STROKE_WIDTH),
            viewport: Vec2::new(800.0, 600.0),
            min_point_distance: config.min_point_distance,
            stroke_width_step: config.stroke_width_step,
            needs_repaint: true,
        };
        // the empty canvas is the oldest undo target
        controller.save_history();
        controller
    }

    // --- read-only state for the presentation layer ---

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn drawing(&self) -> &Drawing {
        &self.drawing
    }

    pub fn unselected(&self) -> &[Curve] {
        self.drawing.unselected()
    }

    pub fn selected(&self) -> &[Curve] {
        self.drawing.selected()
    }

    pub fn current_curve(&self) -> Option<&Curve> {
        self.current_curve.as_ref()
    }

    pub fn selection_region(&self) -> Option<&SelectionRegion> {
        self.selection_region.as_ref()
    }

    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    pub fn history(&self) -> &SnapshotHistory {
        &self.history
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn pen_color(&self) -> Color32 {
        self.pen_color
    }

    pub fn pen_width(&self) -> f32 {
        self.pen_width
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Restores pen preferences saved by an earlier session.
    pub fn set_pen(&mut self, color: Color32, width: f32) {
        self.pen_color = color;
        self.pen_width = width.max(MIN_STROKE_WIDTH);
        self.needs_repaint = true;
    }

    pub fn set_viewport_size(&mut self, size: Vec2) {
        if self.viewport != size {
            self.viewport = size;
            self.needs_repaint = true;
        }
    }

    /// Returns whether anything changed since the last call, clearing the flag.
    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_repaint)
    }

    // --- input ---

    pub fn handle_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::PointerDown { position, modifiers } => {
                self.pointer_pressed(position, modifiers.shift)
            }
            InputEvent::PointerDrag { position } => self.pointer_dragged(position),
            InputEvent::PointerUp { position } => self.pointer_released(position),
            InputEvent::KeyDown(key) => self.key_pressed(key),
            InputEvent::KeyUp(key) => self.key_released(key),
        }
    }

    /// `select_held` extends an existing selection instead of dropping it.
    pub fn pointer_pressed(&mut self, pos: Pos2, select_held: bool) {
        match self.mode {
            Mode::Draw => {
                let world = self.view.screen_to_world(pos);
                self.current_curve = Some(Curve::new(world, self.pen_color, self.pen_width));
            }
            Mode::Select => {
                self.selection_region = Some(SelectionRegion::new(pos));
            }
            Mode::Selected => {
                if select_held {
                    self.set_mode(Mode::Select);
                    self.selection_region = Some(SelectionRegion::new(pos));
                } else {
                    self.drawing.deselect_all();
                    self.set_mode(Mode::Draw);
                }
            }
            Mode::Pan | Mode::ZoomRotate => self.view.begin_gesture(pos),
            Mode::Color => {}
        }
        self.needs_repaint = true;
    }

    pub fn pointer_dragged(&mut self, pos: Pos2) {
        match self.mode {
            Mode::Draw => self.extend_curve(pos),
            Mode::Select | Mode::Selected => self.update_selection(pos),
            Mode::Pan => {
                self.view.pan(pos);
            }
            Mode::ZoomRotate => {
                self.view.zoom_rotate(pos);
            }
            Mode::Color => {}
        }
        self.needs_repaint = true;
    }

    pub fn pointer_released(&mut self, pos: Pos2) {
        match self.mode {
            Mode::Draw => self.finish_curve(),
            Mode::Select | Mode::Selected => self.selection_region = None,
            Mode::Pan | Mode::ZoomRotate => self.view.end_gesture(),
            Mode::Color => self.apply_palette_color(pos),
        }
        self.needs_repaint = true;
    }

    pub fn key_pressed(&mut self, key: SketchKey) {
        match key {
            SketchKey::Quasi(quasi) => self.enter_quasi_mode(quasi),
            SketchKey::Action(ActionKey::Undo) => self.undo(),
            SketchKey::Action(ActionKey::Redo) => self.redo(),
            SketchKey::Action(ActionKey::WidenStroke) => self.adjust_stroke_width(self.stroke_width_step),
            SketchKey::Action(ActionKey::NarrowStroke) => self.adjust_stroke_width(-self.stroke_width_step),
            // act on release
            SketchKey::Action(ActionKey::Escape | ActionKey::Delete | ActionKey::Home) => {}
        }
        self.needs_repaint = true;
    }

    pub fn key_released(&mut self, key: SketchKey) {
        match key {
            SketchKey::Quasi(quasi) => {
                if quasi == QuasiKey::Select {
                    self.selection_region = None;
                }
                self.return_to_persistent_mode();
            }
            SketchKey::Action(ActionKey::Escape) => self.escape(),
            SketchKey::Action(ActionKey::Delete) => self.delete_selection(),
            SketchKey::Action(ActionKey::Home) => self.reset_view(),
            SketchKey::Action(_) => {}
        }
        self.needs_repaint = true;
    }

    // --- commands ---

    pub fn undo(&mut self) {
        if let Some(curves) = self.history.undo() {
            self.restore(curves);
        }
    }

    pub fn redo(&mut self) {
        if let Some(curves) = self.history.redo() {
            self.restore(curves);
        }
    }

    pub fn reset_view(&mut self) {
        self.view.reset();
        self.needs_repaint = true;
    }

    /// Deselects everything and records the result.
    pub fn escape(&mut self) {
        self.drawing.deselect_all();
        self.save_history();
        self.set_mode(Mode::Draw);
    }

    /// Destroys the selected curves. Nothing happens without a selection.
    pub fn delete_selection(&mut self) {
        if !self.drawing.has_selection() {
            return;
        }
        let count = self.drawing.delete_selected();
        log::debug!("Deleted {count} curves");
        self.save_history();
        self.set_mode(Mode::Draw);
    }

    /// Restyles the selection in `Selected` mode, otherwise the pen used for
    /// the next curve.
    pub fn adjust_stroke_width(&mut self, delta: f32) {
        if self.mode == Mode::Selected {
            self.drawing.adjust_selected_width(delta);
            self.save_history();
        } else {
            self.pen_width = (self.pen_width + delta).max(MIN_STROKE_WIDTH);
        }
        self.needs_repaint = true;
    }

    // --- helpers ---

    fn set_mode(&mut self, mode: Mode) {
        if self.mode == mode {
            return;
        }
        if self.view.is_gesture_active() {
            self.view.end_gesture();
        }
        log::debug!("Mode {} -> {}", self.mode, mode);
        self.mode = mode;
    }

    fn enter_quasi_mode(&mut self, key: QuasiKey) {
        if self.current_curve.is_some() {
            self.finish_curve();
        }
        self.set_mode(key.mode());
    }

    /// Shared exit of every quasi-mode.
    fn return_to_persistent_mode(&mut self) {
        self.set_mode(Mode::persistent(self.drawing.has_selection()));
    }

    fn extend_curve(&mut self, screen_pt: Pos2) {
        let Some(curve) = self.current_curve.as_mut() else {
            return;
        };
        let last = self.view.world_to_screen(curve.last_point());
        if screen_pt.distance(last) < self.min_point_distance {
            return;
        }
        curve.add_point(self.view.screen_to_world(screen_pt));
    }

    /// Commits the in-progress curve if it is a real polyline, otherwise
    /// drops it along with any lingering selection. Always records history.
    fn finish_curve(&mut self) {
        match self.current_curve.take() {
            Some(curve) if curve.point_count() >= 2 => {
                log::debug!("Committed curve with {} points", curve.point_count());
                self.drawing.add_curve(curve);
            }
            discarded => {
                if discarded.is_some() {
                    log::debug!("Discarded single-point curve");
                }
                self.drawing.deselect_all();
            }
        }
        self.save_history();
    }

    fn update_selection(&mut self, screen_pt: Pos2) {
        let Some(region) = self.selection_region.as_mut() else {
            return;
        };
        region.update(screen_pt);

        let world_region = self.view.screen_rect_to_world(region.rect());
        let hits = self.drawing.select_in(&world_region);
        if hits > 0 {
            log::debug!("Selected {hits} more curves");
        }
    }

    fn apply_palette_color(&mut self, screen_pt: Pos2) {
        let Some(color) = self
            .palette
            .color_at(screen_pt, self.viewport.x, self.viewport.y)
        else {
            return;
        };

        if self.drawing.has_selection() {
            self.drawing.recolor_selected(color);
            self.save_history();
        } else {
            self.pen_color = color;
        }
    }

    fn save_history(&mut self) {
        self.history.save(self.drawing.unselected());
    }

    fn restore(&mut self, curves: Vec<Curve>) {
        self.drawing.restore(curves);
        self.set_mode(Mode::Draw);
        self.needs_repaint = true;
    }
}
