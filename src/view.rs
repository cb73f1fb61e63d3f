use egui::{Pos2, Rect};
use kurbo::Affine;

use crate::error::TransformError;
use crate::geometry::hit_testing::SelectionArea;
use crate::geometry::{to_point, to_pos2};

/// Determinants smaller than this are treated as singular.
const SINGULAR_EPSILON: f64 = 1e-12;

/// Inverts `affine`, refusing matrices that collapse the plane.
///
/// `kurbo::Affine::inverse` happily divides by a zero determinant, so the
/// check has to happen first.
pub fn checked_inverse(affine: Affine) -> Result<Affine, TransformError> {
    let determinant = affine.determinant();
    if !determinant.is_finite() || determinant.abs() < SINGULAR_EPSILON {
        return Err(TransformError::Singular { determinant });
    }
    Ok(affine.inverse())
}

/// Where a pan or zoom-rotate drag started, with the transform pair in
/// effect at that moment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureAnchor {
    pub world_to_screen: Affine,
    pub screen_to_world: Affine,
    pub screen_pt: Pos2,
}

/// The screen/world mapping of the canvas.
///
/// `world_to_screen` and `screen_to_world` are always replaced together, so
/// every conversion sees a consistent pair. A candidate matrix without an
/// inverse is rejected and the previous pair stays in place.
///
/// Gestures are absolute: every `pan` / `zoom_rotate` call recomputes the
/// transform from the anchor snapshot and the current pointer position,
/// instead of accumulating per-event deltas.
#[derive(Debug, Clone)]
pub struct ViewTransform {
    world_to_screen: Affine,
    screen_to_world: Affine,
    anchor: Option<GestureAnchor>,
    pivot: Pos2,
    min_arm_length: f32,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PIVOT, Self::DEFAULT_MIN_ARM_LENGTH)
    }
}

impl ViewTransform {
    pub const DEFAULT_PIVOT: Pos2 = Pos2::new(100.0, 100.0);
    pub const DEFAULT_MIN_ARM_LENGTH: f32 = 100.0;

    pub fn new(pivot: Pos2, min_arm_length: f32) -> Self {
        Self {
            world_to_screen: Affine::IDENTITY,
            screen_to_world: Affine::IDENTITY,
            anchor: None,
            pivot,
            min_arm_length,
        }
    }

    pub fn world_to_screen(&self, pt: Pos2) -> Pos2 {
        to_pos2(self.world_to_screen * to_point(pt))
    }

    pub fn screen_to_world(&self, pt: Pos2) -> Pos2 {
        to_pos2(self.screen_to_world * to_point(pt))
    }

    /// Maps a screen rectangle into world space; under rotation the result
    /// is a parallelogram rather than a rectangle.
    pub fn screen_rect_to_world(&self, rect: Rect) -> SelectionArea {
        SelectionArea::transformed(self.screen_to_world, rect)
    }

    pub fn world_to_screen_matrix(&self) -> Affine {
        self.world_to_screen
    }

    pub fn screen_to_world_matrix(&self) -> Affine {
        self.screen_to_world
    }

    /// Screen pixels per world unit.
    pub fn zoom(&self) -> f32 {
        self.world_to_screen.determinant().abs().sqrt() as f32
    }

    pub fn pivot(&self) -> Pos2 {
        self.pivot
    }

    pub fn is_gesture_active(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn begin_gesture(&mut self, screen_pt: Pos2) {
        self.anchor = Some(GestureAnchor {
            world_to_screen: self.world_to_screen,
            screen_to_world: self.screen_to_world,
            screen_pt,
        });
    }

    pub fn end_gesture(&mut self) {
        self.anchor = None;
    }

    /// Drags the world so that the point grabbed at gesture start follows
    /// the pointer. Returns `false` without a gesture in progress.
    pub fn pan(&mut self, current: Pos2) -> bool {
        let Some(anchor) = self.anchor else {
            return false;
        };

        let world_start = anchor.screen_to_world * to_point(anchor.screen_pt);
        let world_current = anchor.screen_to_world * to_point(current);

        self.set_world_to_screen(
            anchor.world_to_screen * Affine::translate(world_current - world_start),
        )
    }

    /// Rotates and scales around the fixed pivot by the angle and distance
    /// ratio between the anchor and the pointer, both measured from the
    /// pivot. Refuses anchors closer to the pivot than the minimum arm
    /// length, where the ratio would blow up.
    pub fn zoom_rotate(&mut self, current: Pos2) -> bool {
        let Some(anchor) = self.anchor else {
            return false;
        };

        let start_arm = to_point(anchor.screen_pt) - to_point(self.pivot);
        if start_arm.hypot() < self.min_arm_length as f64 {
            return false;
        }
        let current_arm = to_point(current) - to_point(self.pivot);

        let scale = current_arm.hypot() / start_arm.hypot();
        let angle = current_arm.atan2() - start_arm.atan2();
        let world_pivot = (anchor.screen_to_world * to_point(self.pivot)).to_vec2();

        self.set_world_to_screen(
            anchor.world_to_screen
                * Affine::translate(world_pivot)
                * Affine::rotate(angle)
                * Affine::scale(scale)
                * Affine::translate(-world_pivot),
        )
    }

    /// Back to the identity mapping.
    pub fn reset(&mut self) -> bool {
        self.set_world_to_screen(Affine::IDENTITY)
    }

    /// Installs a new forward matrix together with its inverse.
    fn set_world_to_screen(&mut self, world_to_screen: Affine) -> bool {
        match checked_inverse(world_to_screen) {
            Ok(screen_to_world) => {
                self.world_to_screen = world_to_screen;
                self.screen_to_world = screen_to_world;
                true
            }
            Err(err) => {
                log::warn!("Keeping previous view transform: {err}");
                false
            }
        }
    }
}
