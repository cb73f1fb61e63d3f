use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::config::SketchConfig;
use crate::controller::SketchController;
use crate::input::InputHandler;
use crate::panels::{central_panel, tools_panel};
use crate::renderer::Renderer;

/// Pen preferences kept between sessions. Drawings themselves are not saved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PenPreferences {
    pub color: [u8; 4],
    pub width: f32,
}

impl PenPreferences {
    pub fn from_controller(sketch: &SketchController) -> Self {
        Self {
            color: sketch.pen_color().to_array(),
            width: sketch.pen_width(),
        }
    }

    pub fn apply(&self, sketch: &mut SketchController) {
        let [r, g, b, a] = self.color;
        sketch.set_pen(Color32::from_rgba_premultiplied(r, g, b, a), self.width);
    }
}

pub struct SketchApp {
    sketch: SketchController,
    input: InputHandler,
    renderer: Renderer,
}

impl Default for SketchApp {
    fn default() -> Self {
        Self::with_config(&SketchConfig::default())
    }
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: SketchConfig) -> Self {
        let mut app = Self::with_config(&config);

        if let Some(storage) = cc.storage {
            if let Some(prefs) = eframe::get_value::<PenPreferences>(storage, eframe::APP_KEY) {
                log::info!("Restored pen preferences: {:?}", prefs);
                prefs.apply(&mut app.sketch);
            }
        }

        app
    }

    pub fn with_config(config: &SketchConfig) -> Self {
        Self {
            sketch: SketchController::new(config),
            input: InputHandler::new(),
            renderer: Renderer::new(),
        }
    }

    pub fn sketch(&self) -> &SketchController {
        &self.sketch
    }

    pub fn sketch_mut(&mut self) -> &mut SketchController {
        &mut self.sketch
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Feeds this frame's input to the sketch, then asks for another frame
    /// if anything changed.
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect) {
        self.sketch.set_viewport_size(canvas_rect.size());

        for event in self.input.process_input(ctx, canvas_rect) {
            self.sketch.handle_event(&event);
        }

        if self.sketch.take_repaint_request() {
            ctx.request_repaint();
        }
    }
}

impl eframe::App for SketchApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &PenPreferences::from_controller(&self.sketch));
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pen_preferences_round_trip() {
        let mut app = SketchApp::default();
        app.sketch_mut().set_pen(Color32::from_rgb(10, 20, 30), 7.0);

        let prefs = PenPreferences::from_controller(app.sketch());
        let mut other = SketchApp::default();
        prefs.apply(other.sketch_mut());

        assert_eq!(other.sketch().pen_color(), Color32::from_rgb(10, 20, 30));
        assert_eq!(other.sketch().pen_width(), 7.0);
    }
}
