use crate::SketchApp;

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.heading("Sketch");
            ui.label(format!("Mode: {}", app.sketch().mode()));
            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Pen:");
                let (rect, _) = ui.allocate_exact_size(egui::vec2(16.0, 16.0), egui::Sense::hover());
                ui.painter().rect_filled(rect, 2.0, app.sketch().pen_color());
                ui.label(format!("{:.0} px", app.sketch().pen_width()));
            });
            ui.separator();

            // Undo/Redo section
            let sketch = app.sketch_mut();
            ui.horizontal(|ui| {
                let can_undo = sketch.history().can_undo();
                let can_redo = sketch.history().can_redo();

                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    sketch.undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    sketch.redo();
                }
            });
            ui.label(format!(
                "History: {}/{}",
                sketch.history().cursor() + 1,
                sketch.history().len()
            ));

            if ui.button("Reset view").clicked() {
                sketch.reset_view();
            }
            ui.separator();

            ui.label(format!("Curves: {}", sketch.drawing().curve_count()));
            ui.label(format!("Selected: {}", sketch.selected().len()));
            ui.separator();

            ui.small("Shift: select  Ctrl: pan");
            ui.small("Alt: zoom/rotate  C: color");
            ui.small("[ ] width  Del: delete  H: home");
        });
}
