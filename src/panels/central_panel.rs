use crate::SketchApp;

pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let canvas_rect = ui.available_rect_before_wrap();

            // Handle input
            app.handle_input(ctx, canvas_rect);

            // Render the canvas
            let painter = ui.painter();
            app.renderer().render(painter, canvas_rect, app.sketch());
        });
}
