use crate::PaintApp;
use crate::surface::{PointerId, Surface};

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (response, painter) =
            ui.allocate_painter(app.surface.size(), egui::Sense::click_and_drag());
        app.surface.set_origin(response.rect.min);

        let capturing = app.surface.has_capture(PointerId::MOUSE);
        let events = app.input.process_input(ctx, response.rect, capturing);
        app.queue.extend(events);
        app.flush();

        app.surface.render(&painter);
    });
}
