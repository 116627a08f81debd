use egui::color_picker::{Alpha, color_edit_button_srgba};

use crate::PaintApp;
use crate::color::to_hex;
use crate::components::ToolButton;
use crate::input::InputEvent;
use crate::tools::Tool;

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(160.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            // Collect the buttons first so the closure below can push to the app
            let highlighted = app.editor.tools().highlighted();
            let paint_color = app.editor.grid().color.as_str();
            let buttons: Vec<ToolButton> = app
                .editor
                .tools()
                .registry()
                .grid_tools()
                .map(|tool| ToolButton::new(tool, highlighted == Some(tool.name()), paint_color))
                .collect();

            ui.horizontal(|ui| {
                for button in &buttons {
                    if button.show(ui).clicked() {
                        log::info!("Tool selected from UI: {}", button.name);
                        app.push(InputEvent::select_tool(button.name));
                    }
                }
            });

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Color:");
                if color_edit_button_srgba(ui, &mut app.color, Alpha::Opaque).changed() {
                    app.push(InputEvent::color_change(to_hex(app.color)));
                }
            });

            ui.separator();

            if ui.button("New grid").clicked() {
                app.new_grid();
            }

            ui.separator();

            let grid = app.editor.grid();
            let config = grid.config();
            let tools = app.editor.tools();
            ui.label(format!(
                "Active tool: {} (State: {})",
                tools.highlighted().unwrap_or("none"),
                tools.state().name()
            ));
            ui.label(format!("Paint color: {}", grid.color));
            ui.label(format!(
                "Grid: {} x {} ({} pixels)",
                config.columns(),
                config.rows(),
                grid.pixels().len()
            ));
        });
}
