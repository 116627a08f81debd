#![warn(clippy::all, rust_2018_idioms)]

use pixel_grid::{GridConfig, PaintApp};

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = match GridConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            log::error!("Invalid grid configuration: {err}");
            std::process::exit(1);
        }
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Pixel Grid")
            .with_inner_size([
                config.canvas_width as f32 + 220.0,
                config.canvas_height as f32 + 40.0,
            ]),
        ..Default::default()
    };
    eframe::run_native(
        "pixel_grid",
        native_options,
        Box::new(move |cc| Ok(Box::new(PaintApp::new(cc, config)))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {}
