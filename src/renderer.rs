// src/renderer.rs
use eframe::egui::{self, Color32, Pos2, Rect, Stroke, Vec2};

use crate::color::parse_color;
use crate::config::GridConfig;
use crate::surface::{PointerId, Surface};

const OUTLINE: Stroke = Stroke {
    width: 1.0,
    color: Color32::from_gray(60),
};

/// Surface backed by egui.
///
/// egui paints immediately, so the canvas keeps a retained scene of outlines and fills
/// and replays it every frame in [`CanvasSurface::render`].
#[derive(Debug)]
pub struct CanvasSurface {
    size: Vec2,
    origin: Pos2,
    outlines: Vec<Rect>,
    fills: Vec<(Rect, Color32)>,
    captured: Option<PointerId>,
}

impl CanvasSurface {
    pub fn new(config: &GridConfig) -> Self {
        Self {
            size: egui::vec2(config.canvas_width as f32, config.canvas_height as f32),
            origin: Pos2::ZERO,
            outlines: Vec::new(),
            fills: Vec::new(),
            captured: None,
        }
    }

    /// Size of the canvas in points.
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Where the canvas was laid out this frame, in screen coordinates.
    pub fn set_origin(&mut self, origin: Pos2) {
        self.origin = origin;
    }

    /// The canvas rect in screen coordinates.
    pub fn screen_rect(&self) -> Rect {
        Rect::from_min_size(self.origin, self.size)
    }

    pub fn fill_count(&self) -> usize {
        self.fills.len()
    }

    /// Paint the retained scene.
    pub fn render(&self, painter: &egui::Painter) {
        let offset = self.origin.to_vec2();
        painter.rect_filled(self.screen_rect(), 0.0, Color32::WHITE);
        for (rect, color) in &self.fills {
            painter.rect_filled(rect.translate(offset), 0.0, *color);
        }
        for rect in &self.outlines {
            painter.rect_stroke(rect.translate(offset), 0.0, OUTLINE);
        }
    }
}

impl Surface for CanvasSurface {
    fn stroke_rect(&mut self, rect: Rect) {
        if !self.outlines.contains(&rect) {
            self.outlines.push(rect);
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        let color = parse_color(color).unwrap_or_else(|err| {
            log::warn!("{err}, filling with black");
            Color32::BLACK
        });
        self.fills.retain(|(filled, _)| *filled != rect);
        self.fills.push((rect, color));
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.fills.retain(|(filled, _)| !rect.contains_rect(*filled));
        self.outlines.retain(|outline| !rect.contains_rect(*outline));
    }

    fn origin(&self) -> Pos2 {
        self.origin
    }

    fn capture_pointer(&mut self, pointer: PointerId) {
        self.captured = Some(pointer);
    }

    fn release_pointer(&mut self, pointer: PointerId) {
        if self.captured == Some(pointer) {
            self.captured = None;
        }
    }

    fn has_capture(&self, pointer: PointerId) -> bool {
        self.captured == Some(pointer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    fn canvas() -> (CanvasSurface, Grid) {
        let config = GridConfig::new(40, 40, 10, 10).unwrap();
        let mut surface = CanvasSurface::new(&config);
        let mut grid = Grid::new(config);
        grid.build(&mut surface);
        (surface, grid)
    }

    #[test]
    fn test_fill_replaces_same_rect() {
        let (mut surface, mut grid) = canvas();
        grid.click(egui::pos2(5.0, 5.0), &mut surface);
        grid.color = "#ff0000".to_string();
        grid.click(egui::pos2(5.0, 5.0), &mut surface);
        assert_eq!(surface.fill_count(), 1);
        assert_eq!(surface.fills[0].1, Color32::from_rgb(255, 0, 0));
    }

    #[test]
    fn test_erase_keeps_outline() {
        let (mut surface, mut grid) = canvas();
        grid.click(egui::pos2(5.0, 5.0), &mut surface);
        grid.clear(egui::pos2(5.0, 5.0), &mut surface);
        assert_eq!(surface.fill_count(), 0);
        assert_eq!(surface.outlines.len(), 16);
    }

    #[test]
    fn test_rebuild_does_not_duplicate_outlines() {
        let (mut surface, mut grid) = canvas();
        grid.click(egui::pos2(15.0, 5.0), &mut surface);
        grid.build(&mut surface);
        assert_eq!(surface.outlines.len(), 16);
        assert_eq!(surface.fill_count(), 0);
    }

    #[test]
    fn test_render_basics() {
        let (surface, _) = canvas();
        let ctx = egui::Context::default();
        let layer_id = egui::LayerId::background();
        let painter = egui::Painter::new(ctx, layer_id, surface.screen_rect());
        surface.render(&painter);
    }

    #[test]
    fn test_capture_release() {
        let (mut surface, _) = canvas();
        surface.capture_pointer(PointerId::MOUSE);
        assert!(surface.has_capture(PointerId::MOUSE));
        surface.release_pointer(PointerId(7));
        assert!(surface.has_capture(PointerId::MOUSE));
        surface.release_pointer(PointerId::MOUSE);
        assert!(!surface.has_capture(PointerId::MOUSE));
    }
}
