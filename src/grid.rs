use egui::{Pos2, Rect, pos2, vec2};

use crate::color::DEFAULT_COLOR;
use crate::config::GridConfig;
use crate::pixel::Pixel;
use crate::surface::Surface;

/// The fixed-size collection of pixels covering the canvas.
///
/// Pixels are stored row-major: `index = row * columns + column`. The grid is empty
/// until [`Grid::build`] lays it out; clicks before that hit nothing.
#[derive(Debug, Clone)]
pub struct Grid {
    config: GridConfig,
    pixels: Vec<Pixel>,
    /// Color used by subsequent `click` calls.
    pub color: String,
}

impl Grid {
    /// `config` is expected to be validated already (see [`GridConfig::validate`]).
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            pixels: Vec::new(),
            color: DEFAULT_COLOR.to_string(),
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn pixel(&self, index: usize) -> Option<&Pixel> {
        self.pixels.get(index)
    }

    pub fn is_built(&self) -> bool {
        !self.pixels.is_empty()
    }

    fn canvas_rect(&self) -> Rect {
        Rect::from_min_size(
            Pos2::ZERO,
            vec2(self.config.canvas_width as f32, self.config.canvas_height as f32),
        )
    }

    /// Lay out `columns * rows` pixels and draw their outlines.
    ///
    /// Building again replaces every pixel; the canvas is cleared first.
    pub fn build(&mut self, surface: &mut dyn Surface) {
        if self.is_built() {
            surface.clear_rect(self.canvas_rect());
        }

        let count = self.config.pixel_count();
        log::info!(
            "canvas width: {}, canvas height: {}",
            self.config.canvas_width,
            self.config.canvas_height
        );
        log::info!(
            "pixel width: {}, pixel height: {}",
            self.config.pixel_width,
            self.config.pixel_height
        );
        log::info!("total number of pixels: {count}");

        let (width, height) = (self.config.pixel_width as f32, self.config.pixel_height as f32);
        let mut pixels = Vec::with_capacity(count);
        let mut position = Pos2::ZERO;
        for _ in 0..count {
            let pixel = Pixel::new(position, width, height);
            pixel.draw(surface);
            pixels.push(pixel);
            position = self.forward_position(position);
        }
        self.pixels = pixels;
    }

    /// The origin of the pixel following the one at `pt`, wrapping at the canvas edge.
    fn forward_position(&self, pt: Pos2) -> Pos2 {
        let next_x = pt.x + self.config.pixel_width as f32;
        let next = if next_x < self.config.canvas_width as f32 {
            pos2(next_x, pt.y)
        } else {
            pos2(0.0, pt.y + self.config.pixel_height as f32)
        };
        log::debug!(
            "forwarding position from ({}, {}) -> ({}, {})",
            pt.x,
            pt.y,
            next.x,
            next.y
        );
        next
    }

    /// Map a surface-relative point to a pixel index.
    ///
    /// Points outside the canvas give `None`; callers treat that as "no pixel here".
    pub fn position_to_index(&self, point: Pos2) -> Option<usize> {
        if !(point.x >= 0.0 && point.y >= 0.0) {
            return None;
        }
        let column = point.x as u32 / self.config.pixel_width;
        let row = point.y as u32 / self.config.pixel_height;
        let columns = self.config.columns();
        if column as usize >= columns || row as usize >= self.config.rows() {
            return None;
        }
        Some(row as usize * columns + column as usize)
    }

    /// Paint the pixel under `point` with the current color. Out-of-range points are ignored.
    pub fn click(&mut self, point: Pos2, surface: &mut dyn Surface) {
        let Some(index) = self.position_to_index(point) else {
            return;
        };
        let color = self.color.as_str();
        if let Some(pixel) = self.pixels.get_mut(index) {
            pixel.fill(Some(color), surface);
        }
    }

    /// Erase the pixel under `point`. Out-of-range points are ignored.
    pub fn clear(&mut self, point: Pos2, surface: &mut dyn Surface) {
        let Some(index) = self.position_to_index(point) else {
            return;
        };
        if let Some(pixel) = self.pixels.get_mut(index) {
            pixel.erase(surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawOp, RecordingSurface};

    fn small_grid() -> (Grid, RecordingSurface) {
        let mut surface = RecordingSurface::new();
        let mut grid = Grid::new(GridConfig::new(40, 30, 10, 10).unwrap());
        grid.build(&mut surface);
        (grid, surface)
    }

    #[test]
    fn test_build_lays_out_row_major() {
        let (grid, surface) = small_grid();
        assert_eq!(grid.pixels().len(), 12);
        assert_eq!(grid.pixel(0).unwrap().rect().min, pos2(0.0, 0.0));
        assert_eq!(grid.pixel(3).unwrap().rect().min, pos2(30.0, 0.0));
        assert_eq!(grid.pixel(4).unwrap().rect().min, pos2(0.0, 10.0));
        assert_eq!(grid.pixel(11).unwrap().rect().min, pos2(30.0, 20.0));
        assert!(surface.ops().iter().all(|op| matches!(op, DrawOp::Stroke(_))));
        assert_eq!(surface.ops().len(), 12);
    }

    #[test]
    fn test_position_to_index() {
        let (grid, _) = small_grid();
        assert_eq!(grid.position_to_index(pos2(0.0, 0.0)), Some(0));
        assert_eq!(grid.position_to_index(pos2(9.9, 9.9)), Some(0));
        assert_eq!(grid.position_to_index(pos2(15.0, 25.0)), Some(9));
        assert_eq!(grid.position_to_index(pos2(39.0, 29.0)), Some(11));
    }

    #[test]
    fn test_position_out_of_range() {
        let (grid, _) = small_grid();
        assert_eq!(grid.position_to_index(pos2(40.0, 0.0)), None);
        assert_eq!(grid.position_to_index(pos2(0.0, 30.0)), None);
        assert_eq!(grid.position_to_index(pos2(-0.5, 5.0)), None);
        assert_eq!(grid.position_to_index(pos2(5.0, -3.0)), None);
        assert_eq!(grid.position_to_index(pos2(f32::NAN, 5.0)), None);
    }

    #[test]
    fn test_click_before_build_is_noop() {
        let mut surface = RecordingSurface::new();
        let mut grid = Grid::new(GridConfig::new(40, 30, 10, 10).unwrap());
        grid.click(pos2(5.0, 5.0), &mut surface);
        assert!(surface.ops().is_empty());
    }

    #[test]
    fn test_color_change_not_retroactive() {
        let (mut grid, mut surface) = small_grid();
        surface.take_ops();

        grid.click(pos2(5.0, 5.0), &mut surface);
        grid.color = "#00ff00".to_string();
        grid.click(pos2(15.0, 5.0), &mut surface);

        let colors: Vec<&str> = surface
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Fill(_, c) => Some(c.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(colors, ["black", "#00ff00"]);
    }

    #[test]
    fn test_rebuild_replaces_pixels() {
        let (mut grid, mut surface) = small_grid();
        grid.click(pos2(5.0, 5.0), &mut surface);
        assert!(!grid.pixel(0).unwrap().is_empty());

        surface.take_ops();
        grid.build(&mut surface);
        assert!(grid.pixels().iter().all(Pixel::is_empty));
        assert_eq!(
            surface.ops()[0],
            DrawOp::Clear(Rect::from_min_size(Pos2::ZERO, vec2(40.0, 30.0)))
        );
        assert_eq!(grid.pixels().len(), 12);
    }

    #[test]
    fn test_one_unit_pixels_are_paintable() {
        let mut surface = RecordingSurface::new();
        let mut grid = Grid::new(GridConfig::new(4, 3, 1, 1).unwrap());
        grid.build(&mut surface);
        surface.take_ops();

        grid.click(pos2(0.5, 0.5), &mut surface);
        match &surface.ops()[0] {
            DrawOp::Fill(rect, _) => assert!(rect.is_positive()),
            other => panic!("unexpected op {other:?}"),
        }
        assert!(!grid.pixel(0).unwrap().is_empty());
    }
}
