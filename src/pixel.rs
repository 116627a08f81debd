use egui::{Pos2, Rect, vec2};

use crate::color::DEFAULT_COLOR;
use crate::surface::Surface;

/// One addressable cell of the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Pixel {
    rect: Rect,
    empty: bool,
}

impl Pixel {
    /// A new, empty pixel with its top-left corner at `origin`.
    pub fn new(origin: Pos2, width: f32, height: f32) -> Self {
        Self {
            rect: Rect::from_min_size(origin, vec2(width, height)),
            empty: true,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// The area painted by `fill` and wiped by `erase`. The one-pixel border is left
    /// alone so the outline survives erasing, unless the pixel is too small to have an
    /// inside, in which case the whole cell is used.
    fn interior(&self) -> Rect {
        let inner = self.rect.shrink(1.0);
        if inner.is_positive() { inner } else { self.rect }
    }

    /// Stroke the cell outline.
    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.stroke_rect(self.rect);
        log::debug!("drew pixel at ({}, {})", self.rect.min.x, self.rect.min.y);
    }

    /// Paint the interior. `None` paints with the default color.
    pub fn fill(&mut self, color: Option<&str>, surface: &mut dyn Surface) {
        let color = color.unwrap_or(DEFAULT_COLOR);
        surface.fill_rect(self.interior(), color);
        self.empty = false;
        log::debug!(
            "filled pixel at ({}, {}) with {color}",
            self.rect.min.x,
            self.rect.min.y
        );
    }

    /// Clear the interior. Erasing an empty pixel does not touch the surface.
    pub fn erase(&mut self, surface: &mut dyn Surface) {
        if self.empty {
            return;
        }
        surface.clear_rect(self.interior());
        self.empty = true;
        log::debug!("erased pixel at ({}, {})", self.rect.min.x, self.rect.min.y);
    }
}
