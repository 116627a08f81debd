use crate::grid::Grid;
use crate::surface::Surface;

use super::{DragState, GridTool, Tool};

/// Paints the pixel under the pointer with the grid's current color.
#[derive(Debug, Clone, Default)]
pub struct PenTool {
    drag: DragState,
}

impl PenTool {
    pub const NAME: &'static str = "pen";

    pub fn new() -> Self {
        Self::default()
    }
}

impl Tool for PenTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        "Paint pixels with the current color"
    }

    fn effect(&self, grid: &mut Grid, surface: &mut dyn Surface) {
        grid.click(self.drag.position(), surface);
    }
}

impl GridTool for PenTool {
    fn drag(&self) -> &DragState {
        &self.drag
    }

    fn drag_mut(&mut self) -> &mut DragState {
        &mut self.drag
    }
}
