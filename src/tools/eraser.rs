use crate::grid::Grid;
use crate::surface::Surface;

use super::{DragState, GridTool, Tool};

/// Clears the pixel under the pointer.
#[derive(Debug, Clone, Default)]
pub struct EraserTool {
    drag: DragState,
}

impl EraserTool {
    pub const NAME: &'static str = "eraser";

    pub fn new() -> Self {
        Self::default()
    }
}

impl Tool for EraserTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        "Erase pixels back to empty"
    }

    fn effect(&self, grid: &mut Grid, surface: &mut dyn Surface) {
        grid.clear(self.drag.position(), surface);
    }
}

impl GridTool for EraserTool {
    fn drag(&self) -> &DragState {
        &self.drag
    }

    fn drag_mut(&mut self) -> &mut DragState {
        &mut self.drag
    }
}
