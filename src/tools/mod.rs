use egui::{PointerButton, Pos2};

use crate::grid::Grid;
use crate::input::PointerInput;
use crate::surface::{PointerId, Surface};

mod color_picker;
mod eraser;
mod pen;
mod registry;

pub use color_picker::ColorPickerTool;
pub use eraser::EraserTool;
pub use pen::PenTool;
pub use registry::ToolRegistry;

/// A named unit of behavior that mutates the grid.
pub trait Tool {
    /// Unique registry key of the tool
    fn name(&self) -> &'static str;

    /// Human readable description, shown as a tooltip
    fn description(&self) -> &'static str;

    /// The tool's core grid mutation.
    fn effect(&self, grid: &mut Grid, surface: &mut dyn Surface);

    /// Insert this tool into `registry`, replacing any tool with the same name.
    fn register(self, registry: &mut ToolRegistry)
    where
        Self: Sized + Into<ToolType>,
    {
        registry.register(self.into());
    }
}

/// Per-tool drag state: whether a gesture is in progress and where the pointer last was.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragState {
    active: bool,
    position: Pos2,
    captured: Option<PointerId>,
}

impl DragState {
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Last known pointer position, relative to the surface origin.
    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn captured(&self) -> Option<PointerId> {
        self.captured
    }

    fn begin(&mut self, pointer: PointerId) {
        self.active = true;
        self.captured = Some(pointer);
    }

    /// Stop the gesture, handing back the capture that has to be released.
    fn end(&mut self) -> Option<PointerId> {
        self.active = false;
        self.captured.take()
    }
}

/// A tool with a pointer down / move / up / cancel lifecycle.
///
/// Implementors only expose their [`DragState`]; the lifecycle itself is shared.
pub trait GridTool: Tool {
    fn drag(&self) -> &DragState;

    fn drag_mut(&mut self) -> &mut DragState;

    /// Start a gesture on the primary button, capture the pointer and apply the
    /// tool at the press position.
    fn pointer_down(&mut self, input: &PointerInput, grid: &mut Grid, surface: &mut dyn Surface) {
        if input.button != PointerButton::Primary {
            return;
        }
        self.drag_mut().begin(input.pointer_id);
        surface.capture_pointer(input.pointer_id);
        self.pointer_move(input, grid, surface);
    }

    /// Track the pointer and apply the tool, only while a gesture is in progress.
    fn pointer_move(&mut self, input: &PointerInput, grid: &mut Grid, surface: &mut dyn Surface) {
        if !self.drag().is_active() {
            return;
        }
        self.drag_mut().position = (input.client - surface.origin()).to_pos2();
        self.effect(grid, surface);
    }

    fn pointer_up(&mut self, input: &PointerInput, surface: &mut dyn Surface) {
        if input.button != PointerButton::Primary {
            return;
        }
        if let Some(pointer) = self.drag_mut().end() {
            surface.release_pointer(pointer);
        }
    }

    /// Abort the gesture. Safe to call when no gesture is in progress.
    fn pointer_cancel(&mut self, surface: &mut dyn Surface) {
        if let Some(pointer) = self.drag_mut().end() {
            surface.release_pointer(pointer);
        }
    }
}

/// Every tool the editor knows about.
#[derive(Debug, Clone)]
pub enum ToolType {
    Pen(PenTool),
    Eraser(EraserTool),
    ColorPicker(ColorPickerTool),
}

impl Tool for ToolType {
    fn name(&self) -> &'static str {
        match self {
            Self::Pen(tool) => tool.name(),
            Self::Eraser(tool) => tool.name(),
            Self::ColorPicker(tool) => tool.name(),
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Self::Pen(tool) => tool.description(),
            Self::Eraser(tool) => tool.description(),
            Self::ColorPicker(tool) => tool.description(),
        }
    }

    fn effect(&self, grid: &mut Grid, surface: &mut dyn Surface) {
        match self {
            Self::Pen(tool) => tool.effect(grid, surface),
            Self::Eraser(tool) => tool.effect(grid, surface),
            Self::ColorPicker(tool) => tool.effect(grid, surface),
        }
    }
}

impl ToolType {
    /// The drag lifecycle of this tool, if it has one.
    pub fn as_grid_tool(&self) -> Option<&dyn GridTool> {
        match self {
            Self::Pen(tool) => Some(tool),
            Self::Eraser(tool) => Some(tool),
            Self::ColorPicker(_) => None,
        }
    }

    pub fn as_grid_tool_mut(&mut self) -> Option<&mut dyn GridTool> {
        match self {
            Self::Pen(tool) => Some(tool),
            Self::Eraser(tool) => Some(tool),
            Self::ColorPicker(_) => None,
        }
    }

    pub fn as_color_picker_mut(&mut self) -> Option<&mut ColorPickerTool> {
        match self {
            Self::ColorPicker(tool) => Some(tool),
            _ => None,
        }
    }

    pub fn is_grid_tool(&self) -> bool {
        self.as_grid_tool().is_some()
    }

    /// Short label for tool buttons.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Pen(_) => "✏",
            Self::Eraser(_) => "⌫",
            Self::ColorPicker(_) => "🎨",
        }
    }
}

impl From<PenTool> for ToolType {
    fn from(tool: PenTool) -> Self {
        Self::Pen(tool)
    }
}

impl From<EraserTool> for ToolType {
    fn from(tool: EraserTool) -> Self {
        Self::Eraser(tool)
    }
}

impl From<ColorPickerTool> for ToolType {
    fn from(tool: ColorPickerTool) -> Self {
        Self::ColorPicker(tool)
    }
}
