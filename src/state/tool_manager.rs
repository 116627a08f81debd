use crate::error::{ColorResult, ToolError, ToolResult};
use crate::grid::Grid;
use crate::input::{InputEvent, PointerInput, PointerKind};
use crate::surface::Surface;
use crate::tools::{
    ColorPickerTool, EraserTool, GridTool, PenTool, Tool, ToolRegistry, ToolType,
};

use super::ToolState;

/// Owns the tools and routes every input event to the right one.
///
/// Pointer events go to the active drawing tool and are dropped when none is active.
/// Color changes always go to the color picker, independent of the active tool.
#[derive(Debug, Clone)]
pub struct ToolManager {
    registry: ToolRegistry,
    state: ToolState,
}

impl Default for ToolManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolManager {
    pub fn new() -> Self {
        let mut registry = ToolRegistry::new();
        ColorPickerTool::new().register(&mut registry);
        EraserTool::new().register(&mut registry);
        PenTool::new().register(&mut registry);

        Self {
            registry,
            state: ToolState::NoActiveTool,
        }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub fn state(&self) -> ToolState {
        self.state
    }

    pub fn active_tool(&self) -> Option<&ToolType> {
        self.state
            .active_tool()
            .and_then(|name| self.registry.get(name))
    }

    /// Name of the tool whose button is highlighted.
    pub fn highlighted(&self) -> Option<&'static str> {
        self.state.highlighted()
    }

    /// Handle a click on the button of tool `name`.
    ///
    /// A gesture still in progress on the outgoing tool is cancelled so its pointer
    /// capture is released.
    pub fn select_tool(
        &mut self,
        name: &str,
        surface: &mut dyn Surface,
    ) -> ToolResult<ToolState> {
        let tool = self
            .registry
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        if !tool.is_grid_tool() {
            return Err(ToolError::NotAGridTool(name.to_string()));
        }
        let selected = tool.name();

        if let Some(outgoing) = self.active_grid_tool_mut() {
            outgoing.pointer_cancel(surface);
        }

        let previous = self.state;
        self.state = self.state.on_select(selected);
        log::info!(
            "{} -> {} ({})",
            previous.name(),
            self.state.name(),
            self.state.active_tool().unwrap_or("none")
        );
        Ok(self.state)
    }

    /// Forward a pointer record to the active tool. Without an active tool it is dropped.
    pub fn handle_pointer(
        &mut self,
        input: &PointerInput,
        grid: &mut Grid,
        surface: &mut dyn Surface,
    ) {
        let Some(tool) = self.active_grid_tool_mut() else {
            log::trace!("No active tool, dropping {:?}", input.kind);
            return;
        };
        log::debug!("{} <- {:?} at {:?}", tool.name(), input.kind, input.client);

        match input.kind {
            PointerKind::Down => tool.pointer_down(input, grid, surface),
            PointerKind::Move => tool.pointer_move(input, grid, surface),
            PointerKind::Up => tool.pointer_up(input, surface),
            PointerKind::Cancel => tool.pointer_cancel(surface),
        }
    }

    /// Route a color-control value to the color picker.
    pub fn pick_color(
        &mut self,
        value: &str,
        grid: &mut Grid,
        surface: &mut dyn Surface,
    ) -> ColorResult<()> {
        match self
            .registry
            .get_mut(ColorPickerTool::NAME)
            .and_then(ToolType::as_color_picker_mut)
        {
            Some(picker) => picker.pick_color(value, grid, surface),
            None => {
                log::warn!("No color picker registered, ignoring color {value:?}");
                Ok(())
            }
        }
    }

    /// Dispatch one event. Rejected selections and colors are logged and absorbed.
    pub fn handle_event(
        &mut self,
        event: &InputEvent,
        grid: &mut Grid,
        surface: &mut dyn Surface,
    ) {
        match event {
            InputEvent::Pointer(input) => self.handle_pointer(input, grid, surface),
            InputEvent::SelectTool { tool } => {
                if let Err(err) = self.select_tool(tool, surface) {
                    log::warn!("Ignoring tool selection: {err}");
                }
            }
            InputEvent::ColorChange { value } => {
                if let Err(err) = self.pick_color(value, grid, surface) {
                    log::warn!("Ignoring color change: {err}");
                }
            }
        }
    }

    fn active_grid_tool_mut(&mut self) -> Option<&mut dyn GridTool> {
        let name = self.state.active_tool()?;
        self.registry.get_mut(name)?.as_grid_tool_mut()
    }
}
