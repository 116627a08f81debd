use crate::color::parse_color;
use crate::error::ColorResult;
use crate::grid::Grid;
use crate::surface::Surface;

use super::Tool;

/// Sets the grid's paint color from the color control.
///
/// This tool has no drag lifecycle and is never the active tool; color changes reach
/// it no matter which drawing tool is selected.
#[derive(Debug, Clone, Default)]
pub struct ColorPickerTool {
    pick: Option<String>,
}

impl ColorPickerTool {
    pub const NAME: &'static str = "color-picker";

    pub fn new() -> Self {
        Self::default()
    }

    /// The last color accepted from the control.
    pub fn pick(&self) -> Option<&str> {
        self.pick.as_deref()
    }

    /// Store the control's value and apply it to the grid.
    ///
    /// Values that do not parse as a color are rejected and leave both the stored
    /// pick and the grid color untouched.
    pub fn pick_color(
        &mut self,
        value: &str,
        grid: &mut Grid,
        surface: &mut dyn Surface,
    ) -> ColorResult<()> {
        let value = value.trim();
        parse_color(value)?;
        self.pick = Some(value.to_string());
        self.effect(grid, surface);
        Ok(())
    }
}

impl Tool for ColorPickerTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        "Choose the paint color"
    }

    fn effect(&self, grid: &mut Grid, _surface: &mut dyn Surface) {
        if let Some(pick) = &self.pick {
            grid.color = pick.clone();
        }
    }
}
