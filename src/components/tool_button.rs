use eframe::egui::{self, Color32, Rect, Stroke, vec2};

use crate::color::parse_color;
use crate::tools::{Tool, ToolType};

const CELL: f32 = 36.0;
const SWATCH_HEIGHT: f32 = 8.0;

/// A grid-cell shaped button selecting one drawing tool.
///
/// The lower strip shows what the tool leaves behind on a pixel: the current paint
/// color for the pen, an empty cell for the eraser.
pub struct ToolButton {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub selected: bool,
    pub swatch: Option<Color32>,
}

impl ToolButton {
    pub fn new(tool: &ToolType, selected: bool, paint_color: &str) -> Self {
        Self {
            name: tool.name(),
            icon: tool.icon(),
            description: tool.description(),
            selected,
            swatch: swatch_for(tool, paint_color),
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(vec2(CELL, CELL), egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let visuals = ui.style().interact_selectable(&response, self.selected);
            let painter = ui.painter();

            painter.rect_filled(rect, 0.0, visuals.weak_bg_fill);

            painter.text(
                rect.center() - vec2(0.0, SWATCH_HEIGHT / 2.0),
                egui::Align2::CENTER_CENTER,
                self.icon,
                egui::FontId::proportional(18.0),
                visuals.text_color(),
            );

            let strip = Self::swatch_rect(rect);
            match self.swatch {
                Some(color) => {
                    painter.rect_filled(strip, 0.0, color);
                }
                None => {
                    painter.rect_stroke(strip, 0.0, Stroke::new(1.0, Color32::GRAY));
                }
            }

            // Same 1px outline the canvas draws around each pixel, thicker when active
            let outline = if self.selected { 2.0 } else { 1.0 };
            painter.rect_stroke(rect, 0.0, Stroke::new(outline, visuals.fg_stroke.color));
        }

        let state = if self.selected { "active" } else { "click to activate" };
        response.on_hover_text(format!("{} ({state})\n{}", self.name, self.description))
    }

    /// The screen rect of the swatch strip inside a button placed at `rect`.
    pub fn swatch_rect(rect: Rect) -> Rect {
        rect.split_top_bottom_at_y(rect.max.y - SWATCH_HEIGHT).1.shrink(2.0)
    }
}

/// Paint color shown on the button of `tool`. Tools that do not paint get no swatch.
pub fn swatch_for(tool: &ToolType, paint_color: &str) -> Option<Color32> {
    match tool {
        ToolType::Pen(_) => parse_color(paint_color).ok(),
        ToolType::Eraser(_) | ToolType::ColorPicker(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::{EraserTool, PenTool};
    use egui::pos2;

    #[test]
    fn test_pen_swatch_follows_paint_color() {
        let pen = ToolType::from(PenTool::new());
        assert_eq!(swatch_for(&pen, "black"), Some(Color32::BLACK));
        assert_eq!(swatch_for(&pen, "#ff0000"), Some(Color32::from_rgb(255, 0, 0)));

        let button = ToolButton::new(&pen, true, "#00ff00");
        assert_eq!(button.name, PenTool::NAME);
        assert_eq!(button.swatch, Some(Color32::from_rgb(0, 255, 0)));
    }

    #[test]
    fn test_eraser_has_no_swatch() {
        let eraser = ToolType::from(EraserTool::new());
        assert_eq!(swatch_for(&eraser, "black"), None);
        assert!(!ToolButton::new(&eraser, false, "black").selected);
    }

    #[test]
    fn test_swatch_sits_inside_button() {
        let rect = Rect::from_min_size(pos2(0.0, 0.0), vec2(CELL, CELL));
        let strip = ToolButton::swatch_rect(rect);
        assert!(rect.contains_rect(strip));
        assert!(strip.is_positive());
        assert!(strip.min.y > rect.center().y);
    }
}
