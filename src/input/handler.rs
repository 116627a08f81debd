use egui::{Context, PointerButton, Pos2, Rect};

use super::{InputEvent, PointerInput, PointerKind};
use crate::surface::PointerId;

const BUTTONS: [PointerButton; 3] = [
    PointerButton::Primary,
    PointerButton::Secondary,
    PointerButton::Middle,
];

/// Turns raw egui pointer state into pointer records for the editor.
///
/// Presses only count inside the canvas. Movement outside the canvas is only
/// reported while the surface holds the pointer capture.
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect this frame's pointer events.
    ///
    /// `canvas_rect` is the screen rect of the drawing surface, `capturing` whether the
    /// surface currently holds the mouse capture.
    pub fn process_input(
        &mut self,
        ctx: &Context,
        canvas_rect: Rect,
        capturing: bool,
    ) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let lost = input.raw.events.iter().any(|event| {
                matches!(
                    event,
                    egui::Event::PointerGone | egui::Event::WindowFocused(false)
                )
            });
            if lost {
                let pos = self.last_pointer_pos.unwrap_or(canvas_rect.min);
                events.push(self.pointer(PointerKind::Cancel, pos, PointerButton::Primary));
                self.last_pointer_pos = None;
                return;
            }

            let Some(pos) = input.pointer.hover_pos() else {
                return;
            };

            for button in BUTTONS {
                if input.pointer.button_pressed(button) && canvas_rect.contains(pos) {
                    events.push(self.pointer(PointerKind::Down, pos, button));
                }
            }

            if Some(pos) != self.last_pointer_pos && (capturing || canvas_rect.contains(pos)) {
                events.push(self.pointer(PointerKind::Move, pos, PointerButton::Primary));
            }
            self.last_pointer_pos = Some(pos);

            for button in BUTTONS {
                if input.pointer.button_released(button) {
                    events.push(self.pointer(PointerKind::Up, pos, button));
                }
            }
        });

        events
    }

    fn pointer(&self, kind: PointerKind, pos: Pos2, button: PointerButton) -> InputEvent {
        InputEvent::Pointer(PointerInput {
            kind,
            button,
            pointer_id: PointerId::MOUSE,
            client: pos,
        })
    }
}
