use egui::{PointerButton, Pos2};

use crate::surface::PointerId;

mod handler;
pub use handler::InputHandler;

/// Which step of a gesture a pointer record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// One step of a pointer gesture, in client (screen) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    pub kind: PointerKind,
    pub button: PointerButton,
    pub pointer_id: PointerId,
    pub client: Pos2,
}

impl PointerInput {
    pub fn new(kind: PointerKind, client: Pos2) -> Self {
        Self {
            kind,
            button: PointerButton::Primary,
            pointer_id: PointerId::MOUSE,
            client,
        }
    }

    pub fn down(client: Pos2) -> Self {
        Self::new(PointerKind::Down, client)
    }

    pub fn moved(client: Pos2) -> Self {
        Self::new(PointerKind::Move, client)
    }

    pub fn up(client: Pos2) -> Self {
        Self::new(PointerKind::Up, client)
    }

    pub fn cancel(client: Pos2) -> Self {
        Self::new(PointerKind::Cancel, client)
    }

    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    pub fn with_pointer(mut self, pointer_id: PointerId) -> Self {
        self.pointer_id = pointer_id;
        self
    }
}

/// Everything the editor reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A pointer gesture step over the drawing surface
    Pointer(PointerInput),
    /// A tool button was clicked
    SelectTool { tool: String },
    /// The color control changed its value
    ColorChange { value: String },
}

impl InputEvent {
    pub fn select_tool(tool: impl Into<String>) -> Self {
        Self::SelectTool { tool: tool.into() }
    }

    pub fn color_change(value: impl Into<String>) -> Self {
        Self::ColorChange {
            value: value.into(),
        }
    }
}

impl From<PointerInput> for InputEvent {
    fn from(input: PointerInput) -> Self {
        Self::Pointer(input)
    }
}
