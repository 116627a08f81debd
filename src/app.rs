use egui::Color32;

use crate::config::GridConfig;
use crate::editor::{Editor, EventQueue};
use crate::input::{InputEvent, InputHandler};
use crate::panels::{central_panel, tools_panel};
use crate::renderer::CanvasSurface;

/// The eframe application: a tools panel next to the pixel canvas.
///
/// Every UI interaction becomes an [`InputEvent`] on the queue; the queue is drained
/// once per frame, right before the canvas is painted.
pub struct PaintApp {
    pub(crate) editor: Editor,
    pub(crate) surface: CanvasSurface,
    pub(crate) input: InputHandler,
    pub(crate) queue: EventQueue,
    /// Value shown by the color control
    pub(crate) color: Color32,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GridConfig) -> Self {
        Self::with_config(config)
    }

    /// Build the app and draw the initial grid.
    pub fn with_config(config: GridConfig) -> Self {
        let mut surface = CanvasSurface::new(&config);
        let mut editor = Editor::new(config);
        editor.start(&mut surface);

        Self {
            editor,
            surface,
            input: InputHandler::new(),
            queue: EventQueue::new(),
            color: Color32::BLACK,
        }
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    /// Handle to the event queue, for feeding events from other threads.
    pub fn queue(&self) -> EventQueue {
        self.queue.clone()
    }

    pub(crate) fn push(&self, event: InputEvent) {
        self.queue.push(event);
    }

    /// Apply queued events to the editor.
    pub(crate) fn flush(&mut self) {
        self.editor.drain(&self.queue, &mut self.surface);
    }

    /// Start over with an empty grid.
    pub(crate) fn new_grid(&mut self) {
        self.flush();
        self.editor.rebuild(&mut self.surface);
    }
}

impl eframe::App for PaintApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
