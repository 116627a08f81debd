use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::GridConfig;
use crate::grid::Grid;
use crate::input::InputEvent;
use crate::state::ToolManager;
use crate::surface::Surface;

/// The composition root: one grid and the tools that mutate it.
#[derive(Debug, Clone)]
pub struct Editor {
    grid: Grid,
    tools: ToolManager,
}

impl Editor {
    pub fn new(config: GridConfig) -> Self {
        Self {
            grid: Grid::new(config),
            tools: ToolManager::new(),
        }
    }

    /// Lay out and draw the grid.
    pub fn start(&mut self, surface: &mut dyn Surface) {
        self.grid.build(surface);
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn tools(&self) -> &ToolManager {
        &self.tools
    }

    /// Throw away the current drawing and lay out a fresh grid.
    pub fn rebuild(&mut self, surface: &mut dyn Surface) {
        log::info!("Rebuilding grid");
        self.grid.build(surface);
    }

    /// Apply one event. Events run to completion in the order they are handed in.
    pub fn dispatch(&mut self, event: &InputEvent, surface: &mut dyn Surface) {
        self.tools.handle_event(event, &mut self.grid, surface);
    }

    /// Apply every queued event, oldest first. Returns how many were applied.
    pub fn drain(&mut self, queue: &EventQueue, surface: &mut dyn Surface) -> usize {
        let events = queue.take_all();
        for event in &events {
            self.dispatch(event, surface);
        }
        events.len()
    }
}

/// A FIFO of input events that any thread may push to.
///
/// Only the thread owning the [`Editor`] drains it, which keeps every grid mutation on
/// that one thread and in arrival order.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: Arc<Mutex<VecDeque<InputEvent>>>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: InputEvent) {
        self.events.lock().push_back(event);
    }

    pub fn extend(&self, events: impl IntoIterator<Item = InputEvent>) {
        self.events.lock().extend(events);
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    fn take_all(&self) -> VecDeque<InputEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}
