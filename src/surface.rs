use egui::{Pos2, Rect};

/// Identifies one pointer (mouse, pen or a touch contact).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

impl PointerId {
    /// The id the mouse pointer always reports.
    pub const MOUSE: Self = Self(0);
}

/// The drawing surface the grid renders onto.
///
/// Coordinates are absolute surface pixels with the origin at the top-left corner.
/// Besides the three rectangle operations the surface answers the geometry query
/// (`origin`) and owns pointer capture, which the drag lifecycle of grid tools needs.
pub trait Surface {
    /// Stroke the outline of `rect`.
    fn stroke_rect(&mut self, rect: Rect);

    /// Fill `rect` with a text color such as `"black"` or `"#ff0000"`.
    fn fill_rect(&mut self, rect: Rect, color: &str);

    /// Clear everything inside `rect`.
    fn clear_rect(&mut self, rect: Rect);

    /// Top-left corner of the surface in client (screen) coordinates.
    fn origin(&self) -> Pos2;

    /// Route all further events of `pointer` to this surface until released.
    fn capture_pointer(&mut self, pointer: PointerId);

    fn release_pointer(&mut self, pointer: PointerId);

    fn has_capture(&self, pointer: PointerId) -> bool;
}

/// A single call made against a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Stroke(Rect),
    Fill(Rect, String),
    Clear(Rect),
    Capture(PointerId),
    Release(PointerId),
}

/// Surface that records every call instead of drawing.
///
/// Used by tests and for headless runs.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    origin: Pos2,
    ops: Vec<DrawOp>,
    captured: Option<PointerId>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// A surface whose top-left corner sits at `origin` in client coordinates.
    pub fn with_origin(origin: Pos2) -> Self {
        Self {
            origin,
            ..Self::default()
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Forget recorded calls, keeping capture state.
    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    pub fn captured(&self) -> Option<PointerId> {
        self.captured
    }

    pub fn count_fills(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Fill(..))).count()
    }

    pub fn count_clears(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Clear(_))).count()
    }
}

impl Surface for RecordingSurface {
    fn stroke_rect(&mut self, rect: Rect) {
        self.ops.push(DrawOp::Stroke(rect));
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.ops.push(DrawOp::Fill(rect, color.to_string()));
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.ops.push(DrawOp::Clear(rect));
    }

    fn origin(&self) -> Pos2 {
        self.origin
    }

    fn capture_pointer(&mut self, pointer: PointerId) {
        self.captured = Some(pointer);
        self.ops.push(DrawOp::Capture(pointer));
    }

    fn release_pointer(&mut self, pointer: PointerId) {
        if self.captured == Some(pointer) {
            self.captured = None;
        }
        self.ops.push(DrawOp::Release(pointer));
    }

    fn has_capture(&self, pointer: PointerId) -> bool {
        self.captured == Some(pointer)
    }
}
