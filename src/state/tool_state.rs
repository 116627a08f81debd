/// Which drawing tool, if any, receives pointer events.
///
/// ```text
///                 select T
///   ┌──────────────┐ ─────────► ┌────────────────┐ ◄─┐
///   │ NoActiveTool │            │ ActiveTool(T)  │   │ select U ≠ T
///   └──────────────┘ ◄───────── └────────────────┘ ──┘
///                 select T
/// ```
///
/// The active tool and its highlighted button live in the same variant, so one can
/// never be set without the other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToolState {
    #[default]
    NoActiveTool,
    ActiveTool {
        /// Registry name of the active tool
        tool: &'static str,
        /// The tool button currently highlighted
        highlighted: &'static str,
    },
}

impl ToolState {
    fn active(tool: &'static str) -> Self {
        Self::ActiveTool {
            tool,
            highlighted: tool,
        }
    }

    /// The state after the button of `selected` was clicked.
    ///
    /// Clicking the active tool's button toggles it off; any other button moves the
    /// selection (and the highlight) to that tool.
    pub fn on_select(self, selected: &'static str) -> Self {
        match self {
            Self::ActiveTool { tool, .. } if tool == selected => Self::NoActiveTool,
            _ => Self::active(selected),
        }
    }

    pub fn active_tool(&self) -> Option<&'static str> {
        match self {
            Self::ActiveTool { tool, .. } => Some(*tool),
            Self::NoActiveTool => None,
        }
    }

    pub fn highlighted(&self) -> Option<&'static str> {
        match self {
            Self::ActiveTool { highlighted, .. } => Some(*highlighted),
            Self::NoActiveTool => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::NoActiveTool)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::NoActiveTool => "NoActiveTool",
            Self::ActiveTool { .. } => "ActiveTool",
        }
    }
}
