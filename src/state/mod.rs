mod tool_manager;
mod tool_state;

pub use tool_manager::ToolManager;
pub use tool_state::ToolState;
