use std::collections::BTreeMap;

use super::{Tool, ToolType};

/// Tools by name.
///
/// Registering a name twice replaces the earlier tool; the collision is only logged.
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    tools: BTreeMap<&'static str, ToolType>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `tool` under its name, returning the tool it replaced.
    pub fn register(&mut self, tool: ToolType) -> Option<ToolType> {
        let name = tool.name();
        let previous = self.tools.insert(name, tool);
        if previous.is_some() {
            log::warn!("Tool {name:?} registered twice, replacing the earlier instance");
        }
        previous
    }

    pub fn get(&self, name: &str) -> Option<&ToolType> {
        self.tools.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut ToolType> {
        self.tools.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToolType> {
        self.tools.values()
    }

    /// Tools that can be selected as the active tool, in name order.
    pub fn grid_tools(&self) -> impl Iterator<Item = &ToolType> {
        self.iter().filter(|tool| tool.is_grid_tool())
    }
}
