//! Tool catalog
//!
//! Holds the tools discovered at connect time. Populated once, read-only for
//! the rest of the session; reconnecting builds a fresh catalog.

use crate::mcp::ToolInfo;

/// Ordered, immutable collection of discovered tools
pub struct ToolCatalog {
    tools: Vec<ToolInfo>,
}

impl ToolCatalog {
    /// Build a catalog from tools in discovery order
    pub fn new(tools: Vec<ToolInfo>) -> Self {
        Self { tools }
    }

    /// Tools in discovery order
    pub fn list(&self) -> &[ToolInfo] {
        &self.tools
    }

    /// Exact name match
    pub fn find_by_name(&self, name: &str) -> Option<&ToolInfo> {
        self.tools.iter().find(|t| t.name == name)
    }

    /// 1-based ordinal, as presented in the menu
    pub fn find_by_index(&self, index: usize) -> Option<&ToolInfo> {
        if index == 0 {
            return None;
        }
        self.tools.get(index - 1)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
