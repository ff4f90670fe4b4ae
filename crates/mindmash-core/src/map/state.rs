use super::model::{MapData, NodeData};
use crate::error::Result;

/// In-memory collaboration map with the currently highlighted node.
#[derive(Debug, Clone)]
pub struct CollaborationMap {
    data: MapData,
    active_node: Option<String>,
}

impl CollaborationMap {
    pub fn new(data: MapData) -> Self {
        Self {
            data,
            active_node: None,
        }
    }

    pub fn data(&self) -> &MapData {
        &self.data
    }

    pub fn active_node(&self) -> Option<&NodeData> {
        self.active_node
            .as_deref()
            .and_then(|id| self.data.nodes.get(id))
    }

    /// Highlights `node`. Unknown ids clear the highlight.
    pub fn set_active(&mut self, node: &str) {
        self.active_node = self
            .data
            .nodes
            .contains_key(node)
            .then(|| node.to_string());
    }

    /// Replaces the map with a parsed document.
    ///
    /// On error the current map and highlight are left untouched.
    pub fn load_json(&mut self, content: &str) -> Result<()> {
        let data = MapData::from_json(content)?;
        tracing::info!(
            target: "mindmash::map",
            nodes = data.nodes.len(),
            connections = data.connections.len(),
            "Map loaded"
        );
        self.replace(data);
        Ok(())
    }

    /// Swaps in new map data, keeping the highlight if the node still exists.
    pub fn replace(&mut self, data: MapData) {
        self.data = data;
        if let Some(id) = self.active_node.take() {
            self.set_active(&id);
        }
    }

    pub fn to_json(&self) -> Result<String> {
        self.data.to_json()
    }
}

impl Default for CollaborationMap {
    fn default() -> Self {
        Self::new(MapData::default())
    }
}
