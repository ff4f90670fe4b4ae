//! Collaboration map document model.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{MindmashError, Result};

/// Normalized position on the map canvas (0.0..=1.0 on both axes).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A participant drawn on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    pub id: String,
    pub color: String,
    pub position: Position,
    pub name: String,
}

/// A weighted link between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub from: String,
    pub to: String,
    pub strength: f64,
}

/// The exported/imported map document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapData {
    pub nodes: BTreeMap<String, NodeData>,
    pub connections: Vec<Connection>,
}

impl MapData {
    /// Parses a map document.
    ///
    /// Both `nodes` and `connections` must be present and non-null; any other
    /// shape problem is reported as [`MindmashError::InvalidMap`] too, so
    /// callers can surface one message for every malformed file.
    pub fn from_json(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)
            .map_err(|e| MindmashError::invalid_map(format!("not valid JSON: {e}")))?;

        let Some(object) = value.as_object() else {
            return Err(MindmashError::invalid_map("top level must be an object"));
        };
        for key in ["nodes", "connections"] {
            if object.get(key).is_none_or(Value::is_null) {
                return Err(MindmashError::invalid_map(format!("missing `{key}`")));
            }
        }

        serde_json::from_value(value).map_err(|e| MindmashError::invalid_map(e.to_string()))
    }

    /// Serializes the document as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Connections touching `node`.
    pub fn connections_of<'a>(&'a self, node: &'a str) -> impl Iterator<Item = &'a Connection> {
        self.connections
            .iter()
            .filter(move |c| c.from == node || c.to == node)
    }
}

impl Default for MapData {
    /// The five-node layout: user in the center, personas in the corners.
    fn default() -> Self {
        let node = |id: &str, name: &str, color: &str, x: f64, y: f64| {
            (
                id.to_string(),
                NodeData {
                    id: id.to_string(),
                    color: color.to_string(),
                    position: Position { x, y },
                    name: name.to_string(),
                },
            )
        };
        let link = |from: &str, to: &str, strength: f64| Connection {
            from: from.to_string(),
            to: to.to_string(),
            strength,
        };

        Self {
            nodes: BTreeMap::from([
                node("grok", "Grok", "rgba(74, 222, 128, 0.8)", 0.85, 0.25),
                node("chatgpt", "ChatGPT", "rgba(217, 70, 239, 0.8)", 0.15, 0.75),
                node("gemini", "Gemini", "rgba(34, 211, 238, 0.8)", 0.15, 0.25),
                node("user", "User", "rgba(96, 165, 250, 0.8)", 0.5, 0.5),
                node("system", "System", "rgba(250, 204, 21, 0.8)", 0.85, 0.75),
            ]),
            connections: vec![
                link("user", "chatgpt", 0.8),
                link("user", "grok", 0.8),
                link("user", "gemini", 0.8),
                link("user", "system", 0.6),
                link("chatgpt", "system", 0.9),
                link("grok", "system", 0.9),
                link("gemini", "system", 0.9),
                link("chatgpt", "grok", 0.5),
                link("chatgpt", "gemini", 0.5),
                link("grok", "gemini", 0.5),
            ],
        }
    }
}
