//! Collaboration map: the node/connection graph shown next to the chat.
//!
//! - `model`: JSON document types and validation (`MapData`)
//! - `state`: in-memory map with active-node highlighting (`CollaborationMap`)
//! - `repository`: persistence interface (`MapRepository`)

mod model;
mod repository;
mod state;

pub use model::{Connection, MapData, NodeData, Position};
pub use repository::MapRepository;
pub use state::CollaborationMap;

/// File name used when exporting a map without an explicit path.
pub const DEFAULT_MAP_FILE: &str = "mindmash-map.json";
