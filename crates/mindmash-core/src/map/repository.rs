//! Map repository trait.

use super::model::MapData;
use crate::error::Result;

/// Storage for exported collaboration maps.
///
/// Implementations validate on load and must not return partially parsed
/// data: a malformed document is an [`InvalidMap`] error.
///
/// [`InvalidMap`]: crate::error::MindmashError::InvalidMap
#[async_trait::async_trait]
pub trait MapRepository: Send + Sync {
    /// Loads and validates a map document.
    async fn load(&self) -> Result<MapData>;

    /// Writes a map document, replacing any previous one.
    async fn save(&self, map: &MapData) -> Result<()>;
}
