//! File-system adapters for MindMash: configuration and map export/import.

pub mod config_service;
pub mod json_map_repository;
pub mod paths;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::json_map_repository::JsonMapRepository;
pub use crate::paths::MindmashPaths;
