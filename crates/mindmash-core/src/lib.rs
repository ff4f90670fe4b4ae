//! Offline response engine for the MindMash collaborative chat.
//!
//! The crate classifies user messages into content categories, picks canned
//! persona responses, annotates chat commands (`/pin`, `#hashtag`,
//! `@mention`), scores sentiment and models the collaboration map document.
//! Scheduling of responses lives in `mindmash-execution`.

pub mod category;
pub mod command;
pub mod config;
pub mod error;
pub mod map;
pub mod persona;
pub mod response;
pub mod sentiment;
pub mod session;

pub use category::{Category, determine_category};
pub use error::{MindmashError, Result};
pub use response::{FALLBACK_RESPONSE, ResponseDatabase, get_ai_response};
