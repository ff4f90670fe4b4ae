//! Offline response selection.
//!
//! - `database`: the immutable persona/category table and selection rules
//! - `table`: the built-in canned responses

mod database;
mod table;

pub use database::{FALLBACK_RESPONSE, ResponseDatabase, get_ai_response};
