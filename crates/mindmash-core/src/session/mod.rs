//! Chat session domain types.
//!
//! - `message`: chat messages and the in-memory log (`Message`, `MessageLog`)
//! - `event`: notifications a session emits to front ends (`ChatEvent`, `ChatObserver`)

mod event;
mod message;

pub use event::{ChannelObserver, ChatEvent, ChatObserver, NoopObserver};
pub use message::{Message, MessageLog};
