//! Runtime side of MindMash: the timed chat session and logging setup.

pub mod chat_session;
pub mod tracing_setup;

pub use chat_session::{ChatSession, ChatSessionBuilder, CycleReport, ResponseCycle, SubmitOutcome};
pub use tracing_setup::{LogFormat, init_tracing};
