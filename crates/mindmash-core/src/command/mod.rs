//! Chat command parsing and annotation.
//!
//! Messages are scanned for a `/pin ` prefix, `#hashtag` and `@mention`
//! tokens. The result is a typed token stream; turning it into markup is left
//! to the renderers in `render` or to the presentation layer.

mod parser;
mod render;
mod token;

pub use parser::{
    CommandKind, CommandMetadata, CommandParser, PIN_PREFIX, ParsedCommand, ProcessedMessage,
    parse_commands, process_message,
};
pub use render::{render_html, render_plain};
pub use token::{Token, TokenKind};
