//! Chat command parsing: `/pin`, `#hashtag` and `@mention`.

use std::sync::OnceLock;

use chrono::Utc;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::token::{Token, TokenKind};

/// Prefix that turns a chat message into a pin request.
pub const PIN_PREFIX: &str = "/pin ";

/// Type of a parsed chat command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandKind {
    Pin,
    Hashtag,
    Mention,
    None,
}

/// Structured side-effect data attached to a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CommandMetadata {
    Pin { pinned: bool, timestamp: String },
    Hashtags { hashtags: Vec<String> },
    Mentions { mentions: Vec<String> },
}

/// One interpretation of a chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCommand {
    pub kind: CommandKind,
    pub original_text: String,
    /// Annotated form of the message after this command was applied
    pub tokens: Vec<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<CommandMetadata>,
}

impl ParsedCommand {
    /// Plain-text rendering of `tokens`.
    pub fn processed_text(&self) -> String {
        self.tokens.iter().map(Token::source_text).collect()
    }

    /// Hashtags collected by a `hashtag` command.
    pub fn hashtags(&self) -> &[String] {
        match &self.metadata {
            Some(CommandMetadata::Hashtags { hashtags }) => hashtags,
            _ => &[],
        }
    }

    /// Mentions collected by a `mention` command.
    pub fn mentions(&self) -> &[String] {
        match &self.metadata {
            Some(CommandMetadata::Mentions { mentions }) => mentions,
            _ => &[],
        }
    }
}

/// The result of [`process_message`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedMessage {
    /// Most processed version of the message
    pub tokens: Vec<Token>,
    pub commands: Vec<ParsedCommand>,
}

impl ProcessedMessage {
    pub fn processed_text(&self) -> String {
        self.tokens.iter().map(Token::source_text).collect()
    }

    /// The pin command, if the message was a pin request.
    pub fn pin(&self) -> Option<&ParsedCommand> {
        self.commands.iter().find(|c| c.kind == CommandKind::Pin)
    }
}

/// Compiled token patterns.
pub struct CommandParser {
    hashtag: Regex,
    mention: Regex,
}

impl CommandParser {
    pub fn new() -> Self {
        // ASCII word characters only; both patterns are literals.
        Self {
            hashtag: Regex::new(r"#([A-Za-z0-9_]+)")
                .unwrap_or_else(|e| unreachable!("invalid hashtag pattern: {e}")),
            mention: Regex::new(r"@([A-Za-z0-9_]+)")
                .unwrap_or_else(|e| unreachable!("invalid mention pattern: {e}")),
        }
    }

    /// Scans `text` for commands.
    ///
    /// A pin request short-circuits all other scanning. Hashtag and mention
    /// commands are only emitted when at least one token was found, and the
    /// mention pass runs over the hashtag-annotated tokens so both kinds of
    /// markup compose. A message with no commands yields a single `none`.
    pub fn parse(&self, text: &str) -> Vec<ParsedCommand> {
        if let Some(rest) = text.strip_prefix(PIN_PREFIX) {
            return vec![ParsedCommand {
                kind: CommandKind::Pin,
                original_text: text.to_string(),
                tokens: text_tokens(rest),
                metadata: Some(CommandMetadata::Pin {
                    pinned: true,
                    timestamp: Utc::now().to_rfc3339(),
                }),
            }];
        }

        let mut commands = Vec::new();

        let (tokens, hashtags) = annotate(text_tokens(text), &self.hashtag, Token::hashtag);
        if !hashtags.is_empty() {
            commands.push(ParsedCommand {
                kind: CommandKind::Hashtag,
                original_text: text.to_string(),
                tokens: tokens.clone(),
                metadata: Some(CommandMetadata::Hashtags { hashtags }),
            });
        }

        let (tokens, mentions) = annotate(tokens, &self.mention, Token::mention);
        if !mentions.is_empty() {
            commands.push(ParsedCommand {
                kind: CommandKind::Mention,
                original_text: text.to_string(),
                tokens,
                metadata: Some(CommandMetadata::Mentions { mentions }),
            });
        }

        if commands.is_empty() {
            commands.push(ParsedCommand {
                kind: CommandKind::None,
                original_text: text.to_string(),
                tokens: text_tokens(text),
                metadata: None,
            });
        }

        commands
    }

    /// Parses `text` and keeps the most processed rendering.
    ///
    /// That is the last command whose processed text is non-empty, or the
    /// original text when there is none.
    pub fn process(&self, text: &str) -> ProcessedMessage {
        let commands = self.parse(text);
        let tokens = commands
            .iter()
            .rev()
            .find(|c| !c.processed_text().is_empty())
            .map(|c| c.tokens.clone())
            .unwrap_or_else(|| text_tokens(text));

        ProcessedMessage { tokens, commands }
    }
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new()
    }
}

fn text_tokens(text: &str) -> Vec<Token> {
    if text.is_empty() {
        Vec::new()
    } else {
        vec![Token::text(text)]
    }
}

/// Splits every text token around matches of `pattern`.
///
/// Returns the new token stream and the captured values in source order.
fn annotate(
    tokens: Vec<Token>,
    pattern: &Regex,
    make: fn(String) -> Token,
) -> (Vec<Token>, Vec<String>) {
    let mut out = Vec::with_capacity(tokens.len());
    let mut found = Vec::new();

    for token in tokens {
        if token.kind != TokenKind::Text {
            out.push(token);
            continue;
        }

        let mut last = 0;
        for caps in pattern.captures_iter(&token.value) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            if whole.start() > last {
                out.push(Token::text(&token.value[last..whole.start()]));
            }
            found.push(name.as_str().to_string());
            out.push(make(name.as_str().to_string()));
            last = whole.end();
        }
        if last < token.value.len() {
            out.push(Token::text(&token.value[last..]));
        }
    }

    (out, found)
}

static PARSER: OnceLock<CommandParser> = OnceLock::new();

fn parser() -> &'static CommandParser {
    PARSER.get_or_init(CommandParser::new)
}

/// Scans `text` for commands with the process-wide parser.
pub fn parse_commands(text: &str) -> Vec<ParsedCommand> {
    parser().parse(text)
}

/// Parses `text` and reduces the commands to the most processed rendering.
pub fn process_message(text: &str) -> ProcessedMessage {
    parser().process(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_command() {
        let commands = parse_commands("/pin hello world");
        assert_eq!(commands.len(), 1);
        let pin = &commands[0];
        assert_eq!(pin.kind, CommandKind::Pin);
        assert_eq!(pin.processed_text(), "hello world");
        assert_eq!(pin.original_text, "/pin hello world");
        match &pin.metadata {
            Some(CommandMetadata::Pin { pinned, timestamp }) => {
                assert!(*pinned);
                assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
            }
            other => panic!("unexpected metadata: {other:?}"),
        }
    }

    #[test]
    fn test_pin_skips_token_scanning() {
        let commands = parse_commands("/pin #ai with @bob");
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].kind, CommandKind::Pin);
        assert_eq!(commands[0].tokens, vec![Token::text("#ai with @bob")]);
    }

    #[test]
    fn test_pin_prefix_requires_space() {
        let commands = parse_commands("/pinned note");
        assert_eq!(commands[0].kind, CommandKind::None);
        let commands = parse_commands(" /pin note");
        assert_eq!(commands[0].kind, CommandKind::None);
    }

    #[test]
    fn test_hashtag_and_mention() {
        let commands = parse_commands("check #ai and @bob");
        assert_eq!(commands.len(), 2);

        assert_eq!(commands[0].kind, CommandKind::Hashtag);
        assert_eq!(commands[0].hashtags(), ["ai"]);
        assert_eq!(
            commands[0].tokens,
            vec![
                Token::text("check "),
                Token::hashtag("ai"),
                Token::text(" and @bob"),
            ]
        );

        assert_eq!(commands[1].kind, CommandKind::Mention);
        assert_eq!(commands[1].mentions(), ["bob"]);
        assert_eq!(
            commands[1].tokens,
            vec![
                Token::text("check "),
                Token::hashtag("ai"),
                Token::text(" and "),
                Token::mention("bob"),
            ]
        );
        assert_eq!(commands[1].processed_text(), "check #ai and @bob");
    }

    #[test]
    fn test_mentions_only() {
        let commands = parse_commands("@grok and @gemini, thoughts?");
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].kind, CommandKind::Mention);
        assert_eq!(commands[0].mentions(), ["grok", "gemini"]);
    }

    #[test]
    fn test_repeated_hashtags_are_all_collected() {
        let commands = parse_commands("#rust #rust #go");
        assert_eq!(commands[0].hashtags(), ["rust", "rust", "go"]);
        let tags = commands[0]
            .tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Hashtag)
            .count();
        assert_eq!(tags, 3);
    }

    #[test]
    fn test_adjacent_tokens() {
        let commands = parse_commands("#a@b");
        let mention = commands.last().unwrap();
        assert_eq!(mention.tokens, vec![Token::hashtag("a"), Token::mention("b")]);
    }

    #[test]
    fn test_bare_sigils_are_text() {
        let commands = parse_commands("# @ email me at x@ y");
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].kind, CommandKind::None);
    }

    #[test]
    fn test_non_ascii_word_chars_stop_token() {
        let commands = parse_commands("#café");
        assert_eq!(commands[0].hashtags(), ["caf"]);
        assert_eq!(commands[0].processed_text(), "#café");
    }

    #[test]
    fn test_plain_text() {
        let commands = parse_commands("plain text");
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].kind, CommandKind::None);
        assert_eq!(commands[0].processed_text(), "plain text");
        assert!(commands[0].metadata.is_none());
    }

    #[test]
    fn test_process_message_takes_last_command() {
        let processed = process_message("check #ai and @bob");
        assert_eq!(processed.commands.len(), 2);
        assert_eq!(processed.tokens, processed.commands[1].tokens);
        assert!(processed.pin().is_none());
    }

    #[test]
    fn test_process_message_empty_pin_falls_back_to_original() {
        let processed = process_message("/pin ");
        assert!(processed.pin().is_some());
        assert_eq!(processed.processed_text(), "/pin ");
    }

    #[test]
    fn test_markup_in_input_stays_text() {
        let input = r#"<span class="x">#ai</span>"#;
        let processed = process_message(input);
        assert_eq!(processed.tokens[0], Token::text(r#"<span class="x">"#));
        assert_eq!(processed.tokens[1], Token::hashtag("ai"));
    }

    #[test]
    fn test_metadata_json_shape() {
        let commands = parse_commands("hi @bob");
        let json = serde_json::to_value(&commands[0]).unwrap();
        assert_eq!(json["kind"], "mention");
        assert_eq!(json["metadata"]["mentions"][0], "bob");
    }
}
