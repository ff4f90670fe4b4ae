//! Colored terminal rendering of chat events and the collaboration map.

use colored::{ColoredString, Colorize};
use mindmash_core::command::{Token, TokenKind};
use mindmash_core::map::CollaborationMap;
use mindmash_core::persona::{SYSTEM_ID, USER_ID, display_name};
use mindmash_core::sentiment::{Emotion, Sentiment};
use mindmash_core::session::Message;

/// Terminal color for a sender id.
fn paint(sender: &str, text: &str) -> ColoredString {
    match sender {
        USER_ID => text.bright_white(),
        "grok" => text.bright_green(),
        "chatgpt" => text.bright_magenta(),
        "gemini" => text.bright_cyan(),
        SYSTEM_ID => text.bright_yellow(),
        _ => text.normal(),
    }
}

/// Message body with hashtags and mentions highlighted.
pub fn render_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| match token.kind {
            TokenKind::Text => token.value.normal().to_string(),
            TokenKind::Hashtag => token.source_text().cyan().underline().to_string(),
            TokenKind::Mention => token.source_text().magenta().underline().to_string(),
        })
        .collect()
}

/// One chat line: `[time] Name: body`.
pub fn render_message(message: &Message) -> String {
    let body = if message.tokens.is_empty() {
        message.content.clone()
    } else {
        render_tokens(&message.tokens)
    };
    let name = display_name(&message.sender);

    format!(
        "{} {} {}",
        format!("[{}]", message.timestamp).bright_black(),
        paint(&message.sender, &format!("{name}:")).bold(),
        body
    )
}

pub fn render_emotion(emotion: Emotion, sentiment: &Sentiment) -> String {
    let label = match emotion {
        Emotion::Joy => "Joy".bright_green(),
        Emotion::Trust => "Trust".green(),
        Emotion::Neutral => "Neutral".white(),
        Emotion::Fear => "Fear".yellow(),
        Emotion::Anger => "Anger".red(),
    };
    format!(
        "{} {} {}",
        "mood:".bright_black(),
        label,
        format!("({:.2} {})", sentiment.score, sentiment.label).bright_black()
    )
}

/// Node list with the active node marked, followed by its connections.
pub fn render_map(map: &CollaborationMap) -> String {
    let data = map.data();
    let active = map.active_node().map(|n| n.id.as_str());
    let mut lines = Vec::with_capacity(data.nodes.len() + 1);

    for node in data.nodes.values() {
        let marker = if Some(node.id.as_str()) == active { "*" } else { " " };
        lines.push(format!(
            "{marker} {} ({:.2}, {:.2})",
            paint(&node.id, &node.name),
            node.position.x,
            node.position.y
        ));
    }

    if let Some(id) = active {
        for connection in data.connections_of(id) {
            lines.push(
                format!(
                    "    {} -> {} [{:.1}]",
                    connection.from, connection.to, connection.strength
                )
                .bright_black()
                .to_string(),
            );
        }
    }

    lines.join("\n")
}

pub fn render_help() -> String {
    [
        ("/pin <text>", "pin a message"),
        ("/pinned", "list pinned messages"),
        ("/map", "show the collaboration map"),
        ("/save-map [path]", "export the map as JSON"),
        ("/load-map [path]", "import a map from JSON"),
        ("/clear", "clear the conversation"),
        ("quit", "leave"),
    ]
    .iter()
    .map(|(cmd, what)| format!("  {:<18} {}", cmd.bright_cyan(), what.bright_black()))
    .collect::<Vec<_>>()
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindmash_core::command::process_message;
    use mindmash_core::session::MessageLog;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_tokens_keep_sigils() {
        plain();
        let tokens = process_message("ask @gemini about #rust").tokens;
        assert_eq!(render_tokens(&tokens), "ask @gemini about #rust");
    }

    #[test]
    fn test_message_line() {
        plain();
        let mut log = MessageLog::new();
        let message = log.push("chatgpt", "Hello", Vec::new());
        let line = render_message(&message);
        assert!(line.ends_with("ChatGPT: Hello"));
        assert!(line.starts_with(&format!("[{}]", message.timestamp)));
    }

    #[test]
    fn test_map_marks_active_node() {
        plain();
        let mut map = CollaborationMap::default();
        map.set_active("grok");
        let rendered = render_map(&map);
        assert!(rendered.lines().any(|l| l.starts_with("* Grok")));
        assert!(rendered.contains("user -> grok"));
    }
}
