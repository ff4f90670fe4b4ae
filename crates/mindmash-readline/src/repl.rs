//! Line classification for the REPL.

use std::path::PathBuf;

/// What a line of input asks the REPL to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Quit,
    Help,
    /// Lists pinned messages
    Pinned,
    /// Prints the collaboration map
    ShowMap,
    SaveMap(Option<PathBuf>),
    LoadMap(Option<PathBuf>),
    Clear,
    /// Anything else, `/pin ` included, goes to the chat session.
    Chat(String),
}

impl ReplCommand {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let (head, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (trimmed, ""),
        };
        let path = || (!rest.is_empty()).then(|| PathBuf::from(rest));

        match head {
            "quit" | "exit" if rest.is_empty() => ReplCommand::Quit,
            "/help" => ReplCommand::Help,
            "/pinned" => ReplCommand::Pinned,
            "/map" => ReplCommand::ShowMap,
            "/save-map" => ReplCommand::SaveMap(path()),
            "/load-map" => ReplCommand::LoadMap(path()),
            "/clear" => ReplCommand::Clear,
            _ => ReplCommand::Chat(line.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_commands() {
        assert_eq!(ReplCommand::parse("quit"), ReplCommand::Quit);
        assert_eq!(ReplCommand::parse("  exit "), ReplCommand::Quit);
        assert_eq!(ReplCommand::parse("/pinned"), ReplCommand::Pinned);
        assert_eq!(ReplCommand::parse("/clear"), ReplCommand::Clear);
        assert_eq!(ReplCommand::parse("/map"), ReplCommand::ShowMap);
    }

    #[test]
    fn test_map_paths() {
        assert_eq!(ReplCommand::parse("/save-map"), ReplCommand::SaveMap(None));
        assert_eq!(
            ReplCommand::parse("/load-map  maps/team.json "),
            ReplCommand::LoadMap(Some(PathBuf::from("maps/team.json")))
        );
    }

    #[test]
    fn test_chat_passthrough() {
        assert_eq!(
            ReplCommand::parse("/pin remember this"),
            ReplCommand::Chat("/pin remember this".to_string())
        );
        assert_eq!(
            ReplCommand::parse("quit smoking tips"),
            ReplCommand::Chat("quit smoking tips".to_string())
        );
        assert_eq!(
            ReplCommand::parse("/pinnedx"),
            ReplCommand::Chat("/pinnedx".to_string())
        );
    }
}
