//! Simulated AI personas that take part in the collaborative chat.

use serde::Serialize;

/// Sender id used for messages typed by the human user.
pub const USER_ID: &str = "user";

/// Persona id of the system moderator that summarizes each response cycle.
pub const SYSTEM_ID: &str = "system";

/// A named simulated responder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Persona {
    /// Identifier used as the response table key and message sender
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Accent color used by front ends
    pub color: &'static str,
}

/// Grok: first responder, pattern-matching and simulation flavored.
pub static GROK: Persona = Persona {
    id: "grok",
    name: "Grok",
    color: "rgba(74, 222, 128, 0.8)",
};

/// ChatGPT: balanced, structured explanations.
pub static CHATGPT: Persona = Persona {
    id: "chatgpt",
    name: "ChatGPT",
    color: "rgba(217, 70, 239, 0.8)",
};

/// Gemini: multimodal, visual framing.
pub static GEMINI: Persona = Persona {
    id: "gemini",
    name: "Gemini",
    color: "rgba(34, 211, 238, 0.8)",
};

/// The system moderator.
pub static SYSTEM: Persona = Persona {
    id: SYSTEM_ID,
    name: "System",
    color: "rgba(250, 204, 21, 0.8)",
};

/// Personas that respond to user messages, in send order.
pub fn responding_personas() -> [&'static Persona; 3] {
    [&GROK, &CHATGPT, &GEMINI]
}

/// Looks up a known persona by id (case-insensitive).
pub fn find_persona(id: &str) -> Option<&'static Persona> {
    [&GROK, &CHATGPT, &GEMINI, &SYSTEM]
        .into_iter()
        .find(|p| p.id.eq_ignore_ascii_case(id))
}

/// Display name for any sender id, including the user.
pub fn display_name(sender: &str) -> String {
    if sender == USER_ID {
        return "User".to_string();
    }
    match find_persona(sender) {
        Some(persona) => persona.name.to_string(),
        None => {
            let mut chars = sender.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}
