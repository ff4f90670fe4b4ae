use serde::Serialize;
use tokio::sync::mpsc;

use super::Message;
use crate::sentiment::{Emotion, Sentiment};

/// Notifications emitted by a chat session.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatEvent {
    /// A message was appended to the log.
    MessageAppended { message: Message },
    /// A persona's typing indicator changed.
    TypingChanged { persona: String, typing: bool },
    /// A persona produced a response.
    AiActivity { persona: String },
    /// The session emotion was recomputed.
    EmotionChanged {
        emotion: Emotion,
        sentiment: Sentiment,
    },
    /// The last scheduled response of a cycle fired.
    CycleCompleted,
}

/// Receives session notifications.
///
/// All methods default to no-ops so front ends implement only what they
/// render. Called from the session's runtime tasks, never after the session
/// has been disposed.
pub trait ChatObserver: Send + Sync {
    fn on_message(&self, _message: &Message) {}

    fn on_typing(&self, _persona: &str, _typing: bool) {}

    fn on_ai_activity(&self, _persona: &str) {}

    fn on_emotion_change(&self, _emotion: Emotion, _sentiment: &Sentiment) {}

    fn on_cycle_complete(&self) {}
}

/// Observer that ignores everything.
pub struct NoopObserver;

impl ChatObserver for NoopObserver {}

/// Observer that forwards every notification as a [`ChatEvent`].
pub struct ChannelObserver {
    sender: mpsc::UnboundedSender<ChatEvent>,
}

impl ChannelObserver {
    pub fn new(sender: mpsc::UnboundedSender<ChatEvent>) -> Self {
        Self { sender }
    }

    /// Creates an observer together with its receiving end.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<ChatEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    fn send(&self, event: ChatEvent) {
        // Receiver gone means nobody is rendering; drop the event.
        let _ = self.sender.send(event);
    }
}

impl ChatObserver for ChannelObserver {
    fn on_message(&self, message: &Message) {
        self.send(ChatEvent::MessageAppended {
            message: message.clone(),
        });
    }

    fn on_typing(&self, persona: &str, typing: bool) {
        self.send(ChatEvent::TypingChanged {
            persona: persona.to_string(),
            typing,
        });
    }

    fn on_ai_activity(&self, persona: &str) {
        self.send(ChatEvent::AiActivity {
            persona: persona.to_string(),
        });
    }

    fn on_emotion_change(&self, emotion: Emotion, sentiment: &Sentiment) {
        self.send(ChatEvent::EmotionChanged {
            emotion,
            sentiment: sentiment.clone(),
        });
    }

    fn on_cycle_complete(&self) {
        self.send(ChatEvent::CycleCompleted);
    }
}
