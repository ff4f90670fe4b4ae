//! Simulated multi-persona chat session.
//!
//! Each submitted message starts a response cycle: every configured responder
//! answers at its own offset from the submission time, then the system
//! persona posts a summary. Offsets are absolute deadlines measured from the
//! submission instant, so later steps never drift behind earlier ones.
//!
//! A session owns one cancellation scope. Every cycle runs under a child
//! token; disposing or dropping the session cancels all pending cycles and no
//! state is touched afterwards.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use mindmash_core::category::{Category, determine_category};
use mindmash_core::command::process_message;
use mindmash_core::config::ChatConfig;
use mindmash_core::persona::{SYSTEM_ID, USER_ID};
use mindmash_core::response::ResponseDatabase;
use mindmash_core::sentiment::{
    Emotion, LexiconSentimentAnalyzer, Sentiment, SentimentAnalyzer,
};
use mindmash_core::session::{ChatObserver, Message, MessageLog, NoopObserver};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};
use tokio_util::sync::CancellationToken;

/// Result of [`ChatSession::submit`].
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Blank input, or the session was already disposed.
    Ignored,
    /// A `/pin ` request; no responses were scheduled.
    Pinned { notice: Message },
    /// A regular message; responses are on their way.
    Dispatched(ResponseCycle),
}

/// Handle to the responses scheduled for one submitted message.
#[derive(Debug)]
pub struct ResponseCycle {
    pub user_message: Message,
    pub category: Category,
    token: CancellationToken,
    handle: JoinHandle<CycleReport>,
}

impl ResponseCycle {
    /// Stops the remaining responses of this cycle only.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Waits until the cycle finished or was cancelled.
    pub async fn wait(self) -> CycleReport {
        match self.handle.await {
            Ok(report) => report,
            Err(e) => {
                tracing::error!(target: "mindmash::chat", error = %e, "Response cycle task failed");
                CycleReport {
                    delivered: Vec::new(),
                    cancelled: true,
                }
            }
        }
    }
}

/// Messages a cycle managed to deliver.
#[derive(Debug, Clone)]
pub struct CycleReport {
    pub delivered: Vec<Message>,
    /// True when the cycle stopped before its last step
    pub cancelled: bool,
}

struct SessionState {
    id: String,
    log: RwLock<MessageLog>,
    typing: RwLock<BTreeMap<String, bool>>,
    pinned: RwLock<Vec<String>>,
    sentiment: RwLock<Sentiment>,
    responses: Arc<ResponseDatabase>,
    analyzer: Arc<dyn SentimentAnalyzer>,
    observer: Arc<dyn ChatObserver>,
    rng: Mutex<StdRng>,
}

impl SessionState {
    fn pick_response(&self, persona: &str, category: Category, avoid: &[String]) -> String {
        match self.rng.lock() {
            Ok(mut rng) => self.responses.select(persona, category, avoid, &mut *rng),
            Err(poisoned) => {
                let mut rng = poisoned.into_inner();
                self.responses.select(persona, category, avoid, &mut *rng)
            }
        }
    }

    /// Scores `text` and publishes the new emotion while `live` is not
    /// cancelled.
    async fn update_sentiment(&self, text: &str, live: &CancellationToken) {
        let sentiment = self.analyzer.analyze(text);
        {
            let mut current = self.sentiment.write().await;
            if live.is_cancelled() {
                return;
            }
            *current = sentiment.clone();
        }
        if !live.is_cancelled() {
            self.observer.on_emotion_change(sentiment.emotion(), &sentiment);
        }
    }

    async fn set_typing(&self, persona: &str, typing: bool, live: &CancellationToken) {
        {
            let mut flags = self.typing.write().await;
            if live.is_cancelled() {
                return;
            }
            flags.insert(persona.to_string(), typing);
        }
        if !live.is_cancelled() {
            self.observer.on_typing(persona, typing);
        }
    }

    /// Clears the typing flags of responders that will no longer answer.
    async fn stop_typing(&self, remaining: &[(String, Duration)], session: &CancellationToken) {
        for (persona, _) in remaining {
            if persona != SYSTEM_ID {
                self.set_typing(persona, false, session).await;
            }
        }
    }

    /// One step of a response cycle.
    ///
    /// Returns `None` if the cycle was cancelled before the message could be
    /// appended; nothing is mutated in that case. Cancellation is checked
    /// again before every later update and notification.
    async fn deliver(
        &self,
        persona: &str,
        category: Category,
        token: &CancellationToken,
    ) -> Option<Message> {
        let message = {
            let mut log = self.log.write().await;
            if token.is_cancelled() {
                return None;
            }
            // Avoid repeating this persona's previous answer.
            let avoid: Vec<String> = log
                .messages()
                .iter()
                .rev()
                .find(|m| m.sender == persona)
                .map(|m| vec![m.content.clone()])
                .unwrap_or_default();
            let content = self.pick_response(persona, category, &avoid);
            log.push(persona, content, Vec::new())
        };
        tracing::debug!(
            target: "mindmash::chat",
            session = %self.id,
            persona,
            %category,
            id = message.id,
            "Persona responded"
        );

        if persona != SYSTEM_ID {
            self.set_typing(persona, false, token).await;
        }
        if token.is_cancelled() {
            return Some(message);
        }
        self.observer.on_message(&message);
        if token.is_cancelled() {
            return Some(message);
        }
        self.observer.on_ai_activity(persona);
        self.update_sentiment(&message.content, token).await;

        Some(message)
    }
}

/// Builder for [`ChatSession`].
pub struct ChatSessionBuilder {
    config: ChatConfig,
    responses: Option<Arc<ResponseDatabase>>,
    analyzer: Option<Arc<dyn SentimentAnalyzer>>,
    observer: Option<Arc<dyn ChatObserver>>,
}

impl ChatSessionBuilder {
    /// Replaces the built-in response table.
    pub fn responses(mut self, responses: Arc<ResponseDatabase>) -> Self {
        self.responses = Some(responses);
        self
    }

    pub fn analyzer(mut self, analyzer: Arc<dyn SentimentAnalyzer>) -> Self {
        self.analyzer = Some(analyzer);
        self
    }

    pub fn observer(mut self, observer: Arc<dyn ChatObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn build(self) -> ChatSession {
        let rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let state = SessionState {
            id: uuid::Uuid::new_v4().to_string(),
            log: RwLock::new(MessageLog::new()),
            typing: RwLock::new(BTreeMap::new()),
            pinned: RwLock::new(Vec::new()),
            sentiment: RwLock::new(Sentiment::default()),
            responses: self
                .responses
                .unwrap_or_else(|| Arc::new(ResponseDatabase::builtin().clone())),
            analyzer: self
                .analyzer
                .unwrap_or_else(|| Arc::new(LexiconSentimentAnalyzer::new())),
            observer: self.observer.unwrap_or_else(|| Arc::new(NoopObserver)),
            rng: Mutex::new(rng),
        };

        tracing::info!(target: "mindmash::chat", session = %state.id, "Chat session created");

        ChatSession {
            state: Arc::new(state),
            schedule: self.config.schedule(),
            cancel: CancellationToken::new(),
        }
    }
}

/// An in-memory chat session with simulated persona responses.
pub struct ChatSession {
    state: Arc<SessionState>,
    schedule: Vec<(String, Duration)>,
    cancel: CancellationToken,
}

impl ChatSession {
    /// A session with the built-in table, lexicon sentiment and no observer.
    pub fn new(config: ChatConfig) -> Self {
        Self::builder(config).build()
    }

    pub fn builder(config: ChatConfig) -> ChatSessionBuilder {
        ChatSessionBuilder {
            config,
            responses: None,
            analyzer: None,
            observer: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.state.id
    }

    /// Handles one line of user input.
    ///
    /// Must be called from within a Tokio runtime: response cycles are
    /// spawned as tasks.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        if self.cancel.is_cancelled() {
            tracing::warn!(target: "mindmash::chat", session = %self.state.id, "Submit on disposed session ignored");
            return SubmitOutcome::Ignored;
        }
        if text.trim().is_empty() {
            return SubmitOutcome::Ignored;
        }

        let processed = process_message(text);
        self.state.update_sentiment(text, &self.cancel).await;
        if self.cancel.is_cancelled() {
            return SubmitOutcome::Ignored;
        }

        if let Some(pin) = processed.pin() {
            let pinned_text = pin.processed_text();
            self.state.pinned.write().await.push(pinned_text.clone());
            let notice = self.state.log.write().await.push(
                SYSTEM_ID,
                format!("Message pinned: \"{pinned_text}\""),
                Vec::new(),
            );
            tracing::info!(target: "mindmash::chat", session = %self.state.id, "Message pinned");
            self.state.observer.on_message(&notice);
            return SubmitOutcome::Pinned { notice };
        }

        let start = Instant::now();
        let user_message = self
            .state
            .log
            .write()
            .await
            .push(USER_ID, text, processed.tokens);
        self.state.observer.on_message(&user_message);

        let category = determine_category(text);
        tracing::info!(
            target: "mindmash::chat",
            session = %self.state.id,
            %category,
            id = user_message.id,
            "Dispatching response cycle"
        );

        for (persona, _) in &self.schedule {
            if persona != SYSTEM_ID {
                self.state.set_typing(persona, true, &self.cancel).await;
            }
        }

        let token = self.cancel.child_token();
        let handle = tokio::spawn(run_cycle(
            Arc::clone(&self.state),
            self.schedule.clone(),
            category,
            start,
            token.clone(),
            self.cancel.clone(),
        ));

        SubmitOutcome::Dispatched(ResponseCycle {
            user_message,
            category,
            token,
            handle,
        })
    }

    /// Snapshot of the message log.
    pub async fn messages(&self) -> Vec<Message> {
        self.state.log.read().await.messages().to_vec()
    }

    /// Typing indicator per persona.
    pub async fn typing(&self) -> BTreeMap<String, bool> {
        self.state.typing.read().await.clone()
    }

    /// Texts pinned with `/pin`, oldest first.
    pub async fn pinned(&self) -> Vec<String> {
        self.state.pinned.read().await.clone()
    }

    /// Latest sentiment.
    pub async fn sentiment(&self) -> Sentiment {
        self.state.sentiment.read().await.clone()
    }

    /// Emotion derived from the latest sentiment.
    pub async fn emotion(&self) -> Emotion {
        self.state.sentiment.read().await.emotion()
    }

    /// Empties the message log. Pending cycles keep running.
    pub async fn clear(&self) {
        self.state.log.write().await.clear();
    }

    /// Cancels every pending response cycle. Further submissions are ignored.
    pub fn dispose(&self) {
        if !self.cancel.is_cancelled() {
            tracing::info!(target: "mindmash::chat", session = %self.state.id, "Chat session disposed");
            self.cancel.cancel();
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for ChatSession {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Drives one response cycle.
///
/// `token` stops this cycle only; `session` is the parent scope and is
/// cancelled when the whole session goes away.
async fn run_cycle(
    state: Arc<SessionState>,
    schedule: Vec<(String, Duration)>,
    category: Category,
    start: Instant,
    token: CancellationToken,
    session: CancellationToken,
) -> CycleReport {
    let mut delivered = Vec::with_capacity(schedule.len());

    for (index, (persona, offset)) in schedule.iter().enumerate() {
        let cancelled = tokio::select! {
            biased;
            _ = token.cancelled() => true,
            _ = sleep_until(start + *offset) => false,
        };

        if !cancelled {
            if let Some(message) = state.deliver(persona, category, &token).await {
                delivered.push(message);
            }
            if !token.is_cancelled() {
                continue;
            }
        }

        tracing::debug!(target: "mindmash::chat", session = %state.id, persona = %persona, "Response cycle cancelled");
        // The persona at `index` may have answered without clearing its flag.
        state.stop_typing(&schedule[index..], &session).await;
        return CycleReport {
            delivered,
            cancelled: true,
        };
    }

    state.observer.on_cycle_complete();
    CycleReport {
        delivered,
        cancelled: false,
    }
}
