use std::sync::{Arc, Mutex, PoisonError};

use tracing::warn;

use journey_core::Clock;
use journey_core::model::{ChatLog, Language, Message, Role};
use storage::repository::{ChatRecord, ChatRepository};

use crate::coach::CoachClient;

/// Reply substituted when the coach cannot be reached. Always English,
/// whatever language the widget is set to.
pub const CONNECTION_FALLBACK_REPLY: &str =
    "I'm having trouble connecting right now. Please try again later.";

/// Chat widget state: the conversation transcript plus language selection.
///
/// Mutations follow the same write-through discipline as the journey store:
/// in-memory first, then a best-effort save that is logged on failure.
pub struct ChatService {
    log: Mutex<ChatLog>,
    repo: Arc<dyn ChatRepository>,
    coach: Arc<dyn CoachClient>,
    clock: Clock,
}

impl ChatService {
    /// Rehydrates the transcript from storage, starting empty when nothing
    /// is stored or the stored record is unreadable.
    pub async fn load(
        repo: Arc<dyn ChatRepository>,
        coach: Arc<dyn CoachClient>,
        clock: Clock,
    ) -> Self {
        let log = match repo.load_chat().await {
            Ok(Some(record)) => match record.into_log() {
                Ok(log) => log,
                Err(err) => {
                    warn!(error = %err, "stored chat state is malformed, starting empty");
                    ChatLog::new()
                }
            },
            Ok(None) => ChatLog::new(),
            Err(err) => {
                warn!(error = %err, "could not read stored chat state, starting empty");
                ChatLog::new()
            }
        };

        Self {
            log: Mutex::new(log),
            repo,
            coach,
            clock,
        }
    }

    /// Sends a user message to the coach and appends both sides of the
    /// exchange to the transcript.
    ///
    /// The coach sees the conversation as it stood before this message.
    /// Any coach failure is absorbed: the assistant reply becomes the fixed
    /// fallback string instead. Blank input is ignored.
    pub async fn send(&self, text: &str) -> Option<Message> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        let (history, language) = {
            let mut log = self.lock();
            let history = log.messages().to_vec();
            let language = log.language();
            log.push(Message::new(Role::User, trimmed, self.clock.now()));
            (history, language)
        };
        self.persist().await;

        let reply = match self.coach.respond(trimmed, &history, language).await {
            Ok(reply) => reply,
            Err(err) => {
                warn!(error = %err, "coach request failed, using fallback reply");
                CONNECTION_FALLBACK_REPLY.to_string()
            }
        };

        let message = {
            let mut log = self.lock();
            let message = Message::new(Role::Assistant, reply, self.clock.now());
            log.push(message.clone());
            message
        };
        self.persist().await;

        Some(message)
    }

    /// Snapshot of the transcript in order.
    #[must_use]
    pub fn messages(&self) -> Vec<Message> {
        self.lock().messages().to_vec()
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.lock().language()
    }

    pub async fn set_language(&self, language: Language) {
        self.lock().set_language(language);
        self.persist().await;
    }

    pub async fn clear_messages(&self) {
        self.lock().clear();
        self.persist().await;
    }

    async fn persist(&self) {
        let record = ChatRecord::from_log(&self.lock());
        if let Err(err) = self.repo.save_chat(&record).await {
            warn!(error = %err, "failed to persist chat state");
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ChatLog> {
        self.log.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
