use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::DateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use journey_core::model::{
    ChatLog, JourneyError, JourneyProgress, Language, LessonProgress, LessonProgressError, Message,
    Role,
};

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

//
// ─── JOURNEY RECORD ────────────────────────────────────────────────────────────
//

/// Persisted shape for per-day lesson progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonProgressRecord {
    pub total_cards: u32,
    pub viewed_cards: u32,
    pub completed_activities: u32,
}

impl LessonProgressRecord {
    #[must_use]
    pub fn from_progress(progress: &LessonProgress) -> Self {
        Self {
            total_cards: progress.total_cards(),
            viewed_cards: progress.viewed_cards(),
            completed_activities: progress.completed_activities(),
        }
    }

    /// Convert the record back into domain progress.
    ///
    /// # Errors
    ///
    /// Returns `LessonProgressError` if the persisted counts are inconsistent.
    pub fn into_progress(self) -> Result<LessonProgress, LessonProgressError> {
        LessonProgress::new(
            self.total_cards,
            self.viewed_cards,
            self.completed_activities,
        )
    }
}

/// Persisted shape for the journey store.
///
/// The in-progress lookup is externalized as an explicit ordered pair list
/// (the storage format has no native map) and rebuilt into the lookup
/// structure on load. This mirrors the domain `JourneyProgress` so the
/// repository can serialize without leaking storage concerns into the
/// domain layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JourneyRecord {
    pub current_day: u32,
    pub completed_days: Vec<u32>,
    pub in_progress_days: Vec<(u32, LessonProgressRecord)>,
    pub total_days: u32,
    pub streak_count: u32,
}

impl JourneyRecord {
    #[must_use]
    pub fn from_journey(journey: &JourneyProgress) -> Self {
        Self {
            current_day: journey.current_day(),
            completed_days: journey.completed_days().to_vec(),
            in_progress_days: journey
                .in_progress()
                .iter()
                .map(|(day, progress)| (*day, LessonProgressRecord::from_progress(progress)))
                .collect(),
            total_days: journey.total_days(),
            streak_count: journey.streak_count(),
        }
    }

    /// Convert the record back into a domain `JourneyProgress`.
    ///
    /// # Errors
    ///
    /// Returns `JourneyError` if any persisted day or count violates the
    /// journey invariants.
    pub fn into_journey(self) -> Result<JourneyProgress, JourneyError> {
        let mut in_progress = Vec::with_capacity(self.in_progress_days.len());
        for (day, record) in self.in_progress_days {
            in_progress.push((day, record.into_progress()?));
        }

        JourneyProgress::from_persisted(
            self.total_days,
            self.current_day,
            self.completed_days,
            in_progress,
            self.streak_count,
        )
    }
}

//
// ─── CHAT RECORD ───────────────────────────────────────────────────────────────
//

/// Persisted shape for a single chat message; timestamps are epoch millis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: i64,
}

impl MessageRecord {
    #[must_use]
    pub fn from_message(message: &Message) -> Self {
        Self {
            id: message.id.clone(),
            role: message.role,
            content: message.content.clone(),
            timestamp: message.timestamp.timestamp_millis(),
        }
    }

    /// Convert the record back into a domain `Message`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if the timestamp cannot be
    /// represented.
    pub fn into_message(self) -> Result<Message, StorageError> {
        let timestamp = DateTime::from_timestamp_millis(self.timestamp).ok_or_else(|| {
            StorageError::Serialization(format!("invalid message timestamp: {}", self.timestamp))
        })?;
        Ok(Message::from_persisted(
            self.id,
            self.role,
            self.content,
            timestamp,
        ))
    }
}

/// Persisted shape for the chat widget state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRecord {
    pub messages: Vec<MessageRecord>,
    pub language: Language,
}

impl ChatRecord {
    #[must_use]
    pub fn from_log(log: &ChatLog) -> Self {
        Self {
            messages: log
                .messages()
                .iter()
                .map(MessageRecord::from_message)
                .collect(),
            language: log.language(),
        }
    }

    /// Convert the record back into a domain `ChatLog`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if any message is malformed.
    pub fn into_log(self) -> Result<ChatLog, StorageError> {
        let mut messages = Vec::with_capacity(self.messages.len());
        for record in self.messages {
            messages.push(record.into_message()?);
        }
        Ok(ChatLog::from_persisted(messages, self.language))
    }
}

//
// ─── REPOSITORIES ──────────────────────────────────────────────────────────────
//

/// Repository contract for the journey progress record.
#[async_trait]
pub trait JourneyRepository: Send + Sync {
    /// Fetch the stored journey record, if one exists.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be read.
    async fn load_journey(&self) -> Result<Option<JourneyRecord>, StorageError>;

    /// Persist or replace the journey record.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be stored.
    async fn save_journey(&self, record: &JourneyRecord) -> Result<(), StorageError>;
}

/// Repository contract for the chat widget state.
#[async_trait]
pub trait ChatRepository: Send + Sync {
    /// Fetch the stored chat record, if one exists.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be read.
    async fn load_chat(&self) -> Result<Option<ChatRecord>, StorageError>;

    /// Persist or replace the chat record.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be stored.
    async fn save_chat(&self, record: &ChatRecord) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    journey: Arc<Mutex<Option<JourneyRecord>>>,
    chat: Arc<Mutex<Option<ChatRecord>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl JourneyRepository for InMemoryRepository {
    async fn load_journey(&self) -> Result<Option<JourneyRecord>, StorageError> {
        let guard = self
            .journey
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn save_journey(&self, record: &JourneyRecord) -> Result<(), StorageError> {
        let mut guard = self
            .journey
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(record.clone());
        Ok(())
    }
}

#[async_trait]
impl ChatRepository for InMemoryRepository {
    async fn load_chat(&self) -> Result<Option<ChatRecord>, StorageError> {
        let guard = self
            .chat
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn save_chat(&self, record: &ChatRecord) -> Result<(), StorageError> {
        let mut guard = self
            .chat
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(record.clone());
        Ok(())
    }
}

/// Aggregates the journey and chat repositories behind trait objects for
/// easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub journeys: Arc<dyn JourneyRepository>,
    pub chats: Arc<dyn ChatRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let journeys: Arc<dyn JourneyRepository> = Arc::new(repo.clone());
        let chats: Arc<dyn ChatRepository> = Arc::new(repo);
        Self { journeys, chats }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use journey_core::model::DayStatus;
    use journey_core::time::fixed_now;

    fn build_journey() -> JourneyProgress {
        let mut journey = JourneyProgress::thirty_day();
        journey.complete_day(1).unwrap();
        journey.complete_day(2).unwrap();
        journey
            .record_lesson_progress(3, LessonProgress::new(4, 2, 1).unwrap())
            .unwrap();
        journey
    }

    #[tokio::test]
    async fn journey_record_round_trips_through_memory() {
        let repo = InMemoryRepository::new();
        let journey = build_journey();

        repo.save_journey(&JourneyRecord::from_journey(&journey))
            .await
            .unwrap();

        let restored = repo
            .load_journey()
            .await
            .unwrap()
            .unwrap()
            .into_journey()
            .unwrap();
        assert_eq!(restored, journey);
        assert_eq!(restored.day_status(3).unwrap(), DayStatus::InProgress);
    }

    #[tokio::test]
    async fn empty_store_loads_nothing() {
        let repo = InMemoryRepository::new();
        assert!(repo.load_journey().await.unwrap().is_none());
        assert!(repo.load_chat().await.unwrap().is_none());
    }

    #[test]
    fn in_progress_map_is_encoded_as_pair_list() {
        let record = JourneyRecord::from_journey(&build_journey());
        assert_eq!(record.in_progress_days.len(), 1);
        assert_eq!(record.in_progress_days[0].0, 3);
        assert_eq!(record.in_progress_days[0].1.viewed_cards, 2);
    }

    #[test]
    fn malformed_lesson_counts_fail_rehydration() {
        let record = JourneyRecord {
            current_day: 1,
            completed_days: Vec::new(),
            in_progress_days: vec![(
                1,
                LessonProgressRecord {
                    total_cards: 2,
                    viewed_cards: 5,
                    completed_activities: 0,
                },
            )],
            total_days: 30,
            streak_count: 0,
        };
        assert!(record.into_journey().is_err());
    }

    #[tokio::test]
    async fn chat_record_round_trips_with_epoch_millis() {
        let repo = InMemoryRepository::new();
        let mut log = ChatLog::new();
        log.set_language(Language::Es);
        log.push(Message::new(Role::User, "hola", fixed_now()));
        log.push(Message::new(Role::Assistant, "¡hola!", fixed_now()));

        repo.save_chat(&ChatRecord::from_log(&log)).await.unwrap();

        let record = repo.load_chat().await.unwrap().unwrap();
        assert_eq!(record.messages[0].timestamp, fixed_now().timestamp_millis());

        let restored = record.into_log().unwrap();
        assert_eq!(restored, log);
    }

    #[test]
    fn invalid_timestamp_is_a_serialization_error() {
        let record = MessageRecord {
            id: "m1".into(),
            role: Role::User,
            content: "hi".into(),
            timestamp: i64::MAX,
        };
        assert!(matches!(
            record.into_message().unwrap_err(),
            StorageError::Serialization(_)
        ));
    }
}
