use async_trait::async_trait;
use sqlx::Row;

use journey_core::model::Language;

use crate::repository::{ChatRecord, ChatRepository, MessageRecord, StorageError};

use super::SqliteRepository;

#[async_trait]
impl ChatRepository for SqliteRepository {
    async fn load_chat(&self) -> Result<Option<ChatRecord>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT messages, language
            FROM chat_state
            WHERE id = 1
            ",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let messages_json: String = row
            .try_get("messages")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        let messages: Vec<MessageRecord> = serde_json::from_str(&messages_json)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        let language_code: String = row
            .try_get("language")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        let language = Language::from_code(&language_code).ok_or_else(|| {
            StorageError::Serialization(format!("unknown language code: {language_code}"))
        })?;

        Ok(Some(ChatRecord { messages, language }))
    }

    async fn save_chat(&self, record: &ChatRecord) -> Result<(), StorageError> {
        let messages_json = serde_json::to_string(&record.messages)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        sqlx::query(
            r"
            INSERT INTO chat_state (id, messages, language)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(id) DO UPDATE SET
                messages = excluded.messages,
                language = excluded.language
            ",
        )
        .bind(1_i64)
        .bind(messages_json)
        .bind(record.language.as_code())
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }
}
