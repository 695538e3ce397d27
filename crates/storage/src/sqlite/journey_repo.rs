use async_trait::async_trait;
use sqlx::Row;

use crate::repository::{JourneyRecord, JourneyRepository, LessonProgressRecord, StorageError};

use super::SqliteRepository;

fn day_field(row: &sqlx::sqlite::SqliteRow, column: &str) -> Result<u32, StorageError> {
    let value: i64 = row
        .try_get(column)
        .map_err(|err| StorageError::Serialization(err.to_string()))?;
    u32::try_from(value)
        .map_err(|_| StorageError::Serialization(format!("column {column} out of range: {value}")))
}

#[async_trait]
impl JourneyRepository for SqliteRepository {
    async fn load_journey(&self) -> Result<Option<JourneyRecord>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT
                current_day,
                completed_days,
                in_progress_days,
                total_days,
                streak_count
            FROM journey_progress
            WHERE id = 1
            ",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let completed_json: String = row
            .try_get("completed_days")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        let completed_days: Vec<u32> = serde_json::from_str(&completed_json)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        let in_progress_json: String = row
            .try_get("in_progress_days")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        let in_progress_days: Vec<(u32, LessonProgressRecord)> =
            serde_json::from_str(&in_progress_json)
                .map_err(|err| StorageError::Serialization(err.to_string()))?;

        Ok(Some(JourneyRecord {
            current_day: day_field(&row, "current_day")?,
            completed_days,
            in_progress_days,
            total_days: day_field(&row, "total_days")?,
            streak_count: day_field(&row, "streak_count")?,
        }))
    }

    async fn save_journey(&self, record: &JourneyRecord) -> Result<(), StorageError> {
        let completed_json = serde_json::to_string(&record.completed_days)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        let in_progress_json = serde_json::to_string(&record.in_progress_days)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        sqlx::query(
            r"
            INSERT INTO journey_progress (
                id,
                current_day,
                completed_days,
                in_progress_days,
                total_days,
                streak_count
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ON CONFLICT(id) DO UPDATE SET
                current_day = excluded.current_day,
                completed_days = excluded.completed_days,
                in_progress_days = excluded.in_progress_days,
                total_days = excluded.total_days,
                streak_count = excluded.streak_count
            ",
        )
        .bind(1_i64)
        .bind(i64::from(record.current_day))
        .bind(completed_json)
        .bind(in_progress_json)
        .bind(i64::from(record.total_days))
        .bind(i64::from(record.streak_count))
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }
}
