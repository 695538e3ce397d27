use std::sync::{Arc, Mutex, PoisonError};

use tracing::warn;

use journey_core::model::{DayStatus, JourneyError, JourneyProgress, LessonProgress};
use storage::repository::{JourneyRecord, JourneyRepository};

//
// ─── SNAPSHOT ──────────────────────────────────────────────────────────────────
//

/// Aggregated view of journey progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneySnapshot {
    pub current_day: u32,
    pub total_days: u32,
    pub completed_count: u32,
    pub percent_complete: u32,
    pub streak_count: u32,
    pub is_finished: bool,
}

//
// ─── SERVICE ───────────────────────────────────────────────────────────────────
//

/// Single source of truth for the learner's journey progress.
///
/// Every mutation applies to the in-memory journey first, so it is visible
/// to readers by the time the call returns, and then writes through to the
/// repository. A persistence failure is logged and swallowed; the in-memory
/// state stays authoritative for the session.
pub struct JourneyService {
    journey: Mutex<JourneyProgress>,
    repo: Arc<dyn JourneyRepository>,
}

impl JourneyService {
    /// Rehydrates the journey from storage, starting fresh when nothing is
    /// stored or the stored record is unreadable.
    ///
    /// # Errors
    ///
    /// Returns `JourneyError::InvalidTotalDays` if `total_days` is zero.
    pub async fn load(
        repo: Arc<dyn JourneyRepository>,
        total_days: u32,
    ) -> Result<Self, JourneyError> {
        let journey = match repo.load_journey().await {
            Ok(Some(record)) => match record.into_journey() {
                Ok(journey) => journey,
                Err(err) => {
                    warn!(error = %err, "stored journey is malformed, starting fresh");
                    JourneyProgress::new(total_days)?
                }
            },
            Ok(None) => JourneyProgress::new(total_days)?,
            Err(err) => {
                warn!(error = %err, "could not read stored journey, starting fresh");
                JourneyProgress::new(total_days)?
            }
        };

        Ok(Self {
            journey: Mutex::new(journey),
            repo,
        })
    }

    /// Status of a single day.
    ///
    /// # Errors
    ///
    /// Returns `JourneyError::DayOutOfRange` for days outside the program.
    pub fn day_status(&self, day: u32) -> Result<DayStatus, JourneyError> {
        self.lock().day_status(day)
    }

    /// Lesson progress recorded for a day, if any.
    #[must_use]
    pub fn lesson_progress(&self, day: u32) -> Option<LessonProgress> {
        self.lock().lesson_progress(day).cloned()
    }

    #[must_use]
    pub fn snapshot(&self) -> JourneySnapshot {
        let journey = self.lock();
        JourneySnapshot {
            current_day: journey.current_day(),
            total_days: journey.total_days(),
            completed_count: journey.completed_count(),
            percent_complete: journey.percent_complete(),
            streak_count: journey.streak_count(),
            is_finished: journey.is_finished(),
        }
    }

    /// Marks a day complete and writes the new state through to storage.
    ///
    /// # Errors
    ///
    /// Returns `JourneyError::DayOutOfRange` for days outside the program;
    /// persistence failures are logged, not returned.
    pub async fn complete_day(&self, day: u32) -> Result<(), JourneyError> {
        let record = {
            let mut journey = self.lock();
            journey.complete_day(day)?;
            JourneyRecord::from_journey(&journey)
        };
        self.persist(record).await;
        Ok(())
    }

    /// Records partial lesson progress for a day and writes through.
    ///
    /// # Errors
    ///
    /// Returns `JourneyError::DayOutOfRange` for days outside the program;
    /// persistence failures are logged, not returned.
    pub async fn record_lesson_progress(
        &self,
        day: u32,
        progress: LessonProgress,
    ) -> Result<(), JourneyError> {
        let record = {
            let mut journey = self.lock();
            journey.record_lesson_progress(day, progress)?;
            JourneyRecord::from_journey(&journey)
        };
        self.persist(record).await;
        Ok(())
    }

    /// Moves to the next day without completing the current one.
    pub async fn advance_day(&self) {
        let record = {
            let mut journey = self.lock();
            journey.advance_day();
            JourneyRecord::from_journey(&journey)
        };
        self.persist(record).await;
    }

    /// Wipes all progress, keeping the configured journey length.
    pub async fn reset(&self) {
        let record = {
            let mut journey = self.lock();
            journey.reset();
            JourneyRecord::from_journey(&journey)
        };
        self.persist(record).await;
    }

    async fn persist(&self, record: JourneyRecord) {
        if let Err(err) = self.repo.save_journey(&record).await {
            warn!(error = %err, "failed to persist journey progress");
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, JourneyProgress> {
        self.journey.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
