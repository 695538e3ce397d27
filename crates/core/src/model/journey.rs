use std::collections::BTreeMap;

use thiserror::Error;

use crate::model::lesson::{LessonProgress, LessonProgressError};

/// Length of the standard coaching program.
pub const DEFAULT_TOTAL_DAYS: u32 = 30;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum JourneyError {
    #[error("journey length must be > 0")]
    InvalidTotalDays,

    #[error("day {day} is outside the journey range 1..={total_days}")]
    DayOutOfRange { day: u32, total_days: u32 },

    #[error("persisted current day {current_day} is invalid for a {total_days}-day journey")]
    InvalidPersistedCurrentDay { current_day: u32, total_days: u32 },

    #[error(transparent)]
    Lesson(#[from] LessonProgressError),
}

//
// ─── DAY STATUS ────────────────────────────────────────────────────────────────
//

/// Navigation/visual status of a single day in the journey.
///
/// `Locked` exists for interface compatibility with an earlier gated version
/// of the program. The current product keeps every day accessible, so
/// `JourneyProgress::day_status` never returns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    Locked,
    Current,
    InProgress,
    Completed,
}

//
// ─── JOURNEY PROGRESS ──────────────────────────────────────────────────────────
//

/// A learner's progress through the fixed-length day sequence.
///
/// Single source of truth for day completion, per-day lesson progress, and
/// the streak counter. All mutation goes through the operations below;
/// readers get immutable views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyProgress {
    total_days: u32,
    current_day: u32,
    completed_days: Vec<u32>,
    in_progress: BTreeMap<u32, LessonProgress>,
    streak_count: u32,
}

impl JourneyProgress {
    /// Creates a fresh journey of the given length, positioned on day 1.
    ///
    /// # Errors
    ///
    /// Returns `JourneyError::InvalidTotalDays` if `total_days` is zero.
    pub fn new(total_days: u32) -> Result<Self, JourneyError> {
        if total_days == 0 {
            return Err(JourneyError::InvalidTotalDays);
        }

        Ok(Self {
            total_days,
            current_day: 1,
            completed_days: Vec::new(),
            in_progress: BTreeMap::new(),
            streak_count: 0,
        })
    }

    /// The standard 30-day program.
    #[must_use]
    pub fn thirty_day() -> Self {
        Self {
            total_days: DEFAULT_TOTAL_DAYS,
            current_day: 1,
            completed_days: Vec::new(),
            in_progress: BTreeMap::new(),
            streak_count: 0,
        }
    }

    /// Rehydrates a journey from persisted storage.
    ///
    /// Duplicate completed-day entries written by older permissive versions
    /// are collapsed, keeping the first occurrence. `current_day` may be
    /// `total_days + 1`, which marks a finished journey.
    ///
    /// # Errors
    ///
    /// Returns `JourneyError` if the length is zero, `current_day` is out of
    /// range, or any day entry falls outside `1..=total_days`.
    pub fn from_persisted(
        total_days: u32,
        current_day: u32,
        completed_days: Vec<u32>,
        in_progress: Vec<(u32, LessonProgress)>,
        streak_count: u32,
    ) -> Result<Self, JourneyError> {
        if total_days == 0 {
            return Err(JourneyError::InvalidTotalDays);
        }
        if current_day < 1 || current_day > total_days + 1 {
            return Err(JourneyError::InvalidPersistedCurrentDay {
                current_day,
                total_days,
            });
        }

        let mut completed = Vec::with_capacity(completed_days.len());
        for day in completed_days {
            if day < 1 || day > total_days {
                return Err(JourneyError::DayOutOfRange { day, total_days });
            }
            if !completed.contains(&day) {
                completed.push(day);
            }
        }

        let mut lessons = BTreeMap::new();
        for (day, progress) in in_progress {
            if day < 1 || day > total_days {
                return Err(JourneyError::DayOutOfRange { day, total_days });
            }
            lessons.insert(day, progress);
        }

        Ok(Self {
            total_days,
            current_day,
            completed_days: completed,
            in_progress: lessons,
            streak_count,
        })
    }

    #[must_use]
    pub fn total_days(&self) -> u32 {
        self.total_days
    }

    #[must_use]
    pub fn current_day(&self) -> u32 {
        self.current_day
    }

    /// Completed days in completion order.
    #[must_use]
    pub fn completed_days(&self) -> &[u32] {
        &self.completed_days
    }

    #[must_use]
    pub fn streak_count(&self) -> u32 {
        self.streak_count
    }

    /// Lesson progress for a partially viewed day, if any.
    #[must_use]
    pub fn lesson_progress(&self, day: u32) -> Option<&LessonProgress> {
        self.in_progress.get(&day)
    }

    /// All partially viewed days with their progress, ordered by day.
    #[must_use]
    pub fn in_progress(&self) -> &BTreeMap<u32, LessonProgress> {
        &self.in_progress
    }

    #[must_use]
    pub fn completed_count(&self) -> u32 {
        u32::try_from(self.completed_days.len()).unwrap_or(u32::MAX)
    }

    /// Share of the journey completed, as a whole percentage.
    #[must_use]
    pub fn percent_complete(&self) -> u32 {
        self.completed_count() * 100 / self.total_days
    }

    /// True once the learner has moved past the last day.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.current_day > self.total_days
    }

    /// Status of a single day.
    ///
    /// Every not-yet-completed day without a lesson record reports
    /// `Current`: the program keeps all days accessible, so nothing ever
    /// reports `Locked`.
    ///
    /// # Errors
    ///
    /// Returns `JourneyError::DayOutOfRange` if `day` is outside
    /// `1..=total_days`.
    pub fn day_status(&self, day: u32) -> Result<DayStatus, JourneyError> {
        self.check_day(day)?;

        if self.completed_days.contains(&day) {
            return Ok(DayStatus::Completed);
        }
        if self.in_progress.contains_key(&day) {
            return Ok(DayStatus::InProgress);
        }

        Ok(DayStatus::Current)
    }

    /// Records partial lesson progress for a day.
    ///
    /// Inserts or replaces the day's entry. Leaves `current_day`,
    /// `completed_days`, and `streak_count` untouched; calling twice with
    /// the same arguments yields the same state.
    ///
    /// # Errors
    ///
    /// Returns `JourneyError::DayOutOfRange` if `day` is outside
    /// `1..=total_days`.
    pub fn record_lesson_progress(
        &mut self,
        day: u32,
        progress: LessonProgress,
    ) -> Result<(), JourneyError> {
        self.check_day(day)?;
        self.in_progress.insert(day, progress);
        Ok(())
    }

    /// Marks a day complete, as one atomic transition: the day joins
    /// `completed_days`, its lesson record is dropped, `current_day` moves
    /// to `day + 1`, and the streak grows by one.
    ///
    /// Re-completing an already-completed day is accepted (the streak and
    /// `current_day` still update) but the day is not recorded twice.
    ///
    /// # Errors
    ///
    /// Returns `JourneyError::DayOutOfRange` if `day` is outside
    /// `1..=total_days`.
    pub fn complete_day(&mut self, day: u32) -> Result<(), JourneyError> {
        self.check_day(day)?;

        if !self.completed_days.contains(&day) {
            self.completed_days.push(day);
        }
        self.in_progress.remove(&day);
        self.current_day = day + 1;
        self.streak_count = self.streak_count.saturating_add(1);
        Ok(())
    }

    /// Moves to the next day without completing the current one, clamped to
    /// the last day of the program.
    pub fn advance_day(&mut self) {
        self.current_day = (self.current_day + 1).min(self.total_days);
    }

    /// Restores the default state, preserving the configured length.
    pub fn reset(&mut self) {
        self.current_day = 1;
        self.completed_days.clear();
        self.in_progress.clear();
        self.streak_count = 0;
    }

    fn check_day(&self, day: u32) -> Result<(), JourneyError> {
        if day < 1 || day > self.total_days {
            return Err(JourneyError::DayOutOfRange {
                day,
                total_days: self.total_days,
            });
        }
        Ok(())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_progress() -> LessonProgress {
        LessonProgress::new(3, 1, 0).unwrap()
    }

    #[test]
    fn fresh_journey_starts_on_day_one() {
        let journey = JourneyProgress::thirty_day();
        assert_eq!(journey.total_days(), 30);
        assert_eq!(journey.current_day(), 1);
        assert_eq!(journey.streak_count(), 0);
        assert!(journey.completed_days().is_empty());
        assert_eq!(journey.day_status(1).unwrap(), DayStatus::Current);
    }

    #[test]
    fn zero_length_journey_is_rejected() {
        assert!(matches!(
            JourneyProgress::new(0).unwrap_err(),
            JourneyError::InvalidTotalDays
        ));
    }

    #[test]
    fn recording_progress_marks_day_in_progress() {
        let mut journey = JourneyProgress::thirty_day();
        journey.record_lesson_progress(1, sample_progress()).unwrap();

        assert_eq!(journey.day_status(1).unwrap(), DayStatus::InProgress);
        assert_eq!(journey.current_day(), 1);
        assert!(journey.completed_days().is_empty());
        assert_eq!(journey.streak_count(), 0);
    }

    #[test]
    fn recording_progress_twice_is_idempotent() {
        let mut journey = JourneyProgress::thirty_day();
        journey.record_lesson_progress(4, sample_progress()).unwrap();
        let first = journey.clone();
        journey.record_lesson_progress(4, sample_progress()).unwrap();
        assert_eq!(journey, first);
    }

    #[test]
    fn completing_a_day_advances_and_clears_lesson_record() {
        let mut journey = JourneyProgress::thirty_day();
        journey.record_lesson_progress(1, sample_progress()).unwrap();
        journey.complete_day(1).unwrap();

        assert_eq!(journey.day_status(1).unwrap(), DayStatus::Completed);
        assert_eq!(journey.current_day(), 2);
        assert_eq!(journey.streak_count(), 1);
        assert!(journey.lesson_progress(1).is_none());
    }

    #[test]
    fn completing_first_five_days_in_order() {
        let mut journey = JourneyProgress::thirty_day();
        for day in 1..=5 {
            journey.complete_day(day).unwrap();
        }

        assert_eq!(journey.completed_days(), &[1, 2, 3, 4, 5]);
        assert_eq!(journey.current_day(), 6);
        assert_eq!(journey.streak_count(), 5);
    }

    #[test]
    fn recompleting_a_day_keeps_a_single_entry() {
        let mut journey = JourneyProgress::thirty_day();
        journey.complete_day(3).unwrap();
        journey.complete_day(3).unwrap();

        assert_eq!(journey.completed_days(), &[3]);
        assert_eq!(journey.day_status(3).unwrap(), DayStatus::Completed);
        // The transition itself still applies in full.
        assert_eq!(journey.current_day(), 4);
        assert_eq!(journey.streak_count(), 2);
    }

    #[test]
    fn completing_the_last_day_finishes_the_journey() {
        let mut journey = JourneyProgress::new(3).unwrap();
        for day in 1..=3 {
            journey.complete_day(day).unwrap();
        }

        assert_eq!(journey.current_day(), 4);
        assert!(journey.is_finished());
        assert_eq!(journey.percent_complete(), 100);
    }

    #[test]
    fn out_of_range_days_are_rejected_everywhere() {
        let mut journey = JourneyProgress::thirty_day();

        assert!(matches!(
            journey.day_status(0).unwrap_err(),
            JourneyError::DayOutOfRange { day: 0, .. }
        ));
        assert!(matches!(
            journey.day_status(31).unwrap_err(),
            JourneyError::DayOutOfRange { day: 31, .. }
        ));
        assert!(journey.complete_day(31).is_err());
        assert!(
            journey
                .record_lesson_progress(31, sample_progress())
                .is_err()
        );
        // Failed calls leave the state untouched.
        assert_eq!(journey.current_day(), 1);
        assert_eq!(journey.streak_count(), 0);
    }

    #[test]
    fn no_day_ever_reports_locked() {
        let mut journey = JourneyProgress::thirty_day();
        journey.complete_day(1).unwrap();
        journey.record_lesson_progress(5, sample_progress()).unwrap();

        for day in 1..=30 {
            assert_ne!(journey.day_status(day).unwrap(), DayStatus::Locked);
        }
    }

    #[test]
    fn not_yet_completed_days_never_report_completed() {
        let mut journey = JourneyProgress::thirty_day();
        journey.complete_day(1).unwrap();

        for day in 2..=30 {
            assert_ne!(journey.day_status(day).unwrap(), DayStatus::Completed);
        }
    }

    #[test]
    fn advance_day_clamps_to_last_day() {
        let mut journey = JourneyProgress::new(2).unwrap();
        journey.advance_day();
        journey.advance_day();
        assert_eq!(journey.current_day(), 2);
    }

    #[test]
    fn reset_restores_defaults_but_keeps_length() {
        let mut journey = JourneyProgress::new(10).unwrap();
        journey.record_lesson_progress(2, sample_progress()).unwrap();
        journey.complete_day(1).unwrap();
        journey.complete_day(2).unwrap();

        journey.reset();

        assert_eq!(journey, JourneyProgress::new(10).unwrap());
    }

    #[test]
    fn from_persisted_collapses_duplicate_completions() {
        let journey = JourneyProgress::from_persisted(
            30,
            4,
            vec![1, 2, 2, 3],
            vec![(5, sample_progress())],
            4,
        )
        .unwrap();

        assert_eq!(journey.completed_days(), &[1, 2, 3]);
        assert_eq!(journey.day_status(5).unwrap(), DayStatus::InProgress);
        assert_eq!(journey.streak_count(), 4);
    }

    #[test]
    fn from_persisted_accepts_finished_sentinel() {
        let journey =
            JourneyProgress::from_persisted(3, 4, vec![1, 2, 3], Vec::new(), 3).unwrap();
        assert!(journey.is_finished());
    }

    #[test]
    fn from_persisted_rejects_out_of_range_entries() {
        assert!(matches!(
            JourneyProgress::from_persisted(3, 5, Vec::new(), Vec::new(), 0).unwrap_err(),
            JourneyError::InvalidPersistedCurrentDay { .. }
        ));
        assert!(matches!(
            JourneyProgress::from_persisted(3, 1, vec![4], Vec::new(), 0).unwrap_err(),
            JourneyError::DayOutOfRange { day: 4, .. }
        ));
        assert!(matches!(
            JourneyProgress::from_persisted(3, 1, Vec::new(), vec![(0, sample_progress())], 0)
                .unwrap_err(),
            JourneyError::DayOutOfRange { day: 0, .. }
        ));
    }
}
