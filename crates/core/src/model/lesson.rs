use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LessonProgressError {
    #[error("viewed cards ({viewed}) exceed total cards ({total})")]
    ViewedExceedsTotal { viewed: u32, total: u32 },
}

/// Partial-completion record for a single day's lesson content.
///
/// Tracks how far through the day's cards the learner has gotten and how
/// many of its activities are done. Entries exist only for days that have
/// been opened but not yet completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonProgress {
    total_cards: u32,
    viewed_cards: u32,
    completed_activities: u32,
}

impl LessonProgress {
    /// Creates a progress record.
    ///
    /// # Errors
    ///
    /// Returns `LessonProgressError::ViewedExceedsTotal` if `viewed_cards`
    /// is greater than `total_cards`.
    pub fn new(
        total_cards: u32,
        viewed_cards: u32,
        completed_activities: u32,
    ) -> Result<Self, LessonProgressError> {
        if viewed_cards > total_cards {
            return Err(LessonProgressError::ViewedExceedsTotal {
                viewed: viewed_cards,
                total: total_cards,
            });
        }

        Ok(Self {
            total_cards,
            viewed_cards,
            completed_activities,
        })
    }

    #[must_use]
    pub fn total_cards(&self) -> u32 {
        self.total_cards
    }

    #[must_use]
    pub fn viewed_cards(&self) -> u32 {
        self.viewed_cards
    }

    #[must_use]
    pub fn completed_activities(&self) -> u32 {
        self.completed_activities
    }

    /// Share of the day's cards viewed so far, as a whole percentage.
    ///
    /// A lesson with no cards reports 0.
    #[must_use]
    pub fn percent_viewed(&self) -> u32 {
        if self.total_cards == 0 {
            return 0;
        }
        self.viewed_cards * 100 / self.total_cards
    }

    #[must_use]
    pub fn is_fully_viewed(&self) -> bool {
        self.total_cards > 0 && self.viewed_cards == self.total_cards
    }
}
