use thiserror::Error;

use crate::model::{JourneyError, LessonProgressError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Journey(#[from] JourneyError),
    #[error(transparent)]
    LessonProgress(#[from] LessonProgressError),
}
