mod chat;
mod curriculum;
mod journey;
mod lesson;
mod onboarding;

pub use chat::{ChatLog, Language, Message, Role};
pub use curriculum::{DayContent, DayStep, day_content};
pub use journey::{DEFAULT_TOTAL_DAYS, DayStatus, JourneyError, JourneyProgress};
pub use lesson::{LessonProgress, LessonProgressError};
pub use onboarding::{
    JourneyType, OnboardingAnswers, OnboardingFlow, OnboardingStep, OnboardingUpdate,
};
