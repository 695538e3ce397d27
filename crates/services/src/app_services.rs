use std::sync::Arc;

use journey_core::Clock;
use journey_core::model::DEFAULT_TOTAL_DAYS;
use storage::repository::Storage;

use crate::chat_service::ChatService;
use crate::coach::CoachClient;
use crate::error::AppServicesError;
use crate::journey_service::JourneyService;
use crate::onboarding_service::OnboardingService;

/// Assembles the app-facing services over a storage backend.
///
/// This is the single initialization step of the state layer: construct it
/// once at startup, hand the service handles to the UI, and route every
/// mutation through them.
#[derive(Clone)]
pub struct AppServices {
    journey: Arc<JourneyService>,
    chat: Arc<ChatService>,
    onboarding: Arc<OnboardingService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization or journey
    /// rehydration fails.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        coach: Arc<dyn CoachClient>,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Self::with_storage(storage, clock, coach).await
    }

    /// Build services over an already-constructed storage backend.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if journey rehydration fails.
    pub async fn with_storage(
        storage: Storage,
        clock: Clock,
        coach: Arc<dyn CoachClient>,
    ) -> Result<Self, AppServicesError> {
        let journey = Arc::new(
            JourneyService::load(Arc::clone(&storage.journeys), DEFAULT_TOTAL_DAYS).await?,
        );
        let chat = Arc::new(ChatService::load(Arc::clone(&storage.chats), coach, clock).await);
        let onboarding = Arc::new(OnboardingService::new());

        Ok(Self {
            journey,
            chat,
            onboarding,
        })
    }

    #[must_use]
    pub fn journey(&self) -> Arc<JourneyService> {
        Arc::clone(&self.journey)
    }

    #[must_use]
    pub fn chat(&self) -> Arc<ChatService> {
        Arc::clone(&self.chat)
    }

    #[must_use]
    pub fn onboarding(&self) -> Arc<OnboardingService> {
        Arc::clone(&self.onboarding)
    }
}
