#![forbid(unsafe_code)]

pub mod app_services;
pub mod chat_service;
pub mod coach;
pub mod error;
pub mod journey_service;
pub mod onboarding_service;

pub use journey_core::Clock;

pub use app_services::AppServices;
pub use chat_service::{CONNECTION_FALLBACK_REPLY, ChatService};
pub use coach::{CoachClient, CoachConfig, HttpCoachClient};
pub use error::{AppServicesError, CoachError};
pub use journey_service::{JourneyService, JourneySnapshot};
pub use onboarding_service::OnboardingService;
