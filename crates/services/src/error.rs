//! Shared error types for the services crate.

use thiserror::Error;

use journey_core::model::JourneyError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by the coach collaborator.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CoachError {
    #[error("coach endpoint is not configured")]
    Disabled,
    #[error("invalid coach endpoint URL")]
    InvalidEndpoint,
    #[error("coach returned an empty reply")]
    EmptyReply,
    #[error("coach request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Journey(#[from] JourneyError),
}
