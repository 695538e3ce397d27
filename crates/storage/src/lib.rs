#![forbid(unsafe_code)]

pub mod repository;
pub mod sqlite;

pub use repository::{
    ChatRecord, ChatRepository, InMemoryRepository, JourneyRecord, JourneyRepository,
    LessonProgressRecord, MessageRecord, Storage, StorageError,
};
pub use sqlite::{SqliteInitError, SqliteRepository};
