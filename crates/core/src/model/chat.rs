use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

//
// ─── ROLE ──────────────────────────────────────────────────────────────────────
//

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

//
// ─── LANGUAGE ──────────────────────────────────────────────────────────────────
//

/// Languages the coach widget can be switched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
    De,
    Zh,
    Ja,
    Pt,
    Ar,
    Hi,
    Ru,
}

impl Language {
    /// Two-letter language code used on the wire and in storage.
    #[must_use]
    pub fn as_code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::De => "de",
            Language::Zh => "zh",
            Language::Ja => "ja",
            Language::Pt => "pt",
            Language::Ar => "ar",
            Language::Hi => "hi",
            Language::Ru => "ru",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|lang| lang.as_code() == code)
    }

    /// Every supported language, in selector order.
    #[must_use]
    pub fn all() -> [Self; 10] {
        [
            Language::En,
            Language::Es,
            Language::Fr,
            Language::De,
            Language::Zh,
            Language::Ja,
            Language::Pt,
            Language::Ar,
            Language::Hi,
            Language::Ru,
        ]
    }
}

//
// ─── MESSAGE ───────────────────────────────────────────────────────────────────
//

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Creates a message with a fresh random id.
    #[must_use]
    pub fn new(role: Role, content: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: at,
        }
    }

    /// Rehydrates a message from persisted storage.
    #[must_use]
    pub fn from_persisted(
        id: String,
        role: Role,
        content: String,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            role,
            content,
            timestamp,
        }
    }
}

//
// ─── CHAT LOG ──────────────────────────────────────────────────────────────────
//

/// Ordered transcript of the coach conversation plus the selected language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatLog {
    messages: Vec<Message>,
    language: Language,
}

impl ChatLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_persisted(messages: Vec<Message>, language: Language) -> Self {
        Self { messages, language }
    }

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn messages_get_distinct_ids() {
        let a = Message::new(Role::User, "hi", fixed_now());
        let b = Message::new(Role::User, "hi", fixed_now());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn log_preserves_message_order() {
        let mut log = ChatLog::new();
        log.push(Message::new(Role::User, "first", fixed_now()));
        log.push(Message::new(Role::Assistant, "second", fixed_now()));

        let contents: Vec<&str> = log.messages().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, ["first", "second"]);
    }

    #[test]
    fn clearing_keeps_language() {
        let mut log = ChatLog::new();
        log.set_language(Language::Ja);
        log.push(Message::new(Role::User, "hello", fixed_now()));
        log.clear();

        assert!(log.is_empty());
        assert_eq!(log.language(), Language::Ja);
    }

    #[test]
    fn language_codes_round_trip() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.as_code()), Some(lang));
        }
        assert_eq!(Language::from_code("xx"), None);
    }

    #[test]
    fn default_language_is_english() {
        assert_eq!(Language::default(), Language::En);
    }
}
