use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::classifier::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub role: Role,
    pub content: String,
    pub code: Option<String>,
    pub language: Option<Language>,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::User,
            content: content.into(),
            code: None,
            language: None,
            created_at: Utc::now(),
        }
    }

    // The only constructor that sets `code`, so `code` and `language`
    // are always present or absent together.
    pub fn user_with_code(
        content: impl Into<String>,
        code: impl Into<String>,
        language: Language,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::User,
            content: content.into(),
            code: Some(code.into()),
            language: Some(language),
            created_at: Utc::now(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::Assistant,
            content: content.into(),
            code: None,
            language: None,
            created_at: Utc::now(),
        }
    }
}

/// Append-only conversation log plus the single-flight analysis flag.
/// Both transitions are synchronous; scheduling lives in the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    messages: Vec<Message>,
    analyzing: bool,
}

impl Session {
    pub fn new(welcome: Message) -> Self {
        Self { messages: vec![welcome], analyzing: false }
    }

    pub fn is_analyzing(&self) -> bool {
        self.analyzing
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Appends a user turn and enters the analyzing state. Returns false
    /// (leaving the log untouched) if an analysis is already in flight.
    pub fn begin_turn(&mut self, msg: Message) -> bool {
        if self.analyzing {
            return false;
        }
        self.messages.push(msg);
        self.analyzing = true;
        true
    }

    /// Appends the assistant reply and returns to idle. Returns None
    /// (leaving the log untouched) if no analysis is in flight.
    pub fn finish_turn(&mut self, text: impl Into<String>) -> Option<Message> {
        if !self.analyzing {
            return None;
        }
        let msg = Message::assistant(text);
        self.messages.push(msg.clone());
        self.analyzing = false;
        Some(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_with_welcome_seeded() {
        let session = Session::new(Message::assistant("hello"));
        assert!(!session.is_analyzing());
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].role, Role::Assistant);
    }

    #[test]
    fn begin_turn_appends_and_flips_analyzing() {
        let mut session = Session::new(Message::assistant("hello"));
        assert!(session.begin_turn(Message::user("review this")));
        assert!(session.is_analyzing());
        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.messages()[1].role, Role::User);
    }

    #[test]
    fn begin_turn_while_analyzing_is_a_noop() {
        let mut session = Session::new(Message::assistant("hello"));
        assert!(session.begin_turn(Message::user("first")));
        assert!(!session.begin_turn(Message::user("second")));
        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.messages()[1].content, "first");
    }

    #[test]
    fn finish_turn_only_legal_while_analyzing() {
        let mut session = Session::new(Message::assistant("hello"));
        assert!(session.finish_turn("nope").is_none());
        assert_eq!(session.messages().len(), 1);

        session.begin_turn(Message::user("go"));
        let reply = session.finish_turn("done").unwrap();
        assert_eq!(reply.role, Role::Assistant);
        assert!(!session.is_analyzing());
        assert_eq!(session.messages().len(), 3);
    }

    #[test]
    fn log_only_grows_and_keeps_order() {
        let mut session = Session::new(Message::assistant("hello"));
        for i in 0..4 {
            session.begin_turn(Message::user(format!("turn {i}")));
            session.finish_turn(format!("reply {i}"));
        }
        let contents: Vec<&str> = session.messages().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(
            contents,
            vec![
                "hello", "turn 0", "reply 0", "turn 1", "reply 1", "turn 2", "reply 2", "turn 3",
                "reply 3"
            ]
        );
    }

    #[test]
    fn code_and_language_are_present_or_absent_together() {
        let plain = Message::user("hello");
        assert!(plain.code.is_none() && plain.language.is_none());

        let coded = Message::user_with_code("review", "let x = 5", Language::JavaScript);
        assert!(coded.code.is_some() && coded.language.is_some());

        let reply = Message::assistant("looks fine");
        assert!(reply.code.is_none() && reply.language.is_none());
    }
}
