//! The message log for a conversation session.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single transcript entry. Created once, never mutated; the only way
/// an entry leaves the transcript is a full session reset.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub text: String,
    pub is_user: bool,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,
}

impl Message {
    pub fn user(text: &str) -> Self {
        Message {
            text: text.to_string(),
            is_user: true,
            timestamp: Utc::now(),
            intent: None,
        }
    }

    pub fn assistant(text: &str, intent: Option<String>) -> Self {
        Message {
            text: text.to_string(),
            is_user: false,
            timestamp: Utc::now(),
            intent,
        }
    }
}

/// Ordered log of messages; insertion order is conversational order.
/// Append-only, aside from `clear` which backs the session reset.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Transcript(Vec<Message>);

impl Transcript {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn messages(&self) -> Vec<Message> {
        self.0.clone()
    }

    pub fn push(&mut self, msg: Message) {
        self.0.push(msg)
    }

    pub fn last(&self) -> Option<&Message> {
        self.0.last()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_user() {
        let msg = Message::user("What's my leave balance?");
        assert_eq!(msg.text, "What's my leave balance?");
        assert!(msg.is_user);
        assert_eq!(msg.intent, None);
    }

    #[test]
    fn test_message_assistant() {
        let msg = Message::assistant("You have 12 days", Some("leave_balance".to_string()));
        assert_eq!(msg.text, "You have 12 days");
        assert!(!msg.is_user);
        assert_eq!(msg.intent, Some("leave_balance".to_string()));
    }

    #[test]
    fn test_message_serialization_shape() {
        let msg = Message {
            text: "hi".to_string(),
            is_user: true,
            timestamp: DateTime::parse_from_rfc3339("2024-03-01T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            intent: None,
        };
        assert_eq!(
            serde_json::to_string(&msg).unwrap(),
            r#"{"text":"hi","isUser":true,"timestamp":"2024-03-01T10:00:00Z"}"#
        );
    }

    #[test]
    fn test_transcript_preserves_order() {
        let mut transcript = Transcript::new();
        transcript.push(Message::user("first"));
        transcript.push(Message::assistant("second", None));
        transcript.push(Message::user("third"));

        let texts: Vec<&str> = transcript.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript.last().unwrap().text, "third");
    }

    #[test]
    fn test_transcript_clear() {
        let mut transcript = Transcript::new();
        transcript.push(Message::user("hello"));
        assert!(!transcript.is_empty());

        transcript.clear();
        assert!(transcript.is_empty());
        assert_eq!(transcript.len(), 0);
    }
}
